//! Recording transport for client tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use saaswire::{ApiResponse, EngineError, RequestDescriptor, Result, Transport};
use serde_json::Value;

/// One call the stub received.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub base_url: String,
    pub request: RequestDescriptor,
    pub headers: Vec<(String, String)>,
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a 200 response with `body`.
    pub fn respond(&self, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(200, body)));
        self
    }

    /// Queue a failure.
    pub fn fail(&self, err: EngineError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(
        &self,
        base_url: &str,
        request: RequestDescriptor,
        headers: &[(String, String)],
    ) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            base_url: base_url.to_string(),
            request,
            headers: headers.to_vec(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(EngineError::network("no stubbed response left")))
    }
}
