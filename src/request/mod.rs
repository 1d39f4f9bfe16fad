//! Provider-agnostic description of one API call.

use std::fmt;

use serde_json::Value;

use crate::error::{EngineError, Result};

/// HTTP methods the vendor APIs are called with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// One call: method, relative path, ordered query and optional JSON body.
///
/// Query parameters keep insertion order. Built with the chained helpers and
/// then moved into the transport, which consumes it.
///
/// ```
/// use saaswire::request::{Method, RequestDescriptor};
///
/// let req = RequestDescriptor::get("/crm/v3/objects/contacts")
///     .query("limit", "10")
///     .query("properties", "email,firstname");
/// assert_eq!(req.method(), Method::Get);
/// assert_eq!(
///     req.url("https://api.hubapi.com").unwrap(),
///     "https://api.hubapi.com/crm/v3/objects/contacts?limit=10&properties=email%2Cfirstname"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Append one query parameter. Repeated keys are kept as-is.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter only when `value` is present.
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Query string without the leading `?`, form-encoded in insertion order.
    pub fn query_string(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.query)
            .map_err(|e| EngineError::configuration(format!("unencodable query: {}", e)))
    }

    /// Full URL: `base_url + path`, plus the query string when non-empty.
    pub fn url(&self, base_url: &str) -> Result<String> {
        let mut url = format!("{}{}", base_url, self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query_string()?);
        }
        Ok(url)
    }

    /// JSON bytes of the body, if any.
    pub fn body_bytes(&self) -> Result<Option<Vec<u8>>> {
        self.body
            .as_ref()
            .map(|body| {
                serde_json::to_vec(body)
                    .map_err(|e| EngineError::configuration(format!("unencodable body: {}", e)))
            })
            .transpose()
    }
}

/// Percent-encode one path segment (an id supplied by the caller).
pub fn path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
