use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::connectors::parse_timestamp;

/// Ticket as returned by the tickets and search endpoints.
#[derive(Debug, Deserialize)]
pub struct TicketObject {
    pub id: u64,
    pub subject: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub created_at: Option<String>,
    pub description: Option<String>,
}

/// Listing response. The tickets endpoint answers with `tickets`, the search
/// endpoint with `results`.
#[derive(Debug, Deserialize)]
pub struct TicketList {
    pub tickets: Option<Vec<TicketObject>>,
    pub results: Option<Vec<TicketObject>>,
}

impl TicketList {
    pub fn into_tickets(self) -> Vec<TicketObject> {
        self.tickets.or(self.results).unwrap_or_default()
    }
}

/// The authenticated agent.
#[derive(Debug, Default, Deserialize)]
pub struct User {
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Ticket lifecycle state. Anything missing or unrecognised is `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    New,
    Open,
    Pending,
    Hold,
    Solved,
    Closed,
    Unknown,
}

impl TicketStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("new") => TicketStatus::New,
            Some("open") => TicketStatus::Open,
            Some("pending") => TicketStatus::Pending,
            Some("hold") => TicketStatus::Hold,
            Some("solved") => TicketStatus::Solved,
            Some("closed") => TicketStatus::Closed,
            _ => TicketStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::Open => "open",
            TicketStatus::Pending => "pending",
            TicketStatus::Hold => "hold",
            TicketStatus::Solved => "solved",
            TicketStatus::Closed => "closed",
            TicketStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized ticket. `description` is never truncated here.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ticket {
    pub id: u64,
    pub subject: Option<String>,
    pub status: TicketStatus,
    pub priority: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl From<TicketObject> for Ticket {
    fn from(object: TicketObject) -> Self {
        Self {
            id: object.id,
            status: TicketStatus::from_raw(object.status.as_deref()),
            created_at: parse_timestamp(object.created_at.as_deref()),
            subject: object.subject,
            priority: object.priority,
            description: object.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(TicketStatus::from_raw(Some("open")), TicketStatus::Open);
        assert_eq!(TicketStatus::from_raw(Some("solved")), TicketStatus::Solved);
        assert_eq!(TicketStatus::from_raw(Some("escalated")), TicketStatus::Unknown);
        assert_eq!(TicketStatus::from_raw(None), TicketStatus::Unknown);
    }

    #[test]
    fn test_ticket_list_falls_back_to_results() {
        let list: TicketList =
            serde_json::from_value(json!({"results": [{"id": 3}], "count": 1})).unwrap();
        let tickets = list.into_tickets();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, 3);

        let empty: TicketList = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_tickets().is_empty());
    }

    #[test]
    fn test_ticket_conversion() {
        let object: TicketObject = serde_json::from_value(json!({
            "id": 12,
            "subject": "Printer on fire",
            "created_at": "2024-02-01T09:15:00Z",
            "description": "It is really on fire"
        }))
        .unwrap();
        let ticket = Ticket::from(object);
        assert_eq!(ticket.status, TicketStatus::Unknown);
        assert_eq!(ticket.created_at.unwrap().to_rfc3339(), "2024-02-01T09:15:00+00:00");
        assert_eq!(ticket.priority, None);
    }
}
