use serde::{Deserialize, Deserializer, Serialize};

use crate::error::BoardError;

/// Default endpoint serving the board payload.
pub const DEFAULT_SOURCE_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Ticket status, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Backlog,
    Todo,
    #[serde(rename = "In progress")]
    InProgress,
    Done,
    Canceled,
}

enum_display_fromstr!(
    TicketStatus,
    BoardError::InvalidStatus,
    {
        Backlog => "Backlog",
        Todo => "Todo",
        InProgress => "In progress",
        Done => "Done",
        Canceled => "Canceled",
    }
);

impl TicketStatus {
    /// Every status, lowest rank first.
    pub const ALL: [TicketStatus; 5] = [
        TicketStatus::Backlog,
        TicketStatus::Todo,
        TicketStatus::InProgress,
        TicketStatus::Done,
        TicketStatus::Canceled,
    ];

    /// Exact match against the wire value. Unlike `FromStr`, case matters here.
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Ticket priority on the 0 (no priority) to 4 (urgent) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TicketPriority {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    /// Every priority, least urgent first.
    pub const ALL: [TicketPriority; 5] = [
        TicketPriority::NoPriority,
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];

    pub fn as_num(&self) -> u8 {
        match self {
            TicketPriority::NoPriority => 0,
            TicketPriority::Low => 1,
            TicketPriority::Medium => 2,
            TicketPriority::High => 3,
            TicketPriority::Urgent => 4,
        }
    }

    pub fn from_num(n: i64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_num())
    }
}

/// Which ticket attribute partitions the board into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    #[default]
    Status,
    Priority,
    User,
}

enum_display_fromstr!(
    GroupingMode,
    BoardError::InvalidGrouping,
    {
        Status => "status",
        Priority => "priority",
        User => "user",
    }
);

/// Comparator applied to the tickets inside each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingMode {
    #[default]
    Priority,
    Title,
}

enum_display_fromstr!(
    OrderingMode,
    BoardError::InvalidOrdering,
    {
        Priority => "priority",
        Title => "title",
    }
);

/// A ticket as delivered by the board endpoint.
///
/// `status` and `priority` keep their raw wire values; they are checked against
/// the closed enumerations when the grid is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(rename = "userId", deserialize_with = "string_or_integer")]
    pub user_id: String,
    pub status: String,
    pub priority: i64,
}

/// A user record. `available` drives the presence dot on badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

/// The JSON document served by the board endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPayload {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Identifiers arrive as either JSON strings or integers; both become string keys.
fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        I64(i64),
        U64(u64),
    }

    Ok(match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s,
        StringOrInt::I64(n) => n.to_string(),
        StringOrInt::U64(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_from_wire_is_exact() {
        assert_eq!(
            TicketStatus::from_wire("In progress"),
            Some(TicketStatus::InProgress)
        );
        assert_eq!(TicketStatus::from_wire("todo"), None);
        assert_eq!(TicketStatus::from_wire("Blocked"), None);
    }

    #[test]
    fn test_status_from_str_ignores_case() {
        assert_eq!(TicketStatus::from_str("todo").unwrap(), TicketStatus::Todo);
        assert_eq!(
            TicketStatus::from_str("IN PROGRESS").unwrap(),
            TicketStatus::InProgress
        );
        assert!(TicketStatus::from_str("in-progress").is_err());
    }

    #[test]
    fn test_status_order_matches_all() {
        let mut sorted = TicketStatus::ALL;
        sorted.sort();
        assert_eq!(sorted, TicketStatus::ALL);
    }

    #[test]
    fn test_priority_from_num() {
        assert_eq!(TicketPriority::from_num(0), Some(TicketPriority::NoPriority));
        assert_eq!(TicketPriority::from_num(4), Some(TicketPriority::Urgent));
        assert_eq!(TicketPriority::from_num(5), None);
        assert_eq!(TicketPriority::from_num(-1), None);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(TicketPriority::High.to_string(), "3");
    }

    #[test]
    fn test_mode_defaults() {
        assert_eq!(GroupingMode::default(), GroupingMode::Status);
        assert_eq!(OrderingMode::default(), OrderingMode::Priority);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(GroupingMode::from_str("User").unwrap(), GroupingMode::User);
        assert_eq!(OrderingMode::from_str("TITLE").unwrap(), OrderingMode::Title);
        assert!(matches!(
            GroupingMode::from_str("assignee"),
            Err(BoardError::InvalidGrouping(_))
        ));
        assert!(matches!(
            OrderingMode::from_str("created"),
            Err(BoardError::InvalidOrdering(_))
        ));
    }

    #[test]
    fn test_payload_deserialization() {
        let json = r#"{
            "tickets": [
                {"id": "CAM-1", "title": "Update profile", "tag": ["Feature request"],
                 "userId": "usr-1", "status": "Todo", "priority": 4}
            ],
            "users": [{"id": "usr-1", "name": "Anoop sharma", "available": false}]
        }"#;
        let payload: BoardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.tickets[0].user_id, "usr-1");
        assert_eq!(payload.tickets[0].priority, 4);
        assert_eq!(payload.users[0].name, "Anoop sharma");
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        let json = r#"{
            "tickets": [{"id": 1, "title": "x", "userId": 7, "status": "Todo", "priority": 0}],
            "users": [{"id": 7, "name": "Ada", "available": true}]
        }"#;
        let payload: BoardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.tickets[0].id, "1");
        assert_eq!(payload.tickets[0].user_id, "7");
        assert_eq!(payload.users[0].id, "7");
    }

    #[test]
    fn test_non_scalar_id_is_rejected() {
        let json = r#"{"id": [1], "title": "x", "userId": "U1", "status": "Todo", "priority": 0}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_ticket_tag_defaults_to_empty() {
        let json = r#"{"id": "T1", "title": "x", "userId": "U1", "status": "Todo", "priority": 0}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert!(ticket.tag.is_empty());
    }
}
