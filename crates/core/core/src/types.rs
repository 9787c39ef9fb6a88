//! Core data types for Eventdesk.
//!
//! This module defines the canonical `User` and `Event` records plus the
//! incoming creation payload that resolves field aliasing before an
//! `Event` is built.

use serde::{Deserialize, Serialize};

/// A registered account that can hold event slots.
///
/// Users are immutable once created and are only ever created through the
/// explicit creation call; the wire shape and the stored shape are the
/// same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, chosen by the client.
    pub user_id: String,

    /// Display name.
    pub name: String,
}

impl User {
    /// Creates a new user record.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
        }
    }
}

/// An event with finite capacity and an optional waitlist.
///
/// `registered` keeps insertion order (registration order) and never grows
/// past `capacity`; `waitlist` is FIFO. A user id appears in at most one
/// of the two lists. Both lists are only ever mutated by the registration
/// engine after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier, chosen by the client.
    pub event_id: String,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Maximum number of registered users. Always greater than zero.
    pub capacity: i32,

    /// Whether overflow registrations queue on a waitlist.
    #[serde(default)]
    pub has_waitlist: bool,

    /// User ids holding a confirmed slot, in registration order.
    #[serde(default)]
    pub registered: Vec<String>,

    /// User ids queued behind capacity, in FIFO order.
    #[serde(default)]
    pub waitlist: Vec<String>,
}

impl Event {
    /// Returns true if the user holds a confirmed slot.
    pub fn is_registered(&self, user_id: &str) -> bool {
        self.registered.iter().any(|id| id == user_id)
    }

    /// Returns true if the user is queued on the waitlist.
    pub fn is_waitlisted(&self, user_id: &str) -> bool {
        self.waitlist.iter().any(|id| id == user_id)
    }

    /// Returns true if the user is registered or waitlisted.
    pub fn is_associated(&self, user_id: &str) -> bool {
        self.is_registered(user_id) || self.is_waitlisted(user_id)
    }

    /// Returns true if every slot counted against capacity is taken.
    pub fn is_full(&self) -> bool {
        self.registered.len() as i32 >= self.capacity
    }

    /// Remaining confirmed slots. Zero when full, never negative.
    pub fn available_spots(&self) -> i32 {
        self.capacity - self.registered.len() as i32
    }
}

/// Incoming payload for event creation.
///
/// The wire format accepts two spellings for the display name (`title`
/// wins over `name` when non-empty) and for the waitlist flag
/// (`waitlistEnabled` wins over `hasWaitlist`). [`Self::into_event`] is
/// the single normalization point: it resolves the aliases and discards
/// any supplied member lists, so a canonical [`Event`] never carries the
/// alternate field names.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub event_id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub organizer: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    pub capacity: i32,

    #[serde(default)]
    pub waitlist_enabled: Option<bool>,

    #[serde(default)]
    pub has_waitlist: Option<bool>,

    /// Ignored on creation; events always start with no members.
    #[serde(default)]
    pub registered: Vec<String>,

    /// Ignored on creation.
    #[serde(default)]
    pub waitlist: Vec<String>,
}

impl CreateEventRequest {
    /// Resolves field aliasing and builds the canonical event record.
    pub fn into_event(self) -> Event {
        let name = self.title.filter(|t| !t.is_empty()).or(self.name);
        let has_waitlist = self
            .waitlist_enabled
            .or(self.has_waitlist)
            .unwrap_or(false);

        Event {
            event_id: self.event_id,
            name,
            description: self.description,
            date: self.date,
            location: self.location,
            organizer: self.organizer,
            status: self.status,
            capacity: self.capacity,
            has_waitlist,
            registered: Vec::new(),
            waitlist: Vec::new(),
        }
    }
}

/// Registration snapshot returned by the event query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSnapshot {
    pub registered: Vec<String>,
    pub waitlist: Vec<String>,
    pub capacity: i32,
    pub available_spots: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(capacity: i32) -> CreateEventRequest {
        CreateEventRequest {
            event_id: "e1".into(),
            title: None,
            name: None,
            description: None,
            date: None,
            location: None,
            organizer: None,
            status: None,
            capacity,
            waitlist_enabled: None,
            has_waitlist: None,
            registered: Vec::new(),
            waitlist: Vec::new(),
        }
    }

    #[test]
    fn test_title_overrides_name() {
        let mut req = request(5);
        req.title = Some("Launch Party".into());
        req.name = Some("Old Name".into());
        assert_eq!(req.into_event().name.as_deref(), Some("Launch Party"));
    }

    #[test]
    fn test_empty_title_falls_back_to_name() {
        let mut req = request(5);
        req.title = Some("".into());
        req.name = Some("Kept".into());
        assert_eq!(req.into_event().name.as_deref(), Some("Kept"));
    }

    #[test]
    fn test_waitlist_flag_aliasing() {
        let mut req = request(5);
        req.waitlist_enabled = Some(false);
        req.has_waitlist = Some(true);
        assert!(!req.into_event().has_waitlist);

        let mut req = request(5);
        req.has_waitlist = Some(true);
        assert!(req.into_event().has_waitlist);

        let req = request(5);
        assert!(!req.into_event().has_waitlist);
    }

    #[test]
    fn test_member_lists_forced_empty() {
        let mut req = request(5);
        req.registered = vec!["u1".into()];
        req.waitlist = vec!["u2".into()];
        let event = req.into_event();
        assert!(event.registered.is_empty());
        assert!(event.waitlist.is_empty());
    }

    #[test]
    fn test_membership_helpers() {
        let mut event = request(2).into_event();
        event.registered.push("u1".into());
        event.waitlist.push("u2".into());

        assert!(event.is_registered("u1"));
        assert!(!event.is_registered("u2"));
        assert!(event.is_waitlisted("u2"));
        assert!(event.is_associated("u1"));
        assert!(event.is_associated("u2"));
        assert!(!event.is_associated("u3"));
        assert!(!event.is_full());
        assert_eq!(event.available_spots(), 1);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let event = request(3).into_event();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventId"], "e1");
        assert_eq!(json["hasWaitlist"], false);
        assert!(json.get("title").is_none());

        let user = User::new("u1", "Ada");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userId"], "u1");
    }
}
