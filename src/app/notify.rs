use chrono::{DateTime, Utc};
use uuid::Uuid;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    JobAlert,
    ApplicationReceived,
    ProfileView,
}

/// One entry in the in-app notification feed.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    /// Listing or profile the notice points at, when there is one.
    pub related_id: Option<String>,
}

impl Notice {
    /// Alert a candidate about a listing that matches their profile.
    pub fn job_alert(message: impl Into<String>, listing_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NoticeKind::JobAlert,
            title: "Match found!".to_string(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
            related_id: Some(listing_id.into()),
        }
    }

    /// Tell an employer a candidate applied to one of their postings.
    pub fn application_received(listing_title: &str, listing_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NoticeKind::ApplicationReceived,
            title: "New application".to_string(),
            message: format!("Someone applied to your {listing_title} posting."),
            created_at: Utc::now(),
            read: false,
            related_id: Some(listing_id.into()),
        }
    }
}
