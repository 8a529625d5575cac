// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation state of a review. The wire spelling of the approved state
/// is `VALIDED`, which the API treats as a fixed enumerated set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Valided,
    Denied,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "PENDING",
            ReviewStatus::Valided => "VALIDED",
            ReviewStatus::Denied => "DENIED",
        }
    }

    /// Human label for the list view badge.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Valided => "Approved",
            ReviewStatus::Denied => "Denied",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "badge badge-pending",
            ReviewStatus::Valided => "badge badge-valided",
            ReviewStatus::Denied => "badge badge-denied",
        }
    }
}

/// A customer review as the UI consumes it. Instances only ever come from
/// the server; the client reads, patches or deletes them by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: u64,                // Server-assigned identifier
    pub product_label: String,  // Product name, or a synthesized placeholder
    pub customer_name: String,  // Display name of the author
    pub rating: u8,             // 1-5, clamped by the editing UI
    pub comment: String,        // Free text, may be empty
    pub status: ReviewStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pagination envelope kept alongside the loaded page.
/// Invariant: 1 <= current_page <= last_page whenever last_page >= 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u32,
}

impl PaginationMeta {
    /// Envelope for a server that returned a list without any metadata:
    /// everything it sent is the one and only page.
    pub fn single_page(count: u32) -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: count,
            total: count,
        }
    }
}

/// Caller-facing partial update. Unset fields are left untouched by the
/// server; the service layer renames `rating` to the wire field on the
/// way out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPatch {
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub status: Option<ReviewStatus>,
}

/// What the edit form emits on submit: exactly the two editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}
