/// HTTP service for the review moderation API.
/// Owns the wire representation (`star`, camelCase fields) and converts it
/// to and from the UI model, so stray wire fields never leak upward.
use gloo_net::http::{Request, RequestBuilder};
use leptos::logging::log;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::review::{PaginationMeta, Review, ReviewPatch, ReviewStatus};

const SESSION_TOKEN_KEY: &str = "session.token";

/// Every service failure collapses into one of these; `Display` is the
/// single human-readable message the rest of the app shows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("your session has expired, please sign in again")]
    Unauthorized,
    #[error("unexpected response from the server")]
    Decode,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// List query; unset fields are omitted from the request entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReviewQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<ReviewStatus>,
}

impl ReviewQuery {
    /// Explicit fields win over configured defaults.
    pub fn merge(self, defaults: ReviewQuery) -> ReviewQuery {
        ReviewQuery {
            page: self.page.or(defaults.page),
            limit: self.limit.or(defaults.limit),
            status: self.status.or(defaults.status),
        }
    }

    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(page) = self.page {
            parts.push(format!("page={page}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={}", urlencoding::encode(status.as_str())));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

/// One fetched page plus whatever pagination metadata the server included.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub meta: Option<PaginationMeta>,
}

// ---- wire types ------------------------------------------------------------

/// Incoming review record exactly as the API ships it.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct CommentRecord {
    id: u64,
    star: u8,
    #[serde(default)]
    comment: Option<String>,
    status: ReviewStatus,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    product_id: u64,
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CommentRecord {
    fn into_review(self) -> Review {
        let customer_name = match (self.first_name, self.last_name) {
            (None, None) => "unknown user".to_string(),
            (first, last) => {
                let mut name = first.unwrap_or_default();
                if let Some(last) = last {
                    if !name.is_empty() {
                        name.push(' ');
                    }
                    name.push_str(&last);
                }
                name
            }
        };
        let product_label = self
            .product_name
            .unwrap_or_else(|| format!("PROD-{}", self.product_id));
        Review {
            id: self.id,
            product_label,
            customer_name,
            rating: self.star,
            comment: self.comment.unwrap_or_default(),
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct WireMeta {
    #[serde(default)]
    total: u32,
    #[serde(default)]
    page: u32,
    #[serde(default)]
    limit: u32,
    #[serde(default)]
    last_page: u32,
}

impl From<WireMeta> for PaginationMeta {
    fn from(meta: WireMeta) -> Self {
        PaginationMeta {
            current_page: meta.page,
            last_page: meta.last_page,
            per_page: meta.limit,
            total: meta.total,
        }
    }
}

#[derive(Deserialize, Debug)]
struct ListCommentsResponse {
    comments: Vec<CommentRecord>,
    #[serde(default)]
    meta: Option<WireMeta>,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Outgoing PATCH body. This is the one real translation in the service:
/// the UI's `rating` becomes the wire field `star`, and a patch without a
/// rating must not grow a `star` key.
#[derive(Serialize, Debug, Clone, PartialEq)]
struct CommentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    star: Option<u8>,
}

impl From<&ReviewPatch> for CommentUpdate {
    fn from(patch: &ReviewPatch) -> Self {
        CommentUpdate {
            comment: patch.comment.clone(),
            status: patch.status,
            star: patch.rating,
        }
    }
}

// ---- client ----------------------------------------------------------------

/// Authenticated API client, constructed once and handed to whoever needs
/// it. The bearer token is captured at construction instead of being read
/// from storage inside each request path.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// Client bound to the browser session: picks up the persisted bearer
    /// token from local storage, if any.
    pub fn from_session(base_url: impl Into<String>) -> Self {
        Self::new(base_url, session_token())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// `GET /comments?page=&limit=&status=`, unset params omitted.
    pub async fn list_reviews(&self, query: &ReviewQuery) -> Result<ReviewPage, ApiError> {
        let url = format!("{}/comments{}", self.base_url, query.query_string());
        let response = self.authorize(Request::get(&url)).send().await?;
        check_status(&response).await?;
        let body: ListCommentsResponse =
            response.json().await.map_err(|_| ApiError::Decode)?;
        let reviews: Vec<Review> = body
            .comments
            .into_iter()
            .map(CommentRecord::into_review)
            .collect();
        log!("[API] listed {} reviews from {}", reviews.len(), url);
        Ok(ReviewPage {
            reviews,
            meta: body.meta.map(PaginationMeta::from),
        })
    }

    /// `PATCH /comments/{id}` with any subset of comment / status / rating.
    pub async fn update_review(&self, id: u64, patch: &ReviewPatch) -> Result<(), ApiError> {
        let url = format!("{}/comments/{id}", self.base_url);
        let body = CommentUpdate::from(patch);
        let response = self
            .authorize(Request::patch(&url))
            .json(&body)
            .map_err(|_| ApiError::Decode)?
            .send()
            .await?;
        check_status(&response).await?;
        log!("[API] updated review {id}");
        Ok(())
    }

    /// `DELETE /comments/{id}`.
    pub async fn delete_review(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/comments/{id}", self.base_url);
        let response = self.authorize(Request::delete(&url)).send().await?;
        check_status(&response).await?;
        log!("[API] deleted review {id}");
        Ok(())
    }
}

/// Normalizes non-2xx responses, surfacing the server's `message` field
/// when it sent one.
async fn check_status(response: &gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody { message: Some(msg) }) if !msg.is_empty() => msg,
        _ => format!("request failed (HTTP {status})"),
    };
    Err(ApiError::Status { status, message })
}

fn session_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(SESSION_TOKEN_KEY).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn patch_with_rating_transmits_star_only() {
        let patch = ReviewPatch {
            rating: Some(4),
            comment: Some("better than expected".to_string()),
            status: None,
        };
        let body = serde_json::to_value(CommentUpdate::from(&patch)).unwrap();
        assert_eq!(body.get("star"), Some(&json!(4)));
        assert_eq!(body.get("rating"), None);
        assert_eq!(body.get("comment"), Some(&json!("better than expected")));
        assert_eq!(body.get("status"), None);
    }

    #[test]
    fn patch_without_rating_does_not_grow_star() {
        let patch = ReviewPatch {
            rating: None,
            comment: Some("typo fixed".to_string()),
            status: None,
        };
        let body = serde_json::to_value(CommentUpdate::from(&patch)).unwrap();
        assert_eq!(body.get("star"), None);
        assert_eq!(body.get("rating"), None);
        assert_eq!(body.get("comment"), Some(&json!("typo fixed")));
    }

    #[test]
    fn status_only_patch_serializes_status_alone() {
        let patch = ReviewPatch {
            rating: None,
            comment: None,
            status: Some(ReviewStatus::Denied),
        };
        let body = serde_json::to_value(CommentUpdate::from(&patch)).unwrap();
        assert_eq!(body, json!({ "status": "DENIED" }));
    }

    #[test]
    fn wire_record_maps_star_and_names() {
        let record: CommentRecord = serde_json::from_value(json!({
            "id": 12,
            "star": 3,
            "comment": "solid",
            "status": "PENDING",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "productId": 7,
            "productName": "Mechanical keyboard",
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        let review = record.into_review();
        assert_eq!(review.rating, 3);
        assert_eq!(review.customer_name, "Ada Lovelace");
        assert_eq!(review.product_label, "Mechanical keyboard");
        assert_eq!(review.status, ReviewStatus::Pending);
        assert!(review.created_at.is_some());
    }

    #[test]
    fn wire_record_falls_back_for_missing_name_and_product() {
        let record: CommentRecord = serde_json::from_value(json!({
            "id": 9,
            "star": 5,
            "status": "VALIDED",
            "productId": 42
        }))
        .unwrap();
        let review = record.into_review();
        assert_eq!(review.customer_name, "unknown user");
        assert_eq!(review.product_label, "PROD-42");
        assert_eq!(review.comment, "");
    }

    #[test]
    fn partial_name_is_kept_as_is() {
        let record: CommentRecord = serde_json::from_value(json!({
            "id": 1,
            "star": 2,
            "status": "DENIED",
            "productId": 3,
            "lastName": "Okafor"
        }))
        .unwrap();
        assert_eq!(record.into_review().customer_name, "Okafor");
    }

    #[test]
    fn list_response_with_meta_deserializes() {
        let body: ListCommentsResponse = serde_json::from_value(json!({
            "comments": [],
            "meta": { "total": 31, "page": 2, "limit": 10, "lastPage": 4 },
            "message": "ok",
            "count": 0
        }))
        .unwrap();
        let meta = PaginationMeta::from(body.meta.unwrap());
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.last_page, 4);
        assert_eq!(meta.per_page, 10);
        assert_eq!(meta.total, 31);
    }

    #[test]
    fn query_string_omits_unset_params() {
        assert_eq!(ReviewQuery::default().query_string(), "");
        let query = ReviewQuery {
            page: Some(2),
            limit: None,
            status: Some(ReviewStatus::Pending),
        };
        assert_eq!(query.query_string(), "?page=2&status=PENDING");
        let full = ReviewQuery {
            page: Some(1),
            limit: Some(25),
            status: None,
        };
        assert_eq!(full.query_string(), "?page=1&limit=25");
    }

    #[test]
    fn merge_prefers_explicit_fields() {
        let defaults = ReviewQuery {
            page: Some(1),
            limit: Some(10),
            status: Some(ReviewStatus::Pending),
        };
        let merged = ReviewQuery {
            page: Some(3),
            limit: None,
            status: None,
        }
        .merge(defaults);
        assert_eq!(merged.page, Some(3));
        assert_eq!(merged.limit, Some(10));
        assert_eq!(merged.status, Some(ReviewStatus::Pending));
    }

    #[test]
    fn error_display_is_a_plain_message() {
        let err = ApiError::Status {
            status: 500,
            message: "database unavailable".to_string(),
        };
        let rendered: Value = Value::String(err.to_string());
        assert_eq!(rendered, json!("database unavailable"));
        assert_eq!(
            ApiError::Network("timed out".to_string()).to_string(),
            "could not reach the server: timed out"
        );
    }
}
