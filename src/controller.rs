/// Stateful orchestrator between the review views and the HTTP service.
/// `use_reviews` is the hook-shaped entry point: it hands back a `Copy`
/// bundle of signals the page reads and a handful of async operations that
/// are the only writers of that state.
use leptos::logging::error;
use leptos::*;

use crate::api::{ApiClient, ReviewQuery};
use crate::models::review::{PaginationMeta, Review, ReviewPatch};

#[derive(Clone, Copy)]
pub struct ReviewsController {
    pub reviews: RwSignal<Vec<Review>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub meta: RwSignal<Option<PaginationMeta>>,
    // Last effective page/limit/status; refresh and post-mutation reloads
    // reuse these verbatim.
    query: StoredValue<ReviewQuery>,
    client: StoredValue<ApiClient>,
}

/// Creates the controller and dispatches the initial load.
pub fn use_reviews(client: ApiClient, defaults: ReviewQuery) -> ReviewsController {
    let controller = ReviewsController {
        reviews: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        meta: create_rw_signal(None),
        query: store_value(defaults),
        client: store_value(client),
    };
    spawn_local(async move {
        controller.load(None).await;
    });
    controller
}

impl ReviewsController {
    /// Fetches a page of reviews. Explicit override fields win over the
    /// stored query, and the merged result becomes the new stored query.
    /// On failure the previous list and metadata are discarded, never shown
    /// stale next to an error. Loading is cleared on every path.
    pub async fn load(self, overrides: Option<ReviewQuery>) {
        self.loading.set(true);
        self.error.set(None);
        let query = match overrides {
            Some(overrides) => overrides.merge(self.query.get_value()),
            None => self.query.get_value(),
        };
        self.query.set_value(query);
        let client = self.client.get_value();
        match client.list_reviews(&query).await {
            Ok(page) => {
                let meta = page
                    .meta
                    .unwrap_or_else(|| PaginationMeta::single_page(page.reviews.len() as u32));
                self.meta.set(Some(meta));
                self.reviews.set(page.reviews);
            }
            Err(err) => {
                error!("[REVIEWS] load failed: {err}");
                self.error.set(Some(err.to_string()));
                self.reviews.set(Vec::new());
                self.meta.set(None);
            }
        }
        self.loading.set(false);
    }

    /// Reloads with the stored query, no overrides.
    pub async fn refresh(self) {
        self.load(None).await;
    }

    /// Applies a partial update, then resynchronizes the current page from
    /// the server. No optimistic local patching.
    pub async fn update(self, id: u64, patch: ReviewPatch) -> bool {
        self.loading.set(true);
        let client = self.client.get_value();
        match client.update_review(id, &patch).await {
            Ok(()) => {
                self.load(None).await;
                true
            }
            Err(err) => {
                error!("[REVIEWS] update of {id} failed: {err}");
                self.error.set(Some(err.to_string()));
                self.loading.set(false);
                false
            }
        }
    }

    /// Deletes a review, then resynchronizes the current page.
    pub async fn delete(self, id: u64) -> bool {
        self.loading.set(true);
        let client = self.client.get_value();
        match client.delete_review(id).await {
            Ok(()) => {
                self.load(None).await;
                true
            }
            Err(err) => {
                error!("[REVIEWS] delete of {id} failed: {err}");
                self.error.set(Some(err.to_string()));
                self.loading.set(false);
                false
            }
        }
    }

    /// Clears the visible error without touching list, metadata or loading.
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// The query a reload would use right now.
    pub fn current_query(&self) -> ReviewQuery {
        self.query.get_value()
    }
}
