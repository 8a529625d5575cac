/// Admin list view for customer reviews: paginated table, same-page search
/// filter, page-size selector, and the edit/delete flows.
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, ReviewQuery};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::pagination::Pagination;
use crate::components::review_edit_modal::ReviewEditModal;
use crate::components::toast::{use_toasts, ToastStack};
use crate::controller::use_reviews;
use crate::models::review::{Review, ReviewDraft, ReviewPatch};

const DEFAULT_PAGE_SIZE: u32 = 10;
const PAGE_SIZES: [u32; 3] = [10, 25, 50];

/// Case-insensitive match against the fields a moderator scans for.
/// Applies to the fetched page only; a hit on another page stays invisible
/// until the user navigates there.
pub fn matches_search(review: &Review, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    review.customer_name.to_lowercase().contains(&needle)
        || review.product_label.to_lowercase().contains(&needle)
        || review.comment.to_lowercase().contains(&needle)
}

fn star_row(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toasts = use_toasts();
    let controller = use_reviews(
        client,
        ReviewQuery {
            page: Some(1),
            limit: Some(DEFAULT_PAGE_SIZE),
            status: None,
        },
    );

    let (search, set_search) = create_signal(String::new());
    let (page_size, set_page_size) = create_signal(DEFAULT_PAGE_SIZE);
    let (edit_target, set_edit_target) = create_signal(None::<Review>);
    let (delete_target, set_delete_target) = create_signal(None::<Review>);

    let filtered = move || {
        let term = search.get();
        controller
            .reviews
            .get()
            .into_iter()
            .filter(|review| matches_search(review, &term))
            .collect::<Vec<_>>()
    };

    // Out-of-range selections are dropped without surfacing anything.
    let change_page = move |page: u32| {
        let Some(meta) = controller.meta.get_untracked() else {
            return;
        };
        if page == 0 || page > meta.last_page {
            return;
        }
        spawn_local(async move {
            controller
                .load(Some(ReviewQuery {
                    page: Some(page),
                    ..Default::default()
                }))
                .await;
        });
    };

    // A new page size always starts over from page 1.
    let change_page_size = move |ev| {
        let Ok(limit) = event_target_value(&ev).parse::<u32>() else {
            return;
        };
        set_page_size.set(limit);
        spawn_local(async move {
            controller
                .load(Some(ReviewQuery {
                    page: Some(1),
                    limit: Some(limit),
                    ..Default::default()
                }))
                .await;
        });
    };

    let refresh = move |_| {
        spawn_local(async move {
            controller.refresh().await;
        });
    };

    view! {
        <section class="reviews-page">
            <header class="page-header">
                <h2>{"Customer reviews"}</h2>
                <span class="review-count">
                    {move || controller.meta.get().map(|meta| format!("{} total", meta.total))}
                </span>
            </header>

            <div class="toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Filter this page by customer, product or comment"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select class="page-size-select" on:change=change_page_size prop:value=move || page_size.get().to_string()>
                    {PAGE_SIZES.iter().map(|size| view! {
                        <option value=size.to_string()>{format!("{size} per page")}</option>
                    }).collect::<Vec<_>>()}
                </select>
                <button class="button" on:click=refresh>{"Refresh"}</button>
            </div>

            {move || controller.error.get().map(|message| view! {
                <div class="error-panel">
                    <span>{message}</span>
                    <button class="button" on:click=move |_| controller.clear_error()>
                        {"Dismiss"}
                    </button>
                </div>
            })}

            <Show when=move || controller.loading.get()>
                <div class="loading-indicator">{"Loading reviews..."}</div>
            </Show>

            <table class="reviews-table">
                <thead>
                    <tr>
                        <th>{"Customer"}</th>
                        <th>{"Product"}</th>
                        <th>{"Rating"}</th>
                        <th>{"Comment"}</th>
                        <th>{"Status"}</th>
                        <th>{"Submitted"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=filtered
                        key=|review| review.id
                        children=move |review: Review| {
                            let edit_review = review.clone();
                            let delete_review = review.clone();
                            view! {
                                <tr>
                                    <td>{review.customer_name.clone()}</td>
                                    <td>{review.product_label.clone()}</td>
                                    <td class="rating-cell">{star_row(review.rating)}</td>
                                    <td class="comment-cell">{review.comment.clone()}</td>
                                    <td>
                                        <span class=review.status.css_class()>
                                            {review.status.label()}
                                        </span>
                                    </td>
                                    <td>
                                        {review.created_at
                                            .map(|ts| ts.format("%Y-%m-%d").to_string())
                                            .unwrap_or_default()}
                                    </td>
                                    <td class="actions-cell">
                                        <button
                                            class="button"
                                            on:click=move |_| set_edit_target.set(Some(edit_review.clone()))
                                        >
                                            {"Edit"}
                                        </button>
                                        <button
                                            class="button button-danger"
                                            on:click=move |_| set_delete_target.set(Some(delete_review.clone()))
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                    <Show when=move || !controller.loading.get() && filtered().is_empty()>
                        <tr>
                            <td colspan="7" class="empty-row">{"No reviews to show."}</td>
                        </tr>
                    </Show>
                </tbody>
            </table>

            <Pagination meta=controller.meta on_select=change_page/>

            {move || edit_target.get().map(|review| {
                let id = review.id;
                let on_submit = Callback::new(move |draft: ReviewDraft| {
                    spawn_local(async move {
                        let ok = controller
                            .update(
                                id,
                                ReviewPatch {
                                    rating: Some(draft.rating),
                                    comment: Some(draft.comment),
                                    status: None,
                                },
                            )
                            .await;
                        if ok {
                            set_edit_target.set(None);
                            toasts.success("Review updated");
                        } else {
                            let message = controller
                                .error
                                .get_untracked()
                                .unwrap_or_else(|| "Failed to update the review".to_string());
                            toasts.error(message);
                        }
                    });
                });
                view! {
                    <ReviewEditModal
                        review=Some(review)
                        on_submit=on_submit
                        on_close=Callback::new(move |_| set_edit_target.set(None))
                    />
                }
            })}

            {move || delete_target.get().map(|review| {
                let id = review.id;
                let message = format!(
                    "Are you sure you want to delete the review from {}? This action cannot be undone.",
                    review.customer_name
                );
                let on_confirm = Callback::new(move |_| {
                    // The dialog goes away no matter how the request ends.
                    set_delete_target.set(None);
                    spawn_local(async move {
                        if controller.delete(id).await {
                            toasts.success("Review deleted");
                        } else {
                            let message = controller
                                .error
                                .get_untracked()
                                .unwrap_or_else(|| "Failed to delete the review".to_string());
                            toasts.error(message);
                        }
                    });
                });
                view! {
                    <ConfirmModal
                        title="Delete review"
                        message=message
                        confirm_label="Delete"
                        danger=true
                        on_confirm=on_confirm
                        on_cancel=Callback::new(move |_| set_delete_target.set(None))
                    />
                }
            })}

            <ToastStack/>
        </section>
    }
}
