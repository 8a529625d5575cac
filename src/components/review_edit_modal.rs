/// Edit dialog for one review: a five-star rating picker and a free-text
/// comment. Emits the draft upward on submit and never talks to the API.
use gloo_timers::future::sleep;
use leptos::ev::SubmitEvent;
use leptos::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

use crate::models::review::{Review, ReviewDraft};
use crate::utils::leptos_owner::with_owner_safe;

// Matches the exit transition in the stylesheet; the dialog stays mounted
// (with the closing class applied) until this has elapsed.
const CLOSE_DELAY: Duration = Duration::from_millis(180);

#[component]
pub fn ReviewEditModal(
    #[prop(optional_no_strip)] review: Option<Review>,
    #[prop(into)] on_submit: Callback<ReviewDraft>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let initial_rating = review.as_ref().map(|review| review.rating.clamp(1, 5)).unwrap_or(5);
    let initial_comment = review.as_ref().map(|review| review.comment.clone()).unwrap_or_default();

    let (rating, set_rating) = create_signal(initial_rating);
    let (comment, set_comment) = create_signal(initial_comment);
    let (closing, set_closing) = create_signal(false);

    let owner = Owner::current();
    // Two-phase close: flip the styling flag now, unmount after the
    // transition has had time to play out.
    let request_close = move || {
        if closing.get_untracked() {
            return;
        }
        set_closing.set(true);
        spawn_local(async move {
            sleep(CLOSE_DELAY).await;
            with_owner_safe(owner, "edit modal close", move || on_close.call(()));
        });
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(ReviewDraft {
            rating: rating.get(),
            comment: comment.get(),
        });
    };

    view! {
        <div class="modal-backdrop" class:closing=move || closing.get()>
            <div class="modal edit-modal" role="dialog">
                <h3 class="modal-title">{"Edit review"}</h3>
                <form class="edit-form" on:submit=handle_submit>
                    <div class="star-picker">
                        {(1u8..=5).map(|value| view! {
                            <button
                                type="button"
                                class="star-button"
                                class:selected={move || rating.get() >= value}
                                data-value=value.to_string()
                                on:click=move |_| set_rating.set(value)
                            >
                                {"★"}
                            </button>
                        }).collect::<Vec<_>>()}
                        <span class="star-value">{move || format!("{}/5", rating.get())}</span>
                    </div>
                    <textarea
                        class="comment-input"
                        placeholder="Comment"
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="button" on:click=move |_| request_close()>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="button button-primary">
                            {"Save"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
