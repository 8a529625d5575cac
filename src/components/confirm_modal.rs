use leptos::*;

/// Generic yes/no dialog: a title, a message, a configurable confirm label
/// and an optional danger styling for destructive actions.
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = String::from("Confirm"))] confirm_label: String,
    #[prop(optional)] danger: bool,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_class = if danger {
        "button button-danger"
    } else {
        "button button-primary"
    };
    view! {
        <div class="modal-backdrop">
            <div class="modal confirm-modal" role="dialog">
                <h3 class="modal-title">{title}</h3>
                <p class="modal-message">{message}</p>
                <div class="modal-actions">
                    <button class="button" on:click=move |_| on_cancel.call(())>
                        {"Cancel"}
                    </button>
                    <button class=confirm_class on:click=move |_| on_confirm.call(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
