/// Transient notifications for mutation outcomes. Provided once at the app
/// root and pushed to from anywhere below it.
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<Vec<Toast>>);

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = Uuid::new_v4();
        let list = self.0;
        list.update(|toasts| toasts.push(Toast { id, level, message }));
        spawn_local(async move {
            sleep(TOAST_LIFETIME).await;
            // The stack lives at the app root, so the signal outlives the
            // timer; the toast may already be gone if it was dismissed.
            let _ = list.try_update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }

    fn dismiss(&self, id: Uuid) {
        self.0.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

pub fn provide_toasts() {
    provide_context(Toasts(create_rw_signal(Vec::new())));
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.0.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class>
                            <span>{toast.message}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>
                                {"x"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
