/// Application shell: wires the meta context, the toast stack, the
/// authenticated API client and the router around the reviews page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::reviews_list::ReviewsPage;
use crate::components::toast::provide_toasts;

/// Base path of the moderation API; the backend proxies it next to the
/// static bundle, so no host is needed here.
const API_BASE: &str = "/api";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toasts();
    // One client for the whole tree; the session token is read once here
    // instead of inside every request path.
    provide_context(ApiClient::from_session(API_BASE));

    view! {
        <Stylesheet id="main" href="/style/main.css"/>
        <Title text="Review moderation"/>
        <Router>
            <main class="admin-shell">
                <Routes>
                    <Route path="/" view=ReviewsPage/>
                </Routes>
            </main>
        </Router>
    }
}
