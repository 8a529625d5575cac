use reviewboard::app::App;
use reviewboard::utils::panic_hook;

// Client-side entry point; serve with `trunk serve --open`.
fn main() {
    console_error_panic_hook::set_once();
    panic_hook::init();
    leptos::mount_to_body(App);
}
