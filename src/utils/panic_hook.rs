use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that adds context when a panic comes from reactive
/// state being touched after its owner was disposed
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        // Extract panic message
        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] Disposed reactive state was accessed. This usually happens when:");
            log!("[PANIC] 1. A modal or row was unmounted while a request for it was in flight");
            log!("[PANIC] 2. A timer fired after its component was removed");
            log!("[PANIC] 3. A callback was invoked after cleanup");
        }
    }));
}

/// Call once during startup, after `console_error_panic_hook`.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook installed");
}
