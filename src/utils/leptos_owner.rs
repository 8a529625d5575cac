use leptos::logging::log;
use leptos::Owner;

/// Runs a closure under a reactive owner captured earlier, skipping it when
/// that owner has already been disposed. Timers and other futures that can
/// outlive their component go through this instead of calling back blindly.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => leptos::try_with_owner(owner, f).ok(),
        None => {
            log!("[OWNER] no owner captured: {}", log_context);
            None
        }
    }
}
