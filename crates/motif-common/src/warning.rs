//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder and the CLI to report input that is accepted
//! but probably not what the caller meant.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn registry() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock can't leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious input (prints once per unique message)
///
/// Returns `true` if the warning was printed, `false` if it had already been
/// reported since the last [`clear_warnings`].
///
/// # Example
/// ```
/// use motif_common::warning::warn_once;
///
/// let _ = warn_once("CSS", "id value already starts with '#'; it will be doubled");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let should_print = registry()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Motif {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Whether `message` has been reported for `component` since the last clear.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    registry()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = registry().as_mut() {
        set.clear();
    }
}
