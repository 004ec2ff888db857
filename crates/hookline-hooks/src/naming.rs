//! Hook name policy.
//!
//! When `enforce_before_after` is enabled, every hook name must begin with
//! `before` or `after`. The check trims surrounding whitespace and ignores
//! case; it never alters the name that is stored.

use crate::error::{HookError, Result};

const PREFIXES: &[&str] = &["before", "after"];

/// Returns `true` if `name` starts with `before` or `after`.
///
/// # Examples
///
/// ```
/// use hookline_hooks::naming::has_before_after_prefix;
///
/// assert!(has_before_after_prefix("beforeSave"));
/// assert!(has_before_after_prefix("  AFTER:load"));
/// assert!(!has_before_after_prefix("save"));
/// ```
pub fn has_before_after_prefix(name: &str) -> bool {
    let normalized = name.trim().to_lowercase();
    PREFIXES.iter().any(|p| normalized.starts_with(p))
}

/// Validate `name` against the before/after policy.
pub fn validate_hook_name(name: &str) -> Result<()> {
    if has_before_after_prefix(name) {
        Ok(())
    } else {
        Err(HookError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// The `before:` form of a hook name.
pub fn before_name(name: &str) -> String {
    format!("before:{name}")
}

/// The `after:` form of a hook name.
pub fn after_name(name: &str) -> String {
    format!("after:{name}")
}
