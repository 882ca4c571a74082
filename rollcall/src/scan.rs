//! Component scanning with a fixed exclusion list.

use crate::registration::{Registration, RegistrationSet};
use tracing::trace;

/// Component prefixes never scanned for registrations: the runtime and
/// base libraries, this framework's own internals, test hosts,
/// serialization libraries, and package-manager tooling.
pub const EXCLUDED_COMPONENTS: &[&str] =
    &["std", "core", "alloc", "rollcall", "test", "serde", "cargo"];

/// Whether a component path falls under one of the excluded prefixes.
///
/// Matching stops at path-segment boundaries, so `core::fmt` is excluded
/// while a crate named `core_api` is not.
pub(crate) fn is_excluded(component: &str) -> bool {
    EXCLUDED_COMPONENTS.iter().any(|prefix| {
        component
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// Lazily yield the registrations from every non-excluded component.
///
/// No side effects; the emptiness check happens downstream so the scan
/// itself stays a plain iterator.
pub(crate) fn scan(set: &RegistrationSet) -> impl Iterator<Item = &Registration> {
    set.iter().filter(|registration| {
        if is_excluded(registration.component()) {
            trace!(
                component = registration.component(),
                kind = %registration.capability(),
                skipped = registration.type_info().name(),
                "skipping registration from excluded component"
            );
            false
        } else {
            true
        }
    })
}

#[cfg(test)]
mod tests {
    use super::is_excluded;

    #[test]
    fn prefixes_match_whole_segments() {
        assert!(is_excluded("std"));
        assert!(is_excluded("core::fmt"));
        assert!(is_excluded("rollcall::registration"));
        assert!(is_excluded("serde::de"));

        assert!(!is_excluded("core_api"));
        assert!(!is_excluded("storefront::orders"));
        assert!(!is_excluded("my_std_helpers"));
    }
}
