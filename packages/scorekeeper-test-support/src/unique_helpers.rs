//! Test helpers for generating unique test data
//!
//! ULID-suffixed names keep fixtures from colliding when several tests share
//! one on-disk store directory.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use scorekeeper_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("cup");
/// let id2 = unique_str("cup");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("cup-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate `count` entrant names `"{prefix} 1"`, `"{prefix} 2"`, ...
///
/// # Examples
/// ```
/// use scorekeeper_test_support::unique_helpers::entrant_names;
///
/// assert_eq!(entrant_names("Team", 2), vec!["Team 1", "Team 2"]);
/// ```
pub fn entrant_names(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix} {i}")).collect()
}
