//! Domain-specific assertion macros for tenantline harnesses.
//!
//! These add failure messages that say which entry lost or gained a tenant.

/// Assert that an entry is routed to the expected tenant.
///
/// ```rust
/// assert_tenant!(entry, "acme");
/// ```
#[macro_export]
macro_rules! assert_tenant {
    ($entry:expr, $tenant:expr) => {{
        let entry: &tenantline::Entry = &$entry;
        let expected: &str = $tenant;
        match entry.tenant() {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_tenant! failed:\n  expected: {:?}\n  actual:   {:?}\n  line: {:?}",
                expected, actual, entry.line
            ),
            None => panic!(
                "assert_tenant! failed: no tenant on entry.\n  labels: {:?}\n  line: {:?}",
                entry.labels, entry.line
            ),
        }
    }};
}

/// Assert that no stage assigned a tenant to the entry.
#[macro_export]
macro_rules! assert_no_tenant {
    ($entry:expr) => {{
        let entry: &tenantline::Entry = &$entry;
        if let Some(actual) = entry.tenant() {
            panic!(
                "assert_no_tenant! failed: entry routed to {:?}.\n  line: {:?}",
                actual, entry.line
            );
        }
    }};
}
