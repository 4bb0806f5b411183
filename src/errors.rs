//! Failure taxonomy for the harness.
//!
//! Two recoverable kinds surface from a test case and are caught at the
//! runner boundary: an [`AssertionFailure`] produced by a failed check, and a
//! [`TestFailure::Foreign`] wrapping any other inspectable error. Internal
//! invariant violations (a duplicate suite name, for instance) go through
//! [`fatal`] instead and abort the run entirely.

use thiserror::Error;

/// Raised where a check fails; consumed by the runner once its message has
/// been recorded into the report.
#[derive(Debug, Error)]
#[error("{file}:{line} ASSERT FAILED! {detail}")]
pub struct AssertionFailure {
    /// Source file of the failing check.
    pub file: &'static str,
    /// Source line of the failing check.
    pub line: u32,
    /// Expected/actual context rendered by the failing check.
    pub detail: String,
}

/// Everything a test case can fail with.
#[derive(Debug, Error)]
pub enum TestFailure {
    /// A check inside the case failed.
    #[error("{0}")]
    Assertion(#[from] AssertionFailure),

    /// Any other error the case surfaced. Treated identically to an
    /// assertion failure for counting, but tagged with a generic marker
    /// since it carries no expected/actual detail.
    #[error("exception: {0}")]
    Foreign(Box<dyn std::error::Error + Send + Sync>),
}

impl TestFailure {
    /// Wrap an arbitrary error (or message) as a foreign failure.
    pub fn foreign(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        TestFailure::Foreign(err.into())
    }
}

/// Unconditional abort path for internal invariant violations.
///
/// Not an [`AssertionFailure`]: nothing catches this per-test, it indicates a
/// wiring defect (e.g. two suites registered under one name) rather than a
/// test-time condition.
pub fn fatal(msg: impl AsRef<str>) -> ! {
    panic!("fatal harness error: {}", msg.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_failure_message_carries_location_and_detail() {
        let failure = AssertionFailure {
            file: "suite.rs",
            line: 42,
            detail: "a != b (expected 4, got 5)".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "suite.rs:42 ASSERT FAILED! a != b (expected 4, got 5)"
        );
    }

    #[test]
    fn foreign_failure_gets_exception_marker() {
        let failure = TestFailure::foreign("file not found");
        assert_eq!(failure.to_string(), "exception: file not found");
    }
}
