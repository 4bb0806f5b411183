//! The assertion context and the check macros that feed it.
//!
//! `TestContext` replaces the classic process-wide "current result" slot: the
//! runner creates one per run and passes it `&mut` into every case, so the
//! assert-call tally always lands in the run that made the call. Every check
//! bumps the tally, pass or fail; the tally is therefore a count of check
//! invocations, a superset of the number of cases run.

use crate::errors::AssertionFailure;

/// Per-run assertion context. Created by the runner before any case
/// executes and handed into each [`TestCase::execute`](crate::TestCase::execute).
#[derive(Debug, Default)]
pub struct TestContext {
    asserts: u64,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total check invocations recorded so far, passing and failing alike.
    pub fn asserts(&self) -> u64 {
        self.asserts
    }

    /// Record a passing check.
    pub fn record_pass(&mut self) {
        self.asserts += 1;
    }

    /// Record a failed boolean check and build the failure to raise.
    pub fn fail_check(&mut self, expr: &str, file: &'static str, line: u32) -> AssertionFailure {
        self.asserts += 1;
        AssertionFailure {
            file,
            line,
            detail: format!("{expr} was false"),
        }
    }

    /// Record a failed equality check and build the failure to raise.
    pub fn fail_eq(
        &mut self,
        expected_expr: &str,
        actual_expr: &str,
        expected: String,
        actual: String,
        file: &'static str,
        line: u32,
    ) -> AssertionFailure {
        self.asserts += 1;
        AssertionFailure {
            file,
            line,
            detail: format!("{expected_expr} != {actual_expr} (expected {expected}, got {actual})"),
        }
    }
}

/// Check that a condition holds, failing the enclosing case otherwise.
///
/// Expands to an early `return Err(..)`, so it is only usable inside a body
/// returning `Result<(), TestFailure>`.
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr) => {
        if $cond {
            $ctx.record_pass();
        } else {
            return Err($ctx.fail_check(stringify!($cond), file!(), line!()).into());
        }
    };
}

/// Check that two values compare equal, failing the enclosing case with an
/// expected/actual diagnostic otherwise.
#[macro_export]
macro_rules! check_eq {
    ($ctx:expr, $expected:expr, $actual:expr) => {{
        let expected = &$expected;
        let actual = &$actual;
        if expected == actual {
            $ctx.record_pass();
        } else {
            return Err($ctx
                .fail_eq(
                    stringify!($expected),
                    stringify!($actual),
                    format!("{:?}", expected),
                    format!("{:?}", actual),
                    file!(),
                    line!(),
                )
                .into());
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_checks_only_bump_the_tally() {
        let mut ctx = TestContext::new();
        ctx.record_pass();
        ctx.record_pass();
        assert_eq!(ctx.asserts(), 2);
    }

    #[test]
    fn failing_checks_bump_the_tally_too() {
        let mut ctx = TestContext::new();
        ctx.record_pass();
        let failure = ctx.fail_eq(
            "expected",
            "total()",
            "4".to_string(),
            "5".to_string(),
            "math.rs",
            42,
        );
        assert_eq!(ctx.asserts(), 2);
        let msg = failure.to_string();
        assert!(msg.contains("math.rs:42"));
        assert!(msg.contains("ASSERT FAILED!"));
        assert!(msg.contains("expected != total()"));
        assert!(msg.contains("expected 4, got 5"));
    }

    #[test]
    fn boolean_check_failure_names_the_expression() {
        let mut ctx = TestContext::new();
        let failure = ctx.fail_check("list.is_empty()", "registry.rs", 7);
        assert_eq!(
            failure.to_string(),
            "registry.rs:7 ASSERT FAILED! list.is_empty() was false"
        );
    }
}
