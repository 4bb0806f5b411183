use std::fmt;

/// Exit status of a fully clean run.
pub const EXIT_CLEAN: i32 = 0;
/// Exit status when any case in the run failed.
pub const EXIT_TESTS_FAILED: i32 = 17;

/// Aggregate outcome of one suite run: counters, the ordered failure
/// messages, and the derived process exit code. One report per run
/// invocation; never reused.
pub struct RunReport {
    suite: String,
    pub(crate) tests: u32,
    pub(crate) fails: u32,
    pub(crate) asserts: u64,
    pub(crate) messages: Vec<String>,
    pub(crate) rc: i32,
}

impl RunReport {
    pub(crate) fn new(suite: &str) -> Self {
        Self {
            suite: suite.to_string(),
            tests: 0,
            fails: 0,
            asserts: 0,
            messages: Vec::new(),
            rc: EXIT_CLEAN,
        }
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Cases actually executed (filtered-out cases are not counted).
    pub fn tests(&self) -> u32 {
        self.tests
    }

    pub fn fails(&self) -> u32 {
        self.fails
    }

    /// Total check invocations across the run, passing and failing alike.
    pub fn asserts(&self) -> u64 {
        self.asserts
    }

    /// One entry per failed case, in execution order, each prefixed with the
    /// case's name.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// For the caller to propagate as the process exit status.
    pub fn exit_code(&self) -> i32 {
        self.rc
    }
}

impl fmt::Display for RunReport {
    /// Fixed-width summary line followed by each failure message indented on
    /// its own line. This is the harness's only reporting surface.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} | tests: {:>4} | fails: {:>4} | assert calls: {:>6}",
            self.suite, self.tests, self.fails, self.asserts
        )?;
        for message in &self.messages {
            writeln!(f, "\t{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_report_is_clean() {
        let report = RunReport::new("Math");
        assert_eq!(report.tests(), 0);
        assert_eq!(report.fails(), 0);
        assert_eq!(report.asserts(), 0);
        assert!(report.messages().is_empty());
        assert_eq!(report.exit_code(), EXIT_CLEAN);
    }

    #[test]
    fn display_pads_the_summary_and_indents_messages() {
        let mut report = RunReport::new("Math");
        report.tests = 2;
        report.fails = 1;
        report.asserts = 3;
        report
            .messages
            .push("Add_bad\tmath.rs:42 ASSERT FAILED! 4 != 5".to_string());
        report.rc = EXIT_TESTS_FAILED;

        let text = report.to_string();
        let mut lines = text.lines();
        let summary = lines.next().unwrap();
        assert_eq!(
            summary,
            "Math                 | tests:    2 | fails:    1 | assert calls:      3"
        );
        assert_eq!(
            lines.next().unwrap(),
            "\tAdd_bad\tmath.rs:42 ASSERT FAILED! 4 != 5"
        );
    }
}
