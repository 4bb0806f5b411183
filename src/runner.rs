//! The run loop: filtering, the per-case failure boundary, and aggregation.
//!
//! Cases run strictly in insertion order, sequentially. Each execution is
//! wrapped in a panic boundary so one failing case never takes down the rest
//! of the run. Failures are classified three ways:
//!
//! - an assertion failure, recorded verbatim;
//! - a foreign failure (any other error, or a panic carrying a message),
//!   recorded with a generic `exception:` marker;
//! - an unclassified failure (a panic payload with no extractable message),
//!   logged to stderr and counted with a generic message.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::context::TestContext;
use crate::report::{RunReport, EXIT_TESTS_FAILED};
use crate::suite::Suite;

pub(crate) const RESET: &str = "\x1b[0m";
pub(crate) const RED: &str = "\x1b[31m";

/// Knobs for a single run: skip/run tracing and color on the stderr stream.
pub struct RunConfig {
    pub verbose: bool,
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl RunConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Run a suite with default configuration.
pub fn run_suite(suite: &mut Suite, filter: &str) -> RunReport {
    run_suite_with(suite, filter, &RunConfig::default())
}

/// Run every case of `suite` whose name contains `filter` as a substring
/// (empty filter means no filtering) and aggregate counts, messages, and the
/// derived exit code into a fresh report.
pub fn run_suite_with(suite: &mut Suite, filter: &str, config: &RunConfig) -> RunReport {
    if config.verbose {
        eprintln!("\t about to set up suite: {}", suite.name());
    }
    suite.rebuild();

    let mut report = RunReport::new(suite.name());
    let mut ctx = TestContext::new();

    for case in suite.cases() {
        if !filter.is_empty() && !case.name().contains(filter) {
            if config.verbose {
                eprintln!(
                    "\t skipping test: {} because doesn't match filter",
                    case.name()
                );
            }
            continue;
        }

        report.tests += 1;

        if config.verbose {
            eprintln!("\t going to run test: {}", case.name());
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| case.execute(&mut ctx)));
        let failure = match outcome {
            Ok(Ok(())) => None,
            Ok(Err(failure)) => Some(failure.to_string()),
            Err(payload) => match panic_message(payload) {
                Some(msg) => Some(format!("exception: {msg}")),
                None => {
                    eprintln!("unrecognized failure in test: {}", case.name());
                    Some("unrecognized failure (no message available)".to_string())
                }
            },
        };

        if let Some(text) = failure {
            let entry = format!("{}\t{}", case.name(), text);
            eprintln!("{}: {}", config.colorize("FAIL", RED), entry);
            report.fails += 1;
            report.messages.push(entry);
        }
    }

    report.asserts = ctx.asserts();
    if report.fails > 0 {
        report.rc = EXIT_TESTS_FAILED;
    }

    if config.verbose {
        eprintln!("\t DONE running tests");
    }

    report
}

/// Pull a human-readable message out of a panic payload, if it has one.
fn panic_message(payload: Box<dyn Any + Send>) -> Option<String> {
    match payload.downcast::<String>() {
        Ok(msg) => Some(*msg),
        Err(payload) => payload
            .downcast::<&'static str>()
            .ok()
            .map(|msg| (*msg).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_wraps_only_when_enabled() {
        let plain = RunConfig {
            verbose: false,
            use_colors: false,
        };
        assert_eq!(plain.colorize("FAIL", RED), "FAIL");

        let colored = RunConfig {
            verbose: false,
            use_colors: true,
        };
        assert_eq!(colored.colorize("FAIL", RED), "\x1b[31mFAIL\x1b[0m");
    }
}
