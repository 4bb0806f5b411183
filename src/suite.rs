use crate::case::TestCase;
use crate::report::RunReport;
use crate::runner::{self, RunConfig};

/// A named, ordered collection of test cases plus the hook that populates it.
///
/// The setup hook is invoked once per `run` call and fully replaces the case
/// list, so repeated runs of the same suite never accumulate duplicate cases.
/// Insertion order of the returned vector is execution order.
pub struct Suite {
    name: String,
    setup: Box<dyn FnMut() -> Vec<Box<dyn TestCase>>>,
    cases: Vec<Box<dyn TestCase>>,
}

impl Suite {
    pub fn new(
        name: impl Into<String>,
        setup: impl FnMut() -> Vec<Box<dyn TestCase>> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            setup: Box::new(setup),
            cases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Discard any previous cases and repopulate from the setup hook.
    pub(crate) fn rebuild(&mut self) {
        self.cases = (self.setup)();
    }

    pub(crate) fn cases(&self) -> &[Box<dyn TestCase>] {
        &self.cases
    }

    /// Run every case whose name contains `filter` (all of them when the
    /// filter is empty) and aggregate the outcome. The algorithm itself
    /// lives in [`runner::run_suite_with`]; this is the convenient surface.
    pub fn run(&mut self, filter: &str) -> RunReport {
        runner::run_suite(self, filter)
    }

    pub fn run_with(&mut self, filter: &str, config: &RunConfig) -> RunReport {
        runner::run_suite_with(self, filter, config)
    }
}
