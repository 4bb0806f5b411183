use crate::context::TestContext;
use crate::errors::TestFailure;

/// A single named unit of check logic.
///
/// Cases must be independently runnable: the harness executes them strictly
/// in sequence but resets no state between them and enforces no isolation
/// beyond the per-case failure boundary.
pub trait TestCase {
    fn name(&self) -> &str;

    /// Run the case's checks against the given context. Returning `Err`
    /// marks the case failed; panics are caught and classified by the
    /// runner.
    fn execute(&self, ctx: &mut TestContext) -> Result<(), TestFailure>;
}

/// Closure-backed [`TestCase`], so suites can be populated without declaring
/// one struct per test.
pub struct FnCase {
    name: String,
    body: Box<dyn Fn(&mut TestContext) -> Result<(), TestFailure>>,
}

impl FnCase {
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(&mut TestContext) -> Result<(), TestFailure> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Convenience for suite setup hooks, which hand back boxed trait
    /// objects.
    pub fn boxed(
        name: impl Into<String>,
        body: impl Fn(&mut TestContext) -> Result<(), TestFailure> + 'static,
    ) -> Box<dyn TestCase> {
        Box::new(Self::new(name, body))
    }
}

impl TestCase for FnCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, ctx: &mut TestContext) -> Result<(), TestFailure> {
        (self.body)(ctx)
    }
}
