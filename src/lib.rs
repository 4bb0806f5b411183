pub use crate::case::{FnCase, TestCase};
pub use crate::context::TestContext;
pub use crate::errors::{fatal, AssertionFailure, TestFailure};
pub use crate::registry::SuiteRegistry;
pub use crate::report::{RunReport, EXIT_CLEAN, EXIT_TESTS_FAILED};
pub use crate::runner::{run_suite, run_suite_with, RunConfig};
pub use crate::suite::Suite;

pub mod case;
pub mod cli;
pub mod context;
pub mod errors;
pub mod registry;
pub mod report;
pub mod runner;
pub mod suite;
