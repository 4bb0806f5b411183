//! Suite registry.
//!
//! Registry Invariant: the registry is populated by an explicit registration
//! phase before any run is requested, and no two suites may share a name.
//! A duplicate name is a wiring defect, so registration aborts rather than
//! returning a recoverable error.

use std::collections::BTreeMap;

use crate::errors::fatal;
use crate::report::RunReport;
use crate::suite::Suite;

/// Mapping from suite name to suite. Owned by the caller and passed by
/// reference wherever suites are selected; never a lazy global.
#[derive(Default)]
pub struct SuiteRegistry {
    suites: BTreeMap<String, Suite>,
}

impl SuiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a suite under its name. Aborts on a duplicate name.
    pub fn register(&mut self, suite: Suite) {
        let name = suite.name().to_string();
        if self.suites.contains_key(&name) {
            fatal(format!("already have a suite named {name:?}"));
        }
        self.suites.insert(name, suite);
    }

    pub fn lookup(&self, name: &str) -> Option<&Suite> {
        self.suites.get(name)
    }

    /// Mutable lookup; running a suite rebuilds its case list.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Suite> {
        self.suites.get_mut(name)
    }

    /// Registered suite names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.suites.keys().map(String::as_str)
    }

    /// Run the named suite against `filter`, or report its absence.
    pub fn run(&mut self, name: &str, filter: &str) -> Option<RunReport> {
        self.lookup_mut(name).map(|suite| suite.run(filter))
    }
}
