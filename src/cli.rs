//! Thin command-line collaborator around the harness core.
//!
//! Parses a suite name and optional filter, runs the suite out of the
//! registry the caller supplies, prints the report, and hands back the exit
//! status for the process to propagate. Invalid invocations (including
//! clap's own parse failures) exit with [`EXIT_BADOPTIONS`].

use clap::Parser;

use crate::registry::SuiteRegistry;
use crate::report::EXIT_CLEAN;
use crate::runner::RunConfig;

/// Exit status for an invalid invocation, distinct from the test-failure
/// sentinel. clap's usage errors exit with the same code.
pub const EXIT_BADOPTIONS: i32 = 2;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "testbench",
    version,
    about = "Run a registered test suite and report the results."
)]
pub struct TestbenchArgs {
    /// Name of the suite to run.
    #[arg(required_unless_present = "list")]
    pub suite: Option<String>,

    /// Only run cases whose name contains this substring.
    #[arg(short, long, default_value = "")]
    pub filter: String,

    /// List registered suite names and exit.
    #[arg(long)]
    pub list: bool,

    /// Trace skipped and executed cases on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse process arguments and run against `registry`. Returns the exit
/// status for the caller to pass to `process::exit`.
pub fn run(registry: &mut SuiteRegistry) -> i32 {
    run_with_args(registry, TestbenchArgs::parse())
}

pub fn run_with_args(registry: &mut SuiteRegistry, args: TestbenchArgs) -> i32 {
    if args.list {
        for name in registry.names() {
            println!("{name}");
        }
        return EXIT_CLEAN;
    }

    // clap enforces presence unless --list was given.
    let Some(name) = args.suite else {
        return EXIT_BADOPTIONS;
    };

    let Some(suite) = registry.lookup_mut(&name) else {
        eprintln!("unknown suite: {name} (use --list to see registered suites)");
        return EXIT_BADOPTIONS;
    };

    let config = RunConfig {
        verbose: args.verbose,
        ..RunConfig::default()
    };
    let report = suite.run_with(&args.filter, &config);
    print!("{report}");
    report.exit_code()
}
