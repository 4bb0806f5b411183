use std::process;

use testbench::{check, check_eq, cli, FnCase, Suite, SuiteRegistry, TestCase};

/// Explicit registration phase: every suite the binary knows about is
/// registered here, before any run is requested.
fn build_registry() -> SuiteRegistry {
    let mut registry = SuiteRegistry::new();

    registry.register(Suite::new("selfcheck", || -> Vec<Box<dyn TestCase>> {
        vec![
            FnCase::boxed("arithmetic_holds", |ctx| {
                check_eq!(ctx, 4, 2 + 2);
                check!(ctx, 1 < 2);
                Ok(())
            }),
            FnCase::boxed("strings_compare", |ctx| {
                check_eq!(ctx, "bench", &"testbench"[4..]);
                Ok(())
            }),
        ]
    }));

    registry
}

fn main() {
    let mut registry = build_registry();
    process::exit(cli::run(&mut registry));
}
