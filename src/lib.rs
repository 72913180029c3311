//! Harness for the [W3C RDF, SPARQL and JSON-LD testsuites](https://w3c.github.io/rdf-tests/):
//! resolves test manifests, runs the tests against an [`Adapter`]
//! implementation and reports the outcomes as text or EARL.

pub mod adapter;
pub mod cases;
pub mod evaluator;
pub mod files;
pub mod manifest;
pub mod report;
pub mod results;
pub mod runner;
mod vocab;

pub use crate::adapter::{skipped, Adapter, NoopAdapter, Skipped};
pub use crate::cases::{SyntaxLanguage, TestCase, TestKind};
pub use crate::files::Files;
pub use crate::manifest::{Manifest, ManifestResolver};
pub use crate::report::{Outcome, ReportStyle, TestOutcome};
pub use crate::results::QueryResult;
pub use crate::runner::Runner;

use anyhow::Result;
use std::sync::Arc;

/// Resolves a manifest with the default testsuite registrations and runs it.
pub fn run_manifest(
    manifest_url: &str,
    adapter: &Arc<dyn Adapter>,
    files: &Files,
    runner: &Runner,
) -> Result<Vec<TestOutcome>> {
    let registry = evaluator::default_registry();
    let manifest = ManifestResolver::new(files, &registry).resolve(manifest_url)?;
    Ok(runner.run(&manifest, adapter))
}

/// Runs a testsuite and panics on any unexpected failure, the shape CI
/// conformance tests use.
pub fn check_testsuite(
    manifest_url: &str,
    adapter: &Arc<dyn Adapter>,
    files: &Files,
    ignored_tests: &[&str],
) -> Result<()> {
    let results = run_manifest(manifest_url, adapter, files, &Runner::default())?;

    let mut errors = Vec::new();
    for result in &results {
        if let Outcome::Failed(error) = &result.outcome {
            if !ignored_tests.contains(&result.test.as_str()) {
                errors.push(format!("{}: failed with error {error:#}", result.test));
            }
        }
    }

    assert!(
        errors.is_empty(),
        "{} failing tests:\n{}\n",
        errors.len(),
        errors.join("\n")
    );
    Ok(())
}
