use anyhow::Result;
use rdf_conformance::evaluator::default_registry;
use rdf_conformance::{Files, ManifestResolver, TestKind};
use std::path::Path;

fn fixture_files() -> Files {
    Files::new().with_mapping(
        "http://example.com/conformance/",
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
    )
}

#[test]
fn resolves_a_manifest_tree() -> Result<()> {
    let registry = default_registry();
    let manifest = ManifestResolver::new(&fixture_files(), &registry)
        .resolve("http://example.com/conformance/manifest.ttl")?;

    assert_eq!(manifest.uri.as_str(), "http://example.com/conformance/manifest.ttl");
    assert_eq!(manifest.label.as_deref(), Some("Root manifest"));
    // the untyped stub and the rejected entry yield no test
    assert_eq!(manifest.tests.len(), 2);
    assert_eq!(
        manifest.tests[0].uri.as_str(),
        "http://example.com/conformance/manifest.ttl#syntax1"
    );
    assert!(matches!(
        manifest.tests[1].kind,
        TestKind::Syntax { expect_failure: true, .. }
    ));
    assert_eq!(manifest.sub_manifests.len(), 1);
    let sub = &manifest.sub_manifests[0];
    assert_eq!(sub.label.as_deref(), Some("Sub manifest"));
    assert_eq!(sub.tests.len(), 1);
    Ok(())
}

#[test]
fn root_falls_back_to_the_extension_less_uri() -> Result<()> {
    let registry = default_registry();
    let manifest = ManifestResolver::new(&fixture_files(), &registry)
        .resolve("http://example.com/conformance/valid1.txt")?;
    assert_eq!(manifest.uri.as_str(), "http://example.com/conformance/valid1");
    assert_eq!(manifest.tests.len(), 1);
    Ok(())
}

#[test]
fn root_falls_back_to_the_fragment_form() -> Result<()> {
    let registry = default_registry();
    let manifest = ManifestResolver::new(&fixture_files(), &registry)
        .resolve("http://example.com/conformance/fallback3.ttl")?;
    assert_eq!(manifest.uri.as_str(), "http://example.com/conformance#fallback3");
    assert_eq!(manifest.tests.len(), 1);
    Ok(())
}

#[test]
fn literal_includes_are_a_configuration_error() {
    let registry = default_registry();
    let result = ManifestResolver::new(&fixture_files(), &registry)
        .resolve("http://example.com/conformance/bad-include.ttl");
    let error = result.err().expect("the resolution must fail");
    assert!(error.to_string().contains("must be IRIs"), "{error:#}");
}

#[test]
fn specifications_are_mapped_by_iri() -> Result<()> {
    let registry = default_registry();
    let manifest = ManifestResolver::new(&fixture_files(), &registry)
        .resolve("http://example.com/conformance/specs.ttl")?;

    assert!(manifest.tests.is_empty());
    let specifications = manifest.specifications.as_ref().expect("specifications expected");
    let spec = &specifications["http://example.com/conformance/specs.ttl#spec1"];
    assert_eq!(spec.label.as_deref(), Some("Specification one"));
    assert_eq!(spec.sub_manifests.len(), 1);
    assert_eq!(spec.sub_manifests[0].tests.len(), 1);
    Ok(())
}

#[test]
fn query_evaluation_fixtures_are_materialized() -> Result<()> {
    let registry = default_registry();
    let manifest = ManifestResolver::new(&fixture_files(), &registry)
        .resolve("http://example.com/conformance/query-eval.ttl")?;

    assert_eq!(manifest.tests.len(), 2);
    let TestKind::QueryEvaluation { query, data, .. } = &manifest.tests[0].kind else {
        panic!("not a query evaluation test");
    };
    assert_eq!(query.trim(), "ASK {}");
    assert_eq!(data.len(), 1);
    Ok(())
}
