use anyhow::Result;
use oxrdf::{Dataset, NamedNode};
use rdf_conformance::evaluator::default_registry;
use rdf_conformance::report::Outcome;
use rdf_conformance::{
    Adapter, Files, Manifest, ManifestResolver, NoopAdapter, QueryResult, Runner, TestCase,
    TestKind,
};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn fixture_files() -> Files {
    Files::new().with_mapping(
        "http://example.com/conformance/",
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
    )
}

fn resolve(url: &str) -> Result<Manifest> {
    let registry = default_registry();
    ManifestResolver::new(&fixture_files(), &registry).resolve(url)
}

/// Accepts every query and answers `true` to every ASK.
struct AskAdapter;

impl Adapter for AskAdapter {
    fn check_query_syntax(&self, _query: &str, _base_iri: &str) -> Result<()> {
        Ok(())
    }

    fn query(&self, _data: &Dataset, _query: &str, _base_iri: &str) -> Result<QueryResult> {
        Ok(QueryResult::Boolean(true))
    }
}

struct HangingAdapter;

impl Adapter for HangingAdapter {
    fn query(&self, _data: &Dataset, _query: &str, _base_iri: &str) -> Result<QueryResult> {
        thread::sleep(Duration::from_secs(5));
        Ok(QueryResult::Boolean(true))
    }
}

#[test]
fn outcomes_follow_declaration_order() -> Result<()> {
    let manifest = resolve("http://example.com/conformance/ordering.ttl")?;
    let adapter: Arc<dyn Adapter> = Arc::new(AskAdapter);
    let outcomes = Runner::default().run(&manifest, &adapter);

    assert_eq!(outcomes.len(), 3);
    for (outcome, fragment) in outcomes.iter().zip(["#t1", "#t2", "#t3"]) {
        assert!(outcome.test.as_str().ends_with(fragment));
    }
    assert!(matches!(outcomes[0].outcome, Outcome::Passed));
    assert!(matches!(outcomes[1].outcome, Outcome::Passed));
    // the adapter accepts everything, so the negative syntax test fails
    assert!(matches!(outcomes[2].outcome, Outcome::Failed(_)));
    Ok(())
}

#[test]
fn uri_filter_drops_tests_without_an_outcome() -> Result<()> {
    let manifest = resolve("http://example.com/conformance/ordering.ttl")?;
    let adapter: Arc<dyn Adapter> = Arc::new(AskAdapter);
    let outcomes = Runner::default().with_uri_filter("#t2").run(&manifest, &adapter);
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].test.as_str().ends_with("#t2"));
    Ok(())
}

#[test]
fn unimplemented_operations_are_skipped() -> Result<()> {
    let manifest = resolve("http://example.com/conformance/ordering.ttl")?;
    let adapter: Arc<dyn Adapter> = Arc::new(NoopAdapter);
    let outcomes = Runner::default().run(&manifest, &adapter);
    assert_eq!(outcomes.len(), 3);
    // the negative test propagates the skip instead of treating it as the
    // expected parsing failure
    assert!(outcomes
        .iter()
        .all(|o| matches!(o.outcome, Outcome::Skipped(_))));
    Ok(())
}

#[test]
fn specification_scoping_restricts_the_run() -> Result<()> {
    let manifest = resolve("http://example.com/conformance/specs.ttl")?;
    let adapter: Arc<dyn Adapter> = Arc::new(AskAdapter);

    let outcomes = Runner::default()
        .with_specification("http://example.com/conformance/specs.ttl#spec1")
        .run(&manifest, &adapter);
    assert_eq!(outcomes.len(), 1);
    assert!(matches!(outcomes[0].outcome, Outcome::Passed));

    let outcomes = Runner::default()
        .with_specification("http://example.com/conformance/specs.ttl#spec2")
        .run(&manifest, &adapter);
    assert!(outcomes.is_empty());
    Ok(())
}

#[test]
fn query_evaluation_results_are_compared() -> Result<()> {
    let manifest = resolve("http://example.com/conformance/query-eval.ttl")?;
    let adapter: Arc<dyn Adapter> = Arc::new(AskAdapter);
    let outcomes = Runner::default().run(&manifest, &adapter);
    assert_eq!(outcomes.len(), 2);
    for outcome in &outcomes {
        assert!(matches!(outcome.outcome, Outcome::Passed), "{:?}", outcome.outcome);
    }
    Ok(())
}

#[test]
fn hanging_tests_time_out() -> Result<()> {
    let test = Arc::new(TestCase {
        uri: NamedNode::new("http://example.com/conformance/hang")?,
        types: Vec::new(),
        name: None,
        comment: None,
        approval: None,
        approved_by: None,
        kind: TestKind::QueryEvaluation {
            query: "ASK {}".into(),
            base_iri: "http://example.com/conformance/hang".into(),
            data: Dataset::new(),
            expected: QueryResult::Boolean(true),
            lax_cardinality: false,
            result_source: "inline".into(),
        },
    });
    let manifest = Manifest {
        uri: NamedNode::new("http://example.com/conformance/hang-manifest")?,
        label: None,
        comment: None,
        sub_manifests: Vec::new(),
        tests: vec![test],
        specifications: None,
    };
    let adapter: Arc<dyn Adapter> = Arc::new(HangingAdapter);
    let outcomes = Runner::default()
        .with_timeout(Duration::from_millis(200))
        .run(&manifest, &adapter);

    assert_eq!(outcomes.len(), 1);
    let Outcome::Failed(error) = &outcomes[0].outcome else {
        panic!("the test must fail");
    };
    let message = error.to_string();
    assert!(message.contains("http://example.com/conformance/hang"), "{message}");
    assert!(message.contains("timed out"), "{message}");
    Ok(())
}
