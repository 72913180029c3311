use crate::adapter::{Adapter, Skipped};
use crate::files::parse_dataset;
use crate::report::dataset_diff;
use crate::results::{datasets_isomorphic, QueryResult};
use anyhow::{bail, Context, Result};
use oxrdf::{Dataset, NamedNode};
use oxrdfio::RdfFormat;
use std::fmt;

/// A fully materialized test: all fixtures are fetched and decoded when the
/// case is built, `run` does no I/O.
pub struct TestCase {
    pub uri: NamedNode,
    pub types: Vec<NamedNode>,
    pub name: Option<String>,
    pub comment: Option<String>,
    pub approval: Option<NamedNode>,
    pub approved_by: Option<NamedNode>,
    pub kind: TestKind,
}

pub enum SyntaxLanguage {
    Rdf { media_type: String },
    Query,
    Update,
}

pub enum TestKind {
    /// The input must parse (or must not, with `expect_failure`).
    Syntax {
        input: String,
        base_iri: String,
        language: SyntaxLanguage,
        expect_failure: bool,
    },
    /// The input must parse into a dataset isomorphic to the expected one.
    ParseEvaluation {
        input: String,
        media_type: String,
        base_iri: String,
        expected: Dataset,
    },
    /// The serialized output must be equivalent to the expected document,
    /// structurally for JSON and up to isomorphism after reparsing otherwise.
    SerializeEvaluation {
        input: Dataset,
        media_type: String,
        base_iri: String,
        expected: String,
    },
    QueryEvaluation {
        query: String,
        base_iri: String,
        data: Dataset,
        expected: QueryResult,
        lax_cardinality: bool,
        result_source: String,
    },
    UpdateEvaluation {
        update: String,
        base_iri: String,
        initial: Dataset,
        expected: Dataset,
    },
    /// Recognized but not runnable, always fails with the reason.
    Unsupported { reason: String },
}

impl TestCase {
    pub fn run(&self, adapter: &dyn Adapter) -> Result<()> {
        match &self.kind {
            TestKind::Syntax {
                input,
                base_iri,
                language,
                expect_failure,
            } => {
                let outcome = match language {
                    SyntaxLanguage::Rdf { media_type } => {
                        adapter.parse(input, base_iri, media_type).map(|_| ())
                    }
                    SyntaxLanguage::Query => adapter.check_query_syntax(input, base_iri),
                    SyntaxLanguage::Update => adapter.check_update_syntax(input, base_iri),
                };
                if *expect_failure {
                    match outcome {
                        Ok(()) => bail!("{self} parses even if it should not"),
                        Err(e) if e.downcast_ref::<Skipped>().is_some() => Err(e),
                        Err(_) => Ok(()),
                    }
                } else {
                    outcome
                }
            }
            TestKind::ParseEvaluation {
                input,
                media_type,
                base_iri,
                expected,
            } => {
                let actual = adapter.parse(input, base_iri, media_type)?;
                self.ensure_isomorphic(expected, &actual)
            }
            TestKind::SerializeEvaluation {
                input,
                media_type,
                base_iri,
                expected,
            } => {
                let output = adapter.serialize(input, base_iri, media_type)?;
                if media_type.contains("json") {
                    let expected: serde_json::Value = serde_json::from_str(expected)
                        .with_context(|| format!("Invalid expected JSON document for {self}"))?;
                    let actual: serde_json::Value = serde_json::from_str(&output)
                        .with_context(|| format!("{self} produced invalid JSON"))?;
                    if expected == actual {
                        Ok(())
                    } else {
                        bail!(
                            "{self} produced an unexpected document.\nExpected:\n{expected:#}\nActual:\n{actual:#}"
                        )
                    }
                } else {
                    let format = RdfFormat::from_media_type(media_type)
                        .with_context(|| format!("Unsupported serialization format {media_type}"))?;
                    let actual = parse_dataset(&output, base_iri, format)
                        .with_context(|| format!("{self} produced an invalid document"))?;
                    let expected = parse_dataset(expected, base_iri, format)
                        .with_context(|| format!("Invalid expected document for {self}"))?;
                    self.ensure_isomorphic(&expected, &actual)
                }
            }
            TestKind::QueryEvaluation {
                query,
                base_iri,
                data,
                expected,
                lax_cardinality,
                result_source,
            } => {
                let actual = adapter.query(data, query, base_iri)?;
                if expected.equals(&actual, *lax_cardinality) {
                    Ok(())
                } else {
                    bail!(
                        "{self} returned an unexpected result, expected result read from {result_source}.\nExpected:\n{expected}\nActual:\n{actual}"
                    )
                }
            }
            TestKind::UpdateEvaluation {
                update,
                base_iri,
                initial,
                expected,
            } => {
                let actual = adapter.update(initial, update, base_iri)?;
                self.ensure_isomorphic(expected, &actual)
            }
            TestKind::Unsupported { reason } => bail!("{self} is not runnable: {reason}"),
        }
    }

    fn ensure_isomorphic(&self, expected: &Dataset, actual: &Dataset) -> Result<()> {
        if datasets_isomorphic(expected, actual) {
            Ok(())
        } else {
            bail!(
                "{self} produced a dataset that is not isomorphic to the expected one. Diff:\n{}",
                dataset_diff(expected, actual)
            )
        }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)?;
        if let Some(name) = &self.name {
            write!(f, " named \"{name}\"")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " with comment \"{comment}\"")?;
        }
        Ok(())
    }
}
