use crate::cases::{SyntaxLanguage, TestCase, TestKind};
use crate::files::{guess_media_type, Files};
use crate::results::load_query_result;
use crate::vocab::{dawgt, jld, mf, qt, rdft, ut};
use anyhow::{bail, Context, Result};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, GraphName, GraphNameRef, NamedNode, NamedNodeRef, SubjectRef, TermRef};
use oxrdfio::RdfFormat;

/// View over one manifest entry, with the accessors handlers need to pull
/// their fixtures out of the merged manifest graph.
pub struct EntryContext<'a> {
    graph: &'a Graph,
    node: NamedNodeRef<'a>,
    files: &'a Files,
}

impl<'a> EntryContext<'a> {
    pub fn node(&self) -> NamedNodeRef<'a> {
        self.node
    }

    pub fn files(&self) -> &'a Files {
        self.files
    }

    pub fn literal(&self, predicate: NamedNodeRef<'_>) -> Option<String> {
        match self.graph.object_for_subject_predicate(self.node, predicate)? {
            TermRef::Literal(literal) => Some(literal.value().to_owned()),
            _ => None,
        }
    }

    pub fn named(&self, predicate: NamedNodeRef<'_>) -> Option<NamedNode> {
        match self.graph.object_for_subject_predicate(self.node, predicate)? {
            TermRef::NamedNode(node) => Some(node.into_owned()),
            _ => None,
        }
    }

    fn action_term(&self) -> Result<TermRef<'a>> {
        self.graph
            .object_for_subject_predicate(self.node, mf::ACTION)
            .with_context(|| format!("Test {} has no mf:action", self.node))
    }

    /// The action as a plain document IRI, the shape syntax tests use.
    pub fn action_url(&self) -> Result<String> {
        match self.action_term()? {
            TermRef::NamedNode(node) => Ok(node.as_str().to_owned()),
            term => bail!("The action of test {} is not an IRI: {term}", self.node),
        }
    }

    fn action_subject(&self) -> Result<SubjectRef<'a>> {
        match self.action_term()? {
            TermRef::NamedNode(node) => Ok(node.into()),
            TermRef::BlankNode(node) => Ok(node.into()),
            term => bail!("Invalid action {term} for test {}", self.node),
        }
    }

    fn part(&self, subject: SubjectRef<'a>, predicate: NamedNodeRef<'_>) -> Option<TermRef<'a>> {
        self.graph.object_for_subject_predicate(subject, predicate)
    }

    pub fn query_url(&self) -> Result<String> {
        if let Ok(action) = self.action_subject() {
            if let Some(TermRef::NamedNode(query)) = self.part(action, qt::QUERY) {
                return Ok(query.as_str().to_owned());
            }
        }
        bail!("No query found for test {}", self.node)
    }

    pub fn update_url(&self) -> Result<String> {
        if let Ok(action) = self.action_subject() {
            if let Some(TermRef::NamedNode(update)) = self.part(action, ut::REQUEST) {
                return Ok(update.as_str().to_owned());
            }
        }
        bail!("No update found for test {}", self.node)
    }

    /// Assembles the dataset described by the action: default graph from
    /// `qt:data`/`ut:data`, named graphs from `qt:graphData`/`ut:graphData`.
    pub fn action_dataset(&self) -> Result<oxrdf::Dataset> {
        let action = self.action_subject()?;
        self.dataset_for(action, qt::DATA, qt::GRAPH_DATA, ut::DATA, ut::GRAPH_DATA)
    }

    /// Same as `action_dataset` for the `mf:result` side of update tests.
    pub fn result_dataset(&self) -> Result<oxrdf::Dataset> {
        let result = match self.result_term()? {
            TermRef::NamedNode(node) => {
                // a bare IRI is the whole expected default graph
                let mut dataset = oxrdf::Dataset::new();
                self.files
                    .load_to_dataset(node.as_str(), &mut dataset, GraphNameRef::DefaultGraph)?;
                return Ok(dataset);
            }
            TermRef::BlankNode(node) => SubjectRef::from(node),
            term => bail!("Invalid result {term} for test {}", self.node),
        };
        self.dataset_for(result, qt::DATA, qt::GRAPH_DATA, ut::DATA, ut::GRAPH_DATA)
    }

    fn dataset_for(
        &self,
        subject: SubjectRef<'a>,
        data: NamedNodeRef<'_>,
        graph_data: NamedNodeRef<'_>,
        alt_data: NamedNodeRef<'_>,
        alt_graph_data: NamedNodeRef<'_>,
    ) -> Result<oxrdf::Dataset> {
        let mut dataset = oxrdf::Dataset::new();
        if let Some(TermRef::NamedNode(url)) =
            self.part(subject, data).or_else(|| self.part(subject, alt_data))
        {
            self.files
                .load_to_dataset(url.as_str(), &mut dataset, GraphNameRef::DefaultGraph)?;
        }
        for predicate in [graph_data, alt_graph_data] {
            for term in self.graph.objects_for_subject_predicate(subject, predicate) {
                let (name, url) = self.graph_link(term)?;
                self.files
                    .load_to_dataset(&url, &mut dataset, GraphName::from(name).as_ref())?;
            }
        }
        Ok(dataset)
    }

    /// A graph link is either a bare IRI (graph name = document URL) or a
    /// resource with `ut:graph` and an `rdfs:label` naming the graph.
    fn graph_link(&self, term: TermRef<'a>) -> Result<(NamedNode, String)> {
        match term {
            TermRef::NamedNode(node) => Ok((node.into_owned(), node.as_str().to_owned())),
            TermRef::BlankNode(node) => {
                let Some(TermRef::NamedNode(url)) = self.part(node.into(), ut::GRAPH) else {
                    bail!("Graph data without ut:graph in test {}", self.node);
                };
                let Some(TermRef::Literal(label)) = self.part(node.into(), rdfs::LABEL) else {
                    bail!("Graph data without rdfs:label in test {}", self.node);
                };
                Ok((NamedNode::new(label.value())?, url.as_str().to_owned()))
            }
            term => bail!("Invalid graph data {term} in test {}", self.node),
        }
    }

    fn result_term(&self) -> Result<TermRef<'a>> {
        self.graph
            .object_for_subject_predicate(self.node, mf::RESULT)
            .with_context(|| format!("Test {} has no mf:result", self.node))
    }

    pub fn result_url(&self) -> Result<String> {
        match self.result_term()? {
            TermRef::NamedNode(node) => Ok(node.as_str().to_owned()),
            term => bail!("The result of test {} is not an IRI: {term}", self.node),
        }
    }

    pub fn lax_cardinality(&self) -> bool {
        self.graph.contains(oxrdf::TripleRef::new(
            self.node,
            mf::RESULT_CARDINALITY,
            mf::LAX_CARDINALITY,
        ))
    }
}

type Handler = Box<dyn Fn(&EntryContext<'_>) -> Result<TestKind> + Send + Sync>;

/// Maps type combinations to test builders.
///
/// A handler is keyed by the set of types an entry must all carry. Every
/// matching handler is invoked, one manifest entry can prove several
/// independent capabilities. Registration order is preserved so runs stay
/// deterministic.
#[derive(Default)]
pub struct TestRegistry {
    handlers: Vec<(Vec<NamedNode>, Handler)>,
    unsupported: Vec<(Vec<NamedNode>, String)>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<const N: usize>(
        &mut self,
        types: [NamedNodeRef<'static>; N],
        handler: impl Fn(&EntryContext<'_>) -> Result<TestKind> + Send + Sync + 'static,
    ) {
        self.handlers.push((
            types.iter().map(|t| t.into_owned()).collect(),
            Box::new(handler),
        ));
    }

    /// Declares a type combination as known-but-unsupported: entries carrying
    /// exactly these types get a stub case that always fails with `reason`.
    pub fn register_unsupported<const N: usize>(
        &mut self,
        types: [NamedNodeRef<'static>; N],
        reason: impl Into<String>,
    ) {
        self.unsupported
            .push((types.iter().map(|t| t.into_owned()).collect(), reason.into()));
    }

    /// Builds the cases for one manifest entry. Entries without any declared
    /// type are not tests and yield nothing.
    pub fn build(&self, graph: &Graph, node: NamedNodeRef<'_>, files: &Files) -> Vec<TestCase> {
        let types = graph
            .objects_for_subject_predicate(node, rdf::TYPE)
            .filter_map(|t| {
                if let TermRef::NamedNode(t) = t {
                    Some(t.into_owned())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        if types.is_empty() {
            return Vec::new();
        }
        let entry = EntryContext { graph, node, files };
        let name = entry.literal(mf::NAME);
        let comment = entry.literal(rdfs::COMMENT);
        let approval = entry.named(rdft::APPROVAL).or_else(|| entry.named(dawgt::APPROVAL));
        let approved_by = entry.named(dawgt::APPROVED_BY);

        let mut cases = Vec::new();
        let mut matched = false;
        for (required, handler) in &self.handlers {
            if !required.iter().all(|t| types.contains(t)) {
                continue;
            }
            matched = true;
            match handler(&entry) {
                Ok(kind) => cases.push(TestCase {
                    uri: node.into_owned(),
                    types: types.clone(),
                    name: name.clone(),
                    comment: comment.clone(),
                    approval: approval.clone(),
                    approved_by: approved_by.clone(),
                    kind,
                }),
                Err(e) => eprintln!("Failure while building the test {node}: {e:#}"),
            }
        }
        if !matched {
            if let Some((_, reason)) = self
                .unsupported
                .iter()
                .find(|(required, _)| {
                    required.len() == types.len() && required.iter().all(|t| types.contains(t))
                })
            {
                cases.push(TestCase {
                    uri: node.into_owned(),
                    types,
                    name,
                    comment,
                    approval,
                    approved_by,
                    kind: TestKind::Unsupported {
                        reason: reason.clone(),
                    },
                });
            } else {
                eprintln!(
                    "The test {node} is not supported, no handler for types {}",
                    types
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                );
            }
        }
        cases
    }
}

/// All the W3C testsuites this harness knows how to drive.
pub fn default_registry() -> TestRegistry {
    let mut registry = TestRegistry::new();
    register_rdf_syntax_tests(&mut registry);
    register_sparql_tests(&mut registry);
    register_json_ld_tests(&mut registry);
    registry
}

fn rdf_syntax(media_type: &'static str, expect_failure: bool) -> impl Fn(&EntryContext<'_>) -> Result<TestKind> {
    move |entry| {
        let action = entry.action_url()?;
        Ok(TestKind::Syntax {
            input: entry.files().read_to_string(&action)?,
            base_iri: action,
            language: SyntaxLanguage::Rdf {
                media_type: media_type.into(),
            },
            expect_failure,
        })
    }
}

fn rdf_eval(media_type: &'static str) -> impl Fn(&EntryContext<'_>) -> Result<TestKind> {
    move |entry| {
        let action = entry.action_url()?;
        Ok(TestKind::ParseEvaluation {
            input: entry.files().read_to_string(&action)?,
            media_type: media_type.into(),
            base_iri: action,
            expected: entry.files().load_dataset(&entry.result_url()?)?,
        })
    }
}

pub fn register_rdf_syntax_tests(registry: &mut TestRegistry) {
    for (test_type, media_type) in [
        (rdft::TEST_N_TRIPLES_POSITIVE_SYNTAX, RdfFormat::NTriples.media_type()),
        (rdft::TEST_N_QUADS_POSITIVE_SYNTAX, RdfFormat::NQuads.media_type()),
        (rdft::TEST_TURTLE_POSITIVE_SYNTAX, RdfFormat::Turtle.media_type()),
        (rdft::TEST_TRIG_POSITIVE_SYNTAX, RdfFormat::TriG.media_type()),
    ] {
        registry.register([test_type], rdf_syntax(media_type, false));
    }
    for (test_type, media_type) in [
        (rdft::TEST_N_TRIPLES_NEGATIVE_SYNTAX, RdfFormat::NTriples.media_type()),
        (rdft::TEST_N_QUADS_NEGATIVE_SYNTAX, RdfFormat::NQuads.media_type()),
        (rdft::TEST_TURTLE_NEGATIVE_SYNTAX, RdfFormat::Turtle.media_type()),
        (rdft::TEST_TRIG_NEGATIVE_SYNTAX, RdfFormat::TriG.media_type()),
        (rdft::TEST_XML_NEGATIVE_SYNTAX, RdfFormat::RdfXml.media_type()),
        // negative eval tests also must not parse
        (rdft::TEST_TURTLE_NEGATIVE_EVAL, RdfFormat::Turtle.media_type()),
        (rdft::TEST_TRIG_NEGATIVE_EVAL, RdfFormat::TriG.media_type()),
    ] {
        registry.register([test_type], rdf_syntax(media_type, true));
    }
    for (test_type, media_type) in [
        (rdft::TEST_TURTLE_EVAL, RdfFormat::Turtle.media_type()),
        (rdft::TEST_TRIG_EVAL, RdfFormat::TriG.media_type()),
        (rdft::TEST_XML_EVAL, RdfFormat::RdfXml.media_type()),
    ] {
        registry.register([test_type], rdf_eval(media_type));
    }
}

pub fn register_sparql_tests(registry: &mut TestRegistry) {
    for test_type in [mf::POSITIVE_SYNTAX_TEST, mf::POSITIVE_SYNTAX_TEST_11] {
        registry.register([test_type], |entry| query_syntax(entry, false));
    }
    for test_type in [mf::NEGATIVE_SYNTAX_TEST, mf::NEGATIVE_SYNTAX_TEST_11] {
        registry.register([test_type], |entry| query_syntax(entry, true));
    }
    registry.register([mf::POSITIVE_UPDATE_SYNTAX_TEST_11], |entry| {
        update_syntax(entry, false)
    });
    registry.register([mf::NEGATIVE_UPDATE_SYNTAX_TEST_11], |entry| {
        update_syntax(entry, true)
    });
    registry.register([mf::QUERY_EVALUATION_TEST], |entry| {
        let query_url = entry.query_url()?;
        let result_url = entry.result_url()?;
        Ok(TestKind::QueryEvaluation {
            query: entry.files().read_to_string(&query_url)?,
            base_iri: query_url,
            data: entry.action_dataset()?,
            expected: load_query_result(entry.files(), &result_url)?,
            lax_cardinality: entry.lax_cardinality(),
            result_source: result_url,
        })
    });
    for test_type in [mf::UPDATE_EVALUATION_TEST, ut::UPDATE_EVALUATION_TEST] {
        registry.register([test_type], |entry| {
            let update_url = entry.update_url()?;
            Ok(TestKind::UpdateEvaluation {
                update: entry.files().read_to_string(&update_url)?,
                base_iri: update_url,
                initial: entry.action_dataset()?,
                expected: entry.result_dataset()?,
            })
        });
    }
    registry.register_unsupported(
        [mf::CSV_RESULT_FORMAT_TEST],
        "CSV result serialization tests are not implemented",
    );
}

pub fn register_json_ld_tests(registry: &mut TestRegistry) {
    registry.register(
        [jld::TO_RDF_TEST, jld::POSITIVE_EVALUATION_TEST],
        |entry| {
            let action = entry.action_url()?;
            Ok(TestKind::ParseEvaluation {
                input: entry.files().read_to_string(&action)?,
                media_type: json_ld_media_type(&action).into(),
                base_iri: action,
                expected: entry.files().load_dataset(&entry.result_url()?)?,
            })
        },
    );
    registry.register([jld::TO_RDF_TEST, jld::POSITIVE_SYNTAX_TEST], |entry| {
        json_ld_syntax(entry, false)
    });
    registry.register([jld::TO_RDF_TEST, jld::NEGATIVE_EVALUATION_TEST], |entry| {
        json_ld_syntax(entry, true)
    });
    registry.register(
        [jld::FROM_RDF_TEST, jld::POSITIVE_EVALUATION_TEST],
        |entry| {
            let action = entry.action_url()?;
            // the media type describes the serializer output, so it comes
            // from the expected document, not the input dataset
            let result = entry.result_url()?;
            Ok(TestKind::SerializeEvaluation {
                input: entry.files().load_dataset(&action)?,
                media_type: json_ld_media_type(&result).into(),
                base_iri: action,
                expected: entry.files().read_to_string(&result)?,
            })
        },
    );
}

fn json_ld_syntax(entry: &EntryContext<'_>, expect_failure: bool) -> Result<TestKind> {
    let action = entry.action_url()?;
    Ok(TestKind::Syntax {
        input: entry.files().read_to_string(&action)?,
        language: SyntaxLanguage::Rdf {
            media_type: json_ld_media_type(&action).into(),
        },
        base_iri: action,
        expect_failure,
    })
}

fn json_ld_media_type(url: &str) -> &'static str {
    guess_media_type(url).unwrap_or("application/ld+json")
}

fn query_syntax(entry: &EntryContext<'_>, expect_failure: bool) -> Result<TestKind> {
    let action = entry.action_url().or_else(|_| entry.query_url())?;
    Ok(TestKind::Syntax {
        input: entry.files().read_to_string(&action)?,
        base_iri: action,
        language: SyntaxLanguage::Query,
        expect_failure,
    })
}

fn update_syntax(entry: &EntryContext<'_>, expect_failure: bool) -> Result<TestKind> {
    let action = entry.action_url().or_else(|_| entry.update_url())?;
    Ok(TestKind::Syntax {
        input: entry.files().read_to_string(&action)?,
        base_iri: action,
        language: SyntaxLanguage::Update,
        expect_failure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::TripleRef;

    const TYPE_A: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/vocab#A");
    const TYPE_B: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/vocab#B");
    const ENTRY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/tests#t1");

    fn stub(reason: &'static str) -> impl Fn(&EntryContext<'_>) -> Result<TestKind> {
        move |_| {
            Ok(TestKind::Unsupported {
                reason: reason.into(),
            })
        }
    }

    #[test]
    fn every_matching_handler_is_invoked() {
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(ENTRY, rdf::TYPE, TYPE_A));
        graph.insert(TripleRef::new(ENTRY, rdf::TYPE, TYPE_B));
        let mut registry = TestRegistry::new();
        registry.register([TYPE_A], stub("a"));
        registry.register([TYPE_B], stub("b"));
        registry.register([TYPE_A, TYPE_B], stub("ab"));
        let files = Files::new();
        let cases = registry.build(&graph, ENTRY, &files);
        assert_eq!(cases.len(), 3);
    }

    #[test]
    fn subset_matching_requires_every_type() {
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(ENTRY, rdf::TYPE, TYPE_A));
        let mut registry = TestRegistry::new();
        registry.register([TYPE_A, TYPE_B], stub("ab"));
        let files = Files::new();
        assert!(registry.build(&graph, ENTRY, &files).is_empty());
    }

    #[test]
    fn untyped_entries_are_ignored() {
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(ENTRY, mf::NAME, oxrdf::LiteralRef::new_simple_literal("x")));
        let mut registry = TestRegistry::new();
        registry.register([TYPE_A], stub("a"));
        let files = Files::new();
        assert!(registry.build(&graph, ENTRY, &files).is_empty());
    }

    #[test]
    fn json_ld_cases_carry_the_document_media_type() -> Result<()> {
        let to_rdf = NamedNodeRef::new_unchecked("http://example.com/conformance/jld/t1");
        let from_rdf = NamedNodeRef::new_unchecked("http://example.com/conformance/jld/t2");
        let json = NamedNodeRef::new_unchecked("http://example.com/conformance/jld/in.jsonld");
        let quads = NamedNodeRef::new_unchecked("http://example.com/conformance/jld/out.nq");
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(to_rdf, rdf::TYPE, jld::TO_RDF_TEST));
        graph.insert(TripleRef::new(to_rdf, rdf::TYPE, jld::POSITIVE_EVALUATION_TEST));
        graph.insert(TripleRef::new(to_rdf, mf::ACTION, json));
        graph.insert(TripleRef::new(to_rdf, mf::RESULT, quads));
        graph.insert(TripleRef::new(from_rdf, rdf::TYPE, jld::FROM_RDF_TEST));
        graph.insert(TripleRef::new(from_rdf, rdf::TYPE, jld::POSITIVE_EVALUATION_TEST));
        graph.insert(TripleRef::new(from_rdf, mf::ACTION, quads));
        graph.insert(TripleRef::new(from_rdf, mf::RESULT, json));
        let files = Files::new().with_mapping(
            "http://example.com/conformance/",
            concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"),
        );
        let registry = default_registry();

        let cases = registry.build(&graph, to_rdf, &files);
        assert_eq!(cases.len(), 1);
        let TestKind::ParseEvaluation { media_type, .. } = &cases[0].kind else {
            bail!("expected a parse evaluation case");
        };
        assert_eq!(media_type, "application/ld+json");

        let cases = registry.build(&graph, from_rdf, &files);
        assert_eq!(cases.len(), 1);
        let TestKind::SerializeEvaluation { media_type, .. } = &cases[0].kind else {
            bail!("expected a serialize evaluation case");
        };
        assert_eq!(media_type, "application/ld+json");
        Ok(())
    }

    #[test]
    fn unsupported_stub_needs_the_exact_type_combination() {
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(ENTRY, rdf::TYPE, TYPE_A));
        graph.insert(TripleRef::new(ENTRY, rdf::TYPE, TYPE_B));
        let mut registry = TestRegistry::new();
        registry.register_unsupported([TYPE_A], "a only");
        let files = Files::new();
        assert!(registry.build(&graph, ENTRY, &files).is_empty());

        registry.register_unsupported([TYPE_A, TYPE_B], "a and b");
        let cases = registry.build(&graph, ENTRY, &files);
        assert_eq!(cases.len(), 1);
        assert!(matches!(&cases[0].kind, TestKind::Unsupported { reason } if reason == "a and b"));
    }
}
