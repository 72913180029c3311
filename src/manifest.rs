use crate::cases::TestCase;
use crate::evaluator::TestRegistry;
use crate::files::Files;
use crate::vocab::{dawgt, mf, rdft};
use anyhow::{bail, Result};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, NamedNode, NamedNodeRef, SubjectRef, Term, TermRef, TripleRef};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A resolved manifest tree, immutable once built.
pub struct Manifest {
    pub uri: NamedNode,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub sub_manifests: Vec<Manifest>,
    pub tests: Vec<Arc<TestCase>>,
    /// Specification IRI → tree of conformance requirements, present only on
    /// manifests carrying `mf:specifications`.
    pub specifications: Option<HashMap<String, Manifest>>,
}

/// Resolves manifest documents into a `Manifest` tree.
///
/// All documents are merged into one shared graph (with blank nodes renamed),
/// so cross-document references resolve no matter which include brought the
/// triples in. The merge is a set union, load order does not matter.
pub struct ManifestResolver<'a> {
    files: &'a Files,
    registry: &'a TestRegistry,
    graph: Graph,
    loaded: HashSet<String>,
    resolved: HashSet<String>,
}

impl<'a> ManifestResolver<'a> {
    pub fn new(files: &'a Files, registry: &'a TestRegistry) -> Self {
        Self {
            files,
            registry,
            graph: Graph::new(),
            loaded: HashSet::new(),
            resolved: HashSet::new(),
        }
    }

    pub fn resolve(mut self, url: &str) -> Result<Manifest> {
        self.resolved.insert(url.to_owned());
        self.resolve_document(url)
    }

    fn resolve_document(&mut self, url: &str) -> Result<Manifest> {
        self.load_document(url)?;
        let root = self.find_root(url)?;
        let includes = self.include_urls(root.as_ref())?;
        for include in &includes {
            self.load_document(include)?;
        }
        // the root is looked up again once the includes are merged so that a
        // root declared in an included document is found too
        let root = self.find_root(url)?;
        self.build_node(root)
    }

    fn build_node(&mut self, root: NamedNode) -> Result<Manifest> {
        let mut sub_manifests = Vec::new();
        for include in self.include_urls(root.as_ref())? {
            if !self.resolved.insert(include.clone()) {
                continue;
            }
            sub_manifests.push(self.resolve_document(&include)?);
        }

        let mut tests = Vec::new();
        let entry_lists = self
            .graph
            .objects_for_subject_predicate(root.as_ref(), mf::ENTRIES)
            .map(TermRef::into_owned)
            .collect::<Vec<_>>();
        for list in entry_lists {
            let list = term_as_subject(list.as_ref())
                .map_err(|_| anyhow::anyhow!("Invalid mf:entries value in {root}"))?;
            for entry in RdfListIterator::new(&self.graph, list) {
                let Term::NamedNode(entry) = entry else {
                    bail!("Invalid test identifier {entry} in {root}");
                };
                if self.is_rejected(entry.as_ref()) {
                    continue;
                }
                for case in self.registry.build(&self.graph, entry.as_ref(), self.files) {
                    tests.push(Arc::new(case));
                }
            }
        }

        let specifications = self.specifications(root.as_ref())?;
        Ok(Manifest {
            label: self.literal(root.as_ref(), rdfs::LABEL),
            comment: self.literal(root.as_ref(), rdfs::COMMENT),
            uri: root,
            sub_manifests,
            tests,
            specifications,
        })
    }

    fn specifications(&mut self, root: NamedNodeRef<'_>) -> Result<Option<HashMap<String, Manifest>>> {
        let Some(list) = self
            .graph
            .object_for_subject_predicate(root, mf::SPECIFICATIONS)
            .map(TermRef::into_owned)
        else {
            return Ok(None);
        };
        let list = term_as_subject(list.as_ref())
            .map_err(|_| anyhow::anyhow!("Invalid mf:specifications value in {root}"))?;
        let specifications = RdfListIterator::new(&self.graph, list).collect::<Vec<_>>();
        let mut map = HashMap::new();
        for specification in specifications {
            let Term::NamedNode(specification) = specification else {
                bail!("Invalid specification identifier {specification} in {root}");
            };
            let requirements = self
                .graph
                .objects_for_subject_predicate(specification.as_ref(), mf::CONFORMANCE_REQUIREMENTS)
                .map(TermRef::into_owned)
                .collect::<Vec<_>>();
            let mut sub_manifests = Vec::new();
            for list in requirements {
                let list = term_as_subject(list.as_ref()).map_err(|_| {
                    anyhow::anyhow!("Invalid mf:conformanceRequirements value in {specification}")
                })?;
                let members = RdfListIterator::new(&self.graph, list).collect::<Vec<_>>();
                for member in members {
                    let Term::NamedNode(member) = member else {
                        bail!("Invalid conformance requirement {member} in {specification}");
                    };
                    sub_manifests.push(self.build_node(member)?);
                }
            }
            map.insert(
                specification.as_str().to_owned(),
                Manifest {
                    label: self.literal(specification.as_ref(), rdfs::LABEL),
                    comment: self.literal(specification.as_ref(), rdfs::COMMENT),
                    uri: specification,
                    sub_manifests,
                    tests: Vec::new(),
                    specifications: None,
                },
            );
        }
        Ok(Some(map))
    }

    fn load_document(&mut self, url: &str) -> Result<()> {
        if !self.loaded.insert(url.to_owned()) {
            return Ok(());
        }
        self.files.load_to_graph(url, &mut self.graph, Some(url))
    }

    /// Manifest documents do not always describe themselves under their own
    /// URL: `.../manifest.ttl` may declare `.../manifest`, or a last path
    /// segment turned into a fragment.
    fn find_root(&self, url: &str) -> Result<NamedNode> {
        for candidate in root_candidates(url) {
            let Ok(node) = NamedNode::new(candidate) else {
                continue;
            };
            if self.graph.triples_for_subject(node.as_ref()).next().is_some() {
                return Ok(node);
            }
        }
        bail!("No manifest resource found in {url}")
    }

    fn include_urls(&self, root: NamedNodeRef<'_>) -> Result<Vec<String>> {
        let mut urls = Vec::new();
        for list in self.graph.objects_for_subject_predicate(root, mf::INCLUDE) {
            let list = term_as_subject(list)
                .map_err(|_| anyhow::anyhow!("Invalid mf:include value in {root}"))?;
            for include in RdfListIterator::new(&self.graph, list) {
                match include {
                    Term::NamedNode(include) => urls.push(include.into_string()),
                    // a misspelled include (a string literal...) is a
                    // configuration error, not something to skip over
                    include => bail!("Manifest includes must be IRIs, found {include} in {root}"),
                }
            }
        }
        Ok(urls)
    }

    fn is_rejected(&self, entry: NamedNodeRef<'_>) -> bool {
        self.graph
            .contains(TripleRef::new(entry, rdft::APPROVAL, rdft::REJECTED))
            || self
                .graph
                .contains(TripleRef::new(entry, dawgt::APPROVAL, dawgt::WITHDRAWN))
    }

    fn literal(&self, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Option<String> {
        match self.graph.object_for_subject_predicate(subject, predicate)? {
            TermRef::Literal(literal) => Some(literal.value().to_owned()),
            _ => None,
        }
    }
}

fn root_candidates(url: &str) -> Vec<String> {
    let mut candidates = vec![url.to_owned()];
    let stem = match url.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => {
            candidates.push(stem.to_owned());
            stem
        }
        _ => url,
    };
    if let Some((head, last)) = stem.rsplit_once('/') {
        if !head.is_empty() && !last.is_empty() {
            candidates.push(format!("{head}#{last}"));
        }
    }
    candidates
}

fn term_as_subject(term: TermRef<'_>) -> Result<SubjectRef<'_>> {
    match term {
        TermRef::NamedNode(term) => Ok(term.into()),
        TermRef::BlankNode(term) => Ok(term.into()),
        term => bail!("{term} is not a valid subject"),
    }
}

struct RdfListIterator<'a> {
    graph: &'a Graph,
    current: Option<SubjectRef<'a>>,
}

impl<'a> RdfListIterator<'a> {
    fn new(graph: &'a Graph, root: SubjectRef<'a>) -> Self {
        Self {
            graph,
            current: Some(root),
        }
    }
}

impl<'a> Iterator for RdfListIterator<'a> {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        let current = self.current?;
        if current == rdf::NIL.into() {
            self.current = None;
            return None;
        }
        let first = self
            .graph
            .object_for_subject_predicate(current, rdf::FIRST)?;
        self.current = match self.graph.object_for_subject_predicate(current, rdf::REST) {
            Some(TermRef::NamedNode(n)) if n == rdf::NIL => None,
            Some(TermRef::NamedNode(n)) => Some(n.into()),
            Some(TermRef::BlankNode(n)) => Some(n.into()),
            _ => None,
        };
        Some(first.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_candidate_fallback_chain() {
        assert_eq!(
            root_candidates("http://example.com/dir/manifest.ttl"),
            [
                "http://example.com/dir/manifest.ttl",
                "http://example.com/dir/manifest",
                "http://example.com/dir#manifest"
            ]
        );
        // a dot in the host is not an extension
        assert_eq!(
            root_candidates("http://example.com/manifest"),
            ["http://example.com/manifest", "http://example.com#manifest"]
        );
    }
}
