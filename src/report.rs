use crate::results::canonical;
use crate::vocab::{dc, doap, earl, foaf};
use anyhow::{Error, Result};
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{BlankNode, Dataset, GraphName, Literal, NamedNode, NamedNodeRef, Quad, Subject, Term};
use oxrdfio::{RdfFormat, RdfSerializer};
use std::fmt::Write as _;
use std::io::Write;
use std::time::Duration;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Debug)]
pub enum Outcome {
    Passed,
    Failed(Error),
    Skipped(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug)]
pub struct TestOutcome {
    pub test: NamedNode,
    pub name: Option<String>,
    pub outcome: Outcome,
    pub duration: Duration,
    pub date: OffsetDateTime,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// One line per test plus a detail block per failure.
    Detailed,
    /// One line per test and the tally.
    Summary,
}

pub fn build_text_report(outcomes: &[TestOutcome], style: ReportStyle) -> String {
    let mut report = String::new();
    let mut failures = Vec::new();
    let mut skipped = 0_usize;
    for outcome in outcomes {
        match &outcome.outcome {
            Outcome::Passed => writeln!(
                &mut report,
                "ok\t{}\t{}ms",
                outcome.test,
                outcome.duration.as_millis()
            )
            .unwrap(),
            Outcome::Failed(error) => {
                writeln!(&mut report, "failed\t{}", outcome.test).unwrap();
                failures.push((outcome, error));
            }
            Outcome::Skipped(reason) => {
                writeln!(&mut report, "skipped\t{}\t{reason}", outcome.test).unwrap();
                skipped += 1;
            }
        }
    }
    if style == ReportStyle::Detailed {
        for (outcome, error) in &failures {
            writeln!(&mut report, "\n{} failed:", outcome.test).unwrap();
            if let Some(name) = &outcome.name {
                writeln!(&mut report, "  name: {name}").unwrap();
            }
            for line in format!("{error:#}").lines() {
                writeln!(&mut report, "  {line}").unwrap();
            }
        }
    }
    // skipped tests count as conforming, they are outside of what the
    // implementation claims to support
    let total = outcomes.len();
    let passed = total - failures.len();
    writeln!(
        &mut report,
        "\n{passed}/{total} tests passed ({skipped} skipped, {} failed)",
        failures.len()
    )
    .unwrap();
    report
}

pub fn count_failures(outcomes: &[TestOutcome]) -> usize {
    outcomes.iter().filter(|o| o.outcome.is_failure()).count()
}

/// Description of the software under test for the EARL report.
pub struct SoftwareDescription {
    pub uri: NamedNode,
    pub name: String,
    pub homepage: Option<NamedNode>,
    /// (author IRI, author name) pairs.
    pub authors: Vec<(NamedNode, String)>,
}

impl SoftwareDescription {
    pub fn new(uri: NamedNode, name: impl Into<String>) -> Self {
        Self {
            uri,
            name: name.into(),
            homepage: None,
            authors: Vec::new(),
        }
    }
}

/// Serializes the outcomes as an [EARL](https://www.w3.org/TR/EARL10-Schema/)
/// report, the format the W3C aggregates implementation reports from.
pub fn build_earl_report<W: Write>(
    outcomes: &[TestOutcome],
    software: &SoftwareDescription,
    write: W,
) -> Result<W> {
    let mut dataset = Dataset::new();
    let mut insert = |s: Subject, p: NamedNodeRef<'_>, o: Term| {
        dataset.insert(&Quad::new(s, p.into_owned(), o, GraphName::DefaultGraph));
    };
    let software_uri = software.uri.clone();
    insert(software_uri.clone().into(), rdf::TYPE, earl::SOFTWARE.into_owned().into());
    insert(software_uri.clone().into(), rdf::TYPE, doap::PROJECT.into_owned().into());
    insert(
        software_uri.clone().into(),
        doap::NAME,
        Literal::new_simple_literal(&software.name).into(),
    );
    if let Some(homepage) = &software.homepage {
        insert(software_uri.clone().into(), doap::HOMEPAGE, homepage.clone().into());
    }
    for (author, name) in &software.authors {
        insert(software_uri.clone().into(), doap::DEVELOPER, author.clone().into());
        insert(author.clone().into(), rdf::TYPE, foaf::PERSON.into_owned().into());
        insert(
            author.clone().into(),
            foaf::NAME,
            Literal::new_simple_literal(name).into(),
        );
    }

    for outcome in outcomes {
        let assertion = BlankNode::default();
        let result = BlankNode::default();
        insert(assertion.clone().into(), rdf::TYPE, earl::ASSERTION.into_owned().into());
        insert(assertion.clone().into(), earl::ASSERTED_BY, software_uri.clone().into());
        insert(assertion.clone().into(), earl::SUBJECT, software_uri.clone().into());
        insert(assertion.clone().into(), earl::TEST, outcome.test.clone().into());
        insert(assertion.clone().into(), earl::MODE, earl::AUTOMATIC.into_owned().into());
        insert(assertion.into(), earl::RESULT, result.clone().into());
        insert(result.clone().into(), rdf::TYPE, earl::TEST_RESULT.into_owned().into());
        let verdict = match &outcome.outcome {
            Outcome::Passed => earl::PASSED,
            Outcome::Failed(_) => earl::FAILED,
            Outcome::Skipped(_) => earl::INAPPLICABLE,
        };
        insert(result.clone().into(), earl::OUTCOME, verdict.into_owned().into());
        insert(
            result.into(),
            dc::DATE,
            Literal::new_typed_literal(outcome.date.format(&Rfc3339)?, xsd::DATE_TIME).into(),
        );
    }

    let mut serializer = RdfSerializer::from_format(RdfFormat::NTriples).for_writer(write);
    for quad in &dataset {
        serializer.serialize_quad(quad)?;
    }
    Ok(serializer.finish()?)
}

/// Line diff between the canonical N-Quads renderings of two datasets, used
/// in isomorphism failure messages.
pub fn dataset_diff(expected: &Dataset, actual: &Dataset) -> String {
    format_diff(
        &normalized_quads(expected),
        &normalized_quads(actual),
        "quads",
    )
}

fn normalized_quads(dataset: &Dataset) -> String {
    let mut quads = canonical(dataset)
        .iter()
        .map(|q| format!("{q} ."))
        .collect::<Vec<_>>();
    quads.sort();
    quads.join("\n")
}

pub fn format_diff(expected: &str, actual: &str, kind: &str) -> String {
    let mut ret = String::new();
    writeln!(
        &mut ret,
        "Note: missing {kind} in yellow and extra {kind} in blue"
    )
    .unwrap();
    for change in dissimilar::diff(expected, actual) {
        let (s, color) = match change {
            dissimilar::Chunk::Equal(s) => (s, ""),
            dissimilar::Chunk::Delete(s) => (s, "\u{1b}[93m"),
            dissimilar::Chunk::Insert(s) => (s, "\u{1b}[94m"),
        };
        write!(&mut ret, "{color}{s}{}", if color.is_empty() { "" } else { "\u{1b}[0m" }).unwrap();
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn outcome(uri: &str, outcome: Outcome) -> TestOutcome {
        TestOutcome {
            test: NamedNode::new_unchecked(uri),
            name: None,
            outcome,
            duration: Duration::from_millis(1),
            date: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn tally_counts_skipped_as_passing() {
        let outcomes = [
            outcome("http://example.com/t1", Outcome::Passed),
            outcome("http://example.com/t2", Outcome::Skipped("no".into())),
            outcome("http://example.com/t3", Outcome::Failed(anyhow!("boom"))),
        ];
        let report = build_text_report(&outcomes, ReportStyle::Summary);
        assert!(report.contains("2/3 tests passed (1 skipped, 1 failed)"));
        assert_eq!(count_failures(&outcomes), 1);
    }

    #[test]
    fn detailed_report_carries_failure_messages() {
        let outcomes = [outcome("http://example.com/t1", Outcome::Failed(anyhow!("boom")))];
        let report = build_text_report(&outcomes, ReportStyle::Detailed);
        assert!(report.contains("boom"));
    }

    #[test]
    fn earl_report_is_serializable() -> Result<()> {
        let outcomes = [outcome("http://example.com/t1", Outcome::Passed)];
        let software = SoftwareDescription::new(
            NamedNode::new("http://example.com/software")?,
            "example",
        );
        let buffer = build_earl_report(&outcomes, &software, Vec::new())?;
        let report = String::from_utf8(buffer)?;
        assert!(report.contains("http://www.w3.org/ns/earl#passed"));
        assert!(report.contains("http://example.com/t1"));
        Ok(())
    }
}
