use crate::results::QueryResult;
use anyhow::{Error, Result};
use oxrdf::Dataset;
use std::fmt;

/// Marker error for tests an implementation declines to run.
///
/// The runner downcasts errors to this type and reports the test as skipped
/// instead of failed, so adapters can return it from any depth of a call.
#[derive(Debug, Clone)]
pub struct Skipped(pub String);

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped: {}", self.0)
    }
}

impl std::error::Error for Skipped {}

pub fn skipped(reason: impl Into<String>) -> Error {
    Error::new(Skipped(reason.into()))
}

/// The implementation under test.
///
/// Every method defaults to a skipped error so partial implementations only
/// override the operations they support. `media_type` identifies the concrete
/// syntax ("text/turtle", "application/ld+json"...).
pub trait Adapter: Send + Sync {
    fn parse(&self, data: &str, base_iri: &str, media_type: &str) -> Result<Dataset> {
        let _ = (data, base_iri);
        Err(skipped(format!("parsing {media_type} is not supported")))
    }

    fn serialize(&self, data: &Dataset, base_iri: &str, media_type: &str) -> Result<String> {
        let _ = (data, base_iri);
        Err(skipped(format!("serializing to {media_type} is not supported")))
    }

    fn check_query_syntax(&self, query: &str, base_iri: &str) -> Result<()> {
        let _ = (query, base_iri);
        Err(skipped("query parsing is not supported"))
    }

    fn check_update_syntax(&self, update: &str, base_iri: &str) -> Result<()> {
        let _ = (update, base_iri);
        Err(skipped("update parsing is not supported"))
    }

    fn query(&self, data: &Dataset, query: &str, base_iri: &str) -> Result<QueryResult> {
        let _ = (data, query, base_iri);
        Err(skipped("query evaluation is not supported"))
    }

    fn update(&self, data: &Dataset, update: &str, base_iri: &str) -> Result<Dataset> {
        let _ = (data, update, base_iri);
        Err(skipped("update evaluation is not supported"))
    }
}

/// Adapter that skips everything, useful to validate manifests without an
/// implementation wired in.
pub struct NoopAdapter;

impl Adapter for NoopAdapter {}
