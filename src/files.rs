use anyhow::{bail, Context, Result};
use oxhttp::model::header::ACCEPT;
use oxhttp::model::Request;
use oxrdf::{Dataset, Graph, GraphName, GraphNameRef, Triple};
use oxrdfio::{RdfFormat, RdfParser};
use std::fs::{self, File};
use std::io::Read;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

/// Fixture loader: maps test file URLs to local directories and falls back to
/// HTTP with an optional on-disk cache.
///
/// Mappings are checked in registration order, so a more specific prefix must
/// be registered before a more general one.
#[derive(Default)]
pub struct Files {
    mappings: Vec<(String, PathBuf)>,
    cache_dir: Option<PathBuf>,
    client: OnceLock<oxhttp::Client>,
}

impl Files {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mut self, url_prefix: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.mappings.push((url_prefix.into(), dir.into()));
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn read(&self, url: &str) -> Result<Vec<u8>> {
        for (prefix, dir) in &self.mappings {
            if let Some(rest) = url.strip_prefix(prefix) {
                let path = dir.join(rest.trim_start_matches('/'));
                let mut buffer = Vec::new();
                File::open(&path)
                    .with_context(|| format!("Failed to open {} for {url}", path.display()))?
                    .read_to_end(&mut buffer)?;
                return Ok(buffer);
            }
        }
        if let Some(path) = self.cache_path(url) {
            if path.exists() {
                return Ok(fs::read(&path)?);
            }
        }
        let body = self.fetch(url)?;
        if let Some(path) = self.cache_path(url) {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &body)?;
        }
        Ok(body)
    }

    pub fn read_to_string(&self, url: &str) -> Result<String> {
        String::from_utf8(self.read(url)?).with_context(|| format!("{url} is not valid UTF-8"))
    }

    /// Parses the document at `url` into `graph`, dropping any named graph
    /// information. Blank nodes are renamed so that multiple documents can be
    /// merged without label clashes.
    pub fn load_to_graph(&self, url: &str, graph: &mut Graph, base_iri: Option<&str>) -> Result<()> {
        let data = self.read(url)?;
        let parser = RdfParser::from_format(guess_rdf_format(url))
            .with_base_iri(base_iri.unwrap_or(url))
            .with_context(|| format!("Invalid base IRI {url}"))?
            .rename_blank_nodes();
        for quad in parser.for_reader(data.as_slice()) {
            let quad = quad.with_context(|| format!("Failed to parse {url}"))?;
            graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
        }
        Ok(())
    }

    /// Parses the document at `url` into `dataset`, loading its default graph
    /// into `to_graph_name`.
    pub fn load_to_dataset(
        &self,
        url: &str,
        dataset: &mut Dataset,
        to_graph_name: GraphNameRef<'_>,
    ) -> Result<()> {
        let data = self.read(url)?;
        let parser = RdfParser::from_format(guess_rdf_format(url))
            .with_base_iri(url)
            .with_context(|| format!("Invalid base IRI {url}"))?
            .with_default_graph(to_graph_name.into_owned())
            .rename_blank_nodes();
        for quad in parser.for_reader(data.as_slice()) {
            dataset.insert(&quad.with_context(|| format!("Failed to parse {url}"))?);
        }
        Ok(())
    }

    pub fn load_dataset(&self, url: &str) -> Result<Dataset> {
        let mut dataset = Dataset::new();
        self.load_to_dataset(url, &mut dataset, GraphNameRef::DefaultGraph)?;
        Ok(dataset)
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let client = self.client.get_or_init(|| {
            oxhttp::Client::new()
                .with_redirection_limit(5)
                .with_user_agent(concat!("rdf-conformance/", env!("CARGO_PKG_VERSION")))
                .unwrap()
                .with_global_timeout(Duration::from_secs(60))
        });
        let request = Request::builder().uri(url).header(ACCEPT, "*/*").body(())?;
        let response = client.request(request)?;
        let status = response.status();
        if !status.is_success() {
            bail!("Error {status} returned by {url}");
        }
        let mut body = Vec::new();
        response.into_body().read_to_end(&mut body)?;
        Ok(body)
    }

    fn cache_path(&self, url: &str) -> Option<PathBuf> {
        let dir = self.cache_dir.as_ref()?;
        let key = url
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect::<String>();
        Some(dir.join(key))
    }
}

/// Parses an in-memory document, as produced by an implementation under test.
pub fn parse_dataset(data: &str, base_iri: &str, format: RdfFormat) -> Result<Dataset> {
    let mut dataset = Dataset::new();
    let parser = RdfParser::from_format(format)
        .with_base_iri(base_iri)
        .with_context(|| format!("Invalid base IRI {base_iri}"))?
        .with_default_graph(GraphName::DefaultGraph)
        .rename_blank_nodes();
    for quad in parser.for_reader(data.as_bytes()) {
        dataset.insert(&quad?);
    }
    Ok(dataset)
}

/// Manifests and fixtures without a known extension default to Turtle.
/// `txt` falls through too: the extension registry maps it to N-Triples, but
/// the testsuites that publish `.txt` manifests write them in Turtle.
pub fn guess_rdf_format(url: &str) -> RdfFormat {
    url.rsplit_once('.')
        .filter(|(_, ext)| !ext.contains('/') && *ext != "txt")
        .and_then(|(_, ext)| RdfFormat::from_extension(ext))
        .unwrap_or(RdfFormat::Turtle)
}

/// Extension-based media type guess, covering JSON-LD which the harness
/// itself never parses but hands over to adapters.
pub fn guess_media_type(url: &str) -> Option<&'static str> {
    let (_, ext) = url.rsplit_once('.')?;
    if ext == "jsonld" {
        return Some("application/ld+json");
    }
    Some(RdfFormat::from_extension(ext)?.media_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_guessing_defaults_to_turtle() {
        assert_eq!(guess_rdf_format("http://example.com/m.ttl"), RdfFormat::Turtle);
        assert_eq!(guess_rdf_format("http://example.com/m.nq"), RdfFormat::NQuads);
        assert_eq!(guess_rdf_format("http://example.com/valid1.txt"), RdfFormat::Turtle);
        assert_eq!(guess_rdf_format("http://example.com/manifest"), RdfFormat::Turtle);
    }

    #[test]
    fn media_type_guessing_covers_json_ld() {
        assert_eq!(
            guess_media_type("http://example.com/t.jsonld"),
            Some("application/ld+json")
        );
        assert_eq!(guess_media_type("http://example.com/t.trig"), Some("application/trig"));
        assert_eq!(guess_media_type("http://example.com/t.xyz"), None);
    }
}
