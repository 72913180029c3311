use crate::adapter::{Adapter, Skipped};
use crate::cases::TestCase;
use crate::manifest::Manifest;
use crate::report::{Outcome, TestOutcome};
use anyhow::anyhow;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use time::OffsetDateTime;

/// Runs the tests of a manifest tree sequentially, depth-first, entries
/// before sub-manifests, and collects one outcome per executed test.
pub struct Runner {
    timeout: Duration,
    uri_filter: Option<String>,
    specification: Option<String>,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            uri_filter: None,
            specification: None,
        }
    }
}

impl Runner {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Only runs tests whose IRI contains the given substring. Filtered-out
    /// tests get no outcome at all.
    pub fn with_uri_filter(mut self, filter: impl Into<String>) -> Self {
        self.uri_filter = Some(filter.into());
        self
    }

    /// Restricts the run to the conformance requirements of one registered
    /// specification. A specification absent from the manifest runs nothing.
    pub fn with_specification(mut self, specification: impl Into<String>) -> Self {
        self.specification = Some(specification.into());
        self
    }

    pub fn run(&self, manifest: &Manifest, adapter: &Arc<dyn Adapter>) -> Vec<TestOutcome> {
        let mut outcomes = Vec::new();
        if let Some(specification) = &self.specification {
            if let Some(scoped) = manifest
                .specifications
                .as_ref()
                .and_then(|specifications| specifications.get(specification))
            {
                self.run_node(scoped, adapter, &mut outcomes);
            }
        } else {
            self.run_node(manifest, adapter, &mut outcomes);
        }
        outcomes
    }

    fn run_node(
        &self,
        manifest: &Manifest,
        adapter: &Arc<dyn Adapter>,
        outcomes: &mut Vec<TestOutcome>,
    ) {
        for test in &manifest.tests {
            if let Some(filter) = &self.uri_filter {
                if !test.uri.as_str().contains(filter.as_str()) {
                    continue;
                }
            }
            outcomes.push(self.run_test(test, adapter));
        }
        for sub_manifest in &manifest.sub_manifests {
            self.run_node(sub_manifest, adapter, outcomes);
        }
    }

    /// The deadline is advisory: the worker thread is abandoned on timeout,
    /// not killed, so a test stuck in a tight loop keeps its thread until the
    /// process exits.
    fn run_test(&self, test: &Arc<TestCase>, adapter: &Arc<dyn Adapter>) -> TestOutcome {
        let date = OffsetDateTime::now_utc();
        let start = Instant::now();
        let (sender, receiver) = mpsc::channel();
        let worker_test = Arc::clone(test);
        let worker_adapter = Arc::clone(adapter);
        thread::spawn(move || {
            let _ = sender.send(worker_test.run(&*worker_adapter));
        });
        let outcome = match receiver.recv_timeout(self.timeout) {
            Ok(Ok(())) => Outcome::Passed,
            Ok(Err(error)) => {
                if let Some(Skipped(reason)) = error.downcast_ref::<Skipped>() {
                    Outcome::Skipped(reason.clone())
                } else {
                    Outcome::Failed(error)
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => Outcome::Failed(anyhow!(
                "The test {} timed out after {:?}",
                test.uri,
                self.timeout
            )),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Outcome::Failed(anyhow!("The test {} panicked", test.uri))
            }
        };
        TestOutcome {
            test: test.uri.clone(),
            name: test.name.clone(),
            outcome,
            duration: start.elapsed(),
            date,
        }
    }
}
