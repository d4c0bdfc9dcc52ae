use super::version_resolver::VersionResolver;
use crate::dependency_graph::domain::{
    format_label, DependencyGraph, PackageRef, SkippedDependency,
};
use crate::ports::outbound::{CrateRegistry, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use std::collections::HashMap;

/// Depth bound meaning "expand everything"
pub const UNBOUNDED_DEPTH: usize = 0;

/// Result of a crawl together with the edges that were dropped on the way
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub graph: DependencyGraph,
    pub skipped: Vec<SkippedDependency>,
}

struct CrawlFrame {
    name: String,
    version: String,
    depth: usize,
}

/// GraphCrawler service expanding a root crate into a full adjacency structure
///
/// The crawl is a depth-first walk driven by an explicit LIFO work list.
/// Each label is fetched at most once; later edges to it reuse the label.
/// A label first reached on a long path and later on a shorter one has its
/// known children re-queued at the shorter depth, so under a depth bound
/// the resulting structure does not depend on the order in which the
/// registry lists dependencies.
/// With a positive `max_depth`, nodes at that depth are recorded as leaves
/// and their dependencies are never fetched.
///
/// Failure policy:
/// - fetching a node's own dependency list fails => the whole crawl fails
/// - resolving one child's version fails => that edge is dropped, crawl continues
pub struct GraphCrawler<'a, R: CrateRegistry + ?Sized> {
    registry: &'a R,
    progress_reporter: Option<&'a dyn ProgressReporter>,
}

impl<'a, R: CrateRegistry + ?Sized> GraphCrawler<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self {
            registry,
            progress_reporter: None,
        }
    }

    pub fn with_progress(mut self, progress_reporter: &'a dyn ProgressReporter) -> Self {
        self.progress_reporter = Some(progress_reporter);
        self
    }

    /// Crawls from `root`; see [`GraphCrawler::crawl_with_diagnostics`].
    pub async fn crawl(&self, root: &PackageRef, max_depth: usize) -> Result<DependencyGraph> {
        Ok(self.crawl_with_diagnostics(root, max_depth).await?.graph)
    }

    /// Crawls from `root` and also returns the dependencies whose version
    /// could not be resolved.
    ///
    /// # Errors
    /// Returns the first error raised while fetching a node's dependency
    /// list. No partial graph is returned in that case.
    pub async fn crawl_with_diagnostics(
        &self,
        root: &PackageRef,
        max_depth: usize,
    ) -> Result<CrawlOutcome> {
        let resolver = VersionResolver::new(self.registry);
        let mut outcome = CrawlOutcome::default();
        // Expanded label -> shallowest depth it has been reached at
        let mut expanded: HashMap<String, usize> = HashMap::new();
        // Expanded label -> resolved (name, version) of its children
        let mut resolved_children: HashMap<String, Vec<(String, String)>> = HashMap::new();
        let mut stack = vec![CrawlFrame {
            name: root.name().to_string(),
            version: root.version().to_string(),
            depth: 0,
        }];

        while let Some(frame) = stack.pop() {
            let label = format_label(&frame.name, &frame.version);
            if let Some(known_depth) = expanded.get_mut(&label) {
                if frame.depth >= *known_depth {
                    continue;
                }
                // Shorter path: push the known children again at the new
                // depth so the bound applies as if this path came first.
                *known_depth = frame.depth;
                if let Some(children) = resolved_children.get(&label) {
                    for (name, version) in children {
                        stack.push(CrawlFrame {
                            name: name.clone(),
                            version: version.clone(),
                            depth: frame.depth + 1,
                        });
                    }
                }
                continue;
            }

            if max_depth != UNBOUNDED_DEPTH && frame.depth >= max_depth {
                outcome.graph.ensure_node(&label);
                continue;
            }
            expanded.insert(label.clone(), frame.depth);

            if let Some(reporter) = self.progress_reporter {
                reporter.report_step(expanded.len(), &label);
            }

            let records = self
                .registry
                .fetch_dependencies(&frame.name, &frame.version)
                .await
                .with_context(|| format!("Failed to fetch dependencies for {}", label))?;

            let mut children: Vec<String> = Vec::with_capacity(records.len());
            let mut child_refs: Vec<(String, String)> = Vec::with_capacity(records.len());
            for record in records.iter().filter(|record| record.is_normal_edge()) {
                match resolver.resolve(&record.name, &record.requirement).await {
                    Ok(version) => {
                        let child = format_label(&record.name, &version);
                        // Target-specific tables can list the same crate twice
                        if children.contains(&child) {
                            continue;
                        }
                        children.push(child);
                        child_refs.push((record.name.clone(), version.clone()));
                        stack.push(CrawlFrame {
                            name: record.name.clone(),
                            version,
                            depth: frame.depth + 1,
                        });
                    }
                    Err(e) => outcome.skipped.push(SkippedDependency {
                        parent: label.clone(),
                        name: record.name.clone(),
                        requirement: record.requirement.clone(),
                        reason: e.to_string(),
                    }),
                }
            }

            resolved_children.insert(label.clone(), child_refs);
            outcome.graph.set_children(label, children);
        }

        Ok(outcome)
    }
}
