use crate::application::dto::{AnalysisRequest, AnalysisResponse, GraphSource, LoadOrderOutcome};
use crate::dependency_graph::domain::{DependencyGraph, PackageRef, SkippedDependency};
use crate::dependency_graph::services::{
    FixtureParser, GraphAnalyzer, GraphCrawler, LoadOrderComputer,
};
use crate::ports::inbound::DependencyAnalysisPort;
use crate::ports::outbound::{CrateRegistry, FixtureReader, ProgressReporter};
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;


/// AnalyzeDependenciesUseCase - Core use case of the tool
///
/// Builds the adjacency structure (registry crawl or offline fixture), runs
/// the single-pass analyzer over it, then computes the load order.
///
/// # Type Parameters
/// * `REG` - CrateRegistry implementation (usually the caching decorator)
/// * `FR` - FixtureReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<REG, FR, PR> {
    registry: REG,
    fixture_reader: FR,
    progress_reporter: PR,
}

impl<REG, FR, PR> AnalyzeDependenciesUseCase<REG, FR, PR>
where
    REG: CrateRegistry,
    FR: FixtureReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(registry: REG, fixture_reader: FR, progress_reporter: PR) -> Self {
        Self {
            registry,
            fixture_reader,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let root = request.root_label();

        // Step 1: Build the adjacency structure
        let (mut graph, skipped) = match &request.source {
            GraphSource::Registry => self.crawl_registry(&request).await?,
            GraphSource::Fixture(path) => (self.load_fixture(path, &root)?, Vec::new()),
        };

        // Step 2: Tree, repeated nodes and cycles in one traversal
        self.progress_reporter.report(&format!(
            "🔍 Analyzing {} node(s), {} edge(s)...",
            graph.node_count(),
            graph.edge_count()
        ));
        let report = GraphAnalyzer::analyze(&root, &mut graph, request.max_depth);

        // Step 3: Load order; a cycle is an outcome, not a failure
        let load_order = Self::compute_load_order(&root, &graph)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Analysis complete: {} repeated node(s), {} cycle(s)",
            report.repeated_nodes.len(),
            report.cycles.len()
        ));

        Ok(AnalysisResponse {
            root,
            max_depth: request.max_depth,
            generated_at: Utc::now(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            report,
            load_order,
            skipped_dependencies: skipped,
        })
    }

    async fn crawl_registry(
        &self,
        request: &AnalysisRequest,
    ) -> Result<(DependencyGraph, Vec<SkippedDependency>)> {
        let version = request
            .version
            .clone()
            .ok_or_else(|| DepGraphError::InvalidPackage {
                reason: format!(
                    "A version is required to crawl '{}' from the registry",
                    request.package_name
                ),
            })?;
        let root = PackageRef::new(request.package_name.clone(), version)?;

        self.progress_reporter
            .report(&format!("🌐 Crawling dependencies of {}...", root));

        let outcome = GraphCrawler::new(&self.registry)
            .with_progress(&self.progress_reporter)
            .crawl_with_diagnostics(&root, request.max_depth)
            .await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Crawled {} package(s)",
            outcome.graph.node_count()
        ));
        self.report_skipped(&outcome.skipped);

        Ok((outcome.graph, outcome.skipped))
    }

    fn load_fixture(&self, path: &Path, root: &str) -> Result<DependencyGraph> {
        self.progress_reporter
            .report(&format!("📖 Loading fixture from: {}", path.display()));

        let content = self.fixture_reader.read_fixture(path)?;
        let graph = FixtureParser::parse(&content)?;

        if !graph.contains(root) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Root '{}' does not appear in the fixture; it will be rendered without dependencies",
                root
            ));
        }

        Ok(graph)
    }

    fn report_skipped(&self, skipped: &[SkippedDependency]) {
        if skipped.is_empty() {
            return;
        }
        for entry in skipped {
            self.progress_reporter.report_error(&format!(
                "   - {} {:?} (required by {}): {}",
                entry.name, entry.requirement, entry.parent, entry.reason
            ));
        }
        self.progress_reporter.report_error(&format!(
            "⚠️  Skipped {} dependency edge(s) whose version could not be resolved",
            skipped.len()
        ));
    }

    fn compute_load_order(root: &str, graph: &DependencyGraph) -> Result<LoadOrderOutcome> {
        match LoadOrderComputer::compute(root, graph) {
            Ok(order) => Ok(LoadOrderOutcome::Ordered { order }),
            Err(error) => match error.downcast_ref::<DepGraphError>() {
                Some(DepGraphError::CycleDetected { .. }) => Ok(LoadOrderOutcome::CycleDetected {
                    message: error.to_string(),
                }),
                _ => Err(error),
            },
        }
    }
}

#[async_trait]
impl<REG, FR, PR> DependencyAnalysisPort for AnalyzeDependenciesUseCase<REG, FR, PR>
where
    REG: CrateRegistry,
    FR: FixtureReader,
    PR: ProgressReporter,
{
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        self.execute(request).await
    }
}
