pub mod fixture_parser;
pub mod graph_analyzer;
pub mod graph_crawler;
pub mod load_order;
pub mod version_resolver;

#[cfg(test)]
pub(crate) mod test_registry;

pub use fixture_parser::FixtureParser;
pub use graph_analyzer::GraphAnalyzer;
pub use graph_crawler::{CrawlOutcome, GraphCrawler, UNBOUNDED_DEPTH};
pub use load_order::LoadOrderComputer;
pub use version_resolver::{select_version, Requirement, VersionResolver};
