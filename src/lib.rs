//! cargo-depgraph - Dependency graph analyzer for crates.io packages
//!
//! This library crawls the published dependency graph of a crate (or reads
//! an offline adjacency fixture), renders it as a deterministic tree,
//! reports repeated (diamond) nodes and cycles, and computes a load order.
//! It follows a hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): graph model, crawler, analyzer, load order
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cargo_depgraph::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let registry = CachingCrateRegistry::with_cache(
//!     CratesIoClient::new()?,
//!     Arc::new(RegistryCache::new()),
//! );
//! let use_case = AnalyzeDependenciesUseCase::new(
//!     registry,
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = AnalysisRequest::new(
//!     "serde".to_string(),
//!     Some("1.0.200".to_string()),
//!     2,
//!     GraphSource::Registry,
//! );
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let output = TextFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{
        CachingCrateRegistry, CratesIoClient, RegistryCache,
    };
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, GraphSource, LoadOrderOutcome, OutputFormat,
    };
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::dependency_graph::domain::{
        AnalysisReport, DependencyGraph, DependencyRecord, PackageRef, SkippedDependency,
        VersionRecord,
    };
    pub use crate::dependency_graph::services::{
        FixtureParser, GraphAnalyzer, GraphCrawler, LoadOrderComputer, VersionResolver,
    };
    pub use crate::ports::inbound::DependencyAnalysisPort;
    pub use crate::ports::outbound::{
        CrateRegistry, FixtureReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::DepGraphError;
    pub use crate::shared::Result;
}
