mod cli;

use cargo_depgraph::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use cargo_depgraph::adapters::outbound::filesystem::FileSystemReader;
use cargo_depgraph::adapters::outbound::network::{
    CachingCrateRegistry, CratesIoClient, RegistryCache,
};
use cargo_depgraph::application::dto::{
    AnalysisRequest, AnalysisResponse, GraphSource, LoadOrderOutcome, OutputFormat,
};
use cargo_depgraph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use cargo_depgraph::application::use_cases::AnalyzeDependenciesUseCase;
use cargo_depgraph::config::{self, ConfigFile};
use cargo_depgraph::dependency_graph::services::UNBOUNDED_DEPTH;
use cargo_depgraph::ports::inbound::DependencyAnalysisPort;
use cargo_depgraph::ports::outbound::{CrateRegistry, ProgressReporter};
use cargo_depgraph::shared::error::ExitCode;
use cargo_depgraph::shared::Result;
use clap::Parser;
use cli::Args;
use owo_colors::OwoColorize;
use std::process;
use std::sync::Arc;
use std::time::Duration;

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    registry_url: String,
    timeout: Duration,
    max_depth: usize,
    format: OutputFormat,
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                // --help / --version
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = resolve_settings(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let client = CratesIoClient::with_config(&settings.registry_url, settings.timeout)?;
    let registry = CachingCrateRegistry::with_cache(client, Arc::new(RegistryCache::new()));

    let source = match args.fixture.clone() {
        Some(path) => GraphSource::Fixture(path),
        None => GraphSource::Registry,
    };
    let request = AnalysisRequest::new(
        args.name.clone(),
        args.version.clone(),
        settings.max_depth,
        source,
    );

    let response = if args.quiet {
        analyze(registry, QuietProgressReporter, request).await?
    } else {
        analyze(registry, StderrProgressReporter::new(), request).await?
    };

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response)?;

    let presenter_type = match args.output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    Ok(exit_code_for(&response))
}

async fn analyze<REG, PR>(
    registry: REG,
    progress_reporter: PR,
    request: AnalysisRequest,
) -> Result<AnalysisResponse>
where
    REG: CrateRegistry,
    PR: ProgressReporter,
{
    let use_case = AnalyzeDependenciesUseCase::new(registry, FileSystemReader::new(), progress_reporter);
    use_case.analyze(request).await
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config {
        Some(ref path) => Ok(Some(config::load_config_from_path(path)?)),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// CLI flags override config values; config overrides built-in defaults.
fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let config_format = match config {
        Some(config) => config.output_format()?,
        None => None,
    };

    Ok(Settings {
        registry_url: args
            .registry_url
            .clone()
            .or_else(|| config.and_then(|c| c.registry_url.clone()))
            .unwrap_or_else(|| CratesIoClient::DEFAULT_REGISTRY_URL.to_string()),
        timeout: Duration::from_secs(
            config
                .and_then(|c| c.timeout_secs)
                .unwrap_or(CratesIoClient::DEFAULT_TIMEOUT_SECONDS),
        ),
        max_depth: args
            .depth
            .or_else(|| config.and_then(|c| c.max_depth))
            .unwrap_or(UNBOUNDED_DEPTH),
        format: args.format.or(config_format).unwrap_or_default(),
    })
}

fn exit_code_for(response: &AnalysisResponse) -> ExitCode {
    match response.load_order {
        LoadOrderOutcome::Ordered { .. } => ExitCode::Success,
        LoadOrderOutcome::CycleDetected { .. } => ExitCode::CycleDetected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["cargo-depgraph", "serde", "1.0.0"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn config(yaml: &str) -> ConfigFile {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = resolve_settings(&args(&[]), None).unwrap();
        assert_eq!(
            settings,
            Settings {
                registry_url: "https://crates.io/api/v1".to_string(),
                timeout: Duration::from_secs(15),
                max_depth: 0,
                format: OutputFormat::Text,
            }
        );
    }

    #[test]
    fn test_config_overrides_defaults() {
        let config = config(
            "registry_url: http://localhost:9000\ntimeout_secs: 3\nmax_depth: 4\nformat: json\n",
        );
        let settings = resolve_settings(&args(&[]), Some(&config)).unwrap();
        assert_eq!(settings.registry_url, "http://localhost:9000");
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert_eq!(settings.max_depth, 4);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = config("registry_url: http://localhost:9000\nmax_depth: 4\nformat: json\n");
        let cli = args(&[
            "--depth",
            "1",
            "--format",
            "text",
            "--registry-url",
            "http://127.0.0.1:1",
        ]);
        let settings = resolve_settings(&cli, Some(&config)).unwrap();
        assert_eq!(settings.registry_url, "http://127.0.0.1:1");
        assert_eq!(settings.max_depth, 1);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_exit_code_for_cycle() {
        let response = AnalysisResponse {
            root: "a".to_string(),
            max_depth: 0,
            generated_at: chrono::Utc::now(),
            node_count: 2,
            edge_count: 2,
            report: Default::default(),
            load_order: LoadOrderOutcome::CycleDetected {
                message: "cycle".to_string(),
            },
            skipped_dependencies: vec![],
        };
        assert_eq!(exit_code_for(&response), ExitCode::CycleDetected);
    }
}
