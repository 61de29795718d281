mod cli;

use apk_graph::adapters::outbound::console::StderrProgressReporter;
use apk_graph::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdinReader, StdoutPresenter, STDIN_PATH,
};
use apk_graph::application::dto::{AnalysisRequest, AnalysisResponse};
use apk_graph::application::factories::FormatterFactory;
use apk_graph::application::use_cases::{AnalyzeUseCase, LoadIndexUseCase};
use apk_graph::application::SnapshotStore;
use apk_graph::config::{self, Settings};
use apk_graph::package_graph::domain::ExtractionMode;
use apk_graph::ports::outbound::OutputPresenter;
use apk_graph::shared::error::{ExitCode, GraphError};
use apk_graph::shared::Result;
use cli::{Args, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\n{} {}", "Caused by:".yellow(), err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            if discovered.is_some() && !args.quiet {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            discovered
        }
    };
    let settings = Settings::from_config(config_file.as_ref())?;

    let index = args.index.clone().unwrap_or_else(|| settings.index.clone());
    let format = args.format.unwrap_or(settings.format);
    let request = build_request(&args.command, &settings)?;

    let store = SnapshotStore::new();
    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    if index.as_os_str() == STDIN_PATH {
        LoadIndexUseCase::new(StdinReader::new(), reporter).execute(&index, &store)?;
    } else {
        LoadIndexUseCase::new(FileSystemReader::new(), reporter).execute(&index, &store)?;
    }

    let use_case = AnalyzeUseCase::new(store).with_default_package(settings.default_package);
    let response = use_case.execute(request)?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let rendered = FormatterFactory::create(format).format(&response)?;

    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&rendered)?;

    Ok(response_exit_code(&response))
}

/// Translates a subcommand into a request, filling gaps from `settings`
fn build_request(command: &Command, settings: &Settings) -> Result<AnalysisRequest> {
    let request = match command.clone() {
        Command::Stats { package } => AnalysisRequest::Stats { package },
        Command::Critical { limit } => AnalysisRequest::Critical {
            limit: positive_limit(limit.unwrap_or(settings.critical_limit))?,
        },
        Command::Cycles => AnalysisRequest::Cycles,
        Command::Leaves => AnalysisRequest::Leaves,
        Command::Path { from, to } => AnalysisRequest::Path { from, to },
        Command::Subgraph {
            package,
            depth,
            transitive,
        } => {
            // An explicit --depth beats a config-level `transitive: true`.
            let mode = match (transitive, depth) {
                (true, _) => ExtractionMode::Transitive,
                (false, Some(max_depth)) => ExtractionMode::Bounded { max_depth },
                (false, None) if settings.transitive => ExtractionMode::Transitive,
                (false, None) => ExtractionMode::Bounded {
                    max_depth: settings.depth,
                },
            };
            AnalysisRequest::Subgraph { package, mode }
        }
        Command::Search { query } => AnalysisRequest::Search { query },
        Command::Overview { limit } => AnalysisRequest::Overview {
            limit: positive_limit(limit.unwrap_or(settings.critical_limit))?,
        },
        Command::Details { package } => AnalysisRequest::Details { package },
    };
    Ok(request)
}

fn positive_limit(limit: usize) -> Result<usize> {
    if limit == 0 {
        return Err(GraphError::Validation {
            message: "--limit must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(limit)
}

fn response_exit_code(response: &AnalysisResponse) -> ExitCode {
    if response.is_not_found() {
        ExitCode::NotFound
    } else {
        ExitCode::Success
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<GraphError>() {
        Some(GraphError::PackageNotFound { .. }) => ExitCode::NotFound,
        Some(GraphError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
