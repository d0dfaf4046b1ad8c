mod cli;

use clap::Parser;
use cli::Args;
use depfilter::adapters::outbound::console::StderrDiagnosticSink;
use depfilter::adapters::outbound::filesystem::{ConfigSettingsSource, FileSystemReader};
use depfilter::application::dto::FilterRequest;
use depfilter::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use depfilter::application::use_cases::FilterComponentsUseCase;
use depfilter::config::{self, ConfigFile};
use depfilter::ports::outbound::{DiagnosticSink, LogLevel};
use depfilter::shared::{ExitCode, Result};
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let exit_code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(exit_code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
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

fn run(args: Args) -> Result<()> {
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let sink = StderrDiagnosticSink::new(level);

    let config = load_config(&args)?.unwrap_or_default();
    for warning in config.warnings() {
        sink.warn(&warning);
    }

    let dependency_type = resolve_dependency_type(&args, &config)?;
    let candidates = collect_candidates(&args)?;
    let ignored = merge_ignore(&args.ignore, config.ignore.as_deref());

    let use_case = FilterComponentsUseCase::new(ConfigSettingsSource::new(config), sink);
    let response = use_case.execute(FilterRequest::new(dependency_type, candidates, ignored));

    let formatted_output = FormatterFactory::create(args.format).format(&response)?;
    PresenterFactory::create(PresenterType::from_output(args.output)).present(&formatted_output)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// CLI flag first, then the config file
fn resolve_dependency_type(args: &Args, config: &ConfigFile) -> Result<String> {
    args.dependency_type
        .as_deref()
        .or(config.dependency_type.as_deref())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No dependency type given\n\n💡 Hint: Pass --type <TYPE> or set 'dependency_type' in {}",
                config::CONFIG_FILENAME
            )
        })
}

/// Positional names first, then names from the input file
fn collect_candidates(args: &Args) -> Result<Vec<String>> {
    let mut candidates = args.names.clone();
    if let Some(path) = &args.input {
        candidates.extend(FileSystemReader::new().read_candidate_list(path)?);
    }
    Ok(candidates)
}

fn merge_ignore(cli: &[String], config: Option<&[String]>) -> Vec<String> {
    cli.iter()
        .chain(config.unwrap_or_default())
        .cloned()
        .collect()
}
