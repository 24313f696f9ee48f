mod aggregate;
mod assessment;
mod catalog;
mod cli;
mod config;
mod error;
mod logging;
mod report;
mod search;
mod store;
mod types;

use crate::assessment::Assessment;
use crate::error::{MaturityError, Result};
use crate::store::{FileBackend, ScoreStore};
use crate::types::config::MaturityConfig;
use crate::types::model::{MaturityModel, ScoreValue};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn resolve_model(args: &cli::ModelArgs, config: &MaturityConfig) -> Result<MaturityModel> {
    if let Some(path) = &args.model_file {
        return catalog::load_model_file(path);
    }
    let key = args.model.as_deref().unwrap_or_else(|| config.default_model());
    catalog::find_builtin(key)
}

fn open_assessment<'m>(
    model: &'m MaturityModel,
    data_dir: &Path,
) -> Assessment<'m, FileBackend> {
    let store = ScoreStore::new(FileBackend::new(data_dir));
    if let Ok(path) = store.backend().path_for(&model.storage_key) {
        info!(path = %path.display(), model = %model.title, "using score file");
    }
    Assessment::open(model, store)
}

fn print_models(config: &MaturityConfig) -> Result<()> {
    let default_key = config.default_model();
    for entry in catalog::builtin_models()? {
        let marker = if entry.key == default_key { "*" } else { " " };
        println!(
            "{marker} {:<10} {} ({} sections, {} items, storage key {})",
            entry.key,
            entry.model.title,
            entry.model.sections.len(),
            entry.model.item_count(),
            entry.model.storage_key
        );
    }
    Ok(())
}

fn print_item(assessment: &Assessment<'_, FileBackend>, item_key: &str) -> Result<()> {
    let (section, item) = assessment
        .model()
        .find_item(item_key)
        .ok_or_else(|| MaturityError::UnknownItem(item_key.to_string()))?;

    println!("{} ({})", item.label, item.key);
    println!("section: {}", section.title);
    if !item.description.is_empty() {
        println!("\n{}\n", item.description);
    }
    for value in ScoreValue::ALL {
        let criteria = match value {
            ScoreValue::NotStarted => "No evidence yet",
            ScoreValue::Partial => item.success_criteria.partial.as_str(),
            ScoreValue::Complete => item.success_criteria.complete.as_str(),
        };
        println!("  {value}: {criteria}");
    }
    println!("current score: {}", describe_score(assessment.scores().get(&item.key)));
    Ok(())
}

fn describe_score(raw: i64) -> String {
    match ScoreValue::from_i64(raw) {
        Some(value) => value.to_string(),
        None => format!("{raw} - out of range"),
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let config = config::load_config(&cwd)?;
    let data_dir: PathBuf = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());

    match cli.command {
        cli::Commands::Models => {
            print_models(&config)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Summary(cmd) => {
            let model = resolve_model(&cmd.model, &config)?;
            let assessment = open_assessment(&model, &data_dir);
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&model, &assessment.summary(), output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let model = resolve_model(&cmd.model, &config)?;
            let mut assessment = open_assessment(&model, &data_dir);
            assessment.set_score(&cmd.item, cmd.value)?;

            let summary = assessment.summary();
            let section = model
                .find_item(&cmd.item)
                .and_then(|(section, _)| summary.section(&section.key));
            println!("scored {} = {}", cmd.item, cmd.value);
            if let Some(section) = section {
                println!(
                    "{}: {}% ({}/{})",
                    section.title, section.percentage, section.total, section.max
                );
            }
            println!("overall: {}% - {}", summary.percentage, summary.level());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Show(cmd) => {
            let model = resolve_model(&cmd.model, &config)?;
            let assessment = open_assessment(&model, &data_dir);
            print_item(&assessment, &cmd.item)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Search(cmd) => {
            let model = resolve_model(&cmd.model, &config)?;
            let assessment = open_assessment(&model, &data_dir);
            let results = search::search(&model, assessment.scores(), &cmd.query);

            println!(
                "{} result{} found, {} scored",
                results.len(),
                if results.len() == 1 { "" } else { "s" },
                search::scored_count(&results)
            );
            for result in &results {
                println!(
                    "- [{}] {} ({}) in {}",
                    describe_score(result.score.unwrap_or(0)),
                    result.item_label,
                    result.item_key,
                    result.section_title
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Reset(cmd) => {
            if !cmd.yes {
                eprintln!("reset deletes every score; re-run with --yes to confirm");
                return Ok(exit_code::REJECTED);
            }
            let model = resolve_model(&cmd.model, &config)?;
            let mut assessment = open_assessment(&model, &data_dir);
            assessment.reset()?;
            println!("reset all scores for {}", model.title);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Export(cmd) => {
            let model = resolve_model(&cmd.model, &config)?;
            let assessment = open_assessment(&model, &data_dir);
            let output = cmd
                .output
                .unwrap_or_else(|| PathBuf::from(config.export_file()));
            if assessment.scores().is_empty() {
                info!("no scores recorded yet; exporting an empty map");
            }
            assessment.export_file(&output)?;
            println!(
                "exported {} score(s) to {}",
                assessment.scores().len(),
                output.display()
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Import(cmd) => {
            let model = resolve_model(&cmd.model, &config)?;
            let mut assessment = open_assessment(&model, &data_dir);
            assessment.import_file(&cmd.file)?;

            let summary = assessment.summary();
            println!(
                "imported {} score(s) into {}",
                assessment.scores().len(),
                model.title
            );
            println!("overall: {}% - {}", summary.percentage, summary.level());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_rejection() {
                exit_code::REJECTED
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
