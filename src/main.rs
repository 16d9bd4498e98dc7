use clap::Parser;
use elementos::catalog::{Catalog, Dimension, Variant};
use elementos::cli;
use elementos::config;
use elementos::engine;
use elementos::error::{QuizError, Result};
use elementos::export::{self, ResultEnvelope};
use elementos::report;
use elementos::types::answer::{parse_answers, Answer};
use elementos::types::config::Thresholds;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const INVALID: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Exit code for errors that reject the submission rather than the run.
fn submission_exit_code(error: &QuizError) -> Option<i32> {
    match error {
        QuizError::IncompleteAnswers { .. } => Some(exit_code::INCOMPLETE),
        QuizError::InvalidQuestionId(_)
        | QuizError::InvalidDimension(_)
        | QuizError::DimensionMismatch { .. }
        | QuizError::ValueOutOfRange { .. } => Some(exit_code::INVALID),
        _ => None,
    }
}

fn read_answers(path: &Path) -> Result<Vec<Answer>> {
    if !path.exists() {
        return Err(QuizError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_answers(&content)
}

struct Setup {
    catalog: Catalog,
    thresholds: Thresholds,
}

fn resolve_setup(
    config_path: Option<&Path>,
    flag_variant: Option<cli::CatalogVariant>,
) -> Result<Setup> {
    let loaded = config::load_config(config_path)?;
    let variant = match flag_variant {
        Some(cli::CatalogVariant::Full) => Variant::Full,
        Some(cli::CatalogVariant::Compact) => Variant::Compact,
        None => loaded
            .as_ref()
            .and_then(|cfg| cfg.variant())
            .unwrap_or(Variant::Full),
    };
    let catalog = Catalog::new(variant);
    let thresholds = loaded
        .as_ref()
        .map(|cfg| cfg.thresholds(variant))
        .unwrap_or_else(|| Thresholds::for_variant(variant));
    thresholds.validate(&catalog)?;
    Ok(Setup {
        catalog,
        thresholds,
    })
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let setup = resolve_setup(cli.config.as_deref(), cmd.variant)?;
            let answers = match read_answers(&cmd.answers) {
                Ok(answers) => answers,
                Err(error) => {
                    if let Some(code) = submission_exit_code(&error) {
                        eprintln!("error: {error}");
                        return Ok(code);
                    }
                    return Err(error);
                }
            };

            let result = match engine::build(&setup.catalog, &setup.thresholds, &answers) {
                Ok(result) => result,
                Err(error) => {
                    if let Some(code) = submission_exit_code(&error) {
                        eprintln!("error: {error}");
                        return Ok(code);
                    }
                    return Err(error);
                }
            };

            let rendered = report::render(&result, &setup.catalog, output_format(cmd.format))?;
            println!("{rendered}");

            if cmd.export {
                let envelope = ResultEnvelope::new(&setup.catalog, &result, answers);
                let path = export::write_result(&cmd.export_dir, &envelope)?;
                println!("resultado salvo: {}", path.display());
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let setup = resolve_setup(cli.config.as_deref(), cmd.variant)?;
            let answers = match read_answers(&cmd.answers) {
                Ok(answers) => answers,
                Err(error) => {
                    if let Some(code) = submission_exit_code(&error) {
                        eprintln!("error: {error}");
                        return Ok(code);
                    }
                    return Err(error);
                }
            };

            for answer in &answers {
                if let Err(error) = setup.catalog.validate_answer(answer) {
                    eprintln!("error: {error}");
                    return Ok(exit_code::INVALID);
                }
            }

            let missing: Vec<&str> = setup
                .catalog
                .questions()
                .iter()
                .filter(|question| !answers.iter().any(|a| a.question == question.id))
                .map(|question| question.id)
                .collect();

            if missing.is_empty() {
                println!(
                    "ok: answers cover all {} questions",
                    setup.catalog.len()
                );
                Ok(exit_code::SUCCESS)
            } else {
                println!("missing {} question(s):", missing.len());
                for id in missing {
                    println!("- {id}");
                }
                Ok(exit_code::INCOMPLETE)
            }
        }
        cli::Commands::Questions(cmd) => {
            let setup = resolve_setup(cli.config.as_deref(), cmd.variant)?;
            match cmd.format {
                cli::ReportFormat::Json => {
                    let rendered = serde_json::to_string_pretty(setup.catalog.questions())?;
                    println!("{rendered}");
                }
                cli::ReportFormat::Md => print_questions(&setup.catalog),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Dimensions(cmd) => {
            match cmd.format {
                cli::ReportFormat::Json => {
                    let entries: Vec<_> = Dimension::ORDER
                        .iter()
                        .map(|dimension| {
                            json!({
                                "slug": dimension.slug(),
                                "name": dimension.display_name(),
                                "icon": dimension.icon(),
                                "meaning": dimension.meaning(),
                                "description": dimension.description(),
                                "disaster": dimension.disaster().slug(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                cli::ReportFormat::Md => {
                    println!("# Os 5 Elementos\n");
                    for dimension in Dimension::ORDER {
                        println!(
                            "- {} {} ({}): {} Desastre: {}.",
                            dimension.icon(),
                            dimension.display_name(),
                            dimension.meaning(),
                            dimension.description(),
                            dimension.disaster().display_name()
                        );
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn print_questions(catalog: &Catalog) {
    println!(
        "# Perguntas ({} por elemento)\n",
        catalog.questions_per_dimension()
    );
    for dimension in Dimension::ORDER {
        println!("## {} {}\n", dimension.icon(), dimension.display_name());
        for question in catalog
            .questions()
            .iter()
            .filter(|question| question.dimension == dimension)
        {
            println!("- {}: {}", question.id, question.prompt);
            for choice in question.choices {
                println!("    {}. {}", choice.value, choice.label);
            }
        }
        println!();
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
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
