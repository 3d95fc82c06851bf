//! CLI entrypoint for anchor-assess
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use assess_application::{
    AnswerPromptPort, AuditSink, AutoSkipPrompt, NoAuditSink, PredictAssessmentUseCase,
    PredictInput, PredictOutput, PredictionParams, SelectAnchorsUseCase,
};
use assess_domain::{
    AnswerMap, Assessment, OutputFormat, QuestionCatalog, RelationGraph, Section,
    SectionClassifier,
};
use assess_infrastructure::{
    AnswerFileLoader, ConfigLoader, FileConfig, JsonlAuditSink, Severity, TomlCatalogLoader,
};
use assess_presentation::{Cli, ConsoleFormatter, ConsoleProgress, InteractiveAnswerPrompt};
use clap::Parser;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting anchor-assess");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration (--config > project files > global > defaults)
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("Configuration: {}", issue.message),
            Severity::Error => bail!("Invalid configuration: {}", issue.message),
        }
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Build the question catalog, extended by a supplement when one is
    // configured
    let supplement = cli
        .supplement
        .clone()
        .or_else(|| config.catalog.supplement_path());
    let catalog = match &supplement {
        Some(path) => TomlCatalogLoader::extend(QuestionCatalog::standard(), path)
            .with_context(|| format!("Failed to load supplement {}", path.display()))?,
        None => QuestionCatalog::standard(),
    };
    let catalog = Arc::new(catalog);

    if cli.check {
        return run_checks(&catalog, &config);
    }

    // Seed answers, if a file was given
    let existing = match &cli.answers {
        Some(path) => AnswerFileLoader::load(path)
            .with_context(|| format!("Failed to load answers {}", path.display()))?,
        None => AnswerMap::new(),
    };

    // Explicit question identifiers, or the whole catalog
    let input = if cli.question.is_empty() {
        PredictInput::covering(&catalog).with_existing(existing)
    } else {
        PredictInput::new(existing, cli.question.clone())
    };

    let params = config.prediction.to_params();

    // === Dependency Injection ===
    // Create the audit sink (JSONL file, or a no-op when disabled)
    let audit: Arc<dyn AuditSink> = match cli.audit.clone().or_else(|| config.audit.resolved_path())
    {
        Some(path) => match JsonlAuditSink::new(&path) {
            Some(sink) => {
                info!("Audit log: {}", sink.path().display());
                Arc::new(sink)
            }
            None => Arc::new(NoAuditSink),
        },
        None => Arc::new(NoAuditSink),
    };

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|           Anchor Assess - Questionnaire Predictor          |");
        println!("+============================================================+");
        println!();
        println!(
            "Questions: {}  Sections: {}  Known answers: {}",
            input.question_ids.len(),
            spanned_sections(&config, &input.question_ids),
            input.existing_answers.len()
        );
        if cli.defaults_only {
            println!("Mode: defaults only (anchors are skipped)");
        } else {
            let selector = SelectAnchorsUseCase::new(Arc::clone(&catalog));
            let upcoming =
                selector.execute(&input.question_ids, &input.existing_answers, params.max_anchors);
            if !upcoming.is_empty() {
                println!("First anchors: {}", upcoming.join(", "));
            }
        }
        println!();
    }

    // Execute with the interactive prompt, or auto-skip every anchor
    let output = if cli.defaults_only {
        run_prediction(
            Arc::clone(&catalog),
            Arc::new(AutoSkipPrompt),
            params,
            audit,
            input,
            cli.quiet,
        )
        .await?
    } else {
        run_prediction(
            Arc::clone(&catalog),
            Arc::new(InteractiveAnswerPrompt::new()),
            params,
            audit,
            input,
            cli.quiet,
        )
        .await?
    };

    // Join answers with the catalog records and grade confidence
    let assessment = Assessment::assemble(&catalog, &output.answers, &output.metadata)?;

    // Output format: CLI flag, then config file, then the default
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let formatter = ConsoleFormatter::new();
    let report = match format {
        OutputFormat::Full => formatter.format(&assessment, &output.stats),
        OutputFormat::Summary => formatter.format_summary(&assessment, &output.stats),
        OutputFormat::Json => formatter.format_json(&assessment, &output.stats),
    };

    println!("{}", report);

    Ok(())
}

/// Wire the use case over the chosen prompt adapter and execute it
async fn run_prediction<P: AnswerPromptPort + 'static>(
    catalog: Arc<QuestionCatalog>,
    prompt: Arc<P>,
    params: PredictionParams,
    audit: Arc<dyn AuditSink>,
    input: PredictInput,
    quiet: bool,
) -> Result<PredictOutput> {
    let use_case = PredictAssessmentUseCase::new(catalog, prompt)
        .with_params(params)
        .with_audit(audit);

    if quiet {
        Ok(use_case.execute(input).await?)
    } else {
        Ok(use_case.execute_with_progress(input, &ConsoleProgress).await?)
    }
}

/// Count the distinct sections a question list spans, via a classifier
/// sized and tuned from the file configuration
fn spanned_sections(config: &FileConfig, question_ids: &[String]) -> usize {
    let classifier = SectionClassifier::new(config.classifier.capacity);
    classifier.set_debug_mode(config.classifier.debug);
    classifier.configure_monitoring(config.classifier.monitoring());

    let mut seen = BTreeSet::new();
    for id in question_ids {
        if let Some(section) = classifier.classify(id) {
            seen.insert(section.code());
        }
    }

    let metrics = classifier.metrics();
    debug!(
        "Section sweep: {} lookup(s), {} unmapped, hit ratio {:.2}",
        metrics.lookups(),
        metrics.invalid,
        metrics.hit_ratio()
    );

    seen.len()
}

/// Validate the question registry, the relation table, and the
/// configuration, then exit.
///
/// Warnings are printed but only errors fail the check.
fn run_checks(catalog: &QuestionCatalog, config: &FileConfig) -> Result<()> {
    let mut failures = 0usize;

    for issue in catalog.validate() {
        println!("catalog: {}", issue.message);
        failures += 1;
    }

    if let Err(issues) = RelationGraph::standard().verify() {
        for issue in &issues {
            println!("relations: {}", issue);
        }
        failures += issues.len();
    }

    for issue in config.validate() {
        println!("config: {}", issue);
        if issue.severity == Severity::Error {
            failures += 1;
        }
    }

    // Sweep every registry identifier through a classifier sized from
    // the configuration and report how the cache held up
    let classifier = SectionClassifier::new(config.classifier.capacity);
    classifier.configure_monitoring(config.classifier.monitoring());
    for question in catalog.questions() {
        classifier.classify(question.id());
    }
    let metrics = classifier.metrics();
    let health = classifier.check_health();
    println!(
        "classifier: {} lookup(s), {} unmapped identifier(s), cache {}",
        metrics.lookups(),
        metrics.invalid,
        if health.healthy { "healthy" } else { "unhealthy" }
    );
    for finding in &health.findings {
        println!("classifier: {}", finding);
        failures += 1;
    }

    if failures > 0 {
        bail!("{} check failure(s)", failures);
    }

    println!(
        "All checks passed: {} question(s), {} anchor(s), {} section(s)",
        catalog.len(),
        catalog.anchors().len(),
        Section::ALL.len()
    );
    Ok(())
}
