use clap::Parser;
use email_verifier::adapters::{LineFileSource, MemorySource, StdinSource};
use email_verifier::app::output::write_reports;
use email_verifier::utils::error::{ErrorSeverity, VerifierError};
use email_verifier::utils::{logger, validation::Validate};
use email_verifier::{
    AddressSource, BatchProcessor, CliConfig, ValidationReport, VerificationEngine, Verifier,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting email-verifier");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Verification failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: &CliConfig) -> Result<(), VerifierError> {
    config.validate()?;

    let verifier = Verifier::from_config(config)?;
    tracing::debug!("Using {:?}", verifier);
    let processor = BatchProcessor::from_config(verifier, config)?;

    let reports = match config.input.as_deref() {
        Some("-") => verify(StdinSource, processor).await?,
        Some(path) => verify(LineFileSource::new(path), processor).await?,
        None if config.addresses.is_empty() => verify(MemorySource::sample(), processor).await?,
        None => verify(MemorySource::new(config.addresses.clone()), processor).await?,
    };

    let stdout = std::io::stdout();
    write_reports(&mut stdout.lock(), &reports, config.format)
}

async fn verify<S: AddressSource>(
    source: S,
    processor: BatchProcessor,
) -> Result<Vec<ValidationReport>, VerifierError> {
    let (reports, _summary) = VerificationEngine::new(source, processor).run().await?;
    Ok(reports)
}
