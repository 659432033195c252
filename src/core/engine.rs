use crate::core::batch::BatchProcessor;
use crate::domain::model::{BatchSummary, ValidationReport};
use crate::domain::ports::AddressSource;
use crate::utils::error::Result;
use std::time::Instant;

pub struct VerificationEngine<S: AddressSource> {
    source: S,
    processor: BatchProcessor,
}

impl<S: AddressSource> VerificationEngine<S> {
    pub fn new(source: S, processor: BatchProcessor) -> Self {
        Self { source, processor }
    }

    pub async fn run(&self) -> Result<(Vec<ValidationReport>, BatchSummary)> {
        let started = Instant::now();

        let addresses = self.source.read_addresses().await?;
        tracing::info!("Loaded {} addresses", addresses.len());

        let reports = self.processor.process(addresses).await?;

        for report in reports.iter().filter(|r| !r.is_valid) {
            tracing::debug!(
                "Rejected {:?} (failed: {})",
                report.address,
                self.processor
                    .verifier()
                    .failing_rules(report.address.as_str())
                    .join(", ")
            );
        }

        let summary = BatchSummary::from_reports(&reports);
        tracing::info!(
            "Validated {} addresses: {} valid, {} invalid in {:?}",
            summary.total,
            summary.valid,
            summary.invalid,
            started.elapsed()
        );

        Ok((reports, summary))
    }
}
