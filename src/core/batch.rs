use crate::config::BatchSettings;
use crate::core::verifier::Verifier;
use crate::domain::model::ValidationReport;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, VerifierError};
use crate::utils::validation::Validate;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Runs a [`Verifier`] over large address lists on the tokio blocking pool.
///
/// Input is cut into `chunk_size` pieces and at most `concurrency` pieces
/// are evaluated at once. Every piece reports back with its start offset
/// and is copied into a pre-sized verdict buffer at that offset.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    verifier: Verifier,
    settings: BatchSettings,
}

impl BatchProcessor {
    pub fn new(verifier: Verifier, settings: BatchSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { verifier, settings })
    }

    pub fn from_config<C: ConfigProvider>(verifier: Verifier, config: &C) -> Result<Self> {
        Self::new(
            verifier,
            BatchSettings {
                concurrency: config.concurrency(),
                chunk_size: config.chunk_size(),
            },
        )
    }

    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    pub async fn process(&self, addresses: Vec<String>) -> Result<Vec<ValidationReport>> {
        let total = addresses.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let addresses: Arc<[String]> = addresses.into();
        let chunk_size = self.settings.chunk_size;
        let semaphore = Arc::new(Semaphore::new(self.settings.concurrency));
        let mut tasks = JoinSet::new();

        tracing::debug!(
            "Dispatching {} addresses in chunks of {} (concurrency {})",
            total,
            chunk_size,
            self.settings.concurrency
        );

        for start in (0..total).step_by(chunk_size) {
            let end = (start + chunk_size).min(total);
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| VerifierError::ProcessingError {
                    message: format!("worker pool closed: {}", e),
                })?;
            let verifier = self.verifier.clone();
            let input = Arc::clone(&addresses);

            tasks.spawn_blocking(move || {
                let _permit = permit;
                let mut verdicts = vec![false; end - start];
                verifier.evaluate_into(&input[start..end], &mut verdicts);
                (start, verdicts)
            });
        }

        // 依原始索引寫回，不依完成順序
        let mut verdicts = vec![false; total];
        while let Some(joined) = tasks.join_next().await {
            let (start, chunk) = joined.map_err(|e| VerifierError::ProcessingError {
                message: format!("validation task failed: {}", e),
            })?;
            verdicts[start..start + chunk.len()].copy_from_slice(&chunk);
        }

        Ok(addresses
            .iter()
            .zip(verdicts)
            .map(|(addr, is_valid)| ValidationReport::new(addr.as_str(), is_valid))
            .collect())
    }
}
