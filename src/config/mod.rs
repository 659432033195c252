#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CORPORATE_DOMAIN: &str = "empresa.com";
pub const DEFAULT_CONCURRENCY: usize = 4;
pub const DEFAULT_CHUNK_SIZE: usize = 256;
pub const MAX_CONCURRENCY: usize = 256;

/// Fan-out knobs for [`crate::core::batch::BatchProcessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSettings {
    pub concurrency: usize,
    pub chunk_size: usize,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Validate for BatchSettings {
    fn validate(&self) -> Result<()> {
        validate_range("concurrency", self.concurrency, 1, MAX_CONCURRENCY)?;
        validate_positive_number("chunk_size", self.chunk_size, 1)?;
        Ok(())
    }
}
