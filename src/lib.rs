pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::BatchSettings;
pub use core::{
    batch::BatchProcessor,
    engine::VerificationEngine,
    rules::{DomainRule, PatternRule},
    verifier::Verifier,
};
pub use domain::model::{BatchSummary, ValidationReport};
pub use domain::ports::{AddressSource, ConfigProvider, ValidationRule};
pub use utils::error::{Result, VerifierError};
