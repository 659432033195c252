pub mod batch;
pub mod engine;
pub mod rules;
pub mod verifier;

pub use crate::domain::model::{BatchSummary, ValidationReport};
pub use crate::domain::ports::{AddressSource, ConfigProvider, ValidationRule};
pub use crate::utils::error::Result;
