use serde::{Deserialize, Serialize};

/// Verdict for a single address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub address: String,
    pub is_valid: bool,
}

impl ValidationReport {
    pub fn new(address: impl Into<String>, is_valid: bool) -> Self {
        Self {
            address: address.into(),
            is_valid,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[ValidationReport]) -> Self {
        let valid = reports.iter().filter(|r| r.is_valid).count();
        Self {
            total: reports.len(),
            valid,
            invalid: reports.len() - valid,
        }
    }
}
