use crate::core::rules::{DomainRule, PatternRule};
use crate::domain::model::ValidationReport;
use crate::domain::ports::{ConfigProvider, ValidationRule};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

// 小於此數量時不值得開執行緒
const PARALLEL_THRESHOLD: usize = 512;

/// Ordered set of rules combined by logical AND.
///
/// The rule list is moved in at construction and never exposed mutably
/// afterwards. Cloning a `Verifier` shares the same rules.
#[derive(Clone)]
pub struct Verifier {
    rules: Arc<[Box<dyn ValidationRule>]>,
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl Verifier {
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    pub fn from_optional(rules: Option<Vec<Box<dyn ValidationRule>>>) -> Result<Self> {
        validate_required_field("rules", &rules)?;
        Ok(Self::new(rules.unwrap_or_default()))
    }

    /// Pattern rule, plus the corporate domain rule when one is configured.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut rules: Vec<Box<dyn ValidationRule>> = vec![Box::new(PatternRule::new())];
        if let Some(domain) = config.corporate_domain() {
            rules.push(Box::new(DomainRule::new(domain)?));
        }
        Ok(Self::new(rules))
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// True iff every rule accepts the address. Vacuously true without rules.
    pub fn is_valid_email<'a>(&self, address: impl Into<Option<&'a str>>) -> bool {
        let address = address.into();
        self.rules.iter().all(|rule| rule.is_valid(address))
    }

    /// Names of the rules rejecting `address`, in rule order.
    pub fn failing_rules<'a>(&self, address: impl Into<Option<&'a str>>) -> Vec<&str> {
        let address = address.into();
        self.rules
            .iter()
            .filter(|rule| !rule.is_valid(address))
            .map(|rule| rule.name())
            .collect()
    }

    /// Validates every address; `result[i]` always describes `addresses[i]`.
    ///
    /// Large batches are split across scoped threads. Each thread writes into
    /// its own disjoint slice of a pre-sized verdict buffer, so completion
    /// order never affects the output order.
    pub fn process_emails<S>(&self, addresses: &[S]) -> Vec<ValidationReport>
    where
        S: AsRef<str> + Sync,
    {
        let verdicts = self.evaluate(addresses);

        addresses
            .iter()
            .zip(verdicts)
            .map(|(addr, is_valid)| ValidationReport::new(addr.as_ref(), is_valid))
            .collect()
    }

    /// Valid addresses only, in input order.
    pub fn filter_valid_emails<S>(&self, addresses: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let verdicts = self.evaluate(addresses);

        addresses
            .iter()
            .zip(verdicts)
            .filter(|(_, is_valid)| *is_valid)
            .map(|(addr, _)| addr.as_ref().to_string())
            .collect()
    }

    pub(crate) fn evaluate<S>(&self, addresses: &[S]) -> Vec<bool>
    where
        S: AsRef<str> + Sync,
    {
        let mut verdicts = vec![false; addresses.len()];

        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);

        if addresses.len() < PARALLEL_THRESHOLD || workers == 1 {
            self.evaluate_into(addresses, &mut verdicts);
            return verdicts;
        }

        let chunk_size = addresses.len().div_ceil(workers);
        tracing::debug!(
            "Evaluating {} addresses on {} threads (chunk size {})",
            addresses.len(),
            workers,
            chunk_size
        );

        thread::scope(|scope| {
            for (input, output) in addresses
                .chunks(chunk_size)
                .zip(verdicts.chunks_mut(chunk_size))
            {
                scope.spawn(move || self.evaluate_into(input, output));
            }
        });

        verdicts
    }

    pub(crate) fn evaluate_into<S: AsRef<str>>(&self, input: &[S], output: &mut [bool]) {
        for (addr, slot) in input.iter().zip(output.iter_mut()) {
            *slot = self.is_valid_email(addr.as_ref());
        }
    }
}
