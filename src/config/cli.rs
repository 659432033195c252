use crate::app::output::OutputFormat;
use crate::config::{DEFAULT_CHUNK_SIZE, DEFAULT_CONCURRENCY, MAX_CONCURRENCY};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "email-verifier")]
#[command(about = "Validate email addresses against pattern and corporate domain rules")]
pub struct CliConfig {
    #[arg(help = "Addresses to validate (defaults to a built-in sample list)")]
    pub addresses: Vec<String>,

    #[arg(long, help = "Read addresses from a file, one per line ('-' for stdin)")]
    pub input: Option<String>,

    #[arg(long, default_value = crate::config::DEFAULT_CORPORATE_DOMAIN)]
    pub domain: String,

    #[arg(long, help = "Only apply the pattern rule")]
    pub no_domain_check: bool,

    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn corporate_domain(&self) -> Option<&str> {
        if self.no_domain_check {
            None
        } else {
            Some(&self.domain)
        }
    }

    fn concurrency(&self) -> usize {
        self.concurrency
    }

    fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(domain) = self.corporate_domain() {
            validate_non_empty_string("domain", domain)?;
        }

        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }

        validate_range("concurrency", self.concurrency, 1, MAX_CONCURRENCY)?;
        validate_positive_number("chunk_size", self.chunk_size, 1)?;

        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["email-verifier"]);
        assert!(config.addresses.is_empty());
        assert_eq!(config.corporate_domain(), Some("empresa.com"));
        assert_eq!(config.concurrency(), DEFAULT_CONCURRENCY);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_domain_check_disables_domain() {
        let config = CliConfig::parse_from(["email-verifier", "--no-domain-check", "a@b.com"]);
        assert_eq!(config.corporate_domain(), None);
        assert_eq!(config.addresses, vec!["a@b.com"]);
    }

    #[test]
    fn test_rejects_out_of_range_concurrency() {
        let config = CliConfig::parse_from(["email-verifier", "--concurrency", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_domain() {
        let config = CliConfig::parse_from(["email-verifier", "--domain", " "]);
        assert!(config.validate().is_err());
    }
}
