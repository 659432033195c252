use crate::domain::ports::ValidationRule;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_required_field};
use regex::Regex;
use std::sync::LazyLock;

// local: 以點分隔的區段，不允許空區段
// domain: 一個以上的 label，最後接 2-7 個字母的 TLD
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_+&*-]+(?:\.[A-Za-z0-9_+&*-]+)*@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,7}$";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex")
});

/// Structural check against a fixed address grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRule;

impl PatternRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for PatternRule {
    fn is_valid(&self, address: Option<&str>) -> bool {
        match address {
            Some(addr) if !addr.trim().is_empty() => EMAIL_REGEX.is_match(addr),
            _ => false,
        }
    }

    fn name(&self) -> &str {
        "pattern"
    }
}

/// Accepts only addresses ending in `@<domain>`, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct DomainRule {
    // 已轉小寫並加上 '@'
    suffix: String,
}

impl DomainRule {
    pub fn new(domain: impl Into<String>) -> Result<Self> {
        let domain = domain.into();
        validate_non_empty_string("domain", &domain)?;

        Ok(Self {
            suffix: format!("@{}", domain.to_lowercase()),
        })
    }

    pub fn from_optional(domain: Option<String>) -> Result<Self> {
        let domain = validate_required_field("domain", &domain)?;
        Self::new(domain.as_str())
    }

    pub fn domain(&self) -> &str {
        &self.suffix[1..]
    }
}

impl ValidationRule for DomainRule {
    fn is_valid(&self, address: Option<&str>) -> bool {
        address.is_some_and(|addr| addr.to_lowercase().ends_with(&self.suffix))
    }

    fn name(&self) -> &str {
        "corporate-domain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::VerifierError;

    #[test]
    fn test_pattern_rule_accepts_well_formed_addresses() {
        let rule = PatternRule::new();
        for addr in [
            "contato@empresa.com",
            "first.last@mail.example.org",
            "a_b+tag&x*y-z@sub-1.domain.museum",
            "UPPER@EXAMPLE.COM",
            "x@a.io",
        ] {
            assert!(rule.is_valid(Some(addr)), "expected valid: {}", addr);
        }
    }

    #[test]
    fn test_pattern_rule_rejects_malformed_addresses() {
        let rule = PatternRule::new();
        assert!(!rule.is_valid(None));
        for addr in [
            "",
            "   ",
            "usuario.invalido@",
            "no-at-sign.com",
            "a..b@domain.com",
            ".a@domain.com",
            "a.@domain.com",
            "a@domain.c",
            "a@domain.abcdefgh",
            "a@domain",
            "a b@domain.com",
            " a@domain.com",
            "a@domain.com ",
            "a@@domain.com",
            "a@domain..com",
            "a@domain.c0m",
        ] {
            assert!(!rule.is_valid(Some(addr)), "expected invalid: {:?}", addr);
        }
    }

    #[test]
    fn test_domain_rule_is_case_insensitive() {
        let rule = DomainRule::new("empresa.com").unwrap();
        assert!(rule.is_valid(Some("diretoria@empresa.com")));
        assert!(rule.is_valid(Some("diretoria@EMPRESA.COM")));
        assert!(!rule.is_valid(Some("diretoria@other.com")));
        assert!(!rule.is_valid(None));
    }

    #[test]
    fn test_domain_rule_configured_in_upper_case() {
        let rule = DomainRule::new("Empresa.COM").unwrap();
        assert_eq!(rule.domain(), "empresa.com");
        assert!(rule.is_valid(Some("diretoria@empresa.com")));
    }

    #[test]
    fn test_domain_rule_requires_at_sign_before_domain() {
        let rule = DomainRule::new("empresa.com").unwrap();
        assert!(!rule.is_valid(Some("diretoria@subempresa.com")));
        assert!(!rule.is_valid(Some("empresa.com")));
        // 不做 trim
        assert!(!rule.is_valid(Some("diretoria@empresa.com ")));
    }

    #[test]
    fn test_domain_rule_accepts_domain_containing_at_sign() {
        let rule = DomainRule::new("sub@empresa.com").unwrap();
        assert_eq!(rule.domain(), "sub@empresa.com");
        assert!(rule.is_valid(Some("diretoria@sub@EMPRESA.com")));
        assert!(!rule.is_valid(Some("diretoria@empresa.com")));
    }

    #[test]
    fn test_domain_rule_rejects_missing_domain() {
        assert!(matches!(
            DomainRule::from_optional(None),
            Err(VerifierError::MissingConfigError { .. })
        ));
        assert!(matches!(
            DomainRule::new("  "),
            Err(VerifierError::InvalidConfigValueError { .. })
        ));
        assert!(DomainRule::from_optional(Some("empresa.com".to_string())).is_ok());
    }
}
