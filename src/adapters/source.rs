use crate::domain::ports::AddressSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

pub const SAMPLE_ADDRESSES: [&str; 4] = [
    "contato@empresa.com",
    "usuario.invalido@",
    "hacker@gmail.com",
    "diretoria@empresa.com",
];

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    addresses: Vec<String>,
}

impl MemorySource {
    pub fn new(addresses: Vec<String>) -> Self {
        Self { addresses }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_ADDRESSES.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl AddressSource for MemorySource {
    async fn read_addresses(&self) -> Result<Vec<String>> {
        Ok(self.addresses.clone())
    }
}

/// One address per line. Empty lines are skipped; other lines are kept
/// verbatim apart from the line terminator. Bytes that are not valid UTF-8
/// become U+FFFD, so such a line still gets a (failing) report.
#[derive(Debug, Clone)]
pub struct LineFileSource {
    path: PathBuf,
}

impl LineFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AddressSource for LineFileSource {
    async fn read_addresses(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading addresses from {}", self.path.display());
        let file = tokio::fs::File::open(&self.path).await?;
        read_lines(file).await
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

#[async_trait]
impl AddressSource for StdinSource {
    async fn read_addresses(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading addresses from stdin");
        read_lines(tokio::io::stdin()).await
    }
}

// 非 UTF-8 的行以替換字元保留，交給規則判定為無效
async fn read_lines<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut lines = BufReader::new(reader).split(b'\n');
    let mut addresses = Vec::new();

    while let Some(raw) = lines.next_segment().await? {
        // Windows 換行
        let raw = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
        if !raw.is_empty() {
            addresses.push(String::from_utf8_lossy(raw).into_owned());
        }
    }

    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_sample_source() {
        let addresses = MemorySource::sample().read_addresses().await.unwrap();
        assert_eq!(addresses, SAMPLE_ADDRESSES);
    }

    #[tokio::test]
    async fn test_read_lines_keeps_whitespace_and_skips_empty() {
        let input: &[u8] = b"a@empresa.com\r\n\n  b@empresa.com\nc@gmail.com";
        let addresses = read_lines(input).await.unwrap();
        assert_eq!(addresses, vec!["a@empresa.com", "  b@empresa.com", "c@gmail.com"]);
    }

    #[tokio::test]
    async fn test_non_utf8_line_does_not_abort_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ok@empresa.com\n\xff\xfe@empresa.com\nother@empresa.com\n")
            .unwrap();

        let addresses = LineFileSource::new(file.path())
            .read_addresses()
            .await
            .unwrap();
        assert_eq!(addresses.len(), 3);
        assert_eq!(addresses[0], "ok@empresa.com");
        assert_eq!(addresses[1], "\u{FFFD}\u{FFFD}@empresa.com");
        assert_eq!(addresses[2], "other@empresa.com");

        let verifier = crate::core::verifier::Verifier::new(vec![
            Box::new(crate::core::rules::PatternRule::new()),
            Box::new(crate::core::rules::DomainRule::new("empresa.com").unwrap()),
        ]);
        let verdicts: Vec<bool> = verifier
            .process_emails(&addresses)
            .iter()
            .map(|r| r.is_valid)
            .collect();
        assert_eq!(verdicts, vec![true, false, true]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = LineFileSource::new("/definitely/not/here.txt");
        let err = source.read_addresses().await.unwrap_err();
        assert!(matches!(err, crate::utils::error::VerifierError::IoError(_)));
    }
}
