use crate::utils::error::Result;
use async_trait::async_trait;

/// A single pass/fail predicate over an address.
///
/// Implementations must be pure: the same input always yields the same
/// verdict and no state is mutated, so one rule can be shared by every
/// worker of a batch without locking. An absent address is `None`.
pub trait ValidationRule: Send + Sync {
    fn is_valid(&self, address: Option<&str>) -> bool;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> ValidationRule for F
where
    F: Fn(Option<&str>) -> bool + Send + Sync,
{
    fn is_valid(&self, address: Option<&str>) -> bool {
        self(address)
    }

    fn name(&self) -> &str {
        "closure"
    }
}

#[async_trait]
pub trait AddressSource: Send + Sync {
    async fn read_addresses(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    /// `None` disables the corporate domain rule.
    fn corporate_domain(&self) -> Option<&str>;
    fn concurrency(&self) -> usize;
    fn chunk_size(&self) -> usize;
}
