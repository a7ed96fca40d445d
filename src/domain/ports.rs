use crate::domain::model::{Catalog, ResearchSnapshot};
use crate::utils::error::{DecodeError, Result};

/// Supplies the regional species catalog. Called once at startup.
pub trait CatalogProvider {
    fn hisuidex(&self) -> Result<Catalog>;
}

/// Turns raw save bytes into a research snapshot.
///
/// Implementations must not keep shared mutable state; one decoder instance
/// serves every concurrent request.
pub trait SaveDecoder: Send + Sync {
    fn read_research(&self, bytes: &[u8]) -> std::result::Result<ResearchSnapshot, DecodeError>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn max_upload_bytes(&self) -> usize;
    fn catalog_path(&self) -> Option<&str>;
}
