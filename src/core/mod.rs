pub mod aggregator;
pub mod reader;

pub use crate::domain::model::{
    Catalog, ReadResearchResponse, ResearchRecord, ResearchSnapshot, RollResult, SpeciesDescriptor,
};
pub use crate::domain::ports::{CatalogProvider, ConfigProvider, SaveDecoder};
pub use crate::utils::error::Result;
