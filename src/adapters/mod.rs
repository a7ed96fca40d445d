// Adapters layer: concrete catalog and save decoder implementations.

pub mod catalog;
pub mod decoder;

pub use catalog::CsvCatalogProvider;
pub use decoder::JsonResearchDecoder;
