use crate::core::{Catalog, CatalogProvider, SpeciesDescriptor};
use crate::utils::error::Result;
use std::io::Read;
use std::path::PathBuf;

/// The Hisui dex shipped with the crate.
const BUNDLED_HISUIDEX: &str = include_str!("../../data/hisuidex.csv");

/// Loads the catalog from a `id,name,dex_national,dex_hisui` CSV file,
/// falling back to the bundled Hisui dex when no path is configured.
#[derive(Debug, Clone, Default)]
pub struct CsvCatalogProvider {
    path: Option<PathBuf>,
}

impl CsvCatalogProvider {
    pub fn bundled() -> Self {
        Self { path: None }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn parse<R: Read>(reader: R) -> Result<Catalog> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let species = csv_reader
            .deserialize::<SpeciesDescriptor>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Catalog::new(species)
    }
}

impl CatalogProvider for CsvCatalogProvider {
    fn hisuidex(&self) -> Result<Catalog> {
        let catalog = match &self.path {
            Some(path) => {
                tracing::debug!("Loading species catalog from {}", path.display());
                let file = std::fs::File::open(path)?;
                Self::parse(file)?
            }
            None => Self::parse(BUNDLED_HISUIDEX.as_bytes())?,
        };

        tracing::info!("Loaded species catalog with {} entries", catalog.len());
        Ok(catalog)
    }
}
