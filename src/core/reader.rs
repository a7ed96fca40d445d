use crate::core::aggregator::aggregate;
use crate::core::{Catalog, ReadResearchResponse, SaveDecoder};
use std::sync::Arc;

pub const NO_SAVE_SELECTED: &str = "There was no save file selected";

/// What arrived in the `save` field of an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveUpload {
    /// No `save` field at all.
    Absent,
    /// Browsers send an empty filename when nothing was picked.
    EmptyFilename,
    /// A named file with no bytes in it.
    EmptyContent { filename: String },
    Present { filename: String, bytes: Vec<u8> },
}

impl SaveUpload {
    pub fn from_parts(filename: Option<&str>, bytes: Vec<u8>) -> Self {
        match filename {
            None | Some("") => SaveUpload::EmptyFilename,
            Some(name) if bytes.is_empty() => SaveUpload::EmptyContent {
                filename: name.to_string(),
            },
            Some(name) => SaveUpload::Present {
                filename: name.to_string(),
                bytes,
            },
        }
    }
}

/// Runs decode then aggregate for one upload against the shared catalog.
pub struct ResearchReader<D: SaveDecoder> {
    catalog: Arc<Catalog>,
    decoder: D,
}

impl<D: SaveDecoder> ResearchReader<D> {
    pub fn new(catalog: Arc<Catalog>, decoder: D) -> Self {
        Self { catalog, decoder }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn read(&self, upload: SaveUpload) -> ReadResearchResponse {
        let (filename, bytes) = match upload {
            SaveUpload::Present { filename, bytes } => (filename, bytes),
            SaveUpload::EmptyContent { filename } => {
                tracing::warn!("Upload '{}' contained no data", filename);
                return ReadResearchResponse::error(NO_SAVE_SELECTED);
            }
            SaveUpload::Absent | SaveUpload::EmptyFilename => {
                tracing::debug!("No save file in upload");
                return ReadResearchResponse::error(NO_SAVE_SELECTED);
            }
        };

        tracing::debug!("Decoding '{}' ({} bytes)", filename, bytes.len());
        let snapshot = match self.decoder.read_research(&bytes) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::info!("Could not decode '{}': {}", filename, e);
                return ReadResearchResponse::error(e.message());
            }
        };

        let rolls = aggregate(&snapshot, &self.catalog);
        tracing::info!(
            "Read research from '{}': {} entries, shiny charm: {}",
            filename,
            snapshot.research_entries.len(),
            snapshot.shinycharm
        );

        ReadResearchResponse::Rolls {
            shinycharm: snapshot.shinycharm,
            rolls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ResearchRecord, ResearchSnapshot, RollResult, SpeciesDescriptor};
    use crate::utils::error::DecodeError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockDecoder {
        calls: AtomicUsize,
        result: std::result::Result<ResearchSnapshot, DecodeError>,
    }

    impl MockDecoder {
        fn returning(result: std::result::Result<ResearchSnapshot, DecodeError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SaveDecoder for MockDecoder {
        fn read_research(
            &self,
            _bytes: &[u8],
        ) -> std::result::Result<ResearchSnapshot, DecodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn rowlet_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![SpeciesDescriptor {
                id: "rowlet".to_string(),
                name: "Rowlet".to_string(),
                dex_national: 722,
                dex_hisui: 1,
            }])
            .unwrap(),
        )
    }

    fn snapshot_with(entries: Vec<(u16, ResearchRecord)>) -> ResearchSnapshot {
        ResearchSnapshot {
            shinycharm: false,
            research_entries: entries.into_iter().collect(),
        }
    }

    fn present() -> SaveUpload {
        SaveUpload::Present {
            filename: "main".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    fn rolls_of(response: ReadResearchResponse) -> (bool, RollResult) {
        match response {
            ReadResearchResponse::Rolls { shinycharm, rolls } => (shinycharm, rolls),
            ReadResearchResponse::Error { error } => panic!("unexpected error: {}", error),
        }
    }

    #[test]
    fn test_classify_upload() {
        assert_eq!(SaveUpload::from_parts(None, vec![1]), SaveUpload::EmptyFilename);
        assert_eq!(SaveUpload::from_parts(Some(""), vec![]), SaveUpload::EmptyFilename);
        assert_eq!(
            SaveUpload::from_parts(Some("main"), vec![]),
            SaveUpload::EmptyContent {
                filename: "main".to_string()
            }
        );
        assert_eq!(
            SaveUpload::from_parts(Some("main"), vec![7]),
            SaveUpload::Present {
                filename: "main".to_string(),
                bytes: vec![7]
            }
        );
    }

    #[test]
    fn test_level10_scores_one() {
        let decoder = MockDecoder::returning(Ok(snapshot_with(vec![(
            722,
            ResearchRecord {
                level10: true,
                perfect: false,
            },
        )])));
        let reader = ResearchReader::new(rowlet_catalog(), decoder);

        let (shinycharm, rolls) = rolls_of(reader.read(present()));
        assert!(!shinycharm);
        assert_eq!(rolls.get("Rowlet"), Some(&1));
    }

    #[test]
    fn test_perfect_scores_three() {
        let decoder = MockDecoder::returning(Ok(snapshot_with(vec![(
            722,
            ResearchRecord {
                level10: true,
                perfect: true,
            },
        )])));
        let reader = ResearchReader::new(rowlet_catalog(), decoder);

        let (_, rolls) = rolls_of(reader.read(present()));
        assert_eq!(rolls.get("Rowlet"), Some(&3));
    }

    #[test]
    fn test_empty_entries_score_zero() {
        let decoder = MockDecoder::returning(Ok(snapshot_with(vec![])));
        let reader = ResearchReader::new(rowlet_catalog(), decoder);

        let (_, rolls) = rolls_of(reader.read(present()));
        assert_eq!(rolls.get("Rowlet"), Some(&0));
    }

    #[test]
    fn test_shinycharm_is_passed_through() {
        let mut snapshot = snapshot_with(vec![]);
        snapshot.shinycharm = true;
        let reader = ResearchReader::new(rowlet_catalog(), MockDecoder::returning(Ok(snapshot)));

        let (shinycharm, _) = rolls_of(reader.read(present()));
        assert!(shinycharm);
    }

    #[test]
    fn test_missing_upload_never_decodes() {
        let reader = ResearchReader::new(
            rowlet_catalog(),
            MockDecoder::returning(Ok(snapshot_with(vec![]))),
        );

        for upload in [
            SaveUpload::Absent,
            SaveUpload::EmptyFilename,
            SaveUpload::EmptyContent {
                filename: "main".to_string(),
            },
        ] {
            assert_eq!(
                reader.read(upload),
                ReadResearchResponse::error(NO_SAVE_SELECTED)
            );
        }

        assert_eq!(reader.decoder.calls(), 0);
    }

    #[test]
    fn test_decode_failure_is_returned_verbatim() {
        let reader = ResearchReader::new(
            rowlet_catalog(),
            MockDecoder::returning(Err(DecodeError::new("bad format"))),
        );

        assert_eq!(
            reader.read(present()),
            ReadResearchResponse::error("bad format")
        );
        assert_eq!(reader.decoder.calls(), 1);
    }
}
