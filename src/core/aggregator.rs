use crate::core::{Catalog, ResearchRecord, ResearchSnapshot, RollResult};

/// Rolls granted by a perfect research entry.
pub const PERFECT_ROLLS: u8 = 3;
/// Rolls granted by research level 10.
pub const LEVEL10_ROLLS: u8 = 1;

/// Perfect research takes precedence over level 10; the two never add up.
pub fn rolls_for(record: Option<&ResearchRecord>) -> u8 {
    match record {
        Some(r) if r.perfect => PERFECT_ROLLS,
        Some(r) if r.level10 => LEVEL10_ROLLS,
        _ => 0,
    }
}

/// Scores every catalog species against a decoded snapshot.
///
/// Iteration is driven by the catalog: species missing from the snapshot score 0
/// and snapshot entries outside the catalog are ignored.
pub fn aggregate(snapshot: &ResearchSnapshot, catalog: &Catalog) -> RollResult {
    let rolls: RollResult = catalog
        .iter()
        .map(|species| {
            let record = snapshot.research_entries.get(&species.dex_national);
            (species.name.clone(), rolls_for(record))
        })
        .collect();

    tracing::debug!(
        "Aggregated {} species ({} with research entries)",
        rolls.len(),
        rolls.values().filter(|r| **r > 0).count()
    );

    rolls
}
