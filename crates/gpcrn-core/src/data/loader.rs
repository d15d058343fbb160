use super::scheme::SCHEMES;
use super::store::{ProteinRecord, ReferenceStore, ResidueNumbering};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// The bundled GPCRdb snapshot, compiled into the library.
const EMBEDDED_SNAPSHOT: &str = include_str!("../../assets/gpcrdb.toml");

/// Raw on-disk shape of a snapshot file, before validation.
///
/// Positions use `-1` as the "no numbering here" sentinel; the loader converts
/// them to `None` so a sentinel can never be mistaken for a string-table index.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSnapshot {
    string_table: Vec<String>,
    proteins: Vec<RawProtein>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawProtein {
    uniprot: String,
    symbol: String,
    species: String,
    gene: String,
    long_species: String,
    pdb: Vec<String>,
    min_seq: i32,
    residues: String,
    positions: Vec<i64>,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read snapshot '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("string-table entry {index} is {len} chars, schemes require at least {required}")]
    ShortTableEntry { index: usize, len: usize, required: usize },

    #[error("protein '{uniprot}': {residues} residue codes but {positions} positions")]
    LengthMismatch { uniprot: String, residues: usize, positions: usize },

    #[error("protein '{uniprot}': position {value} at offset {offset} is not a string-table index (table has {table_len} entries)")]
    BadPosition { uniprot: String, offset: usize, value: i64, table_len: usize },

    #[error("protein '{uniprot}': residue codes must be ASCII letters")]
    BadResidueCodes { uniprot: String },

    #[error("duplicate protein entry '{uniprot}'")]
    DuplicateProtein { uniprot: String },

    #[error("pdb id '{pdb}' is mapped to both '{first}' and '{second}'")]
    DuplicatePdb { pdb: String, first: String, second: String },

    #[error("symbol-species key '{key}' is mapped to both '{first}' and '{second}'")]
    DuplicateSymbolSpecies { key: String, first: String, second: String },
}

impl ReferenceStore {
    /// Loads the snapshot bundled into the binary.
    pub fn embedded() -> Result<Self, DataError> {
        from_toml(EMBEDDED_SNAPSHOT)
    }

    /// Loads a snapshot from an external TOML file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        from_toml(&content)
    }
}

fn from_toml(content: &str) -> Result<ReferenceStore, DataError> {
    let raw: RawSnapshot = toml::from_str(content)?;

    // Every entry must be sliceable by every scheme window.
    let required = SCHEMES.iter().map(|s| s.offset + s.width).max().unwrap_or(0);
    for (index, entry) in raw.string_table.iter().enumerate() {
        if entry.len() < required {
            return Err(DataError::ShortTableEntry { index, len: entry.len(), required });
        }
    }

    let table_len = raw.string_table.len();
    let mut store = ReferenceStore::with_string_table(raw.string_table);

    for protein in raw.proteins {
        let RawProtein { uniprot, symbol, species, gene, long_species, pdb, min_seq, residues, positions } =
            protein;

        if !residues.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DataError::BadResidueCodes { uniprot });
        }
        let residues: Vec<char> = residues.chars().collect();
        if residues.len() != positions.len() {
            return Err(DataError::LengthMismatch {
                uniprot,
                residues: residues.len(),
                positions: positions.len(),
            });
        }

        let positions = positions
            .iter()
            .enumerate()
            .map(|(offset, &value)| match value {
                -1 => Ok(None),
                v if v >= 0 && (v as usize) < table_len => Ok(Some(v as u32)),
                v => Err(DataError::BadPosition {
                    uniprot: uniprot.clone(),
                    offset,
                    value: v,
                    table_len,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if store.lookup_canonical(&uniprot).is_some() {
            return Err(DataError::DuplicateProtein { uniprot });
        }
        for id in &pdb {
            if let Some(first) = store.lookup_pdb(id) {
                return Err(DataError::DuplicatePdb {
                    pdb: id.clone(),
                    first: first.to_string(),
                    second: uniprot.clone(),
                });
            }
        }
        let record = ProteinRecord { symbol, species, gene, long_species };
        if let Some(first) = store.lookup_symbol_species(&record.symbol_species()) {
            return Err(DataError::DuplicateSymbolSpecies {
                key: record.symbol_species(),
                first: first.to_string(),
                second: uniprot.clone(),
            });
        }

        store.insert(uniprot, record, pdb, ResidueNumbering::new(min_seq, residues, positions));
    }

    debug!(
        proteins = store.len(),
        labels = store.string_table().len(),
        "reference store loaded"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
string-table = [
    "1.50                       1.50x50       150  ",
    "1.51                       1.51x51       151  ",
]

[[proteins]]
uniprot = "P00001"
symbol = "RCPT1"
species = "HUMAN"
gene = "GENE1"
long-species = "Homo sapiens"
pdb = ["1AAA"]
min-seq = 10
residues = "NVA"
positions = [0, -1, 1]
"#;

    #[test]
    fn minimal_snapshot_loads_and_converts_sentinels() {
        let store = from_toml(MINIMAL).unwrap();
        assert_eq!(store.len(), 1);
        let numbering = store.numbering_of("P00001").unwrap();
        assert_eq!(numbering.min_seq, 10);
        assert_eq!(numbering.position_at(10), Some(0));
        assert_eq!(numbering.position_at(11), None);
        assert_eq!(numbering.position_at(12), Some(1));
        assert_eq!(numbering.residue_at(10), Some('N'));
    }

    #[test]
    fn short_string_table_entry_is_rejected() {
        let bad = MINIMAL.replacen(
            "\"1.50                       1.50x50       150  \"",
            "\"1.50\"",
            1,
        );
        let err = from_toml(&bad).unwrap_err();
        assert!(matches!(err, DataError::ShortTableEntry { index: 0, .. }));
    }

    #[test]
    fn residue_position_length_mismatch_is_rejected() {
        let bad = MINIMAL.replace("residues = \"NVA\"", "residues = \"NV\"");
        let err = from_toml(&bad).unwrap_err();
        assert!(matches!(
            err,
            DataError::LengthMismatch { residues: 2, positions: 3, .. }
        ));
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let bad = MINIMAL.replace("positions = [0, -1, 1]", "positions = [0, -1, 7]");
        let err = from_toml(&bad).unwrap_err();
        assert!(matches!(err, DataError::BadPosition { offset: 2, value: 7, .. }));
    }

    #[test]
    fn negative_non_sentinel_position_is_rejected() {
        let bad = MINIMAL.replace("positions = [0, -1, 1]", "positions = [0, -2, 1]");
        let err = from_toml(&bad).unwrap_err();
        assert!(matches!(err, DataError::BadPosition { value: -2, .. }));
    }

    #[test]
    fn non_alphabetic_residue_codes_are_rejected() {
        let bad = MINIMAL.replace("residues = \"NVA\"", "residues = \"N?A\"");
        let err = from_toml(&bad).unwrap_err();
        assert!(matches!(err, DataError::BadResidueCodes { .. }));
    }

    #[test]
    fn duplicate_protein_entries_are_rejected() {
        let block = MINIMAL.split("[[proteins]]").nth(1).unwrap();
        let bad = format!("{MINIMAL}\n[[proteins]]{}", block.replace("pdb = [\"1AAA\"]", "pdb = []"));
        let err = from_toml(&bad).unwrap_err();
        assert!(matches!(err, DataError::DuplicateProtein { .. }));
    }

    #[test]
    fn malformed_toml_is_reported() {
        assert!(matches!(from_toml("string-table = ["), Err(DataError::Toml(_))));
    }

    #[test]
    fn load_reads_a_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.toml");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(MINIMAL.as_bytes())
            .unwrap();
        let store = ReferenceStore::load(&path).unwrap();
        assert_eq!(store.lookup_pdb("1AAA"), Some("P00001"));
    }

    #[test]
    fn load_reports_missing_files() {
        let err = ReferenceStore::load(Path::new("/nonexistent/snapshot.toml")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn embedded_snapshot_loads() {
        let store = ReferenceStore::embedded().unwrap();
        assert!(!store.is_empty());
        assert!(store.lookup_canonical("P28223").is_some());
        assert_eq!(store.lookup_pdb("6A93"), Some("P28223"));
    }
}
