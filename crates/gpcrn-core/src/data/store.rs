use std::collections::BTreeMap;

/// One protein entry, keyed by its UniProt accession.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    pub symbol: String,       // e.g. "5HT2A"
    pub species: String,      // e.g. "HUMAN"
    pub gene: String,         // e.g. "HTR2A"
    pub long_species: String, // e.g. "Homo sapiens"
}

impl ProteinRecord {
    /// The composite `SYMBOL_SPECIES` key, e.g. `5HT2A_HUMAN`.
    pub fn symbol_species(&self) -> String {
        format!("{}_{}", self.symbol, self.species)
    }
}

/// Per-protein numbering data.
///
/// Index `i` of both `residues` and `positions` corresponds to sequence number
/// `min_seq + i`. A `None` position means that sequence offset exists in the
/// protein but carries no scheme numbering (e.g. a loop outside the
/// transmembrane core).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueNumbering {
    pub min_seq: i32,
    residues: Vec<char>,
    positions: Vec<Option<u32>>,
}

impl ResidueNumbering {
    pub(crate) fn new(min_seq: i32, residues: Vec<char>, positions: Vec<Option<u32>>) -> Self {
        debug_assert_eq!(residues.len(), positions.len());
        Self { min_seq, residues, positions }
    }

    pub fn residue_count(&self) -> usize {
        self.positions.len()
    }

    /// The sequence numbers covered by this protein, `min_seq` upward.
    pub fn seq_range(&self) -> std::ops::Range<i32> {
        self.min_seq..self.min_seq + self.positions.len() as i32
    }

    /// String-table index at sequence number `seq`, if `seq` is in range and
    /// carries a numbering.
    pub fn position_at(&self, seq: i32) -> Option<u32> {
        if !self.seq_range().contains(&seq) {
            return None;
        }
        self.positions[(seq - self.min_seq) as usize]
    }

    /// One-letter residue code at sequence number `seq`, if in range.
    pub fn residue_at(&self, seq: i32) -> Option<char> {
        if !self.seq_range().contains(&seq) {
            return None;
        }
        Some(self.residues[(seq - self.min_seq) as usize])
    }
}

/// The full reference dataset: protein records, the five identifier indices,
/// per-protein numbering, and the shared label string table.
///
/// Built once by the loader and never mutated afterwards; every accessor takes
/// `&self` and the store can be shared freely.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    proteins: BTreeMap<String, ProteinRecord>,
    pdb_ids: BTreeMap<String, String>,
    genes: BTreeMap<String, Vec<String>>,
    symbol_species: BTreeMap<String, String>,
    symbols: BTreeMap<String, Vec<String>>,
    numbering: BTreeMap<String, ResidueNumbering>,
    string_table: Vec<String>,
}

impl ReferenceStore {
    pub(crate) fn with_string_table(string_table: Vec<String>) -> Self {
        Self { string_table, ..Self::default() }
    }

    /// Registers one protein entry under all five identifier indices.
    ///
    /// Gene and symbol groups keep insertion order; that order is observable
    /// through multi-valued target resolution and must stay deterministic.
    pub(crate) fn insert(
        &mut self,
        uniprot: String,
        record: ProteinRecord,
        pdb_ids: Vec<String>,
        numbering: ResidueNumbering,
    ) {
        for pdb in pdb_ids {
            self.pdb_ids.insert(pdb, uniprot.clone());
        }
        self.genes.entry(record.gene.clone()).or_default().push(uniprot.clone());
        self.symbol_species.insert(record.symbol_species(), uniprot.clone());
        self.symbols.entry(record.symbol.clone()).or_default().push(uniprot.clone());
        self.numbering.insert(uniprot.clone(), numbering);
        self.proteins.insert(uniprot, record);
    }

    pub fn lookup_canonical(&self, uniprot: &str) -> Option<&ProteinRecord> {
        self.proteins.get(uniprot)
    }

    pub fn lookup_pdb(&self, pdb_id: &str) -> Option<&str> {
        self.pdb_ids.get(pdb_id).map(String::as_str)
    }

    pub fn lookup_gene(&self, gene: &str) -> &[String] {
        self.genes.get(gene).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lookup_symbol_species(&self, key: &str) -> Option<&str> {
        self.symbol_species.get(key).map(String::as_str)
    }

    pub fn lookup_symbol(&self, symbol: &str) -> &[String] {
        self.symbols.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn numbering_of(&self, uniprot: &str) -> Option<&ResidueNumbering> {
        self.numbering.get(uniprot)
    }

    /// Every canonical id, in sorted store order (the wildcard expansion order).
    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.proteins.keys().map(String::as_str)
    }

    pub fn string_table(&self) -> &[String] {
        &self.string_table
    }

    pub fn len(&self) -> usize {
        self.proteins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty()
    }

    // Sorted key iterators backing the `--list` surfaces.

    pub fn pdb_keys(&self) -> impl Iterator<Item = &str> {
        self.pdb_ids.keys().map(String::as_str)
    }

    pub fn gene_keys(&self) -> impl Iterator<Item = &str> {
        self.genes.keys().map(String::as_str)
    }

    pub fn symbol_species_keys(&self) -> impl Iterator<Item = &str> {
        self.symbol_species.keys().map(String::as_str)
    }

    pub fn symbol_keys(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::tiny_store;
    use super::*;

    #[test]
    fn insert_populates_all_five_indices() {
        let store = tiny_store();
        assert!(store.lookup_canonical("P00001").is_some());
        assert_eq!(store.lookup_pdb("1AAA"), Some("P00001"));
        assert_eq!(store.lookup_gene("GENE1"), ["P00001", "P00002"]);
        assert_eq!(store.lookup_symbol_species("RCPT1_HUMAN"), Some("P00001"));
        assert_eq!(store.lookup_symbol("RCPT1"), ["P00001", "P00002"]);
    }

    #[test]
    fn multi_valued_groups_keep_insertion_order() {
        let store = tiny_store();
        assert_eq!(store.lookup_gene("GENE1"), ["P00001", "P00002"]);
    }

    #[test]
    fn missing_keys_resolve_to_nothing() {
        let store = tiny_store();
        assert!(store.lookup_canonical("P99999").is_none());
        assert!(store.lookup_pdb("9ZZZ").is_none());
        assert!(store.lookup_gene("NOGENE").is_empty());
        assert!(store.lookup_symbol_species("RCPT1_RAT").is_none());
        assert!(store.lookup_symbol("NOSYM").is_empty());
    }

    #[test]
    fn all_ids_iterates_in_sorted_order() {
        let store = tiny_store();
        let ids: Vec<_> = store.all_ids().collect();
        assert_eq!(ids, ["P00001", "P00002"]);
    }

    #[test]
    fn symbol_species_key_is_composite() {
        let record = ProteinRecord {
            symbol: "5HT2A".to_string(),
            species: "HUMAN".to_string(),
            gene: "HTR2A".to_string(),
            long_species: "Homo sapiens".to_string(),
        };
        assert_eq!(record.symbol_species(), "5HT2A_HUMAN");
    }

    #[test]
    fn numbering_bounds_and_sentinels() {
        let store = tiny_store();
        let numbering = store.numbering_of("P00001").unwrap();
        assert_eq!(numbering.residue_count(), 4);
        assert_eq!(numbering.seq_range(), 100..104);
        assert_eq!(numbering.position_at(100), Some(0));
        assert_eq!(numbering.position_at(101), None); // sentineled
        assert_eq!(numbering.residue_at(101), Some('D'));
        assert_eq!(numbering.position_at(99), None); // below range
        assert_eq!(numbering.position_at(104), None); // above range
        assert_eq!(numbering.residue_at(104), None);
    }
}
