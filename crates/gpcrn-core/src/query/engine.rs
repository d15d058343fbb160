use super::error::QueryError;
use super::locate::{find_label, locate};
use super::target::{MatchClass, resolve_targets};
use crate::data::scheme::NumberingScheme;
use crate::data::store::ReferenceStore;
use tracing::debug;

/// Output columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Symbol = 0,
    Gene = 1,
    Uniprot = 2,
    Residue = 3,
    Sequence = 4,
    Numbering = 5,
}

impl Column {
    pub const COUNT: usize = 6;
}

/// One result row, as handed to the external formatter.
///
/// `seq` and `residue` are `None` only on unmatched placeholder rows; `label`
/// then carries either `"?"` (sequence mode) or the originally requested
/// label (label mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub uniprot: String,
    pub seq: Option<i32>,
    pub label: String,
    pub residue: Option<char>,
    /// Which columns the formatter should visually distinguish.
    pub highlights: [bool; Column::COUNT],
    pub unmatched: bool,
}

/// How the numbering half of a query is interpreted.
#[derive(Debug, PartialEq, Eq)]
enum NumberingMode {
    /// Empty numbering: every numbered position of each resolved protein.
    ListAll,
    /// A run of decimal digits: raw sequence-number lookup.
    Sequence(i32),
    /// A short token: scheme-label lookup. Carries the folded form used for
    /// matching and the literal form echoed on unmatched rows.
    Label { folded: String, literal: String },
}

/// Resolves `<target>:<numbering>` queries against one store and one scheme.
///
/// The scheme is fixed for the engine's lifetime (it is selected once per
/// process run); each call to [`run`](Self::run) is independent and touches
/// no shared mutable state.
pub struct QueryEngine<'a> {
    store: &'a ReferenceStore,
    scheme: &'static NumberingScheme,
    show_unmatched: bool,
}

impl<'a> QueryEngine<'a> {
    pub fn new(
        store: &'a ReferenceStore,
        scheme: &'static NumberingScheme,
        show_unmatched: bool,
    ) -> Self {
        Self { store, scheme, show_unmatched }
    }

    pub fn scheme(&self) -> &'static NumberingScheme {
        self.scheme
    }

    /// Resolves one query to its full row sequence.
    ///
    /// Rows are emitted per resolved protein, in resolution order; unmatched
    /// placeholder rows appear only when the engine was built with
    /// `show_unmatched`.
    pub fn run(&self, query: &str) -> Result<Vec<Row>, QueryError> {
        let Some((target, numbering)) = query.split_once(':') else {
            return Err(QueryError::missing_separator(query));
        };
        if target.is_empty() && numbering.is_empty() {
            return Err(QueryError::empty_query(query));
        }

        let matched = resolve_targets(self.store, target)?;
        let mode = self.classify(numbering)?;
        debug!(target, ?mode, ids = matched.ids.len(), "query resolved");

        let highlights = self.highlights(matched.class, &mode);
        let mut rows = Vec::new();
        for uniprot in &matched.ids {
            self.produce_rows(uniprot, &mode, highlights, &mut rows);
        }
        Ok(rows)
    }

    /// Classifies the numbering token; evaluated strictly in order.
    fn classify(&self, numbering: &str) -> Result<NumberingMode, QueryError> {
        if numbering.is_empty() {
            return Ok(NumberingMode::ListAll);
        }
        let invalid = || QueryError::InvalidNumbering {
            numbering: numbering.to_string(),
            scheme: self.scheme.display_name(),
        };
        if numbering.bytes().all(|b| b.is_ascii_digit()) {
            // A digit run too long for an i32 cannot be a sequence number, and
            // as all-digits it cannot be a scheme label either.
            let seq = numbering.parse::<i32>().map_err(|_| invalid())?;
            return Ok(NumberingMode::Sequence(seq));
        }
        if numbering.len() <= self.scheme.width {
            return Ok(NumberingMode::Label {
                folded: numbering.to_ascii_lowercase(),
                literal: numbering.to_string(),
            });
        }
        Err(invalid())
    }

    fn highlights(&self, class: MatchClass, mode: &NumberingMode) -> [bool; Column::COUNT] {
        let mut mask = [false; Column::COUNT];
        match class {
            MatchClass::Canonical => mask[Column::Uniprot as usize] = true,
            MatchClass::Gene => mask[Column::Gene as usize] = true,
            MatchClass::Symbol => mask[Column::Symbol as usize] = true,
            // No output column shows the PDB id, and a wildcard highlights
            // nothing.
            MatchClass::Pdb | MatchClass::All => {}
        }
        match mode {
            NumberingMode::ListAll => {}
            NumberingMode::Sequence(_) => mask[Column::Sequence as usize] = true,
            NumberingMode::Label { .. } => mask[Column::Numbering as usize] = true,
        }
        mask
    }

    fn produce_rows(
        &self,
        uniprot: &str,
        mode: &NumberingMode,
        highlights: [bool; Column::COUNT],
        rows: &mut Vec<Row>,
    ) {
        let Some(numbering) = self.store.numbering_of(uniprot) else {
            return;
        };
        let table = self.store.string_table();

        match mode {
            NumberingMode::ListAll => {
                for seq in numbering.seq_range() {
                    if let Some((index, residue)) = locate(numbering, seq) {
                        rows.push(Row {
                            uniprot: uniprot.to_string(),
                            seq: Some(seq),
                            label: self.scheme.label(&table[index as usize]).to_string(),
                            residue: Some(residue),
                            highlights,
                            unmatched: false,
                        });
                    }
                }
            }
            NumberingMode::Sequence(seq) => match locate(numbering, *seq) {
                Some((index, residue)) => rows.push(Row {
                    uniprot: uniprot.to_string(),
                    seq: Some(*seq),
                    label: self.scheme.label(&table[index as usize]).to_string(),
                    residue: Some(residue),
                    highlights,
                    unmatched: false,
                }),
                None if self.show_unmatched => rows.push(Row {
                    uniprot: uniprot.to_string(),
                    seq: Some(*seq),
                    label: "?".to_string(),
                    residue: None,
                    highlights,
                    unmatched: true,
                }),
                None => {}
            },
            NumberingMode::Label { folded, literal } => {
                match find_label(numbering, table, self.scheme, folded) {
                    Some((seq, index, residue)) => rows.push(Row {
                        uniprot: uniprot.to_string(),
                        seq: Some(seq),
                        label: self.scheme.label(&table[index as usize]).to_string(),
                        residue: Some(residue),
                        highlights,
                        unmatched: false,
                    }),
                    None if self.show_unmatched => rows.push(Row {
                        uniprot: uniprot.to_string(),
                        seq: None,
                        label: literal.clone(),
                        residue: None,
                        highlights,
                        unmatched: true,
                    }),
                    None => {}
                }
            }
        }
    }
}
