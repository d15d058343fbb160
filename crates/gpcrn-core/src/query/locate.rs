use super::matcher::equals_fold;
use crate::data::scheme::NumberingScheme;
use crate::data::store::ResidueNumbering;

/// Looks up the residue at sequence number `seq`.
///
/// Returns the string-table index of its numbering entry plus its one-letter
/// code, or `None` when `seq` is outside the protein's range or the position
/// carries no scheme numbering. O(1).
pub fn locate(numbering: &ResidueNumbering, seq: i32) -> Option<(u32, char)> {
    let index = numbering.position_at(seq)?;
    let residue = numbering.residue_at(seq)?;
    Some((index, residue))
}

/// Scans for the first sequence position whose scheme label matches `label`.
///
/// Positions are visited from `min_seq` upward; at each numbered one, the
/// stored entry is sliced to the scheme's window and compared case-insensitively
/// to the requested label. Labels are expected unique per protein, but this is
/// not verified: the lowest matching sequence number wins. O(residue count).
pub fn find_label(
    numbering: &ResidueNumbering,
    string_table: &[String],
    scheme: &NumberingScheme,
    label: &str,
) -> Option<(i32, u32, char)> {
    for seq in numbering.seq_range() {
        let Some((index, residue)) = locate(numbering, seq) else {
            continue;
        };
        let window = scheme.window(&string_table[index as usize]);
        if equals_fold(window, label) {
            return Some((seq, index, residue));
        }
    }
    None
}
