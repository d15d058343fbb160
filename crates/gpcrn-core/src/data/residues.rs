use phf::{Map, phf_map};

static RESIDUE_NAMES: Map<char, &'static str> = phf_map! {
    // Charged (side chains often make salt bridges)
    'R' => "ARG", 'K' => "LYS", 'D' => "ASP", 'E' => "GLU",
    // Polar (hydrogen-bond donors or acceptors)
    'Q' => "GLN", 'N' => "ASN", 'H' => "HIS", 'S' => "SER",
    'T' => "THR", 'Y' => "TYR", 'C' => "CYS", 'W' => "TRP",
    // Hydrophobic (normally buried inside the protein core)
    'A' => "ALA", 'I' => "ILE", 'L' => "LEU", 'M' => "MET",
    'F' => "PHE", 'V' => "VAL", 'P' => "PRO", 'G' => "GLY",
};

/// Maps a one-letter amino-acid code to its three-letter abbreviation.
pub fn three_letter_code(code: char) -> Option<&'static str> {
    RESIDUE_NAMES.get(&code.to_ascii_uppercase()).copied()
}

/// All known `(one-letter, three-letter)` pairs, sorted by one-letter code.
pub fn residue_table() -> Vec<(char, &'static str)> {
    let mut table: Vec<_> = RESIDUE_NAMES.entries().map(|(&c, &n)| (c, n)).collect();
    table.sort_unstable_by_key(|&(c, _)| c);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_letter_code_maps_standard_residues() {
        assert_eq!(three_letter_code('Y'), Some("TYR"));
        assert_eq!(three_letter_code('G'), Some("GLY"));
        assert_eq!(three_letter_code('W'), Some("TRP"));
    }

    #[test]
    fn three_letter_code_folds_case() {
        assert_eq!(three_letter_code('y'), Some("TYR"));
        assert_eq!(three_letter_code('r'), Some("ARG"));
    }

    #[test]
    fn three_letter_code_rejects_unknown_codes() {
        assert_eq!(three_letter_code('?'), None);
        assert_eq!(three_letter_code('X'), None);
        assert_eq!(three_letter_code('B'), None);
    }

    #[test]
    fn residue_table_lists_all_twenty_in_order() {
        let table = residue_table();
        assert_eq!(table.len(), 20);
        assert!(table.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(table.first(), Some(&('A', "ALA")));
        assert_eq!(table.last(), Some(&('Y', "TYR")));
    }
}
