use crate::query::matcher::equals_fold;

/// One residue numbering scheme.
///
/// Every entry of the shared string table is a fixed-layout concatenation of
/// one label per scheme; a scheme reads its own label by slicing the entry to
/// the `[offset, offset + width)` window. The data loader guarantees every
/// stored entry is long enough for every scheme window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingScheme {
    pub offset: usize,
    pub width: usize,
    /// Accepted aliases. `names[0]` is the full display name, `names[1]` the
    /// primary abbreviation shown as the numbering column header.
    pub names: &'static [&'static str],
}

impl NumberingScheme {
    /// The full display name, used in messages.
    pub fn display_name(&self) -> &'static str {
        self.names[0]
    }

    /// The primary abbreviation, used as the numbering column header.
    pub fn abbreviation(&self) -> &'static str {
        self.names[1]
    }

    /// Slices this scheme's label window out of a string-table entry.
    pub fn window<'a>(&self, entry: &'a str) -> &'a str {
        entry.get(self.offset..self.offset + self.width).unwrap_or("")
    }

    /// The label window with its layout padding removed, for display.
    pub fn label<'a>(&self, entry: &'a str) -> &'a str {
        self.window(entry).trim_end()
    }
}

/// The fixed, ordered scheme list. Offsets and widths mirror the string-table
/// layout of the bundled GPCRdb snapshot.
pub const SCHEMES: &[NumberingScheme] = &[
    NumberingScheme { offset: 0, width: 6, names: &["Ballesteros-Weinstein", "BW", "ballesteros"] },
    NumberingScheme { offset: 6, width: 7, names: &["Wootten", "WB", "wootten"] },
    NumberingScheme { offset: 13, width: 7, names: &["Pin", "PIN"] },
    NumberingScheme { offset: 20, width: 7, names: &["Wang", "WANG"] },
    NumberingScheme { offset: 27, width: 7, names: &["GPCRdb(A)", "GPCRDBA", "A"] },
    NumberingScheme { offset: 34, width: 7, names: &["GPCRdb(B)", "GPCRDBB", "B"] },
    NumberingScheme { offset: 41, width: 5, names: &["Oliveira", "OLIVEIRA", "O"] },
];

/// The scheme selected when the user does not ask for one.
pub const DEFAULT_SCHEME_KEYWORD: &str = "BW";

/// Resolves a user-supplied keyword to a scheme by alias matching.
///
/// The first scheme whose alias set contains a case-insensitive match wins.
/// Resolution happens once per process run, not per query.
pub fn resolve_scheme(keyword: &str) -> Option<&'static NumberingScheme> {
    SCHEMES
        .iter()
        .find(|scheme| scheme.names.iter().any(|name| equals_fold(keyword, name)))
}
