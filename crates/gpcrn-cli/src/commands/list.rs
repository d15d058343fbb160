use crate::cli::Listing;
use crate::error::Result;
use gpcrn::data::residues::residue_table;
use gpcrn::data::{DEFAULT_SCHEME_KEYWORD, ReferenceStore, SCHEMES};
use std::io::Write;

/// Prints one of the supported listings.
pub fn run(store: &ReferenceStore, listing: Listing, out: &mut impl Write) -> Result<()> {
    match listing {
        Listing::Schemes => list_schemes(out)?,
        Listing::Residues => {
            for (code, name) in residue_table() {
                writeln!(out, "{code}\t{name}")?;
            }
        }
        Listing::Symbols => list_keys(out, store.symbol_keys())?,
        Listing::SymbolSpecies => list_keys(out, store.symbol_species_keys())?,
        Listing::Genes => list_keys(out, store.gene_keys())?,
        Listing::Pdbids => list_keys(out, store.pdb_keys())?,
        Listing::Uniprots => list_keys(out, store.all_ids())?,
    }
    Ok(())
}

fn list_schemes(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Supported schemes:")?;
    for scheme in SCHEMES {
        // Aliases long-form first, full name last, default marked.
        let abbrs = scheme.names[1..].iter().rev().copied().collect::<Vec<_>>().join(", ");
        let marker = if scheme.names.contains(&DEFAULT_SCHEME_KEYWORD) {
            " -> DEFAULT"
        } else {
            ""
        };
        writeln!(out, "  {abbrs:<16}{}{marker}", scheme.display_name())?;
    }
    Ok(())
}

fn list_keys<'a>(out: &mut impl Write, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    for key in keys {
        writeln!(out, "{key}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(store: &ReferenceStore, listing: Listing) -> String {
        let mut buf = Vec::new();
        run(store, listing, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn schemes_listing_marks_the_default() {
        let store = ReferenceStore::embedded().unwrap();
        let out = render(&store, Listing::Schemes);
        assert!(out.starts_with("Supported schemes:"));
        assert!(out.contains("Ballesteros-Weinstein -> DEFAULT"));
        assert!(out.contains("Wootten"));
    }

    #[test]
    fn schemes_listing_puts_long_form_alias_first() {
        let store = ReferenceStore::embedded().unwrap();
        let out = render(&store, Listing::Schemes);
        assert!(out.contains("ballesteros, BW"));
        assert!(out.contains("wootten, WB"));
    }

    #[test]
    fn residues_listing_is_tab_separated_and_sorted() {
        let store = ReferenceStore::embedded().unwrap();
        let out = render(&store, Listing::Residues);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], "A\tALA");
        assert_eq!(lines[19], "Y\tTYR");
    }

    #[test]
    fn key_listings_are_sorted_line_per_entry() {
        let store = ReferenceStore::embedded().unwrap();
        let uniprots = render(&store, Listing::Uniprots);
        let ids: Vec<_> = uniprots.lines().collect();
        assert!(ids.contains(&"P28223"));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let pdbids = render(&store, Listing::Pdbids);
        assert!(pdbids.lines().any(|l| l == "6A93"));

        let genes = render(&store, Listing::Genes);
        assert!(genes.lines().any(|l| l == "HTR2A"));

        let symbols = render(&store, Listing::SymbolSpecies);
        assert!(symbols.lines().any(|l| l == "5HT2A_HUMAN"));
    }
}
