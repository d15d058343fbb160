use colored::Colorize;
use gpcrn::data::residues::three_letter_code;
use gpcrn::data::{NumberingScheme, ReferenceStore};
use gpcrn::query::{Column, Row};
use std::io::{self, Write};

/// Left-aligned field widths; the final column is never padded.
const COLUMN_WIDTHS: [usize; Column::COUNT] = [14, 9, 10, 5, 6, 0];
const COLUMN_TITLES: [&str; Column::COUNT - 1] = ["Protein", "Gene", "Uniprot", "Res", "Seq"];

/// Renders result rows as a fixed-width table.
///
/// Keeps the line counter that decides whether the header still needs to go
/// out; one writer is shared across all queries of a run so the header is
/// emitted at most once.
pub struct TableWriter<'a> {
    store: &'a ReferenceStore,
    scheme: &'static NumberingScheme,
    suppressed: [bool; Column::COUNT],
    /// Highest non-suppressed column, `None` when everything is suppressed.
    last_col: Option<usize>,
    hide_headers: bool,
    color: bool,
    lines: usize,
}

impl<'a> TableWriter<'a> {
    pub fn new(
        store: &'a ReferenceStore,
        scheme: &'static NumberingScheme,
        suppressed: [bool; Column::COUNT],
        hide_headers: bool,
        color: bool,
    ) -> Self {
        let last_col = suppressed.iter().rposition(|&off| !off);
        Self { store, scheme, suppressed, last_col, hide_headers, color, lines: 0 }
    }

    /// Writes one query's rows, emitting the header first if it is still due.
    /// The header goes out for any valid query, even one that produced no rows.
    pub fn write_rows(&mut self, out: &mut impl Write, rows: &[Row]) -> io::Result<()> {
        if !self.hide_headers && self.lines == 0 {
            self.write_header(out)?;
        }
        for row in rows {
            self.write_row(out, row)?;
        }
        Ok(())
    }

    fn write_header(&mut self, out: &mut impl Write) -> io::Result<()> {
        let mut titles = [""; Column::COUNT];
        titles[..COLUMN_TITLES.len()].copy_from_slice(&COLUMN_TITLES);
        titles[Column::Numbering as usize] = self.scheme.abbreviation();
        self.write_line(out, &titles, &[false; Column::COUNT])
    }

    fn write_row(&mut self, out: &mut impl Write, row: &Row) -> io::Result<()> {
        let Some(record) = self.store.lookup_canonical(&row.uniprot) else {
            return Ok(());
        };

        let seq = row.seq.map_or_else(|| "?".to_string(), |s| s.to_string());
        // A residue code outside the known table renders as '?', like a miss.
        let code = row.residue.filter(|&c| three_letter_code(c).is_some());
        let res_name = code.map_or("?", |c| three_letter_code(c).unwrap_or("?"));
        let res_seq = match code {
            Some(c) => format!("{c}{seq}"),
            None => format!("?{seq}"),
        };

        let fields = [
            record.symbol_species(),
            record.gene.clone(),
            row.uniprot.clone(),
            res_name.to_string(),
            res_seq,
            row.label.clone(),
        ];
        let cells: [&str; Column::COUNT] = [
            &fields[0], &fields[1], &fields[2], &fields[3], &fields[4], &fields[5],
        ];
        self.write_line(out, &cells, &row.highlights)
    }

    fn write_line(
        &mut self,
        out: &mut impl Write,
        cells: &[&str; Column::COUNT],
        highlights: &[bool; Column::COUNT],
    ) -> io::Result<()> {
        let Some(last_col) = self.last_col else {
            return Ok(());
        };
        for col in 0..Column::COUNT {
            if self.suppressed[col] {
                continue;
            }
            // Pad before coloring so escape codes do not skew the width.
            let cell = if col == last_col {
                cells[col].to_string()
            } else {
                format!("{:<width$}", cells[col], width = COLUMN_WIDTHS[col])
            };
            if highlights[col] && self.color {
                write!(out, "{}", cell.bright_red())?;
            } else {
                write!(out, "{cell}")?;
            }
            if col == last_col {
                writeln!(out)?;
            }
        }
        self.lines += 1;
        Ok(())
    }
}
