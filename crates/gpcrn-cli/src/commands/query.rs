use crate::cli::Cli;
use crate::error::Result;
use crate::input::gather_queries;
use crate::output::TableWriter;
use gpcrn::data::{NumberingScheme, ReferenceStore};
use gpcrn::query::QueryEngine;
use std::io::Write;
use tracing::{debug, info};

/// Processes every query of the run, sequentially, against one table writer
/// so the header appears at most once.
pub fn run(
    cli: &Cli,
    store: &ReferenceStore,
    scheme: &'static NumberingScheme,
    out: &mut impl Write,
) -> Result<()> {
    let queries = gather_queries(&cli.query_args(), cli.file.as_deref())?;
    info!(count = queries.len(), scheme = scheme.abbreviation(), "processing queries");

    let engine = QueryEngine::new(store, scheme, cli.show_unmatched);
    let mut writer = TableWriter::new(
        store,
        scheme,
        cli.suppressed_columns(),
        cli.hide_headers,
        crate::color_enabled(cli),
    );

    for query in &queries {
        match engine.run(query) {
            Ok(rows) => {
                debug!(query, rows = rows.len(), "query done");
                writer.write_rows(out, &rows)?;
            }
            // With --ignore-errors a bad query is reported and the run goes on.
            Err(e) if cli.ignore_errors => eprintln!("ERROR: {e}"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
