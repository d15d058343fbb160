use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const AFTER_HELP: &str = "\
Examples:
  gpcrn 5HT2A:123      Get BW numbering for protein 5HT2A at 123.
  gpcrn HTR2A:123      Get BW numbering for gene HTR2A at 123.
  gpcrn P28223:123     Get BW numbering for uniprot id P28223 at 123.
  gpcrn 6A93:123       Get BW numbering for pdb id 6A93 at 123.
  gpcrn :123           Get BW numberings for all GPCR proteins at 123.
  gpcrn 6A93:2.53      Get residue name in form Y139 for pdb 6A93 at BW 2.53.
  gpcrn HTR2A:         Get all BW numberings for gene HTR2A.
  gpcrn :2.53          Get residue sequence numbers for all GPCR at BW 2.53.
  gpcrn HTR2A:123 -sWB Get Wootten numberings for gene HTR2A at 123.
";

#[derive(Parser, Debug)]
#[command(
    name = "gpcrn",
    author = "Ryan Mo <ryan@imozo.cn>",
    version,
    about = "GPCR numbering tool - resolve receptor residues across standardized numbering schemes. \
             All data are derived from https://GPCRdb.org/structure/",
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP,
)]
pub struct Cli {
    /// Case-insensitive queries in the form <target>:<numbering>, where <target>
    /// is a uniprot id, gene name, protein symbol or pdb id, and <numbering> is
    /// either a residue sequence number or a residue numbering in the scheme
    /// selected with --scheme
    #[arg(value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Additional queries, appended to the positional list. Long-only: the
    /// short -q is taken by --quiet
    #[arg(long = "query", value_name = "QUERY")]
    pub query: Vec<String>,

    /// Read queries from a file, one per line ('#' starts a comment)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Case-insensitive keyword selecting a numbering scheme; see --list schemes
    #[arg(short, long, value_name = "KEYWORD", default_value = gpcrn::data::DEFAULT_SCHEME_KEYWORD)]
    pub scheme: String,

    /// Suppress column 1 (Protein Symbol)
    #[arg(short = '1')]
    pub no_col1: bool,

    /// Suppress column 2 (Gene Name)
    #[arg(short = '2')]
    pub no_col2: bool,

    /// Suppress column 3 (Uniprot Id)
    #[arg(short = '3')]
    pub no_col3: bool,

    /// Suppress column 4 (Residue Name)
    #[arg(short = '4')]
    pub no_col4: bool,

    /// Suppress column 5 (Residue Sequence)
    #[arg(short = '5')]
    pub no_col5: bool,

    /// Suppress column 6 (Residue Numbering)
    #[arg(short = '6')]
    pub no_col6: bool,

    /// Colorize highlighted fields in the output
    #[arg(long, value_name = "WHEN", value_enum, default_value = "auto")]
    pub color: ColorWhen,

    /// Do not display headers on the first line
    #[arg(short = 'H', long)]
    pub hide_headers: bool,

    /// Output unmatched numberings as well (labeled with a question mark ?)
    #[arg(short = 'u', long)]
    pub show_unmatched: bool,

    /// Ignore errors and move on to the next query
    #[arg(short = 'E', long)]
    pub ignore_errors: bool,

    /// Show one of the supported listings and exit
    #[arg(short = 'L', long, value_name = "TYPE", value_enum)]
    pub list: Option<Listing>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Positional and `--query` queries, as one list in argument order.
    pub fn query_args(&self) -> Vec<String> {
        let mut all = self.queries.clone();
        all.extend(self.query.iter().cloned());
        all
    }

    pub fn suppressed_columns(&self) -> [bool; 6] {
        [self.no_col1, self.no_col2, self.no_col3, self.no_col4, self.no_col5, self.no_col6]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    Schemes,
    Residues,
    Symbols,
    SymbolSpecies,
    Genes,
    Pdbids,
    Uniprots,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn queries_are_positional() {
        let cli = Cli::parse_from(["gpcrn", "P28223:123", ":2.53"]);
        assert_eq!(cli.queries, ["P28223:123", ":2.53"]);
        assert_eq!(cli.scheme, "BW");
    }

    #[test]
    fn query_flag_appends_to_positional_queries() {
        let cli = Cli::parse_from(["gpcrn", "P28223:123", "--query", ":2.53"]);
        assert_eq!(cli.query_args(), ["P28223:123", ":2.53"]);
    }

    #[test]
    fn scheme_flag_accepts_attached_value() {
        let cli = Cli::parse_from(["gpcrn", "HTR2A:123", "-sWB"]);
        assert_eq!(cli.scheme, "WB");
    }

    #[test]
    fn column_suppression_flags_collect_into_mask() {
        let cli = Cli::parse_from(["gpcrn", "-1", "-4", ":123"]);
        assert_eq!(
            cli.suppressed_columns(),
            [true, false, false, true, false, false]
        );
    }

    #[test]
    fn output_switches_parse() {
        let cli = Cli::parse_from(["gpcrn", "-H", "-u", "-E", ":123"]);
        assert!(cli.hide_headers);
        assert!(cli.show_unmatched);
        assert!(cli.ignore_errors);
    }

    #[test]
    fn list_flag_takes_a_listing_kind() {
        let cli = Cli::parse_from(["gpcrn", "--list", "symbol-species"]);
        assert_eq!(cli.list, Some(Listing::SymbolSpecies));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gpcrn", "-q", "-v", ":123"]).is_err());
    }
}
