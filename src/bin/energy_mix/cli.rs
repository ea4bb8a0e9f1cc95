use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Timestamp;

#[derive(Parser, Debug)]
#[command(name = "energy-mix")]
#[command(about = "Render hourly electricity production as a grid of glyphs", long_about = None)]
pub struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apportion a production snapshot and print it as a glyph grid.
    ///
    /// The snapshot is a JSON object of source id to megawatts; its key order
    /// is the order glyphs appear in.
    ///
    /// Example:
    ///   energy-mix tweet snapshot.json --group --sort
    Tweet(TweetArgs),

    /// Print the ENTSO-E request URL for the hour preceding now.
    Query(QueryArgs),
}

#[derive(Parser, Debug)]
pub struct TweetArgs {
    /// Snapshot file, or `-` to read standard input.
    #[arg(default_value = "-")]
    pub snapshot: PathBuf,

    /// Use plain rounding instead of largest remainder. Totals may miss 100.
    #[arg(long)]
    pub naive: bool,

    /// Glyphs per line.
    #[arg(long)]
    pub line_width: Option<usize>,

    /// Merge source subtypes (e.g. `uhli_hnede`, `uhli_cerne`) into buckets.
    #[arg(long)]
    pub group: bool,

    /// Order sources by output, largest first.
    #[arg(long)]
    pub sort: bool,
}

#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Security token, overriding the configured one.
    #[arg(long)]
    pub token: Option<String>,

    /// End of the requested hour (RFC 3339). Defaults to the current time.
    #[arg(long)]
    pub now: Option<Timestamp>,

    /// Print one `name=value` parameter per line instead of a URL.
    #[arg(long)]
    pub params: bool,
}
