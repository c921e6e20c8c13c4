//! CLI command definitions

use crate::domain::Engine;
use crate::infrastructure::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "twoslashify")]
#[command(
    about = "Rewrite example code block language tags to enable twoslash annotations",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Document to rewrite in place (e.g., pages/docs/api/js.mdx)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// TOML file with marker, from_lang, to_lang and engine settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Text that opens an example section (default: **Example:**)
    #[arg(long)]
    pub marker: Option<String>,

    /// Language tag to rewrite (default: typescript)
    #[arg(long, value_name = "TAG")]
    pub from_lang: Option<String>,

    /// Replacement language tag (default: "ts twoslash")
    #[arg(long, value_name = "TAG")]
    pub to_lang: Option<String>,

    /// Matching engine (pattern, markdown)
    #[arg(short, long)]
    pub engine: Option<Engine>,

    /// Report what would change without writing the file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings given on the command line, as a config layer
    pub fn overrides(&self) -> Config {
        Config {
            marker: self.marker.clone(),
            from_lang: self.from_lang.clone(),
            to_lang: self.to_lang.clone(),
            engine: self.engine,
        }
    }
}
