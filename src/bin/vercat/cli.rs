//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use vercat::Section;

/// vercat - typed accessors over dependency version catalogs
#[derive(Parser)]
#[command(name = "vercat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog file to read instead of discovering one
    #[arg(long, global = true, env = "VERCAT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Name of the discovered catalog to use (default: `libs`)
    #[arg(long, global = true)]
    pub name: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one catalog entry
    Get(GetArgs),

    /// List catalog entries
    List(ListArgs),

    /// Show the accessor tree
    Tree(TreeArgs),

    /// Validate every discovered catalog
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Entry kind selector on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    #[value(alias = "lib", alias = "libraries")]
    Library,
    #[value(alias = "versions")]
    Version,
    #[value(alias = "bundles")]
    Bundle,
    #[value(alias = "plugins")]
    Plugin,
}

impl From<Kind> for Section {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Library => Section::Library,
            Kind::Version => Section::Version,
            Kind::Bundle => Section::Bundle,
            Kind::Plugin => Section::Plugin,
        }
    }
}

#[derive(Args)]
pub struct GetArgs {
    /// Entry kind
    #[arg(value_enum)]
    pub kind: Kind,

    /// Dotted key, e.g. spring.boot.starter.web
    pub key: String,

    /// Read the entry as from a plugins block (libraries and bundles warn)
    #[arg(long)]
    pub plugins_block: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only list entries of this kind
    #[arg(long, value_enum)]
    pub kind: Option<Kind>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TreeArgs {
    /// Only show the tree of this kind
    #[arg(long, value_enum)]
    pub kind: Option<Kind>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
