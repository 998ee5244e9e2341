//! vercat CLI - typed accessors over dependency version catalogs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::Context;
use vercat::util::diagnostic;
use vercat::CatalogError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = match Context::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, &ctx) {
        match e.downcast_ref::<CatalogError>() {
            Some(err) => diagnostic::emit(&err.to_diagnostic(), ctx.color()),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vercat=debug")
    } else {
        EnvFilter::new("vercat=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, ctx: &Context) -> Result<()> {
    match cli.command {
        Commands::Get(args) => commands::get::execute(ctx, args),
        Commands::List(args) => commands::list::execute(ctx, args),
        Commands::Tree(args) => commands::tree::execute(ctx, args),
        Commands::Check(args) => commands::check::execute(ctx, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
