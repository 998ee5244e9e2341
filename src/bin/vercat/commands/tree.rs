//! `vercat tree` command

use anyhow::Result;

use vercat::ops::tree::{render_catalog, render_section};

use super::Context;
use crate::cli::TreeArgs;

pub fn execute(ctx: &Context, args: TreeArgs) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let lines = match args.kind {
        Some(kind) => render_section(&catalog, kind.into())?,
        None => render_catalog(&catalog)?,
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
