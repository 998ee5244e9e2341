//! `vercat get` command

use anyhow::Result;

use super::Context;
use crate::cli::{GetArgs, Kind};

pub fn execute(ctx: &Context, args: GetArgs) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    match args.kind {
        Kind::Library => {
            let library = if args.plugins_block {
                catalog.plugins_block().libraries().resolve(&args.key)?
            } else {
                catalog.libraries().resolve(&args.key)?
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(library)?);
            } else {
                println!("{}", library.coordinates());
            }
        }

        Kind::Version => {
            let version = if args.plugins_block {
                catalog.plugins_block().versions().resolve(&args.key)?
            } else {
                catalog.versions().resolve(&args.key)?
            };
            if args.json {
                let rich = catalog.lookup_rich_version(&args.key)?;
                println!("{}", serde_json::to_string_pretty(rich)?);
            } else if version.is_empty() {
                // Not expressible as one string; show the whole constraint.
                println!("{}", catalog.lookup_rich_version(&args.key)?);
            } else {
                println!("{}", version);
            }
        }

        Kind::Bundle => {
            let members = if args.plugins_block {
                catalog.plugins_block().bundles().resolve(&args.key)?
            } else {
                catalog.bundles().resolve(&args.key)?
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&members)?);
            } else {
                for library in members {
                    println!("{}", library.coordinates());
                }
            }
        }

        Kind::Plugin => {
            let plugin = if args.plugins_block {
                catalog.plugins_block().plugins().resolve(&args.key)?
            } else {
                catalog.plugins().resolve(&args.key)?
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(plugin)?);
            } else {
                println!("{}", plugin.notation());
            }
        }
    }

    Ok(())
}
