//! `vercat list` command

use anyhow::Result;

use vercat::ops::list::entries;

use super::Context;
use crate::cli::ListArgs;

pub fn execute(ctx: &Context, args: ListArgs) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let rows = entries(&catalog, args.kind.map(Into::into));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No entries in catalog `{}`", catalog.name());
        return Ok(());
    }

    let width = rows.iter().map(|r| r.alias.len()).max().unwrap_or(0);
    for row in &rows {
        let version_ref = row
            .version_ref
            .as_ref()
            .map(|r| format!(" (ref: {})", r))
            .unwrap_or_default();
        println!(
            "{:<8} {:<width$}  {}{}",
            row.section.to_string(),
            row.alias,
            row.value,
            version_ref,
            width = width
        );
    }

    Ok(())
}
