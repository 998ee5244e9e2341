//! `vercat check` command

use anyhow::{bail, Result};

use vercat::ops::check::{check_catalogs, CheckOutcome};
use vercat::util::diagnostic::{self, suggestions, Diagnostic};

use super::Context;
use crate::cli::CheckArgs;

pub fn execute(ctx: &Context, args: CheckArgs) -> Result<()> {
    let files = ctx.catalog_files()?;
    if files.is_empty() {
        bail!("no catalogs to check\nhelp: {}", suggestions::NO_CATALOG);
    }

    let reports = check_catalogs(&files);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            match &report.outcome {
                CheckOutcome::Valid(summary) => {
                    println!(
                        "ok  {} ({}): {} versions, {} libraries, {} bundles, {} plugins [{}]",
                        report.name,
                        report.path.display(),
                        summary.versions,
                        summary.libraries,
                        summary.bundles,
                        summary.plugins,
                        summary.short_fingerprint()
                    );
                    if summary.is_empty() {
                        diagnostic::emit(
                            &Diagnostic::warning(format!("catalog `{}` declares no entries", report.name))
                                .with_location(&report.path),
                            ctx.color(),
                        );
                    }
                }
                CheckOutcome::Invalid { error } => diagnostic::emit(
                    &Diagnostic::error(format!("catalog `{}` is invalid", report.name))
                        .with_location(&report.path)
                        .with_context(error.clone()),
                    ctx.color(),
                ),
            }
        }
    }

    let failed = reports.iter().filter(|r| !r.is_valid()).count();
    if failed > 0 {
        bail!(
            "{} of {} catalog(s) failed validation\nhelp: {}",
            failed,
            reports.len(),
            suggestions::CHECK_FAILED
        );
    }

    Ok(())
}
