use anyhow::Context;
use colored::*;

use faultline_core::resolver;

use crate::commands::ResolveArgs;
use crate::terminal::print;

/// Resolves the target group and prints it, without running an experiment.
///
/// Handy for sanity-checking an outputs file before pointing a real run at it.
pub fn resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let source = args.target.to_source()?;
    let target = resolver::resolve(&source).context("target resolution failed")?;

    print::aligned_line("target", target.bold().green());
    Ok(())
}
