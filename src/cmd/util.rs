//! Utility commands (version, completion).

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Print the version, plus build metadata from `build.rs` when `detailed`
pub fn cmd_version(detailed: bool) -> Result<()> {
    print!("{}", version_text(detailed));
    Ok(())
}

fn version_text(detailed: bool) -> String {
    let mut lines = vec![format!("parcel-sort {}", env!("CARGO_PKG_VERSION"))];
    if detailed {
        lines.push(format!("commit: {}", env!("GIT_SHA")));
        lines.push(format!("built: {}", env!("BUILD_DATE")));
    }
    lines.join("\n") + "\n"
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "parcel-sort", &mut io::stdout());
    Ok(())
}
