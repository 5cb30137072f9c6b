//! `shareclean completions` – shell completion script on stdout.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

pub fn run_completions<C: CommandFactory>(shell: Shell) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "shareclean", &mut io::stdout());
    Ok(())
}
