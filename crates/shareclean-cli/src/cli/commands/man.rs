//! `shareclean man` – roff man page on stdout.

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;

pub fn run_man<C: CommandFactory>() -> Result<()> {
    let man = Man::new(C::command());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    io::stdout().write_all(&buffer)?;
    Ok(())
}
