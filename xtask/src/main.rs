//! Development tasks for the webmem workspace.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Development tasks")]
enum Xtask {
    /// Generate man pages from the CLI definitions
    Man {
        /// Output directory for the generated pages
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse() {
        Xtask::Man { out_dir } => {
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("Failed to create {}", out_dir.display()))?;
            let cmd = webmem::cli::Cli::command();
            clap_mangen::generate_to(cmd, &out_dir).context("Failed to generate man pages")?;
            println!("Generated man pages in {}", out_dir.display());
        }
    }
    Ok(())
}
