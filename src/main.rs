//! ini-merge: Merge INI configuration files
//!
//! The first file is both read and overwritten with the merged result of
//! itself and every following file.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
