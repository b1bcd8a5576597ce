//! OS command implementation.

use anyhow::Result;
use datapoint_lib::prelude::*;

/// Print the host operating system family.
pub(crate) fn show_os() -> Result<()> {
    println!("{}", identify_os());
    Ok(())
}
