//! The `skatequiz menu` command.

use anyhow::Result;

use crate::render::routes_table;

pub fn execute() -> Result<()> {
    println!("{}", routes_table());
    println!("\nStart a quiz with `skatequiz recall` or `skatequiz penalties`.");
    Ok(())
}
