//! Report which keyboard modifier keys are currently held down.

pub mod error;
pub mod logging;
pub mod modifiers;
pub mod reader;

pub use error::ModifierError;
pub use modifiers::{format, Modifier, ModifierBitmask};
pub use reader::read_modifiers;

use std::io::Write;

/// Read the current modifier state once and write it as a single line.
pub fn run<W: Write>(out: &mut W) -> Result<(), ModifierError> {
    let bitmask = read_modifiers().inspect_err(|e| tracing::error!("{}", e))?;
    let line = format(bitmask);
    tracing::info!(modifiers = %line, "modifiers down");
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
