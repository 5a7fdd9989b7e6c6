//! Turns training reports into the text shown to the user.

use std::io::{self, Write};

use crate::{debugger::Warning, training::EpochReport};

pub const START_BANNER: &str = "Starting Self-Debugging Machine Learning Model";
pub const END_BANNER: &str = "Training completed.";

pub fn start<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{START_BANNER}")?;
    writeln!(out)
}

pub fn finish<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{END_BANNER}")
}

/// Formats `Epoch <n> | Weight: <w> | Loss: <loss>`, both values with 4 decimals.
pub fn status_line(report: &EpochReport) -> String {
    format!(
        "Epoch {} | Weight: {:.4} | Loss: {:.4}",
        report.epoch, report.weight, report.loss
    )
}

pub fn warning<W: Write>(out: &mut W, warning: &Warning) -> io::Result<()> {
    writeln!(out, "⚠ Warning: {}", warning.summary())?;
    writeln!(out, "  Possible cause: {}", warning.cause())?;
    if let Some(action) = warning.action() {
        writeln!(out, "  Suggested action: {action}")?;
    }

    Ok(())
}

/// Writes the status line, the warnings and the trailing blank line of one epoch.
pub fn epoch<W: Write>(out: &mut W, report: &EpochReport) -> io::Result<()> {
    writeln!(out, "{}", status_line(report))?;
    for w in &report.warnings {
        warning(out, w)?;
    }
    writeln!(out)
}
