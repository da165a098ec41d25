use anyhow::{Error, Result};
use log::warn;
use provider::{Diagnostics, Severity};

/// Prints every diagnostic to stderr and fails if any of them is an error.
pub(crate) fn fail_on_error(diagnostics: &Diagnostics) -> Result<()> {
    for diagnostic in diagnostics {
        match diagnostic.severity {
            Severity::Error => eprintln!("{}", diagnostic),
            Severity::Warning => warn!("{}", diagnostic),
        }
    }
    if diagnostics.has_error() {
        return Err(Error::msg(format!(
            "{} error diagnostic(s)",
            diagnostics
                .iter()
                .filter(|diagnostic| diagnostic.severity == Severity::Error)
                .count()
        )));
    }
    Ok(())
}
