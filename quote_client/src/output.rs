//! Writing the fetched quote to the output file.
use std::fs;
use std::path::Path;

use quote_common::{Quote, Result};

/// Label written in front of the quote.
const LABEL: &str = "Dólar";

/// Human-readable line for `quote`, e.g. `Dólar: 5.43`.
pub fn format_quote(quote: &Quote) -> String {
    format!("{}: {}", LABEL, quote)
}

/// Overwrite `path` with the formatted quote in a single write.
pub fn write_quote(path: &Path, quote: &Quote) -> Result<()> {
    fs::write(path, format_quote(quote))?;
    Ok(())
}
