//! Implementation of `dailycode catalog`.

use super::stdout_error;
use crate::cli::CatalogArgs;
use crate::error::{DailyCodeError, Result};
use crate::generator::CATALOG;
use std::io::{self, Write};

pub fn cmd_catalog(args: CatalogArgs) -> Result<()> {
    write_catalog(&mut io::stdout().lock(), args.json)
}

/// Write the catalog as an aligned table or, with `json`, as a JSON array.
pub fn write_catalog<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &CATALOG).map_err(|e| {
            DailyCodeError::Io(format!("failed to serialize catalog: {}", e))
        })?;
        writeln!(out).map_err(stdout_error)?;
        return Ok(());
    }

    let width = CATALOG.iter().map(|t| t.id.len()).max().unwrap_or(0);
    for template in &CATALOG {
        writeln!(out, "{:width$}  {}", template.id, template.description, width = width)
            .map_err(stdout_error)?;
    }
    Ok(())
}
