//! Export the estimate grid as `x, y` lines.
//!
//! No header: the file is meant to be fed straight into a plotting tool.
//! `x` is written with 4 decimals and `y` with 8, separated by a comma and a
//! space so existing plot scripts read it unchanged.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Sample;
use crate::error::AppError;

/// Write estimates to a file, truncating it.
pub fn write_estimates_csv<I>(path: &Path, estimates: I) -> Result<usize, AppError>
where
    I: IntoIterator<Item = Sample>,
{
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create estimate file '{}': {e}", path.display())))?;
    write_estimates(file, estimates)
}

/// Write estimates to any writer. Returns the number of rows written.
pub fn write_estimates<W, I>(writer: W, estimates: I) -> Result<usize, AppError>
where
    W: Write,
    I: IntoIterator<Item = Sample>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    let mut rows = 0usize;
    for s in estimates {
        wtr.write_record([format!("{:.4}", s.x), format!(" {:.8}", s.y)])
            .map_err(|e| AppError::new(2, format!("Failed to write estimate row: {e}")))?;
        rows += 1;
    }

    wtr.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush estimates: {e}")))?;
    Ok(rows)
}
