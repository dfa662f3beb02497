use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::SimError;
use crate::scatter::Scatter;

/// Writes several series side-by-side to a single CSV file: one `X, Y,,`
/// column pair per series, one row per sample index up to the longest
/// series. Shorter series leave their trailing cells empty but the comma
/// separators are still written, so every row has the same column count.
///
/// A series without an axis name falls back to `X_i` / `Y_i` (1-indexed
/// by position in `series`).
pub fn write_series<P: AsRef<Path>>(path: P, series: &[&Scatter]) -> Result<(), SimError> {
    let file = File::create(path.as_ref())
        .map_err(|e| SimError::Io(format!("failed to create {}: {}", path.as_ref().display(), e)))?;
    let mut w = BufWriter::new(file);

    let mut header = String::new();
    for (i, s) in series.iter().enumerate() {
        let x_name = s.x_name().map(str::to_string).unwrap_or_else(|| format!("X_{}", i));
        let y_name = s.y_name().map(str::to_string).unwrap_or_else(|| format!("Y_{}", i));
        header.push_str(&format!("{},{},,", x_name, y_name));
    }
    writeln!(w, "{}", header)
        .map_err(|e| SimError::Io(format!("failed to write header: {}", e)))?;

    let max_len = series.iter().map(|s| s.len()).max().unwrap_or(0);
    for row in 0..max_len {
        let mut line = String::new();
        for s in series {
            if row < s.len() {
                line.push_str(&format!("{},{},,", s.x_at(row), s.y_at(row)));
            } else {
                line.push_str(",,,");
            }
        }
        writeln!(w, "{}", line)
            .map_err(|e| SimError::Io(format!("failed to write row {}: {}", row, e)))?;
    }

    w.flush().map_err(|e| SimError::Io(format!("failed to flush: {}", e)))?;
    info!(
        "wrote {} series ({} rows) to {}",
        series.len(),
        max_len,
        path.as_ref().display()
    );
    Ok(())
}
