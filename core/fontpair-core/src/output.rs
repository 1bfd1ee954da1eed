//! Streaming output helpers (made by FontLab https://www.fontlab.com/)

use std::io::{self, Write};

use serde::Serialize;

/// Write items as a prettified JSON array followed by a newline.
pub fn write_json_pretty<T: Serialize>(items: &[T], mut w: impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write items as newline-delimited JSON (NDJSON).
pub fn write_ndjson<T: Serialize>(items: &[T], mut w: impl Write) -> io::Result<()> {
    for item in items {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
