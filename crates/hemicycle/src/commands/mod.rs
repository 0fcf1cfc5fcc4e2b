pub mod cache;
pub mod debates;
pub mod tables;
pub mod version;

use serde::Serialize;
use std::io::Write;

/// Pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
