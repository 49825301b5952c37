//! Filesystem access with failures mapped onto the CLI error model.
//!
//! Both rewrite engines funnel reads and writes through here so every IO
//! failure carries the same `internal.io_error` shape, with the
//! root-relative file named in the details.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a source file. Failures are labelled `read <file>`.
pub fn read_file(path: &Path, file: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", file))))
}

/// Replace a source file's contents in place. Failures are labelled
/// `write <file>`.
pub fn write_file(path: &Path, content: &str, file: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("write {}", file))))
}
