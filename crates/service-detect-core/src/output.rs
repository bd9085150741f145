//! Persisting the detection result.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::classifier::Label;
use crate::error::{DetectError, Result};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Write the label tag as the whole content of `path`, replacing any
/// existing file. No trailing newline.
pub fn write_label(path: &Path, label: Label) -> Result<()> {
    fs::write(path, label.as_str()).map_err(|source| DetectError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), %label, "label written");
    Ok(())
}
