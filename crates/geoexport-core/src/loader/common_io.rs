// crates/geoexport-core/src/loader/common_io.rs
use crate::error::{ExportError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Open `path` for reading; a `.gz` suffix is decompressed transparently.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| ExportError::io(path, e))?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(ExportError::InvalidData(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

pub fn read_to_string(path: &Path) -> Result<String> {
    let mut out = String::new();
    open_stream(path)?
        .read_to_string(&mut out)
        .map_err(|e| ExportError::io(path, e))?;
    Ok(out)
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
