//! Console lines describing each file's outcome

use std::io::{self, Write};
use std::path::Path;

use crate::compression::FileOutcome;

/// Write the console lines for one file.
///
/// A compressed file gets a success line followed by the validation verdict;
/// a file that failed to decode or process gets a single error line.
pub fn write_outcome<W: Write>(out: &mut W, path: &Path, outcome: &FileOutcome) -> io::Result<()> {
    let path = path.display();

    match outcome {
        FileOutcome::Compressed { validation } => {
            writeln!(out, "Successfully compressed: {}", path)?;
            match validation {
                Some(result) if result.is_valid() => writeln!(out, "{} is valid.", path)?,
                Some(result) => writeln!(
                    out,
                    "❌ {} is invalid: {}",
                    path,
                    result.error_message().unwrap_or_default()
                )?,
                None => {}
            }
        }
        FileOutcome::DecodeFailed(e) => writeln!(out, "Error decoding JSON in {}: {}", path, e)?,
        FileOutcome::Failed(e) => writeln!(out, "Error processing {}: {}", path, e)?,
    }

    Ok(())
}
