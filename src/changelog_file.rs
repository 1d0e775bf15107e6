use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Write `entry` at the top of the changelog at `path`, creating it if needed.
pub fn prepend(path: &Path, entry: &str) -> Result<()> {
    let previous = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    fs::write(path, format!("{}{}", entry, previous))?;
    Ok(())
}
