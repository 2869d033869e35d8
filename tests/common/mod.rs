use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes an `action,value` script to a temp file that lives as long as the handle.
pub fn write_actions(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::Writer::from_writer(file.as_file_mut());
        wtr.write_record(["action", "value"])?;
        for (action, value) in rows {
            wtr.write_record([*action, *value])?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}
