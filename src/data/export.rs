use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::ExportError;
use super::model::AirportTable;

/// Write `table` to `path`. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – one row per airport, header included
/// * `.json` – `[{ "name": ..., "type": ..., ... }, ...]`
pub fn export_file(table: &AirportTable, path: &Path) -> Result<(), ExportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let writer = || File::create(path).map(BufWriter::new);
    match ext.as_str() {
        "csv" => write_csv(table, writer()?),
        "json" => write_json(table, writer()?),
        other => Err(ExportError::UnsupportedExtension(other.to_string())),
    }
}

pub fn write_csv<W: Write>(table: &AirportTable, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for airport in table {
        csv_writer.serialize(airport)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(table: &AirportTable, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, table.rows())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_file;
    use crate::data::model::tests::airport;

    fn table() -> AirportTable {
        AirportTable::new(vec![
            airport("Lebanon Muni", "small_airport", "NH", Some(603.0)),
            airport("Rooftop", "heliport", "MA", None),
        ])
    }

    #[test]
    fn csv_export_can_be_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered.csv");
        export_file(&table(), &path).unwrap();

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded, table());
    }

    #[test]
    fn json_export_uses_source_column_names() {
        let mut buf = Vec::new();
        write_json(&table(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["type"], "small_airport");
        assert_eq!(rows[0]["elevation_ft"], 603.0);
        assert!(rows[1]["elevation_ft"].is_null());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_file(&table(), &dir.path().join("out.xlsx")).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedExtension(ref e) if e == "xlsx"));
    }
}
