use crate::error::ExportError;
use crate::model::MetricsResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the material breakdown, one row per material.
pub fn export_csv<P: AsRef<Path>>(metrics: &MetricsResult, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_breakdown(metrics, file)
}

pub fn write_breakdown<W: Write>(metrics: &MetricsResult, out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record([
        "Material",
        "Elements",
        "Surface (m²)",
        "Volume (m³)",
        "Mass (kg)",
    ])?;

    for entry in &metrics.material_breakdown {
        writer.write_record([
            entry.material.clone(),
            entry.count.to_string(),
            format!("{:.2}", entry.surface),
            format!("{:.2}", entry.volume),
            format!("{:.2}", entry.mass),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
