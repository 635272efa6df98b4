use super::model::{HospitalDataset, HospitalRecord, RawRow, RawTable};

/// Parse a coordinate cell. Anything that is not a finite number is missing.
pub fn coerce_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Drop rows without usable coordinates and index what is left.
///
/// Surviving rows keep their input order. Cleaning an already-clean table
/// yields the same records.
pub fn clean(table: RawTable) -> HospitalDataset {
    let total = table.rows.len();
    let records: Vec<HospitalRecord> = table.rows.into_iter().filter_map(to_record).collect();

    let dropped = total - records.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} of {total} rows with invalid coordinates");
    }

    HospitalDataset::new(table.headers, records)
}

fn to_record(row: RawRow) -> Option<HospitalRecord> {
    let RawRow { fields, cells } = row;
    let latitude = coerce_coordinate(&fields.latitude)?;
    let longitude = coerce_coordinate(&fields.longitude)?;
    Some(HospitalRecord {
        name: fields.name,
        services: fields.services,
        insurance: fields.insurance,
        hospital_type: fields.hospital_type,
        ownership: fields.ownership,
        state: fields.state,
        latitude,
        longitude,
        cells,
    })
}
