use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{columns, HospitalRecord};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// List every visible hospital with all source columns.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    ui.strong("Filtered Hospitals:");

    let dataset = &state.dataset;
    let lat_col = dataset.column_index(columns::LATITUDE);
    let lon_col = dataset.column_index(columns::LONGITUDE);

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(true)
            .columns(
                Column::auto().at_least(60.0).clip(true),
                dataset.headers.len(),
            )
            .header(ROW_HEIGHT + 2.0, |mut header| {
                for name in &dataset.headers {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name.as_str());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                    let record = &dataset.records[state.visible_indices[row.index()]];
                    for col in 0..dataset.headers.len() {
                        let text = cell_text(record, col, lat_col, lon_col);
                        row.col(|ui: &mut Ui| {
                            ui.label(text);
                        });
                    }
                });
            });
    });
}

/// Coordinates show their cleaned numeric value; other cells are verbatim.
fn cell_text(
    record: &HospitalRecord,
    col: usize,
    lat_col: Option<usize>,
    lon_col: Option<usize>,
) -> String {
    if Some(col) == lat_col {
        format!("{:.6}", record.latitude)
    } else if Some(col) == lon_col {
        format!("{:.6}", record.longitude)
    } else {
        record.cells.get(col).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::HospitalDataset;

    fn dataset() -> HospitalDataset {
        let headers: Vec<String> = ["Hospital Name", "Latitude", "Longitude", "State"]
            .map(String::from)
            .to_vec();
        let record = HospitalRecord {
            name: "Mercy".into(),
            services: String::new(),
            insurance: String::new(),
            hospital_type: None,
            ownership: None,
            state: "NY".into(),
            latitude: 40.71,
            longitude: -74.0,
            cells: ["Mercy", " 40.71 ", "-74", "NY"].map(String::from).to_vec(),
        };
        HospitalDataset::new(headers, vec![record])
    }

    #[test]
    fn coordinates_render_cleaned_values() {
        let ds = dataset();
        let lat = ds.column_index(columns::LATITUDE);
        let lon = ds.column_index(columns::LONGITUDE);
        let r = &ds.records[0];
        assert_eq!(cell_text(r, 0, lat, lon), "Mercy");
        assert_eq!(cell_text(r, 1, lat, lon), "40.710000");
        assert_eq!(cell_text(r, 2, lat, lon), "-74.000000");
        assert_eq!(cell_text(r, 3, lat, lon), "NY");
        assert_eq!(cell_text(r, 9, lat, lon), "");
    }
}
