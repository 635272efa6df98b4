use eframe::egui::{Pos2, RichText, Ui};
use egui_plot::{Legend, Plot, PlotBounds, PlotPoint, PlotPoints, Points};

use crate::config::{HOSPITAL_MARKER, HOVER_RADIUS, USER_MARKER, VIEW};
use crate::data::model::HospitalRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Hospital map (central panel)
// ---------------------------------------------------------------------------

/// Render the title, the user marker and one marker per visible hospital.
///
/// The view jumps to the user location when `recenter` is set; otherwise
/// the plot keeps whatever pan/zoom the user applied.
pub fn hospital_map(ui: &mut Ui, state: &AppState, recenter: bool) {
    ui.heading("Find Hospitals Near Your Location");
    ui.label(
        RichText::new(format!(
            "Showing {} of {} hospitals · your location {}",
            state.visible_indices.len(),
            state.dataset.len(),
            state.location
        ))
        .weak(),
    );

    let location = state.location;
    let dataset = &state.dataset;
    if dataset.is_empty() {
        ui.label("No hospitals with valid coordinates in this file.");
    }

    let response = Plot::new("hospital_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(VIEW.data_aspect(location.latitude) as f32)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|_name, value| format!("lat {:.4}\nlon {:.4}", value.y, value.x))
        .show(ui, |plot_ui| -> Option<usize> {
            if recenter {
                let (min, max) = VIEW.bounds(location);
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
            }

            let hospitals: PlotPoints = state
                .visible_indices
                .iter()
                .map(|&i| {
                    let r = &dataset.records[i];
                    [r.longitude, r.latitude]
                })
                .collect();
            plot_ui.points(
                Points::new(hospitals)
                    .name("Hospitals")
                    .radius(HOSPITAL_MARKER.radius)
                    .color(HOSPITAL_MARKER.color),
            );

            plot_ui.points(
                Points::new(PlotPoints::new(vec![[location.longitude, location.latitude]]))
                    .name("Your location")
                    .radius(USER_MARKER.radius)
                    .color(USER_MARKER.color),
            );

            // Hit-test hospital markers against the pointer in screen space.
            let pointer = plot_ui.screen_from_plot(plot_ui.pointer_coordinate()?);
            let markers = state.visible_indices.iter().map(|&i| {
                let r = &dataset.records[i];
                (i, plot_ui.screen_from_plot(PlotPoint::new(r.longitude, r.latitude)))
            });
            nearest_marker(markers, pointer, HOVER_RADIUS)
        });

    if let Some(idx) = response.inner {
        let record = &dataset.records[idx];
        response
            .response
            .on_hover_ui_at_pointer(|ui: &mut Ui| hospital_tooltip(ui, record));
    }
}

fn hospital_tooltip(ui: &mut Ui, record: &HospitalRecord) {
    ui.label(RichText::new(&record.name).strong());
    ui.label(format!("Services: {}", record.services));
    ui.label(format!("Insurers: {}", record.insurance));
}

/// Pick the marker closest to `pointer`, if any lies within `max_distance`.
pub fn nearest_marker(
    markers: impl IntoIterator<Item = (usize, Pos2)>,
    pointer: Pos2,
    max_distance: f32,
) -> Option<usize> {
    markers
        .into_iter()
        .map(|(idx, pos)| (idx, pos.distance_sq(pointer)))
        .filter(|&(_, d2)| d2 <= max_distance * max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(idx, _)| idx)
}
