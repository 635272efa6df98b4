use eframe::egui::{self, DragValue, RichText, ScrollArea, Ui};

use crate::data::filter::Selection;
use crate::data::model::Selector;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for selector in Selector::ALL {
                selector_combo(ui, state, selector);
                ui.add_space(6.0);
            }

            ui.separator();
            location_inputs(ui, state);

            ui.add_space(8.0);
            if ui.button("Reset Filters").clicked() {
                state.reset();
                ui.ctx().request_repaint();
            }
        });

    // Every interaction recomputes from the cleaned dataset.
    state.refilter();
}

/// One dropdown: "All" followed by the selector's options. Disabled when
/// the dataset has no column for it.
fn selector_combo(ui: &mut Ui, state: &mut AppState, selector: Selector) {
    let available = state.dataset.has_column_for(selector);
    let current = state.filters.get(selector).clone();

    ui.label(selector.label());
    let mut picked: Option<Selection> = None;
    ui.add_enabled_ui(available, |ui: &mut Ui| {
        egui::ComboBox::from_id_salt(selector.column())
            .selected_text(current.to_string())
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                if ui.selectable_label(current.is_all(), "All").clicked() {
                    picked = Some(Selection::All);
                }
                for value in state.dataset.options_for(selector) {
                    let is_selected = matches!(&current, Selection::Only(v) if v == value);
                    if ui.selectable_label(is_selected, value.as_str()).clicked() {
                        picked = Some(Selection::Only(value.clone()));
                    }
                }
            });
    });

    if let Some(selection) = picked {
        if selection != current {
            log::debug!("{selector} filter set to {selection}");
            state.select(selector, selection);
        }
    }
}

fn location_inputs(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Your Location");
    let mut location = state.location;

    let mut changed = false;
    egui::Grid::new("location_grid")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Enter your latitude:");
            changed |= ui
                .add(
                    DragValue::new(&mut location.latitude)
                        .speed(0.001)
                        .fixed_decimals(6)
                        .range(-90.0..=90.0),
                )
                .changed();
            ui.end_row();

            ui.label("Enter your longitude:");
            changed |= ui
                .add(
                    DragValue::new(&mut location.longitude)
                        .speed(0.001)
                        .fixed_decimals(6)
                        .range(-180.0..=180.0),
                )
                .changed();
            ui.end_row();
        });

    if changed {
        state.set_location(location);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let file_name = state
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.label(format!(
            "{file_name}: {} hospitals loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));
        if !state.filters.is_unconstrained() {
            ui.separator();
            ui.label(RichText::new("filters active").italics());
        }
    });
}
