use std::path::PathBuf;

use eframe::egui;

use crate::data::model::HospitalDataset;
use crate::state::AppState;
use crate::ui::{map, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HospitalFinderApp {
    pub state: AppState,
}

impl HospitalFinderApp {
    pub fn new(dataset: HospitalDataset, source: PathBuf) -> Self {
        Self {
            state: AppState::new(dataset, source),
        }
    }
}

impl eframe::App for HospitalFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters + location ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: filtered hospitals ----
        egui::TopBottomPanel::bottom("results_panel")
            .default_height(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::results_table(ui, &self.state);
            });

        // ---- Central panel: map ----
        let recenter = self.state.take_recenter();
        egui::CentralPanel::default().show(ctx, |ui| {
            map::hospital_map(ui, &self.state, recenter);
        });
    }
}
