//! Filter Panel Widget
//! Left side panel with the dataset picker and all filter controls.

use crate::data::{FilterCriteria, RatingBounds, CERTIFICATE_ALL};
use egui::{Color32, ComboBox, RichText, ScrollArea};
use std::path::PathBuf;
use tracing::warn;

/// User-editable filter settings
#[derive(Clone)]
pub struct FilterSettings {
    pub csv_path: Option<PathBuf>,
    pub certificate: String,
    pub min_rating_text: String,
    pub max_rating_text: String,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            csv_path: None,
            certificate: CERTIFICATE_ALL.to_string(),
            min_rating_text: "0".to_string(),
            max_rating_text: "10".to_string(),
        }
    }
}

/// Left side panel with file selection and filter controls.
pub struct FilterPanel {
    pub settings: FilterSettings,
    pub genres: Vec<String>,
    pub selected_genres: Vec<bool>,
    pub certificates: Vec<String>,
    pub status: String,
    pub warning: Option<String>,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self {
            settings: FilterSettings::default(),
            genres: Vec::new(),
            selected_genres: Vec::new(),
            certificates: vec![CERTIFICATE_ALL.to_string()],
            status: "Ready".to_string(),
            warning: None,
        }
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the option lists after a dataset load.
    /// All genres start selected, matching the defaults of the filter view.
    pub fn update_options(&mut self, genres: Vec<String>, certificates: Vec<String>) {
        self.selected_genres = vec![true; genres.len()];
        self.genres = genres;
        self.certificates = certificates;
        self.settings.certificate = CERTIFICATE_ALL.to_string();
    }

    /// Currently ticked genres.
    pub fn get_selected_genres(&self) -> Vec<String> {
        self.genres
            .iter()
            .zip(self.selected_genres.iter())
            .filter(|(_, &selected)| selected)
            .map(|(genre, _)| genre.clone())
            .collect()
    }

    /// Build the filter criteria from the current control state.
    ///
    /// Parses the rating bound text fields; invalid input falls back to the
    /// default bounds and leaves a warning on the panel.
    pub fn criteria(&mut self) -> FilterCriteria {
        let (bounds, warning) = RatingBounds::parse(
            &self.settings.min_rating_text,
            &self.settings.max_rating_text,
        );
        if let Some(message) = &warning {
            warn!(
                min = %self.settings.min_rating_text,
                max = %self.settings.max_rating_text,
                "{message}"
            );
        }
        self.warning = warning;

        FilterCriteria {
            genres: self.get_selected_genres(),
            certificate: self.settings.certificate.clone(),
            bounds,
        }
    }

    /// Draw the filter panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> FilterPanelAction {
        let mut action = FilterPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎬 IMDB Movie Explorer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Interactive Filter Viewer")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Dataset Section =====
        ui.label(RichText::new("📁 Dataset").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = FilterPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Genre Section =====
        ui.label(RichText::new("🎭 Genres").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("genre_list")
                    .max_height(160.0)
                    .show(ui, |ui| {
                        for (i, genre) in self.genres.iter().enumerate() {
                            if i < self.selected_genres.len()
                                && ui.checkbox(&mut self.selected_genres[i], genre).changed()
                            {
                                action = FilterPanelAction::FilterChanged;
                            }
                        }
                    });
            });

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() {
                self.selected_genres.iter_mut().for_each(|v| *v = true);
                action = FilterPanelAction::FilterChanged;
            }
            if ui.small_button("Clear All").clicked() {
                self.selected_genres.iter_mut().for_each(|v| *v = false);
                action = FilterPanelAction::FilterChanged;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Certificate Section =====
        ui.label(RichText::new("📜 Certificate").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([90.0, 20.0], egui::Label::new("Certificate:"));
            ComboBox::from_id_salt("certificate")
                .width(150.0)
                .selected_text(&self.settings.certificate)
                .show_ui(ui, |ui| {
                    for certificate in &self.certificates {
                        if ui
                            .selectable_label(
                                self.settings.certificate == *certificate,
                                certificate,
                            )
                            .clicked()
                        {
                            self.settings.certificate = certificate.clone();
                            action = FilterPanelAction::FilterChanged;
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Rating Range Section =====
        ui.label(RichText::new("⭐ IMDB Rating").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Min:");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut self.settings.min_rating_text)
                        .desired_width(50.0),
                )
                .changed()
            {
                action = FilterPanelAction::FilterChanged;
            }
            ui.add_space(10.0);
            ui.label("Max:");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut self.settings.max_rating_text)
                        .desired_width(50.0),
                )
                .changed()
            {
                action = FilterPanelAction::FilterChanged;
            }
        });

        if let Some(warning) = &self.warning {
            ui.add_space(5.0);
            ui.label(
                RichText::new(warning)
                    .size(11.0)
                    .color(Color32::from_rgb(255, 193, 7)),
            );
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Showing") || self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by the filter panel
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPanelAction {
    None,
    BrowseCsv,
    FilterChanged,
}
