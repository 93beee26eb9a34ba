//! Table Viewer Widget
//! Central scrollable panel that renders the filtered movie rows.
//! Rows are virtualized so large datasets stay responsive.

use crate::data::COLUMN_LABELS;
use egui::{Color32, RichText, ScrollArea};
use polars::prelude::*;

const ROW_HEIGHT: f32 = 22.0;
/// Per-column display widths, title first.
const COLUMN_WIDTHS: [f32; 11] = [
    240.0, 60.0, 90.0, 90.0, 90.0, 90.0, 90.0, 80.0, 110.0, 90.0, 110.0,
];

/// Scrollable table of the current filter result.
pub struct TableViewer {
    rows: Option<DataFrame>,
}

impl Default for TableViewer {
    fn default() -> Self {
        Self { rows: None }
    }
}

impl TableViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current result (e.g. while a new dataset loads).
    pub fn clear(&mut self) {
        self.rows = None;
    }

    /// Install a fresh filter result.
    pub fn set_rows(&mut self, rows: DataFrame) {
        self.rows = Some(rows);
    }

    /// Draw the table with a fixed header and virtualized rows.
    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(df) = &self.rows else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ui.label(
            RichText::new(format!("Filtered Data - {} movies", df.height()))
                .size(16.0)
                .strong(),
        );
        ui.add_space(8.0);

        ScrollArea::horizontal().show(ui, |ui| {
            // Header row stays put, only the rows scroll vertically
            ui.horizontal(|ui| {
                for (label, width) in COLUMN_LABELS.iter().zip(COLUMN_WIDTHS.iter()) {
                    ui.add_sized(
                        [*width, ROW_HEIGHT],
                        egui::Label::new(
                            RichText::new(*label)
                                .strong()
                                .color(Color32::from_rgb(100, 149, 237)),
                        ),
                    );
                }
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show_rows(ui, ROW_HEIGHT, df.height(), |ui, row_range| {
                    for row in row_range {
                        ui.horizontal(|ui| {
                            for (col_idx, width) in COLUMN_WIDTHS.iter().enumerate() {
                                let text = Self::cell_text(df, row, col_idx);
                                ui.add_sized(
                                    [*width, ROW_HEIGHT],
                                    egui::Label::new(RichText::new(text).size(12.0)),
                                );
                            }
                        });
                    }
                });
        });
    }

    /// Render a single cell as display text, empty for nulls.
    fn cell_text(df: &DataFrame, row: usize, col_idx: usize) -> String {
        df.get_columns()
            .get(col_idx)
            .and_then(|column| column.get(row).ok())
            .map(|value| {
                if value.is_null() {
                    String::new()
                } else {
                    value.to_string().trim_matches('"').to_string()
                }
            })
            .unwrap_or_default()
    }
}
