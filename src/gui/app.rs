//! IMDB Movie Explorer Main Application
//! Main window with the filter panel and the result table.

use crate::data::{DataLoader, MovieFilter};
use crate::gui::{FilterPanel, FilterPanelAction, TableViewer};
use egui::SidePanel;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::error;

/// Dataset picked up automatically from the working directory.
const DEFAULT_DATASET: &str = "imdb_movie_data.csv";

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete { df: DataFrame, path: PathBuf },
    Error(String),
}

/// Main application window.
pub struct MovieExplorerApp {
    loader: DataLoader,
    filter_panel: FilterPanel,
    table_viewer: TableViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl MovieExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            loader: DataLoader::new(),
            filter_panel: FilterPanel::new(),
            table_viewer: TableViewer::new(),
            load_rx: None,
            is_loading: false,
        };

        // The canonical dataset lives next to the binary; pick it up
        // without a file dialog when present.
        if Path::new(DEFAULT_DATASET).exists() {
            app.start_load(PathBuf::from(DEFAULT_DATASET));
        }

        app
    }

    /// Handle CSV file selection.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            // Same file already loaded, the memoized table stays
            if self.loader.get_file_path() == Some(&path) && self.loader.get_dataframe().is_some() {
                return;
            }
            self.start_load(path);
        }
    }

    /// Kick off a load-and-clean on a background thread.
    fn start_load(&mut self, path: PathBuf) {
        self.table_viewer.clear();
        self.filter_panel.settings.csv_path = Some(path.clone());
        self.filter_panel.set_status("Loading dataset...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let path_str = path.to_string_lossy().to_string();

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

            match DataLoader::read_and_clean(&path_str) {
                Ok(df) => {
                    let _ = tx.send(LoadResult::Complete { df, path });
                }
                Err(e) => {
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.filter_panel.set_status(&status);
                    }
                    LoadResult::Complete { df, path } => {
                        self.loader.set_dataframe(df, path);
                        self.filter_panel.update_options(
                            self.loader.genre_options(),
                            self.loader.certificate_options(),
                        );
                        self.is_loading = false;
                        should_keep_receiver = false;
                        self.refresh_table();
                    }
                    LoadResult::Error(message) => {
                        error!("dataset load failed: {message}");
                        self.filter_panel.set_status(&format!("Error: {message}"));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Re-run the filter over the cached table and show the result.
    /// Called once after load and again on every control change.
    fn refresh_table(&mut self) {
        let criteria = self.filter_panel.criteria();
        let Some(df) = self.loader.get_dataframe() else {
            return;
        };

        match MovieFilter::apply(df, &criteria) {
            Ok(rows) => {
                self.filter_panel.set_status(&format!(
                    "Showing {} of {} movies",
                    rows.height(),
                    self.loader.get_row_count()
                ));
                self.table_viewer.set_rows(rows);
            }
            Err(e) => {
                error!("filter failed: {e}");
                self.filter_panel.set_status(&format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for MovieExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Filter Panel
        SidePanel::left("filter_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.filter_panel.show(ui);

                    match action {
                        FilterPanelAction::BrowseCsv => self.handle_browse_csv(),
                        FilterPanelAction::FilterChanged => self.refresh_table(),
                        FilterPanelAction::None => {}
                    }
                });
            });

        // Central panel - Result Table
        egui::CentralPanel::default().show(ctx, |ui| {
            self.table_viewer.show(ui);
        });
    }
}
