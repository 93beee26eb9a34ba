//! GUI module - User interface components

mod app;
mod filter_panel;
mod table_viewer;

pub use app::MovieExplorerApp;
pub use filter_panel::{FilterPanel, FilterPanelAction};
pub use table_viewer::TableViewer;
