//! UIコンポーネント

pub mod header;
pub mod results_grid;
pub mod search_bar;
pub mod summary_panel;
pub mod timeline_view;
pub mod upload_area;
