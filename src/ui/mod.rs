pub mod auth;
pub mod dashboard_layout;
pub mod hotspot_editor;
pub mod icon;
pub mod pages;

pub use dashboard_layout::DashboardLayout;
pub use hotspot_editor::HotspotEditor;
pub use icon::{Icon, icons};
