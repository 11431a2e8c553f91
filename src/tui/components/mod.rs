pub mod header;
pub mod rate_panel;
pub mod result;
