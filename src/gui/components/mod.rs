// src/gui/components/mod.rs
pub mod about;
pub mod export_bar;
pub mod results;
pub mod sidebar;
