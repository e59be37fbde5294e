// src/gui/components/mod.rs
pub mod export_bar;
pub mod filters;
pub mod panels;
pub mod tabs;
