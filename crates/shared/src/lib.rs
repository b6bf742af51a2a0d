pub mod commands;
pub mod dataset;
pub mod download;
pub mod editor;
pub mod error;
pub mod models;
pub mod palette;
pub mod settings;
pub mod style;
pub mod view;
