pub mod category_legend;
pub mod download_map;
pub mod drought_map;
pub mod loading_overlay;
pub mod map_controls;
