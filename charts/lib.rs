pub mod bar_chart;
mod common;
pub mod components;
mod config;

pub use self::common::Rect;
pub use self::config::{palette_color, ChartConfig, PaletteColor, CHART_CONFIG, CHART_PALETTE};
