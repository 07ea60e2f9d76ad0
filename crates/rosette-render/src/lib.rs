pub mod export;
pub mod svg;

pub use export::{write_csv, write_json};
pub use svg::SvgPlot;
