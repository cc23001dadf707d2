//! Public types for the visualization module.

/// Output file format for rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    /// Vector output via the SVG backend.
    Svg,
    /// Raster output via the bitmap backend.
    Png,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }
}
