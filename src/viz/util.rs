//! Utility functions for visualization: colors, axis headroom, pie geometry.

use plotters::prelude::*;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Y-axis upper bound with headroom above the tallest bar. An all-zero
/// series still needs a non-degenerate range, so the floor is 1.0.
pub fn y_axis_max(max_value: f64) -> f64 {
    if max_value <= 0.0 {
        1.0
    } else {
        max_value * 1.1
    }
}

/// Pixel outline of one pie sector: center plus arc samples every ~2 degrees.
/// Angles are measured clockwise from 12 o'clock, in degrees.
pub fn sector_points(
    center: (i32, i32),
    radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> Vec<(i32, i32)> {
    let mut pts = vec![center];
    let steps = (((end_deg - start_deg) / 2.0).ceil() as usize).max(1);
    for i in 0..=steps {
        let deg = start_deg + (end_deg - start_deg) * i as f64 / steps as f64;
        let rad = (deg - 90.0).to_radians();
        pts.push((
            center.0 + (radius * rad.cos()).round() as i32,
            center.1 + (radius * rad.sin()).round() as i32,
        ));
    }
    pts
}

/// Midpoint of a sector's arc at the given radius, for label placement.
pub fn sector_label_pos(
    center: (i32, i32),
    radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> (i32, i32) {
    let mid = (start_deg + end_deg) / 2.0;
    let rad = (mid - 90.0).to_radians();
    (
        center.0 + (radius * rad.cos()).round() as i32,
        center.1 + (radius * rad.sin()).round() as i32,
    )
}
