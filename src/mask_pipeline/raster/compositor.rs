//! Polygon rasterization onto the mask grid.
//!
//! Fill rule: even-odd crossing test sampled at pixel centers, with the
//! origin at the top-left pixel. Every ring of a polygon participates in
//! the test, so interior rings cut holes. Each pixel commits to exactly 0
//! or 1; there is no anti-aliasing or partial coverage.

use tracing::debug;

use crate::mask_pipeline::annotations::types::{Geometry, Ring};
use crate::mask_pipeline::raster::types::{FOREGROUND, MaskVolume};

/// Rasterizes per-channel geometry sets onto a shared `height` x `width`
/// grid, one plane per entry of `channel_sets`.
///
/// Geometries within a channel union into a binary plane; channels never
/// influence each other. A channel with no geometries stays all-background.
pub fn compose_mask(width: u32, height: u32, channel_sets: &[Vec<&Geometry>]) -> MaskVolume {
    let width = width as usize;
    let height = height as usize;
    let mut volume = MaskVolume::new(channel_sets.len(), height, width);

    for (index, geometries) in channel_sets.iter().enumerate() {
        debug!(
            "Rasterizing channel {} ({} geometries)",
            index,
            geometries.len()
        );
        let plane = volume.plane_mut(index);
        for geometry in geometries {
            fill_geometry(plane, width, height, geometry);
        }
    }

    volume
}

fn fill_geometry(plane: &mut [u8], width: usize, height: usize, geometry: &Geometry) {
    match geometry {
        Geometry::Polygon { coordinates } => fill_polygon(plane, width, height, coordinates),
        Geometry::MultiPolygon { coordinates } => {
            for polygon in coordinates {
                fill_polygon(plane, width, height, polygon);
            }
        }
    }
}

/// Even-odd fill of one polygon (exterior ring plus holes).
fn fill_polygon(plane: &mut [u8], width: usize, height: usize, rings: &[Ring]) {
    if width == 0 || height == 0 {
        return;
    }

    // Bounding box over all rings, clamped to the grid. Geometry outside
    // the grid is clipped by the clamp; the crossing test stays correct for
    // whatever part remains in view.
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for ring in rings {
        for &[x, y] in ring {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    if !min_x.is_finite() {
        return;
    }

    let x0 = clamp_index(min_x.floor(), width);
    let x1 = clamp_index(max_x.ceil(), width);
    let y0 = clamp_index(min_y.floor(), height);
    let y1 = clamp_index(max_y.ceil(), height);

    for y in y0..=y1 {
        let py = y as f64 + 0.5;
        for x in x0..=x1 {
            let px = x as f64 + 0.5;
            if point_inside(rings, px, py) {
                plane[y * width + x] = FOREGROUND;
            }
        }
    }
}

fn clamp_index(value: f64, len: usize) -> usize {
    if value < 0.0 {
        0
    } else if value >= len as f64 {
        len - 1
    } else {
        value as usize
    }
}

/// Even-odd crossing test across every ring of a polygon.
fn point_inside(rings: &[Ring], px: f64, py: f64) -> bool {
    let mut inside = false;

    for ring in rings {
        let n = ring.len();
        // A ring needs at least three vertices.
        if n < 3 {
            continue;
        }

        let mut j = n - 1;
        for i in 0..n {
            let [xi, yi] = ring[i];
            let [xj, yj] = ring[j];

            // Edge crosses the horizontal line at py? The strict/non-strict
            // mix keeps vertices from being counted twice.
            if (yi > py) != (yj > py) {
                let x_inter = (xj - xi) * (py - yi) / (yj - yi) + xi;
                if px < x_inter {
                    inside = !inside;
                }
            }

            j = i;
        }
    }

    inside
}
