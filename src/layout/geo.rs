//! Planar boundary rings to SVG path data.
//!
//! Capability contract: rings of already-projected `[x, y]` points go in,
//! one path string (`M x,y L ... Z` per ring) comes out. No projection math
//! happens here; the upstream topology is projected before it reaches us.

use crate::data::topology::Ring;

/// Builds the path data for one feature's polygons.
///
/// Rings with fewer than two points contribute nothing; an entirely empty
/// feature yields an empty string, which the renderer rejects as invalid.
#[must_use]
pub fn path_data(polygons: &[Vec<Ring>]) -> String {
    let mut data = String::new();
    for polygon in polygons {
        for ring in polygon {
            if ring.len() < 2 {
                continue;
            }
            for (index, point) in ring.iter().enumerate() {
                data.push(if index == 0 { 'M' } else { 'L' });
                data.push_str(&fmt_coord(point[0]));
                data.push(',');
                data.push_str(&fmt_coord(point[1]));
            }
            data.push('Z');
        }
    }
    data
}

/// Shortest stable decimal form, rounded to 1/100 of a unit.
fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::path_data;

    #[test]
    fn square_ring_emits_one_closed_subpath() {
        let ring = vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]];
        let data = path_data(&[vec![ring]]);
        assert_eq!(data, "M0,0L10,0L10,10L0,10L0,0Z");
    }

    #[test]
    fn degenerate_rings_are_skipped() {
        let data = path_data(&[vec![vec![[1.0, 1.0]]]]);
        assert!(data.is_empty());
    }
}
