//! Quantized topology decode for the county boundary dataset.
//!
//! Capability contract: a topology object (shared delta-encoded arcs plus an
//! optional quantization transform) goes in, planar boundary rings come out.
//! The coordinates are already map-projected upstream, so no cartographic
//! math happens here; `layout::geo` turns the rings into path data as-is.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::data::decode_json;
use crate::error::{ChartError, ChartResult};

/// One closed boundary ring of planar `[x, y]` points.
pub type Ring = Vec<[f64; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TopoGeometry {
    GeometryCollection {
        #[serde(default)]
        geometries: Vec<TopoGeometry>,
    },
    Polygon {
        #[serde(default)]
        id: Option<u32>,
        arcs: Vec<Vec<i64>>,
    },
    MultiPolygon {
        #[serde(default)]
        id: Option<u32>,
        arcs: Vec<Vec<Vec<i64>>>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub objects: HashMap<String, TopoGeometry>,
    pub arcs: Vec<Vec<[f64; 2]>>,
}

/// One region ready for rendering: a FIPS id and its polygon rings.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyFeature {
    pub id: u32,
    pub polygons: Vec<Vec<Ring>>,
}

impl Topology {
    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        decode_json(raw, "county topology")
    }

    /// Extracts the named geometry collection as renderable features.
    ///
    /// Geometries without an id (or of an unsupported kind) are skipped;
    /// everything else resolves its arcs into absolute planar rings.
    pub fn features(&self, object_name: &str) -> ChartResult<Vec<CountyFeature>> {
        let object = self.objects.get(object_name).ok_or_else(|| {
            ChartError::InvalidData(format!("topology has no object `{object_name}`"))
        })?;
        let geometries = match object {
            TopoGeometry::GeometryCollection { geometries } => geometries,
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "topology object `{object_name}` is not a geometry collection"
                )));
            }
        };

        let mut features = Vec::with_capacity(geometries.len());
        for geometry in geometries {
            match geometry {
                TopoGeometry::Polygon { id: Some(id), arcs } => {
                    features.push(CountyFeature {
                        id: *id,
                        polygons: vec![self.assemble_polygon(arcs)?],
                    });
                }
                TopoGeometry::MultiPolygon { id: Some(id), arcs } => {
                    let polygons = arcs
                        .iter()
                        .map(|polygon| self.assemble_polygon(polygon))
                        .collect::<ChartResult<Vec<_>>>()?;
                    features.push(CountyFeature { id: *id, polygons });
                }
                TopoGeometry::Polygon { id: None, .. }
                | TopoGeometry::MultiPolygon { id: None, .. } => {
                    debug!(object = object_name, "skipping geometry without id");
                }
                TopoGeometry::GeometryCollection { .. } | TopoGeometry::Unsupported => {
                    debug!(object = object_name, "skipping unsupported geometry kind");
                }
            }
        }
        Ok(features)
    }

    fn assemble_polygon(&self, ring_arcs: &[Vec<i64>]) -> ChartResult<Vec<Ring>> {
        ring_arcs
            .iter()
            .map(|arc_refs| self.assemble_ring(arc_refs))
            .collect()
    }

    /// Concatenates arc point runs into one ring, dropping the duplicated
    /// join point at every arc boundary.
    fn assemble_ring(&self, arc_refs: &[i64]) -> ChartResult<Ring> {
        let mut ring = Ring::new();
        for (position, arc_ref) in arc_refs.iter().enumerate() {
            let points = self.decode_arc(*arc_ref)?;
            let skip = usize::from(position > 0);
            ring.extend(points.into_iter().skip(skip));
        }
        Ok(ring)
    }

    fn decode_arc(&self, arc_ref: i64) -> ChartResult<Vec<[f64; 2]>> {
        let (index, reversed) = if arc_ref < 0 {
            ((!arc_ref) as usize, true)
        } else {
            (arc_ref as usize, false)
        };
        let arc = self.arcs.get(index).ok_or_else(|| {
            ChartError::InvalidData(format!("arc reference {arc_ref} out of range"))
        })?;

        let mut points = Vec::with_capacity(arc.len());
        match self.transform {
            // Quantized arcs are delta-encoded from their first position.
            Some(transform) => {
                let mut cursor_x = 0.0;
                let mut cursor_y = 0.0;
                for delta in arc {
                    cursor_x += delta[0];
                    cursor_y += delta[1];
                    points.push([
                        cursor_x * transform.scale[0] + transform.translate[0],
                        cursor_y * transform.scale[1] + transform.translate[1],
                    ]);
                }
            }
            None => points.extend(arc.iter().copied()),
        }

        if reversed {
            points.reverse();
        }
        Ok(points)
    }
}
