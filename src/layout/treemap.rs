//! Squarified hierarchical rectangle packing.
//!
//! Capability contract: a weighted node tree plus a target rectangle and a
//! padding width go in, one tile per leaf comes out. Leaf order follows the
//! hierarchy after sorting siblings by subtree height descending then value
//! descending, so stacking is deterministic for identical input. Padding is
//! an outer inset per internal node plus a half-padding inset per tile.

use ordered_float::NotNan;
use rust_decimal::Decimal;

use crate::core::decimal_to_f64;
use crate::data::games::SalesNode;
use crate::error::{ChartError, ChartResult};

/// One packed leaf rectangle with its record data.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapTile {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub name: String,
    pub category: String,
    pub value: Decimal,
}

impl TreemapTile {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Rect {
    fn width(self) -> f64 {
        self.x1 - self.x0
    }

    fn height(self) -> f64 {
        self.y1 - self.y0
    }

    fn area(self) -> f64 {
        self.width() * self.height()
    }

    /// Shrinks by `amount` on every side, collapsing to the center instead
    /// of inverting.
    fn inset(self, amount: f64) -> Rect {
        let x0 = (self.x0 + amount).min((self.x0 + self.x1) / 2.0);
        let y0 = (self.y0 + amount).min((self.y0 + self.y1) / 2.0);
        let x1 = (self.x1 - amount).max(x0);
        let y1 = (self.y1 - amount).max(y0);
        Rect { x0, y0, x1, y1 }
    }
}

struct WeightedNode<'a> {
    node: &'a SalesNode,
    category: String,
    total: NotNan<f64>,
    height: usize,
    children: Vec<WeightedNode<'a>>,
}

/// Packs `root`'s leaves into a `width` x `height` rectangle.
pub fn treemap_layout(
    root: &SalesNode,
    width: f64,
    height: f64,
    padding: f64,
) -> ChartResult<Vec<TreemapTile>> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(ChartError::InvalidData(
            "treemap size must be finite and > 0".to_owned(),
        ));
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(ChartError::InvalidData(
            "treemap padding must be finite and >= 0".to_owned(),
        ));
    }

    let weighted = rollup(root, None)?;
    if weighted.total.into_inner() <= 0.0 {
        return Err(ChartError::InvalidData(
            "treemap tree has no positive value to lay out".to_owned(),
        ));
    }

    let mut tiles = Vec::new();
    pack_node(
        &weighted,
        Rect {
            x0: 0.0,
            y0: 0.0,
            x1: width,
            y1: height,
        },
        padding,
        &mut tiles,
    );
    Ok(tiles)
}

/// Sums leaf values upward and sorts siblings by height then value, both
/// descending. Stable, so equal siblings keep their input order.
fn rollup<'a>(node: &'a SalesNode, parent_name: Option<&str>) -> ChartResult<WeightedNode<'a>> {
    let category = node
        .category
        .clone()
        .or_else(|| parent_name.map(str::to_owned))
        .unwrap_or_else(|| node.name.clone());

    if node.is_leaf() {
        let value = node.value.unwrap_or(Decimal::ZERO);
        let total = decimal_to_f64(value, "leaf value")?;
        if total < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "leaf `{}` has negative value",
                node.name
            )));
        }
        return Ok(WeightedNode {
            node,
            category,
            total: to_weight(total)?,
            height: 0,
            children: Vec::new(),
        });
    }

    let mut children = node
        .children
        .iter()
        .map(|child| rollup(child, Some(&node.name)))
        .collect::<ChartResult<Vec<_>>>()?;
    children.sort_by(|a, b| {
        b.height
            .cmp(&a.height)
            .then_with(|| b.total.cmp(&a.total))
    });

    let total: f64 = children.iter().map(|child| child.total.into_inner()).sum();
    let height = 1 + children.iter().map(|child| child.height).max().unwrap_or(0);
    Ok(WeightedNode {
        node,
        category,
        total: to_weight(total)?,
        height,
        children,
    })
}

fn to_weight(value: f64) -> ChartResult<NotNan<f64>> {
    NotNan::new(value)
        .map_err(|_| ChartError::InvalidData("treemap weight must not be NaN".to_owned()))
}

fn pack_node(node: &WeightedNode<'_>, rect: Rect, padding: f64, tiles: &mut Vec<TreemapTile>) {
    if node.children.is_empty() {
        tiles.push(TreemapTile {
            x0: rect.x0,
            y0: rect.y0,
            x1: rect.x1,
            y1: rect.y1,
            name: node.node.name.clone(),
            category: node.category.clone(),
            value: node.node.value.unwrap_or(Decimal::ZERO),
        });
        return;
    }

    let inner = rect.inset(padding);
    let weights: Vec<f64> = node
        .children
        .iter()
        .map(|child| child.total.into_inner())
        .collect();
    let rects = squarify(&weights, inner);
    for (child, child_rect) in node.children.iter().zip(rects) {
        pack_node(child, child_rect.inset(padding / 2.0), padding, tiles);
    }
}

/// Squarified tiling: fills rows along the shorter side of the remaining
/// space, extending a row only while its worst aspect ratio improves.
fn squarify(weights: &[f64], rect: Rect) -> Vec<Rect> {
    let total: f64 = weights.iter().sum();
    let area = rect.area();
    if total <= 0.0 || area <= 0.0 {
        return weights
            .iter()
            .map(|_| Rect {
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x0,
                y1: rect.y0,
            })
            .collect();
    }

    // Scale weights so they sum to the available pixel area.
    let scaled: Vec<f64> = weights
        .iter()
        .map(|weight| weight.max(0.0) * area / total)
        .collect();

    let mut rects = Vec::with_capacity(scaled.len());
    let mut rest = rect;
    let mut start = 0;
    while start < scaled.len() {
        let length = rest.width().min(rest.height());
        let mut end = start + 1;
        let mut best = worst_ratio(&scaled[start..end], length);
        while end < scaled.len() {
            let candidate = worst_ratio(&scaled[start..=end], length);
            if candidate > best {
                break;
            }
            best = candidate;
            end += 1;
        }

        let row_sum: f64 = scaled[start..end].iter().sum();
        if row_sum <= 0.0 {
            for _ in start..end {
                rects.push(Rect {
                    x0: rest.x0,
                    y0: rest.y0,
                    x1: rest.x0,
                    y1: rest.y0,
                });
            }
            start = end;
            continue;
        }

        let thickness = row_sum / length.max(f64::EPSILON);
        if rest.width() >= rest.height() {
            // Column against the left edge.
            let mut y = rest.y0;
            for value in &scaled[start..end] {
                let cell_height = value / thickness;
                rects.push(Rect {
                    x0: rest.x0,
                    y0: y,
                    x1: rest.x0 + thickness,
                    y1: y + cell_height,
                });
                y += cell_height;
            }
            rest.x0 += thickness;
        } else {
            // Row against the top edge.
            let mut x = rest.x0;
            for value in &scaled[start..end] {
                let cell_width = value / thickness;
                rects.push(Rect {
                    x0: x,
                    y0: rest.y0,
                    x1: x + cell_width,
                    y1: rest.y0 + thickness,
                });
                x += cell_width;
            }
            rest.y0 += thickness;
        }
        start = end;
    }
    rects
}

fn worst_ratio(row: &[f64], length: f64) -> f64 {
    let sum: f64 = row.iter().sum();
    if sum <= 0.0 {
        return f64::INFINITY;
    }
    let max = row.iter().copied().fold(f64::MIN, f64::max);
    let min = row.iter().copied().fold(f64::MAX, f64::min);
    if min <= 0.0 {
        return f64::INFINITY;
    }
    let sum_sq = sum * sum;
    let len_sq = length * length;
    (len_sq * max / sum_sq).max(sum_sq / (len_sq * min))
}
