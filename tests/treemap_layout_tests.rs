use dataviz_rs::data::games::SalesNode;
use dataviz_rs::layout::treemap_layout;
use rust_decimal::Decimal;

fn leaf(name: &str, value: &str) -> SalesNode {
    SalesNode {
        name: name.to_owned(),
        category: None,
        value: Some(value.parse::<Decimal>().expect("decimal")),
        children: Vec::new(),
    }
}

fn platform(name: &str, children: Vec<SalesNode>) -> SalesNode {
    SalesNode {
        name: name.to_owned(),
        category: None,
        value: None,
        children,
    }
}

fn sample_tree() -> SalesNode {
    platform(
        "root",
        vec![
            platform(
                "A",
                vec![leaf("a1", "6.0"), leaf("a2", "4.0"), leaf("a3", "2.0")],
            ),
            platform("B", vec![leaf("b1", "5.0"), leaf("b2", "3.0")]),
        ],
    )
}

#[test]
fn every_leaf_gets_exactly_one_tile() {
    let tiles = treemap_layout(&sample_tree(), 400.0, 300.0, 2.0).expect("layout");
    assert_eq!(tiles.len(), 5);
}

#[test]
fn tiles_stay_inside_the_target_rectangle() {
    let tiles = treemap_layout(&sample_tree(), 400.0, 300.0, 2.0).expect("layout");
    for tile in &tiles {
        assert!(tile.x0 >= -1e-9 && tile.y0 >= -1e-9);
        assert!(tile.x1 <= 400.0 + 1e-9 && tile.y1 <= 300.0 + 1e-9);
        assert!(tile.x1 >= tile.x0 && tile.y1 >= tile.y0);
    }
}

#[test]
fn tiles_do_not_overlap() {
    let tiles = treemap_layout(&sample_tree(), 400.0, 300.0, 0.0).expect("layout");
    for (i, a) in tiles.iter().enumerate() {
        for b in tiles.iter().skip(i + 1) {
            let overlap_w = a.x1.min(b.x1) - a.x0.max(b.x0);
            let overlap_h = a.y1.min(b.y1) - a.y0.max(b.y0);
            let overlap = overlap_w.max(0.0) * overlap_h.max(0.0);
            assert!(
                overlap <= 1e-6,
                "tiles {} and {} overlap by {overlap}",
                a.name,
                b.name
            );
        }
    }
}

#[test]
fn areas_are_proportional_to_values_without_padding() {
    let tiles = treemap_layout(&sample_tree(), 400.0, 300.0, 0.0).expect("layout");
    let total_value = 20.0;
    let total_area = 400.0 * 300.0;
    for tile in &tiles {
        let value: f64 = tile.value.to_string().parse().expect("value");
        let expected = total_area * value / total_value;
        let actual = tile.width() * tile.height();
        assert!(
            (actual - expected).abs() <= 1e-6,
            "tile {} area {actual}, expected {expected}",
            tile.name
        );
    }
}

#[test]
fn siblings_order_by_descending_value() {
    let tiles = treemap_layout(&sample_tree(), 400.0, 300.0, 0.0).expect("layout");
    // Platform A (total 12) packs before platform B (total 8), largest
    // leaves first within each.
    let names: Vec<&str> = tiles.iter().map(|tile| tile.name.as_str()).collect();
    assert_eq!(names, ["a1", "a2", "a3", "b1", "b2"]);
}

#[test]
fn identical_input_yields_identical_tiles() {
    let a = treemap_layout(&sample_tree(), 400.0, 300.0, 2.0).expect("a");
    let b = treemap_layout(&sample_tree(), 400.0, 300.0, 2.0).expect("b");
    assert_eq!(a, b);
}

#[test]
fn a_valueless_tree_is_rejected() {
    let tree = platform("root", vec![platform("empty", Vec::new())]);
    assert!(treemap_layout(&tree, 100.0, 100.0, 0.0).is_err());
}
