use dataviz_rs::charts::tree_map::{TreeMapConfig, build_tree_map};
use dataviz_rs::data::games::SalesNode;
use dataviz_rs::interaction::HoverEvent;

const SALES: &str = r#"{
  "name": "Video Game Sales",
  "children": [
    {"name": "Wii", "children": [
      {"name": "Wii Sports", "category": "Wii", "value": "82.53"},
      {"name": "Mario Kart Wii", "category": "Wii", "value": "35.52"}
    ]},
    {"name": "DS", "children": [
      {"name": "Nintendogs", "category": "DS", "value": "24.67"}
    ]}
  ]
}"#;

fn sales_tree() -> SalesNode {
    SalesNode::from_json_str(SALES).expect("decode")
}

#[test]
fn one_tile_per_leaf() {
    let root = sales_tree();
    let scene = build_tree_map(&root, &TreeMapConfig::default()).expect("build");

    assert_eq!(scene.mark_count(), root.leaf_count());
    assert_eq!(scene.frame.class_count("tile"), 3);
    scene.validate().expect("valid frame");
}

#[test]
fn tiles_carry_name_category_and_value_annotations() {
    let scene = build_tree_map(&sales_tree(), &TreeMapConfig::default()).expect("build");

    let tile = scene
        .frame
        .rects
        .iter()
        .find(|rect| rect.attrs.get("data-name") == Some("Wii Sports"))
        .expect("largest tile");
    assert_eq!(tile.attrs.get("data-category"), Some("Wii"));
    assert_eq!(tile.attrs.get("data-value"), Some("82.53"));
}

#[test]
fn sibling_platforms_get_distinct_legend_colors() {
    let scene = build_tree_map(&sales_tree(), &TreeMapConfig::default()).expect("build");

    let wii = scene
        .frame
        .rects
        .iter()
        .find(|rect| rect.attrs.get("data-category") == Some("Wii"))
        .expect("wii tile");
    let ds = scene
        .frame
        .rects
        .iter()
        .find(|rect| rect.attrs.get("data-category") == Some("DS"))
        .expect("ds tile");
    assert_ne!(wii.fill, ds.fill);

    assert_eq!(scene.frame.class_count("legend-item"), 2);
}

#[test]
fn tiles_stay_inside_the_tile_area() {
    let config = TreeMapConfig::default();
    let scene = build_tree_map(&sales_tree(), &config).expect("build");

    let left = config.margin.left;
    let top = config.margin.top;
    let right = f64::from(config.viewport.width) - config.margin.right;
    let bottom = f64::from(config.viewport.height) - config.margin.bottom - config.legend_band_px;
    for tile in scene.frame.rects.iter().filter(|r| r.class.as_deref() == Some("tile")) {
        assert!(tile.x >= left - 1e-9);
        assert!(tile.y >= top - 1e-9);
        assert!(tile.x + tile.width <= right + 1e-9);
        assert!(tile.y + tile.height <= bottom + 1e-9);
    }
}

#[test]
fn tooltip_shows_name_category_and_value() {
    let scene = build_tree_map(&sales_tree(), &TreeMapConfig::default()).expect("build");

    let index = scene
        .frame
        .rects
        .iter()
        .filter(|rect| rect.class.as_deref() == Some("tile"))
        .position(|rect| rect.attrs.get("data-name") == Some("Nintendogs"))
        .expect("nintendogs tile");
    let mut hover = scene.hover_model();
    hover
        .on_pointer_enter(HoverEvent::new(index, 480.0, 500.0))
        .expect("enter");
    let tooltip = hover.tooltip();
    assert_eq!(tooltip.lines[0], "Name: Nintendogs");
    assert_eq!(tooltip.lines[1], "Category: DS");
    assert_eq!(tooltip.lines[2], "Value: 24.67");
    assert_eq!(tooltip.attrs.get("data-value"), Some("24.67"));
}

#[test]
fn identical_input_packs_identically() {
    let a = build_tree_map(&sales_tree(), &TreeMapConfig::default()).expect("a");
    let b = build_tree_map(&sales_tree(), &TreeMapConfig::default()).expect("b");
    assert_eq!(a.frame, b.frame);
}
