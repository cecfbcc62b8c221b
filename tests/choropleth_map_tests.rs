use dataviz_rs::charts::choropleth::{ChoroplethConfig, build_choropleth_map};
use dataviz_rs::core::color::BLUES_8;
use dataviz_rs::data::education::counties_from_json_str;
use dataviz_rs::data::topology::Topology;
use dataviz_rs::interaction::HoverEvent;

const TOPOLOGY: &str = r#"{
  "type": "Topology",
  "transform": {"scale": [1, 1], "translate": [0, 0]},
  "objects": {
    "counties": {
      "type": "GeometryCollection",
      "geometries": [
        {"type": "Polygon", "id": 1001, "arcs": [[0]]},
        {"type": "Polygon", "id": 1002, "arcs": [[1]]}
      ]
    }
  },
  "arcs": [
    [[0, 0], [10, 0], [0, 10], [-10, 0], [0, -10]],
    [[20, 0], [10, 0], [0, 10], [-10, 0], [0, -10]]
  ]
}"#;

// 1001 matches a geometry feature; 9999 has no geometry at all.
const EDUCATION: &str = r#"[
  {"fips": 1001, "state": "AL", "area_name": "Autauga County", "bachelorsOrHigher": 21.4},
  {"fips": 9999, "state": "ZZ", "area_name": "Nowhere County", "bachelorsOrHigher": 40.0}
]"#;

#[test]
fn geometry_drives_the_mark_count() {
    let education = counties_from_json_str(EDUCATION).expect("decode education");
    let topology = Topology::from_json_str(TOPOLOGY).expect("decode topology");
    let scene = build_choropleth_map(&education, &topology, &ChoroplethConfig::default())
        .expect("build");

    // Two features drawn; the education record without geometry renders
    // nothing.
    assert_eq!(scene.mark_count(), 2);
    assert_eq!(scene.frame.class_count("county"), 2);
    scene.validate().expect("valid frame");
}

#[test]
fn matched_county_gets_a_threshold_fill_and_education_annotation() {
    let education = counties_from_json_str(EDUCATION).expect("decode education");
    let topology = Topology::from_json_str(TOPOLOGY).expect("decode topology");
    let config = ChoroplethConfig::default();
    let scene = build_choropleth_map(&education, &topology, &config).expect("build");

    let matched = scene
        .frame
        .paths
        .iter()
        .find(|path| path.attrs.get("data-fips") == Some("1001"))
        .expect("county 1001");
    assert_eq!(matched.attrs.get("data-education"), Some("21.4"));
    // 21.4 is the domain minimum: first threshold bin, not the fallback.
    assert_eq!(matched.fill, BLUES_8[0]);
    assert_ne!(matched.fill, config.no_data_fill);
}

#[test]
fn unmatched_county_renders_the_no_data_state() {
    let education = counties_from_json_str(EDUCATION).expect("decode education");
    let topology = Topology::from_json_str(TOPOLOGY).expect("decode topology");
    let config = ChoroplethConfig::default();
    let scene = build_choropleth_map(&education, &topology, &config).expect("build");

    let unmatched_index = scene
        .frame
        .paths
        .iter()
        .position(|path| path.attrs.get("data-fips") == Some("1002"))
        .expect("county 1002");
    let unmatched = &scene.frame.paths[unmatched_index];
    assert_eq!(unmatched.fill, config.no_data_fill);
    assert_eq!(unmatched.attrs.get("data-education"), None);

    // Hovering it reveals an empty tooltip body rather than crashing.
    let mut hover = scene.hover_model();
    hover
        .on_pointer_enter(HoverEvent::new(unmatched_index, 50.0, 50.0))
        .expect("enter");
    assert!(hover.tooltip().visible);
    assert!(hover.tooltip().lines.is_empty());
    assert_eq!(hover.tooltip().attrs.get("data-education"), None);
}

#[test]
fn matched_county_tooltip_shows_place_and_percentage() {
    let education = counties_from_json_str(EDUCATION).expect("decode education");
    let topology = Topology::from_json_str(TOPOLOGY).expect("decode topology");
    let scene = build_choropleth_map(&education, &topology, &ChoroplethConfig::default())
        .expect("build");

    let matched_index = scene
        .frame
        .paths
        .iter()
        .position(|path| path.attrs.get("data-fips") == Some("1001"))
        .expect("county 1001");
    let mut hover = scene.hover_model();
    hover
        .on_pointer_enter(HoverEvent::new(matched_index, 5.0, 5.0))
        .expect("enter");
    let tooltip = hover.tooltip();
    assert_eq!(tooltip.lines[0], "Autauga County - AL");
    assert_eq!(tooltip.lines[1], "21.4%");
    assert_eq!(tooltip.attrs.get("data-education"), Some("21.4"));
}

#[test]
fn county_outlines_come_from_the_decoded_arcs() {
    let education = counties_from_json_str(EDUCATION).expect("decode education");
    let topology = Topology::from_json_str(TOPOLOGY).expect("decode topology");
    let scene = build_choropleth_map(&education, &topology, &ChoroplethConfig::default())
        .expect("build");

    let first = scene
        .frame
        .paths
        .iter()
        .find(|path| path.attrs.get("data-fips") == Some("1001"))
        .expect("county 1001");
    assert_eq!(first.data, "M0,0L10,0L10,10L0,10L0,0Z");
}

#[test]
fn legend_draws_eight_bins_with_lower_bound_labels() {
    let education = counties_from_json_str(EDUCATION).expect("decode education");
    let topology = Topology::from_json_str(TOPOLOGY).expect("decode topology");
    let scene = build_choropleth_map(&education, &topology, &ChoroplethConfig::default())
        .expect("build");

    assert_eq!(scene.frame.class_count("legend-item"), 8);
    let first_label = scene
        .frame
        .texts
        .iter()
        .find(|text| text.class.as_deref() == Some("legend-label"))
        .expect("legend label");
    assert_eq!(first_label.text, "21.4");
}

#[test]
fn missing_topology_object_aborts_the_build() {
    let education = counties_from_json_str(EDUCATION).expect("decode education");
    let topology = Topology::from_json_str(TOPOLOGY).expect("decode topology");
    let config = ChoroplethConfig {
        county_object: "states".to_owned(),
        ..ChoroplethConfig::default()
    };
    assert!(build_choropleth_map(&education, &topology, &config).is_err());
}
