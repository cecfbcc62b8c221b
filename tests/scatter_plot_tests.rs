use dataviz_rs::charts::scatter::{ScatterPlotConfig, build_scatter_plot};
use dataviz_rs::core::color::CATEGORY10;
use dataviz_rs::data::cyclist::rides_from_json_str;
use dataviz_rs::interaction::HoverEvent;

const RIDES: &str = r#"[
  {"Time":"36:50","Place":1,"Seconds":2210,"Name":"Marco Pantani","Year":1995,
   "Nationality":"ITA","Doping":"Alleged drug use","URL":"https://example.test"},
  {"Time":"38:05","Place":2,"Seconds":2285,"Name":"Lance Armstrong","Year":2004,
   "Nationality":"USA","Doping":"","URL":""},
  {"Time":"39:30","Place":3,"Seconds":2370,"Name":"Carlos Sastre","Year":2008,
   "Nationality":"ESP","Doping":"","URL":""}
]"#;

#[test]
fn one_dot_per_ride() {
    let rides = rides_from_json_str(RIDES).expect("decode");
    let scene = build_scatter_plot(&rides, &ScatterPlotConfig::default()).expect("build");

    assert_eq!(scene.mark_count(), 3);
    assert_eq!(scene.frame.class_count("dot"), 3);
    scene.validate().expect("valid frame");
}

#[test]
fn dots_carry_year_and_iso_time_annotations() {
    let rides = rides_from_json_str(RIDES).expect("decode");
    let scene = build_scatter_plot(&rides, &ScatterPlotConfig::default()).expect("build");

    let first = &scene.frame.circles[0];
    assert_eq!(first.attrs.get("data-xvalue"), Some("1995"));
    assert_eq!(
        first.attrs.get("data-yvalue"),
        Some("1970-01-01T00:36:50.000Z")
    );
}

#[test]
fn fill_color_encodes_the_doping_flag() {
    let rides = rides_from_json_str(RIDES).expect("decode");
    let scene = build_scatter_plot(&rides, &ScatterPlotConfig::default()).expect("build");

    let alleged = &scene.frame.circles[0];
    let clean = &scene.frame.circles[1];
    assert_eq!(alleged.fill, CATEGORY10[1]);
    assert_eq!(clean.fill, CATEGORY10[0]);
}

#[test]
fn year_padding_keeps_dots_off_the_plot_edges() {
    let rides = rides_from_json_str(RIDES).expect("decode");
    let config = ScatterPlotConfig::default();
    let scene = build_scatter_plot(&rides, &config).expect("build");

    let plot_left = config.margin.left;
    let plot_right = f64::from(config.viewport.width) - config.margin.right;
    for dot in &scene.frame.circles {
        assert!(dot.cx > plot_left && dot.cx < plot_right);
    }
}

#[test]
fn legend_lists_both_doping_categories() {
    let rides = rides_from_json_str(RIDES).expect("decode");
    let scene = build_scatter_plot(&rides, &ScatterPlotConfig::default()).expect("build");

    assert_eq!(scene.frame.class_count("legend-item"), 2);
    let labels: Vec<&str> = scene
        .frame
        .texts
        .iter()
        .filter(|text| text.class.as_deref() == Some("legend-label"))
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, ["No doping allegations", "Doping allegations"]);
}

#[test]
fn tooltip_shows_rider_details_and_allegation() {
    let rides = rides_from_json_str(RIDES).expect("decode");
    let scene = build_scatter_plot(&rides, &ScatterPlotConfig::default()).expect("build");

    let mut hover = scene.hover_model();
    hover
        .on_pointer_enter(HoverEvent::new(0, 400.0, 200.0))
        .expect("enter");
    let tooltip = hover.tooltip();
    assert_eq!(tooltip.lines[0], "Marco Pantani: ITA");
    assert_eq!(tooltip.lines[1], "Year: 1995 Time: 36:50");
    assert_eq!(tooltip.lines[2], "Alleged drug use");
    assert_eq!(tooltip.attrs.get("data-year"), Some("1995"));
    // Pointer-relative placement.
    assert_eq!(tooltip.x, 405.0);
    assert_eq!(tooltip.y, 172.0);

    hover
        .on_pointer_enter(HoverEvent::new(1, 400.0, 200.0))
        .expect("enter clean rider");
    assert_eq!(hover.tooltip().lines[2], "No doping allegations");
}
