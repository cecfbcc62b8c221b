use dataviz_rs::charts::heat_map::{HeatMapConfig, build_heat_map};
use dataviz_rs::data::temperature::GlobalTemperature;
use dataviz_rs::interaction::HoverEvent;

const READINGS: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    {"year": 1753, "month": 1, "variance": -6.1},
    {"year": 1753, "month": 2, "variance": -1.9},
    {"year": 1900, "month": 12, "variance": 0.4},
    {"year": 2015, "month": 6, "variance": 1.2}
  ]
}"#;

fn dataset() -> GlobalTemperature {
    GlobalTemperature::from_json_str(READINGS).expect("decode")
}

#[test]
fn one_cell_per_reading() {
    let scene = build_heat_map(&dataset(), &HeatMapConfig::default()).expect("build");

    assert_eq!(scene.mark_count(), 4);
    assert_eq!(scene.frame.class_count("cell"), 4);
    scene.validate().expect("valid frame");
}

#[test]
fn cells_carry_zero_based_month_year_and_temperature() {
    let scene = build_heat_map(&dataset(), &HeatMapConfig::default()).expect("build");

    let first = &scene.frame.rects[0];
    assert_eq!(first.attrs.get("data-month"), Some("0"));
    assert_eq!(first.attrs.get("data-year"), Some("1753"));
    assert_eq!(first.attrs.get("data-temp"), Some("2.56"));
}

#[test]
fn tooltip_reads_rounded_temperature_and_variance() {
    let scene = build_heat_map(&dataset(), &HeatMapConfig::default()).expect("build");

    let mut hover = scene.hover_model();
    hover
        .on_pointer_enter(HoverEvent::new(0, 300.0, 150.0))
        .expect("enter");
    let tooltip = hover.tooltip();
    assert_eq!(tooltip.lines[0], "1753 - January");
    assert_eq!(tooltip.lines[1], "2.6\u{2103}");
    assert_eq!(tooltip.lines[2], "-6.1\u{2103}");
    assert_eq!(tooltip.attrs.get("data-year"), Some("1753"));
}

#[test]
fn january_band_sits_at_the_top_of_the_plot() {
    let config = HeatMapConfig::default();
    let scene = build_heat_map(&dataset(), &config).expect("build");

    // Inner height is 750 - 80 - 100 = 570; twelve uniform bands.
    let january = &scene.frame.rects[0];
    assert_eq!(january.y, config.margin.top);
    assert_eq!(january.height, 570.0 / 12.0);

    let february = &scene.frame.rects[1];
    assert_eq!(february.y, config.margin.top + 570.0 / 12.0);
}

#[test]
fn cell_fill_is_translucent() {
    let config = HeatMapConfig::default();
    let scene = build_heat_map(&dataset(), &config).expect("build");
    assert_eq!(scene.frame.rects[0].fill.alpha, config.cell_opacity);
}

#[test]
fn legend_draws_the_configured_bin_count_with_lower_bound_labels() {
    let config = HeatMapConfig::default();
    let scene = build_heat_map(&dataset(), &config).expect("build");

    assert_eq!(scene.frame.class_count("legend-item"), config.legend_bins);
    let first_label = scene
        .frame
        .texts
        .iter()
        .find(|text| text.class.as_deref() == Some("legend-label"))
        .expect("legend label");
    // Coldest bin lower bound: 8.66 + (-6.1) = 2.56, shown to one decimal.
    assert_eq!(first_label.text, "2.6");
}

#[test]
fn out_of_range_month_is_rejected() {
    let bad = GlobalTemperature::from_json_str(
        r#"{"baseTemperature": 8.66, "monthlyVariance": [
            {"year": 1753, "month": 13, "variance": 0.1},
            {"year": 1754, "month": 1, "variance": 0.3}
        ]}"#,
    )
    .expect("decode");
    assert!(build_heat_map(&bad, &HeatMapConfig::default()).is_err());
}
