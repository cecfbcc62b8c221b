use dataviz_rs::core::color::{BLUES_8, CATEGORY10, interpolate_rd_yl_bu};
use dataviz_rs::core::{Color, OrdinalScale, SequentialScale, ThresholdScale};

#[test]
fn threshold_scale_builds_n_minus_one_boundaries() {
    let scale = ThresholdScale::equal_bins(2.6, 75.1, BLUES_8.to_vec()).expect("valid scale");

    let bounds = scale.bin_lower_bounds();
    assert_eq!(bounds.len(), 8);
    assert_eq!(bounds[0], 2.6);
    let bin_width = (75.1 - 2.6) / 8.0;
    assert!((bounds[1] - (2.6 + bin_width)).abs() <= 1e-9);
}

#[test]
fn threshold_scale_assigns_every_bin_including_the_last() {
    let colors = vec![
        Color::from_rgb8(0, 0, 0),
        Color::from_rgb8(128, 128, 128),
        Color::from_rgb8(255, 255, 255),
    ];
    let scale = ThresholdScale::equal_bins(0.0, 30.0, colors.clone()).expect("valid scale");

    assert_eq!(scale.color_for(5.0).expect("first bin"), colors[0]);
    assert_eq!(scale.color_for(15.0).expect("middle bin"), colors[1]);
    // The domain maximum falls in the last bin, never past the color list.
    assert_eq!(scale.color_for(30.0).expect("last bin"), colors[2]);
    assert_eq!(scale.color_for(99.0).expect("clamped"), colors[2]);
}

#[test]
fn threshold_boundary_values_open_the_next_bin() {
    let colors = vec![Color::from_rgb8(0, 0, 0), Color::from_rgb8(255, 255, 255)];
    let scale = ThresholdScale::equal_bins(0.0, 10.0, colors.clone()).expect("valid scale");

    assert_eq!(scale.color_for(4.999).expect("below"), colors[0]);
    assert_eq!(scale.color_for(5.0).expect("at boundary"), colors[1]);
}

#[test]
fn sequential_scale_supports_reversed_domains() {
    let scale = SequentialScale::new((5.0, -7.0), interpolate_rd_yl_bu).expect("valid scale");

    // The domain start (warmest) takes the red end of the ramp.
    let warm = scale.color_for(5.0).expect("warm end");
    let cold = scale.color_for(-7.0).expect("cold end");
    assert_eq!(warm.to_hex(), "#a50026");
    assert_eq!(cold.to_hex(), "#313695");
}

#[test]
fn sequential_scale_clamps_out_of_domain_values() {
    let scale = SequentialScale::new((0.0, 1.0), interpolate_rd_yl_bu).expect("valid scale");
    assert_eq!(
        scale.color_for(42.0).expect("clamped high").to_hex(),
        "#313695"
    );
}

#[test]
fn ordinal_scale_assigns_palette_in_insertion_order() {
    let scale = OrdinalScale::new(
        [
            "No doping allegations".to_owned(),
            "Doping allegations".to_owned(),
        ],
        &CATEGORY10,
    )
    .expect("valid scale");

    assert_eq!(
        scale.color_for("No doping allegations"),
        Some(CATEGORY10[0])
    );
    assert_eq!(scale.color_for("Doping allegations"), Some(CATEGORY10[1]));
    assert_eq!(scale.color_for("unknown"), None);

    let order: Vec<&str> = scale.categories().map(|(label, _)| label).collect();
    assert_eq!(order, ["No doping allegations", "Doping allegations"]);
}

#[test]
fn ordinal_scale_cycles_a_short_palette() {
    let palette = [Color::from_rgb8(1, 1, 1), Color::from_rgb8(2, 2, 2)];
    let scale = OrdinalScale::new(
        ["a".to_owned(), "b".to_owned(), "c".to_owned()],
        &palette,
    )
    .expect("valid scale");

    assert_eq!(scale.color_for("c"), Some(palette[0]));
}
