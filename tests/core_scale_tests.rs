use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use dataviz_rs::core::{BandScale, LinearScale, TimeScale};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 840.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.scale(original).expect("to pixel");
    let recovered = scale.invert(px).expect("from pixel");

    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn linear_scale_domain_endpoints_hit_range_endpoints() {
    let scale = LinearScale::new((0.0, 246.3), (480.0, 0.0)).expect("valid scale");

    assert_eq!(scale.scale(0.0).expect("min"), 480.0);
    assert_eq!(scale.scale(246.3).expect("max"), 0.0);
}

#[test]
fn inverted_range_plots_larger_values_higher() {
    let scale = LinearScale::new((0.0, 100.0), (480.0, 0.0)).expect("valid scale");

    let low = scale.scale(10.0).expect("low");
    let high = scale.scale(90.0).expect("high");
    assert!(high < low);
}

#[test]
fn degenerate_domains_are_rejected() {
    assert!(LinearScale::new((5.0, 5.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (100.0, 100.0)).is_err());
}

#[test]
fn time_scale_maps_domain_endpoints_onto_range() {
    let start = NaiveDate::from_ymd_opt(1947, 1, 1).expect("date");
    let end = NaiveDate::from_ymd_opt(2015, 7, 1).expect("date");
    let scale = TimeScale::new(start, end, (0.0, 840.0)).expect("valid scale");

    assert_eq!(scale.scale(start).expect("start"), 0.0);
    assert_eq!(scale.scale(end).expect("end"), 840.0);
}

#[test]
fn time_scale_round_trips_interior_dates() {
    let start = NaiveDate::from_ymd_opt(1947, 1, 1).expect("date");
    let end = NaiveDate::from_ymd_opt(2015, 7, 1).expect("date");
    let scale = TimeScale::new(start, end, (0.0, 840.0)).expect("valid scale");

    let date = NaiveDate::from_ymd_opt(1980, 6, 15).expect("date");
    let px = scale.scale(date).expect("to pixel");
    assert_eq!(scale.invert(px).expect("from pixel"), date);
}

#[test]
fn time_scale_from_dates_fits_observed_extent() {
    let dates = vec![
        NaiveDate::from_ymd_opt(1950, 6, 1).expect("date"),
        NaiveDate::from_ymd_opt(1947, 1, 1).expect("date"),
        NaiveDate::from_ymd_opt(1960, 1, 1).expect("date"),
    ];
    let scale = TimeScale::from_dates(&dates, (0.0, 100.0)).expect("fit");

    assert_eq!(scale.scale(dates[1]).expect("earliest"), 0.0);
    assert_eq!(scale.scale(dates[2]).expect("latest"), 100.0);
}

#[test]
fn band_scale_splits_range_uniformly() {
    let categories: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let bands = BandScale::new(categories, (0.0, 400.0), 0.0).expect("valid scale");

    assert_eq!(bands.bandwidth(), 100.0);
    assert_eq!(bands.band_start("a").expect("first"), 0.0);
    assert_eq!(bands.band_start("c").expect("third"), 200.0);
    assert_eq!(bands.center("a").expect("center"), 50.0);
}

#[test]
fn band_scale_rejects_unknown_categories() {
    let categories = vec!["January".to_owned()];
    let bands = BandScale::new(categories, (0.0, 120.0), 0.0).expect("valid scale");
    assert!(bands.band_start("Januar").is_err());
}
