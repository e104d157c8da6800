use planner_core::*;

#[test]
fn axial_frequency_matches_half_wavelength() {
    let room = RoomDimensions::new(5.0, 6.0, 2.8);
    let modes = axial_modes(&room);
    assert_eq!(modes.length_modes.len(), DEFAULT_MODE_COUNT);
    assert!((modes.length_modes[0].frequency - 343.0 / 12.0).abs() < 1e-9);
    assert!((modes.width_modes[0].frequency - 34.3).abs() < 1e-9);
    assert!((modes.height_modes[0].frequency - 61.25).abs() < 1e-9);
}

#[test]
fn higher_orders_are_integer_multiples() {
    let modes = modes_for_dimension(4.2, RoomAxis::Width, 5);
    let f1 = modes[0].frequency;
    for m in &modes {
        assert_eq!(m.dimension_name, RoomAxis::Width);
        assert!(
            (m.frequency - f1 * m.order as f64).abs() < 1e-9,
            "order {} is not a multiple of the fundamental",
            m.order
        );
    }
    assert_eq!(modes.iter().map(|m| m.order).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
}

#[test]
fn huge_counts_are_capped() {
    assert_eq!(modes_for_dimension(5.0, RoomAxis::Width, usize::MAX).len(), MAX_MODE_COUNT);
    assert_eq!(modes_for_dimension(5.0, RoomAxis::Width, MAX_MODE_COUNT + 1).len(), MAX_MODE_COUNT);
    assert!(modes_for_dimension(5.0, RoomAxis::Width, 0).is_empty());
}

#[test]
fn non_positive_dimensions_yield_no_modes() {
    assert!(modes_for_dimension(0.0, RoomAxis::Length, 3).is_empty());
    assert!(modes_for_dimension(-2.0, RoomAxis::Length, 3).is_empty());
    assert!(modes_for_dimension(f64::NAN, RoomAxis::Length, 3).is_empty());

    let modes = axial_modes(&RoomDimensions::new(5.0, 0.0, 2.8));
    assert!(modes.length_modes.is_empty());
    assert_eq!(modes.width_modes.len(), 3);
    assert_eq!(modes.height_modes.len(), 3);
}

#[test]
fn shorter_dimension_has_higher_fundamental() {
    let mut prev = f64::INFINITY;
    for tenths in 10..=100 {
        let f = axial_frequency(tenths as f64 / 10.0, 1);
        assert!(f < prev, "fundamental not decreasing at {tenths}");
        prev = f;
    }
}

#[test]
fn sorted_by_frequency_merges_all_axes() {
    let modes = axial_modes(&RoomDimensions::new(5.0, 6.0, 2.8));
    let all = modes.sorted_by_frequency();
    assert_eq!(all.len(), 9);
    assert!(all.windows(2).all(|w| w[0].frequency <= w[1].frequency));
    assert_eq!(all[0].dimension_name, RoomAxis::Length);
}

#[test]
fn relative_pressure_peaks_at_walls_and_nulls_mid_room() {
    let d = 6.0;
    assert!((relative_pressure(0.0, d, 1) - 1.0).abs() < 1e-12);
    assert!((relative_pressure(d, d, 1) - 1.0).abs() < 1e-12);
    assert!(relative_pressure(d / 2.0, d, 1) < 1e-12);
    assert!((relative_pressure(d / 2.0, d, 2) - 1.0).abs() < 1e-12);
    assert!(relative_pressure(d / 4.0, d, 2) < 1e-12);
    assert_eq!(relative_pressure(1.0, 0.0, 1), 0.0);
    assert_eq!(relative_pressure(1.0, d, 0), 0.0);
}

#[test]
fn modes_serialize_with_camel_case_keys() {
    let modes = axial_modes(&RoomDimensions::new(5.0, 6.0, 2.8));
    let json = serde_json::to_value(&modes).unwrap();
    assert_eq!(json["lengthModes"][0]["dimensionName"], "Length");
    assert_eq!(json["heightModes"][2]["order"], 3);
}
