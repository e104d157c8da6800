use planner_core::*;

fn catalog() -> Catalog {
    Catalog::new(
        vec![SpeakerModel {
            model: "Studio 5".to_string(),
            brand: "Acme".to_string(),
            sensitivity: Some(88.0),
            impedance: None,
        }],
        vec![ReceiverModel {
            model: "AVR-700".to_string(),
            brand: "Acme".to_string(),
            power: Some("100W x 7".to_string()),
            ..Default::default()
        }],
        Vec::new(),
    )
}

fn design() -> DesignSnapshot {
    let mut d = DesignSnapshot::default();
    d.selected_speakers
        .insert(DesignSnapshot::FRONT_LR_KEY.to_string(), "Studio 5".to_string());
    d.selected_receiver = "AVR-700".to_string();
    d
}

#[test]
fn full_report_for_default_room() {
    let report = PlannerReport::build(&design(), &catalog());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!((report.room_volume_m3 - 84.0).abs() < 1e-9);
    assert_eq!(report.layout.len(), 7);
    assert_eq!(report.modes.length_modes.len(), 3);

    // LP to center is 1.75 m: 10^(2 log10 1.75) = 1.75^2
    assert!((report.listening_distance_m - 1.75).abs() < 1e-9);
    assert!((report.required_power_w - 1.75 * 1.75).abs() < 1e-9);
    let expected_spl = 88.0 + 20.0 - 20.0 * 1.75f64.log10();
    assert!((report.max_spl_db - expected_spl).abs() < 1e-9);

    // 5 * 20 / 0.5 + 50 for the receiver, 100 W fallback for no display
    assert_eq!(report.total_power_draw_w, 350.0);
    assert_eq!(report.channels_driven, 5);
    assert_eq!(report.reflections.len(), 3);
}

#[test]
fn unknown_equipment_reports_zeroes() {
    let report = PlannerReport::build(&DesignSnapshot::default(), &Catalog::default());
    assert_eq!(report.required_power_w, 0.0);
    assert_eq!(report.max_spl_db, 0.0);
    assert_eq!(report.total_power_draw_w, AVR_FALLBACK_W + DISPLAY_FALLBACK_W);
}

#[test]
fn manual_positions_feed_listening_distance() {
    let mut d = design();
    d.manual_speaker_positions.insert(
        "c".to_string(),
        PositionOverride {
            x: Some(2.5),
            y: Some(0.96),
        },
    );
    let report = PlannerReport::build(&d, &catalog());
    assert!((report.listening_distance_m - 3.0).abs() < 1e-9);
    assert!((report.required_power_w - 9.0).abs() < 1e-9);
}

#[test]
fn bad_inputs_become_warnings() {
    let mut d = design();
    d.room_dimensions_meters = RoomDimensions::new(5.0, 6.0, 0.0);
    d.wall_features.push(WallFeature {
        kind: WallFeatureKind::Door,
        wall: Wall::East,
        start_offset: 5.5,
        width: 0.9,
        door_swing: None,
        door_hinge_side: None,
    });
    let report = PlannerReport::build(&d, &catalog());
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[1].starts_with("wall feature #1"));
    assert_eq!(report.room_volume_m3, 0.0);
    assert!(report.reflections.is_empty());
    assert!(report.modes.height_modes.is_empty());
}

#[test]
fn volume_is_shown_in_display_unit() {
    let mut d = design();
    d.unit_system = UnitSystem::Feet;
    let report = PlannerReport::build(&d, &catalog());
    assert!((report.room_volume_display - 84.0 * 3.28084f64.powi(3)).abs() < 1e-6);
}
