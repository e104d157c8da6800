use planner_core::*;

#[test]
fn unit_conversions() {
    let feet = UnitSystem::Feet;
    assert!((feet.to_meters(10.0) - 3.048).abs() < 1e-12);
    assert!((feet.meters_in_unit(1.0) - 3.28084).abs() < 1e-12);
    assert_eq!(UnitSystem::Meters.to_meters(4.2), 4.2);
    assert!((feet.volume_from_cubic_meters(1.0) - 3.28084f64.powi(3)).abs() < 1e-9);
    assert_eq!(feet.toggled(), UnitSystem::Meters);

    let room = RoomDimensions::from_unit(10.0, 20.0, 8.0, feet);
    assert!((room.length - 6.096).abs() < 1e-12);
    let back = room.in_unit(feet);
    assert!((back.width - 10.0).abs() < 1e-3);
}

#[test]
fn unit_system_parses_common_spellings() {
    assert_eq!("ft".parse::<UnitSystem>().unwrap(), UnitSystem::Feet);
    assert_eq!("Meters".parse::<UnitSystem>().unwrap(), UnitSystem::Meters);
    assert_eq!(UnitSystem::Feet.to_string(), "feet");
    assert!(matches!(
        "yards".parse::<UnitSystem>(),
        Err(PlannerError::UnknownUnitSystem(_))
    ));
}

#[test]
fn room_validity() {
    assert!(RoomDimensions::default().is_valid());
    assert!(!RoomDimensions::new(5.0, 6.0, 0.0).is_valid());
    assert!(RoomDimensions::new(5.0, 6.0, 0.0).has_floor_plan());
    assert!(!RoomDimensions::new(f64::NAN, 6.0, 2.8).has_floor_plan());
}

fn door(wall: Wall, start_offset: f64, width: f64) -> WallFeature {
    WallFeature {
        kind: WallFeatureKind::Door,
        wall,
        start_offset,
        width,
        door_swing: Some(DoorSwing::InwardLeft),
        door_hinge_side: Some(HingeSide::Left),
    }
}

#[test]
fn wall_feature_must_fit_its_wall() {
    let room = RoomDimensions::new(4.0, 6.0, 2.8);
    assert!(door(Wall::North, 1.0, 0.9).validate(&room).is_ok());
    // east/west run along the 6 m length
    assert!(door(Wall::East, 4.5, 1.2).validate(&room).is_ok());
    assert!(matches!(
        door(Wall::South, 3.5, 0.9).validate(&room),
        Err(PlannerError::FeatureExceedsWall { .. })
    ));
    assert!(matches!(
        door(Wall::West, -0.1, 0.9).validate(&room),
        Err(PlannerError::InvalidFeatureSize { .. })
    ));
    assert!(matches!(
        door(Wall::West, 1.0, 0.0).validate(&room),
        Err(PlannerError::InvalidFeatureSize { .. })
    ));
}

#[test]
fn wall_feature_json_shape() {
    let json = r#"{"kind":"window","wall":"east","startOffset":1.5,"width":1.2}"#;
    let f: WallFeature = serde_json::from_str(json).unwrap();
    assert_eq!(f.kind, WallFeatureKind::Window);
    assert_eq!(f.wall, Wall::East);
    assert!(f.door_swing.is_none());
    let out = serde_json::to_value(&f).unwrap();
    assert!(out.get("doorSwing").is_none());
}
