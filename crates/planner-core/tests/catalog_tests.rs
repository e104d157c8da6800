use planner_core::*;

const CATALOG: &str = r#"{
    "speakers": [
        {"model": "Studio 5", "brand": "Acme", "sensitivity": 88.0, "impedance": 8},
        {"model": "Studio 5", "brand": "Dupe", "sensitivity": 80.0},
        {"model": "Tiny", "brand": "Acme"}
    ],
    "receivers": [
        {"model": "AVR-700", "brand": "Acme", "power": "100W x 7", "channels": 7}
    ],
    "displays": [
        {"id": "proj-1", "model": "Beam", "brand": "Acme", "type": "Projector"}
    ]
}"#;

#[test]
fn combined_catalog_lookups() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    assert_eq!(catalog.speakers().len(), 3);
    let studio = catalog.speaker("Studio 5").unwrap();
    assert_eq!(studio.brand, "Acme", "first record wins on duplicate models");
    assert_eq!(studio.sensitivity, Some(88.0));
    assert_eq!(catalog.speaker("Tiny").unwrap().sensitivity, None);
    assert_eq!(catalog.receiver("AVR-700").unwrap().power.as_deref(), Some("100W x 7"));
    assert_eq!(
        catalog.display("proj-1").unwrap().display_type.as_deref(),
        Some("Projector")
    );
    assert!(catalog.speaker("missing").is_none());
    assert!(catalog.display("").is_none());
}

#[test]
fn separate_catalog_files() {
    let catalog = Catalog::from_json_files(
        r#"{"speakers":[{"model":"A","brand":"B","sensitivity":90}]}"#,
        r#"{"receivers":[]}"#,
        r#"{}"#,
    )
    .unwrap();
    assert_eq!(catalog.speaker("A").unwrap().sensitivity, Some(90.0));
    assert!(catalog.receivers().is_empty());
    assert!(catalog.displays().is_empty());
    assert!(!catalog.is_empty());
}

#[test]
fn catalog_survives_serde_round_trip() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    let back: Catalog = serde_json::from_str(&json).unwrap();
    assert_eq!(back.speaker("Tiny").unwrap().brand, "Acme");
    assert!(Catalog::default().is_empty());
}

#[test]
fn malformed_catalog_is_an_error() {
    assert!(matches!(
        Catalog::from_json(r#"{"speakers": 3}"#),
        Err(PlannerError::Json(_))
    ));
}
