use planner_core::*;

fn room() -> RoomDimensions {
    RoomDimensions::new(5.0, 6.0, 2.8)
}

#[test]
fn pressure_zones_by_order() {
    let d = 6.0;
    assert!(is_in_pressure_zone(3.0, d, 1));
    assert!(is_in_pressure_zone(3.4, d, 1));
    assert!(!is_in_pressure_zone(3.5, d, 1));
    assert!(is_in_pressure_zone(1.5, d, 2));
    assert!(is_in_pressure_zone(4.5, d, 2));
    assert!(!is_in_pressure_zone(3.0, d, 2));
    assert!(!is_in_pressure_zone(3.0, d, 3));
}

#[test]
fn nudge_shrinks_then_grows_at_lower_bound() {
    assert_eq!(nudged_multiplier(1.0), Some(0.9));
    assert_eq!(nudged_multiplier(2.0), Some(1.8));
    assert_eq!(nudged_multiplier(0.5), Some(0.55));
}

#[test]
fn centered_speaker_is_nudged_ten_percent() {
    // the center always sits at half the width, in the first width mode's zone
    let adj = DistanceAdjustments::default();
    let layout = speaker_layout(&room(), "3.0", &adj);
    let out = auto_optimize_placement(&room(), &layout, &adj);
    assert!((out.get(RoleGroup::Center) - 0.9).abs() < 1e-12);
    assert_eq!(out.get(RoleGroup::Front), 1.0);
}

#[test]
fn each_offending_speaker_nudges_its_group() {
    let adj = DistanceAdjustments::default();
    let layout = speaker_layout(&room(), "5.1", &adj);
    let out = auto_optimize_placement(&room(), &layout, &adj);
    assert!((out.get(RoleGroup::Center) - 0.9).abs() < 1e-12);
    // SL and SR both sit in second-order width zones
    assert!((out.get(RoleGroup::Surround) - 0.81).abs() < 1e-12);
    assert_eq!(out.get(RoleGroup::Front), 1.0);
    assert_eq!(adj, DistanceAdjustments::default(), "input must be untouched");
}

#[test]
fn heights_and_subwoofer_are_never_moved() {
    let adj = DistanceAdjustments::default();
    let layout = speaker_layout(&room(), "7.1.4", &adj);
    let out = auto_optimize_placement(&room(), &layout, &adj);
    for group in [RoleGroup::TopFront, RoleGroup::TopMiddle, RoleGroup::TopRear] {
        assert_eq!(out.get(group), 1.0);
    }
}

#[test]
fn results_stay_in_range() {
    for &start in &[0.5, 0.52, 0.75, 1.0, 1.5, 2.0] {
        let adj = DistanceAdjustments::default()
            .with(RoleGroup::Center, start)
            .with(RoleGroup::Surround, start);
        let layout = speaker_layout(&room(), "7.1", &adj);
        let out = auto_optimize_placement(&room(), &layout, &adj);
        for group in RoleGroup::ALL {
            let v = out.get(group);
            assert!(
                (ADJUSTMENT_MIN..=ADJUSTMENT_MAX).contains(&v),
                "{} = {v} from start {start}",
                group.key()
            );
        }
    }
}

#[test]
fn out_of_range_input_is_still_nudged() {
    let adj: DistanceAdjustments = serde_json::from_str(r#"{"center":10.0}"#).unwrap();
    let layout = speaker_layout(&room(), "3.0", &adj);
    let out = auto_optimize_placement(&room(), &layout, &adj);
    assert!((out.get(RoleGroup::Center) - 1.8).abs() < 1e-12);
}

#[test]
fn invalid_inputs_return_copy() {
    let adj = DistanceAdjustments::default().with(RoleGroup::Center, 1.3);
    let layout = speaker_layout(&room(), "5.1", &adj);
    let flat = RoomDimensions::new(5.0, 6.0, 0.0);
    assert_eq!(auto_optimize_placement(&flat, &layout, &adj), adj);
    assert_eq!(auto_optimize_placement(&room(), &[], &adj), adj);
    let no_lp: Vec<_> = layout.into_iter().filter(|sp| !sp.is_listening_position).collect();
    assert_eq!(auto_optimize_placement(&room(), &no_lp, &adj), adj);
}
