use planner_core::*;

fn receiver(power: Option<&str>, typical: Option<f64>) -> ReceiverModel {
    ReceiverModel {
        model: "AVR-X".to_string(),
        brand: "Acme".to_string(),
        power: power.map(str::to_string),
        typical_power_consumption_w: typical,
        ..Default::default()
    }
}

fn display(kind: Option<&str>, typical: Option<f64>) -> DisplayModel {
    DisplayModel {
        id: "d1".to_string(),
        display_type: kind.map(str::to_string),
        typical_power_consumption_w: typical,
        ..Default::default()
    }
}

#[test]
fn required_power_closed_form() {
    // 88 dB speaker, 3 m, 85 dB target + 3 dB headroom: 10^((88 + 20log3 - 88)/10) = 9 W
    let w = required_power_default(88.0, 3.0, 85.0);
    assert!((w - 9.0).abs() < 1e-9, "got {w}");
}

#[test]
fn max_spl_inverts_required_power() {
    for sens in [82.0, 86.5, 90.0, 94.0] {
        for dist in [1.0, 2.2, 3.0, 4.7] {
            for target in [75.0, 85.0, 105.0] {
                let w = required_power(sens, dist, target, 0.0);
                let spl = max_spl(sens, w, dist);
                assert!(
                    (spl - target).abs() < 1e-9,
                    "sens {sens} dist {dist} target {target}: spl {spl}"
                );
            }
        }
    }
}

#[test]
fn missing_inputs_give_zero() {
    assert_eq!(required_power_default(0.0, 3.0, 85.0), 0.0);
    assert_eq!(required_power_default(88.0, 0.0, 85.0), 0.0);
    assert_eq!(required_power_default(88.0, -1.0, 85.0), 0.0);
    assert_eq!(required_power_default(88.0, 3.0, 0.0), 0.0);
    assert_eq!(max_spl(88.0, 0.0, 3.0), 0.0);
    assert_eq!(max_spl(0.0, 100.0, 3.0), 0.0);
    assert_eq!(max_spl(88.0, 100.0, 0.0), 0.0);
}

#[test]
fn max_spl_example() {
    // 88 + 10log10(100) - 20log10(2) ≈ 101.98
    let spl = max_spl(88.0, 100.0, 2.0);
    assert!((spl - (108.0 - 20.0 * 2f64.log10())).abs() < 1e-9);
}

#[test]
fn room_volume_and_incomplete_rooms() {
    assert!((room_volume(&RoomDimensions::new(5.0, 6.0, 2.8)) - 84.0).abs() < 1e-9);
    assert_eq!(room_volume(&RoomDimensions::new(5.0, 6.0, 0.0)), 0.0);
    assert_eq!(room_volume(&RoomDimensions::new(-2.0, -3.0, 1.0)), 0.0);
    assert_eq!(room_volume(&RoomDimensions::new(-2.0, 3.0, 1.0)), 0.0);
    assert_eq!(room_volume(&RoomDimensions::new(2.0, 3.0, f64::INFINITY)), 0.0);
}

#[test]
fn power_rating_takes_first_number() {
    assert_eq!(parse_power_rating("125W x 7"), Some(125.0));
    assert_eq!(parse_power_rating("Rated 95.5 W/ch"), Some(95.5));
    assert_eq!(parse_power_rating("95.W"), Some(95.0));
    assert_eq!(parse_power_rating("none"), None);
    assert_eq!(parse_power_rating(""), None);
}

#[test]
fn power_draw_without_equipment_uses_fallbacks() {
    let total = estimate_total_power_draw(None, None, 5, 20.0);
    assert_eq!(total, AVR_FALLBACK_W + DISPLAY_FALLBACK_W);
}

#[test]
fn power_draw_prefers_typical_consumption() {
    let avr = receiver(Some("100W x 7"), Some(400.0));
    let proj = display(Some("Projector"), Some(250.0));
    assert_eq!(estimate_total_power_draw(Some(&avr), Some(&proj), 7, 20.0), 650.0);
}

#[test]
fn power_draw_estimates_from_rating_and_display_type() {
    let avr = receiver(Some("100W x 7"), None);
    // 7 * 20 / 0.5 + 50 = 330, plus 150 for a TV
    let tv = display(Some("OLED TV"), None);
    assert_eq!(estimate_total_power_draw(Some(&avr), Some(&tv), 7, 20.0), 480.0);

    let proj = display(Some("Projector"), None);
    assert_eq!(estimate_total_power_draw(Some(&avr), Some(&proj), 7, 20.0), 630.0);

    // per-channel draw never exceeds the rated power
    let small = receiver(Some("10W"), None);
    let other = display(None, None);
    assert_eq!(estimate_total_power_draw(Some(&small), Some(&other), 7, 20.0), 290.0);

    let unrated = receiver(None, None);
    assert_eq!(estimate_total_power_draw(Some(&unrated), Some(&other), 7, 20.0), 250.0);
}

#[test]
fn channels_driven_counts_mains_and_heights() {
    assert_eq!(channels_driven("5.1"), 5);
    assert_eq!(channels_driven("5.1.2"), 7);
    assert_eq!(channels_driven("7.1.4"), 11);
    assert_eq!(channels_driven("1.0"), 2);
    assert_eq!(channels_driven("garbage"), 2);
}

#[test]
fn oversized_configuration_tokens_saturate() {
    assert_eq!(channels_driven("4294967295.1.1"), u32::MAX);
    assert_eq!(channels_driven("4294967295.1.4294967295"), u32::MAX);
    let cfg = ChannelConfiguration::parse_lenient("4294967295.1.1");
    assert_eq!(cfg.channels_driven(), u32::MAX);
}

#[test]
fn listening_distance_uses_center_then_front_left() {
    let room = RoomDimensions::new(5.0, 6.0, 2.8);
    let adj = DistanceAdjustments::default().with(RoleGroup::Center, 0.8);
    let surround = speaker_layout(&room, "5.1", &adj);
    assert!((listening_distance(&surround) - 1.75 * 0.8).abs() < 1e-9);

    let stereo = speaker_layout(&room, "2.0", &adj);
    assert!((listening_distance(&stereo) - 1.75).abs() < 1e-9);

    assert_eq!(listening_distance(&[]), DEFAULT_LISTENING_DISTANCE_M);
}
