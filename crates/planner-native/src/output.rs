// Plain-text tables for the terminal.

use planner_core::{
    AxialModes, DesignSnapshot, DistanceAdjustments, PlannerReport, RoleGroup, RoomAxis,
    SpeakerPlacement, Surface, UnitSystem,
};

fn unit_suffix(unit: UnitSystem) -> &'static str {
    match unit {
        UnitSystem::Meters => "m",
        UnitSystem::Feet => "ft",
    }
}

fn or_na(value: f64, unit: &str, precision: usize) -> String {
    if value > 0.0 {
        format!("{value:.precision$} {unit}")
    } else {
        "N/A".to_string()
    }
}

pub fn print_modes(modes: &AxialModes) {
    for axis in [RoomAxis::Length, RoomAxis::Width, RoomAxis::Height] {
        let list = modes.for_axis(axis);
        if list.is_empty() {
            println!("{axis:<7} (enter a dimension greater than 0)");
            continue;
        }
        let freqs: Vec<String> = list
            .iter()
            .map(|m| format!("{}: {:.1} Hz", m.order, m.frequency))
            .collect();
        println!("{axis:<7} {}", freqs.join("  "));
    }
}

pub fn print_layout(layout: &[SpeakerPlacement], unit: UnitSystem) {
    if layout.is_empty() {
        println!("(no layout)");
        return;
    }
    let suffix = unit_suffix(unit);
    println!("{:<5} {:>8} {:>8} {:>7}  note", "id", "x", "y", "angle");
    for sp in layout {
        let angle = sp
            .angle_deg
            .map(|a| format!("{a:.0}°"))
            .unwrap_or_default();
        let note = if sp.is_listening_position {
            "listening position"
        } else {
            sp.note.as_deref().unwrap_or("")
        };
        println!(
            "{:<5} {:>6.2}{suffix} {:>6.2}{suffix} {angle:>7}  {note}",
            sp.label,
            unit.meters_in_unit(sp.x),
            unit.meters_in_unit(sp.y),
        );
    }
}

pub fn print_adjustments(before: &DistanceAdjustments, after: &DistanceAdjustments) {
    for group in RoleGroup::ALL {
        let (b, a) = (before.get(group), after.get(group));
        let marker = if (a - b).abs() > f64::EPSILON { "  *" } else { "" };
        println!("{:<10} {b:.2} -> {a:.2}{marker}", group.key());
    }
}

pub fn print_report(design: &DesignSnapshot, report: &PlannerReport) {
    let unit = design.unit_system;
    let suffix = unit_suffix(unit);
    println!("== {} ({})", design.room_name, design.speaker_configuration);
    println!(
        "Room volume        {:.2} {suffix}³",
        report.room_volume_display
    );
    println!(
        "Listening distance {}",
        or_na(unit.meters_in_unit(report.listening_distance_m), suffix, 2)
    );
    println!("Required power/ch  {}", or_na(report.required_power_w, "W", 1));
    println!("Estimated max SPL  {}", or_na(report.max_spl_db, "dB", 1));
    println!("Total power draw   {}", or_na(report.total_power_draw_w, "W", 0));
    println!("Channels driven    {}", report.channels_driven);

    println!();
    print_modes(&report.modes);

    println!();
    print_layout(&report.layout, unit);

    for r in &report.reflections {
        println!();
        println!("First reflections for {}", r.speaker_label);
        for surface in Surface::ALL {
            let (a, b) = surface.plane_axes();
            match r.points.surface(surface).first() {
                Some(p) => println!(
                    "  {surface:<11} {a}={:.2} {b}={:.2}",
                    unit.meters_in_unit(p.point.x),
                    unit.meters_in_unit(p.point.y)
                ),
                None => println!("  {surface:<11} -"),
            }
        }
    }
}
