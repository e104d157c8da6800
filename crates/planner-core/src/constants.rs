// Shared acoustic/layout tuning constants used by the calculators and both frontends.

// Physics
pub const SPEED_OF_SOUND_MPS: f64 = 343.0; // dry air at roughly 20 °C
pub const DEFAULT_MODE_COUNT: usize = 3; // axial orders computed per dimension
pub const MAX_MODE_COUNT: usize = 64; // well past the audible bass region

// Units
pub const FEET_TO_METERS: f64 = 0.3048;
pub const METERS_TO_FEET: f64 = 3.28084;

// Listening position, as fractions of the room
pub const LP_WIDTH_FRACTION: f64 = 0.5;
pub const LP_LENGTH_FRACTION: f64 = 0.66; // measured from the front (screen) wall

/// Nominal LP distance for a role group: `min(width * w, length * l, cap)` meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseDistanceRule {
    pub width_fraction: f64,
    pub length_fraction: f64,
    pub cap_m: f64,
}

impl BaseDistanceRule {
    #[inline]
    pub fn distance(&self, width: f64, length: f64) -> f64 {
        (width * self.width_fraction)
            .min(length * self.length_fraction)
            .min(self.cap_m)
    }
}

pub const FRONT_DISTANCE: BaseDistanceRule = BaseDistanceRule {
    width_fraction: 0.35,
    length_fraction: 0.35,
    cap_m: 2.5,
};
pub const SURROUND_DISTANCE: BaseDistanceRule = BaseDistanceRule {
    width_fraction: 0.30,
    length_fraction: 0.20,
    cap_m: 2.0,
};
pub const REAR_DISTANCE: BaseDistanceRule = BaseDistanceRule {
    width_fraction: 0.25,
    length_fraction: 0.15,
    cap_m: 1.8,
};

// Azimuths from the LP, degrees, negative = left of the screen axis
pub const FRONT_ANGLE_DEG: f64 = 30.0;
pub const SURROUND_ANGLE_DEG: f64 = 110.0;
pub const REAR_ANGLE_DEG: f64 = 150.0;

// Height channels are drawn as horizontal footprints around the LP
pub const TOP_MIDDLE_X_FRACTION: f64 = 0.10; // of width
pub const TOP_FRONT_REAR_X_FRACTION: f64 = 0.15; // of width
pub const TOP_FRONT_REAR_Y_FRACTION: f64 = 0.10; // of length

// Subwoofer placeholder, fractions of (width, length)
pub const LFE_POSITION_FRACTION: [f64; 2] = [0.25, 0.05];

pub const WALL_MARGIN_M: f64 = 0.1; // markers never touch the walls

// Distance adjustment multipliers
pub const ADJUSTMENT_MIN: f64 = 0.5;
pub const ADJUSTMENT_MAX: f64 = 2.0;
pub const ADJUSTMENT_DEFAULT: f64 = 1.0;

// Auto-placement pressure zones: (peak fractions, full zone width as fraction of the dimension)
pub const FIRST_ORDER_PEAKS: &[f64] = &[0.5];
pub const FIRST_ORDER_ZONE_WIDTH: f64 = 0.15;
pub const SECOND_ORDER_PEAKS: &[f64] = &[0.25, 0.75];
pub const SECOND_ORDER_ZONE_WIDTH: f64 = 0.125;
pub const OPTIMIZER_MODE_ORDERS: usize = 2; // first two axial modes per axis
pub const OPTIMIZER_SHRINK: f64 = 0.9;
pub const OPTIMIZER_GROW: f64 = 1.1;
pub const OPTIMIZER_MIN_CHANGE: f64 = 0.01;

// Power and SPL
pub const DEFAULT_HEADROOM_DB: f64 = 3.0;
pub const DEFAULT_TARGET_SPL_DB: f64 = 85.0;
pub const DEFAULT_LISTENING_DISTANCE_M: f64 = 3.0; // used when no reference speaker exists
pub const DEFAULT_AVG_WATTS_PER_CHANNEL: f64 = 20.0;
pub const MIN_CHANNELS_DRIVEN: u32 = 2;
pub const AMP_EFFICIENCY: f64 = 0.5;
pub const AVR_IDLE_W: f64 = 50.0;
pub const AVR_FALLBACK_W: f64 = 150.0; // no receiver data at all
pub const PROJECTOR_FALLBACK_W: f64 = 300.0;
pub const TV_FALLBACK_W: f64 = 150.0;
pub const DISPLAY_FALLBACK_W: f64 = 100.0;

// Design defaults
pub const DEFAULT_EAR_HEIGHT_M: f64 = 1.0;
pub const DEFAULT_FRONT_SPEAKER_HEIGHT_M: f64 = 1.2;
pub const DEFAULT_CONFIGURATION: &str = "5.1";
pub const DEFAULT_ROOM_NAME: &str = "My Home Theater";
pub const DEFAULT_ROOM_DIMENSIONS_M: [f64; 3] = [5.0, 6.0, 2.8]; // width, length, height
