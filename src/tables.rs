/// Maps a scaled odds value (decimal odds × 10, rounded) to its base angle
/// on the wheel. The table is total over 0–50 plus 360; anything outside
/// that domain passes through as a raw angle value, which is the intended
/// fallback rather than an error.
///
/// ```
/// assert_eq!(luckysector::tables::input_to_angle(25), 135.0);
/// assert_eq!(luckysector::tables::input_to_angle(32), 180.0);
/// assert_eq!(luckysector::tables::input_to_angle(100), 100.0);
/// ```
#[inline]
pub fn input_to_angle(input: i64) -> f64 {
    match input {
        0 | 4 | 14 | 360 | 40 | 50 => 0.0,
        1 | 2 | 7 | 8 | 10 | 11 | 13 | 16 | 37 | 38 | 43 | 44 | 46 | 47 | 49 => 45.0,
        19 | 22 | 25 | 26 | 29 | 31 | 34 | 35 => 135.0,
        23 | 27 | 28 | 32 => 180.0,
        18 | 20 | 21 | 24 | 30 | 33 | 36 => 225.0,
        3 | 5 | 6 | 9 | 12 | 15 | 17 | 39 | 41 | 42 | 45 | 48 => 315.0,
        other => other as f64,
    }
}

/// Maps a 10°-aligned angle to its lucky value. Angles off the 10° grid
/// (or outside the 37-entry table) map to `None`.
///
/// The 360 key is part of the reference table and kept verbatim, even
/// though normalized angles can never reach it.
///
/// ```
/// assert_eq!(luckysector::tables::lucky_value(0.0), Some(0));
/// assert_eq!(luckysector::tables::lucky_value(140.0), Some(1));
/// assert_eq!(luckysector::tables::lucky_value(350.0), Some(15));
/// assert_eq!(luckysector::tables::lucky_value(135.0), None);
/// ```
#[inline]
pub fn lucky_value(angle: f64) -> Option<u8> {
    if angle.fract() != 0.0 {
        return None;
    }

    match angle as i64 {
        0 => Some(0),
        10 => Some(26),
        20 => Some(3),
        30 => Some(35),
        40 => Some(12),
        50 => Some(28),
        60 => Some(7),
        70 => Some(29),
        80 => Some(18),
        90 => Some(22),
        100 => Some(9),
        110 => Some(31),
        120 => Some(14),
        130 => Some(20),
        140 => Some(1),
        150 => Some(33),
        160 => Some(16),
        170 => Some(24),
        180 => Some(5),
        190 => Some(10),
        200 => Some(23),
        210 => Some(8),
        220 => Some(30),
        230 => Some(11),
        240 => Some(36),
        250 => Some(13),
        260 => Some(27),
        270 => Some(6),
        280 => Some(34),
        290 => Some(17),
        300 => Some(25),
        310 => Some(2),
        320 => Some(21),
        330 => Some(4),
        340 => Some(19),
        350 => Some(15),
        360 => Some(32),
        _ => None,
    }
}
