use luckysector::calculator::{compute_sector_pair, compute_single_sector};
use luckysector::lucky::lucky_numbers;
use luckysector::math::{normalize_angle, orientation, smallest_sector};
use luckysector::sector::{Orientation, Rotation};
use luckysector::tables::input_to_angle;

#[test]
fn test_normalize_closure() {
    // sweep across several full turns in both directions
    for i in -3600..=3600 {
        let angle = normalize_angle(i as f64 * 0.7);
        assert!((0.0..360.0).contains(&angle), "{angle} out of range");
    }
}

#[test]
fn test_determinism() {
    let first = compute_single_sector(2.5, 3.2, 2.8);
    let second = compute_single_sector(2.5, 3.2, 2.8);
    assert_eq!(first, second);

    let first = lucky_numbers(0.1, 1.9, 1.8);
    let second = lucky_numbers(0.1, 1.9, 1.8);
    assert_eq!(first, second);
}

#[test]
fn test_span_bound() {
    for start in (0..360).step_by(7) {
        for end in (0..360).step_by(11) {
            let sector = smallest_sector(start as f64, end as f64);
            assert!(sector.span <= 180.0, "span {} > 180", sector.span);
        }
    }
}

#[test]
fn test_tie_break_prefers_clockwise() {
    let sector = smallest_sector(0.0, 180.0);
    assert_eq!(sector.direction, Rotation::Clockwise);
    assert_eq!(sector.start, 0.0);
    assert_eq!(sector.end, 180.0);
    assert_eq!(sector.span, 180.0);
}

#[test]
fn test_lookup_fallback_is_identity() {
    assert_eq!(input_to_angle(100), 100.0);
    assert_eq!(input_to_angle(-7), -7.0);
    assert_eq!(input_to_angle(51), 51.0);
}

#[test]
fn test_collinear_orientation() {
    // odds 0.1, 0.4, 1.4 scale to 1, 4, 14 -> angles 45, 0, 0
    assert_eq!(orientation(45.0, 0.0, 0.0), Orientation::Collinear);

    let sector = compute_single_sector(0.1, 0.4, 1.4);
    assert_eq!(sector.direction, Rotation::Clockwise);
    assert_eq!(sector.span, 22.5);
}

#[test]
fn test_degenerate_triple_has_zero_span() {
    // odds 0.1, 0.2, 0.7 scale to 1, 2, 7 -> all three angles are 45
    let sector = compute_single_sector(0.1, 0.2, 0.7);
    assert_eq!(sector.direction, Rotation::Clockwise);
    assert_eq!(sector.start, 45.0);
    assert_eq!(sector.end, 45.0);
    assert_eq!(sector.span, 0.0);
    assert_eq!(sector.to_string(), "clockwise from 45° to 45° with angle 0°");
}

#[test]
fn test_single_sector_golden_clockwise() {
    // 2.5, 3.2, 2.8 -> scaled (25, 32, 28) -> angles (135, 180, 180)
    let sector = compute_single_sector(2.5, 3.2, 2.8);
    assert_eq!(sector.direction, Rotation::Clockwise);
    assert_eq!(sector.start, 180.0);
    assert_eq!(sector.end, 337.5);
    assert_eq!(sector.span, 157.5);
    assert_eq!(
        sector.to_string(),
        "clockwise from 180° to 338° with angle 158°"
    );
}

#[test]
fn test_single_sector_golden_counterclockwise() {
    // 0.1, 1.9, 1.8 -> scaled (1, 19, 18) -> angles (45, 135, 225), a
    // counterclockwise triple, so the shift applies before the midpoint
    let sector = compute_single_sector(0.1, 1.9, 1.8);
    assert_eq!(sector.direction, Rotation::Counterclockwise);
    assert_eq!(sector.start, 270.0);
    assert_eq!(sector.end, 45.0);
    assert_eq!(sector.span, 135.0);
    assert_eq!(
        sector.to_string(),
        "counterclockwise from 270° to 45° with angle 135°"
    );
}

#[test]
fn test_pair_matches_reversed_ordering() {
    let triples = [
        (2.5, 3.2, 2.8),
        (0.1, 1.9, 1.8),
        (1.5, 4.0, 6.0),
        (2.0, 2.0, 2.0),
        (10.0, 5.5, 1.3),
    ];

    for (home, draw, away) in triples {
        let pair = compute_sector_pair(home, draw, away);
        assert_eq!(pair.sector1, compute_single_sector(home, draw, away));
        assert_eq!(pair.sector2, compute_single_sector(away, draw, home));
    }
}

#[test]
fn test_pair_golden() {
    let pair = compute_sector_pair(0.1, 1.9, 1.8);
    assert_eq!(
        pair.sector1.to_string(),
        "counterclockwise from 270° to 45° with angle 135°"
    );
    assert_eq!(
        pair.sector2.to_string(),
        "clockwise from 45° to 180° with angle 135°"
    );
}

#[test]
fn test_lucky_numbers_golden_counterclockwise() {
    let lucky = lucky_numbers(0.1, 1.9, 1.8);

    assert_eq!(lucky.sector.direction, Rotation::Counterclockwise);
    assert_eq!(
        lucky.angles,
        vec![30.0, 20.0, 10.0, 0.0, 350.0, 340.0, 330.0, 320.0, 310.0, 300.0, 290.0, 280.0]
    );
    assert_eq!(
        lucky.values,
        [35, 3, 26, 0, 15, 19, 4, 21, 2, 25, 17, 34]
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>()
    );
    assert_eq!(
        lucky.to_string(),
        "35, 3, 26, 0, 15, 19, 4, 21, 2, 25, 17, 34"
    );
}

#[test]
fn test_lucky_numbers_golden_clockwise() {
    let lucky = lucky_numbers(2.5, 3.2, 2.8);

    assert_eq!(lucky.sector.direction, Rotation::Clockwise);
    assert_eq!(
        lucky.angles,
        vec![210.0, 220.0, 230.0, 240.0, 250.0, 260.0, 270.0, 280.0, 290.0, 300.0, 310.0, 320.0]
    );
    assert_eq!(
        lucky.values,
        [8, 30, 11, 36, 13, 27, 6, 34, 17, 25, 2, 21]
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_lucky_angles_are_normalized_tens() {
    let triples = [(2.5, 3.2, 2.8), (0.1, 1.9, 1.8), (1.5, 4.0, 6.0)];

    for (home, draw, away) in triples {
        let lucky = lucky_numbers(home, draw, away);
        assert_eq!(lucky.angles.len(), 12);
        for angle in &lucky.angles {
            assert!((0.0..360.0).contains(angle));
            assert_eq!(angle % 10.0, 0.0);
        }
        // every 10°-aligned angle in [0, 360) is covered by the table
        assert!(lucky.values.iter().all(|value| value.is_some()));
    }
}
