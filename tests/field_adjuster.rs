//! Host-level tests for single-field adjustment.

use station_clock::field_adjuster::EPOCH_YEAR;
use station_clock::{
    AdjustableField, CivilTime, Direction, EpochSeconds, compose, delta, saturating_delta,
};

const DAY: i64 = 86_400;
const SWEEP_STRIDE: usize = 3_987_659;

fn at(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> EpochSeconds {
    compose(year, month, day, hour, minute, second).expect("valid test date")
}

fn step(instant: EpochSeconds, field: AdjustableField, direction: Direction) -> CivilTime {
    let offset = saturating_delta(instant, field, direction);
    instant
        .checked_add_signed(offset)
        .expect("saturating_delta stays in range")
        .civil()
}

#[test]
fn time_of_day_fields_step_by_their_span() {
    let instant = at(2023, 6, 15, 8, 30, 20);
    let civil = instant.civil();
    assert_eq!(delta(&civil, AdjustableField::Second, Direction::Increment), 1);
    assert_eq!(delta(&civil, AdjustableField::Second, Direction::Decrement), -1);
    assert_eq!(delta(&civil, AdjustableField::Minute, Direction::Increment), 60);
    assert_eq!(delta(&civil, AdjustableField::Minute, Direction::Decrement), -60);
    assert_eq!(delta(&civil, AdjustableField::Hour, Direction::Increment), 3_600);
    assert_eq!(delta(&civil, AdjustableField::Hour, Direction::Decrement), -3_600);
    assert_eq!(delta(&civil, AdjustableField::Day, Direction::Increment), DAY);
    assert_eq!(delta(&civil, AdjustableField::Day, Direction::Decrement), -DAY);
}

#[test]
fn seconds_wrap_without_touching_minutes() {
    let up = step(at(2023, 6, 15, 8, 30, 59), AdjustableField::Second, Direction::Increment);
    assert_eq!((up.hour, up.minute, up.second), (8, 30, 0));

    let down = step(at(2023, 6, 15, 8, 30, 0), AdjustableField::Second, Direction::Decrement);
    assert_eq!((down.hour, down.minute, down.second), (8, 30, 59));
}

#[test]
fn minutes_and_hours_wrap_in_place() {
    let civil = at(2023, 6, 15, 23, 59, 10).civil();
    assert_eq!(delta(&civil, AdjustableField::Minute, Direction::Increment), -59 * 60);
    assert_eq!(delta(&civil, AdjustableField::Hour, Direction::Increment), -23 * 3_600);

    let midnight = at(2023, 6, 15, 0, 0, 10);
    let down = step(midnight, AdjustableField::Hour, Direction::Decrement);
    assert_eq!((down.day, down.hour, down.minute), (15, 23, 0));
    let down = step(midnight, AdjustableField::Minute, Direction::Decrement);
    assert_eq!((down.day, down.hour, down.minute), (15, 0, 59));
}

#[test]
fn day_wraps_at_end_of_31_day_month() {
    let civil = step(at(2024, 1, 31, 10, 0, 0), AdjustableField::Day, Direction::Increment);
    assert_eq!((civil.year, civil.month, civil.day, civil.hour), (2024, 1, 1, 10));
}

#[test]
fn day_wraps_on_leap_day_within_february() {
    let instant = at(2024, 2, 29, 10, 0, 0);
    assert_eq!(
        delta(&instant.civil(), AdjustableField::Day, Direction::Increment),
        -28 * DAY
    );
    let civil = step(instant, AdjustableField::Day, Direction::Increment);
    assert_eq!((civil.year, civil.month, civil.day, civil.hour), (2024, 2, 1, 10));
}

#[test]
fn day_28_is_last_day_of_common_february() {
    let civil = step(at(2023, 2, 28, 0, 0, 0), AdjustableField::Day, Direction::Increment);
    assert_eq!((civil.month, civil.day), (2, 1));

    let leap = step(at(2024, 2, 28, 0, 0, 0), AdjustableField::Day, Direction::Increment);
    assert_eq!((leap.month, leap.day), (2, 29));
}

#[test]
fn day_decrement_wraps_to_last_day() {
    let civil = step(at(2023, 4, 1, 7, 0, 0), AdjustableField::Day, Direction::Decrement);
    assert_eq!((civil.month, civil.day, civil.hour), (4, 30, 7));

    let civil = step(at(2024, 2, 1, 7, 0, 0), AdjustableField::Day, Direction::Decrement);
    assert_eq!((civil.month, civil.day), (2, 29));
}

#[test]
fn month_increment_adds_current_month_length() {
    let civil = at(2024, 2, 15, 0, 0, 0).civil();
    assert_eq!(delta(&civil, AdjustableField::Month, Direction::Increment), 29 * DAY);

    let up = step(at(2023, 4, 15, 6, 0, 0), AdjustableField::Month, Direction::Increment);
    assert_eq!((up.year, up.month, up.day, up.hour), (2023, 5, 15, 6));
}

#[test]
fn month_increment_overflows_short_following_month() {
    // Jan 31 plus 31 days lands in March.
    let civil = step(at(2024, 1, 31, 0, 0, 0), AdjustableField::Month, Direction::Increment);
    assert_eq!((civil.month, civil.day), (3, 2));
}

/// December steps back over every other month of its own year (-334 days, -335 in a leap
/// year) and lands on January 15th. Subtracting the whole year's length would leave the
/// month on December, so the wrap target wins over the year-length arithmetic.
#[test]
fn december_increment_wraps_to_january_of_same_year() {
    let common = at(2023, 12, 15, 8, 30, 0);
    assert_eq!(
        delta(&common.civil(), AdjustableField::Month, Direction::Increment),
        -334 * DAY
    );
    let civil = step(common, AdjustableField::Month, Direction::Increment);
    assert_eq!(
        (civil.year, civil.month, civil.day, civil.hour, civil.minute),
        (2023, 1, 15, 8, 30)
    );

    let leap = at(2024, 12, 15, 8, 30, 0);
    assert_eq!(
        delta(&leap.civil(), AdjustableField::Month, Direction::Increment),
        -335 * DAY
    );
    let civil = step(leap, AdjustableField::Month, Direction::Increment);
    assert_eq!((civil.year, civil.month, civil.day), (2024, 1, 15));
}

#[test]
fn month_decrement_uses_previous_month_length() {
    let civil = at(2024, 3, 15, 0, 0, 0).civil();
    assert_eq!(delta(&civil, AdjustableField::Month, Direction::Decrement), -29 * DAY);

    let down = step(at(2023, 1, 15, 8, 30, 0), AdjustableField::Month, Direction::Decrement);
    assert_eq!((down.year, down.month, down.day), (2022, 12, 15));
}

#[test]
fn year_step_length_follows_current_year() {
    let common = at(2023, 6, 1, 0, 0, 0).civil();
    assert_eq!(delta(&common, AdjustableField::Year, Direction::Increment), 364 * DAY);
    assert_eq!(delta(&common, AdjustableField::Year, Direction::Decrement), -364 * DAY);

    let leap = at(2024, 6, 1, 0, 0, 0).civil();
    assert_eq!(delta(&leap, AdjustableField::Year, Direction::Increment), 365 * DAY);
    assert_eq!(delta(&leap, AdjustableField::Year, Direction::Decrement), -365 * DAY);
}

/// The fixed 364/365-day step does not track the target year's length, so the landing
/// date drifts off the starting month and day.
#[test]
fn year_steps_drift_the_date() {
    let up = step(at(2023, 6, 1, 12, 0, 0), AdjustableField::Year, Direction::Increment);
    assert_eq!((up.year, up.month, up.day, up.hour), (2024, 5, 30, 12));

    let up = step(at(2024, 6, 1, 12, 0, 0), AdjustableField::Year, Direction::Increment);
    assert_eq!((up.year, up.month, up.day), (2025, 6, 1));

    let down = step(at(2024, 3, 1, 12, 0, 0), AdjustableField::Year, Direction::Decrement);
    assert_eq!((down.year, down.month, down.day), (2023, 3, 2));

    let down = step(at(2023, 6, 1, 12, 0, 0), AdjustableField::Year, Direction::Decrement);
    assert_eq!((down.year, down.month, down.day), (2022, 6, 2));

    let leap_day = step(at(2024, 2, 29, 9, 0, 0), AdjustableField::Year, Direction::Increment);
    assert_eq!((leap_day.year, leap_day.month, leap_day.day, leap_day.hour), (2025, 2, 28, 9));
}

#[test]
fn year_increment_from_january_first_of_common_year_stays_in_year() {
    let civil = step(at(2023, 1, 1, 0, 0, 0), AdjustableField::Year, Direction::Increment);
    assert_eq!((civil.year, civil.month, civil.day), (2023, 12, 31));
}

#[test]
fn year_decrement_at_1970_is_refused() {
    for instant in [at(1970, 1, 1, 0, 0, 0), at(1970, 7, 4, 12, 0, 0), at(1970, 12, 31, 23, 59, 59)] {
        let civil = instant.civil();
        assert_eq!(civil.year, EPOCH_YEAR);
        assert_eq!(delta(&civil, AdjustableField::Year, Direction::Decrement), 0);
        assert_eq!(saturating_delta(instant, AdjustableField::Year, Direction::Decrement), 0);
    }
}

#[test]
fn saturates_at_epoch_origin() {
    let origin = EpochSeconds::EPOCH;
    assert_eq!(saturating_delta(origin, AdjustableField::Month, Direction::Decrement), 0);
    assert_eq!(saturating_delta(origin, AdjustableField::Year, Direction::Decrement), 0);
    // Wrapping fields move forward inside the same unit, so they are still allowed.
    assert_eq!(saturating_delta(origin, AdjustableField::Second, Direction::Decrement), 59);
    assert_eq!(saturating_delta(origin, AdjustableField::Day, Direction::Decrement), 30 * DAY);
}

#[test]
fn saturates_at_end_of_counter() {
    let last = EpochSeconds::MAX;
    for field in AdjustableField::ALL {
        assert_eq!(saturating_delta(last, field, Direction::Increment), 0, "{field:?}");
    }
    assert_eq!(saturating_delta(last, AdjustableField::Second, Direction::Decrement), -1);
}

#[test]
fn increment_then_decrement_returns_to_start() {
    for seconds in (0..4_000_000_000_u32).step_by(SWEEP_STRIDE) {
        let start = EpochSeconds(seconds);
        let civil = start.civil();
        for field in AdjustableField::ALL {
            if !steps_cancel(start, field) {
                continue;
            }
            let direction = Direction::Increment;
            let up = saturating_delta(start, field, direction);
            assert_ne!(up, 0, "{field:?} at {civil}");
            let moved = start.checked_add_signed(up).expect("in range");
            let down = saturating_delta(moved, field, direction.reverse());
            assert_eq!(up + down, 0, "{field:?} at {civil}");
            assert_eq!(moved.seconds_since(start), up);
        }
    }
}

#[test]
fn increment_changes_only_the_target_field() {
    for seconds in (0..4_000_000_000_u32).step_by(SWEEP_STRIDE) {
        let start = EpochSeconds(seconds);
        let civil = start.civil();
        for field in [
            AdjustableField::Second,
            AdjustableField::Minute,
            AdjustableField::Hour,
            AdjustableField::Day,
        ] {
            let after = step(start, field, Direction::Increment);
            for other in AdjustableField::ALL {
                if other != field {
                    assert_eq!(
                        other.value(&after),
                        other.value(&civil),
                        "{field:?} changed {other:?} at {civil}"
                    );
                }
            }
        }
    }
}

/// Whether an increment of `field` at `start` is undone by the following decrement.
///
/// Not at a wrap point, not spilling the day of the month, and for the year, landing in
/// a later year with the same leap status so both steps have the same length.
fn steps_cancel(start: EpochSeconds, field: AdjustableField) -> bool {
    let civil = start.civil();
    match field {
        AdjustableField::Second => civil.second != 59,
        AdjustableField::Minute => civil.minute != 59,
        AdjustableField::Hour => civil.hour != 23,
        AdjustableField::Day => civil.day != civil.days_in_month(),
        AdjustableField::Month => civil.month != 12 && civil.day <= 28,
        AdjustableField::Year => {
            let landed = start
                .checked_add_signed(delta(&civil, field, Direction::Increment))
                .expect("in range")
                .civil();
            landed.year > civil.year && landed.is_leap_year() == civil.is_leap_year()
        }
    }
}
