use chrono::NaiveDate;
use rphasetracker::core::calendar::{DayBlocks, WorkCalendar};
use rphasetracker::errors::AppError;
use std::collections::HashSet;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn cal() -> WorkCalendar {
    WorkCalendar::new(DayBlocks::default(), HashSet::new())
}

fn cal_with_holidays(days: &[NaiveDate]) -> WorkCalendar {
    WorkCalendar::new(DayBlocks::default(), days.iter().copied().collect())
}

// 2026-03-02 is a Monday; 2026-03-06 a Friday; 2026-03-07/08 the weekend.

#[test]
fn test_full_day_fills_both_blocks() {
    // 8 hours from opening: morning 8-12 plus afternoon 13-17
    let (end_date, end_hour) = cal().project_end(d(2026, 3, 4), 8, 8).unwrap();
    assert_eq!(end_date, d(2026, 3, 4));
    assert_eq!(end_hour, 17);
}

#[test]
fn test_friday_afternoon_spills_to_monday() {
    let (end_date, end_hour) = cal().project_end(d(2026, 3, 6), 16, 2).unwrap();
    assert_eq!(end_date, d(2026, 3, 9));
    assert_eq!(end_hour, 9);
}

#[test]
fn test_duration_spanning_lunch_resumes_at_13() {
    // 10-12 consumes 2 hours, the third lands after the gap
    let (end_date, end_hour) = cal().project_end(d(2026, 3, 4), 10, 3).unwrap();
    assert_eq!(end_date, d(2026, 3, 4));
    assert_eq!(end_hour, 14);
}

#[test]
fn test_start_inside_lunch_gap_advances_to_13() {
    let (end_date, end_hour) = cal().project_end(d(2026, 3, 4), 12, 2).unwrap();
    assert_eq!(end_date, d(2026, 3, 4));
    assert_eq!(end_hour, 15);
}

#[test]
fn test_start_before_opening_clamps_to_8() {
    let (end_date, end_hour) = cal().project_end(d(2026, 3, 4), 5, 2).unwrap();
    assert_eq!(end_date, d(2026, 3, 4));
    assert_eq!(end_hour, 10);
}

#[test]
fn test_start_after_closing_rolls_to_next_day() {
    let (end_date, end_hour) = cal().project_end(d(2026, 3, 4), 18, 1).unwrap();
    assert_eq!(end_date, d(2026, 3, 5));
    assert_eq!(end_hour, 9);
}

#[test]
fn test_weekend_start_moves_to_monday() {
    // Saturday start: the hour is kept, the date skips to the next working day
    let (end_date, end_hour) = cal().project_end(d(2026, 3, 7), 9, 2).unwrap();
    assert_eq!(end_date, d(2026, 3, 9));
    assert_eq!(end_hour, 11);
}

#[test]
fn test_holiday_is_skipped() {
    // Thursday 2026-03-05 is a holiday: Wed 16-17 leaves one hour that
    // lands on Friday morning
    let cal = cal_with_holidays(&[d(2026, 3, 5)]);
    let (end_date, end_hour) = cal.project_end(d(2026, 3, 4), 16, 2).unwrap();
    assert_eq!(end_date, d(2026, 3, 6));
    assert_eq!(end_hour, 9);
}

#[test]
fn test_multi_day_projection_ends_at_noon_boundary() {
    // 20 hours from Monday opening: 8 + 8 + 4 → Wednesday noon
    let (end_date, end_hour) = cal().project_end(d(2026, 3, 2), 8, 20).unwrap();
    assert_eq!(end_date, d(2026, 3, 4));
    assert_eq!(end_hour, 12);
}

#[test]
fn test_end_never_lands_inside_lunch_gap() {
    let cal = cal();
    for dur in 1..=16 {
        let (_, end_hour) = cal.project_end(d(2026, 3, 2), 8, dur).unwrap();
        assert!(
            end_hour <= 12 || end_hour >= 13,
            "duration {} ended inside the lunch gap (hour {})",
            dur,
            end_hour
        );
        assert!(end_hour <= 17, "duration {} ended past closing", dur);
    }
}

#[test]
fn test_zero_and_negative_durations_are_rejected() {
    assert!(matches!(
        cal().project_end(d(2026, 3, 4), 8, 0),
        Err(AppError::InvalidDuration(_))
    ));
    assert!(matches!(
        cal().project_end(d(2026, 3, 4), 8, -4),
        Err(AppError::InvalidDuration(_))
    ));
}

#[test]
fn test_start_hour_out_of_range_is_rejected() {
    assert!(matches!(
        cal().project_end(d(2026, 3, 4), 24, 1),
        Err(AppError::InvalidHour(_))
    ));
}

#[test]
fn test_is_working_day() {
    let cal = cal_with_holidays(&[d(2026, 3, 4)]);
    assert!(cal.is_working_day(d(2026, 3, 2))); // Monday
    assert!(!cal.is_working_day(d(2026, 3, 4))); // holiday
    assert!(!cal.is_working_day(d(2026, 3, 7))); // Saturday
    assert!(!cal.is_working_day(d(2026, 3, 8))); // Sunday
}

#[test]
fn test_custom_blocks() {
    // 9-13 / 14-18 shop: a full day is still 8 hours
    let blocks = DayBlocks {
        day_start: 9,
        lunch_start: 13,
        lunch_end: 14,
        day_end: 18,
    };
    assert_eq!(blocks.hours_per_day(), 8);

    let cal = WorkCalendar::new(blocks, HashSet::new());
    let (end_date, end_hour) = cal.project_end(d(2026, 3, 4), 9, 8).unwrap();
    assert_eq!(end_date, d(2026, 3, 4));
    assert_eq!(end_hour, 18);
}
