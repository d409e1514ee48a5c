use chrono::NaiveDate;
use rphasetracker::core::calculator::renumber::{SubNumberUpdate, plan_renumber};
use rphasetracker::models::subphase::SubPhase;
use std::collections::HashSet;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

/// Build a real sub-phase (end point does not matter for numbering).
fn sp(id: i32, group: i32, sub: i32, day: u32, hour: u32) -> SubPhase {
    SubPhase::new(
        id,
        "SITE-1",
        group,
        sub,
        "work",
        d(day),
        hour,
        8,
        d(day),
        17,
        "",
        None,
    )
}

/// Build a group placeholder carrying metadata.
fn placeholder(id: i32, group: i32, sub: i32) -> SubPhase {
    SubPhase::new(
        id,
        "SITE-1",
        group,
        sub,
        "Groundworks",
        d(2),
        8,
        0,
        d(2),
        8,
        "",
        Some(40),
    )
}

/// Apply a plan in memory, mirroring what the sequential writes do.
fn apply(mut rows: Vec<SubPhase>, updates: &[SubNumberUpdate]) -> Vec<SubPhase> {
    for u in updates {
        for sp in rows.iter_mut() {
            if sp.id == u.id {
                sp.sub_number = u.sub_number;
            }
        }
    }
    rows
}

#[test]
fn test_canonical_numbering_yields_no_updates() {
    let rows = vec![
        placeholder(10, 1, 0),
        sp(11, 1, 1, 2, 8),
        sp(12, 1, 2, 3, 8),
        sp(13, 1, 3, 4, 8),
    ];
    assert!(plan_renumber(&rows).is_empty());
}

#[test]
fn test_chronological_order_wins_over_stored_numbers() {
    // Stored numbers reflect insertion order, not the edited start dates
    let rows = vec![
        sp(11, 1, 1, 9, 8), // latest start, currently number 1
        sp(12, 1, 2, 3, 8),
        sp(13, 1, 3, 2, 8), // earliest start, currently number 3
    ];

    let updates = plan_renumber(&rows);

    // updates come out in sorted (chronological) position order
    assert_eq!(
        updates,
        vec![
            SubNumberUpdate {
                id: 13,
                sub_number: 1
            },
            SubNumberUpdate {
                id: 11,
                sub_number: 3
            },
        ]
    );
}

#[test]
fn test_same_day_orders_by_hour() {
    let rows = vec![sp(11, 1, 1, 2, 14), sp(12, 1, 2, 2, 8)];

    let updates = plan_renumber(&rows);

    assert_eq!(
        updates,
        vec![
            SubNumberUpdate {
                id: 12,
                sub_number: 1
            },
            SubNumberUpdate {
                id: 11,
                sub_number: 2
            },
        ]
    );
}

#[test]
fn test_placeholder_is_forced_to_zero() {
    let rows = vec![placeholder(10, 1, 5), sp(11, 1, 1, 2, 8)];

    let updates = plan_renumber(&rows);

    assert_eq!(
        updates,
        vec![SubNumberUpdate {
            id: 10,
            sub_number: 0
        }]
    );
}

#[test]
fn test_gaps_are_closed() {
    // Numbers 2, 5, 9 (a deletion left gaps) collapse back to 1..3
    let rows = vec![sp(11, 1, 2, 2, 8), sp(12, 1, 5, 3, 8), sp(13, 1, 9, 4, 8)];

    let updates = plan_renumber(&rows);
    let rows = apply(rows, &updates);

    let numbers: Vec<i32> = rows.iter().map(|r| r.sub_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_no_duplicates_no_gaps_for_shuffled_groups() {
    let rows = vec![
        placeholder(10, 1, 3),
        sp(11, 1, 7, 6, 8),
        sp(12, 1, 7, 2, 14),
        sp(13, 1, 1, 4, 8),
        sp(14, 1, 2, 2, 8),
        sp(15, 1, 40, 5, 8),
    ];

    let updates = plan_renumber(&rows);
    let rows = apply(rows, &updates);

    let real: Vec<&SubPhase> = rows.iter().filter(|r| !r.is_placeholder()).collect();
    let numbers: HashSet<i32> = real.iter().map(|r| r.sub_number).collect();

    assert_eq!(numbers, (1..=real.len() as i32).collect::<HashSet<i32>>());
    assert_eq!(rows[0].sub_number, 0);
}

#[test]
fn test_renumber_is_idempotent() {
    let rows = vec![
        placeholder(10, 1, 2),
        sp(11, 1, 9, 5, 8),
        sp(12, 1, 1, 3, 8),
        sp(13, 2, 4, 2, 8),
    ];

    let updates = plan_renumber(&rows);
    assert!(!updates.is_empty());

    let rows = apply(rows, &updates);
    assert!(plan_renumber(&rows).is_empty());
}

#[test]
fn test_start_point_ties_keep_prior_order() {
    // Two sub-phases share (start_date, start_hour): the one numbered lower
    // before the pass stays first (stable sort over stored order).
    let rows = vec![sp(11, 1, 4, 2, 8), sp(12, 1, 7, 2, 8)];

    let updates = plan_renumber(&rows);

    assert_eq!(
        updates,
        vec![
            SubNumberUpdate {
                id: 11,
                sub_number: 1
            },
            SubNumberUpdate {
                id: 12,
                sub_number: 2
            },
        ]
    );
}

#[test]
fn test_groups_are_renumbered_independently() {
    let rows = vec![
        sp(11, 2, 5, 2, 8),
        sp(12, 2, 6, 3, 8),
        sp(13, 7, 1, 2, 8), // already canonical
        sp(14, 7, 4, 3, 8),
    ];

    let updates = plan_renumber(&rows);

    // Group 2 first (ascending group order), then group 7
    assert_eq!(
        updates,
        vec![
            SubNumberUpdate {
                id: 11,
                sub_number: 1
            },
            SubNumberUpdate {
                id: 12,
                sub_number: 2
            },
            SubNumberUpdate {
                id: 14,
                sub_number: 2
            },
        ]
    );
}
