//! End-to-end flow tests: ingest-shaped writes, submission, dashboard,
//! leaderboard — all against the in-memory store.

use chrono::{TimeZone, Utc};
use vdc_fantasy::{
    commands::{dashboard::build_dashboard, leaderboard::leaderboard_rows, roster::submit_roster},
    config::LeagueRules,
    feed::RawPlayerStat,
    scoring::fantasy_points,
    storage::{FantasyDatabase, MatchStatRecord, UserIdentity},
    FantasyError, MatchId, PlayerId, UserId,
};

fn open_rules() -> LeagueRules {
    LeagueRules {
        roster_size: 5,
        mmr_cap: 1500,
        lock_deadline: Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn locked_rules() -> LeagueRules {
    LeagueRules {
        roster_size: 5,
        mmr_cap: 1500,
        lock_deadline: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
}

/// Seed a player the way the ingest command does: upsert + scored record.
fn seed_player(
    db: &mut FantasyDatabase,
    name: &str,
    mmr: i64,
    lines: &[(u32, u32, u32, f64)],
) -> PlayerId {
    let id = db
        .upsert_player_from_feed(&RawPlayerStat {
            name: name.to_string(),
            kills: 0,
            deaths: 0,
            assists: 0,
            acs: 0.0,
            mmr: Some(mmr),
        })
        .unwrap();

    for (match_no, &(kills, deaths, assists, acs)) in lines.iter().enumerate() {
        db.insert_match_stat(&MatchStatRecord {
            player_id: id,
            match_id: MatchId::new(format!("match-{match_no}")),
            kills,
            deaths,
            assists,
            acs,
            fantasy_points: fantasy_points(kills, deaths, assists, acs),
            created_at: 0,
        })
        .unwrap();
    }
    id
}

fn seed_five(db: &mut FantasyDatabase) -> Vec<PlayerId> {
    vec![
        seed_player(db, "p1", 300, &[(10, 5, 8, 220.0)]), // 38.0
        seed_player(db, "p2", 300, &[(5, 5, 5, 100.0)]),  // 17.5
        seed_player(db, "p3", 300, &[]),                  // no records
        seed_player(db, "p4", 300, &[(0, 10, 0, 50.0)]),  // -7.5
        seed_player(db, "p5", 300, &[(20, 2, 1, 300.0)]), // 54.5
    ]
}

#[test]
fn test_submit_then_dashboard_totals() {
    let mut db = FantasyDatabase::new_in_memory().unwrap();
    let ids = seed_five(&mut db);
    let user = UserId::new("u1");

    let roster = submit_roster(&mut db, &open_rules(), &user, &ids, now()).unwrap();
    assert_eq!(roster.mmr_total, 1500);

    let dashboard = build_dashboard(&db, &user).unwrap();
    assert_eq!(dashboard.points.per_player[&ids[0]], 38.0);
    assert_eq!(dashboard.points.per_player[&ids[2]], 0.0);
    assert_eq!(dashboard.points.total, 38.0 + 17.5 + 0.0 - 7.5 + 54.5);
}

#[test]
fn test_submission_is_idempotent() {
    let mut db = FantasyDatabase::new_in_memory().unwrap();
    let ids = seed_five(&mut db);
    let user = UserId::new("u1");

    let first = submit_roster(&mut db, &open_rules(), &user, &ids, now()).unwrap();
    let second = submit_roster(&mut db, &open_rules(), &user, &ids, now()).unwrap();

    assert_eq!(first.player_ids, second.player_ids);
    assert_eq!(first.mmr_total, second.mmr_total);

    let stored = db.get_roster(&user).unwrap().unwrap();
    assert_eq!(stored.player_ids, first.player_ids);
}

#[test]
fn test_submission_rejected_when_locked_and_store_unchanged() {
    let mut db = FantasyDatabase::new_in_memory().unwrap();
    let ids = seed_five(&mut db);
    let user = UserId::new("u1");

    submit_roster(&mut db, &open_rules(), &user, &ids, now()).unwrap();
    let before = db.get_roster(&user).unwrap().unwrap();

    // Locked resubmission with different players must change nothing.
    let p6 = seed_player(&mut db, "p6", 100, &[]);
    let mut new_ids = ids.clone();
    new_ids[0] = p6;

    let err = submit_roster(&mut db, &locked_rules(), &user, &new_ids, now()).unwrap_err();
    assert!(matches!(err, FantasyError::RosterLocked { .. }));

    let after = db.get_roster(&user).unwrap().unwrap();
    assert_eq!(after.player_ids, before.player_ids);
}

#[test]
fn test_submission_rejects_partial_roster() {
    let mut db = FantasyDatabase::new_in_memory().unwrap();
    let ids = seed_five(&mut db);
    let user = UserId::new("u1");

    let err = submit_roster(&mut db, &open_rules(), &user, &ids[..3], now()).unwrap_err();
    assert!(matches!(
        err,
        FantasyError::RosterIncomplete {
            expected: 5,
            actual: 3
        }
    ));
    assert!(db.get_roster(&user).unwrap().is_none());
}

#[test]
fn test_submission_rejects_duplicate_ids_as_incomplete() {
    let mut db = FantasyDatabase::new_in_memory().unwrap();
    let ids = seed_five(&mut db);
    let user = UserId::new("u1");

    let duped = vec![ids[0], ids[0], ids[1], ids[2], ids[3]];
    let err = submit_roster(&mut db, &open_rules(), &user, &duped, now()).unwrap_err();
    assert!(matches!(err, FantasyError::RosterIncomplete { actual: 4, .. }));
}

#[test]
fn test_submission_rejects_over_cap_server_side() {
    let mut db = FantasyDatabase::new_in_memory().unwrap();
    let ids = vec![
        seed_player(&mut db, "p1", 400, &[]),
        seed_player(&mut db, "p2", 400, &[]),
        seed_player(&mut db, "p3", 400, &[]),
        seed_player(&mut db, "p4", 400, &[]),
        seed_player(&mut db, "p5", 400, &[]),
    ];
    let user = UserId::new("u1");

    let err = submit_roster(&mut db, &open_rules(), &user, &ids, now()).unwrap_err();
    assert!(matches!(
        err,
        FantasyError::RosterOverCap {
            total: 2000,
            cap: 1500
        }
    ));
}

#[test]
fn test_submission_rejects_unknown_and_inactive_players() {
    let mut db = FantasyDatabase::new_in_memory().unwrap();
    let ids = seed_five(&mut db);
    let user = UserId::new("u1");

    let mut with_ghost = ids.clone();
    with_ghost[4] = PlayerId::new(9999);
    let err = submit_roster(&mut db, &open_rules(), &user, &with_ghost, now()).unwrap_err();
    assert!(matches!(err, FantasyError::PlayerNotFound { .. }));

    db.deactivate_player("p5").unwrap();
    let err = submit_roster(&mut db, &open_rules(), &user, &ids, now()).unwrap_err();
    assert!(matches!(err, FantasyError::InactivePlayer { .. }));

    // Reactivation via a fresh feed row makes the same submission legal.
    seed_player(&mut db, "p5", 300, &[]);
    assert!(submit_roster(&mut db, &open_rules(), &user, &ids, now()).is_ok());
}

#[test]
fn test_leaderboard_ranks_users_and_fills_unknowns() {
    let mut db = FantasyDatabase::new_in_memory().unwrap();
    let ids = seed_five(&mut db);

    // Two rosters over different pools: 102.5 total vs 38.0 total.
    let high = UserId::new("u_high");
    let low = UserId::new("u_low");

    submit_roster(&mut db, &open_rules(), &high, &ids, now()).unwrap();

    let cheap = vec![
        seed_player(&mut db, "c1", 100, &[(10, 5, 8, 220.0)]), // 38.0
        seed_player(&mut db, "c2", 100, &[]),
        seed_player(&mut db, "c3", 100, &[]),
        seed_player(&mut db, "c4", 100, &[]),
        seed_player(&mut db, "c5", 100, &[]),
    ];
    submit_roster(&mut db, &open_rules(), &low, &cheap, now()).unwrap();

    db.upsert_user(&UserIdentity {
        id: high.clone(),
        username: "HighRoller".to_string(),
        avatar_url: None,
    })
    .unwrap();
    // u_low never logged in; they still rank, as "Unknown".

    let rows = leaderboard_rows(&db).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].user_id, high);
    assert_eq!(rows[0].username, "HighRoller");
    assert_eq!(rows[0].total, 102.5);
    assert_eq!(rows[1].username, "Unknown");
    assert_eq!(rows[1].total, 38.0);
}

#[test]
fn test_leaderboard_empty_store() {
    let db = FantasyDatabase::new_in_memory().unwrap();
    assert!(leaderboard_rows(&db).unwrap().is_empty());
}

#[test]
fn test_dashboard_missing_roster_is_not_found() {
    let db = FantasyDatabase::new_in_memory().unwrap();
    let err = build_dashboard(&db, &UserId::new("ghost")).unwrap_err();
    assert!(matches!(err, FantasyError::RosterNotFound { .. }));
}
