/// Mutation gateway tests against the in-memory store
///
/// Tests cover:
/// - Validation before any write
/// - Foreign key checks on score inserts
/// - Cascading deletes and their effect on the leaderboard
/// - Not-found handling for updates and deletes
use std::sync::Arc;

use storage::{
    EntityStore, MemoryStore,
    dto::{
        leaderboard::NewLeaderboardUser,
        tournament::{NewContest, NewScore, ParticipantInput},
    },
    error::StorageError,
    models::{Contest, Participant},
    services::{leaderboard, ratings, tournament},
};
use uuid::Uuid;

async fn seed_contest(store: &MemoryStore, name: &str) -> Contest {
    tournament::add_contest(
        store,
        &NewContest {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

async fn seed_participant(store: &MemoryStore, name: &str, handle: &str) -> Participant {
    tournament::add_participant(
        store,
        &ParticipantInput {
            name: name.to_string(),
            codeforces_handle: handle.to_string(),
        },
    )
    .await
    .unwrap()
}

fn score_req(p: &Participant, c: &Contest, points: i32) -> NewScore {
    NewScore {
        participant_id: p.participant_id,
        contest_id: c.contest_id,
        points,
    }
}

#[tokio::test]
async fn leaderboard_reflects_recorded_score() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;
    let round = seed_contest(&store, "Round 1").await;

    tournament::add_score(&store, &score_req(&alice, &round, 50))
        .await
        .unwrap();

    let board = leaderboard::get_tournament_leaderboard(&store).await.unwrap();

    assert_eq!(board.contest_names, vec!["Round 1"]);
    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.entries[0].participant, alice);
    assert_eq!(board.entries[0].total_points, 50);
    assert_eq!(board.entries[0].scores[0].contest, round);
    assert_eq!(board.entries[0].scores[0].points, 50);
}

#[tokio::test]
async fn negative_points_are_rejected_without_writing() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;
    let round = seed_contest(&store, "Round 1").await;

    let err = tournament::add_score(&store, &score_req(&alice, &round, -5))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Validation(_)));
    assert!(store.list_scores().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_contest_is_a_foreign_key_error() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;
    let missing = Uuid::new_v4();

    let err = tournament::add_score(
        &store,
        &NewScore {
            participant_id: alice.participant_id,
            contest_id: missing,
            points: 10,
        },
    )
    .await
    .unwrap_err();

    match err {
        StorageError::ForeignKey { entity, id } => {
            assert_eq!(entity, "contest");
            assert_eq!(id, missing);
        }
        other => panic!("expected foreign key error, got {other:?}"),
    }
    assert!(store.list_scores().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_participant_is_a_foreign_key_error() {
    let store = MemoryStore::new();
    let round = seed_contest(&store, "Round 1").await;

    let err = tournament::add_score(
        &store,
        &NewScore {
            participant_id: Uuid::new_v4(),
            contest_id: round.contest_id,
            points: 10,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        StorageError::ForeignKey {
            entity: "participant",
            ..
        }
    ));
}

#[tokio::test]
async fn duplicate_scores_are_kept_and_summed() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;
    let round = seed_contest(&store, "Round 1").await;

    tournament::add_score(&store, &score_req(&alice, &round, 30))
        .await
        .unwrap();
    tournament::add_score(&store, &score_req(&alice, &round, 20))
        .await
        .unwrap();

    let board = leaderboard::get_tournament_leaderboard(&store).await.unwrap();

    assert_eq!(store.list_scores().await.unwrap().len(), 2);
    assert_eq!(board.entries[0].total_points, 50);
    assert_eq!(board.entries[0].scores.len(), 2);
    assert_eq!(board.contest_names, vec!["Round 1"]);
}

#[tokio::test]
async fn deleting_participant_cascades_to_scores() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;
    let bob = seed_participant(&store, "Bob", "bob").await;
    let r1 = seed_contest(&store, "Round 1").await;
    let r2 = seed_contest(&store, "Round 2").await;

    tournament::add_score(&store, &score_req(&alice, &r1, 10))
        .await
        .unwrap();
    tournament::add_score(&store, &score_req(&alice, &r2, 15))
        .await
        .unwrap();
    tournament::add_score(&store, &score_req(&bob, &r1, 5))
        .await
        .unwrap();

    tournament::delete_participant(&store, alice.participant_id)
        .await
        .unwrap();

    let scores = store.list_scores().await.unwrap();
    assert_eq!(scores.len(), 1);
    assert!(scores.iter().all(|s| s.participant_id != alice.participant_id));

    let board = leaderboard::get_tournament_leaderboard(&store).await.unwrap();
    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.entries[0].participant, bob);
    assert_eq!(board.contest_names, vec!["Round 1"]);
}

#[tokio::test]
async fn deleting_contest_cascades_to_scores() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;
    let r1 = seed_contest(&store, "Round 1").await;
    let r2 = seed_contest(&store, "Round 2").await;

    tournament::add_score(&store, &score_req(&alice, &r1, 10))
        .await
        .unwrap();
    tournament::add_score(&store, &score_req(&alice, &r2, 15))
        .await
        .unwrap();

    tournament::delete_contest(&store, r1.contest_id)
        .await
        .unwrap();

    let scores = store.list_scores().await.unwrap();
    assert!(scores.iter().all(|s| s.contest_id != r1.contest_id));
    assert_eq!(store.list_contests().await.unwrap(), vec![r2.clone()]);

    let board = leaderboard::get_tournament_leaderboard(&store).await.unwrap();
    assert_eq!(board.entries[0].total_points, 15);
    assert!(
        board.entries[0]
            .scores
            .iter()
            .all(|d| d.contest.contest_id != r1.contest_id)
    );
    assert_eq!(board.contest_names, vec!["Round 2"]);
}

#[tokio::test]
async fn update_participant_preserves_identity() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;

    let updated = tournament::update_participant(
        &store,
        alice.participant_id,
        &ParticipantInput {
            name: " Alice Smith ".to_string(),
            codeforces_handle: "alice_s".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.participant_id, alice.participant_id);
    assert_eq!(updated.created_at, alice.created_at);
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.codeforces_handle, "alice_s");
}

#[tokio::test]
async fn update_with_blank_handle_is_rejected() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;

    let err = tournament::update_participant(
        &store,
        alice.participant_id,
        &ParticipantInput {
            name: "Alice".to_string(),
            codeforces_handle: " ".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StorageError::Validation(_)));
    assert_eq!(store.list_participants().await.unwrap(), vec![alice]);
}

#[tokio::test]
async fn missing_targets_are_not_found() {
    let store = MemoryStore::new();
    let id = Uuid::new_v4();

    assert!(matches!(
        tournament::delete_score(&store, id).await,
        Err(StorageError::NotFound)
    ));
    assert!(matches!(
        tournament::delete_contest(&store, id).await,
        Err(StorageError::NotFound)
    ));
    assert!(matches!(
        tournament::delete_participant(&store, id).await,
        Err(StorageError::NotFound)
    ));
    assert!(matches!(
        tournament::update_participant(
            &store,
            id,
            &ParticipantInput {
                name: "Nobody".to_string(),
                codeforces_handle: "nobody".to_string(),
            },
        )
        .await,
        Err(StorageError::NotFound)
    ));
}

#[tokio::test]
async fn delete_score_removes_only_that_row() {
    let store = MemoryStore::new();
    let alice = seed_participant(&store, "Alice", "alice1").await;
    let round = seed_contest(&store, "Round 1").await;

    let first = tournament::add_score(&store, &score_req(&alice, &round, 30))
        .await
        .unwrap();
    let second = tournament::add_score(&store, &score_req(&alice, &round, 20))
        .await
        .unwrap();

    tournament::delete_score(&store, first.score_id).await.unwrap();

    assert_eq!(store.list_scores().await.unwrap(), vec![second]);
}

#[tokio::test]
async fn participants_listed_by_name() {
    let store = MemoryStore::new();
    seed_participant(&store, "Zoe", "zoe").await;
    seed_participant(&store, "bob", "bob").await;
    seed_participant(&store, "Adam", "adam").await;

    let names: Vec<String> = tournament::list_participants(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, ["Adam", "bob", "Zoe"]);
}

#[tokio::test]
async fn concurrent_reads_never_see_dangling_scores() {
    let store = Arc::new(MemoryStore::new());
    let alice = seed_participant(&store, "Alice", "alice1").await;
    let mut contests = Vec::new();
    for i in 0..20 {
        let contest = seed_contest(&store, &format!("Round {i}")).await;
        tournament::add_score(&*store, &score_req(&alice, &contest, 1))
            .await
            .unwrap();
        contests.push(contest);
    }

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for contest in contests {
                tournament::delete_contest(&*store, contest.contest_id)
                    .await
                    .unwrap();
            }
        })
    };

    for _ in 0..50 {
        let snapshot = store.snapshot().await.unwrap();
        for score in &snapshot.scores {
            assert!(
                snapshot
                    .contests
                    .iter()
                    .any(|c| c.contest_id == score.contest_id)
            );
        }
        tokio::task::yield_now().await;
    }

    writer.await.unwrap();
    assert!(store.list_scores().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_leaderboard_handle_is_a_constraint_violation() {
    let store = MemoryStore::new();
    let req = NewLeaderboardUser {
        full_name: "Alice".to_string(),
        codeforces_handle: "Alice1".to_string(),
        leetcode_handle: None,
    };

    ratings::register_user(&store, &req).await.unwrap();
    let err = ratings::register_user(
        &store,
        &NewLeaderboardUser {
            codeforces_handle: "alice1".to_string(),
            ..req
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));

    let users = ratings::list_users(&store).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].codeforces_handle, "Alice1");
}
