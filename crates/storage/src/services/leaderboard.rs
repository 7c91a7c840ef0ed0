use std::collections::{HashMap, HashSet};

use tracing::warn;
use uuid::Uuid;

use crate::dto::tournament::{LeaderboardEntry, ScoreDetail, TournamentLeaderboard};
use crate::error::Result;
use crate::models::{Contest, Participant, Score};
use crate::store::{EntityStore, Snapshot};

/// Join participants, scores and contests into leaderboard rows.
///
/// One entry per participant, ordered by total points descending. The sort is
/// stable, so tied participants keep their input order. A score whose contest
/// is missing from `contests` still counts toward the total but is left out of
/// the per-contest details. Scores of unknown participants are ignored.
pub fn build_leaderboard(
    participants: &[Participant],
    scores: &[Score],
    contests: &[Contest],
) -> Vec<LeaderboardEntry> {
    let contests_by_id: HashMap<Uuid, &Contest> =
        contests.iter().map(|c| (c.contest_id, c)).collect();

    let mut scores_by_participant: HashMap<Uuid, Vec<&Score>> = HashMap::new();
    for score in scores {
        scores_by_participant
            .entry(score.participant_id)
            .or_default()
            .push(score);
    }

    let mut entries: Vec<LeaderboardEntry> = participants
        .iter()
        .map(|participant| {
            let own = scores_by_participant
                .get(&participant.participant_id)
                .map(Vec::as_slice)
                .unwrap_or_default();

            let total_points = own.iter().map(|s| i64::from(s.points)).sum();

            let details = own
                .iter()
                .filter_map(|score| match contests_by_id.get(&score.contest_id) {
                    Some(contest) => Some(ScoreDetail {
                        contest: (*contest).clone(),
                        points: score.points,
                    }),
                    None => {
                        warn!(
                            score_id = %score.score_id,
                            contest_id = %score.contest_id,
                            "Score references a missing contest, omitting it from details"
                        );
                        None
                    }
                })
                .collect();

            LeaderboardEntry {
                participant: participant.clone(),
                scores: details,
                total_points,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    entries
}

/// Distinct contest names in the order they are first referenced by `scores`
pub fn contest_columns(scores: &[Score], contests: &[Contest]) -> Vec<String> {
    let names_by_id: HashMap<Uuid, &str> = contests
        .iter()
        .map(|c| (c.contest_id, c.name.as_str()))
        .collect();

    let mut seen = HashSet::new();
    scores
        .iter()
        .filter_map(|s| names_by_id.get(&s.contest_id).copied())
        .filter(|name| seen.insert(*name))
        .map(String::from)
        .collect()
}

pub fn tournament_leaderboard(snapshot: &Snapshot) -> TournamentLeaderboard {
    TournamentLeaderboard {
        contest_names: contest_columns(&snapshot.scores, &snapshot.contests),
        entries: build_leaderboard(
            &snapshot.participants,
            &snapshot.scores,
            &snapshot.contests,
        ),
    }
}

/// Read a fresh snapshot and aggregate it
pub async fn get_tournament_leaderboard(store: &dyn EntityStore) -> Result<TournamentLeaderboard> {
    let snapshot = store.snapshot().await?;
    Ok(tournament_leaderboard(&snapshot))
}
