//! Admin mutations on contests, participants and scores.
//!
//! Every operation validates its payload before touching the store, so a
//! `Validation` error guarantees nothing was written.

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::tournament::{NewContest, NewScore, ParticipantInput};
use crate::error::Result;
use crate::models::{Contest, Participant, Score};
use crate::store::EntityStore;

pub async fn list_contests(store: &dyn EntityStore) -> Result<Vec<Contest>> {
    store.list_contests().await
}

pub async fn list_participants(store: &dyn EntityStore) -> Result<Vec<Participant>> {
    store.list_participants().await
}

pub async fn list_scores(store: &dyn EntityStore) -> Result<Vec<Score>> {
    store.list_scores().await
}

pub async fn add_contest(store: &dyn EntityStore, req: &NewContest) -> Result<Contest> {
    req.validate()?;

    let contest = store.insert_contest(&req.normalized()).await?;
    info!(contest_id = %contest.contest_id, name = %contest.name, "Contest created");

    Ok(contest)
}

/// Delete a contest and, atomically, all scores recorded against it
pub async fn delete_contest(store: &dyn EntityStore, contest_id: Uuid) -> Result<()> {
    let removed = store.delete_contest(contest_id).await?;
    info!(%contest_id, scores_removed = removed, "Contest deleted");

    Ok(())
}

pub async fn add_participant(
    store: &dyn EntityStore,
    req: &ParticipantInput,
) -> Result<Participant> {
    req.validate()?;

    let participant = store.insert_participant(&req.normalized()).await?;
    info!(
        participant_id = %participant.participant_id,
        handle = %participant.codeforces_handle,
        "Participant created"
    );

    Ok(participant)
}

pub async fn update_participant(
    store: &dyn EntityStore,
    participant_id: Uuid,
    req: &ParticipantInput,
) -> Result<Participant> {
    req.validate()?;

    let participant = store
        .update_participant(participant_id, &req.normalized())
        .await?;
    info!(%participant_id, "Participant updated");

    Ok(participant)
}

/// Delete a participant and, atomically, all of their scores
pub async fn delete_participant(store: &dyn EntityStore, participant_id: Uuid) -> Result<()> {
    let removed = store.delete_participant(participant_id).await?;
    info!(%participant_id, scores_removed = removed, "Participant deleted");

    Ok(())
}

/// Record a score. An existing score for the same participant and contest is
/// kept; both rows count toward the total.
pub async fn add_score(store: &dyn EntityStore, req: &NewScore) -> Result<Score> {
    req.validate()?;

    let score = store.insert_score(req).await?;
    info!(
        score_id = %score.score_id,
        participant_id = %score.participant_id,
        contest_id = %score.contest_id,
        points = score.points,
        "Score recorded"
    );

    Ok(score)
}

pub async fn delete_score(store: &dyn EntityStore, score_id: Uuid) -> Result<()> {
    store.delete_score(score_id).await?;
    info!(%score_id, "Score deleted");

    Ok(())
}
