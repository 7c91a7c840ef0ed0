pub mod events;
pub mod leaderboard;
pub mod tournament;

pub(crate) fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("Must not be blank".into());
        return Err(error);
    }
    Ok(())
}
