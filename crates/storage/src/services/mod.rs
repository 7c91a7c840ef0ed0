pub mod events;
pub mod leaderboard;
pub mod ratings;
pub mod tournament;
