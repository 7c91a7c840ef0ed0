mod contest;
mod leaderboard_user;
mod participant;
mod score;
mod upcoming_event;

pub use contest::Contest;
pub use leaderboard_user::LeaderboardUser;
pub use participant::Participant;
pub use score::Score;
pub use upcoming_event::UpcomingEvent;
