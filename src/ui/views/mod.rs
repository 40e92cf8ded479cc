pub mod duel;
pub mod home;
pub mod language;
pub mod leaderboard;
pub mod learning_path;
pub mod mistakes;
pub mod quiz;
