pub mod attendance;
pub mod player;
pub mod stats;
