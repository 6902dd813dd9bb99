pub mod attendance;
pub mod player;
