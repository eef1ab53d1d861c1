pub mod location;
pub mod notices;
pub mod search;
pub mod state;
pub mod suggestions;
pub mod waypoints;
