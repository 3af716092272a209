pub mod phase;
pub mod pl;
pub mod scenario;
pub mod team;
