pub mod profile;
pub mod quiz;
pub mod recommendation;
pub mod user;
