pub mod client;
pub mod gameplay;
