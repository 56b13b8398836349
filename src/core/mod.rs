//! Gallery core: filtering, view state, orchestration, and the catalog and player collaborators

pub mod catalog;
pub mod controller;
pub mod filter;
pub mod player;
pub mod view_state;
