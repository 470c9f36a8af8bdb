//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and dispatch to the orchestration methods in
//! `app/`, which in turn drive the pure model.

pub mod keyboard;
