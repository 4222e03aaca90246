// facegrid - app/mod.rs
//
// Application layer: document loading and session orchestration.
// Dependencies: core layer.
// Must NOT depend on: UI specifics.

pub mod loader;
pub mod session;
