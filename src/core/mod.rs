// facegrid - core/mod.rs
//
// Core business logic layer: the pure record-transform pipeline.
// Dependencies: data/serialisation crates only, no I/O.
// Must NOT depend on: app layer or anything that touches the filesystem
// or network.

pub mod export;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod sort;
