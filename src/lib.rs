// facegrid - lib.rs
//
// Library entry point. facegrid is an embedded engine consumed by a UI
// shell: it normalises raw developer-profile records, filters and sorts
// them through pure pipeline calls, and hands the ordered view (plus a
// raw-record projection for bulk export) back to the shell. Rendering,
// event wiring, and the network transfer of the record document live
// outside this crate.

pub mod app;
pub mod core;
pub mod util;
