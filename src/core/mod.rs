//! Core building blocks: batch parameters, the streaming roster reader,
//! and file naming. These are consumed by the high-level `api` module.
pub mod naming;
pub mod params;
pub mod roster;
