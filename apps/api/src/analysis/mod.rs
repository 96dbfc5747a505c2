// Resume scoring engine.
// A single pure transform from extracted resume text to an `Analysis`.
// No I/O, no shared mutable state: safe to call from any number of handlers at once.

pub mod band;
mod engine;
mod feedback;
mod keywords;
mod signals;

pub use band::ScoreBand;
pub use engine::{analyze, Analysis};
