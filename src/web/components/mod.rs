//! Reusable HTML fragments rendered with Askama.

mod labeled_input;

pub use labeled_input::{InputKind, LabeledInput};
