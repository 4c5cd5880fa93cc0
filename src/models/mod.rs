pub mod sequence;

pub use sequence::{SequenceNotation, SequenceSpec, SequenceToken};
