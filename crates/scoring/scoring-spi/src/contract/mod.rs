//! Scoring contracts.

mod reconstruction_model;
mod sequence_model;

pub use reconstruction_model::ReconstructionModel;
pub use sequence_model::SequenceModel;
