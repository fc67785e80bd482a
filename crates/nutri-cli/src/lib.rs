//! CLI library components for supplement range normalization.

pub mod logging;
pub mod pipeline;
