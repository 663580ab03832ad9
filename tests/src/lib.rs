//! Cross-crate tests for the read → uppercase → write pipeline.

mod pipeline;
mod utils;
