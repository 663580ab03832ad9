//! The read → uppercase → write pipeline.
//!
//! * **[`reader`]**: loads the whole input file, rejecting blank content.
//! * **[`writer`]**: writes the uppercase content to `modified_<name>`.
//! * **[`driver`]**: prompts for the file name and sequences the two steps.
//!
//! Nothing here prints. Every user-visible event goes through a
//! [`shout_common::report::Reporter`].

pub mod driver;
mod guard;
pub mod reader;
pub mod writer;
