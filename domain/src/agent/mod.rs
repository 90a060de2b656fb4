//! Agent domain module
//!
//! Describes the search agent that hosts register the tools under. The host
//! owns the model, the conversation and the decision of which tool to call;
//! this crate only supplies the profile text.

pub mod profile;

pub use profile::AgentProfile;
