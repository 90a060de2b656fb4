//! Application-level configuration.
//!
//! - [`ToolSettings`]: the immutable value every tool call receives:
//!   HTTP settings, API endpoints, Google credentials and the data directory

pub mod tool_settings;

pub use tool_settings::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, Endpoints, GoogleCredentials,
    HttpSettings, ToolSettings,
};
