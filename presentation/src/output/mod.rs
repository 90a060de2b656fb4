//! Console output for tool catalogues and records

pub mod console;
