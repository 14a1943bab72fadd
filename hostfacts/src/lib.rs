//! Library surface of the `hostfacts` binary, exposed for integration tests.

pub mod cli;
pub mod logging;
pub mod meta;
pub mod report;
pub mod text;
