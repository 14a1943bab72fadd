//! Host introspection layer for `hostfacts`.
//!
//! Two backends feed the report: [`procfs`] reads the handful of `/proc`
//! files the facts come from, and [`platform`] wraps the OS introspection
//! calls (uname, hostname) behind a trait so tests can run without touching
//! the real host.

pub mod error;
pub mod platform;
pub mod procfs;

pub use error::{HostQueryError, HostResult};
pub use platform::{FakePlatform, LinuxPlatform, PlatformOps};
pub use procfs::ProcFs;
