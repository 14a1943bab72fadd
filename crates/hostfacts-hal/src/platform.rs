//! Platform introspection (uname, hostname).
//!
//! Trait-based so the reporter can be exercised in tests without querying
//! the real host.

use crate::{HostQueryError, HostResult};

pub trait PlatformOps {
    /// Pointer-width label, e.g. "64bit".
    fn architecture(&self) -> HostResult<String>;

    /// Hardware machine type, e.g. "x86_64".
    fn machine(&self) -> HostResult<String>;

    /// Resolvable hostname of the current host.
    fn hostname(&self) -> HostResult<String>;

    /// Operating-system family name, e.g. "Linux".
    fn system(&self) -> HostResult<String>;
}

/// Real implementation backed by libc via nix.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxPlatform;

impl LinuxPlatform {
    pub fn new() -> Self {
        Self
    }
}

fn uname() -> HostResult<nix::sys::utsname::UtsName> {
    nix::sys::utsname::uname()
        .map_err(|errno| HostQueryError::PlatformQuery(format!("uname: {errno}")))
}

impl PlatformOps for LinuxPlatform {
    fn architecture(&self) -> HostResult<String> {
        Ok(format!("{}bit", usize::BITS))
    }

    fn machine(&self) -> HostResult<String> {
        Ok(uname()?.machine().to_string_lossy().into_owned())
    }

    fn hostname(&self) -> HostResult<String> {
        let name = nix::unistd::gethostname()
            .map_err(|errno| HostQueryError::PlatformQuery(format!("gethostname: {errno}")))?;
        name.into_string()
            .map_err(|_| HostQueryError::PlatformQuery("hostname is not valid UTF-8".to_string()))
    }

    fn system(&self) -> HostResult<String> {
        Ok(uname()?.sysname().to_string_lossy().into_owned())
    }
}

/// Canned-value implementation for CI-safe tests.
#[derive(Debug, Clone)]
pub struct FakePlatform {
    pub architecture: String,
    pub machine: String,
    pub hostname: String,
    pub system: String,
}

impl Default for FakePlatform {
    fn default() -> Self {
        FakePlatform {
            architecture: "64bit".to_string(),
            machine: "x86_64".to_string(),
            hostname: "testhost".to_string(),
            system: "Linux".to_string(),
        }
    }
}

impl PlatformOps for FakePlatform {
    fn architecture(&self) -> HostResult<String> {
        Ok(self.architecture.clone())
    }

    fn machine(&self) -> HostResult<String> {
        Ok(self.machine.clone())
    }

    fn hostname(&self) -> HostResult<String> {
        Ok(self.hostname.clone())
    }

    fn system(&self) -> HostResult<String> {
        Ok(self.system.clone())
    }
}
