//! Build metadata
//!
//! `build.rs` stamps a build counter and UTC timestamp into the binary;
//! the status tool and startup banner read them back from here.

use std::fmt;

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build counter, 0 when built without `build.rs` metadata
pub const BUILD_NUMBER: u64 = match option_env!("BREWCALC_BUILD_NUMBER") {
    Some(digits) => digits_to_u64(digits),
    None => 0,
};

pub const BUILD_TIMESTAMP: &str = match option_env!("BREWCALC_BUILD_TIMESTAMP") {
    Some(stamp) => stamp,
    None => "unknown",
};

/// Decimal digits to u64 in a const context; anything malformed is 0
const fn digits_to_u64(digits: &str) -> u64 {
    let bytes = digits.as_bytes();
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return 0;
        }
        value = value * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    value
}

/// Which calculator build is running
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// One-line banner on stderr; stdout belongs to the MCP transport
pub fn print_startup_banner() {
    eprintln!("Brew Calculator | {}", BuildInfo::current());
}
