//! Host operating system families.

use serde::{Deserialize, Serialize};

/// Normalized operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsFamily {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    #[serde(rename = "Mac OS")]
    MacOs,
    /// Linux.
    Linux,
    /// Anything else.
    Unknown,
}

impl OsFamily {
    /// Maps a platform identifier to its family.
    ///
    /// Accepts both Rust's `std::env::consts::OS` values (`windows`, `macos`,
    /// `linux`) and kernel names (`Windows`, `Darwin`, `Linux`), ignoring case.
    #[must_use]
    pub fn from_platform(platform: &str) -> Self {
        match platform.trim().to_lowercase().as_str() {
            "windows" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Unknown,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "Mac OS",
            Self::Linux => "Linux",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns all families.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Windows, Self::MacOs, Self::Linux, Self::Unknown]
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rust_consts() {
        assert_eq!(OsFamily::from_platform("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::from_platform("macos"), OsFamily::MacOs);
        assert_eq!(OsFamily::from_platform("linux"), OsFamily::Linux);
    }

    #[test]
    fn test_from_kernel_names() {
        assert_eq!(OsFamily::from_platform("Darwin"), OsFamily::MacOs);
        assert_eq!(OsFamily::from_platform("Windows"), OsFamily::Windows);
        assert_eq!(OsFamily::from_platform("Linux"), OsFamily::Linux);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(OsFamily::from_platform("freebsd"), OsFamily::Unknown);
        assert_eq!(OsFamily::from_platform(""), OsFamily::Unknown);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = OsFamily::all().iter().map(OsFamily::as_str).collect();
        assert_eq!(labels, ["Windows", "Mac OS", "Linux", "Unknown"]);
    }
}
