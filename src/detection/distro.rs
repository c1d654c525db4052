//! Linux distribution detection.
//!
//! Classifies the host from its OS release file so the console knows which
//! system package manager can install interpreters.

use std::fmt;
use std::fs;
use std::path::Path;

/// System package manager family for the running host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerKind {
    /// Debian, Ubuntu and derivatives (`apt`).
    AptBased,
    /// RHEL, CentOS, Fedora, AlmaLinux, Rocky (`yum`).
    YumBased,
    /// Anything else; backend operations must not run.
    Unsupported,
}

impl PackageManagerKind {
    /// Whether a backend can be built for this kind.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AptBased => write!(f, "apt"),
            Self::YumBased => write!(f, "yum"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

const DEBIAN_FAMILY: &[&str] = &["debian", "ubuntu"];
const RHEL_FAMILY: &[&str] = &["rhel", "centos", "fedora", "almalinux", "rocky"];

/// Detects the package manager family from OS release metadata.
pub struct DistroDetector;

impl DistroDetector {
    /// Read `os_release_path` and classify it.
    ///
    /// A missing or unreadable file yields [`PackageManagerKind::Unsupported`].
    pub fn detect_package_manager(os_release_path: &Path) -> PackageManagerKind {
        match fs::read_to_string(os_release_path) {
            Ok(content) => Self::classify(&content),
            Err(e) => {
                tracing::debug!(
                    "Cannot read {}: {}; treating distribution as unsupported",
                    os_release_path.display(),
                    e
                );
                PackageManagerKind::Unsupported
            }
        }
    }

    /// Classify OS release content.
    ///
    /// Looks at the `ID` and `ID_LIKE` keys only. Debian-family tokens win
    /// over RHEL-family tokens when both appear.
    pub fn classify(content: &str) -> PackageManagerKind {
        let tokens = identifier_tokens(content);
        let has_any = |family: &[&str]| tokens.iter().any(|t| family.contains(&t.as_str()));

        let kind = if has_any(DEBIAN_FAMILY) {
            PackageManagerKind::AptBased
        } else if has_any(RHEL_FAMILY) {
            PackageManagerKind::YumBased
        } else {
            PackageManagerKind::Unsupported
        };
        tracing::debug!("Classified distribution as {} from {:?}", kind, tokens);
        kind
    }
}

/// Lowercased tokens from the `ID` and `ID_LIKE` values, quotes stripped.
fn identifier_tokens(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .filter(|(key, _)| matches!(key.trim(), "ID" | "ID_LIKE"))
        .flat_map(|(_, value)| {
            value
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn ubuntu_is_apt() {
        let content = "NAME=\"Ubuntu\"\nID=ubuntu\nID_LIKE=debian\nVERSION_ID=\"22.04\"\n";
        assert_eq!(DistroDetector::classify(content), PackageManagerKind::AptBased);
    }

    #[test]
    fn debian_is_apt() {
        assert_eq!(
            DistroDetector::classify("ID=debian\n"),
            PackageManagerKind::AptBased
        );
    }

    #[test]
    fn derivative_with_id_like_debian_is_apt() {
        let content = "ID=linuxmint\nID_LIKE=\"ubuntu debian\"\n";
        assert_eq!(DistroDetector::classify(content), PackageManagerKind::AptBased);
    }

    #[test]
    fn rhel_family_is_yum() {
        for content in [
            "ID=\"rhel\"\n",
            "ID=\"centos\"\nID_LIKE=\"rhel fedora\"\n",
            "ID=fedora\n",
            "ID=\"almalinux\"\nID_LIKE=\"rhel centos fedora\"\n",
        ] {
            assert_eq!(
                DistroDetector::classify(content),
                PackageManagerKind::YumBased,
                "{}",
                content
            );
        }
    }

    #[test]
    fn other_distributions_are_unsupported() {
        for content in ["ID=arch\n", "ID=alpine\n", "", "garbage without equals"] {
            assert_eq!(
                DistroDetector::classify(content),
                PackageManagerKind::Unsupported
            );
        }
    }

    #[test]
    fn family_names_outside_id_keys_are_ignored() {
        let content = "ID=arch\nHOME_URL=\"https://fedora.example/debian\"\n";
        assert_eq!(
            DistroDetector::classify(content),
            PackageManagerKind::Unsupported
        );
    }

    #[test]
    fn missing_file_is_unsupported() {
        let temp = TempDir::new().unwrap();
        let kind = DistroDetector::detect_package_manager(&temp.path().join("os-release"));
        assert_eq!(kind, PackageManagerKind::Unsupported);
    }

    #[test]
    fn reads_file_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("os-release");
        fs::write(&path, "ID=debian\n").unwrap();
        assert_eq!(
            DistroDetector::detect_package_manager(&path),
            PackageManagerKind::AptBased
        );
    }

    #[test]
    fn kind_display_and_support() {
        assert_eq!(PackageManagerKind::AptBased.to_string(), "apt");
        assert!(PackageManagerKind::YumBased.is_supported());
        assert!(!PackageManagerKind::Unsupported.is_supported());
    }
}
