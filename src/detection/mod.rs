//! Host detection: distribution family and installed interpreters.

pub mod distro;
pub mod interpreters;

pub use distro::{DistroDetector, PackageManagerKind};
pub use interpreters::{
    find_by_version, interpreter_name_pattern, is_executable, parse_system_path, resolve_tool_path,
    InterpreterDiscovery, InterpreterRecord,
};
