//! Menu action implementations.
//!
//! Each module adds its actions to [`Console`](super::Console):
//!
//! - [`versions`] - interpreter listing, paths, install and removal
//! - [`packages`] - per-interpreter library management
//! - [`logs`] - action log browsing and search

pub mod logs;
pub mod packages;
pub mod versions;
