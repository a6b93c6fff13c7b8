//! Precache manifest generation broken into focused submodules for easier testing.

mod generation;
mod scanning;

pub use generation::generate_cache_manifest;
pub use scanning::collect_assets;
