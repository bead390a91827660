// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod error;
pub mod format;
pub mod random;
pub mod serialization;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod geometry;
    pub mod ops;
    pub mod traits;
    pub mod vector;
}
