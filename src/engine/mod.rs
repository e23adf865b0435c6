//! Derivation engine turning a resolved base version into a version record

pub mod version_engine;

pub use version_engine::VersionEngine;
