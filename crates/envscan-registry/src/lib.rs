//! # envscan-registry
//!
//! Turns directories into registries of environment variable declarations.
//!
//! A scan unit is either the project tree (walked recursively) or one
//! installed package (its entry directory, shallow). Each unit gets its own
//! [`Registry`], where a later declaration of the same key replaces the
//! earlier one.

pub mod deps;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod scan;
pub mod walk;

pub use deps::{DependencyWalker, PackageReport, PackageUnit};
pub use error::ScanError;
pub use manifest::PackageManifest;
pub use registry::{Entries, Registry};
pub use scan::{ScanOptions, Scanner};
pub use walk::WalkMode;
