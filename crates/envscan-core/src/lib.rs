//! # envscan-core
//!
//! Shared data model for envscan.
//!
//! This crate provides the types every other envscan crate passes around:
//! - [`AccessorKind`]: the accessor variant a call site used (`envInt`, ...)
//! - [`NormalizedArg`] and [`Scalar`]: call arguments reduced to static values
//! - [`Declaration`]: one discovered environment-variable accessor call

pub mod declaration;
pub mod kind;

pub use declaration::{Declaration, NormalizedArg, Scalar, SourceLocation};
pub use kind::AccessorKind;
