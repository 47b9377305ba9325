//! # elman-core
//!
//! The numeric substrate for elman: a dense, row-major `f64` matrix and the
//! error type shared by every crate in the workspace.
//!
//! This crate provides:
//! - [`Matrix`]: 2-D container with elementwise arithmetic, matmul,
//!   transpose, row access, activations, and reductions
//! - [`Shape`]: `(rows, cols)` pair used in shape checks and error messages
//! - [`Error`] / [`Result`]: the single error taxonomy of the workspace
//!
//! `Matrix` carries no network logic, so it can be tested on its own.

pub mod error;
pub mod matrix;
pub mod shape;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use shape::Shape;
