//! # ShapeKit Core
//!
//! Core types and utilities shared by the ShapeKit crates:
//! identifiers, gesture tags, geometry primitives and error types.

pub mod angle;
pub mod error;
pub mod geometry;
pub mod types;

pub use error::{DocumentError, Error, ResizeError, Result};
pub use geometry::{Bounds, Point, Scale, Transform};
pub use types::{ParentId, ResizeMode, SelectionHandle, ShapeId};
