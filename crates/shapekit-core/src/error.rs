//! Error handling for ShapeKit
//!
//! Provides the error types shared by the workspace:
//! - Resize errors (illegal-state preconditions of the resize engine)
//! - Document errors (loading and validating a shape document)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::types::{ParentId, ShapeId};
use thiserror::Error;

/// Resize error type
///
/// Every variant is an illegal-state precondition failure: the engine fails
/// fast and never returns a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResizeError {
    /// The document is in read-only mode
    #[error("Cannot resize shapes while the document is read-only")]
    ReadOnly,

    /// The referenced shape does not exist
    #[error("Shape not found: {id}")]
    ShapeNotFound {
        /// The id that could not be resolved.
        id: ShapeId,
    },

    /// The shape's page transform (and therefore its page rotation) cannot be resolved
    #[error("Page transform not found for {id}")]
    PageTransformNotFound {
        /// The shape whose ancestor chain is broken.
        id: ShapeId,
    },

    /// The shape's geometry has no finite page bounds
    #[error("Page bounds not found for {id}")]
    PageBoundsNotFound {
        /// The shape whose bounds could not be computed.
        id: ShapeId,
    },

    /// A point could not be mapped into the shape's parent space
    #[error("Parent {parent} of {id} cannot be resolved")]
    ParentNotFound {
        /// The shape being resized.
        id: ShapeId,
        /// The parent that could not be resolved.
        parent: ParentId,
    },
}

impl ResizeError {
    /// True for the read-only violation kind.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }

    /// True for every "could not resolve" kind.
    pub fn is_not_found(&self) -> bool {
        !self.is_read_only()
    }

    /// The shape the error refers to, if any.
    pub fn shape_id(&self) -> Option<ShapeId> {
        match self {
            Self::ReadOnly => None,
            Self::ShapeNotFound { id }
            | Self::PageTransformNotFound { id }
            | Self::PageBoundsNotFound { id }
            | Self::ParentNotFound { id, .. } => Some(*id),
        }
    }
}

/// Document error type
///
/// Raised while building, loading or mutating a shape document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Two records share the same id
    #[error("Duplicate shape id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: ShapeId,
    },

    /// A record names a parent that is not in the document
    #[error("Shape {id} references unknown parent {parent}")]
    UnknownParent {
        /// The child record.
        id: ShapeId,
        /// The missing parent.
        parent: ShapeId,
    },

    /// Following parent links from a record leads back to itself
    #[error("Parent cycle detected at {id}")]
    ParentCycle {
        /// A shape on the cycle.
        id: ShapeId,
    },

    /// An update referenced a shape that does not exist
    #[error("Shape not found: {id}")]
    ShapeNotFound {
        /// The id that could not be resolved.
        id: ShapeId,
    },

    /// The document is in read-only mode
    #[error("Document is read-only")]
    ReadOnly,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for ShapeKit
#[derive(Error, Debug)]
pub enum Error {
    /// Resize error
    #[error(transparent)]
    Resize(#[from] ResizeError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a resize error
    pub fn is_resize_error(&self) -> bool {
        matches!(self, Error::Resize(_))
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_error_display() {
        assert_eq!(
            ResizeError::ReadOnly.to_string(),
            "Cannot resize shapes while the document is read-only"
        );
        let err = ResizeError::ShapeNotFound { id: ShapeId(9) };
        assert_eq!(err.to_string(), "Shape not found: shape:9");

        let err = ResizeError::ParentNotFound {
            id: ShapeId(2),
            parent: ParentId::Shape(ShapeId(1)),
        };
        assert_eq!(err.to_string(), "Parent shape:1 of shape:2 cannot be resolved");
    }

    #[test]
    fn test_resize_error_kinds() {
        assert!(ResizeError::ReadOnly.is_read_only());
        assert!(!ResizeError::ReadOnly.is_not_found());
        assert_eq!(ResizeError::ReadOnly.shape_id(), None);

        let err = ResizeError::PageBoundsNotFound { id: ShapeId(4) };
        assert!(err.is_not_found());
        assert_eq!(err.shape_id(), Some(ShapeId(4)));
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ResizeError::ReadOnly.into();
        assert!(err.is_resize_error());

        let err: Error = DocumentError::DuplicateId { id: ShapeId(1) }.into();
        assert!(err.is_document_error());
        assert_eq!(err.to_string(), "Duplicate shape id: shape:1");

        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
