//! Error types for graph construction, cost evaluation, and configuration.

use thiserror::Error;

/// Errors raised while building a dense graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A matrix row has a different length than the number of rows.
    #[error("matrix is not square: row {row} has {len} columns, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// The number of labels differs from the matrix dimension.
    #[error("{labels} labels supplied for a {size}x{size} matrix")]
    LabelCountMismatch {
        /// Number of labels.
        labels: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// A label maps to an index outside the matrix.
    #[error("index {index} is out of range for a {size}x{size} matrix")]
    IndexOutOfRange {
        /// The index.
        index: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// Two labels map to the same matrix index.
    #[error("index {0} is assigned to more than one label")]
    DuplicateIndex(usize),

    /// The same label appears twice.
    #[error("label at index {0} is a duplicate")]
    DuplicateLabel(usize),
}

/// Errors raised while evaluating the cost of a path or cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// No weight is defined for the leg starting at `position`.
    #[error("no edge weight for the leg starting at position {position}")]
    MissingEdge {
        /// Index in the order of the leg's starting label.
        position: usize,
    },
}

/// Invalid optimizer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter is outside its accepted range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_messages() {
        let e = GraphError::LabelCountMismatch { labels: 3, size: 4 };
        assert_eq!(e.to_string(), "3 labels supplied for a 4x4 matrix");
        let e = GraphError::NotSquare {
            row: 1,
            len: 2,
            expected: 3,
        };
        assert!(e.to_string().contains("row 1"));
    }

    #[test]
    fn test_path_error_message() {
        let e = PathError::MissingEdge { position: 2 };
        assert!(e.to_string().contains("position 2"));
    }

    #[test]
    fn test_config_error_message() {
        let e = ConfigError::Invalid("generations must be at least 1".into());
        assert_eq!(
            e.to_string(),
            "Invalid configuration: generations must be at least 1"
        );
    }
}
