// src/error.rs

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// The boundary already holds `max` vertices.
    BoundaryFull { max: usize },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::BoundaryFull { max } => {
                write!(f, "polygon boundary is full ({max} vertices)")
            }
        }
    }
}

impl std::error::Error for EditError {}
