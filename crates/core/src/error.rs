use std::fmt;

/// Contract violations reported by the grid.
///
/// Well-behaved callers never see these: every coordinate the engine touches
/// comes from a validated piece placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { col: i8, row: i8 },
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "out_of_bounds",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "coordinate lies outside the grid",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridError::OutOfBounds { col, row } => {
                write!(f, "{} at ({col}, {row})", self.message())
            }
        }
    }
}

impl std::error::Error for GridError {}
