use core::fmt::{Display, Formatter};

/// Contract violations reported by `Grid2D`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GridError {
    /// A coordinate fell outside `[0, width) x [0, height)`.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// `width * height` does not fit in a `usize`.
    DimensionsOverflow { width: usize, height: usize },
    /// The number of values given to a constructor is not `width * height`.
    LengthMismatch { expected: usize, found: usize },
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({}, {}) is out of bounds for a {}x{} grid",
                x, y, width, height
            ),
            GridError::DimensionsOverflow { width, height } => {
                write!(f, "grid dimensions {}x{} overflow usize", width, height)
            }
            GridError::LengthMismatch { expected, found } => write!(
                f,
                "expected {} values to fill the grid, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_coordinate_and_dimensions() {
        let e = GridError::OutOfBounds {
            x: 3,
            y: 0,
            width: 3,
            height: 2,
        };
        assert_eq!(
            e.to_string(),
            "coordinate (3, 0) is out of bounds for a 3x2 grid"
        );
    }

    #[test]
    fn display_construction_errors() {
        let e = GridError::LengthMismatch {
            expected: 6,
            found: 5,
        };
        assert_eq!(e.to_string(), "expected 6 values to fill the grid, found 5");

        let e = GridError::DimensionsOverflow {
            width: usize::MAX,
            height: 2,
        };
        assert!(e.to_string().contains("overflow"));
    }
}
