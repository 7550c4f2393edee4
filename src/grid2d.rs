use crate::error::GridError;
use core::fmt::{Debug, Display, Formatter};
use log::{debug, trace};

/// A fixed-size two-dimensional container of `E` elements, addressed by `(x, y)`.
///
/// Every slot either holds an element or is absent (`None`). Slots are stored
/// row-major in a single buffer; slot `(x, y)` lives at `y * width + x`.
///
/// Equality and hashing are structural: two grids are equal when they have the
/// same dimensions and equal contents in every slot, and equal grids hash equal.
/// `Clone` is deep. Each clone owns its own slots, so writes to one are never
/// visible in the other.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Grid2D<E> {
    width: usize,
    height: usize,
    slots: Vec<Option<E>>,
}

fn slot_count(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .ok_or(GridError::DimensionsOverflow { width, height })
}

impl<E> Grid2D<E> {
    /// Creates a `width` x `height` grid with every slot absent.
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = slot_count(width, height).map_err(|e| {
            debug!("Grid2D::try_new: {}", e);
            e
        })?;
        trace!("Grid2D::try_new: {}x{}", width, height);
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Ok(Self {
            width,
            height,
            slots,
        })
    }

    /// Builds a fully populated grid from row-major `values`.
    pub fn from_elements(width: usize, height: usize, values: Vec<E>) -> Result<Self, GridError> {
        let expected = slot_count(width, height)?;
        if values.len() != expected {
            debug!(
                "Grid2D::from_elements: {}x{} needs {} values, got {}",
                width,
                height,
                expected,
                values.len()
            );
            return Err(GridError::LengthMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            slots: values.into_iter().map(Some).collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the number of slots, present or absent.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn slot_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn checked_slot_index(&self, x: usize, y: usize) -> usize {
        match self.slot_index(x, y) {
            Ok(index) => index,
            Err(e) => panic!("{}", e),
        }
    }

    /// Returns the element at `(x, y)`, or `None` if the slot is absent.
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&E> {
        self.slots[self.checked_slot_index(x, y)].as_ref()
    }

    pub fn try_get(&self, x: usize, y: usize) -> Result<Option<&E>, GridError> {
        let index = self.slot_index(x, y)?;
        Ok(self.slots[index].as_ref())
    }

    /// Overwrites the slot at `(x, y)` and returns its previous contents.
    /// Passing `None` clears the slot.
    ///
    /// Panics if `(x, y)` is out of bounds; nothing is written in that case.
    pub fn put<T: Into<Option<E>>>(&mut self, x: usize, y: usize, element: T) -> Option<E> {
        let index = self.checked_slot_index(x, y);
        core::mem::replace(&mut self.slots[index], element.into())
    }

    pub fn try_put<T: Into<Option<E>>>(
        &mut self,
        x: usize,
        y: usize,
        element: T,
    ) -> Result<Option<E>, GridError> {
        let index = self.slot_index(x, y)?;
        Ok(core::mem::replace(&mut self.slots[index], element.into()))
    }

    pub fn clear(&mut self, x: usize, y: usize) -> Option<E> {
        self.put(x, y, None)
    }

    /// Overwrites every slot with a clone of `element`.
    pub fn fill<T: Into<Option<E>>>(&mut self, element: T)
    where
        E: Clone,
    {
        debug!("Grid2D::fill: {}x{}", self.width, self.height);
        let element = element.into();
        for slot in self.slots.iter_mut() {
            *slot = element.clone();
        }
    }

    /// Returns row `y`, borrowed from the grid's storage.
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Option<E>] {
        if y >= self.height {
            panic!(
                "{}",
                GridError::OutOfBounds {
                    x: 0,
                    y,
                    width: self.width,
                    height: self.height,
                }
            );
        }
        let start = y * self.width;
        &self.slots[start..start + self.width]
    }

    /// Returns a new list of rows. The rows borrow the grid's own storage;
    /// no element is copied.
    pub fn copy_of_rows(&self) -> Vec<&[Option<E>]> {
        (0..self.height).map(|y| self.row(y)).collect()
    }

    /// Returns every slot, row-major, absent slots included.
    pub fn to_list(&self) -> Vec<Option<E>>
    where
        E: Clone,
    {
        self.slots.clone()
    }
}

// (x, y)
impl<E> core::ops::Index<(usize, usize)> for Grid2D<E> {
    type Output = Option<E>;
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.slots[self.checked_slot_index(x, y)]
    }
}

// (x, y)
impl<E> core::ops::IndexMut<(usize, usize)> for Grid2D<E> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        let index = self.checked_slot_index(x, y);
        &mut self.slots[index]
    }
}

impl<E: Display> Display for Grid2D<E> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Grid2D[")?;
        for (y, row) in self.copy_of_rows().into_iter().enumerate() {
            if y != 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "[")?;
            for (x, slot) in row.iter().enumerate() {
                if x != 0 {
                    write!(fmt, ", ")?;
                }
                match slot {
                    Some(element) => write!(fmt, "{}", element)?,
                    None => write!(fmt, "-")?,
                }
            }
            write!(fmt, "]")?;
        }
        write!(fmt, "]")
    }
}

impl<E: Debug> Debug for Grid2D<E> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_struct("Grid2D")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rows", &self.copy_of_rows())
            .finish()
    }
}
