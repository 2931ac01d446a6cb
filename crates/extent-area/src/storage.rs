//! Shared cell storage and the rectangle logic every area funnels through.
//!
//! A [`BiomeStorage`] owns dense row-major cells over an absolute rectangle.
//! A [`Window`] is a bounded, possibly offset lens onto one storage. Several
//! windows can point at the same storage via [`Rc`]; cells use [`Cell`] so a
//! write through one window is observed by all the others.

use std::cell::Cell;
use std::rc::Rc;

use glam::IVec2;

use crate::biome::BiomeType;
use crate::error::AreaError;

/// Dense biome cells over the rectangle `origin..origin + size` (x varies fastest).
#[derive(Debug)]
pub(crate) struct BiomeStorage {
    origin: IVec2,
    size: IVec2,
    cells: Box<[Cell<BiomeType>]>,
}

impl BiomeStorage {
    fn from_cells(origin: IVec2, size: IVec2, cells: Box<[Cell<BiomeType>]>) -> Self {
        debug_assert_eq!(cells.len(), size.x as usize * size.y as usize);
        Self {
            origin,
            size,
            cells,
        }
    }

    /// Converts an absolute storage position to a linear index.
    fn linear_index(&self, pos: IVec2) -> usize {
        let rel = pos - self.origin;
        debug_assert!(rel.x >= 0 && rel.y >= 0 && rel.x < self.size.x && rel.y < self.size.y);
        rel.x as usize + rel.y as usize * self.size.x as usize
    }

    fn get(&self, pos: IVec2) -> BiomeType {
        self.cells[self.linear_index(pos)].get()
    }

    fn set(&self, pos: IVec2, biome: BiomeType) {
        self.cells[self.linear_index(pos)].set(biome);
    }
}

/// A bounded view onto a [`BiomeStorage`].
///
/// Caller coordinates lie in `min..=max`; adding `offset` yields the storage
/// coordinate. Invariant: `min <= max` on both axes and the translated
/// rectangle lies inside the storage.
#[derive(Clone, Debug)]
pub(crate) struct Window {
    storage: Rc<BiomeStorage>,
    min: IVec2,
    max: IVec2,
    offset: IVec2,
}

impl Window {
    /// Allocates fresh storage of `size` cells starting at `start`, all set to `fill`.
    pub(crate) fn allocate(start: IVec2, size: IVec2, fill: BiomeType) -> Result<Self, AreaError> {
        let invalid = AreaError::InvalidDimension {
            width: size.x,
            height: size.y,
        };
        if size.x <= 0 || size.y <= 0 {
            return Err(invalid);
        }
        let max = match (
            start.x.checked_add(size.x - 1),
            start.y.checked_add(size.y - 1),
        ) {
            (Some(x), Some(y)) => IVec2::new(x, y),
            _ => return Err(invalid),
        };

        let len = size.x as usize * size.y as usize;
        let cells = (0..len).map(|_| Cell::new(fill)).collect();
        tracing::debug!(?start, ?size, %fill, "allocated biome storage");

        Ok(Self {
            storage: Rc::new(BiomeStorage::from_cells(start, size, cells)),
            min: start,
            max,
            offset: IVec2::ZERO,
        })
    }

    pub(crate) fn min(&self) -> IVec2 {
        self.min
    }

    pub(crate) fn max(&self) -> IVec2 {
        self.max
    }

    pub(crate) fn size(&self) -> IVec2 {
        self.max - self.min + IVec2::ONE
    }

    /// Returns true if the point lies inside or on the boundary.
    pub(crate) fn contains(&self, pos: IVec2) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }

    fn check(&self, pos: IVec2) -> Result<(), AreaError> {
        if self.contains(pos) {
            Ok(())
        } else {
            tracing::trace!(?pos, min = ?self.min, max = ?self.max, "biome position out of bounds");
            Err(self.out_of_bounds(pos))
        }
    }

    fn out_of_bounds(&self, position: IVec2) -> AreaError {
        AreaError::OutOfBounds {
            position,
            min: self.min,
            max: self.max,
        }
    }

    pub(crate) fn get(&self, pos: IVec2) -> Result<BiomeType, AreaError> {
        self.check(pos)?;
        Ok(self.storage.get(pos + self.offset))
    }

    pub(crate) fn set(&self, pos: IVec2, biome: BiomeType) -> Result<(), AreaError> {
        self.check(pos)?;
        self.storage.set(pos + self.offset, biome);
        Ok(())
    }

    /// Reads a position already known to be inside the window.
    pub(crate) fn get_unchecked(&self, pos: IVec2) -> BiomeType {
        debug_assert!(self.contains(pos));
        self.storage.get(pos + self.offset)
    }

    /// Writes a position already known to be inside the window.
    pub(crate) fn set_unchecked(&self, pos: IVec2, biome: BiomeType) {
        debug_assert!(self.contains(pos));
        self.storage.set(pos + self.offset, biome);
    }

    /// Narrows the window to `min..=max`, sharing the same storage.
    pub(crate) fn narrow(&self, min: IVec2, max: IVec2) -> Result<Self, AreaError> {
        self.check(min)?;
        self.check(max)?;
        if min.x > max.x || min.y > max.y {
            return Err(AreaError::OutOfBounds {
                position: max,
                min,
                max: self.max,
            });
        }
        Ok(Self {
            storage: Rc::clone(&self.storage),
            min,
            max,
            offset: self.offset,
        })
    }

    /// Re-bases the window so that its min corner becomes `(0, 0)`.
    pub(crate) fn rebase(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            min: IVec2::ZERO,
            max: self.max - self.min,
            offset: self.offset + self.min,
        }
    }

    /// Deep-copies the cells of this window into fresh storage with the same rectangle.
    pub(crate) fn detach(&self) -> Self {
        let size = self.size();
        let cells = self
            .positions()
            .map(|pos| Cell::new(self.get_unchecked(pos)))
            .collect();
        tracing::trace!(min = ?self.min, ?size, "copied biome window");

        Self {
            storage: Rc::new(BiomeStorage::from_cells(self.min, size, cells)),
            min: self.min,
            max: self.max,
            offset: IVec2::ZERO,
        }
    }

    /// Iterates every position of the window, x fastest.
    pub(crate) fn positions(&self) -> impl Iterator<Item = IVec2> + use<> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| IVec2::new(x, y)))
    }

    /// Returns true if both windows render the same storage allocation.
    pub(crate) fn shares_storage(&self, other: &Window) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
