//! The read contract shared by every biome area, and the write contract on top of it.

use glam::IVec2;

use crate::biome::BiomeType;
use crate::error::AreaError;
use crate::extent::{BiomeBuffer, ImmutableBiomeBuffer, UnmodifiableBiomeView};

/// Read access to a bounded rectangle of biome cells.
///
/// Every coordinate-taking method validates both axes against this area's own
/// rectangle (not the rectangle of any storage behind it) and fails with
/// [`AreaError::OutOfBounds`] instead of clamping.
pub trait BiomeArea {
    /// Area type produced by [`biome_view`](Self::biome_view) and
    /// [`relative_biome_view`](Self::relative_biome_view). It has the same
    /// read/write capability as `Self`.
    type View: BiomeArea;

    /// Inclusive minimum corner.
    fn biome_min(&self) -> IVec2;

    /// Inclusive maximum corner.
    fn biome_max(&self) -> IVec2;

    /// Number of cells along each axis (`max - min + 1`).
    fn biome_size(&self) -> IVec2 {
        self.biome_max() - self.biome_min() + IVec2::ONE
    }

    /// Returns `true` if `(x, y)` lies inside this area.
    fn contains_biome(&self, x: i32, y: i32) -> bool {
        let (min, max) = (self.biome_min(), self.biome_max());
        x >= min.x && x <= max.x && y >= min.y && y <= max.y
    }

    /// Returns the biome at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::OutOfBounds`] if either axis is outside the area.
    fn get_biome(&self, x: i32, y: i32) -> Result<BiomeType, AreaError>;

    /// Vector form of [`get_biome`](Self::get_biome).
    fn get_biome_at(&self, pos: IVec2) -> Result<BiomeType, AreaError> {
        self.get_biome(pos.x, pos.y)
    }

    /// Returns a view over the sub-rectangle `min..=max` of this area.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::OutOfBounds`] if either corner lies outside this
    /// area or `min > max` on any axis.
    fn biome_view(&self, min: IVec2, max: IVec2) -> Result<Self::View, AreaError>;

    /// Returns a view over the same cells whose min corner is `(0, 0)`.
    fn relative_biome_view(&self) -> Self::View;

    /// Copies this area's cells into a new, detached, mutable buffer with the
    /// same rectangle.
    fn biome_copy(&self) -> BiomeBuffer;

    /// Copies this area's cells into a new, detached, read-only buffer.
    fn immutable_biome_copy(&self) -> ImmutableBiomeBuffer;

    /// Visits every cell, x varying fastest.
    fn for_each_biome<F>(&self, visitor: F)
    where
        F: FnMut(IVec2, BiomeType);

    /// Folds every cell into an accumulator, x varying fastest.
    fn reduce_biomes<T, F>(&self, init: T, reducer: F) -> T
    where
        F: FnMut(T, IVec2, BiomeType) -> T;

    /// Counts the cells holding `biome`.
    fn count_biome(&self, biome: BiomeType) -> usize {
        self.reduce_biomes(0, |count, _, b| if b == biome { count + 1 } else { count })
    }
}

/// Write access on top of [`BiomeArea`].
///
/// Writes land in the storage behind the area and are visible to every other
/// live view sharing it.
pub trait MutableBiomeArea: BiomeArea {
    /// Sets the biome at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::OutOfBounds`] if either axis is outside the area.
    fn set_biome(&mut self, x: i32, y: i32, biome: BiomeType) -> Result<(), AreaError>;

    /// Vector form of [`set_biome`](Self::set_biome).
    fn set_biome_at(&mut self, pos: IVec2, biome: BiomeType) -> Result<(), AreaError> {
        self.set_biome(pos.x, pos.y, biome)
    }

    /// Returns a read-only view that keeps observing writes made through `self`.
    fn unmodifiable_biome_view(&self) -> UnmodifiableBiomeView;

    /// Sets every cell to the biome returned by `filler`.
    fn fill_biomes<F>(&mut self, filler: F)
    where
        F: FnMut(IVec2) -> BiomeType;

    /// Replaces every cell with `mapper(pos, current)`.
    fn map_biomes<F>(&mut self, mapper: F)
    where
        F: FnMut(IVec2, BiomeType) -> BiomeType;

    /// Copies every cell of this area's rectangle from the same positions in `source`.
    ///
    /// All source values are read before the first write, so `source` may
    /// share storage with `self` at a different offset.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::OutOfBounds`] without writing anything if `source`
    /// does not cover this area's rectangle.
    fn copy_biomes_from<S>(&mut self, source: &S) -> Result<(), AreaError>
    where
        S: BiomeArea + ?Sized,
    {
        let positions = self.reduce_biomes(Vec::new(), |mut acc, pos, _| {
            acc.push(pos);
            acc
        });
        let values = positions
            .iter()
            .map(|&pos| source.get_biome_at(pos))
            .collect::<Result<Vec<_>, _>>()?;

        for (pos, biome) in positions.into_iter().zip(values) {
            self.set_biome_at(pos, biome)?;
        }
        Ok(())
    }
}
