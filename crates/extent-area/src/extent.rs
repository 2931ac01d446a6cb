//! Capability-tagged biome areas.
//!
//! [`Extent<A>`] is one type for every kind of area; the zero-sized access
//! marker `A` decides what it may do:
//!
//! - [`Mutable`]: reads and writes. A fresh [`BiomeBuffer`] owns its storage;
//!   views derived from it share that storage.
//! - [`Unmodifiable`]: reads only, but observes writes made through any
//!   mutable area sharing the same storage.
//! - [`Immutable`]: reads only, over storage nobody can write to.
//!
//! ```rust
//! use extent_area::{BiomeArea, BiomeBuffer, BiomeType, MutableBiomeArea};
//! use glam::IVec2;
//!
//! let mut buffer = BiomeBuffer::new(20, 15)?;
//! let live = buffer.unmodifiable_biome_view();
//! let frozen = buffer.immutable_biome_copy();
//!
//! buffer.set_biome(3, 4, BiomeType::Jungle)?;
//! assert_eq!(live.get_biome(3, 4)?, BiomeType::Jungle);
//! assert_eq!(frozen.get_biome(3, 4)?, BiomeType::Ocean);
//!
//! let window = buffer.biome_view(IVec2::new(4, 3), IVec2::new(15, 11))?;
//! assert_eq!(window.relative_biome_view().biome_max(), IVec2::new(11, 8));
//! # Ok::<(), extent_area::AreaError>(())
//! ```

use std::fmt;
use std::marker::PhantomData;

use glam::IVec2;

use crate::area::{BiomeArea, MutableBiomeArea};
use crate::biome::BiomeType;
use crate::error::AreaError;
use crate::storage::Window;

// Access marker types (zero-sized)
/// Marker for areas that can be read and written.
pub struct Mutable;

/// Marker for read-only areas backed by live, writable storage.
pub struct Unmodifiable;

/// Marker for read-only areas backed by storage nobody can write to.
pub struct Immutable;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Mutable {}
    impl Sealed for super::Unmodifiable {}
    impl Sealed for super::Immutable {}
}

/// Implemented by the access markers only.
pub trait Access: sealed::Sealed {
    /// `true` if the storage behind this kind of area can never change.
    const FROZEN: bool;

    /// Marker name for debug output.
    fn access_name() -> &'static str;
}

impl Access for Mutable {
    const FROZEN: bool = false;

    fn access_name() -> &'static str {
        "Mutable"
    }
}

impl Access for Unmodifiable {
    const FROZEN: bool = false;

    fn access_name() -> &'static str {
        "Unmodifiable"
    }
}

impl Access for Immutable {
    const FROZEN: bool = true;

    fn access_name() -> &'static str {
        "Immutable"
    }
}

/// A bounded rectangle of biome cells with access capability `A`.
pub struct Extent<A: Access> {
    window: Window,
    _access: PhantomData<A>,
}

/// Standalone mutable biome buffer (the backing store).
pub type BiomeBuffer = Extent<Mutable>;

/// Mutable view sharing storage with the area it was derived from.
pub type MutableBiomeView = Extent<Mutable>;

/// Read-only live view.
pub type UnmodifiableBiomeView = Extent<Unmodifiable>;

/// Read-only detached snapshot.
pub type ImmutableBiomeBuffer = Extent<Immutable>;

impl<A: Access> Extent<A> {
    fn from_window(window: Window) -> Self {
        Self {
            window,
            _access: PhantomData,
        }
    }

    /// Returns `true` if both areas render the same storage allocation.
    pub fn shares_storage_with<B: Access>(&self, other: &Extent<B>) -> bool {
        self.window.shares_storage(&other.window)
    }
}

impl BiomeBuffer {
    /// Creates a `width`×`height` buffer at the origin filled with
    /// [`BiomeType::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::InvalidDimension`] if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, AreaError> {
        Self::with_fill(width, height, BiomeType::default())
    }

    /// Creates a `width`×`height` buffer at the origin filled with `fill`.
    pub fn with_fill(width: i32, height: i32, fill: BiomeType) -> Result<Self, AreaError> {
        Self::with_bounds(IVec2::ZERO, IVec2::new(width, height), fill)
    }

    /// Creates a buffer whose min corner is `start`, spanning `size` cells.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::InvalidDimension`] if either component of `size`
    /// is not positive or the rectangle would overflow `i32`.
    pub fn with_bounds(start: IVec2, size: IVec2, fill: BiomeType) -> Result<Self, AreaError> {
        Window::allocate(start, size, fill).map(Self::from_window)
    }
}

impl<A: Access> BiomeArea for Extent<A> {
    type View = Extent<A>;

    fn biome_min(&self) -> IVec2 {
        self.window.min()
    }

    fn biome_max(&self) -> IVec2 {
        self.window.max()
    }

    fn biome_size(&self) -> IVec2 {
        self.window.size()
    }

    fn contains_biome(&self, x: i32, y: i32) -> bool {
        self.window.contains(IVec2::new(x, y))
    }

    fn get_biome(&self, x: i32, y: i32) -> Result<BiomeType, AreaError> {
        self.window.get(IVec2::new(x, y))
    }

    fn biome_view(&self, min: IVec2, max: IVec2) -> Result<Self::View, AreaError> {
        self.window.narrow(min, max).map(Extent::from_window)
    }

    fn relative_biome_view(&self) -> Self::View {
        Extent::from_window(self.window.rebase())
    }

    fn biome_copy(&self) -> BiomeBuffer {
        Extent::from_window(self.window.detach())
    }

    fn immutable_biome_copy(&self) -> ImmutableBiomeBuffer {
        if A::FROZEN {
            Extent::from_window(self.window.clone())
        } else {
            Extent::from_window(self.window.detach())
        }
    }

    fn for_each_biome<F>(&self, mut visitor: F)
    where
        F: FnMut(IVec2, BiomeType),
    {
        for pos in self.window.positions() {
            visitor(pos, self.window.get_unchecked(pos));
        }
    }

    fn reduce_biomes<T, F>(&self, init: T, mut reducer: F) -> T
    where
        F: FnMut(T, IVec2, BiomeType) -> T,
    {
        self.window
            .positions()
            .fold(init, |acc, pos| reducer(acc, pos, self.window.get_unchecked(pos)))
    }
}

impl MutableBiomeArea for Extent<Mutable> {
    fn set_biome(&mut self, x: i32, y: i32, biome: BiomeType) -> Result<(), AreaError> {
        self.window.set(IVec2::new(x, y), biome)
    }

    fn unmodifiable_biome_view(&self) -> UnmodifiableBiomeView {
        Extent::from_window(self.window.clone())
    }

    fn fill_biomes<F>(&mut self, mut filler: F)
    where
        F: FnMut(IVec2) -> BiomeType,
    {
        for pos in self.window.positions() {
            self.window.set_unchecked(pos, filler(pos));
        }
    }

    fn map_biomes<F>(&mut self, mut mapper: F)
    where
        F: FnMut(IVec2, BiomeType) -> BiomeType,
    {
        for pos in self.window.positions() {
            let current = self.window.get_unchecked(pos);
            self.window.set_unchecked(pos, mapper(pos, current));
        }
    }
}

impl<A: Access> fmt::Debug for Extent<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extent")
            .field("access", &A::access_name())
            .field("min", &self.window.min())
            .field("max", &self.window.max())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn striped(width: i32, height: i32) -> BiomeBuffer {
        let mut buffer = BiomeBuffer::new(width, height).unwrap();
        buffer.fill_biomes(|pos| BiomeType::ALL[(pos.x + pos.y) as usize % 5]);
        buffer
    }

    #[test]
    fn test_new_buffer_is_default_filled() {
        let buffer = BiomeBuffer::new(3, 2).unwrap();
        assert_eq!(buffer.count_biome(BiomeType::default()), 6);
    }

    #[test]
    fn test_with_bounds_offsets_rectangle() {
        let buffer =
            BiomeBuffer::with_bounds(IVec2::new(-8, 16), IVec2::new(4, 4), BiomeType::Mesa)
                .unwrap();
        assert_eq!(buffer.biome_min(), IVec2::new(-8, 16));
        assert_eq!(buffer.biome_max(), IVec2::new(-5, 19));
        assert_eq!(buffer.get_biome(-8, 16), Ok(BiomeType::Mesa));
        assert!(buffer.get_biome(0, 0).is_err());
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert_eq!(
            BiomeBuffer::new(0, 15).err(),
            Some(AreaError::InvalidDimension {
                width: 0,
                height: 15
            })
        );
        assert!(BiomeBuffer::new(20, -1).is_err());
    }

    #[test]
    fn test_unmodifiable_view_is_live() {
        let mut buffer = BiomeBuffer::new(8, 8).unwrap();
        let view = buffer.unmodifiable_biome_view();
        assert!(view.shares_storage_with(&buffer));

        buffer.set_biome(5, 6, BiomeType::Swampland).unwrap();
        assert_eq!(view.get_biome(5, 6), Ok(BiomeType::Swampland));
    }

    #[test]
    fn test_unmodifiable_window_sees_sibling_writes() {
        let buffer = BiomeBuffer::new(8, 8).unwrap();
        let mut writer = buffer.biome_view(IVec2::new(0, 0), IVec2::new(4, 4)).unwrap();
        let reader = buffer
            .unmodifiable_biome_view()
            .biome_view(IVec2::new(3, 3), IVec2::new(7, 7))
            .unwrap();

        writer.set_biome(4, 4, BiomeType::Savanna).unwrap();
        assert_eq!(reader.get_biome(4, 4), Ok(BiomeType::Savanna));
    }

    #[test]
    fn test_immutable_copy_is_detached() {
        let mut buffer = striped(6, 6);
        let snapshot = buffer.immutable_biome_copy();
        let before = snapshot.get_biome(2, 2).unwrap();

        buffer.set_biome(2, 2, BiomeType::Sky).unwrap();
        assert_eq!(snapshot.get_biome(2, 2), Ok(before));
        assert!(!snapshot.shares_storage_with(&buffer));
    }

    #[test]
    fn test_immutable_copy_of_immutable_shares_storage() {
        let snapshot = striped(4, 4).immutable_biome_copy();
        let again = snapshot.immutable_biome_copy();
        assert!(again.shares_storage_with(&snapshot));
    }

    #[test]
    fn test_biome_copy_of_unmodifiable_is_writable_and_detached() {
        let buffer = striped(5, 5);
        let view = buffer.unmodifiable_biome_view();
        let mut copy = view.biome_copy();

        copy.set_biome(0, 0, BiomeType::Sky).unwrap();
        assert_ne!(buffer.get_biome(0, 0), Ok(BiomeType::Sky));
        assert_ne!(view.get_biome(0, 0), Ok(BiomeType::Sky));
    }

    #[test]
    fn test_window_writes_reach_parent() {
        let buffer = BiomeBuffer::new(20, 15).unwrap();
        let mut window = buffer.biome_view(IVec2::new(4, 3), IVec2::new(15, 11)).unwrap();
        window.set_biome(15, 11, BiomeType::Jungle).unwrap();
        assert_eq!(buffer.get_biome(15, 11), Ok(BiomeType::Jungle));
        assert!(window.set_biome(16, 11, BiomeType::Jungle).is_err());
    }

    #[test]
    fn test_relative_view_reads_parent_cells() {
        let parent = striped(20, 15);
        let window = parent.biome_view(IVec2::new(4, 3), IVec2::new(15, 11)).unwrap();
        let relative = window.relative_biome_view();

        assert_eq!(relative.biome_min(), IVec2::ZERO);
        assert_eq!(relative.biome_max(), IVec2::new(11, 8));
        assert_eq!(relative.biome_size(), IVec2::new(12, 9));
        assert_eq!(relative.get_biome(0, 0), parent.get_biome(4, 3));
        assert_eq!(relative.get_biome(11, 8), parent.get_biome(15, 11));
    }

    #[test]
    fn test_relative_view_of_immutable_stays_immutable() {
        let snapshot = striped(10, 10).immutable_biome_copy();
        let relative: ImmutableBiomeBuffer = snapshot
            .biome_view(IVec2::new(2, 2), IVec2::new(5, 5))
            .unwrap()
            .relative_biome_view();
        assert_eq!(relative.get_biome(0, 0), snapshot.get_biome(2, 2));
    }

    #[test]
    fn test_for_each_visits_every_cell_once() {
        let buffer = striped(7, 3);
        let mut visited = Vec::new();
        buffer.for_each_biome(|pos, _| visited.push(pos));
        assert_eq!(visited.len(), 21);
        assert_eq!(visited.first(), Some(&IVec2::new(0, 0)));
        assert_eq!(visited.last(), Some(&IVec2::new(6, 2)));
    }

    #[test]
    fn test_reduce_and_count() {
        let mut buffer = BiomeBuffer::new(4, 4).unwrap();
        buffer.set_biome(1, 1, BiomeType::Desert).unwrap();
        buffer.set_biome(2, 3, BiomeType::Desert).unwrap();

        assert_eq!(buffer.count_biome(BiomeType::Desert), 2);
        let id_sum = buffer.reduce_biomes(0u32, |acc, _, b| acc + b.id() as u32);
        assert_eq!(id_sum, 2 * BiomeType::Desert.id() as u32);
    }

    #[test]
    fn test_map_biomes_in_window_only() {
        let buffer = BiomeBuffer::new(6, 6).unwrap();
        let mut window = buffer.biome_view(IVec2::new(1, 1), IVec2::new(2, 2)).unwrap();
        window.map_biomes(|_, b| if b == BiomeType::Ocean { BiomeType::FrozenOcean } else { b });

        assert_eq!(buffer.count_biome(BiomeType::FrozenOcean), 4);
        assert_eq!(buffer.get_biome(0, 0), Ok(BiomeType::Ocean));
    }

    #[test]
    fn test_copy_biomes_from_requires_cover() {
        let source = striped(4, 4);
        let mut target = BiomeBuffer::with_fill(6, 6, BiomeType::Sky).unwrap();

        let err = target.copy_biomes_from(&source).unwrap_err();
        assert!(matches!(err, AreaError::OutOfBounds { .. }));
        assert_eq!(target.count_biome(BiomeType::Sky), 36, "nothing written on failure");

        let mut inner = target.biome_view(IVec2::new(1, 1), IVec2::new(3, 3)).unwrap();
        inner.copy_biomes_from(&source).unwrap();
        assert_eq!(target.get_biome(3, 3), source.get_biome(3, 3));
        assert_eq!(target.get_biome(0, 0), Ok(BiomeType::Sky));
    }

    #[test]
    fn test_copy_biomes_from_overlapping_shifted_view() {
        let mut buffer = BiomeBuffer::new(4, 4).unwrap();
        buffer.fill_biomes(|pos| BiomeType::ALL[(pos.x + pos.y * 4) as usize]);
        let before = buffer.immutable_biome_copy();

        // (x, y) in `shifted` is (x + 1, y + 1) in `buffer`, so reading `buffer`
        // while writing `shifted` would pick up cells written earlier in the pass.
        let mut shifted = buffer
            .biome_view(IVec2::new(1, 1), IVec2::new(3, 3))
            .unwrap()
            .relative_biome_view();
        shifted.copy_biomes_from(&buffer.unmodifiable_biome_view()).unwrap();

        for y in 0..=2 {
            for x in 0..=2 {
                assert_eq!(shifted.get_biome(x, y), before.get_biome(x, y), "at ({x}, {y})");
                assert_eq!(buffer.get_biome(x + 1, y + 1), before.get_biome(x, y));
            }
        }
        assert_eq!(buffer.get_biome(0, 0), before.get_biome(0, 0));
        assert_eq!(buffer.get_biome(3, 0), before.get_biome(3, 0));
    }

    #[test]
    fn test_debug_names_access() {
        let buffer = BiomeBuffer::new(2, 2).unwrap();
        let debug = format!("{:?}", buffer.unmodifiable_biome_view());
        assert!(debug.contains("Unmodifiable"));
    }
}
