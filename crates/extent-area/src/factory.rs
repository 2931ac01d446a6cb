//! Buffer factory: creates biome buffers with a configured default fill.

use glam::IVec2;

use crate::biome::BiomeType;
use crate::error::AreaError;
use crate::extent::BiomeBuffer;

/// Creates [`BiomeBuffer`]s whose cells start as `default_biome`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferFactory {
    default_biome: BiomeType,
}

impl BufferFactory {
    pub fn new(default_biome: BiomeType) -> Self {
        Self { default_biome }
    }

    /// Biome every new buffer is filled with.
    pub fn default_biome(&self) -> BiomeType {
        self.default_biome
    }

    /// Creates a `width`×`height` buffer with its min corner at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::InvalidDimension`] if either dimension is not positive.
    pub fn create_biome_buffer(&self, width: i32, height: i32) -> Result<BiomeBuffer, AreaError> {
        BiomeBuffer::with_fill(width, height, self.default_biome)
    }

    /// Vector form of [`create_biome_buffer`](Self::create_biome_buffer).
    pub fn create_biome_buffer_sized(&self, size: IVec2) -> Result<BiomeBuffer, AreaError> {
        self.create_biome_buffer(size.x, size.y)
    }

    /// Creates a buffer whose min corner is `start`.
    pub fn create_biome_buffer_at(
        &self,
        start: IVec2,
        size: IVec2,
    ) -> Result<BiomeBuffer, AreaError> {
        BiomeBuffer::with_bounds(start, size, self.default_biome)
    }
}
