//! Bounded 2D biome areas: owning buffers, live views, detached snapshots, and
//! window/relative derivations with strict bounds checking.

pub mod area;
pub mod biome;
pub mod error;
pub mod extent;
pub mod factory;
mod storage;

pub use area::{BiomeArea, MutableBiomeArea};
pub use biome::{BiomeType, ParseBiomeError};
pub use error::AreaError;
pub use extent::{
    Access, BiomeBuffer, Extent, Immutable, ImmutableBiomeBuffer, Mutable, MutableBiomeView,
    Unmodifiable, UnmodifiableBiomeView,
};
pub use factory::BufferFactory;
