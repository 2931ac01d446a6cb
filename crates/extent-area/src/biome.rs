//! Biome classifications stored in every area cell.
//!
//! [`BiomeType`] is a closed set of categorical values. Ids follow the classic
//! vanilla numbering so that `0` (Ocean) is also the default fill of a fresh
//! buffer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Compact biome identifier stored inside every area cell (1 byte).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeType {
    #[default]
    Ocean = 0,
    Plains = 1,
    Desert = 2,
    ExtremeHills = 3,
    Forest = 4,
    Taiga = 5,
    Swampland = 6,
    River = 7,
    Hell = 8,
    Sky = 9,
    FrozenOcean = 10,
    FrozenRiver = 11,
    IcePlains = 12,
    IceMountains = 13,
    MushroomIsland = 14,
    MushroomIslandShore = 15,
    Beach = 16,
    DesertHills = 17,
    ForestHills = 18,
    TaigaHills = 19,
    ExtremeHillsEdge = 20,
    Jungle = 21,
    JungleHills = 22,
    JungleEdge = 23,
    DeepOcean = 24,
    StoneBeach = 25,
    ColdBeach = 26,
    BirchForest = 27,
    BirchForestHills = 28,
    RoofedForest = 29,
    ColdTaiga = 30,
    ColdTaigaHills = 31,
    MegaTaiga = 32,
    MegaTaigaHills = 33,
    ExtremeHillsPlus = 34,
    Savanna = 35,
    SavannaPlateau = 36,
    Mesa = 37,
    MesaPlateauForest = 38,
    MesaPlateau = 39,
}

/// Error returned when parsing an unknown biome name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown biome type: {0}")]
pub struct ParseBiomeError(pub String);

impl BiomeType {
    /// Every biome type, indexed by [`BiomeType::id`].
    pub const ALL: [BiomeType; 40] = [
        BiomeType::Ocean,
        BiomeType::Plains,
        BiomeType::Desert,
        BiomeType::ExtremeHills,
        BiomeType::Forest,
        BiomeType::Taiga,
        BiomeType::Swampland,
        BiomeType::River,
        BiomeType::Hell,
        BiomeType::Sky,
        BiomeType::FrozenOcean,
        BiomeType::FrozenRiver,
        BiomeType::IcePlains,
        BiomeType::IceMountains,
        BiomeType::MushroomIsland,
        BiomeType::MushroomIslandShore,
        BiomeType::Beach,
        BiomeType::DesertHills,
        BiomeType::ForestHills,
        BiomeType::TaigaHills,
        BiomeType::ExtremeHillsEdge,
        BiomeType::Jungle,
        BiomeType::JungleHills,
        BiomeType::JungleEdge,
        BiomeType::DeepOcean,
        BiomeType::StoneBeach,
        BiomeType::ColdBeach,
        BiomeType::BirchForest,
        BiomeType::BirchForestHills,
        BiomeType::RoofedForest,
        BiomeType::ColdTaiga,
        BiomeType::ColdTaigaHills,
        BiomeType::MegaTaiga,
        BiomeType::MegaTaigaHills,
        BiomeType::ExtremeHillsPlus,
        BiomeType::Savanna,
        BiomeType::SavannaPlateau,
        BiomeType::Mesa,
        BiomeType::MesaPlateauForest,
        BiomeType::MesaPlateau,
    ];

    /// Numeric id of this biome.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns the biome with the given id, or `None` if unassigned.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Lowercase snake_case name (e.g. `"extreme_hills_plus"`).
    pub fn name(self) -> &'static str {
        match self {
            BiomeType::Ocean => "ocean",
            BiomeType::Plains => "plains",
            BiomeType::Desert => "desert",
            BiomeType::ExtremeHills => "extreme_hills",
            BiomeType::Forest => "forest",
            BiomeType::Taiga => "taiga",
            BiomeType::Swampland => "swampland",
            BiomeType::River => "river",
            BiomeType::Hell => "hell",
            BiomeType::Sky => "sky",
            BiomeType::FrozenOcean => "frozen_ocean",
            BiomeType::FrozenRiver => "frozen_river",
            BiomeType::IcePlains => "ice_plains",
            BiomeType::IceMountains => "ice_mountains",
            BiomeType::MushroomIsland => "mushroom_island",
            BiomeType::MushroomIslandShore => "mushroom_island_shore",
            BiomeType::Beach => "beach",
            BiomeType::DesertHills => "desert_hills",
            BiomeType::ForestHills => "forest_hills",
            BiomeType::TaigaHills => "taiga_hills",
            BiomeType::ExtremeHillsEdge => "extreme_hills_edge",
            BiomeType::Jungle => "jungle",
            BiomeType::JungleHills => "jungle_hills",
            BiomeType::JungleEdge => "jungle_edge",
            BiomeType::DeepOcean => "deep_ocean",
            BiomeType::StoneBeach => "stone_beach",
            BiomeType::ColdBeach => "cold_beach",
            BiomeType::BirchForest => "birch_forest",
            BiomeType::BirchForestHills => "birch_forest_hills",
            BiomeType::RoofedForest => "roofed_forest",
            BiomeType::ColdTaiga => "cold_taiga",
            BiomeType::ColdTaigaHills => "cold_taiga_hills",
            BiomeType::MegaTaiga => "mega_taiga",
            BiomeType::MegaTaigaHills => "mega_taiga_hills",
            BiomeType::ExtremeHillsPlus => "extreme_hills_plus",
            BiomeType::Savanna => "savanna",
            BiomeType::SavannaPlateau => "savanna_plateau",
            BiomeType::Mesa => "mesa",
            BiomeType::MesaPlateauForest => "mesa_plateau_forest",
            BiomeType::MesaPlateau => "mesa_plateau",
        }
    }

    /// Single ASCII character used when rendering an area as text.
    pub fn symbol(self) -> char {
        match self {
            BiomeType::Ocean | BiomeType::DeepOcean => '~',
            BiomeType::FrozenOcean => '=',
            BiomeType::River | BiomeType::FrozenRiver => '-',
            BiomeType::Beach
            | BiomeType::StoneBeach
            | BiomeType::ColdBeach
            | BiomeType::MushroomIslandShore => '.',
            BiomeType::Plains => ',',
            BiomeType::Desert | BiomeType::DesertHills => 'd',
            BiomeType::ExtremeHills
            | BiomeType::ExtremeHillsEdge
            | BiomeType::ExtremeHillsPlus => '^',
            BiomeType::Forest
            | BiomeType::ForestHills
            | BiomeType::BirchForest
            | BiomeType::BirchForestHills
            | BiomeType::RoofedForest => 'f',
            BiomeType::Taiga
            | BiomeType::TaigaHills
            | BiomeType::MegaTaiga
            | BiomeType::MegaTaigaHills => 't',
            BiomeType::ColdTaiga | BiomeType::ColdTaigaHills => 'T',
            BiomeType::Swampland => 's',
            BiomeType::Hell => '#',
            BiomeType::Sky => ' ',
            BiomeType::IcePlains | BiomeType::IceMountains => '*',
            BiomeType::MushroomIsland => 'm',
            BiomeType::Jungle | BiomeType::JungleHills | BiomeType::JungleEdge => 'j',
            BiomeType::Savanna | BiomeType::SavannaPlateau => 'v',
            BiomeType::Mesa | BiomeType::MesaPlateauForest | BiomeType::MesaPlateau => 'M',
        }
    }
}

impl fmt::Display for BiomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BiomeType {
    type Err = ParseBiomeError;

    /// Parses a snake_case biome name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|biome| biome.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseBiomeError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
