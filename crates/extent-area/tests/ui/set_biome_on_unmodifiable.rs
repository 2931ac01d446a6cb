use extent_area::{BiomeBuffer, BiomeType, MutableBiomeArea};

fn main() {
    // This should fail to compile: an unmodifiable view only implements
    // BiomeArea, so it has no set_biome even though its storage is writable.
    let buffer = BiomeBuffer::new(4, 4).unwrap();
    let view = buffer.unmodifiable_biome_view();
    let _ = view.set_biome(0, 0, BiomeType::Sky);
}
