use extent_area::{BiomeArea, BiomeBuffer, BiomeType, MutableBiomeArea};

fn main() {
    // This should fail to compile: an immutable snapshot only implements
    // BiomeArea, so there is no way to write through it.
    let buffer = BiomeBuffer::new(4, 4).unwrap();
    let snapshot = buffer.immutable_biome_copy();
    let _ = snapshot.set_biome(0, 0, BiomeType::Sky);
}
