use crate::core::model::NUCLEOTIDES;
use rand::Rng;

// One draw per base, in order; seeded runs depend on this.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())])
        .collect()
}

// Offset is drawn from [0, len] inclusive, so the name can land at either
// end. Exactly one draw, even for an empty name.
pub fn insert_name<R: Rng + ?Sized>(rng: &mut R, sequence: &str, name: &str) -> String {
    let offset = rng.random_range(0..=sequence.len());
    let mut out = String::with_capacity(sequence.len() + name.len());
    out.push_str(&sequence[..offset]);
    out.push_str(name);
    out.push_str(&sequence[offset..]);
    out
}
