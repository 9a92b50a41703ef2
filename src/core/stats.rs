use crate::core::error::{DnagenError, Result};
use crate::core::model::NUCLEOTIDES;

// Percentages of the recognized nucleotides only; anything else (e.g. an
// inserted name) is filtered out before counting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composition {
    pub a: f64,
    pub c: f64,
    pub g: f64,
    pub t: f64,
    pub gc: f64,
}

pub fn composition(sequence: &str) -> Result<Composition> {
    let mut counts = [0u64; NUCLEOTIDES.len()];
    let mut total = 0u64;
    for ch in sequence.chars() {
        if let Some(i) = NUCLEOTIDES.iter().position(|&n| n == ch) {
            counts[i] += 1;
            total += 1;
        }
    }
    if total == 0 {
        return Err(DnagenError::EmptyComposition);
    }

    let pct = |count: u64| round1(count as f64 * 100.0 / total as f64);
    let (a, c, g, t) = (pct(counts[0]), pct(counts[1]), pct(counts[2]), pct(counts[3]));
    Ok(Composition {
        a,
        c,
        g,
        t,
        gc: round1(c + g),
    })
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_composition() {
        let comp = composition("ACGTACGTAC").unwrap();
        assert_eq!(comp.a, 30.0);
        assert_eq!(comp.c, 30.0);
        assert_eq!(comp.g, 20.0);
        assert_eq!(comp.t, 20.0);
        assert_eq!(comp.gc, 50.0);
    }

    #[test]
    fn inserted_name_does_not_skew_composition() {
        let clean = composition("ACGTACGTAC").unwrap();
        let annotated = composition("ACGTAXCGTAC").unwrap();
        assert_eq!(clean, annotated);

        let noisy = composition("Zz-ACGTACGTAC!?").unwrap();
        assert_eq!(clean, noisy);
    }

    #[test]
    fn lowercase_bases_are_not_counted() {
        // Filtering matches the uppercase alphabet only.
        let comp = composition("AAaa").unwrap();
        assert_eq!(comp.a, 100.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred_within_rounding() {
        for seq in ["A", "ACG", "AACCGGTT", "ACGTACGTACGTACG", "GGGCCCA"] {
            let comp = composition(seq).unwrap();
            let sum = comp.a + comp.c + comp.g + comp.t;
            assert!((sum - 100.0).abs() <= 0.4, "{}: sum {}", seq, sum);
        }
    }

    #[test]
    fn gc_is_the_rounded_sum_of_c_and_g() {
        for seq in ["ACG", "GGGGGGA", "ATATAT", "CCCGGG"] {
            let comp = composition(seq).unwrap();
            assert_eq!(comp.gc, ((comp.c + comp.g) * 10.0).round() / 10.0);
        }
    }

    #[test]
    fn empty_composition_is_an_error() {
        for seq in ["", "Xavier", "   ", "acgt"] {
            match composition(seq) {
                Err(DnagenError::EmptyComposition) => {}
                other => panic!("expected EmptyComposition for {:?}, got {:?}", seq, other),
            }
        }
    }
}
