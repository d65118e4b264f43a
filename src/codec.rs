//! # Codec
//!
//! Bijective transforms between a plain binary chromosome and an encoded one.
//! Every codec satisfies `decode(encode(x)) == x` and preserves length.
//!
//! ```rust
//! use bitga::codec::{Codec, GrayCodec};
//! use bitga::genotype::Genotype;
//!
//! let binary: Genotype = "1111101111".parse().unwrap();
//! let gray = GrayCodec.encode(&binary);
//!
//! assert_eq!(gray.to_string(), "1000011000");
//! assert_eq!(GrayCodec.decode(&gray), binary);
//! ```

use std::fmt::Debug;

use crate::genotype::Genotype;

/// A length-preserving bijection on chromosomes.
pub trait Codec: Debug + Send + Sync {
    fn encode(&self, binary: &Genotype) -> Genotype;

    fn decode(&self, encoded: &Genotype) -> Genotype;
}

/// The identity codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryCodec;

impl Codec for BinaryCodec {
    fn encode(&self, binary: &Genotype) -> Genotype {
        binary.clone()
    }

    fn decode(&self, encoded: &Genotype) -> Genotype {
        encoded.clone()
    }
}

/// Reflected binary (Gray) code: neighbouring integers differ in exactly one locus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrayCodec;

impl Codec for GrayCodec {
    fn encode(&self, binary: &Genotype) -> Genotype {
        let loci = binary.loci();
        let gray = loci
            .iter()
            .enumerate()
            .map(|(i, &bit)| if i == 0 { bit } else { loci[i - 1] ^ bit })
            .collect();
        Genotype::new(gray)
    }

    fn decode(&self, encoded: &Genotype) -> Genotype {
        // Each binary locus is the running XOR of the gray prefix.
        let binary = encoded
            .loci()
            .iter()
            .scan(false, |previous, &bit| {
                *previous ^= bit;
                Some(*previous)
            })
            .collect();
        Genotype::new(binary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genotype(text: &str) -> Genotype {
        text.parse().unwrap()
    }

    #[test]
    fn test_gray_encode() {
        let cases = [
            ("1111101111", "1000011000"),
            ("1111101110", "1000011001"),
            ("1010101010", "1111111111"),
            ("0000000000", "0000000000"),
        ];

        for (binary, gray) in cases {
            assert_eq!(GrayCodec.encode(&genotype(binary)).to_string(), gray);
        }
    }

    #[test]
    fn test_gray_decode() {
        let cases = [
            ("1000011000", "1111101111"),
            ("1000011001", "1111101110"),
            ("1111111111", "1010101010"),
            ("0000000000", "0000000000"),
        ];

        for (gray, binary) in cases {
            assert_eq!(GrayCodec.decode(&genotype(gray)).to_string(), binary);
        }
    }

    #[test]
    fn test_gray_neighbours_differ_in_one_locus() {
        for value in 0..255u64 {
            let a = GrayCodec.encode(&Genotype::from_decimal(value, 8).unwrap());
            let b = GrayCodec.encode(&Genotype::from_decimal(value + 1, 8).unwrap());
            let differing = a
                .loci()
                .iter()
                .zip(b.loci())
                .filter(|(x, y)| x != y)
                .count();
            assert_eq!(differing, 1);
        }
    }

    #[test]
    fn test_empty_chromosome() {
        let empty = Genotype::default();
        assert_eq!(GrayCodec.encode(&empty), empty);
        assert_eq!(GrayCodec.decode(&empty), empty);
    }

    #[test]
    fn test_binary_codec_is_identity() {
        let g = genotype("10011");
        assert_eq!(BinaryCodec.encode(&g), g);
        assert_eq!(BinaryCodec.decode(&g), g);
    }
}
