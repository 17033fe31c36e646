use thiserror::Error;

use crate::LANES;

/// Required seed length for the lane-vector path: one little-endian u32
/// per lane.
pub const SEED_BYTES: usize = LANES * 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("invalid seed length: expected {expected} bytes, got {got}")]
    InvalidSeedLength { expected: usize, got: usize },
    #[error("seed hex must be {0} digits (two per byte)")]
    InvalidHexLength(usize),
    #[error("invalid hex digit in seed: {0:?}")]
    InvalidHexDigit(char),
}

/// Reinterprets exactly `SEED_BYTES` bytes as 8 little-endian u32 words,
/// word order = lane order. Any other length (including lengths that are
/// not a multiple of 4) is rejected here, before the updaters run.
pub fn lanes_from_bytes(bytes: &[u8]) -> Result<[u32; LANES], SeedError> {
    if bytes.len() != SEED_BYTES {
        return Err(SeedError::InvalidSeedLength {
            expected: SEED_BYTES,
            got: bytes.len(),
        });
    }
    let mut lanes = [0u32; LANES];
    for (lane, word) in lanes.iter_mut().zip(bytes.chunks_exact(4)) {
        *lane = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
    }
    Ok(lanes)
}

/// Broadcasts one scalar seed to every lane.
pub fn lanes_from_scalar(seed: u32) -> [u32; LANES] {
    [seed; LANES]
}

/// Decodes a 64-digit hex string into the 32 seed bytes and reinterprets
/// them as lanes.
pub fn parse_seed_hex(s: &str) -> Result<[u32; LANES], SeedError> {
    if s.len() != SEED_BYTES * 2 {
        return Err(SeedError::InvalidHexLength(SEED_BYTES * 2));
    }
    let mut bytes = [0u8; SEED_BYTES];
    for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
        *byte = hex_digit(pair[0] as char)? << 4 | hex_digit(pair[1] as char)?;
    }
    lanes_from_bytes(&bytes)
}

fn hex_digit(c: char) -> Result<u8, SeedError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(SeedError::InvalidHexDigit(c))
}

#[test]
fn test_lanes_from_bytes_little_endian() {
    let mut bytes = [0u8; SEED_BYTES];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }
    let lanes = lanes_from_bytes(&bytes).unwrap();
    assert_eq!(lanes[0], 0x0302_0100);
    assert_eq!(lanes[1], 0x0706_0504);
    assert_eq!(lanes[7], 0x1F1E_1D1C);
}

#[test]
fn test_lanes_from_bytes_rejects_bad_lengths() {
    for len in [0, 4, 31, 33, 64] {
        let bytes = vec![0u8; len];
        assert_eq!(
            lanes_from_bytes(&bytes),
            Err(SeedError::InvalidSeedLength {
                expected: SEED_BYTES,
                got: len
            })
        );
    }
}

#[test]
fn test_lanes_from_scalar_broadcasts() {
    assert_eq!(lanes_from_scalar(0xABCD_EF01), [0xABCD_EF01; LANES]);
}

#[test]
fn test_parse_seed_hex() {
    let hex = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    let lanes = parse_seed_hex(hex).unwrap();
    assert_eq!(lanes[0], 0x0302_0100);
    assert_eq!(lanes[7], 0x1F1E_1D1C);

    assert_eq!(parse_seed_hex("0011"), Err(SeedError::InvalidHexLength(64)));
    let bad = "zz0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    assert_eq!(parse_seed_hex(bad), Err(SeedError::InvalidHexDigit('z')));
}
