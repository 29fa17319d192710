//! strkey encoding and decoding for key material.
//!
//! Format: base32(version_byte || payload || crc16), unpadded.
//! A 32-byte payload always encodes to 56 characters; the version byte
//! alone determines the leading letter (`G` for accounts, `S` for seeds).
//! Checksum: CRC16-XModem over version_byte || payload, appended
//! little-endian.

/// RFC 4648 base32 alphabet.
const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE32_ALPHABET;
    let mut i = 0;
    while i < 32 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Version byte of account addresses; its top five bits render as `G`.
const VERSION_ACCOUNT: u8 = 6 << 3;

/// Version byte of secret seeds; its top five bits render as `S`.
const VERSION_SEED: u8 = 18 << 3;

/// Length of the encoding: (1 + 32 + 2) bytes * 8 / 5 bits per character.
pub const ENCODED_LEN: usize = 56;

/// CRC16-XModem: polynomial 0x1021, zero initial value.
fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Encode a byte slice as unpadded base32.
fn encode_base32(bytes: &[u8]) -> String {
    let total_bits = bytes.len() * 8;
    let num_chars = total_bits.div_ceil(5);
    let mut result = String::with_capacity(num_chars);

    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u64;
        bits_in_buffer += 8;
        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let idx = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(BASE32_ALPHABET[idx] as char);
        }
    }
    // Remaining bits (padded with zeros on the right).
    if bits_in_buffer > 0 {
        let idx = ((buffer << (5 - bits_in_buffer)) & 0x1F) as usize;
        result.push(BASE32_ALPHABET[idx] as char);
    }

    result
}

/// Decode a base32 string into a fixed-size byte array. Returns `None` on
/// invalid characters or wrong length. Zero-allocation.
fn decode_base32_fixed<const N: usize>(s: &str) -> Option<[u8; N]> {
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;
    let mut result = [0u8; N];
    let mut pos = 0;

    for c in s.bytes() {
        if c >= 128 {
            return None;
        }
        let val = BASE32_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        buffer = (buffer << 5) | val as u64;
        bits_in_buffer += 5;
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            if pos < N {
                result[pos] = (buffer >> bits_in_buffer) as u8;
                pos += 1;
            }
        }
    }

    if pos < N {
        return None;
    }
    Some(result)
}

fn encode(version: u8, payload: &[u8; 32]) -> String {
    let mut data = [0u8; 35];
    data[0] = version;
    data[1..33].copy_from_slice(payload);
    let checksum = crc16(&data[..33]).to_le_bytes();
    data[33..].copy_from_slice(&checksum);
    encode_base32(&data)
}

fn decode(version: u8, s: &str) -> Option<[u8; 32]> {
    if s.len() != ENCODED_LEN {
        return None;
    }
    let data: [u8; 35] = decode_base32_fixed(s)?;
    if data[0] != version {
        return None;
    }
    let expected = crc16(&data[..33]).to_le_bytes();
    if data[33..] != expected {
        return None;
    }
    let mut payload = [0u8; 32];
    payload.copy_from_slice(&data[1..33]);
    Some(payload)
}

/// Encode a 32-byte public key as a `G…` account address.
pub fn encode_account(key: &[u8; 32]) -> String {
    encode(VERSION_ACCOUNT, key)
}

/// Encode a 32-byte Ed25519 seed as an `S…` secret string.
pub fn encode_seed(seed: &[u8; 32]) -> String {
    encode(VERSION_SEED, seed)
}

/// Extract the public key from a `G…` address.
///
/// Returns `None` if the string is malformed, carries the wrong version
/// byte, or fails its checksum.
pub fn decode_account(s: &str) -> Option<[u8; 32]> {
    decode(VERSION_ACCOUNT, s)
}

/// Extract the seed from an `S…` secret string.
///
/// Returns `None` if the string is malformed, carries the wrong version
/// byte, or fails its checksum.
pub fn decode_seed(s: &str) -> Option<[u8; 32]> {
    decode(VERSION_SEED, s)
}
