//! Conversion between hexadecimal text and fixed-length byte buffers.

use crate::error::{Error, Result};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Decodes exactly `byte_count * 2` hex characters into bytes.
///
/// Both nibble cases are accepted. Any character outside `[0-9a-fA-F]`
/// fails with [`Error::InvalidHexCharacter`]; input of any other length
/// fails with [`Error::InvalidHexLength`].
pub fn decode(text: &str, byte_count: usize) -> Result<Vec<u8>> {
    let expected = byte_count * 2;
    let found = text.chars().count();
    if found != expected {
        return Err(Error::InvalidHexLength { expected, found });
    }

    let mut nibbles = Vec::with_capacity(expected);
    for (index, character) in text.chars().enumerate() {
        nibbles.push(nibble(index, character)?);
    }
    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Encodes bytes as lowercase hex, two digits per byte, no separators.
pub fn encode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        text.push(DIGITS[usize::from(byte >> 4)] as char);
        text.push(DIGITS[usize::from(byte & 0x0f)] as char);
    }
    text
}

fn nibble(index: usize, character: char) -> Result<u8> {
    match character {
        '0'..='9' => Ok(character as u8 - b'0'),
        'a'..='f' => Ok(character as u8 - b'a' + 10),
        'A'..='F' => Ok(character as u8 - b'A' + 10),
        _ => Err(Error::InvalidHexCharacter { index, character }),
    }
}
