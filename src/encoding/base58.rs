//! Base58 encoding with leading-zero-byte preservation.

use thiserror::Error;

/// The 58-character alphabet. `0`, `O`, `I`, and `l` are excluded for
/// visual disambiguation; index 0 is `'1'`.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Base58Error {
    /// Input contained a character outside the alphabet.
    #[error("invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Base58 encoder/decoder.
///
/// The alphabet and its reverse lookup table are captured at
/// construction, so the codec is a self-contained value rather than
/// process-wide state.
#[derive(Debug, Clone)]
pub struct Base58 {
    alphabet: &'static [u8; 58],
    lookup: [i8; 128],
}

impl Base58 {
    pub fn new() -> Self {
        let mut lookup = [-1i8; 128];
        for (index, &symbol) in ALPHABET.iter().enumerate() {
            lookup[symbol as usize] = index as i8;
        }
        Self {
            alphabet: ALPHABET,
            lookup,
        }
    }

    /// Encodes `input` as Base58 text.
    ///
    /// The input is treated as one big-endian integer and repeatedly
    /// divided by 58; each leading zero byte then becomes one leading
    /// `'1'`, which plain big-integer encoding would otherwise drop.
    /// Empty input encodes to the empty string.
    pub fn encode(&self, input: &[u8]) -> String {
        let zeros = input.iter().take_while(|&&byte| byte == 0).count();

        // Base-58 digits, least significant first. Each input byte folds
        // in as digits = digits * 256 + byte.
        let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);
        for &byte in &input[zeros..] {
            let mut carry = byte as u32;
            for digit in digits.iter_mut() {
                carry += (*digit as u32) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                digits.push((carry % 58) as u8);
                carry /= 58;
            }
        }

        let mut out = String::with_capacity(zeros + digits.len());
        for _ in 0..zeros {
            out.push(self.alphabet[0] as char);
        }
        for &digit in digits.iter().rev() {
            out.push(self.alphabet[digit as usize] as char);
        }
        out
    }

    /// Decodes Base58 text back to bytes.
    ///
    /// Leading `'1'`s become leading zero bytes. Any character outside
    /// the alphabet fails the whole decode; no partial result is
    /// returned.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, Base58Error> {
        let zeros = text.bytes().take_while(|&c| c == self.alphabet[0]).count();

        // Base-256 bytes, least significant first. Each character folds
        // in as bytes = bytes * 58 + index.
        let mut bytes: Vec<u8> = Vec::with_capacity(text.len() * 733 / 1000 + 1);
        for (position, character) in text.chars().enumerate().skip(zeros) {
            let index = self.index_of(character).ok_or(Base58Error::InvalidCharacter {
                character,
                position,
            })?;
            let mut carry = index as u32;
            for byte in bytes.iter_mut() {
                carry += *byte as u32 * 58;
                *byte = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                bytes.push((carry & 0xFF) as u8);
                carry >>= 8;
            }
        }

        let mut out = vec![0u8; zeros];
        out.extend(bytes.iter().rev());
        Ok(out)
    }

    fn index_of(&self, character: char) -> Option<u8> {
        if !character.is_ascii() {
            return None;
        }
        match self.lookup[character as usize] {
            -1 => None,
            index => Some(index as u8),
        }
    }
}

impl Default for Base58 {
    fn default() -> Self {
        Self::new()
    }
}
