use std::fmt;
use std::io::{Read, Write};

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::msg;

use crate::error::LendingError;

/// Encodes `text` as UTF-8 into a buffer of exactly `width` bytes,
/// zero-padded at the end.
///
/// The limit applies to the encoded byte length, so a multi-byte character
/// can make a short string fail. Nothing is ever truncated.
pub fn string_to_bytes(text: &str, width: usize) -> Result<Vec<u8>, LendingError> {
    let encoded = text.as_bytes();
    if encoded.len() > width {
        msg!("String of {} bytes does not fit in {} bytes", encoded.len(), width);
        return Err(LendingError::TooLong);
    }

    let mut buffer = vec![0u8; width];
    buffer[..encoded.len()].copy_from_slice(encoded);
    Ok(buffer)
}

/// Same as [`string_to_bytes`] with the width known at compile time.
pub fn string_to_array<const N: usize>(text: &str) -> Result<[u8; N], LendingError> {
    let encoded = text.as_bytes();
    if encoded.len() > N {
        msg!("String of {} bytes does not fit in {} bytes", encoded.len(), N);
        return Err(LendingError::TooLong);
    }

    let mut buffer = [0u8; N];
    buffer[..encoded.len()].copy_from_slice(encoded);
    Ok(buffer)
}

/// A string stored in exactly `N` zero-padded bytes.
///
/// Serializes as the raw buffer, without a length prefix, so it occupies
/// `N` bytes inside an account. Trailing NUL characters of the original text
/// cannot be told apart from padding when read back.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedString<const N: usize>([u8; N]);

impl<const N: usize> FixedString<N> {
    pub const SIZE: usize = N;

    pub fn new(text: &str) -> Result<Self, LendingError> {
        string_to_array::<N>(text).map(Self)
    }

    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Number of bytes before the zero padding.
    pub fn len(&self) -> usize {
        self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> Result<&str, LendingError> {
        std::str::from_utf8(&self.0[..self.len()]).map_err(|_| {
            msg!("Error: fixed-width field holds invalid UTF-8");
            LendingError::InvalidUtf8
        })
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Ok(text) => write!(f, "FixedString<{}>({:?})", N, text),
            Err(_) => write!(f, "FixedString<{}>({:?})", N, &self.0[..]),
        }
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0[..self.len()]))
    }
}

impl<const N: usize> BorshSerialize for FixedString<N> {
    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.0)
    }
}

impl<const N: usize> BorshDeserialize for FixedString<N> {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut bytes = [0u8; N];
        reader.read_exact(&mut bytes)?;
        Ok(Self(bytes))
    }
}
