use std::fmt;
use std::str::FromStr;

use bls_core::keccak256;
use rand::RngCore;

use crate::error::VectorError;

/// A 20-byte operator address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 20];
        rng.fill_bytes(&mut bytes);
        Address(bytes)
    }

    /// ABI encoding: left-padded to a 32-byte word.
    pub fn abi_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }
}

impl FromStr for Address {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| VectorError::InvalidAddress(e.to_string()))?;
        let bytes: [u8; 20] = bytes.try_into().map_err(|b: Vec<u8>| {
            VectorError::InvalidAddress(format!("{} bytes, need 20", b.len()))
        })?;
        Ok(Address(bytes))
    }
}

/// EIP-55 mixed-case checksum encoding: a hex letter is upper-cased when the
/// matching nibble of keccak256(lowercase hex) is 8 or more.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());
        let checksummed: String = lower
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
                if nibble >= 8 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        write!(f, "0x{checksummed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let a: Address = "0x1111111111111111111111111111111111111111".parse().unwrap();
        assert_eq!(a.0, [0x11; 20]);
        assert_eq!(a.to_string(), "0x1111111111111111111111111111111111111111");

        // lowercase input, no prefix
        let b: Address = "18586b8cb86b59ef3f44bc915ef92c83b6bafd75".parse().unwrap();
        assert_eq!(b.to_string(), "0x18586B8cb86b59EF3F44BC915Ef92C83B6BAfd75");
    }

    #[test]
    fn display_is_eip55_checksummed() {
        for s in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xABaBaBaBABabABabAbAbABAbABabababaBaBABaB",
            "0x4242424242424242424242424242424242424242",
        ] {
            let a: Address = s.to_lowercase().parse().unwrap();
            assert_eq!(a.to_string(), s);
        }
    }

    #[test]
    fn rejects_bad_addresses() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("0xzz11111111111111111111111111111111111111".parse::<Address>().is_err());
    }

    #[test]
    fn abi_word_is_left_padded() {
        let w = Address([0xab; 20]).abi_word();
        assert_eq!(w[..12], [0u8; 12]);
        assert_eq!(w[12..], [0xab; 20]);
    }
}
