//! # Registry ABI
//!
//! Minimal Solidity ABI codec covering the registry's functions: static
//! words (`address`, `bool`, `uint256`, `bytes32`) and dynamic `string`.
//!
//! ## Layout
//!
//! Arguments and return values are a head of 32-byte words followed by a
//! tail. Static values sit in the head; a dynamic value's head word is the
//! byte offset of its tail entry (length word, then data right-padded to a
//! word boundary).

use primitive_types::U256;
use shared_crypto::keccak256;
use shared_types::{Hash, Station, WalletAddress};
use thiserror::Error;

/// ABI word size in bytes.
pub const WORD: usize = 32;

/// `isPlatformAdmin(address) -> bool`
pub const IS_PLATFORM_ADMIN: &str = "isPlatformAdmin(address)";
/// `isCitizen(address) -> bool`
pub const IS_CITIZEN: &str = "isCitizen(address)";
/// `getStationByWallet(address) -> (uint256,string,address,bool,string,string,uint256)`
pub const GET_STATION_BY_WALLET: &str = "getStationByWallet(address)";
/// `registerCitizen(string,string,bytes32,string)`
pub const REGISTER_CITIZEN: &str = "registerCitizen(string,string,bytes32,string)";

/// Decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("abi decode: {0}")]
pub struct AbiError(pub String);

/// A single ABI value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `address`
    Address(WalletAddress),
    /// `bool`
    Bool(bool),
    /// `uint256`
    Uint(U256),
    /// `bytes32`
    FixedBytes(Hash),
    /// `string`
    String(String),
}

impl Token {
    fn is_dynamic(&self) -> bool {
        matches!(self, Token::String(_))
    }

    fn head_word(&self) -> [u8; WORD] {
        let mut word = [0u8; WORD];
        match self {
            Token::Address(addr) => word[12..].copy_from_slice(addr.as_bytes()),
            Token::Bool(b) => word[31] = u8::from(*b),
            Token::Uint(v) => v.to_big_endian(&mut word),
            Token::FixedBytes(h) => word.copy_from_slice(h),
            Token::String(_) => {}
        }
        word
    }
}

/// First four bytes of `keccak256(signature)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// Encode a token list as a head/tail argument block.
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    let head_len = tokens.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for token in tokens {
        match token {
            Token::String(s) => {
                head.extend_from_slice(&Token::Uint(U256::from(head_len + tail.len())).head_word());
                tail.extend_from_slice(&Token::Uint(U256::from(s.len())).head_word());
                tail.extend_from_slice(s.as_bytes());
                tail.resize(tail.len() + padding(s.len()), 0);
            }
            static_token => {
                debug_assert!(!static_token.is_dynamic());
                head.extend_from_slice(&static_token.head_word());
            }
        }
    }

    head.extend_from_slice(&tail);
    head
}

/// Selector followed by the encoded arguments.
pub fn encode_call(signature: &str, tokens: &[Token]) -> Vec<u8> {
    let mut data = selector(signature).to_vec();
    data.extend_from_slice(&encode(tokens));
    data
}

fn padding(len: usize) -> usize {
    (WORD - len % WORD) % WORD
}

/// Reads head words and their tails from a return-data block.
pub struct Decoder<'a> {
    data: &'a [u8],
}

impl<'a> Decoder<'a> {
    /// Wrap raw return data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn word_at(&self, offset: usize) -> Result<&'a [u8], AbiError> {
        offset
            .checked_add(WORD)
            .and_then(|end| self.data.get(offset..end))
            .ok_or_else(|| AbiError(format!("word at {offset} out of range ({} bytes)", self.data.len())))
    }

    fn usize_at(&self, offset: usize) -> Result<usize, AbiError> {
        let value = U256::from_big_endian(self.word_at(offset)?);
        if value > U256::from(u32::MAX) {
            return Err(AbiError(format!("length/offset {value} too large")));
        }
        Ok(value.as_usize())
    }

    /// `uint256` in head slot `index`.
    pub fn uint(&self, index: usize) -> Result<U256, AbiError> {
        Ok(U256::from_big_endian(self.word_at(index * WORD)?))
    }

    /// `uint256` in head slot `index`, narrowed to `u64`.
    pub fn u64(&self, index: usize) -> Result<u64, AbiError> {
        let value = self.uint(index)?;
        if value > U256::from(u64::MAX) {
            return Err(AbiError(format!("slot {index} does not fit u64")));
        }
        Ok(value.low_u64())
    }

    /// `bool` in head slot `index`.
    pub fn bool(&self, index: usize) -> Result<bool, AbiError> {
        let value = self.uint(index)?;
        if value.is_zero() {
            Ok(false)
        } else if value == U256::one() {
            Ok(true)
        } else {
            Err(AbiError(format!("slot {index} is not a bool")))
        }
    }

    /// `address` in head slot `index`.
    pub fn address(&self, index: usize) -> Result<WalletAddress, AbiError> {
        let word = self.word_at(index * WORD)?;
        if word[..12].iter().any(|b| *b != 0) {
            return Err(AbiError(format!("slot {index} is not an address")));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..]);
        Ok(WalletAddress(bytes))
    }

    /// `string` whose offset is in head slot `index`.
    pub fn string(&self, index: usize) -> Result<String, AbiError> {
        let offset = self.usize_at(index * WORD)?;
        let len = self.usize_at(offset)?;
        let start = offset + WORD;
        let bytes = self
            .data
            .get(start..start + len)
            .ok_or_else(|| AbiError(format!("string in slot {index} out of range")))?;
        String::from_utf8(bytes.to_vec()).map_err(|e| AbiError(e.to_string()))
    }
}

/// Decode `getStationByWallet` return data.
pub fn decode_station(data: &[u8]) -> Result<Station, AbiError> {
    let d = Decoder::new(data);
    Ok(Station {
        id: d.u64(0)?,
        name: d.string(1)?,
        wallet: d.address(2)?,
        active: d.bool(3)?,
        place: d.string(4)?,
        code: d.string(5)?,
        registered_at: d.u64(6)?,
    })
}

/// Encode a station as `getStationByWallet` would return it.
pub fn encode_station(station: &Station) -> Vec<u8> {
    encode(&[
        Token::Uint(U256::from(station.id)),
        Token::String(station.name.clone()),
        Token::Address(station.wallet),
        Token::Bool(station.active),
        Token::String(station.place.clone()),
        Token::String(station.code.clone()),
        Token::Uint(U256::from(station.registered_at)),
    ])
}

/// Decode a single `bool` return value.
pub fn decode_bool(data: &[u8]) -> Result<bool, AbiError> {
    Decoder::new(data).bool(0)
}
