//! Kademlia node Id or a lookup target
use std::{
    convert::TryFrom,
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use primitive_types::U256;
use sha1_smol::Sha1;

use crate::{MalformedIdError, Result};

/// The size of node IDs in bytes.
pub const ID_SIZE: usize = 20;
/// The size of node IDs in bits.
pub const ID_SIZE_BITS: usize = ID_SIZE * 8;
/// The length of the hex representation of an [Id].
pub const HEX_ID_SIZE: usize = ID_SIZE * 2;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
/// Kademlia node Id or a lookup target
///
/// A 160 bits unsigned integer stored as 20 big endian bytes.
/// The bytes are the only state, hex and integer forms are derived from them on demand.
pub struct Id([u8; ID_SIZE]);

impl Id {
    /// The all zero Id.
    pub const ZERO: Id = Id([0; ID_SIZE]);

    /// Create a new Id from some bytes. Returns Err if `bytes` is not of length
    /// [ID_SIZE].
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> Result<Id> {
        let bytes = bytes.as_ref();
        if bytes.len() != ID_SIZE {
            return Err(MalformedIdError::InvalidIdSize(bytes.len()));
        }

        let mut tmp: [u8; ID_SIZE] = [0; ID_SIZE];
        tmp.copy_from_slice(bytes);

        Ok(Id(tmp))
    }

    /// Parse an Id from its [HEX_ID_SIZE] characters hex representation.
    ///
    /// Both upper and lower case digits are accepted.
    pub fn from_hex(s: &str) -> Result<Id> {
        let length = s.chars().count();
        if length != HEX_ID_SIZE {
            return Err(MalformedIdError::InvalidHexLength(length));
        }

        let mut bytes = [0; ID_SIZE];
        hex::decode_to_slice(s, &mut bytes)?;

        Ok(Id(bytes))
    }

    /// Create an Id from an integer in the range `[0, 2^160)`.
    pub fn from_integer(n: U256) -> Result<Id> {
        if n.bits() > ID_SIZE_BITS {
            return Err(MalformedIdError::IntegerOutOfRange(n));
        }

        let mut wide = [0; 32];
        n.to_big_endian(&mut wide);

        let mut bytes = [0; ID_SIZE];
        bytes.copy_from_slice(&wide[32 - ID_SIZE..]);

        Ok(Id(bytes))
    }

    /// Derive a lookup target from arbitrary data, as the SHA-1 digest of `data`.
    pub fn from_sha1<T: AsRef<[u8]>>(data: T) -> Id {
        let mut hasher = Sha1::new();
        hasher.update(data.as_ref());

        Id(hasher.digest().bytes())
    }

    // === Getters ===

    /// Returns a reference to the big endian bytes of this Id.
    pub fn as_bytes(&self) -> &[u8; ID_SIZE] {
        &self.0
    }

    /// Returns a copy of the big endian bytes of this Id.
    pub fn to_bytes(&self) -> [u8; ID_SIZE] {
        self.0
    }

    /// Returns the big endian bytes of this Id as an owned vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Lowercase hex representation, always [HEX_ID_SIZE] characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The bytes interpreted as a big endian unsigned integer.
    pub fn to_integer(&self) -> U256 {
        U256::from_big_endian(&self.0)
    }

    /// Returns `true` if this is the all zero Id.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; ID_SIZE]
    }
}

impl From<[u8; ID_SIZE]> for Id {
    fn from(bytes: [u8; ID_SIZE]) -> Id {
        Id(bytes)
    }
}

impl From<u128> for Id {
    fn from(n: u128) -> Id {
        let mut bytes = [0; ID_SIZE];
        bytes[ID_SIZE - 16..].copy_from_slice(&n.to_be_bytes());

        Id(bytes)
    }
}

impl TryFrom<&[u8]> for Id {
    type Error = MalformedIdError;

    fn try_from(bytes: &[u8]) -> Result<Id> {
        Id::from_bytes(bytes)
    }
}

impl TryFrom<U256> for Id {
    type Error = MalformedIdError;

    fn try_from(n: U256) -> Result<Id> {
        Id::from_integer(n)
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Id {
    type Err = MalformedIdError;

    fn from_str(s: &str) -> Result<Id> {
        Id::from_hex(s)
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Debug for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Id {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Id, D::Error> {
        let bytes = <serde_bytes::ByteBuf as serde::Deserialize>::deserialize(deserializer)?;

        Id::from_bytes(bytes).map_err(serde::de::Error::custom)
    }
}
