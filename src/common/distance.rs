//! XOR distance and log distance between [Id]s.

use super::id::{Id, ID_SIZE};

/// The [Id::log_distance] between two equal ids, where `log2(0)` is undefined.
pub const LOG_DISTANCE_EQUAL: i16 = -1;

impl Id {
    /// XOR distance between this Id and another, as an Id.
    ///
    /// Symmetric, and zero iff both ids are equal.
    pub fn xor(&self, other: &Id) -> Id {
        let mut result = [0_u8; ID_SIZE];

        for (i, byte) in result.iter_mut().enumerate() {
            *byte = self.as_bytes()[i] ^ other.as_bytes()[i];
        }

        result.into()
    }

    /// Same as [Id::xor].
    pub fn distance(&self, other: &Id) -> Id {
        self.xor(other)
    }

    /// `floor(log2(xor distance))`, the index of the most significant differing bit
    /// counted from the least significant bit (0) up to the most significant one (159).
    ///
    /// Returns [LOG_DISTANCE_EQUAL] when both ids are equal.
    ///
    /// Ids differing only in the last bit are at log distance 0,
    /// ids differing in the first bit are at log distance 159.
    pub fn log_distance(&self, other: &Id) -> i16 {
        for i in 0..ID_SIZE {
            let a = self.as_bytes()[i];
            let b = other.as_bytes()[i];

            if a != b {
                let unmatched_bytes = (ID_SIZE - i - 1) as i16;
                // bits below the most significant differing bit of this byte
                let bit_offset = 7 - (a ^ b).leading_zeros() as i16;

                return unmatched_bytes * 8 + bit_offset;
            }
        }

        LOG_DISTANCE_EQUAL
    }

    /// Bucket index of `other` in a routing table centered on this Id,
    /// or `None` if `other` is this Id.
    pub fn bucket_index(&self, other: &Id) -> Option<u8> {
        match self.log_distance(other) {
            LOG_DISTANCE_EQUAL => None,
            distance => Some(distance as u8),
        }
    }
}
