//! Random [Id]s, and random Ids at an exact log distance from a reference Id.
use rand::Rng;
use tracing::trace;

use super::{
    distance::LOG_DISTANCE_EQUAL,
    id::{Id, ID_SIZE, ID_SIZE_BITS},
};

impl Id {
    /// Random Id from the thread local random number generator.
    pub fn random() -> Id {
        Id::random_with(&mut rand::thread_rng())
    }

    /// Random Id with every byte drawn uniformly from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Id {
        let random_bytes: [u8; ID_SIZE] = rng.gen();

        Id::from(random_bytes)
    }

    /// Generate a random Id at exactly `log_distance` from this Id
    /// (see [Id::log_distance]), useful to target a specific routing table bucket.
    ///
    /// The bit at `log_distance` is flipped, every more significant bit is copied
    /// from this Id and every less significant bit is drawn from `rng`.
    /// A `log_distance` of [LOG_DISTANCE_EQUAL] returns this Id.
    ///
    /// # Panics
    ///
    /// Panics if `log_distance` is not in `[-1, 160)`.
    pub fn generate_at_log_distance<R: Rng + ?Sized>(
        &self,
        log_distance: i16,
        rng: &mut R,
    ) -> Id {
        assert!(
            (LOG_DISTANCE_EQUAL..ID_SIZE_BITS as i16).contains(&log_distance),
            "log distance {} is out of [-1, 160)",
            log_distance
        );

        if log_distance == LOG_DISTANCE_EQUAL {
            return *self;
        }

        let byte_offset = log_distance as usize / 8;
        let bit_offset = log_distance as usize % 8;
        let byte_index = ID_SIZE - byte_offset - 1;

        let mut bytes = self.to_bytes();

        let flip = 1_u8 << bit_offset;
        let low_bits = flip - 1;
        let random_low_bits = rng.gen::<u8>() & low_bits;

        bytes[byte_index] = ((bytes[byte_index] ^ flip) & !low_bits) | random_low_bits;
        rng.fill(&mut bytes[byte_index + 1..]);

        let id = Id::from(bytes);

        trace!(origin = ?self, log_distance, ?id, "Generated id at log distance");

        id
    }

    /// Same as [Id::generate_at_log_distance] using the thread local random number generator.
    pub fn generate_at_log_distance_random(&self, log_distance: i16) -> Id {
        self.generate_at_log_distance(log_distance, &mut rand::thread_rng())
    }
}
