//! Ordering collections of [Id]s by their closeness to a reference Id.

use super::id::Id;

impl Id {
    /// Returns `ids` ordered by ascending [Id::log_distance] to this Id, closest first.
    ///
    /// Ids sharing the same log distance keep their relative order from `ids`.
    /// If this Id is in `ids`, it comes first.
    pub fn order_closest(&self, ids: &[Id]) -> Vec<Id> {
        let mut ordered = ids.to_vec();
        ordered.sort_by_key(|id| self.log_distance(id));

        ordered
    }

    /// Returns `ids` ordered by ascending XOR distance to this Id, closest first.
    ///
    /// Unlike [Id::order_closest], this compares the full 160 bits distance,
    /// so only duplicates of the same Id tie (and keep their relative order).
    pub fn order_by_xor(&self, ids: &[Id]) -> Vec<Id> {
        let mut ordered = ids.to_vec();
        ordered.sort_by_key(|id| self.xor(id));

        ordered
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    fn ids(hexes: &[&str]) -> Vec<Id> {
        hexes.iter().map(|s| Id::from_str(s).unwrap()).collect()
    }

    #[test]
    fn closest_first() {
        let target = Id::from_str("0000000000000000000000000000000000000000").unwrap();

        let input = ids(&[
            "8000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000100",
            "0000000000000000000000000000000000000000",
        ]);

        let ordered = target.order_closest(&input);

        assert_eq!(
            ordered,
            ids(&[
                "0000000000000000000000000000000000000000",
                "0000000000000000000000000000000000000001",
                "0000000000000000000000000000000000000100",
                "8000000000000000000000000000000000000000",
            ])
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let target = Id::ZERO;

        // 7, 4, 6 and 5 all have log distance 2, 1 has log distance 0.
        let input: Vec<Id> = [7u128, 4, 1, 6, 5].iter().map(|n| Id::from(*n)).collect();

        let ordered = target.order_closest(&input);

        let expected: Vec<Id> = [1u128, 7, 4, 6, 5].iter().map(|n| Id::from(*n)).collect();
        assert_eq!(ordered, expected);
    }

    #[test]
    fn does_not_mutate_input() {
        let target = Id::from_str("ba3042eb2d373b19e7c411ce6826e31b37be0b2e").unwrap();

        let input = ids(&[
            "fb449c17f6c34fadea26a5a83e1952e815e001ea",
            "e63b72f95aacee40ad087f83afb475645739f669",
            "58c65677e3833cb0f15733a6363cc4cb1352f90a",
            "b48d0aeb94cd3766f23d2ac098bbccf01485dc20",
        ]);
        let copy = input.clone();

        let ordered = target.order_closest(&input);

        assert_eq!(input, copy);
        assert_eq!(ordered.len(), input.len());

        let distances: Vec<i16> = ordered.iter().map(|id| target.log_distance(id)).collect();
        let mut sorted = distances.clone();
        sorted.sort();

        assert_eq!(distances, sorted);
    }

    #[test]
    fn empty() {
        assert!(Id::ZERO.order_closest(&[]).is_empty());
        assert!(Id::ZERO.order_by_xor(&[]).is_empty());
    }

    #[test]
    fn xor_ordering_breaks_bucket_ties() {
        let target = Id::ZERO;

        let input: Vec<Id> = [7u128, 4, 1, 6, 5].iter().map(|n| Id::from(*n)).collect();

        let ordered = target.order_by_xor(&input);

        let expected: Vec<Id> = [1u128, 4, 5, 6, 7].iter().map(|n| Id::from(*n)).collect();
        assert_eq!(ordered, expected);
    }
}
