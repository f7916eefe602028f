//! Micro-benchmarks for Id operations: log_distance, order_closest and
//! generate_at_log_distance. Reports nanoseconds-per-operation.
//!
//! Run: `cargo bench --bench id`

use kadid::Id;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;

const ITERS: usize = 100_000;

fn main() {
    println!("id\n");

    let mut rng = StdRng::seed_from_u64(0);
    let local = Id::random_with(&mut rng);
    let ids: Vec<Id> = (0..1000).map(|_| Id::random_with(&mut rng)).collect();

    {
        let start = Instant::now();
        let mut sum = 0_i64;
        for i in 0..ITERS {
            sum += local.log_distance(&ids[i % ids.len()]) as i64;
        }
        let per_op = start.elapsed().as_nanos() / ITERS as u128;
        println!("log_distance:             {per_op}ns/op (checksum: {sum})");
    }

    {
        let start = Instant::now();
        for _ in 0..100 {
            let ordered = local.order_closest(&ids);
            assert_eq!(ordered.len(), ids.len());
        }
        let per_op = start.elapsed().as_nanos() / 100;
        println!("order_closest (1000 ids): {per_op}ns/op");
    }

    {
        let start = Instant::now();
        for i in 0..ITERS {
            let distance = (i % 160) as i16;
            let id = local.generate_at_log_distance(distance, &mut rng);
            assert_eq!(local.log_distance(&id), distance);
        }
        let per_op = start.elapsed().as_nanos() / ITERS as u128;
        println!("generate_at_log_distance: {per_op}ns/op");
    }
}
