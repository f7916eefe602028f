//! Print synthetic peers for the buckets of a routing table centered on an Id.
//!
//! Run: `cargo run --example ids -- --local <hex> --distance 150 --count 4`

use std::str::FromStr;

use clap::Parser;
use kadid::Id;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, Level};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Hex encoded local Id, random if omitted.
    #[arg(short, long)]
    local: Option<String>,
    /// Log distance of the generated peers, every bucket if omitted.
    #[arg(short, long)]
    distance: Option<i16>,
    /// Number of peers per bucket.
    #[arg(short, long, default_value_t = 1)]
    count: usize,
    /// Seed for reproducible output.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let local = match cli.local {
        Some(hex) => match Id::from_str(&hex) {
            Ok(id) => id,
            Err(error) => {
                eprintln!("Invalid local id {:?}: {}", hex, error);
                std::process::exit(1);
            }
        },
        None => Id::random_with(&mut rng),
    };

    let distances: Vec<i16> = match cli.distance {
        Some(distance) if (-1..160).contains(&distance) => vec![distance],
        Some(distance) => {
            eprintln!("Distance {} is out of [-1, 160)", distance);
            std::process::exit(1);
        }
        None => (0..160).collect(),
    };

    info!(?local, "Local id");

    let mut peers = vec![];

    for distance in distances {
        for _ in 0..cli.count {
            peers.push(local.generate_at_log_distance(distance, &mut rng));
        }
    }

    for peer in local.order_closest(&peers) {
        println!("{:>3} {}", local.log_distance(&peer), peer);
    }
}
