//! Kademlia identifier, its distance algebra and the helpers built on top of it.

mod closest;
mod distance;
mod generate;
mod id;

pub use distance::LOG_DISTANCE_EQUAL;
pub use id::*;
