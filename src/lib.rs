#![doc = include_str!("../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

mod common;
mod error;

pub use crate::common::*;
pub use crate::error::{MalformedIdError, Result};

pub use primitive_types::U256;
