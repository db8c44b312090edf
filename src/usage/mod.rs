//! Heuristic key usage detection.
//!
//! Keys are matched as plain substrings of source files, not by parsing them:
//! dynamically built keys are missed and short final segments may over-match.

mod scanner;
mod variants;

pub use scanner::UsageScanner;
pub use variants::{
    key_variants,
    references_key,
};
