//! Adaptive drill logic
//!
//! Weight tracking, secret selection, and the round controller that ties
//! them together.

mod engine;
mod selection;
pub mod weights;

pub use engine::{RoundError, RoundReport, SkipReport, Trainer};
pub use selection::{SelectError, pick_uniform, pick_weighted};
pub use weights::{Aggression, AggressionError, NEUTRAL_WEIGHT, WeightChange, WeightTable};
