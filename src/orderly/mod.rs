//! # Orderly Enumeration
//!
//! Read's orderly method: grow canonical graphs one edge at a time, level by
//! level, keeping only canonical children not already accepted in the level.
//!
//! ```text
//! level m ──augment──▶ candidates ──gate──▶ canonical? ──▶ level m+1
//!                     (pair order)  (seen / order)
//! ```
//!
//! | Driver | Yields | Levels generated |
//! |--------|--------|------------------|
//! | [`Orderly`] | one graph at a time | all |
//! | [`Levels`] | one level at a time | all |
//! | [`ComplementOrderly`] | graph, then its complement | lower half (+ middle) |

pub mod augment;
pub mod complement;
pub mod engine;
pub mod level;

pub use augment::{augment, Augmenter};
pub use complement::ComplementOrderly;
pub use engine::{Levels, Orderly};
pub use level::{Level, Transition, TransitionStats};

use crate::config::{EnumerationConfig, Strategy};
use crate::model::Graph;
use crate::Result;

/// A configured enumeration run.
pub enum Enumeration {
    Orderly(Orderly),
    Complement(ComplementOrderly),
}

impl Enumeration {
    /// Validate `config` and build the matching driver.
    pub fn from_config(config: &EnumerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(match config.strategy {
            Strategy::Orderly => Enumeration::Orderly(Orderly::new(config.vertices, config.acceptance)?),
            Strategy::Complement => {
                Enumeration::Complement(ComplementOrderly::new(config.vertices, config.acceptance)?)
            }
        })
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Enumeration::Orderly(_) => Strategy::Orderly,
            Enumeration::Complement(_) => Strategy::Complement,
        }
    }
}

impl Iterator for Enumeration {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        match self {
            Enumeration::Orderly(it) => it.next(),
            Enumeration::Complement(it) => it.next(),
        }
    }
}
