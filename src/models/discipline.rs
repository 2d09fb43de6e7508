//! Discipline tag.
//!
//! The two parallel workshop tracks. Every workshop carries its discipline
//! explicitly; nothing is inferred from ID spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two parallel workshop tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// Art track.
    Art,
    /// Science track.
    Science,
}

impl Discipline {
    /// Both disciplines, in allocation order (art passes run first).
    pub const ALL: [Discipline; 2] = [Discipline::Art, Discipline::Science];

    /// The opposite discipline (used by cross-discipline fallback).
    pub fn other(self) -> Self {
        match self {
            Discipline::Art => Discipline::Science,
            Discipline::Science => Discipline::Art,
        }
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Discipline::Art => "art",
            Discipline::Science => "science",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
