//! Thumb identity.

use serde::{Deserialize, Serialize};

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Thumb {
    Lower,
    Upper,
}

impl Thumb {
    pub fn label(self) -> &'static str {
        match self {
            Thumb::Lower => "lower",
            Thumb::Upper => "upper",
        }
    }
}

impl std::fmt::Display for Thumb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
