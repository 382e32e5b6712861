use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two independent editing surfaces of the garment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub const ALL: &[Self] = &[Self::Front, Self::Back];
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "Front"),
            Self::Back => write!(f, "Back"),
        }
    }
}
