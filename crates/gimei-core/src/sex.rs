use std::fmt;

use serde::{Deserialize, Serialize};

/// Sex tag carried by a [`Name`](crate::Name).
///
/// Animal-derived names leave it [`Sex::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Unspecified,
    Male,
    Female,
}

impl Sex {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
            Self::Unspecified => "？",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
