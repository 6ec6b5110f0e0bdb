use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInput;

/// Manufacturers the inventory accepts.
///
/// The declaration order is also the menu order: `0` is Apple, `4` is OnePlus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Apple,
    Samsung,
    Xiaomi,
    Google,
    OnePlus,
}

impl Brand {
    pub const ALL: [Brand; 5] = [
        Brand::Apple,
        Brand::Samsung,
        Brand::Xiaomi,
        Brand::Google,
        Brand::OnePlus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Brand::Apple => "Apple",
            Brand::Samsung => "Samsung",
            Brand::Xiaomi => "Xiaomi",
            Brand::Google => "Google",
            Brand::OnePlus => "OnePlus",
        }
    }

    pub fn from_index(index: usize) -> Option<Brand> {
        Self::ALL.get(index).copied()
    }

    /// Compares against a brand name ignoring ASCII case.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name().eq_ignore_ascii_case(query)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Brand {
    type Err = InvalidInput;

    /// Parses a brand from its menu index (`"0"`-`"4"`) or its name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(index) = s.parse::<usize>() {
            return Brand::from_index(index).ok_or_else(|| InvalidInput::UnknownBrand(s.to_owned()));
        }

        Brand::ALL
            .into_iter()
            .find(|brand| brand.matches_name(s))
            .ok_or_else(|| InvalidInput::UnknownBrand(s.to_owned()))
    }
}
