use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// Three ingredients that pair together. Order carries no meaning.
pub type Trio = [String; 3];

/// One labeled row of the taste trio dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrioRecord {
    pub ingredients: Trio,
    pub tier: Tier,
}

impl TrioRecord {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
        tier: Tier,
    ) -> Self {
        Self {
            ingredients: [first.into(), second.into(), third.into()],
            tier,
        }
    }
}

/// Positional containment check across all three slots.
pub fn trio_contains(trio: &Trio, ingredient: &str) -> bool {
    trio.iter().any(|member| member == ingredient)
}
