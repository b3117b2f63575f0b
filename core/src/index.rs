use crate::errors::InvalidTierError;
use crate::tier::{IntoTier, Tier};
use crate::trio::{Trio, TrioRecord};
use rustc_hash::FxHashSet;

/// The trio dataset split by tier, built once and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityIndex {
    highly: Vec<Trio>,
    moderately: Vec<Trio>,
    compatible: Vec<Trio>,
}

impl CompatibilityIndex {
    pub fn new(records: impl IntoIterator<Item = TrioRecord>) -> Self {
        let mut index = Self::default();

        for record in records {
            index.partition_mut(record.tier).push(record.ingredients);
        }

        tracing::debug!(
            highly = index.highly.len(),
            moderately = index.moderately.len(),
            compatible = index.compatible.len(),
            "built compatibility index"
        );

        index
    }

    /// Records of `tier`, in dataset order.
    pub fn partition(&self, tier: impl IntoTier) -> Result<&[Trio], InvalidTierError> {
        Ok(self.trios(tier.into_tier()?))
    }

    pub fn trios(&self, tier: Tier) -> &[Trio] {
        match tier {
            Tier::Highly => &self.highly,
            Tier::Moderately => &self.moderately,
            Tier::Compatible => &self.compatible,
        }
    }

    fn partition_mut(&mut self, tier: Tier) -> &mut Vec<Trio> {
        match tier {
            Tier::Highly => &mut self.highly,
            Tier::Moderately => &mut self.moderately,
            Tier::Compatible => &mut self.compatible,
        }
    }

    /// Total number of trios across all tiers.
    pub fn len(&self) -> usize {
        self.highly.len() + self.moderately.len() + self.compatible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every distinct ingredient named by any trio of any tier.
    pub fn ingredients(&self) -> FxHashSet<&str> {
        Tier::ALL
            .into_iter()
            .flat_map(|tier| self.trios(tier))
            .flat_map(|trio| trio.iter().map(String::as_str))
            .collect()
    }
}

impl FromIterator<TrioRecord> for CompatibilityIndex {
    fn from_iter<I: IntoIterator<Item = TrioRecord>>(records: I) -> Self {
        Self::new(records)
    }
}
