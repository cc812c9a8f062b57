use rustc_hash::FxHashSet;

use nav_core::RegionId;

/// Regions a single search may enter.  Built per call, never cached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedRegions {
    regions: FxHashSet<RegionId>,
}

impl AllowedRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, region: RegionId) {
        self.regions.insert(region);
    }

    #[inline]
    pub fn contains(&self, region: RegionId) -> bool {
        self.regions.contains(&region)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.iter().copied()
    }
}

impl FromIterator<RegionId> for AllowedRegions {
    fn from_iter<I: IntoIterator<Item = RegionId>>(iter: I) -> Self {
        Self { regions: iter.into_iter().collect() }
    }
}
