use super::types::{Centroid, RegionStats, RegionStatsSet};

/// Running sums for a single region.
#[derive(Clone, Copy, Debug, Default)]
struct RegionAccumulator {
    pixel_count: u64,
    sum_x: u64,
    sum_y: u64,
}

/// Per-region accumulators indexed directly by label.
#[derive(Clone, Debug)]
pub(super) struct RegionTotals {
    regions: Vec<RegionAccumulator>,
}

impl RegionTotals {
    pub(super) fn new(region_count: usize) -> Self {
        Self {
            regions: vec![RegionAccumulator::default(); region_count],
        }
    }

    #[inline]
    pub(super) fn push(&mut self, label: usize, x: usize, y: usize) {
        let acc = &mut self.regions[label];
        acc.pixel_count += 1;
        acc.sum_x += x as u64;
        acc.sum_y += y as u64;
    }

    pub(super) fn merge(&mut self, other: &RegionTotals) {
        for (acc, o) in self.regions.iter_mut().zip(&other.regions) {
            acc.pixel_count += o.pixel_count;
            acc.sum_x += o.sum_x;
            acc.sum_y += o.sum_y;
        }
    }

    /// Turn the sums into an immutable snapshot, resolving centroids with
    /// truncating division. Empty regions get no centroid.
    pub(super) fn finish(self, width: usize, height: usize) -> RegionStatsSet {
        let regions = self
            .regions
            .into_iter()
            .enumerate()
            .map(|(label, acc)| {
                let centroid = (acc.pixel_count > 0).then(|| Centroid {
                    x: (acc.sum_x / acc.pixel_count) as u32,
                    y: (acc.sum_y / acc.pixel_count) as u32,
                });
                RegionStats {
                    label,
                    pixel_count: acc.pixel_count,
                    sum_x: acc.sum_x,
                    sum_y: acc.sum_y,
                    centroid,
                }
            })
            .collect();
        RegionStatsSet::new(regions, width, height)
    }
}
