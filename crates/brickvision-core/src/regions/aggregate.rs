use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Result, VisionError};
use crate::label_image::LabelImage;

use super::accumulator::RegionTotals;
use super::types::{RegionStatsSet, TraversalOrder};

/// Compute pixel count and centroid for every region of a label image.
///
/// Single row-major pass with direct indexed accumulation: O(W*H) time,
/// O(region_count) extra space. Every cell must hold a label in
/// `[0, region_count)`; the first offending cell aborts the call with
/// `InvalidLabel`. Regions that end up with no pixels have no centroid.
pub fn compute_stats(image: &LabelImage, region_count: usize) -> Result<RegionStatsSet> {
    compute_stats_with_order(image, region_count, TraversalOrder::RowMajor)
}

/// Same as [`compute_stats`] with an explicit cell visiting order.
pub fn compute_stats_with_order(
    image: &LabelImage,
    region_count: usize,
    order: TraversalOrder,
) -> Result<RegionStatsSet> {
    if region_count == 0 {
        return Err(VisionError::InvalidRegionCount);
    }

    let data = image.data();
    let (h, w) = data.dim();
    let mut totals = RegionTotals::new(region_count);

    match order {
        TraversalOrder::RowMajor => {
            for y in 0..h {
                for x in 0..w {
                    let label = checked_label(data, x, y, region_count)?;
                    totals.push(label, x, y);
                }
            }
        }
        TraversalOrder::ColumnMajor => {
            for x in 0..w {
                for y in 0..h {
                    let label = checked_label(data, x, y, region_count)?;
                    totals.push(label, x, y);
                }
            }
        }
    }

    let stats = totals.finish(w, h);
    debug!(
        width = w,
        height = h,
        regions = region_count,
        empty = stats.empty_regions().len(),
        %order,
        "Region statistics computed"
    );
    Ok(stats)
}

/// Row-parallel variant of [`compute_stats`].
///
/// Rows are folded into per-task accumulators and merged. Results are
/// identical to the sequential scan. On invalid input the image is
/// re-scanned sequentially so the reported cell is the row-major first one.
pub fn compute_stats_parallel(image: &LabelImage, region_count: usize) -> Result<RegionStatsSet> {
    if region_count == 0 {
        return Err(VisionError::InvalidRegionCount);
    }

    let data = image.data();
    let (h, w) = data.dim();

    let reduced = (0..h)
        .into_par_iter()
        .try_fold(
            || RegionTotals::new(region_count),
            |mut totals, y| {
                for x in 0..w {
                    let label = checked_label(data, x, y, region_count)?;
                    totals.push(label, x, y);
                }
                Ok::<_, VisionError>(totals)
            },
        )
        .try_reduce(
            || RegionTotals::new(region_count),
            |mut a, b| {
                a.merge(&b);
                Ok(a)
            },
        );

    match reduced {
        Ok(totals) => {
            debug!(
                width = w,
                height = h,
                regions = region_count,
                "Parallel region statistics computed"
            );
            Ok(totals.finish(w, h))
        }
        Err(_) => compute_stats(image, region_count),
    }
}

#[inline]
fn checked_label(data: &Array2<i32>, x: usize, y: usize, region_count: usize) -> Result<usize> {
    let value = data[[y, x]];
    usize::try_from(value)
        .ok()
        .filter(|&label| label < region_count)
        .ok_or(VisionError::InvalidLabel {
            value: value as i64,
            x,
            y,
            region_count,
        })
}
