#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{Dataset, DateRange, PricePoint};

// ============================================================================
// Selection: read-only window into a sorted dataset
// ============================================================================

/// The points of a dataset whose dates fall inside an inclusive range.
///
/// Borrows the dataset immutably, so nothing downstream can modify the source.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub range: DateRange,
    points: &'a [PricePoint],
}

impl<'a> Selection<'a> {
    pub fn points(&self) -> &'a [PricePoint] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&'a PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&'a PricePoint> {
        self.points.last()
    }

    /// Number of points where both series are defined.
    pub fn valid_pair_count(&self) -> usize {
        self.points.iter().filter(|p| p.valid_pair().is_some()).count()
    }
}

/// Select every point with `from <= date <= to`, preserving order.
///
/// `points` must be sorted ascending by date (the `Dataset` constructors
/// guarantee this); the bounds are found by binary search. An inverted range
/// gives an empty selection.
pub fn filter_by_range(points: &[PricePoint], range: DateRange) -> Selection<'_> {
    let selected = if range.is_inverted() {
        &points[0..0]
    } else {
        let start = points.partition_point(|p| p.date < range.from);
        let end = points.partition_point(|p| p.date <= range.to);
        &points[start..end.max(start)]
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_range_filter {
        log::info!("Range filter {}: {} of {} points", range, selected.len(), points.len());
    }

    Selection {
        range,
        points: selected,
    }
}

impl Dataset {
    pub fn select(&self, range: DateRange) -> Selection<'_> {
        filter_by_range(self.points(), range)
    }
}
