use crate::domain::{PricePoint, Series};
use crate::models::NormalizedPoint;
use crate::utils::maths_utils::rebase;

/// Rebase each series to 100 at its first defined value in the selection.
///
/// One output point per input point, same dates, same order. A point is
/// `None` for a series when its own value is missing or the series has no
/// usable base (no defined value at all, or a base of zero).
pub fn normalize_series(points: &[PricePoint]) -> Vec<NormalizedPoint> {
    let gold_base = first_defined(points, Series::Gold);
    let index_base = first_defined(points, Series::Index);

    points
        .iter()
        .map(|p| NormalizedPoint {
            date: p.date,
            gold_index: rebase_against(p.value(Series::Gold), gold_base),
            index_index: rebase_against(p.value(Series::Index), index_base),
        })
        .collect()
}

fn first_defined(points: &[PricePoint], series: Series) -> Option<f64> {
    points.iter().find_map(|p| p.value(series))
}

fn rebase_against(value: Option<f64>, base: Option<f64>) -> Option<f64> {
    rebase(value?, base?)
}
