use crate::domain::{PricePoint, Series};
use crate::models::{PerformanceSummary, SeriesPerformance, Verdict};
use crate::utils::maths_utils::pct_change;

/// Start-to-end performance of both series over the selection.
///
/// Returns `None` ("insufficient data") only for fewer than two points. The
/// endpoints are the first and last rows of the selection, not the first and
/// last defined values; a series missing at either end is left out on its own.
pub fn calculate_performance(points: &[PricePoint]) -> Option<PerformanceSummary> {
    if points.len() < 2 {
        return None;
    }
    let (first, last) = (points.first()?, points.last()?);

    let gold = series_performance(first, last, Series::Gold);
    let index = series_performance(first, last, Series::Index);

    let (diff, verdict) = match (gold.and_then(|g| g.pct), index.and_then(|i| i.pct)) {
        (Some(gold_pct), Some(index_pct)) => {
            let verdict = if gold_pct > index_pct {
                Verdict::GoldOutperformed
            } else if index_pct > gold_pct {
                Verdict::IndexOutperformed
            } else {
                Verdict::Equal
            };
            (Some(gold_pct - index_pct), verdict)
        }
        _ => (None, Verdict::Undetermined),
    };

    Some(PerformanceSummary {
        gold,
        index,
        diff,
        verdict,
    })
}

fn series_performance(first: &PricePoint, last: &PricePoint, series: Series) -> Option<SeriesPerformance> {
    let start = first.value(series)?;
    let end = last.value(series)?;
    Some(SeriesPerformance {
        start,
        end,
        pct: pct_change(start, end),
    })
}
