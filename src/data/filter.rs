use super::model::Yearly;

// ---------------------------------------------------------------------------
// View range: slider-driven [start, end] window over the year axis
// ---------------------------------------------------------------------------

/// Inclusive year window selected by the start/end sliders.
///
/// `start < end` holds after every [`ViewRange::clamp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRange {
    pub start: f64,
    pub end: f64,
}

impl ViewRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Keep the sliders from crossing: when `start >= end`, pull `start`
    /// back to `end - gap`. Returns whether anything changed.
    pub fn clamp(&mut self, gap: f64) -> bool {
        if self.start >= self.end {
            self.start = self.end - gap;
            true
        } else {
            false
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, year: f64) -> bool {
        year >= self.start && year <= self.end
    }
}

/// Rows whose year falls inside `range`, in their original order.
pub fn filter_range<'a, T: Yearly>(rows: &'a [T], range: &ViewRange) -> Vec<&'a T> {
    rows.iter().filter(|r| range.contains(r.year())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PayGapRecord;

    fn series(years: std::ops::RangeInclusive<i32>) -> Vec<PayGapRecord> {
        years
            .map(|y| PayGapRecord {
                year: y as f64,
                pay_gap: 20.0 - (y - 1997) as f64 * 0.5,
                median_male: 12.0,
                median_female: 10.0,
            })
            .collect()
    }

    #[test]
    fn clamp_resets_start_below_end() {
        let mut climate = ViewRange::new(2000.0, 2000.0);
        assert!(climate.clamp(5.0));
        assert_eq!(climate, ViewRange::new(1995.0, 2000.0));

        let mut pay = ViewRange::new(2010.0, 2004.0);
        assert!(pay.clamp(1.0));
        assert_eq!(pay, ViewRange::new(2003.0, 2004.0));
        assert!(pay.start < pay.end);
    }

    #[test]
    fn clamp_leaves_valid_range() {
        let mut r = ViewRange::new(1997.0, 2017.0);
        assert!(!r.clamp(1.0));
        assert_eq!(r.span(), 20.0);
    }

    #[test]
    fn filter_is_subset_within_bounds() {
        let rows = series(1997..=2017);
        let range = ViewRange::new(2001.0, 2005.0);
        let kept = filter_range(&rows, &range);
        assert_eq!(kept.len(), 5);
        assert!(kept.iter().all(|r| r.year >= 2001.0 && r.year <= 2005.0));
        assert!(kept.iter().all(|r| rows.contains(r)));
    }

    #[test]
    fn filter_is_idempotent() {
        let rows = series(1997..=2017);
        let range = ViewRange::new(1990.0, 2003.5);
        let once: Vec<PayGapRecord> = filter_range(&rows, &range).into_iter().copied().collect();
        let twice: Vec<PayGapRecord> = filter_range(&once, &range).into_iter().copied().collect();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 7);
    }

    #[test]
    fn filter_outside_data_is_empty() {
        let rows = series(1997..=2017);
        assert!(filter_range(&rows, &ViewRange::new(2030.0, 2040.0)).is_empty());
    }
}
