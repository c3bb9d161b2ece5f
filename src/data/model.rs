use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Record types – one CSV row each
// ---------------------------------------------------------------------------

/// A row type loadable from a headed CSV file.
pub trait Record: serde::de::DeserializeOwned + Send + 'static {
    /// Header names that must be present.
    const COLUMNS: &'static [&'static str];
}

/// Rows keyed by year, ordered ascending within a dataset.
pub trait Yearly {
    fn year(&self) -> f64;
}

/// Global surface temperature anomaly for one year (°C).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TemperatureRecord {
    #[serde(deserialize_with = "lenient_f64")]
    pub year: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub temperature: f64,
}

/// All-employee hourly pay gap for one year.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PayGapRecord {
    #[serde(deserialize_with = "lenient_f64")]
    pub year: f64,
    /// Percentage gap between male and female median pay.
    #[serde(deserialize_with = "lenient_f64")]
    pub pay_gap: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub median_male: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub median_female: f64,
}

/// Pay gap and gender split for one job subtype in 2017.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobPayRecord {
    pub job_subtype: String,
    /// Percentage of employees who are female, 0–100.
    #[serde(deserialize_with = "lenient_f64")]
    pub proportion_female: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub pay_gap: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub num_jobs: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub job_type_code: f64,
}

impl Record for TemperatureRecord {
    const COLUMNS: &'static [&'static str] = &["year", "temperature"];
}

impl Record for PayGapRecord {
    const COLUMNS: &'static [&'static str] = &["year", "pay_gap", "median_male", "median_female"];
}

impl Record for JobPayRecord {
    const COLUMNS: &'static [&'static str] = &[
        "job_subtype",
        "proportion_female",
        "pay_gap",
        "num_jobs",
        "job_type_code",
    ];
}

impl Yearly for TemperatureRecord {
    fn year(&self) -> f64 {
        self.year
    }
}

impl Yearly for PayGapRecord {
    fn year(&self) -> f64 {
        self.year
    }
}

/// Numeric cell that never fails: anything unparsable becomes NaN and flows
/// through the arithmetic downstream.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Min / max / mean of one numeric column.
///
/// `min` and `max` skip NaN cells; `mean` does not, so a malformed cell shows
/// up as a NaN mean rather than a silently shifted one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Summary {
    /// `None` for an empty column.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        for v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Summary {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_column() {
        let s = Summary::of([2.0, -1.0, 5.0, 2.0]).unwrap();
        assert_eq!(s.min, -1.0);
        assert_eq!(s.max, 5.0);
        assert_eq!(s.mean, 2.0);
    }

    #[test]
    fn summary_empty_is_none() {
        assert!(Summary::of(std::iter::empty()).is_none());
    }

    #[test]
    fn summary_nan_poisons_mean_only() {
        let s = Summary::of([1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert!(s.mean.is_nan());
    }
}
