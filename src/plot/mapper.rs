// ---------------------------------------------------------------------------
// Linear value → pixel mapping
// ---------------------------------------------------------------------------

/// Re-map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range extrapolate linearly; nothing is clamped.
/// A degenerate input range (`in_min == in_max`) divides by zero and yields
/// NaN or ±infinity, which callers either guard against or let fall off-canvas.
pub fn map_value(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// A reusable `[domain] → [range]` linear mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        map_value(value, self.domain.0, self.domain.1, self.range.0, self.range.1)
    }

    /// Same as [`LinearScale::map`], narrowed for painting.
    pub fn px(&self, value: f64) -> f32 {
        self.map(value) as f32
    }

    /// Whether the domain has zero width, i.e. every mapping is NaN/inf.
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }
}
