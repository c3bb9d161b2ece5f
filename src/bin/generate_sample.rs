//! Writes synthetic versions of the gallery's three datasets.
//!
//! Usage: `generate_sample [DATA_DIR]` (defaults to `data`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct TemperatureRow {
    year: i32,
    temperature: f64,
}

#[derive(Serialize)]
struct PayGapRow {
    year: i32,
    pay_gap: f64,
    median_male: f64,
    median_female: f64,
}

#[derive(Serialize)]
struct JobRow {
    job_subtype: &'static str,
    proportion_female: f64,
    pay_gap: f64,
    num_jobs: u32,
    job_type_code: u32,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round_to(v: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (v * f).round() / f
}

/// Anomaly trend: flat until ~1910, then a slow rise that steepens after 1975.
fn temperature_rows(rng: &mut SimpleRng) -> Vec<TemperatureRow> {
    (1880..=2020)
        .map(|year| {
            let t = (year - 1880) as f64;
            let trend = -0.25 + 0.004 * t + if year > 1975 { 0.016 * (year - 1975) as f64 } else { 0.0 };
            TemperatureRow {
                year,
                temperature: round_to(trend + rng.gauss(0.0, 0.08), 2),
            }
        })
        .collect()
}

fn pay_gap_rows(rng: &mut SimpleRng) -> Vec<PayGapRow> {
    (1997..=2017)
        .map(|year| {
            let i = (year - 1997) as f64;
            let median_male = 9.0 + 0.32 * i + rng.gauss(0.0, 0.05);
            let gap = (20.1 - 0.55 * i + rng.gauss(0.0, 0.3)).max(0.0);
            PayGapRow {
                year,
                pay_gap: round_to(gap, 1),
                median_male: round_to(median_male, 2),
                median_female: round_to(median_male * (1.0 - gap / 100.0), 2),
            }
        })
        .collect()
}

fn job_rows(rng: &mut SimpleRng) -> Vec<JobRow> {
    // (subtype, category code, typical % female, typical gap)
    let jobs: [(&str, u32, f64, f64); 16] = [
        ("Programmers and software developers", 0, 16.0, 8.0),
        ("IT technicians", 0, 22.0, 6.0),
        ("Graphic designers", 1, 45.0, 4.0),
        ("Journalists", 1, 48.0, 7.0),
        ("Management consultants", 2, 42.0, 13.0),
        ("Financial analysts", 3, 35.0, 17.0),
        ("Bank clerks", 3, 72.0, 9.0),
        ("Production managers", 4, 18.0, 12.0),
        ("Solicitors", 5, 55.0, 14.0),
        ("Nurses", 6, 88.0, -2.0),
        ("Medical practitioners", 6, 49.0, 15.0),
        ("Teaching assistants", 7, 91.0, 1.0),
        ("Sales assistants", 8, 64.0, 3.0),
        ("Cleaners", 9, 70.0, -1.0),
        ("Electricians", 10, 2.0, -6.0),
        ("Large goods vehicle drivers", 11, 1.0, -8.0),
    ];

    jobs.iter()
        .map(|&(name, code, female, gap)| JobRow {
            job_subtype: name,
            proportion_female: round_to((female + rng.gauss(0.0, 2.0)).clamp(0.0, 100.0), 1),
            pay_gap: round_to(gap + rng.gauss(0.0, 1.0), 1),
            num_jobs: 20 + (rng.next_f64() * 580.0) as u32,
            job_type_code: code,
        })
        .collect()
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    let out: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    let mut rng = SimpleRng::new(42);

    write_csv(
        &out.join("surface-temperature/surface-temperature.csv"),
        &temperature_rows(&mut rng),
    )?;
    write_csv(
        &out.join("pay-gap/all-employees-hourly-pay-by-gender-1997-2017.csv"),
        &pay_gap_rows(&mut rng),
    )?;
    write_csv(
        &out.join("pay-gap/occupation-hourly-pay-by-gender-2017.csv"),
        &job_rows(&mut rng),
    )?;
    Ok(())
}
