use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, in the column order the viewer expects.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Hospital Name")]
    name: String,
    #[serde(rename = "Services")]
    services: String,
    #[serde(rename = "Insurance Coverage")]
    insurance: String,
    #[serde(rename = "Hospital Type")]
    hospital_type: &'static str,
    #[serde(rename = "Hospital Ownership")]
    ownership: &'static str,
    #[serde(rename = "State")]
    state: &'static str,
    #[serde(rename = "Latitude")]
    latitude: String,
    #[serde(rename = "Longitude")]
    longitude: String,
}

/// Deterministic splitmix64 stream; reproducible output for a given seed.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform offset of at most `spread` around `center`.
    fn jitter(&mut self, center: f64, spread: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        center + (unit * 2.0 - 1.0) * spread
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Between `min` and `max` distinct entries joined with ", ".
    fn pick_list(&mut self, items: &[&str], min: usize, max: usize) -> String {
        let count = min + (self.next_u64() as usize) % (max - min + 1);
        let mut chosen: Vec<&str> = Vec::with_capacity(count);
        while chosen.len() < count.min(items.len()) {
            let item = *self.pick(items);
            if !chosen.contains(&item) {
                chosen.push(item);
            }
        }
        chosen.join(", ")
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);

    // (state, city, latitude, longitude)
    let cities = [
        ("NY", "New York", 40.7128, -74.0060),
        ("NY", "Buffalo", 42.8864, -78.8784),
        ("NJ", "Newark", 40.7357, -74.1724),
        ("CA", "Los Angeles", 34.0522, -118.2437),
        ("CA", "San Francisco", 37.7749, -122.4194),
        ("TX", "Houston", 29.7604, -95.3698),
        ("IL", "Chicago", 41.8781, -87.6298),
    ];
    let suffixes = ["General", "Memorial", "Medical Center", "Community", "Regional"];
    let services = [
        "Cardiology", "Oncology", "Pediatrics", "Emergency", "Orthopedics",
        "Neurology", "Maternity", "Radiology",
    ];
    let insurers = ["Aetna", "Cigna", "Medicare", "Medicaid", "UnitedHealthcare", "Blue Cross"];
    let types = ["Acute Care", "Critical Access", "Childrens", "Psychiatric"];
    let ownerships = ["Private", "Public", "Non-profit", "Government"];

    let output_path = "sample_hospitals.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let total = 200;
    let mut invalid = 0;
    for i in 0..total {
        let &(state, city, lat, lon) = rng.pick(&cities);

        // Every 25th row carries an unusable coordinate.
        let (latitude, longitude) = if i % 25 == 7 {
            invalid += 1;
            ("N/A".to_string(), format!("{lon:.6}"))
        } else {
            (
                format!("{:.6}", rng.jitter(lat, 0.15)),
                format!("{:.6}", rng.jitter(lon, 0.15)),
            )
        };

        writer.serialize(SampleRow {
            name: format!("{city} {} #{i}", rng.pick(&suffixes)),
            services: rng.pick_list(&services, 1, 4),
            insurance: rng.pick_list(&insurers, 1, 3),
            hospital_type: *rng.pick(&types),
            ownership: *rng.pick(&ownerships),
            state,
            latitude,
            longitude,
        })?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {total} hospitals ({invalid} with invalid coordinates) to {output_path}");
    Ok(())
}
