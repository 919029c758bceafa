//! Writes a synthetic AstroImageJ-style measurement table for M52 so the
//! viewer can be tried without telescope data.

/// Reference star magnitudes for M52 (matches the built-in catalogue).
const REF_B_MAG: f64 = 9.411;
const REF_V_MAG: f64 = 9.006;

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
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Flux relative to a star of magnitude `reference`.
fn relative_flux(mag: f64, reference: f64) -> f64 {
    10f64.powf(-(mag - reference) / 2.5)
}

/// A rough main sequence: colour index grows with V magnitude, plus scatter.
fn main_sequence_star(rng: &mut SimpleRng) -> (f64, f64) {
    let v = rng.uniform(8.0, 15.5);
    let b_v = (0.18 * (v - 8.0) - 0.1 + rng.gauss(0.0, 0.08)).clamp(-0.4, 1.9);
    (b_v + v, v)
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_stars = 120;

    // T1 is the reference star itself, so its relative flux is exactly 1.
    let mut stars: Vec<(f64, f64)> = vec![(REF_B_MAG, REF_V_MAG)];
    stars.extend((1..n_stars).map(|_| main_sequence_star(&mut rng)));

    let mut header = vec![String::new(), "Label".to_string(), "JD_UTC".to_string()];
    for i in 1..=n_stars {
        header.push(format!("rel_flux_T{i}"));
        header.push(format!("rel_flux_err_T{i}"));
    }
    header.push("Sky/Pixel_T1".to_string());

    let output_path = "M52_Measurements.xls";
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(output_path)
        .expect("Failed to create output file");
    writer.write_record(&header).expect("Failed to write header");

    let exposures = [
        ("M52_Filter_B_001.fits", 2460160.51234, REF_B_MAG, 0),
        ("M52_Filter_V_001.fits", 2460160.51987, REF_V_MAG, 1),
    ];
    for (row_no, (label, jd, reference, band)) in exposures.into_iter().enumerate() {
        let mut record = vec![
            (row_no + 1).to_string(),
            label.to_string(),
            format!("{jd:.5}"),
        ];
        for (i, &(b_mag, v_mag)) in stars.iter().enumerate() {
            let mag = if band == 0 { b_mag } else { v_mag };
            let noise = if i == 0 { 0.0 } else { rng.gauss(0.0, 0.002) };
            let flux = relative_flux(mag, reference) * (1.0 + noise);
            record.push(format!("{:.6}", flux.max(1e-6)));
            record.push(format!("{:.6}", flux.abs() * 0.01));
        }
        record.push(format!("{:.3}", rng.uniform(95.0, 130.0)));
        writer.write_record(&record).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {n_stars} stars (B and V exposures) to {output_path}");
}
