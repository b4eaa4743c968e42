//! Piston motion measured during the experiments.
//!
//! The data files hold one sample per line, time in the first column and the
//! piston position (or velocity) in the second:
//!
//! ```text
//! # time(s) position(m)
//! 0.000 0.0000
//! 0.005 0.0001
//! ```

use {
    super::WavemakerMotion,
    anyhow::{bail, Context, Result},
    log::debug,
    ndarray::Array1,
    std::{fs, path::Path},
};

/// A sampled signal, linearly interpolated between samples.
///
/// Holds at least one sample, with finite and strictly increasing times.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    times: Array1<f64>,
    values: Array1<f64>,
}

impl TimeSeries {
    pub fn new(times: Array1<f64>, values: Array1<f64>) -> Result<Self> {
        if times.len() != values.len() {
            bail!(
                "{} sample times given for {} values",
                times.len(),
                values.len()
            );
        }
        if times.is_empty() {
            bail!("No samples found");
        }
        for (i, (&time, &value)) in times.iter().zip(values.iter()).enumerate() {
            if !time.is_finite() || !value.is_finite() {
                bail!("Sample {}: non-finite sample ({}, {})", i + 1, time, value);
            }
            if i > 0 && time <= times[i - 1] {
                bail!("Sample {}: time {} does not follow {}", i + 1, time, times[i - 1]);
            }
        }

        Ok(TimeSeries { times, values })
    }

    /// Parses the first two columns of a whitespace separated data file.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut times = Vec::new();
        let mut values = Vec::new();

        for (i, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split_whitespace();
            let (time, value) = match (columns.next(), columns.next()) {
                (Some(time), Some(value)) => (time, value),
                _ => bail!("Line {}: expected two columns, found \"{}\"", i + 1, line),
            };

            let time = time
                .parse::<f64>()
                .with_context(|| format!("Line {}: invalid time \"{}\"", i + 1, time))?;
            let value = value
                .parse::<f64>()
                .with_context(|| format!("Line {}: invalid value \"{}\"", i + 1, value))?;

            if !time.is_finite() || !value.is_finite() {
                bail!("Line {}: non-finite sample \"{}\"", i + 1, line);
            }

            if let Some(&last) = times.last() {
                if time <= last {
                    bail!("Line {}: time {} does not follow {}", i + 1, time, last);
                }
            }

            times.push(time);
            values.push(value);
        }

        Self::new(Array1::from(times), Array1::from(values))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let series =
            Self::parse(&contents).with_context(|| format!("Failed to parse {}", path.display()))?;

        debug!("Loaded {} samples from {}", series.len(), path.display());

        Ok(series)
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Appends one sample `2 dt` after the last one, holding the last value,
    /// so that lookups one step past the end of the record stay in range.
    pub fn padded(&self, dt: f64) -> Result<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            bail!("Padding step must be positive, got {}", dt);
        }

        let n = self.len();

        let mut times = self.times.to_vec();
        let mut values = self.values.to_vec();

        times.push(self.times[n - 1] + 2.0 * dt);
        values.push(self.values[n - 1]);

        Ok(TimeSeries {
            times: Array1::from(times),
            values: Array1::from(values),
        })
    }

    /// Linear interpolation at `t`, clamped to the first and last samples.
    pub fn interpolate(&self, t: f64) -> f64 {
        let n = self.len();

        if t.is_nan() {
            return f64::NAN;
        }

        if t <= self.times[0] {
            return self.values[0];
        }
        if t >= self.times[n - 1] {
            return self.values[n - 1];
        }

        // First sample strictly after t, 1 <= upper <= n - 1 given the checks above
        let upper = match self.times.as_slice() {
            Some(times) => times.partition_point(|&s| s <= t),
            None => self.times.iter().take_while(|&&s| s <= t).count(),
        };
        let lower = upper - 1;

        let (t0, t1) = (self.times[lower], self.times[upper]);
        let (v0, v1) = (self.values[lower], self.values[upper]);

        v0 + (t - t0) / (t1 - t0) * (v1 - v0)
    }
}

/// Padded piston position and velocity records
#[derive(Debug, Clone, PartialEq)]
pub struct WavemakerData {
    pub motion: TimeSeries,
    pub velocity: TimeSeries,
}

impl WavemakerData {
    /// Positional form `(t_wm, wm_data, t_vel, vel_data)`
    pub fn into_parts(self) -> (Array1<f64>, Array1<f64>, Array1<f64>, Array1<f64>) {
        (
            self.motion.times,
            self.motion.values,
            self.velocity.times,
            self.velocity.values,
        )
    }
}

/// Loads the piston position and velocity files and pads each record by one sample.
pub fn load_wavemaker<P: AsRef<Path>, Q: AsRef<Path>>(
    motion_path: P,
    velocity_path: Q,
    dt: f64,
) -> Result<WavemakerData> {
    Ok(WavemakerData {
        motion: TimeSeries::load(motion_path)?.padded(dt)?,
        velocity: TimeSeries::load(velocity_path)?.padded(dt)?,
    })
}

/// Wavemaker driven by the measured piston records
#[derive(Debug, Clone)]
pub struct Measured {
    pub data: WavemakerData,
    /// End of the x-transform (Lw)
    pub transform_length: f64,
}

impl WavemakerMotion for Measured {
    fn displacement(&self, x: f64, _y: f64, t: f64) -> f64 {
        if x <= self.transform_length {
            self.data.motion.interpolate(t)
        } else {
            0.0
        }
    }

    fn velocity(&self, x: f64, _y: f64, t: f64) -> f64 {
        if x <= self.transform_length {
            self.data.velocity.interpolate(t)
        } else {
            0.0
        }
    }

    fn transverse_derivative(&self, _x: f64, _y: f64, _t: f64) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        approx::assert_abs_diff_eq,
        ndarray::array,
        std::{fs::File, io::Write},
        tempdir::TempDir,
    };

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        File::create(&path)
            .unwrap()
            .write_all(contents.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn loads_and_pads() {
        let dir = TempDir::new("wave-tank").unwrap();
        let motion = write(&dir, "PistonMotion.dat", "0.0 0.0\n0.5 0.1\n1.0 0.3\n");
        let velocity = write(&dir, "PistonVelocity.dat", "0.0 0.2\n0.5 0.4\n");

        let (t_wm, wm_data, t_vel, vel_data) =
            load_wavemaker(&motion, &velocity, 0.001).unwrap().into_parts();

        assert_eq!(t_wm.len(), 4);
        assert_eq!(wm_data.len(), 4);
        assert_eq!(t_vel.len(), 3);
        assert_eq!(vel_data.len(), 3);

        assert_abs_diff_eq!(t_wm[3], 1.002, epsilon = 1.0E-12);
        assert_eq!(wm_data[3], 0.3);
        assert_abs_diff_eq!(t_vel[2], 0.502, epsilon = 1.0E-12);
        assert_eq!(vel_data[2], 0.4);
    }

    #[test]
    fn skips_comments_and_extra_columns() {
        let series =
            TimeSeries::parse("# time position\n\n0.0 1.0 9.0\n  1.0   2.0\n# end\n").unwrap();

        assert_eq!(series.times(), &array![0.0, 1.0]);
        assert_eq!(series.values(), &array![1.0, 2.0]);
    }

    #[test]
    fn rejects_single_column() {
        let err = TimeSeries::parse("0.0 1.0\n1.0\n").unwrap_err();

        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn rejects_invalid_number() {
        let err = TimeSeries::parse("0.0 1.0\n1.0 abc\n").unwrap_err();

        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn rejects_non_increasing_time() {
        assert!(TimeSeries::parse("0.0 1.0\n0.0 2.0\n").is_err());
    }

    #[test]
    fn rejects_non_finite() {
        for contents in &[
            "nan 0.0\n1.0 1.0\n",
            "0.0 0.0\ninf 1.0\n",
            "0.0 0.0\n1.0 NaN\n",
            "0.0 -inf\n",
        ] {
            assert!(TimeSeries::parse(contents).is_err(), "{:?}", contents);
        }

        let err = TimeSeries::parse("0.0 0.0\nnan 1.0\n").unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn checked_construction() {
        assert!(TimeSeries::new(Array1::from(Vec::new()), Array1::from(Vec::new())).is_err());
        assert!(TimeSeries::new(array![0.0, 1.0], array![0.0]).is_err());
        assert!(TimeSeries::new(array![1.0, 0.0], array![0.0, 0.0]).is_err());
        assert!(TimeSeries::new(array![0.0, f64::NAN], array![0.0, 0.0]).is_err());
    }

    #[test]
    fn padding_needs_positive_step() {
        let series = TimeSeries::new(array![0.0, 1.0], array![0.0, 1.0]).unwrap();

        assert!(series.padded(0.0).is_err());
        assert!(series.padded(f64::INFINITY).is_err());
        assert_eq!(series.padded(0.5).unwrap().times(), &array![0.0, 1.0, 2.0]);
    }

    #[test]
    fn rejects_empty() {
        assert!(TimeSeries::parse("# nothing\n").is_err());
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new("wave-tank").unwrap();
        let velocity = write(&dir, "PistonVelocity.dat", "0.0 0.2\n");

        let err = load_wavemaker(dir.path().join("missing.dat"), &velocity, 0.001).unwrap_err();

        assert!(err.to_string().contains("missing.dat"));
    }

    #[test]
    fn interpolation() {
        let series = TimeSeries::new(array![0.0, 1.0, 3.0], array![0.0, 2.0, -2.0]).unwrap();

        assert_eq!(series.interpolate(-1.0), 0.0);
        assert_eq!(series.interpolate(0.0), 0.0);
        assert_abs_diff_eq!(series.interpolate(0.25), 0.5, epsilon = 1.0E-12);
        assert_eq!(series.interpolate(1.0), 2.0);
        assert_abs_diff_eq!(series.interpolate(2.0), 0.0, epsilon = 1.0E-12);
        assert_eq!(series.interpolate(5.0), -2.0);
        assert!(series.interpolate(f64::NAN).is_nan());
    }

    #[test]
    fn measured_motion() {
        let series = TimeSeries::new(array![0.0, 1.0], array![0.0, 1.0]).unwrap();
        let measured = Measured {
            data: WavemakerData {
                motion: series.clone(),
                velocity: series,
            },
            transform_length: 1.0,
        };

        assert_abs_diff_eq!(measured.displacement(0.5, 0.3, 0.5), 0.5, epsilon = 1.0E-12);
        assert_abs_diff_eq!(measured.velocity(1.0, 0.0, 0.25), 0.25, epsilon = 1.0E-12);
        assert_eq!(measured.displacement(1.5, 0.0, 0.5), 0.0);
        assert_eq!(measured.transverse_derivative(0.0, 0.0, 0.5), 0.0);
    }
}
