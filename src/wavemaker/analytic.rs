use super::{WaveCharacteristics, WavemakerMotion};

/// Time at which the motion is evaluated; the wavemaker freezes after `t_stop`.
fn frozen(t: f64, t_stop: f64) -> f64 {
    if t <= t_stop {
        t
    } else {
        t_stop
    }
}

/// Piston moving uniformly across the basin, R(t)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    pub amplitude: f64,
    pub frequency: f64,
    pub stop_time: f64,
    /// End of the x-transform (Lw)
    pub transform_length: f64,
}

impl Uniform {
    pub fn new(waves: &WaveCharacteristics, transform_length: f64) -> Self {
        Uniform {
            amplitude: waves.amplitude,
            frequency: waves.frequency,
            stop_time: waves.stop_time,
            transform_length,
        }
    }
}

impl WavemakerMotion for Uniform {
    fn displacement(&self, x: f64, _y: f64, t: f64) -> f64 {
        if x > self.transform_length {
            return 0.0;
        }
        let t = frozen(t, self.stop_time);
        -self.amplitude * (self.frequency * t).cos()
    }

    fn velocity(&self, x: f64, _y: f64, t: f64) -> f64 {
        if x > self.transform_length {
            return 0.0;
        }
        let t = frozen(t, self.stop_time);
        self.amplitude * self.frequency * (self.frequency * t).sin()
    }

    fn transverse_derivative(&self, _x: f64, _y: f64, _t: f64) -> f64 {
        0.0
    }
}

/// Piston hinged at mid-width, with an amplitude growing linearly across the
/// basin from `-gamma` at y = 0 to `gamma` at y = Ly, R(y,t)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hinged {
    pub amplitude: f64,
    pub frequency: f64,
    pub stop_time: f64,
    pub transform_length: f64,
    /// Ly / 2
    pub half_width: f64,
}

impl Hinged {
    pub fn new(waves: &WaveCharacteristics, transform_length: f64, width: f64) -> Self {
        Hinged {
            amplitude: waves.amplitude,
            frequency: waves.frequency,
            stop_time: waves.stop_time,
            transform_length,
            half_width: 0.5 * width,
        }
    }

    fn scale(&self, y: f64) -> f64 {
        (y - self.half_width) / self.half_width
    }
}

impl WavemakerMotion for Hinged {
    fn displacement(&self, x: f64, y: f64, t: f64) -> f64 {
        if x > self.transform_length {
            return 0.0;
        }
        let t = frozen(t, self.stop_time);
        self.amplitude * self.scale(y) * (self.frequency * t).cos()
    }

    fn velocity(&self, x: f64, y: f64, t: f64) -> f64 {
        if x > self.transform_length {
            return 0.0;
        }
        let t = frozen(t, self.stop_time);
        -self.amplitude * self.frequency * self.scale(y) * (self.frequency * t).sin()
    }

    fn transverse_derivative(&self, x: f64, _y: f64, t: f64) -> f64 {
        if x > self.transform_length {
            return 0.0;
        }
        let t = frozen(t, self.stop_time);
        self.amplitude * (self.frequency * t).cos() / self.half_width
    }
}

#[cfg(test)]
mod test {
    use {super::*, approx::assert_abs_diff_eq, std::f64::consts::PI};

    fn waves() -> WaveCharacteristics {
        WaveCharacteristics {
            gravity: 9.81,
            wavelength: 2.0,
            wavenumber: PI,
            frequency: PI,
            period: 2.0,
            amplitude: 0.1,
            stop_time: 10.0,
        }
    }

    #[test]
    fn uniform_motion() {
        let wm = Uniform::new(&waves(), 1.0);

        assert_abs_diff_eq!(wm.displacement(0.0, 0.0, 0.0), -0.1, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.displacement(1.0, 0.0, 1.0), 0.1, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.velocity(0.0, 0.0, 0.5), 0.1 * PI, epsilon = 1.0E-12);
        assert_eq!(wm.displacement(1.5, 0.0, 0.0), 0.0);
        assert_eq!(wm.velocity(1.5, 0.0, 0.5), 0.0);
    }

    #[test]
    fn uniform_has_no_transverse_derivative() {
        let wm = Uniform::new(&waves(), 1.0);

        for &t in &[0.0, 0.3, 5.0, 20.0] {
            assert_eq!(wm.transverse_derivative(0.0, 0.7, t), 0.0);
        }
    }

    #[test]
    fn uniform_freezes_after_stop() {
        let wm = Uniform::new(&waves(), 1.0);

        // t_stop = 10 is a whole number of periods
        assert_abs_diff_eq!(wm.displacement(0.0, 0.0, 10.5), -0.1, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.displacement(0.0, 0.0, 37.25), -0.1, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.velocity(0.0, 0.0, 10.5), 0.0, epsilon = 1.0E-12);
        assert_eq!(
            wm.displacement(0.0, 0.0, 11.0),
            wm.displacement(0.0, 0.0, 10.0)
        );
    }

    #[test]
    fn hinged_scales_across_basin() {
        let wm = Hinged::new(&waves(), 1.0, 2.0);

        assert_abs_diff_eq!(wm.displacement(0.0, 0.0, 0.0), -0.1, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.displacement(0.0, 1.0, 0.0), 0.0, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.displacement(0.0, 2.0, 0.0), 0.1, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.velocity(0.0, 2.0, 0.5), -0.1 * PI, epsilon = 1.0E-12);
        assert_eq!(wm.displacement(2.0, 2.0, 0.0), 0.0);
    }

    #[test]
    fn hinged_transverse_derivative() {
        let wm = Hinged::new(&waves(), 1.0, 2.0);

        assert_abs_diff_eq!(wm.transverse_derivative(0.0, 0.3, 0.0), 0.1, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.transverse_derivative(0.5, 1.7, 1.0), -0.1, epsilon = 1.0E-12);
        assert_abs_diff_eq!(wm.transverse_derivative(0.0, 0.3, 12.0), 0.1, epsilon = 1.0E-12);
        assert_eq!(wm.transverse_derivative(1.5, 0.3, 0.0), 0.0);
    }
}
