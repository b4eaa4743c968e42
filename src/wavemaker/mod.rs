//! Wavemaker boundary forcing.
//!
//! The wavemaker sits at the left end of the basin and is applied over the
//! x-transform region `x <= Lw`. Its position R, velocity dR/dt and
//! transverse derivative dR/dy are either analytic (`created` input) or
//! interpolated from the measured piston records.

mod analytic;
mod measured;

pub use {
    analytic::{Hinged, Uniform},
    measured::{load_wavemaker, Measured, TimeSeries, WavemakerData},
};

use {
    crate::{
        domain::Domain,
        test_case::{Dimension, InputData},
    },
    anyhow::{bail, Result},
    log::info,
    ndarray::{ArrayView2, ArrayViewMut1, Zip},
    serde::Deserialize,
    std::{f64::consts::PI, fmt::Debug, path::PathBuf},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WavemakerParameters {
    /// Gravitational constant
    pub gravity: f64,
    pub wavelength: f64,
    /// Wave amplitude (gamma)
    pub amplitude: f64,
    /// When to stop the wavemaker
    pub stop_time: f64,
    /// Measured piston position, columns time and position
    pub motion_file: PathBuf,
    /// Measured piston velocity, columns time and velocity
    pub velocity_file: PathBuf,
}

impl Default for WavemakerParameters {
    fn default() -> Self {
        WavemakerParameters {
            gravity: 9.81,
            wavelength: 2.0,
            amplitude: 0.0,
            stop_time: 120.0,
            motion_file: PathBuf::from("202002/PistonMotion.dat"),
            velocity_file: PathBuf::from("202002/PistonVelocity.dat"),
        }
    }
}

/// Linear wave characteristics at the still-water depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveCharacteristics {
    /// g
    pub gravity: f64,
    /// lambda
    pub wavelength: f64,
    /// k
    pub wavenumber: f64,
    /// w, from the dispersion relation w^2 = g k tanh(k H0)
    pub frequency: f64,
    /// Tw
    pub period: f64,
    /// gamma
    pub amplitude: f64,
    /// t_stop
    pub stop_time: f64,
}

impl WaveCharacteristics {
    pub fn new(params: &WavemakerParameters, still_water_depth: f64) -> Self {
        let wavenumber = 2.0 * PI / params.wavelength;
        let frequency =
            (params.gravity * wavenumber * (wavenumber * still_water_depth).tanh()).sqrt();

        WaveCharacteristics {
            gravity: params.gravity,
            wavelength: params.wavelength,
            wavenumber,
            frequency,
            period: 2.0 * PI / frequency,
            amplitude: params.amplitude,
            stop_time: params.stop_time,
        }
    }

    /// Positional form `(g, lamb, k, w, Tw, gamma, t_stop)`
    pub fn into_parts(self) -> (f64, f64, f64, f64, f64, f64, f64) {
        (
            self.gravity,
            self.wavelength,
            self.wavenumber,
            self.frequency,
            self.period,
            self.amplitude,
            self.stop_time,
        )
    }
}

/// Boundary condition imposed by the wavemaker at point (x, y) and time t
pub trait WavemakerMotion: Debug + Send + Sync {
    /// Wavemaker position R
    fn displacement(&self, x: f64, y: f64, t: f64) -> f64;

    /// Wavemaker velocity dR/dt
    fn velocity(&self, x: f64, y: f64, t: f64) -> f64;

    /// dR/dy
    fn transverse_derivative(&self, x: f64, y: f64, t: f64) -> f64;

    /// Evaluates R at time `t` onto `field`, one value per row `[x, y]` of `nodes`.
    fn fill_displacement(&self, field: ArrayViewMut1<f64>, nodes: ArrayView2<f64>, t: f64) {
        fill(field, nodes, |x, y| self.displacement(x, y, t));
    }

    fn fill_velocity(&self, field: ArrayViewMut1<f64>, nodes: ArrayView2<f64>, t: f64) {
        fill(field, nodes, |x, y| self.velocity(x, y, t));
    }

    fn fill_transverse_derivative(
        &self,
        field: ArrayViewMut1<f64>,
        nodes: ArrayView2<f64>,
        t: f64,
    ) {
        fill(field, nodes, |x, y| self.transverse_derivative(x, y, t));
    }
}

fn fill<F>(mut field: ArrayViewMut1<f64>, nodes: ArrayView2<f64>, f: F)
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    Zip::from(&mut field)
        .and(nodes.genrows())
        .par_apply(|value, node| *value = f(node[0], node[1]));
}

/// Wave characteristics together with the selected wavemaker motion
#[derive(Debug)]
pub struct Wavemaker {
    pub waves: WaveCharacteristics,
    pub motion: Box<dyn WavemakerMotion>,
}

impl Wavemaker {
    /// Positional form `(g, lamb, k, w, Tw, gamma, t_stop, motion)`
    #[allow(clippy::type_complexity)]
    pub fn into_parts(self) -> (f64, f64, f64, f64, f64, f64, f64, Box<dyn WavemakerMotion>) {
        let (g, lamb, k, w, tw, gamma, t_stop) = self.waves.into_parts();
        (g, lamb, k, w, tw, gamma, t_stop, self.motion)
    }
}

/// Selects the wavemaker motion for the given dimension and input data.
///
/// Measured input requires the loaded piston records in `data`.
pub fn wavemaker(
    dim: Dimension,
    input_data: InputData,
    domain: &Domain,
    waves: WaveCharacteristics,
    data: Option<WavemakerData>,
) -> Result<Wavemaker> {
    let motion: Box<dyn WavemakerMotion> = match (input_data, dim) {
        (InputData::Created, Dimension::Two) => {
            Box::new(Uniform::new(&waves, domain.transform_length))
        }
        (InputData::Created, Dimension::Three) => Box::new(Hinged::new(
            &waves,
            domain.transform_length,
            domain.width,
        )),
        (InputData::Measurements, Dimension::Two) => match data {
            Some(data) => Box::new(Measured {
                data,
                transform_length: domain.transform_length,
            }),
            None => bail!("Measured wavemaker selected but no piston data was loaded"),
        },
        (InputData::Measurements, Dimension::Three) => {
            bail!("Measured wavemaker data requires a 2D simulation")
        }
    };

    info!(
        "Wavemaker: {:?} input in {:?}, period {:.4}s",
        input_data, dim, waves.period
    );

    Ok(Wavemaker { waves, motion })
}
