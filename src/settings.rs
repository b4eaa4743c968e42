use {
    crate::{
        domain::{domain, Domain},
        parameters::Parameters,
        test_case::{Dimension, InputData, TestCase},
        time::{set_time, TimeStepping},
        wavemaker::{load_wavemaker, wavemaker, WaveCharacteristics, Wavemaker, WavemakerData},
    },
    anyhow::{bail, Result},
    log::{info, warn},
    std::path::Path,
};

/// Resolved configuration of a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub test_case: TestCase,
    pub domain: Domain,
    pub waves: WaveCharacteristics,
    pub time: TimeStepping,
}

impl Settings {
    pub fn new(params: &Parameters) -> Result<Self> {
        let test_case = params.test_case.clone();

        if test_case.input_data == InputData::Measurements && test_case.dim != Dimension::Two {
            bail!("Measured wavemaker data requires a 2D simulation");
        }

        let domain = domain(&params.domain, test_case.bottom)?;
        let waves = WaveCharacteristics::new(&params.wavemaker, domain.still_water_depth());
        let time = set_time(&params.time, waves.period)?;

        if test_case.input_data == InputData::Created && waves.amplitude == 0.0 {
            warn!("Wavemaker amplitude is zero, the created wavemaker will not move");
        }

        info!(
            "Settings for {} ({} scheme), basin {} x {}, {} steps of {}",
            test_case.name,
            test_case.scheme,
            domain.length,
            domain.width,
            time.step_count(),
            time.time_step
        );

        Ok(Settings {
            test_case,
            domain,
            waves,
            time,
        })
    }

    /// Builds the wavemaker, loading the piston records from `motion_file`
    /// and `velocity_file` when the input is measured.
    pub fn wavemaker<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        motion_file: P,
        velocity_file: Q,
    ) -> Result<Wavemaker> {
        let data = match self.test_case.input_data {
            InputData::Measurements => Some(load_wavemaker(
                motion_file,
                velocity_file,
                self.time.time_step,
            )?),
            InputData::Created => None,
        };

        self.wavemaker_with(data)
    }

    /// Builds the wavemaker from already loaded piston records.
    pub fn wavemaker_with(&self, data: Option<WavemakerData>) -> Result<Wavemaker> {
        wavemaker(
            self.test_case.dim,
            self.test_case.input_data,
            &self.domain,
            self.waves,
            data,
        )
    }
}
