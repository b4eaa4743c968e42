use {
    anyhow::{bail, Result},
    serde::Deserialize,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeParameters {
    pub initial_time: f64,
    /// Simulation time step size
    pub time_step: f64,
    pub final_time: f64,
    /// Interval of saving results
    pub save_interval: f64,
}

impl Default for TimeParameters {
    fn default() -> Self {
        TimeParameters {
            initial_time: 0.0,
            time_step: 0.001,
            final_time: 0.1,
            save_interval: 0.02,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStepping {
    /// T0
    pub initial_time: f64,
    /// Current time t
    pub time: f64,
    /// dt
    pub time_step: f64,
    /// Tend
    pub final_time: f64,
    /// dt_save
    pub save_interval: f64,
}

impl TimeStepping {
    /// Number of steps taken to reach the final time
    pub fn step_count(&self) -> usize {
        ((self.final_time - self.initial_time) / self.time_step).round() as usize
    }

    /// Number of steps between two saves
    pub fn save_stride(&self) -> usize {
        ((self.save_interval / self.time_step).round() as usize).max(1)
    }

    pub fn is_save_step(&self, step: usize) -> bool {
        step % self.save_stride() == 0
    }

    /// Times at which results are saved, including the initial time
    pub fn save_times(&self) -> Vec<f64> {
        (0..=self.step_count())
            .filter(|&n| self.is_save_step(n))
            .map(|n| self.initial_time + n as f64 * self.time_step)
            .collect()
    }

    /// Moves the current time on by one step.
    pub fn advance(&mut self) -> f64 {
        self.time += self.time_step;
        self.time
    }

    /// Positional form `(T0, t, dt, Tend, dt_save)`
    pub fn into_parts(self) -> (f64, f64, f64, f64, f64) {
        (
            self.initial_time,
            self.time,
            self.time_step,
            self.final_time,
            self.save_interval,
        )
    }
}

/// Builds the time stepping constants. The wave period does not affect them.
pub fn set_time(params: &TimeParameters, _period: f64) -> Result<TimeStepping> {
    for (name, value) in &[
        ("initial_time", params.initial_time),
        ("time_step", params.time_step),
        ("final_time", params.final_time),
        ("save_interval", params.save_interval),
    ] {
        if !value.is_finite() {
            bail!("Time parameter {} must be finite, got {}", name, value);
        }
    }

    if !(params.time_step > 0.0) {
        bail!("Time step must be positive, got {}", params.time_step);
    }
    if !(params.save_interval > 0.0) {
        bail!("Save interval must be positive, got {}", params.save_interval);
    }
    if params.final_time < params.initial_time {
        bail!(
            "Final time {} precedes initial time {}",
            params.final_time,
            params.initial_time
        );
    }

    Ok(TimeStepping {
        initial_time: params.initial_time,
        time: params.initial_time,
        time_step: params.time_step,
        final_time: params.final_time,
        save_interval: params.save_interval,
    })
}
