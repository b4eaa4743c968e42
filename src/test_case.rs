use {
    serde::Deserialize,
    std::{fmt, path::PathBuf},
};

/// Source of the wavemaker motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputData {
    /// Piston motion and velocity recorded in experiments
    Measurements,
    /// Analytic wavemaker motion
    Created,
}

/// Time integration scheme used by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Scheme {
    #[serde(rename = "SE")]
    SymplecticEuler,
    #[serde(rename = "SV")]
    StormerVerlet,
    /// Modified mid-point variational approach
    #[serde(rename = "MMP")]
    ModifiedMidPoint,
}

impl Scheme {
    pub fn label(self) -> &'static str {
        match self {
            Scheme::SymplecticEuler => "SE",
            Scheme::StormerVerlet => "SV",
            Scheme::ModifiedMidPoint => "MMP",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Spatial dimensionality of the wavemaker and bed.
///
/// In 2D the wavemaker is R(t) and the bed b(x); in 3D they may also vary
/// across the basin, R(y,t) and b(x,y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Dimension {
    #[serde(rename = "2D")]
    Two,
    #[serde(rename = "3D")]
    Three,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bottom {
    /// b(x,y) = 0
    Flat,
    /// Flat bed followed by a sloping beach
    Nonuniform,
}

/// Fidelity of the weak forms handed to the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeakForm {
    /// Mild-slope approximation
    MildSlope,
    /// Full weak forms
    Full,
}

impl WeakForm {
    /// Numeric FWF flag: 1 for full weak forms, 0 for the mild-slope approximation.
    pub fn flag(self) -> u8 {
        match self {
            WeakForm::MildSlope => 0,
            WeakForm::Full => 1,
        }
    }
}

/// Test case selection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestCase {
    pub input_data: InputData,
    pub scheme: Scheme,
    pub dim: Dimension,
    /// Name of the test case, used as the last component of the save path
    pub name: String,
    /// Root directory of all saved results
    pub output_root: PathBuf,
    pub bottom: Bottom,
    pub weak_form: WeakForm,
    /// Whether or not to save the 3D results into pvd files
    pub save_pvd: bool,
}

impl Default for TestCase {
    fn default() -> Self {
        TestCase {
            input_data: InputData::Measurements,
            scheme: Scheme::ModifiedMidPoint,
            dim: Dimension::Two,
            name: "TC4_test".to_owned(),
            output_root: PathBuf::from("data"),
            bottom: Bottom::Flat,
            weak_form: WeakForm::MildSlope,
            save_pvd: false,
        }
    }
}

impl TestCase {
    /// Directory the solver writes into, `<output_root>/<scheme>/<name>/`
    pub fn save_path(&self) -> PathBuf {
        self.output_root.join(self.scheme.label()).join(&self.name)
    }

    /// Positional form `(input_data, scheme, dim, save_path, bottom, weak_form, save_pvd)`
    pub fn into_parts(self) -> (InputData, Scheme, Dimension, PathBuf, Bottom, WeakForm, bool) {
        let save_path = self.save_path();
        (
            self.input_data,
            self.scheme,
            self.dim,
            save_path,
            self.bottom,
            self.weak_form,
            self.save_pvd,
        )
    }
}

/// The fixed test case selection
pub fn test_case() -> TestCase {
    TestCase::default()
}
