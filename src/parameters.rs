use {
    crate::{
        domain::DomainParameters, test_case::TestCase, time::TimeParameters,
        wavemaker::WavemakerParameters,
    },
    anyhow::{Context, Result},
    serde::Deserialize,
    std::{fs::File, path::Path},
};

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    pub test_case: TestCase,
    pub domain: DomainParameters,
    pub wavemaker: WavemakerParameters,
    pub time: TimeParameters,
}

impl Parameters {
    /// Reads parameters from a YAML file, missing fields take their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

        serde_yaml::from_reader::<_, Parameters>(file)
            .with_context(|| format!("Failed to parse parameters from {}", path.display()))
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::test_case::{Dimension, InputData},
    };

    #[test]
    fn defaults() {
        assert_eq!(
            Parameters::default(),
            Parameters::load("src/testdata/defaults.yaml").unwrap()
        );
    }

    #[test]
    fn partial() {
        let params = serde_yaml::from_str::<Parameters>(
            "test_case:\n  input_data: created\n  dim: 3D\nwavemaker:\n  amplitude: 0.02\n",
        )
        .unwrap();

        assert_eq!(params.test_case.input_data, InputData::Created);
        assert_eq!(params.test_case.dim, Dimension::Three);
        assert_eq!(params.test_case.name, "TC4_test");
        assert_eq!(params.wavemaker.amplitude, 0.02);
        assert_eq!(params.wavemaker.stop_time, 120.0);
        assert_eq!(params.domain, DomainParameters::default());
        assert_eq!(params.time, TimeParameters::default());
    }

    #[test]
    fn unknown_field() {
        assert!(serde_yaml::from_str::<Parameters>("domain:\n  depth: 2.0\n").is_err());
    }

    #[test]
    fn unknown_scheme() {
        assert!(serde_yaml::from_str::<Parameters>("test_case:\n  scheme: RK4\n").is_err());
    }

    #[test]
    fn missing_file() {
        assert!(Parameters::load("src/testdata/missing.yaml").is_err());
    }
}
