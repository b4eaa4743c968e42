
pub mod domain;
pub mod test_case;
pub mod time;
pub mod wavemaker;

pub mod parameters;
pub mod settings;

pub mod utils;
