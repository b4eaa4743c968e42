#[macro_use]
extern crate clap;

use {
    anyhow::{bail, Result},
    log::{error, info},
    ndarray::Array1,
    rayon::prelude::*,
    simplelog::{Config as LogConfig, LevelFilter, TermLogger, TerminalMode},
    std::{
        fmt::Write as _,
        fs::{create_dir_all, File},
        io::prelude::*,
    },
    wave_tank::{
        parameters::Parameters, settings::Settings, test_case::Dimension, utils::write_r8,
    },
};

#[quit::main]
fn main() {
    let matches = clap_app!(wave_tank =>
        (version: crate_version!())
        (@arg PARAMETERS: -p --parameters +takes_value "Path to file containing simulation parameters, defaults are used if omitted.")
        (@subcommand summary =>
            (about: "Logs the resolved test case, domain, wavemaker and time stepping settings.")
        )
        (@subcommand depth =>
            (about: "Writes the still-water depth at every x-node of the basin to depth.r8.")
        )
        (@subcommand wavemaker =>
            (about: "Writes the wavemaker position, velocity and transverse derivative at every save time to wavemaker.asc.")
        )
    )
    .get_matches();

    TermLogger::init(
        LevelFilter::Debug,
        LogConfig::default(),
        TerminalMode::Mixed,
    )
    .expect("Failed to initialize logger");

    let params = match matches.value_of("PARAMETERS") {
        Some(path) => {
            let params = Parameters::load(path).unwrap_or_else(|e| {
                error!("{:#}", e);
                quit::with_code(1);
            });

            info!(
                "Successfully loaded simulation parameters from \"{}\": \n{:#?}",
                path, params
            );

            params
        }
        None => {
            info!("No parameters file supplied, using defaults");
            Parameters::default()
        }
    };

    run_subcommand(matches.subcommand_name(), &params).unwrap_or_else(|e| {
        error!("Error: \"{:#}\"", e);
        quit::with_code(1);
    });
}

fn run_subcommand(subcmd: Option<&str>, params: &Parameters) -> Result<()> {
    let subcmd = match subcmd {
        Some(s) => s,
        None => bail!("No subcommand selected"),
    };

    let settings = Settings::new(params)?;

    info!("Starting {}", subcmd);

    match subcmd {
        "summary" => {
            info!("{:#?}", settings);
            info!(
                "Save path {}, FWF = {}, {} x {} cells, n_z = {}",
                settings.test_case.save_path().display(),
                settings.test_case.weak_form.flag(),
                settings.domain.cells_x(),
                settings.domain.cells_y(),
                settings.domain.vertical_order
            );
        }
        "depth" => {
            let save_path = settings.test_case.save_path();
            create_dir_all(&save_path)?;

            let xs = settings.domain.nodes_x();
            let mut depth = Array1::zeros(xs.len());
            settings.domain.profile.fill(depth.view_mut(), xs.view());

            write_r8(save_path.join("depth.r8"), 0.0, &depth.to_vec())?;
        }
        "wavemaker" => {
            let save_path = settings.test_case.save_path();
            create_dir_all(&save_path)?;

            let wavemaker = settings.wavemaker(
                &params.wavemaker.motion_file,
                &params.wavemaker.velocity_file,
            )?;

            let y = match settings.test_case.dim {
                Dimension::Two => 0.0,
                Dimension::Three => 0.5 * settings.domain.width,
            };

            let rows = settings
                .time
                .save_times()
                .par_iter()
                .map(|&t| {
                    (
                        t,
                        wavemaker.motion.displacement(0.0, y, t),
                        wavemaker.motion.velocity(0.0, y, t),
                        wavemaker.motion.transverse_derivative(0.0, y, t),
                    )
                })
                .collect::<Vec<_>>();

            let mut monitor = String::new();
            for (t, r, r_t, r_y) in rows {
                writeln!(monitor, "{:12.6} {:16.8e} {:16.8e} {:16.8e}", t, r, r_t, r_y)?;
            }

            let mut f = File::create(save_path.join("wavemaker.asc"))?;
            f.write_all(monitor.as_bytes())?;
        }
        _ => {
            // Should be unreachable due to clap catching this error
            bail!("Unrecognized subcommand");
        }
    }

    info!("Finished {}", subcmd);

    Ok(())
}
