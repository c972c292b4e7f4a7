use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};
use trihex::{
    grid_to_svg, timed, Action, GameConfig, GridRenderer, RenderConfig,
    Session,
};

/// CLI for the trihex puzzle core: create a session, replay a scripted
/// sequence of inputs against it, and export the resulting state.
#[derive(Debug, StructOpt)]
#[structopt(name = "trihex")]
struct Opt {
    /// Path to a config file that defines the session to be created.
    /// Supported formats: JSON, TOML. If not given, a default config (with a
    /// random seed) is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, the final session state will be saved to this directory. The
    /// exact files that appear in the directory are defined by the output
    /// formats. See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the session in. Supported formats:
    ///
    /// cfg - The full config object used for the session, in TOML format
    ///
    /// json - JSON representation of the full session state, which can be
    ///   deserialized later to recover the session
    ///
    /// svg - 2D rendering of the final grid and cursor
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// Simulated frame time, in seconds, used to play out rotations between
    /// inputs
    #[structopt(long, default_value = "0.016")]
    timestep: f32,

    /// Hex size (center-to-vertex distance, in screen units) for rendered
    /// output formats, such as SVG
    #[structopt(long, default_value = "16")]
    hex_size: f64,

    /// The logging level to use while running. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    /// The inputs to replay against the session, in order. Supported actions:
    /// move_up, move_down, move_left, move_right, rotate. Each rotation is
    /// played to completion before the next input applies
    actions: Vec<Action>,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the session's full config in a human-readable file
    Cfg,
    /// Export the session in a serialized JSON format, which can be
    /// deserialized later to recover the session
    Json,
    /// Render the final grid and cursor as a 2D SVG
    Svg,
    /* If you change this, make sure to update the help text for
     * `--output-formats`! */
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<GameConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Generate an output form of the session in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    config: &GameConfig,
    session: &Session,
    renderer: &GridRenderer,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        config: &GameConfig,
        session: &Session,
        renderer: &GridRenderer,
    ) -> Vec<u8> {
        match output_format {
            OutputFormat::Cfg => {
                // Serialize just the session config via toml
                toml::to_string_pretty(config)
                    // Panics only if config format isn't serializable (a bug)
                    .expect("error serializing config")
                    .into_bytes()
            }
            OutputFormat::Json => {
                // Serialize the entire session via JSON
                session.to_json().into()
            }
            OutputFormat::Svg => {
                grid_to_svg(session.grid(), session.cursor(), renderer)
                    .to_string()
                    .into_bytes()
            }
        }
    }

    let output_file_path = output_dir
        .join("session")
        .with_extension(output_format.file_ext());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes =
                generate_bytes(output_format, config, session, renderer);
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    if opt.timestep <= 0.0 {
        bail!("timestep must be positive, got {}", opt.timestep);
    }

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GameConfig::default(),
    };
    let mut session = Session::new(&config)?;

    // Replay the scripted inputs, playing each rotation out to completion
    // before the next input lands
    for &action in &opt.actions {
        if !session.apply(action) {
            info!("Input {} had no effect", action);
        }
        while session.grid().has_rotation() {
            session.tick(opt.timestep);
        }
    }

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(&output_dir)?;

        let renderer = GridRenderer::new(RenderConfig {
            hex_size: opt.hex_size,
            ..Default::default()
        })
        .context("invalid render config")?;
        for output_format in opt.output_formats {
            gen_output(&output_dir, output_format, &config, &session, &renderer)?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
