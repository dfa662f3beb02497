use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use nfcsim::constants::{DEFAULT_BIT_RATE, DEFAULT_NB_POINTS};
use nfcsim::{create_signal, fft_compute, standard_params, Direction, Scatter, SignalParameters, Standard};

#[derive(Parser)]
#[command(name = "nfcsim")]
#[command(about = "ISO/IEC 14443 Type A/B physical-layer RF waveform simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Payload bytes as hex, e.g. 4D or 0x4DAB.
    #[arg(long, global = true, default_value = "4D")]
    payload: String,

    /// Bit rate in bit/s.
    #[arg(long, global = true, default_value_t = DEFAULT_BIT_RATE)]
    bit_rate: f64,

    /// Uniform noise amplitude scale, 0.0..=1.0.
    #[arg(long, global = true, default_value_t = 0.0)]
    noise: f64,

    /// Output sample count (should be a power of two to FFT).
    #[arg(long, global = true, default_value_t = DEFAULT_NB_POINTS)]
    points: usize,

    /// Also run the FFT analyzer on each generated series.
    #[arg(long, global = true)]
    fft: bool,

    /// Directory CSVs are written under (requires the `csv` feature).
    #[arg(long, global = true, default_value = "results")]
    out_dir: PathBuf,

    /// Write the resolved SignalParameters as JSON to this path instead of
    /// (or in addition to) running the pipeline on them. Ignored by
    /// `from-params`, which reads parameters rather than writing them.
    #[arg(long, global = true)]
    dump_params: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize one standard preset signal.
    Standard {
        #[arg(value_enum)]
        standard: StandardArg,
        #[arg(value_enum)]
        direction: DirectionArg,
    },
    /// Synthesize all four standard preset signals.
    All,
    /// Run the pipeline on a `SignalParameters` JSON file (see
    /// `--dump-params`), bypassing the standard-preset table entirely.
    FromParams {
        /// Path to a JSON-serialized `SignalParameters` value.
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StandardArg {
    NfcA,
    NfcB,
}

impl From<StandardArg> for Standard {
    fn from(s: StandardArg) -> Standard {
        match s {
            StandardArg::NfcA => Standard::NfcA,
            StandardArg::NfcB => Standard::NfcB,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Pcd,
    Picc,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Direction {
        match d {
            DirectionArg::Pcd => Direction::Pcd,
            DirectionArg::Picc => Direction::Picc,
        }
    }
}

fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let s = s.trim().trim_start_matches("0x").trim_start_matches("0X");
    if s.is_empty() || s.len() % 2 != 0 {
        return Err(format!("hex payload must be a non-empty even-length string, got {:?}", s));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| format!("invalid hex at {}: {}", i, e)))
        .collect()
}

/// Writes `params` as pretty-printed JSON to `path`, the `--dump-params`
/// counterpart to the `from-params` subcommand's `serde_json::from_str`.
fn dump_params(path: &PathBuf, params: &SignalParameters) -> Result<(), String> {
    let json = serde_json::to_string_pretty(params).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    info!("dumped resolved parameters to {}", path.display());
    Ok(())
}

/// Runs the pipeline on already-resolved `params` and emits the FFT/CSV
/// output shared by every subcommand.
fn run_with_params(cli: &Cli, label: &str, params: &SignalParameters) -> Result<(), String> {
    if let Some(path) = &cli.dump_params {
        dump_params(path, params)?;
    }

    let series = create_signal(params, None).map_err(|e| e.to_string())?;

    let spectrum: Option<Scatter> = if cli.fft {
        Some(fft_compute(&series).map_err(|e| e.to_string())?)
    } else {
        None
    };

    #[cfg(feature = "csv")]
    {
        std::fs::create_dir_all(&cli.out_dir).map_err(|e| e.to_string())?;
        let series = series.with_names("t_ns", "amplitude");
        let path = cli.out_dir.join(format!("{}.csv", label));
        match &spectrum {
            Some(spec) => {
                let spec = spec.clone().with_names("freq_hz", "magnitude");
                nfcsim::csvio::write_series(&path, &[&series, &spec]).map_err(|e| e.to_string())?;
            }
            None => {
                nfcsim::csvio::write_series(&path, &[&series]).map_err(|e| e.to_string())?;
            }
        }
        println!("wrote {}", path.display());
    }
    #[cfg(not(feature = "csv"))]
    {
        let _ = &spectrum;
        println!("{}: {} samples (build with --features csv to export)", label, series.len());
    }

    Ok(())
}

fn run_standard(cli: &Cli, standard: Standard, direction: Direction) -> Result<(), String> {
    let payload = parse_hex(&cli.payload)?;
    let label = format!("{:?}_{:?}", standard, direction);
    let params = standard_params(&payload, standard, direction, cli.bit_rate, cli.noise, cli.points);
    run_with_params(cli, &label, &params)
}

fn run_from_params(cli: &Cli, path: &PathBuf) -> Result<(), String> {
    let json = std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let params: SignalParameters = serde_json::from_str(&json).map_err(|e| e.to_string())?;
    let label = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("from_params")
        .to_string();
    run_with_params(cli, &label, &params)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Standard { standard, direction } => run_standard(&cli, (*standard).into(), (*direction).into()),
        Command::All => {
            let combos = [
                (Standard::NfcA, Direction::Pcd),
                (Standard::NfcA, Direction::Picc),
                (Standard::NfcB, Direction::Pcd),
                (Standard::NfcB, Direction::Picc),
            ];
            combos
                .into_iter()
                .try_for_each(|(s, d)| run_standard(&cli, s, d))
        }
        Command::FromParams { path } => run_from_params(&cli, path),
    };

    if let Err(msg) = result {
        error!("{}", msg);
        eprintln!("nfcsim: {}", msg);
        process::exit(1);
    }
}
