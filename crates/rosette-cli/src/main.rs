use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rosette_core::constants::M_SUN;
use rosette_render::{write_csv, SvgPlot};
use rosette_sim::OrbitModel;
use std::f64::consts::PI;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "rosette")]
#[command(about = "Relativistic orbit rosette toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Constants of motion defining the orbit; defaults reproduce the
/// reference run (e = -1.9, l = 2.1, dimensionless)
#[derive(Args)]
struct ModelArgs {
    /// Specific energy parameter
    #[arg(short = 'e', long, default_value_t = -1.9, allow_negative_numbers = true)]
    energy: f64,

    /// Specific angular momentum parameter
    #[arg(short = 'l', long, default_value_t = 2.1, allow_negative_numbers = true)]
    angular_momentum: f64,

    /// Treat the inputs as SI quantities (J/kg and m²/s) and rescale
    /// them to dimensionless form
    #[arg(long)]
    physical: bool,

    /// Reference mass in solar masses (used with --physical)
    #[arg(long, default_value_t = 1.0)]
    mass_solar: f64,
}

impl ModelArgs {
    fn build(&self) -> Result<OrbitModel> {
        let model = if self.physical {
            OrbitModel::from_physical(self.energy, self.angular_momentum, self.mass_solar * M_SUN)?
        } else {
            OrbitModel::new(self.energy, self.angular_momentum)?
        };
        Ok(model)
    }
}

/// Angular range to sweep; default covers 15 full turns
#[derive(Args)]
struct RangeArgs {
    /// Start angle (radians)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,

    /// End angle (radians); default is 30π
    #[arg(long, default_value_t = 30.0 * PI)]
    end: f64,
}

impl RangeArgs {
    fn validated(&self) -> Result<(f64, f64)> {
        if self.end <= self.start {
            anyhow::bail!("end angle ({}) must exceed start angle ({})", self.end, self.start);
        }
        Ok((self.start, self.end))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived orbital parameters
    Params {
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Emit (theta, radius, x, y) samples as CSV
    Sample {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the orbit to an SVG plot
    Plot {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Output file
        #[arg(short, long, default_value = "orbit.svg")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Params { model } => {
            let model = model.build()?;
            print!("{}", model.summary());
        }

        Commands::Sample { model, range, output } => {
            let (start, end) = range.validated()?;
            let samples = model.build()?.sample(start, end);

            match output {
                Some(path) => {
                    write_csv(&samples, std::fs::File::create(&path)?)?;
                    info!(samples = samples.len(), path = %path.display(), "wrote sample table");
                }
                None => write_csv(&samples, std::io::stdout().lock())?,
            }
        }

        Commands::Plot { model, range, output } => {
            let (start, end) = range.validated()?;
            let model = model.build()?;
            print!("{}", model.summary());

            let samples = model.sample(start, end);
            SvgPlot::default().write_to(&samples, &output)?;
            info!(samples = samples.len(), path = %output.display(), "wrote orbit plot");
        }
    }

    Ok(())
}
