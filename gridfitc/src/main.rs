#![warn(clippy::all)]

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use gridfit::AspectRatio;
use gridfit::Dimensions;
use gridfit::GridLayout;
use gridfit::GridOptions;
use gridfit::LastRowAlignment;
use gridfit::LayoutParams;
use gridfit::compute_layout;

#[derive(Args)]
struct LayoutArgs {
    /// Container width in pixels
    #[clap(long)]
    width: f64,

    /// Container height in pixels
    #[clap(long)]
    height: f64,

    /// Number of tiles to place
    #[clap(long)]
    count: usize,

    /// Tile aspect ratio in W:H form
    #[clap(long, default_value = "16:9")]
    aspect_ratio: AspectRatio,

    /// Pixel spacing between adjacent tiles
    #[clap(long, default_value_t = 0.0)]
    gap: f64,

    /// Placement of an incomplete final row
    #[clap(long, value_enum, default_value = "start")]
    last_row_alignment: LastRowAlignment,

    /// Print the output as YAML instead of JSON
    #[clap(long)]
    yaml: bool,
}

impl LayoutArgs {
    fn params(&self) -> LayoutParams {
        LayoutParams {
            container: Dimensions {
                width: self.width,
                height: self.height,
            },
            count: self.count,
            aspect_ratio: self.aspect_ratio,
            gap: self.gap,
            options: GridOptions {
                last_row_alignment: self.last_row_alignment,
            },
        }
    }
}

#[derive(Parser)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(clap::Subcommand)]
enum SubCommand {
    /// Compute the optimal tile grid for a container and print it
    Solve(LayoutArgs),
    /// Compute the optimal tile grid and print every tile's rectangle
    Positions(LayoutArgs),
    /// Compute a layout from a JSON layout-params document
    Compute(Compute),
    /// Generate a JSON schema of the layout-params document
    #[cfg(feature = "schemars")]
    Schema,
}

#[derive(Args)]
struct Compute {
    /// Path to a JSON file containing the layout params
    path: PathBuf,

    /// Print the output as YAML instead of JSON
    #[clap(long)]
    yaml: bool,
}

fn print_output<T>(value: &T, yaml: bool) -> Result<()>
where
    T: serde::Serialize,
{
    if yaml {
        println!("{}", serde_yaml::to_string(value)?);
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }

    Ok(())
}

fn solve(params: &LayoutParams) -> Result<GridLayout> {
    let layout = compute_layout(params)?;

    if layout.is_degenerate() {
        tracing::warn!("inputs produce a degenerate layout with zero-size tiles");
    }

    Ok(layout)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts: Opts = Opts::parse();

    match opts.subcmd {
        SubCommand::Solve(args) => {
            let layout = solve(&args.params())?;
            print_output(&layout, args.yaml)?;
        }
        SubCommand::Positions(args) => {
            let layout = solve(&args.params())?;
            print_output(&layout.rects(), args.yaml)?;
        }
        SubCommand::Compute(args) => {
            let file = File::open(&args.path)?;
            let params: LayoutParams = serde_json::from_reader(BufReader::new(file))?;
            let layout = solve(&params)?;
            print_output(&layout, args.yaml)?;
        }
        #[cfg(feature = "schemars")]
        SubCommand::Schema => {
            let schema = schemars::schema_for!(LayoutParams);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}
