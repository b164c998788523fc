use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spritecrop", version, about = "spritecrop CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Composite each category, find its bounding box and write the coordinate document
    Analyze(CommonArgs),

    /// Crop every image of each recorded category to the stored bounding box
    Trim(CommonArgs),

    /// Crop every image to its own tight bounding box
    IndividualTrim(CommonArgs),

    /// Print the effective configuration as JSON
    ShowConfig(CommonArgs),
}

#[derive(Args, Clone, Default)]
pub struct CommonArgs {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input root containing one subdirectory per category
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Output root; analyze/, trim/ and individual_trim/ are created under it
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Coordinate document path (defaults to <output>/analyze/coordinates.json)
    #[arg(long)]
    pub coordinates: Option<PathBuf>,

    /// Category directory name; repeat to process several. For `trim`, limits
    /// which recorded categories are cropped
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Widen each analyzed box so its left and right margins are equal
    #[arg(long, default_value_t = false)]
    pub center_horizontally: bool,
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Analyze(args)
            | Command::Trim(args)
            | Command::IndividualTrim(args)
            | Command::ShowConfig(args) => args,
        }
    }
}
