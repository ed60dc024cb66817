use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use quadmark_core::Point;
use quadmark_shape::HighlightMode;

#[derive(Parser, Debug)]
#[command(
    name = "quadmark",
    version,
    about = "Render and configure quadrilateral image annotations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Paint a shape to a PNG file
    Render(RenderArgs),
    /// View or create the style configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Vertices as space separated "x,y" pairs, at most four are kept
    #[arg(long, required = true, num_args = 1, value_delimiter = ' ', allow_hyphen_values = true)]
    pub points: Vec<Point>,

    /// Output image path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Draw on top of this image instead of a transparent surface
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Surface width in pixels (ignored with --image)
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels (ignored with --image)
    #[arg(long)]
    pub height: Option<u32>,

    /// Close the shape, fixing its rotation center
    #[arg(long)]
    pub close: bool,

    /// Rotate the closed shape by this many degrees
    #[arg(long, allow_hyphen_values = true, requires = "close")]
    pub rotate: Option<f64>,

    /// Mark the shape as rotated, which draws the court overlay
    #[arg(long)]
    pub rotated: bool,

    /// Fill the shape's interior
    #[arg(long)]
    pub fill: bool,

    /// Paint with the selection colors
    #[arg(long)]
    pub selected: bool,

    /// Draw this label next to the shape
    #[arg(long)]
    pub label: Option<String>,

    /// Highlight the vertex at this index
    #[arg(long)]
    pub highlight: Option<usize>,

    /// How the highlighted vertex is drawn
    #[arg(long, value_enum, default_value_t = ModeArg::Near)]
    pub mode: ModeArg,

    /// Canvas zoom factor (overrides the config)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Style config file (TOML or JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Print the resolved configuration
    #[arg(long, conflicts_with = "init")]
    pub show: bool,

    /// Write the default configuration
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file with --init
    #[arg(long, requires = "init")]
    pub force: bool,

    /// Config file to use instead of the platform default
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Large round marker, pointer hovering
    Near,
    /// Small square marker, vertex being dragged
    Move,
}

impl From<ModeArg> for HighlightMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Near => HighlightMode::NearVertex,
            ModeArg::Move => HighlightMode::MoveVertex,
        }
    }
}
