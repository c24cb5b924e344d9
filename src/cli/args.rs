use clap::Parser;
use std::path::PathBuf;

use imglogic::LogicalOperation;

#[derive(Parser)]
#[command(name = "imglogic", version, about = "IMGLOGIC CLI")]
pub struct CliArgs {
    /// First input image (.png, .jpg or .jpeg)
    #[arg(short = 'a', long)]
    pub first: Option<PathBuf>,

    /// Second input image (.png, .jpg or .jpeg)
    #[arg(short = 'b', long)]
    pub second: Option<PathBuf>,

    /// Logical operation (and, or). Overrides the value from --config
    #[arg(short = 'p', long, value_enum)]
    pub operation: Option<LogicalOperation>,

    /// Output PNG path
    #[arg(short, long, default_value = imglogic::RESULT_FILE_NAME)]
    pub output: PathBuf,

    /// JSON file with combine parameters, e.g. {"operation": "or"}
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print size and type information for both inputs as JSON and exit
    #[arg(long, default_value_t = false)]
    pub info: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
