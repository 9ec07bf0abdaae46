// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "twister")]
#[command(about = "Animated twist-deformation demo", long_about = None)]
pub struct Cli {
    /// Disable UI overlay elements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Torus ring radius (center of the torus to the middle of the tube)
    #[arg(long, default_value_t = 1.5)]
    pub ring_radius: f32,

    /// Torus pipe radius (radius of the tube itself)
    #[arg(long, default_value_t = 0.5)]
    pub pipe_radius: f32,

    /// Peak twist factor at the start of each forward sweep
    #[arg(long, default_value_t = 5.0)]
    pub twist: f32,

    /// Seconds for one forward sweep; the autoreversed cycle is twice this
    #[arg(long, default_value_t = 2.0)]
    pub period: f32,
}
