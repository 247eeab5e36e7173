use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use gesture_snake::game::GameConfig;
use gesture_snake::modes::{FrameInput, GestureMode, PlayMode};

#[derive(Parser)]
#[command(name = "gesture_snake")]
#[command(version, about = "Snake game steered by hand gestures")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Landmark frame stream for gesture mode: a file path, or '-' for stdin
    #[arg(long, default_value = "-")]
    frames: String,

    /// Canvas width in pixels
    #[arg(long, default_value = "600")]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value = "400")]
    height: u32,

    /// Cell size in pixels
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..))]
    cell_size: u32,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "150", value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
    /// Steer the snake with hand gestures from a landmark stream
    Gesture,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns stderr, so diagnostics go to stdout; enable them with
    // RUST_LOG and redirect stdout to a file
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stdout)
        .init();

    // Create game configuration from CLI arguments
    let mut config = GameConfig::new(cli.width, cli.height, cli.cell_size);
    config.tick_interval_ms = cli.tick_ms;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let mut play_mode = PlayMode::new(config);
            play_mode.run().await?;
        }
        Mode::Gesture => {
            let input = if cli.frames == "-" {
                FrameInput::Stdin
            } else {
                FrameInput::Path(PathBuf::from(&cli.frames))
            };
            let mut gesture_mode = GestureMode::new(config, input);
            gesture_mode.run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_parse() {
        let cli = Cli::try_parse_from(["gesture_snake"]).unwrap();
        assert_eq!(cli.tick_ms, 150);
        assert_eq!(cli.cell_size, 20);
        assert_eq!(cli.frames, "-");
    }

    // The tick interval feeds tokio::time::interval, which requires a
    // non-zero period
    #[test]
    fn test_zero_tick_interval_rejected() {
        assert!(Cli::try_parse_from(["gesture_snake", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        assert!(Cli::try_parse_from(["gesture_snake", "--cell-size", "0"]).is_err());
    }
}
