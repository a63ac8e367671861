//! Terminal demo: runs the showcase program (or a single named animation)
//! against the simulated strip.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cubelamp::delay::StdDelay;
use cubelamp::drivers::TerminalStrip;
use cubelamp_engine::{AnimationName, CubeLayout, LedDriver, Rgb, color, program};

#[derive(Parser, Debug)]
#[command(name = "cubelamp-demo", about = "Render the cube-lamp showcase in the terminal")]
struct Args {
    /// Number of cubes in the lamp
    #[arg(long, default_value_t = 4)]
    cubes: usize,

    /// Transport brightness (0-255)
    #[arg(long, default_value_t = 50)]
    brightness: u8,

    /// Solid color for the wipe and chase routines, as RRGGBB hex
    #[arg(long, value_parser = parse_color, default_value = "ff0000")]
    color: Rgb,

    /// Single animation to run instead of the full showcase
    #[arg(value_parser = parse_animation)]
    animation: Option<AnimationName>,
}

fn parse_color(s: &str) -> Result<Rgb, String> {
    let digits = s.trim_start_matches('#');
    let packed = u32::from_str_radix(digits, 16).map_err(|e| e.to_string())?;
    if digits.len() != 6 || packed > 0x00FF_FFFF {
        return Err("expected an RRGGBB hex color".into());
    }
    Ok(color::rgb_from_u32(packed))
}

fn parse_animation(s: &str) -> Result<AnimationName, String> {
    AnimationName::parse_from_str(s).ok_or_else(|| {
        let known: Vec<&str> = AnimationName::ALL.iter().map(|n| n.as_str()).collect();
        format!("unknown animation, expected one of: {}", known.join(", "))
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let layout = CubeLayout::new(args.cubes)?;
    let mut strip = TerminalStrip::new(layout.led_count());
    strip.set_brightness(args.brightness);
    let mut delay = StdDelay;

    match args.animation {
        Some(name) => {
            info!("running {}", name.as_str());
            name.to_animation(args.color).run(&mut strip, &mut delay, layout);
        }
        None => {
            info!(cubes = args.cubes, "running the full showcase");
            for animation in program::showcase() {
                info!("running {}", animation.name().as_str());
                animation.run(&mut strip, &mut delay, layout);
            }
        }
    }

    strip.finish();
    Ok(())
}
