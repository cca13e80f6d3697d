// args.rs - Command-line parsing for img2swarm

use pixel_swarm::config::{DEFAULT_GAP, DEFAULT_RADIUS};
use pixel_swarm::error::SwarmError;
use std::path::PathBuf;
use std::str::FromStr;

pub const USAGE: &str = "<image> [--width N] [--height N] [--gap N] [--radius F] \
[--frames N] [--scatter-at N] [--every N] [--seed N] [--pointer orbit|none] [--out DIR]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    Orbit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub image: PathBuf,
    pub width: u32,
    pub height: u32,
    pub gap: u32,
    pub radius: f32,
    pub frames: u32,
    pub scatter_at: Option<u32>,
    pub every: u32,
    pub seed: Option<u64>,
    pub pointer: PointerMode,
    pub out: PathBuf,
}

impl Args {
    fn defaults(image: PathBuf) -> Self {
        Self {
            image,
            width: 800,
            height: 600,
            gap: DEFAULT_GAP,
            radius: DEFAULT_RADIUS,
            frames: 240,
            scatter_at: None,
            every: 30,
            seed: None,
            pointer: PointerMode::Orbit,
            out: PathBuf::from("frames"),
        }
    }
}

/// Parse everything after the program name
pub fn parse(args: &[String]) -> Result<Args, SwarmError> {
    let Some(image) = args.first().filter(|a| !a.starts_with("--")) else {
        return Err(SwarmError::Args(format!("missing image path\nusage: {}", USAGE)));
    };
    let mut out = Args::defaults(PathBuf::from(image));

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| SwarmError::Args(format!("{} needs a value", flag)))?;

        match flag {
            "--width" => out.width = number(flag, value)?,
            "--height" => out.height = number(flag, value)?,
            "--gap" => out.gap = number(flag, value)?,
            "--radius" => out.radius = number(flag, value)?,
            "--frames" => out.frames = number(flag, value)?,
            "--scatter-at" => out.scatter_at = Some(number(flag, value)?),
            "--every" => out.every = number::<u32>(flag, value)?.max(1),
            "--seed" => out.seed = Some(number(flag, value)?),
            "--out" => out.out = PathBuf::from(value),
            "--pointer" => {
                out.pointer = match value.as_str() {
                    "orbit" => PointerMode::Orbit,
                    "none" => PointerMode::None,
                    other => {
                        return Err(SwarmError::Args(format!("unknown pointer mode {}", other)));
                    }
                }
            }
            _ => return Err(SwarmError::Args(format!("unknown flag {}\nusage: {}", flag, USAGE))),
        }
        i += 2;
    }

    Ok(out)
}

fn number<T: FromStr>(flag: &str, value: &str) -> Result<T, SwarmError> {
    value
        .parse()
        .map_err(|_| SwarmError::Args(format!("{} expects a number, got {:?}", flag, value)))
}
