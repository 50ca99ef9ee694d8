//! Settings for the slicing demo.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::DemoError;
use crate::rotation::PLANE_SWEEP_STEP;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_FRAMES: usize = 60;
pub const DEFAULT_CAMERA_DISTANCE: f32 = 3.0;
pub const DEFAULT_OUTPUT_DIR: &str = "frames";
/// Largest accepted frame width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Command-line arguments of the demo binary.
#[derive(Parser, Debug)]
#[command(name = "trislice")]
#[command(about = "Sweep a clip plane through a mesh and write every capped slice as a PNG")]
pub struct DemoArgs {
    /// Number of frames to render
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Frame size in pixels, e.g. 640x480
    #[arg(long, value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Plane rotation per frame, in radians
    #[arg(long, default_value_t = PLANE_SWEEP_STEP, allow_negative_numbers = true)]
    pub step: f32,

    /// OBJ mesh to slice instead of the unit cube
    #[arg(long)]
    pub obj: Option<PathBuf>,

    /// Directory the frames are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out: PathBuf,

    /// Camera distance, in multiples of the mesh radius
    #[arg(long, default_value_t = DEFAULT_CAMERA_DISTANCE)]
    pub camera_distance: f32,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let dimension = |d: &str| {
        d.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid dimension '{d}': {e}"))
    };
    Ok((dimension(w)?, dimension(h)?))
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub frames: usize,
    /// Plane rotation per frame, in radians.
    pub step: f32,
    /// Mesh to slice instead of the unit cube.
    pub obj: Option<PathBuf>,
    /// Directory the PNG frames are written to.
    pub out: PathBuf,
    pub camera_distance: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frames: DEFAULT_FRAMES,
            step: PLANE_SWEEP_STEP,
            obj: None,
            out: PathBuf::from(DEFAULT_OUTPUT_DIR),
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl DemoConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn with_obj(mut self, path: impl Into<PathBuf>) -> Self {
        self.obj = Some(path.into());
        self
    }

    pub fn with_out(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out = dir.into();
        self
    }

    pub fn with_camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = distance;
        self
    }

    /// Parses command-line arguments, the first being the program name, and validates
    /// the result.
    ///
    /// Help and version requests come back as [`DemoError::Args`]; call
    /// [`clap::Error::exit`] on it to print them.
    pub fn from_args<I, T>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let config = Self::from(DemoArgs::try_parse_from(args)?);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.width == 0 || self.height == 0 {
            return Err(DemoError::Config(format!(
                "frame size {}x{} is empty",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(DemoError::Config(format!(
                "frame size {}x{} exceeds {MAX_DIMENSION} pixels per side",
                self.width, self.height
            )));
        }
        if !self.step.is_finite() {
            return Err(DemoError::Config(format!("step {} is not finite", self.step)));
        }
        Ok(())
    }
}

impl From<DemoArgs> for DemoConfig {
    fn from(args: DemoArgs) -> Self {
        let (width, height) = args.size.unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));
        Self {
            width,
            height,
            frames: args.frames,
            step: args.step,
            obj: args.obj,
            out: args.out,
            camera_distance: args.camera_distance,
        }
    }
}
