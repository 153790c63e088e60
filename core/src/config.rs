//! Run configuration accepted when a world is constructed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_WIDTH: u32 = 100;
const DEFAULT_HEIGHT: u32 = 100;
const DEFAULT_DEAD_BIAS: f64 = 0.5;
const DEFAULT_REFRESH_INTERVAL_MS: u64 = 100;
const DEFAULT_SEED: u64 = 0x6c69_6665_6772_6964;

/// Errors raised while validating or parsing a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One of the grid dimensions was zero.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
    /// The grid area does not fit in the platform's index type.
    #[error("a {width}x{height} grid cannot be addressed on this platform")]
    AreaOverflow {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
    /// The dead bias was not a probability.
    #[error("dead bias {0} is outside the range 0.0..=1.0")]
    DeadBiasOutOfRange(f64),
    /// The TOML document could not be parsed.
    #[error("could not parse simulation config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be rendered as TOML.
    #[error("could not render simulation config: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Validated, non-empty grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// Validates the provided dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }

        let area = u64::from(width) * u64::from(height);
        if usize::try_from(area).is_err() {
            return Err(ConfigError::AreaOverflow { width, height });
        }

        Ok(Self { width, height })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, `width * height`.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reports whether the signed coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, column: i64, row: i64) -> bool {
        column >= 0 && row >= 0 && column < self.width as i64 && row < self.height as i64
    }
}

/// Probability in `0.0..=1.0` that a freshly generated cell starts dead.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DeadBias(f64);

impl DeadBias {
    /// Every generated cell starts dead.
    pub const ALL_DEAD: Self = Self(1.0);
    /// Every generated cell starts alive.
    pub const ALL_ALIVE: Self = Self(0.0);
    /// Cells are equally likely to start alive or dead.
    pub const EVEN: Self = Self(DEFAULT_DEAD_BIAS);

    /// Validates the provided probability. `NaN` is rejected.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::DeadBiasOutOfRange(value))
        }
    }

    /// Raw probability value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Probability that a generated cell starts alive.
    #[must_use]
    pub fn alive_probability(&self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for DeadBias {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeadBias> for f64 {
    fn from(value: DeadBias) -> Self {
        value.0
    }
}

/// Configuration snapshot owned by a single simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSimulationConfig", into = "RawSimulationConfig")]
pub struct SimulationConfig {
    size: GridSize,
    dead_bias: DeadBias,
    refresh_interval: Duration,
    seed: u64,
}

impl SimulationConfig {
    /// Creates a configuration with the default refresh interval and seed.
    #[must_use]
    pub fn new(size: GridSize, dead_bias: DeadBias) -> Self {
        Self {
            size,
            dead_bias,
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
            seed: DEFAULT_SEED,
        }
    }

    /// Replaces the interval between automatic generations.
    #[must_use]
    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    /// Replaces the seed of the random stream used to generate grids.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parses a TOML document. Missing keys take their default values.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawSimulationConfig = toml::from_str(contents)?;
        Self::try_from(raw)
    }

    /// Renders the configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let raw = RawSimulationConfig::from(self.clone());
        Ok(toml::to_string(&raw)?)
    }

    /// Grid dimensions.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Dead bias used for the initial grid.
    #[must_use]
    pub const fn dead_bias(&self) -> DeadBias {
        self.dead_bias
    }

    /// Interval between automatic generations while running.
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Seed of the random stream used to generate grids.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(
            GridSize {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            },
            DeadBias::EVEN,
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSimulationConfig {
    width: u32,
    height: u32,
    dead_bias: f64,
    refresh_interval_ms: u64,
    seed: u64,
}

impl Default for RawSimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            dead_bias: DEFAULT_DEAD_BIAS,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl TryFrom<RawSimulationConfig> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSimulationConfig) -> Result<Self, Self::Error> {
        let size = GridSize::new(raw.width, raw.height)?;
        let dead_bias = DeadBias::new(raw.dead_bias)?;
        Ok(Self::new(size, dead_bias)
            .with_refresh_interval(Duration::from_millis(raw.refresh_interval_ms))
            .with_seed(raw.seed))
    }
}

impl From<SimulationConfig> for RawSimulationConfig {
    fn from(config: SimulationConfig) -> Self {
        Self {
            width: config.size.width(),
            height: config.size.height(),
            dead_bias: config.dead_bias.get(),
            refresh_interval_ms: u64::try_from(config.refresh_interval.as_millis())
                .unwrap_or(u64::MAX),
            seed: config.seed,
        }
    }
}
