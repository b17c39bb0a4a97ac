//! Playback configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and sizing knobs for playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between two ticks, in milliseconds.
    #[serde(default = "default_tick_delay_ms")]
    pub tick_delay_ms: u64,

    /// Edge length of one cell in renderer units (pixels for raster surfaces).
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
}

fn default_tick_delay_ms() -> u64 {
    50
}

fn default_cell_size() -> u32 {
    5
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_delay_ms: default_tick_delay_ms(),
            cell_size: default_cell_size(),
        }
    }
}

impl PlaybackConfig {
    /// Back-to-back ticks with no delay.
    pub fn instant() -> Self {
        Self {
            tick_delay_ms: 0,
            ..Default::default()
        }
    }

    pub fn with_tick_delay(mut self, delay: Duration) -> Self {
        self.tick_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}
