//! Конфиг бинго-сессии (TOML).
//!
//! ```toml
//! start = 1
//! end = 75
//! seed = 42            # необязательно
//! sound = true
//! profile = "turbo"    # необязательно, иначе берётся [timing]
//!
//! [timing]
//! animation_ms = 1000
//! tick_interval_ms = 50
//! finish_delay_ms = 1000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DrawRange;
use crate::engine::errors::EngineError;
use crate::engine::validation::validate_range;
use crate::time_ctrl::{DrawTiming, TimingProfile};

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Битый TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Range(#[from] EngineError),

    #[error("Некорректный тайминг: {0}")]
    Timing(&'static str),
}

/// Полный конфиг сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BingoConfig {
    pub start: i64,
    pub end: i64,
    /// Seed для воспроизводимого розыгрыша; `None`: системный RNG.
    pub seed: Option<u64>,
    pub sound: bool,
    /// Если задан, перекрывает `timing`.
    pub profile: Option<TimingProfile>,
    pub timing: DrawTiming,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            start: 1,
            end: 75,
            seed: None,
            sound: true,
            profile: None,
            timing: DrawTiming::standard(),
        }
    }
}

impl BingoConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Итоговые правила тайминга (профиль важнее явной секции).
    pub fn effective_timing(&self) -> DrawTiming {
        match self.profile {
            Some(p) => DrawTiming::from_profile(p),
            None => self.timing,
        }
    }

    /// Проверить конфиг и получить диапазон + тайминг для сессии.
    pub fn validate(&self) -> Result<(DrawRange, DrawTiming), ConfigError> {
        let range = validate_range(self.start, self.end)?;
        let timing = self.effective_timing();
        if !timing.is_valid() {
            return Err(ConfigError::Timing("tick_interval_ms должен быть больше нуля"));
        }
        Ok((range, timing))
    }
}
