// src/time_ctrl/timing.rs
//! Конфигурация тайминга розыгрыша.
//!
//! Здесь описываем только "правила", без состояния и без привязки к конкретной сессии.

use serde::{Deserialize, Serialize};

/// Профиль тайминга.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimingProfile {
    /// Обычный зал: 1 сек анимации, кадр каждые 50 мс, 1 сек на последний шар.
    Standard,
    /// Быстрый прогон (демо, dev-CLI).
    Turbo,
}

/// Правила тайминга одного розыгрыша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DrawTiming {
    /// Сколько миллисекунд крутится анимация перед тем, как шар станет финальным.
    pub animation_ms: u64,
    /// Интервал между кадрами анимации.
    pub tick_interval_ms: u64,
    /// Сколько последний шар висит на экране до перехода в FINISHED.
    pub finish_delay_ms: u64,
}

impl DrawTiming {
    /// Строгий конструктор.
    pub const fn new(animation_ms: u64, tick_interval_ms: u64, finish_delay_ms: u64) -> Self {
        Self {
            animation_ms,
            tick_interval_ms,
            finish_delay_ms,
        }
    }

    /// Стандартный профиль: 1000 / 50 / 1000 мс.
    pub const fn standard() -> Self {
        Self::new(1000, 50, 1000)
    }

    pub const fn turbo() -> Self {
        Self::new(300, 30, 300)
    }

    /// Получить правила по профилю.
    pub const fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Standard => Self::standard(),
            TimingProfile::Turbo => Self::turbo(),
        }
    }

    /// Сколько кадров увидит зритель за один розыгрыш
    /// (последний кадр совпадает с моментом фиксации шара).
    pub fn ticks_per_draw(&self) -> u64 {
        if self.tick_interval_ms == 0 {
            return 0;
        }
        self.animation_ms.div_ceil(self.tick_interval_ms).max(1)
    }

    /// Правила пригодны для планировщика: нулевой интервал кадров недопустим.
    pub fn is_valid(&self) -> bool {
        self.tick_interval_ms > 0
    }
}

impl Default for DrawTiming {
    fn default() -> Self {
        Self::standard()
    }
}
