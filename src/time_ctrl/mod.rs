// src/time_ctrl/mod.rs
//! Вспомогательный модуль контроля времени розыгрыша.
//!
//! Здесь собираем:
//! - правила (`DrawTiming`, `TimingProfile`);
//! - планировщик таймеров на виртуальных часах (`Scheduler`, `TimerId`).

pub mod scheduler;
pub mod timing;

pub use scheduler::{FiredTimer, Scheduler, TimerId};
pub use timing::{DrawTiming, TimingProfile};
