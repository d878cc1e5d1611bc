//! Инфраструктурный слой вокруг движка бинго:
//! - RNG-реализации для движка;
//! - реализации хуков уведомлений (запись, звуковые тоны);
//! - конфиг (TOML) и логирование;
//! - живые часы на tokio для хоста.

pub mod clock;
pub mod config;
pub mod feedback;
pub mod logging;
pub mod notify;
pub mod rng;

pub use clock::{drive_until_idle, pump, WallClock};
pub use config::{BingoConfig, ConfigError};
pub use feedback::{LogToneSink, ToneNotifier, ToneProfile, ToneSink};
pub use logging::init_tracing;
pub use notify::{NoopNotifier, RecordingNotifier};
pub use rng::*;
