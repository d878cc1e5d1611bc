//! Движок бинго: фазы сессии, анимированный розыгрыш, честный выбор шара.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `start_session` – запустить сессию на диапазоне
//!   - `request_draw` – начать розыгрыш очередного шара
//!   - `advance` – прокрутить виртуальное время (кадры анимации, фиксация шара, финиш)
//!   - `reset_draws` / `reset_session` – перезапуск и полный сброс

pub mod errors;
pub mod history;
pub mod selection;
pub mod sequencer;
pub mod session;
pub mod validation;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use errors::{EngineError, NotifyError, RangeViolation};
pub use history::{SessionEvent, SessionEventKind, SessionHistory};
pub use selection::{available_pool, pick_from_pool, sample_visual};
pub use sequencer::{DrawSequencer, TickOutcome};
pub use session::{DrawRequest, GameSession};
pub use validation::{parse_range_input, validate_range};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерное целое из `[low, high]` включительно. Требует `low <= high`.
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Равномерный индекс из `[0, len)`. При `len <= 1` всегда 0.
    fn uniform_index(&mut self, len: usize) -> usize;
}

/// Какое уведомление отправил движок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Notification {
    Tick,
    DrawSuccess,
    GameFinished,
}

/// Хуки уведомлений, которые реализует внешний слой (звук, UI).
///
/// Вызовы синхронные и строго по порядку. Ошибка хука только логируется.
pub trait DrawNotifier {
    /// Очередной кадр анимации.
    fn on_tick(&mut self) -> Result<(), NotifyError>;

    /// Шар зафиксирован и записан.
    fn on_draw_success(&mut self) -> Result<(), NotifyError>;

    /// Игра перешла в FINISHED.
    fn on_game_finished(&mut self) -> Result<(), NotifyError>;
}

/// Отправить уведомление и проглотить ошибку обработчика (с логом).
pub(crate) fn notify<N: DrawNotifier>(notifier: &mut N, kind: Notification) {
    let res = match kind {
        Notification::Tick => notifier.on_tick(),
        Notification::DrawSuccess => notifier.on_draw_success(),
        Notification::GameFinished => notifier.on_game_finished(),
    };

    if let Err(err) = res {
        warn!(hook = ?kind, error = %err, "обработчик уведомления вернул ошибку, продолжаем");
    }
}
