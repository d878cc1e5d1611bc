//! Живые часы для сессии: tokio-интервал кормит `GameSession::advance`
//! реально прошедшими миллисекундами.

use std::time::Duration;

use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::engine::{DrawNotifier, EngineError, GameSession, RandomSource};

/// Считает прошедшие целые миллисекунды между вызовами.
/// Дробный остаток не теряется, он уходит в следующий вызов.
#[derive(Clone, Debug)]
pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn elapsed_ms(&mut self) -> u64 {
        let whole = self.last.elapsed().as_millis() as u64;
        self.last += Duration::from_millis(whole);
        whole
    }
}

/// Продвинуть сессию на реально прошедшее время.
pub fn pump<R: RandomSource, N: DrawNotifier>(
    session: &mut GameSession<R, N>,
    clock: &mut WallClock,
) -> Result<(), EngineError> {
    let delta = clock.elapsed_ms();
    if delta == 0 {
        return Ok(());
    }
    session.advance(delta)
}

/// Крутить сессию в реальном времени, пока не закончатся анимация и отложенный финиш.
pub async fn drive_until_idle<R: RandomSource, N: DrawNotifier>(
    session: &mut GameSession<R, N>,
    frame: Duration,
) -> Result<(), EngineError> {
    let mut clock = WallClock::start();
    let mut ticker = interval(frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while session.is_animating() || session.is_settling() {
        ticker.tick().await;
        pump(session, &mut clock)?;
    }
    Ok(())
}
