use tracing::{debug, trace};

use crate::domain::{BallNumber, DrawRange, DrawnSet};
use crate::engine::errors::EngineError;
use crate::engine::selection::{pick_from_pool, sample_visual};
use crate::engine::{notify, DrawNotifier, Notification, RandomSource};
use crate::time_ctrl::{DrawTiming, Scheduler, TimerId};

/// Состояние секвенсора.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    /// Крутится анимация, `ticker` это повторяющийся таймер кадров.
    Animating { ticker: TimerId, started_at_ms: u64 },
}

/// Что произошло на очередном кадре.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Показан косметический кадр, розыгрыш продолжается.
    Frame(BallNumber),
    /// Время вышло, шар выбран. Секвенсор снова `Idle`.
    Drawn(BallNumber),
    /// Кадр пришёл, когда розыгрыша нет (таймер уже отменён).
    Ignored,
}

/// Секвенсор одного розыгрыша: кадры анимации по таймеру,
/// затем честный выбор из пула.
///
/// Диапазон и вытянутые номера он не хранит: сессия отдаёт их
/// по ссылке на каждый кадр, на время этого вызова.
#[derive(Clone, Debug)]
pub struct DrawSequencer {
    timing: DrawTiming,
    state: SequencerState,
    /// Текущий кадр анимации (после фиксации это сам выигравший шар).
    frame: Option<BallNumber>,
    ticks: u32,
}

impl DrawSequencer {
    pub fn new(timing: DrawTiming) -> Self {
        Self {
            timing,
            state: SequencerState::Idle,
            frame: None,
            ticks: 0,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, SequencerState::Animating { .. })
    }

    pub fn animation_value(&self) -> Option<BallNumber> {
        self.frame
    }

    /// Сколько кадров показано в текущем (или последнем) розыгрыше.
    pub fn ticks_emitted(&self) -> u32 {
        self.ticks
    }

    /// Запустить анимацию: ставим повторяющийся таймер кадров.
    pub fn begin<E: Clone>(
        &mut self,
        scheduler: &mut Scheduler<E>,
        tick_event: E,
    ) -> Result<(), EngineError> {
        if self.is_animating() {
            return Err(EngineError::ConcurrentDraw);
        }

        let ticker = scheduler.schedule_every(self.timing.tick_interval_ms, tick_event);
        self.state = SequencerState::Animating {
            ticker,
            started_at_ms: scheduler.now_ms(),
        };
        self.ticks = 0;

        debug!(
            ticker = ticker.raw(),
            animation_ms = self.timing.animation_ms,
            tick_ms = self.timing.tick_interval_ms,
            "анимация розыгрыша запущена"
        );
        Ok(())
    }

    /// Обработать срабатывание таймера кадров.
    ///
    /// Кадр публикуется всегда; когда показано кадров на `animation_ms`
    /// (или планировщик уже снял ticker), ticker снимается и выбирается
    /// шар из пула `range \ drawn`.
    pub fn on_tick<E, R, N>(
        &mut self,
        scheduler: &mut Scheduler<E>,
        range: &DrawRange,
        drawn: &DrawnSet,
        rng: &mut R,
        notifier: &mut N,
    ) -> Result<TickOutcome, EngineError>
    where
        E: Clone,
        R: RandomSource,
        N: DrawNotifier,
    {
        let SequencerState::Animating {
            ticker,
            started_at_ms,
        } = self.state
        else {
            return Ok(TickOutcome::Ignored);
        };

        let visual = sample_visual(range, rng);
        self.frame = Some(visual);
        self.ticks += 1;
        trace!(frame = visual, tick = self.ticks, "кадр анимации");
        notify(notifier, Notification::Tick);

        // Длительность по кадрам: у края виртуального времени часы стоят.
        let shown_ms = u64::from(self.ticks).saturating_mul(self.timing.tick_interval_ms.max(1));
        let ticker_alive = scheduler.is_pending(ticker);
        if shown_ms < self.timing.animation_ms && ticker_alive {
            return Ok(TickOutcome::Frame(visual));
        }
        let elapsed = scheduler.now_ms().saturating_sub(started_at_ms);

        scheduler.cancel(ticker);
        self.state = SequencerState::Idle;

        let winner = pick_from_pool(range, drawn, rng)?;
        self.frame = Some(winner);

        debug!(winner, ticks = self.ticks, elapsed_ms = elapsed, "шар выбран");
        Ok(TickOutcome::Drawn(winner))
    }

    /// Оборвать текущую анимацию. `true`, если было что обрывать.
    pub fn cancel<E: Clone>(&mut self, scheduler: &mut Scheduler<E>) -> bool {
        match self.state {
            SequencerState::Animating { ticker, .. } => {
                scheduler.cancel(ticker);
                self.state = SequencerState::Idle;
                true
            }
            SequencerState::Idle => false,
        }
    }

    /// Убрать кадр с экрана (сброс сессии/перезапуск).
    pub fn clear_frame(&mut self) {
        self.frame = None;
        self.ticks = 0;
    }
}
