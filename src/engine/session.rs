use tracing::{debug, error, info};

use crate::domain::{BallNumber, DrawRange, DrawnSet, Phase};
use crate::engine::errors::EngineError;
use crate::engine::history::{SessionEventKind, SessionHistory};
use crate::engine::sequencer::{DrawSequencer, TickOutcome};
use crate::engine::{notify, DrawNotifier, Notification, RandomSource};
use crate::time_ctrl::{DrawTiming, FiredTimer, Scheduler, TimerId};

/// События таймеров сессии. `epoch`: номер «жизни» сессии на момент постановки:
/// после любого сброса старые события не трогают состояние.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionTimer {
    DrawTick { epoch: u64 },
    FinishGame { epoch: u64 },
}

/// Результат `request_draw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawRequest {
    /// Анимация запущена, шар будет зафиксирован по таймеру.
    Started,
    /// Пул уже пуст, игра переведена в FINISHED.
    Finished,
}

/// Игровая сессия бинго.
///
/// Единственный владелец фазы, диапазона, вытянутых номеров и текущего шара.
/// Время приходит снаружи через `advance`, все таймеры живут в собственном
/// планировщике, поэтому сброс снимает их в том же вызове, что и чистит состояние.
pub struct GameSession<R: RandomSource, N: DrawNotifier> {
    phase: Phase,
    range: Option<DrawRange>,
    drawn: DrawnSet,
    current: Option<BallNumber>,
    sequencer: DrawSequencer,
    scheduler: Scheduler<SessionTimer>,
    /// Отложенный переход в FINISHED после последнего шара.
    pending_finish: Option<TimerId>,
    epoch: u64,
    timing: DrawTiming,
    rng: R,
    notifier: N,
    history: SessionHistory,
}

impl<R: RandomSource, N: DrawNotifier> GameSession<R, N> {
    pub fn new(timing: DrawTiming, rng: R, notifier: N) -> Self {
        Self {
            phase: Phase::Setup,
            range: None,
            drawn: DrawnSet::new(),
            current: None,
            sequencer: DrawSequencer::new(timing),
            scheduler: Scheduler::new(),
            pending_finish: None,
            epoch: 0,
            timing,
            rng,
            notifier,
            history: SessionHistory::new(),
        }
    }

    // ---------- наблюдаемое состояние ----------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn range(&self) -> Option<DrawRange> {
        self.range
    }

    pub fn drawn(&self) -> &DrawnSet {
        &self.drawn
    }

    pub fn drawn_numbers(&self) -> &[BallNumber] {
        self.drawn.as_slice()
    }

    pub fn current_number(&self) -> Option<BallNumber> {
        self.current
    }

    pub fn animation_value(&self) -> Option<BallNumber> {
        self.sequencer.animation_value()
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_animating()
    }

    /// Последний шар вытянут, ждём отложенного FINISHED.
    pub fn is_settling(&self) -> bool {
        self.pending_finish.is_some()
    }

    /// Сколько номеров ещё в пуле.
    pub fn remaining(&self) -> usize {
        self.range
            .map(|r| r.size().saturating_sub(self.drawn.len()))
            .unwrap_or(0)
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    // ---------- команды ----------

    /// SETUP -> PLAYING. Диапазону доверяем (его проверил валидатор).
    pub fn start_session(&mut self, range: DrawRange) -> Result<(), EngineError> {
        if self.phase != Phase::Setup {
            return Err(EngineError::SessionAlreadyStarted);
        }

        self.clear_draw_state();
        self.range = Some(range);
        self.phase = Phase::Playing;

        self.record(SessionEventKind::SessionStarted {
            start: range.start(),
            end: range.end(),
        });
        info!(start = range.start(), end = range.end(), "сессия запущена");
        Ok(())
    }

    /// Запросить розыгрыш.
    ///
    /// - пул пуст → FINISHED (уведомление о финише уходит ровно один раз);
    /// - идёт анимация → `ConcurrentDraw`, состояние не меняется;
    /// - иначе запускается секвенсор.
    pub fn request_draw(&mut self) -> Result<DrawRequest, EngineError> {
        let range = match self.phase {
            Phase::Setup => return Err(EngineError::NotPlaying),
            Phase::Finished => return Err(EngineError::GameFinished),
            Phase::Playing => self
                .range
                .ok_or(EngineError::Internal("PLAYING без диапазона"))?,
        };

        if self.sequencer.is_animating() {
            debug!("розыгрыш уже идёт, запрос проигнорирован");
            return Err(EngineError::ConcurrentDraw);
        }

        if self.drawn.len() >= range.size() {
            self.finish_game();
            return Ok(DrawRequest::Finished);
        }

        self.sequencer
            .begin(&mut self.scheduler, SessionTimer::DrawTick { epoch: self.epoch })?;
        self.record(SessionEventKind::DrawStarted {
            draw_index: self.drawn.len(),
        });
        Ok(DrawRequest::Started)
    }

    /// Перезапуск на том же диапазоне: PLAYING|FINISHED -> PLAYING.
    pub fn reset_draws(&mut self) -> Result<(), EngineError> {
        if !self.phase.is_in_session() {
            return Err(EngineError::NotPlaying);
        }

        self.history.clear();
        self.clear_draw_state();
        self.phase = Phase::Playing;
        self.record(SessionEventKind::DrawsReset);
        info!("вытянутые номера сброшены");
        Ok(())
    }

    /// Полный сброс в SETUP из любой фазы.
    pub fn reset_session(&mut self) {
        self.history.clear();
        self.clear_draw_state();
        self.range = None;
        self.phase = Phase::Setup;
        self.record(SessionEventKind::SessionReset);
        info!("сессия сброшена");
    }

    /// Прокрутить виртуальное время на `delta_ms` и обработать все сработавшие таймеры.
    ///
    /// Ошибка розыгрыша (пустой пул) не останавливает часы: время всё равно
    /// доводится до конца окна, а первая ошибка возвращается наружу.
    pub fn advance(&mut self, delta_ms: u64) -> Result<(), EngineError> {
        let deadline = self.scheduler.now_ms().saturating_add(delta_ms);
        let mut failure = None;

        while let Some(fired) = self.scheduler.pop_due(deadline) {
            if let Err(err) = self.handle_timer(fired) {
                failure.get_or_insert(err);
            }
        }
        self.scheduler.advance_clock_to(deadline);

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Крутить время, пока в очереди есть таймеры (текущий розыгрыш и отложенный финиш).
    pub fn run_until_idle(&mut self) -> Result<(), EngineError> {
        while let Some(due) = self.scheduler.next_due_ms() {
            let delta = due.saturating_sub(self.scheduler.now_ms());
            self.advance(delta)?;
        }
        Ok(())
    }

    // ---------- внутреннее ----------

    fn handle_timer(&mut self, fired: FiredTimer<SessionTimer>) -> Result<(), EngineError> {
        match fired.event {
            SessionTimer::DrawTick { epoch } if epoch != self.epoch => {
                self.scheduler.cancel(fired.id);
                debug!(epoch, current = self.epoch, "устаревший кадр отброшен");
                Ok(())
            }
            SessionTimer::DrawTick { .. } => self.on_draw_tick(),
            SessionTimer::FinishGame { epoch } if epoch != self.epoch => {
                debug!(epoch, current = self.epoch, "устаревший финиш отброшен");
                Ok(())
            }
            SessionTimer::FinishGame { .. } => {
                self.pending_finish = None;
                if self.phase == Phase::Playing {
                    self.finish_game();
                }
                Ok(())
            }
        }
    }

    fn on_draw_tick(&mut self) -> Result<(), EngineError> {
        let Some(range) = self.range else {
            self.sequencer.cancel(&mut self.scheduler);
            return Err(EngineError::Internal("кадр розыгрыша без диапазона"));
        };

        let outcome = self.sequencer.on_tick(
            &mut self.scheduler,
            &range,
            &self.drawn,
            &mut self.rng,
            &mut self.notifier,
        );

        match outcome {
            Ok(TickOutcome::Frame(_)) | Ok(TickOutcome::Ignored) => Ok(()),
            Ok(TickOutcome::Drawn(number)) => self.record_draw(range, number),
            Err(err) => {
                error!(error = %err, drawn = self.drawn.len(), "розыгрыш не удался");
                self.record(SessionEventKind::DrawFailed);
                Err(err)
            }
        }
    }

    fn record_draw(&mut self, range: DrawRange, number: BallNumber) -> Result<(), EngineError> {
        let draw_index = self.drawn.len();
        if !self.drawn.insert(number) {
            return Err(EngineError::Internal("секвенсор вернул уже вытянутый номер"));
        }
        self.current = Some(number);

        self.record(SessionEventKind::DrawCompleted { draw_index, number });
        info!(number, draw_index, remaining = self.remaining(), "шар вытянут");
        notify(&mut self.notifier, Notification::DrawSuccess);

        if self.drawn.len() >= range.size() {
            let id = self.scheduler.schedule_once(
                self.timing.finish_delay_ms,
                SessionTimer::FinishGame { epoch: self.epoch },
            );
            self.pending_finish = Some(id);
            debug!(delay_ms = self.timing.finish_delay_ms, "последний шар, финиш отложен");
        }
        Ok(())
    }

    /// Перевести игру в FINISHED ровно один раз.
    fn finish_game(&mut self) {
        if let Some(id) = self.pending_finish.take() {
            self.scheduler.cancel(id);
        }
        if self.phase == Phase::Finished {
            return;
        }

        self.phase = Phase::Finished;
        self.record(SessionEventKind::GameFinished {
            total_drawn: self.drawn.len(),
        });
        info!(total_drawn = self.drawn.len(), "игра завершена");
        notify(&mut self.notifier, Notification::GameFinished);
    }

    /// Снять все таймеры и очистить результаты розыгрышей.
    fn clear_draw_state(&mut self) {
        self.epoch += 1;
        if self.sequencer.cancel(&mut self.scheduler) {
            self.record(SessionEventKind::DrawCancelled);
        }
        self.sequencer.clear_frame();
        if let Some(id) = self.pending_finish.take() {
            self.scheduler.cancel(id);
        }
        self.drawn.clear();
        self.current = None;
    }

    fn record(&mut self, kind: SessionEventKind) {
        self.history.push(self.scheduler.now_ms(), kind);
    }
}
