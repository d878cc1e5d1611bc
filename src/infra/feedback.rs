//! Звуковая обратная связь: какие тоны играть на кадр, на шар и на финиш.
//!
//! Синтеза тут нет. `ToneNotifier` превращает хуки движка в `ToneProfile`
//! и отдаёт их в `ToneSink`, а уже sink решает, чем играть (аудио, терминал, лог).

use serde::Serialize;
use tracing::info;

use crate::engine::{DrawNotifier, Notification, NotifyError};

/// Форма волны осциллятора.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
}

/// Как частота/громкость идёт к следующей точке.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Ramp {
    /// Значение выставляется сразу.
    Step,
    Linear,
    Exponential,
}

/// Точка огибающей: значение к моменту `at_ms` от начала тона.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct EnvelopePoint {
    pub at_ms: u32,
    pub value: f32,
    pub ramp: Ramp,
}

const fn point(at_ms: u32, value: f32, ramp: Ramp) -> EnvelopePoint {
    EnvelopePoint { at_ms, value, ramp }
}

/// Описание одного короткого тона.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct ToneProfile {
    pub waveform: Waveform,
    /// Частота, Гц.
    pub frequency: &'static [EnvelopePoint],
    /// Громкость 0..1.
    pub gain: &'static [EnvelopePoint],
    pub duration_ms: u32,
}

/// Короткий высокий щелчок на каждый кадр анимации.
pub const TICK_TONE: ToneProfile = ToneProfile {
    waveform: Waveform::Sine,
    frequency: &[point(0, 800.0, Ramp::Step)],
    gain: &[point(0, 0.05, Ramp::Step), point(50, 0.001, Ramp::Exponential)],
    duration_ms: 50,
};

/// Восходящий «дзынь» на зафиксированный шар.
pub const SUCCESS_TONE: ToneProfile = ToneProfile {
    waveform: Waveform::Triangle,
    frequency: &[point(0, 440.0, Ramp::Step), point(100, 880.0, Ramp::Exponential)],
    gain: &[point(0, 0.1, Ramp::Step), point(500, 0.001, Ramp::Exponential)],
    duration_ms: 500,
};

/// Сирена вверх-вниз на конец игры.
pub const FINISH_TONE: ToneProfile = ToneProfile {
    waveform: Waveform::Square,
    frequency: &[
        point(0, 300.0, Ramp::Step),
        point(200, 600.0, Ramp::Linear),
        point(400, 300.0, Ramp::Linear),
    ],
    gain: &[point(0, 0.1, Ramp::Step), point(600, 0.0, Ramp::Linear)],
    duration_ms: 600,
};

/// Тон для уведомления движка.
pub fn tone_for(kind: Notification) -> &'static ToneProfile {
    match kind {
        Notification::Tick => &TICK_TONE,
        Notification::DrawSuccess => &SUCCESS_TONE,
        Notification::GameFinished => &FINISH_TONE,
    }
}

/// Куда отдаются тоны.
pub trait ToneSink {
    fn play(&mut self, kind: Notification, tone: &ToneProfile) -> Result<(), NotifyError>;
}

/// Sink, который только пишет в лог (тики пропускаем).
#[derive(Clone, Copy, Debug, Default)]
pub struct LogToneSink;

impl ToneSink for LogToneSink {
    fn play(&mut self, kind: Notification, tone: &ToneProfile) -> Result<(), NotifyError> {
        if kind != Notification::Tick {
            info!(hook = ?kind, waveform = ?tone.waveform, duration_ms = tone.duration_ms, "♪");
        }
        Ok(())
    }
}

/// `DrawNotifier`, играющий тоны через sink. Выключенный молчит.
#[derive(Clone, Debug)]
pub struct ToneNotifier<S: ToneSink> {
    sink: S,
    enabled: bool,
}

impl<S: ToneSink> ToneNotifier<S> {
    pub fn new(sink: S, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn emit(&mut self, kind: Notification) -> Result<(), NotifyError> {
        if !self.enabled {
            return Ok(());
        }
        self.sink.play(kind, tone_for(kind))
    }
}

impl<S: ToneSink> DrawNotifier for ToneNotifier<S> {
    fn on_tick(&mut self) -> Result<(), NotifyError> {
        self.emit(Notification::Tick)
    }

    fn on_draw_success(&mut self) -> Result<(), NotifyError> {
        self.emit(Notification::DrawSuccess)
    }

    fn on_game_finished(&mut self) -> Result<(), NotifyError> {
        self.emit(Notification::GameFinished)
    }
}
