//! Простые реализации `DrawNotifier`: заглушка и запись в память.

use crate::engine::{DrawNotifier, Notification, NotifyError};

/// Ничего не делает.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifier;

impl DrawNotifier for NoopNotifier {
    fn on_tick(&mut self) -> Result<(), NotifyError> {
        Ok(())
    }

    fn on_draw_success(&mut self) -> Result<(), NotifyError> {
        Ok(())
    }

    fn on_game_finished(&mut self) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Запоминает все уведомления по порядку (тесты, реплей).
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    pub events: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: Notification) -> usize {
        self.events.iter().filter(|&&e| e == kind).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DrawNotifier for RecordingNotifier {
    fn on_tick(&mut self) -> Result<(), NotifyError> {
        self.events.push(Notification::Tick);
        Ok(())
    }

    fn on_draw_success(&mut self) -> Result<(), NotifyError> {
        self.events.push(Notification::DrawSuccess);
        Ok(())
    }

    fn on_game_finished(&mut self) -> Result<(), NotifyError> {
        self.events.push(Notification::GameFinished);
        Ok(())
    }
}
