use serde::{Deserialize, Serialize};

use crate::domain::BallNumber;

/// Тип события в сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionEventKind {
    /// Сессия запущена на диапазоне.
    SessionStarted { start: BallNumber, end: BallNumber },

    /// Запущена анимация очередного розыгрыша.
    DrawStarted { draw_index: usize },

    /// Шар зафиксирован.
    DrawCompleted { draw_index: usize, number: BallNumber },

    /// Розыгрыш оборван сбросом.
    DrawCancelled,

    /// Розыгрыш упал (пустой пул и т.п.).
    DrawFailed,

    /// Все номера вытянуты, фаза FINISHED.
    GameFinished { total_drawn: usize },

    /// Перезапуск в рамках того же диапазона.
    DrawsReset,

    /// Полный сброс в SETUP.
    SessionReset,
}

/// Событие с порядковым номером и виртуальным временем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionEvent {
    pub index: usize,
    pub at_ms: u64,
    pub kind: SessionEventKind,
}

/// Журнал текущей игры. Начинается заново при `reset_draws` и `reset_session`,
/// так что больше одного прохода по диапазону в нём не копится.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionHistory {
    pub events: Vec<SessionEvent>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, at_ms: u64, kind: SessionEventKind) {
        self.events.push(SessionEvent {
            index: self.events.len(),
            at_ms,
            kind,
        });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Сколько раз игра переходила в FINISHED.
    pub fn finish_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, SessionEventKind::GameFinished { .. }))
            .count()
    }

    pub fn last(&self) -> Option<&SessionEvent> {
        self.events.last()
    }
}
