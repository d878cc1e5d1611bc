// src/time_ctrl/scheduler.rs
//! Однопоточный планировщик таймеров на виртуальных часах (миллисекунды).
//!
//! Реального времени тут нет: хост сообщает, сколько прошло, а планировщик
//! по очереди отдаёт сработавшие таймеры.

use serde::{Deserialize, Serialize};

/// Хэндл запланированного таймера. Нужен, чтобы таймер можно было отменить.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Сработавший таймер.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiredTimer<E> {
    pub id: TimerId,
    /// Виртуальное время срабатывания.
    pub at_ms: u64,
    pub event: E,
}

#[derive(Clone, Debug)]
struct ScheduledTimer<E> {
    id: TimerId,
    due_ms: u64,
    /// `Some(period)`: повторяющийся таймер (аналог setInterval).
    period_ms: Option<u64>,
    event: E,
}

/// Очередь таймеров.
///
/// Таймеры с одинаковым сроком срабатывают в порядке постановки.
#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_id: u64,
    timers: Vec<ScheduledTimer<E>>,
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            timers: Vec::new(),
        }
    }

    /// Текущее виртуальное время.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Однократный таймер через `delay_ms`.
    pub fn schedule_once(&mut self, delay_ms: u64, event: E) -> TimerId {
        self.push(delay_ms, None, event)
    }

    /// Повторяющийся таймер: первое срабатывание через `period_ms`, дальше с тем же шагом.
    /// Нулевой период поднимается до 1 мс.
    pub fn schedule_every(&mut self, period_ms: u64, event: E) -> TimerId {
        let period = period_ms.max(1);
        self.push(period, Some(period), event)
    }

    fn push(&mut self, delay_ms: u64, period_ms: Option<u64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(ScheduledTimer {
            id,
            due_ms: self.now_ms.saturating_add(delay_ms),
            period_ms,
            event,
        });
        id
    }

    /// Отменить таймер. `false`, если он уже сработал (однократный) или не существовал.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Сколько таймеров сейчас в очереди.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Снять все таймеры.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Когда сработает ближайший таймер.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_ms).min()
    }

    /// Достать ближайший таймер со сроком не позже `deadline_ms`.
    ///
    /// Часы переводятся на момент срабатывания, поэтому обработчик видит
    /// «правильное» `now_ms`. Повторяющийся таймер остаётся в очереди
    /// со сдвинутым сроком; если сдвинуть срок уже некуда (часы упёрлись
    /// в `u64::MAX`), он срабатывает последний раз и снимается.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<FiredTimer<E>> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= deadline_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(idx, _)| idx)?;

        let due_ms = self.timers[idx].due_ms;
        self.now_ms = self.now_ms.max(due_ms);

        let next_due = self.timers[idx]
            .period_ms
            .and_then(|period| due_ms.checked_add(period));

        let fired = match next_due {
            Some(next) => {
                let timer = &mut self.timers[idx];
                timer.due_ms = next;
                FiredTimer {
                    id: timer.id,
                    at_ms: due_ms,
                    event: timer.event.clone(),
                }
            }
            None => {
                let timer = self.timers.swap_remove(idx);
                FiredTimer {
                    id: timer.id,
                    at_ms: due_ms,
                    event: timer.event,
                }
            }
        };

        Some(fired)
    }

    /// Довести часы до `target_ms` (назад время не идёт).
    pub fn advance_clock_to(&mut self, target_ms: u64) {
        self.now_ms = self.now_ms.max(target_ms);
    }
}

impl<E: Clone> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
