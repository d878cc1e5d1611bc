use serde::{Deserialize, Serialize};

/// Фаза игровой сессии.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Диапазон ещё не выбран.
    #[default]
    Setup,
    /// Идёт розыгрыш, можно тянуть шары.
    Playing,
    /// Все номера диапазона вытянуты.
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "SETUP",
            Phase::Playing => "PLAYING",
            Phase::Finished => "FINISHED",
        }
    }

    /// Сессия запущена (игра идёт или уже закончилась, но табло ещё на экране).
    pub fn is_in_session(&self) -> bool {
        matches!(self, Phase::Playing | Phase::Finished)
    }
}
