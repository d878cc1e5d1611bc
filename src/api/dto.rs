use serde::{Deserialize, Serialize};

use crate::domain::{BallNumber, Phase};

/// Клетка табло.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardCellDto {
    pub number: BallNumber,
    pub drawn: bool,
    /// Это последний вытянутый шар.
    pub is_current: bool,
}

/// Что показывает большой шар.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BallStatus {
    /// Ещё ничего не тянули.
    Waiting,
    /// Крутится анимация.
    Shuffling,
    /// Показан зафиксированный шар.
    Drawn,
}

/// Состояние кнопки розыгрыша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrawButtonState {
    Ready,
    Drawing,
    Finished,
}

/// DTO сессии для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub phase: Phase,
    pub start: Option<BallNumber>,
    pub end: Option<BallNumber>,
    /// В порядке розыгрыша.
    pub drawn_numbers: Vec<BallNumber>,
    pub current_number: Option<BallNumber>,
    pub animation_value: Option<BallNumber>,
    pub is_animating: bool,
    /// Последний шар вытянут, FINISHED вот-вот наступит.
    pub is_settling: bool,
    pub remaining: usize,
    pub total: usize,
    pub ball_status: BallStatus,
    pub draw_button: DrawButtonState,
    /// Табло по возрастанию номеров. Пустое в SETUP.
    pub cells: Vec<BoardCellDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Анимация розыгрыша запущена.
    DrawStarted,

    /// Пул пуст, игра завершена.
    GameFinished,

    /// Команда проглочена без изменений (например, повторный «тянуть» во время анимации).
    Ignored { reason: String },

    /// Вернуть обновлённое состояние сессии.
    SessionState(SessionViewDto),
}
