use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::BallNumber;
use crate::engine::errors::{EngineError, RangeViolation};

/// Максимальная ширина диапазона (`end - start`), которую пропускает валидатор.
pub const MAX_SPAN: i64 = 200;

/// Замкнутый диапазон номеров `[start, end]`, из которого тянутся шары.
///
/// Инвариант: `start < end`. Ширину диапазона здесь НЕ проверяем,
/// это делает `engine::validation::validate_range` до старта сессии.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct DrawRange {
    start: BallNumber,
    end: BallNumber,
}

impl DrawRange {
    /// Строгий конструктор: перевёрнутый или вырожденный диапазон отклоняется.
    pub fn new(start: BallNumber, end: BallNumber) -> Result<Self, EngineError> {
        if start >= end {
            return Err(EngineError::InvalidRange {
                start,
                end,
                reason: RangeViolation::NotAscending,
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> BallNumber {
        self.start
    }

    pub fn end(&self) -> BallNumber {
        self.end
    }

    /// `end - start`.
    pub fn span(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// Сколько всего номеров в диапазоне (`end - start + 1`).
    pub fn size(&self) -> usize {
        (self.span() as usize).saturating_add(1)
    }

    pub fn contains(&self, number: BallNumber) -> bool {
        self.start <= number && number <= self.end
    }

    /// Все номера диапазона по возрастанию.
    pub fn iter(&self) -> RangeInclusive<BallNumber> {
        self.start..=self.end
    }
}
