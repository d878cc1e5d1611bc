use crate::domain::{BallNumber, DrawRange, DrawnSet};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Пул: номера диапазона, которых ещё нет среди вытянутых (по возрастанию).
pub fn available_pool(range: &DrawRange, drawn: &DrawnSet) -> Vec<BallNumber> {
    range.iter().filter(|n| !drawn.contains(*n)).collect()
}

/// Честный выбор шара: равномерно по текущему пулу, а не по всему диапазону.
pub fn pick_from_pool<R: RandomSource>(
    range: &DrawRange,
    drawn: &DrawnSet,
    rng: &mut R,
) -> Result<BallNumber, EngineError> {
    let available = available_pool(range, drawn);
    if available.is_empty() {
        return Err(EngineError::ExhaustedPool {
            total: range.size(),
        });
    }

    let idx = rng.uniform_index(available.len());
    available
        .get(idx)
        .copied()
        .ok_or(EngineError::Internal("RNG вернул индекс за пределами пула"))
}

/// Косметический номер для кадра анимации: равномерно по всему диапазону,
/// может совпадать с уже вытянутыми.
pub fn sample_visual<R: RandomSource>(range: &DrawRange, rng: &mut R) -> BallNumber {
    rng.uniform_inclusive(range.start(), range.end())
}
