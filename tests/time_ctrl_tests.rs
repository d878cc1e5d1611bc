// tests/time_ctrl_tests.rs
//
// Проверяем:
// 1) DrawTiming: профили и число кадров на розыгрыш;
// 2) Scheduler: порядок срабатывания, повторяющиеся таймеры, отмена, часы.

use bingo_engine::time_ctrl::{DrawTiming, Scheduler, TimingProfile};

//
// ---------- DrawTiming ----------
//

#[test]
fn standard_timing_matches_hall_rules() {
    let t = DrawTiming::standard();
    assert_eq!(t.animation_ms, 1000);
    assert_eq!(t.tick_interval_ms, 50);
    assert_eq!(t.finish_delay_ms, 1000);
    assert_eq!(t.ticks_per_draw(), 20);
    assert!(t.is_valid());
}

#[test]
fn profile_lookup_and_uneven_ticks() {
    assert_eq!(DrawTiming::from_profile(TimingProfile::Standard), DrawTiming::standard());
    assert_eq!(DrawTiming::from_profile(TimingProfile::Turbo), DrawTiming::turbo());

    // 100 / 30 -> кадры на 30, 60, 90, 120: четвёртый уже за пределами анимации.
    assert_eq!(DrawTiming::new(100, 30, 0).ticks_per_draw(), 4);
    assert!(!DrawTiming::new(100, 0, 0).is_valid());
}

//
// ---------- Scheduler ----------
//

#[test]
fn once_timers_fire_in_due_order() {
    let mut s: Scheduler<&'static str> = Scheduler::new();
    s.schedule_once(30, "c");
    s.schedule_once(10, "a");
    s.schedule_once(20, "b");

    let mut fired = Vec::new();
    while let Some(t) = s.pop_due(100) {
        fired.push((t.at_ms, t.event));
    }

    assert_eq!(fired, vec![(10, "a"), (20, "b"), (30, "c")]);
    assert_eq!(s.pending(), 0);
}

#[test]
fn equal_due_times_fire_in_schedule_order() {
    let mut s: Scheduler<u32> = Scheduler::new();
    s.schedule_once(5, 1);
    s.schedule_once(5, 2);
    s.schedule_once(5, 3);

    let order: Vec<u32> = std::iter::from_fn(|| s.pop_due(5).map(|t| t.event)).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn pop_due_respects_deadline_and_moves_clock() {
    let mut s: Scheduler<()> = Scheduler::new();
    s.schedule_once(50, ());

    assert!(s.pop_due(49).is_none());
    assert_eq!(s.now_ms(), 0, "nothing fired -> clock untouched");

    let t = s.pop_due(60).unwrap();
    assert_eq!(t.at_ms, 50);
    assert_eq!(s.now_ms(), 50);

    s.advance_clock_to(60);
    assert_eq!(s.now_ms(), 60);
    s.advance_clock_to(10);
    assert_eq!(s.now_ms(), 60, "clock never goes back");
}

#[test]
fn repeating_timer_reschedules_itself() {
    let mut s: Scheduler<&'static str> = Scheduler::new();
    let id = s.schedule_every(50, "tick");

    let times: Vec<u64> = std::iter::from_fn(|| s.pop_due(200).map(|t| t.at_ms)).collect();
    assert_eq!(times, vec![50, 100, 150, 200]);
    assert!(s.is_pending(id));
    assert_eq!(s.next_due_ms(), Some(250));
}

#[test]
fn cancel_removes_timer() {
    let mut s: Scheduler<u8> = Scheduler::new();
    let a = s.schedule_once(10, 1);
    let b = s.schedule_every(10, 2);

    assert!(s.cancel(a));
    assert!(!s.cancel(a), "second cancel is a no-op");
    assert!(s.cancel(b));
    assert!(s.pop_due(1_000).is_none());
    assert_eq!(s.pending(), 0);
}

#[test]
fn zero_period_is_clamped() {
    let mut s: Scheduler<()> = Scheduler::new();
    s.schedule_every(0, ());
    let first = s.pop_due(10).unwrap();
    assert_eq!(first.at_ms, 1);
}

#[test]
fn timers_scheduled_later_are_relative_to_now() {
    let mut s: Scheduler<u8> = Scheduler::new();
    s.advance_clock_to(1_000);
    s.schedule_once(25, 7);
    assert_eq!(s.next_due_ms(), Some(1_025));

    s.clear();
    assert_eq!(s.next_due_ms(), None);
}

#[test]
fn repeating_timer_is_dropped_at_clock_limit() {
    let mut s: Scheduler<&'static str> = Scheduler::new();
    s.advance_clock_to(u64::MAX - 10);
    let id = s.schedule_every(50, "tick");
    assert_eq!(s.next_due_ms(), Some(u64::MAX));

    let last = s.pop_due(u64::MAX).unwrap();
    assert_eq!(last.at_ms, u64::MAX);
    assert!(!s.is_pending(id), "timer that cannot be re-armed must leave the queue");
    assert!(s.pop_due(u64::MAX).is_none());
}
