// tests/infra_test.rs

use std::time::Duration;

use bingo_engine::{
    domain::{DrawRange, Phase},
    engine::{
        errors::{EngineError, NotifyError},
        DrawNotifier, GameSession, Notification,
    },
    infra::{
        drive_until_idle,
        feedback::{tone_for, Ramp, Waveform, FINISH_TONE, SUCCESS_TONE, TICK_TONE},
        BingoConfig, ConfigError, DeterministicRng, NoopNotifier, RecordingNotifier,
        ToneNotifier, ToneProfile, ToneSink,
    },
    time_ctrl::{DrawTiming, TimingProfile},
};

//
// ---------- helpers ----------
//

/// Sink, который запоминает, что его просили сыграть.
#[derive(Default)]
struct CapturingSink {
    played: Vec<(Notification, u32)>,
    fail: bool,
}

impl ToneSink for CapturingSink {
    fn play(&mut self, kind: Notification, tone: &ToneProfile) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::new("device busy"));
        }
        self.played.push((kind, tone.duration_ms));
        Ok(())
    }
}

//
// ---------- BingoConfig ----------
//

#[test]
fn empty_config_uses_defaults() {
    let cfg = BingoConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, BingoConfig::default());

    let (range, timing) = cfg.validate().unwrap();
    assert_eq!(range, DrawRange::new(1, 75).unwrap());
    assert_eq!(timing, DrawTiming::standard());
    assert!(cfg.sound);
    assert_eq!(cfg.seed, None);
}

#[test]
fn config_reads_range_seed_and_partial_timing() {
    let cfg = BingoConfig::from_toml_str(
        r#"
        start = 10
        end = 30
        seed = 7
        sound = false

        [timing]
        finish_delay_ms = 250
        "#,
    )
    .unwrap();

    let (range, timing) = cfg.validate().unwrap();
    assert_eq!((range.start(), range.end()), (10, 30));
    assert_eq!(cfg.seed, Some(7));
    assert!(!cfg.sound);
    assert_eq!(timing.finish_delay_ms, 250);
    assert_eq!(timing.animation_ms, 1000, "missing fields keep standard values");
}

#[test]
fn profile_overrides_timing_section() {
    let cfg = BingoConfig::from_toml_str(
        r#"
        profile = "turbo"

        [timing]
        animation_ms = 5000
        "#,
    )
    .unwrap();

    assert_eq!(cfg.profile, Some(TimingProfile::Turbo));
    assert_eq!(cfg.effective_timing(), DrawTiming::turbo());
}

#[test]
fn config_rejects_bad_values() {
    let zero_tick = BingoConfig::from_toml_str("[timing]\ntick_interval_ms = 0").unwrap();
    assert!(matches!(zero_tick.validate(), Err(ConfigError::Timing(_))));

    let reversed = BingoConfig::from_toml_str("start = 9\nend = 3").unwrap();
    assert!(matches!(
        reversed.validate(),
        Err(ConfigError::Range(EngineError::InvalidRange { .. }))
    ));

    let broken = BingoConfig::from_toml_str("start = \"one\"");
    assert!(matches!(broken, Err(ConfigError::Parse(_))));
}

#[test]
fn missing_config_file_is_io_error() {
    let err = BingoConfig::load("/definitely/not/here/bingo.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

//
// ---------- tones ----------
//

#[test]
fn tone_profiles_match_hall_sounds() {
    assert_eq!(tone_for(Notification::Tick), &TICK_TONE);
    assert_eq!(tone_for(Notification::DrawSuccess), &SUCCESS_TONE);
    assert_eq!(tone_for(Notification::GameFinished), &FINISH_TONE);

    assert_eq!(TICK_TONE.waveform, Waveform::Sine);
    assert_eq!(TICK_TONE.frequency[0].value, 800.0);
    assert_eq!(TICK_TONE.duration_ms, 50);

    assert_eq!(SUCCESS_TONE.waveform, Waveform::Triangle);
    assert_eq!(SUCCESS_TONE.frequency.last().unwrap().value, 880.0);
    assert_eq!(SUCCESS_TONE.duration_ms, 500);

    assert_eq!(FINISH_TONE.waveform, Waveform::Square);
    assert_eq!(FINISH_TONE.frequency.len(), 3);
    assert_eq!(FINISH_TONE.gain.last().unwrap().ramp, Ramp::Linear);
    assert_eq!(FINISH_TONE.duration_ms, 600);
}

#[test]
fn tone_notifier_forwards_to_sink_and_respects_mute() {
    let mut n = ToneNotifier::new(CapturingSink::default(), true);
    n.on_tick().unwrap();
    n.on_draw_success().unwrap();

    n.set_enabled(false);
    n.on_game_finished().unwrap();

    assert_eq!(
        n.sink().played,
        vec![(Notification::Tick, 50), (Notification::DrawSuccess, 500)]
    );
}

#[test]
fn tone_notifier_surfaces_sink_errors() {
    let sink = CapturingSink {
        fail: true,
        ..Default::default()
    };
    let mut n = ToneNotifier::new(sink, true);
    assert!(n.on_draw_success().is_err());
}

#[test]
fn session_with_tones_plays_every_hook() {
    let mut session = GameSession::new(
        DrawTiming::standard(),
        DeterministicRng::from_seed(3),
        ToneNotifier::new(CapturingSink::default(), true),
    );
    session.start_session(DrawRange::new(1, 2).unwrap()).unwrap();
    for _ in 0..2 {
        session.request_draw().unwrap();
        session.run_until_idle().unwrap();
    }

    let played = &session.notifier().sink().played;
    let count = |kind: Notification| played.iter().filter(|(k, _)| *k == kind).count();
    assert_eq!(count(Notification::Tick), 40);
    assert_eq!(count(Notification::DrawSuccess), 2);
    assert_eq!(count(Notification::GameFinished), 1);
}

//
// ---------- notifiers ----------
//

#[test]
fn recording_notifier_counts_and_clears() {
    let mut rec = RecordingNotifier::new();
    rec.on_tick().unwrap();
    rec.on_tick().unwrap();
    rec.on_game_finished().unwrap();

    assert_eq!(rec.count(Notification::Tick), 2);
    assert_eq!(rec.count(Notification::DrawSuccess), 0);
    assert_eq!(rec.events.last(), Some(&Notification::GameFinished));

    rec.clear();
    assert!(rec.events.is_empty());
}

#[test]
fn noop_notifier_never_fails() {
    let mut n = NoopNotifier;
    assert!(n.on_tick().is_ok());
    assert!(n.on_draw_success().is_ok());
    assert!(n.on_game_finished().is_ok());
}

//
// ---------- wall clock ----------
//

#[tokio::test(start_paused = true)]
async fn drive_until_idle_runs_draw_and_finish_in_real_time() {
    let mut session = GameSession::new(
        DrawTiming::standard(),
        DeterministicRng::from_seed(11),
        RecordingNotifier::new(),
    );
    session.start_session(DrawRange::new(1, 2).unwrap()).unwrap();

    session.request_draw().unwrap();
    drive_until_idle(&mut session, Duration::from_millis(10)).await.unwrap();
    assert_eq!(session.drawn_numbers().len(), 1);
    assert_eq!(session.phase(), Phase::Playing);
    assert!(!session.is_animating());

    session.request_draw().unwrap();
    drive_until_idle(&mut session, Duration::from_millis(10)).await.unwrap();
    assert_eq!(session.drawn_numbers().len(), 2);
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.notifier().count(Notification::GameFinished), 1);
}
