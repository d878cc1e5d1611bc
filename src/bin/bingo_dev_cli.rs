// src/bin/bingo_dev_cli.rs

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use bingo_engine::api::{
    build_session_view, execute_command, CommandResponse, SessionCommand, SessionViewDto,
    StartSessionCommand, StartSessionInput,
};
use bingo_engine::domain::Phase;
use bingo_engine::engine::GameSession;
use bingo_engine::infra::{
    drive_until_idle, init_tracing, pump, BingoConfig, LogToneSink, SessionRng, ToneNotifier,
    WallClock,
};
use bingo_engine::time_ctrl::TimingProfile;

type CliSession = GameSession<SessionRng, ToneNotifier<LogToneSink>>;

/// Шаг опроса часов сессии.
const FRAME: Duration = Duration::from_millis(10);

/// Dev-CLI для движка бинго: интерактивный розыгрыш или авто-прогон до конца.
#[derive(Debug, Parser)]
#[command(name = "bingo_dev_cli", version)]
struct Args {
    /// TOML-конфиг сессии.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Начальный номер (перекрывает конфиг).
    #[arg(long)]
    start: Option<i64>,

    /// Конечный номер (перекрывает конфиг).
    #[arg(long)]
    end: Option<i64>,

    /// Seed для воспроизводимого розыгрыша.
    #[arg(long)]
    seed: Option<u64>,

    /// Быстрый тайминг.
    #[arg(long)]
    turbo: bool,

    /// Без звуковых уведомлений.
    #[arg(long)]
    mute: bool,

    /// Тянуть шары без участия пользователя, пока игра не закончится.
    #[arg(long)]
    auto: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing("bingo_engine=info,bingo_dev_cli=info");
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BingoConfig::load(path)
            .with_context(|| format!("не удалось загрузить конфиг {}", path.display()))?,
        None => BingoConfig::default(),
    };
    apply_overrides(&mut config, &args);

    let (range, timing) = config.validate()?;
    info!(
        start = range.start(),
        end = range.end(),
        animation_ms = timing.animation_ms,
        seed = ?config.seed,
        "bingo_dev_cli: стартуем"
    );

    let mut session: CliSession = GameSession::new(
        timing,
        SessionRng::from_optional_seed(config.seed),
        ToneNotifier::new(LogToneSink, config.sound),
    );

    execute_command(
        &mut session,
        SessionCommand::StartSession(StartSessionCommand {
            start: range.start(),
            end: range.end(),
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    if args.auto {
        run_auto(&mut session).await?;
    } else {
        run_interactive(&mut session).await?;
    }

    println!("[CLI] Завершение работы dev-CLI.");
    Ok(())
}

fn apply_overrides(config: &mut BingoConfig, args: &Args) {
    if let Some(start) = args.start {
        config.start = start;
    }
    if let Some(end) = args.end {
        config.end = end;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.turbo {
        config.profile = Some(TimingProfile::Turbo);
    }
    if args.mute {
        config.sound = false;
    }
}

/// Тянем шары подряд до FINISHED.
async fn run_auto(session: &mut CliSession) -> Result<()> {
    while session.phase() == Phase::Playing {
        execute_command(session, SessionCommand::RequestDraw)
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        drive_until_idle(session, FRAME).await?;

        if let Some(n) = session.current_number() {
            println!("[CLI] шар {:>4} | осталось {}", n, session.remaining());
        }
    }

    print_view(&build_session_view(session))?;
    Ok(())
}

/// Интерактивный режим: команды из stdin, часы сессии крутятся параллельно.
async fn run_interactive(session: &mut CliSession) -> Result<()> {
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(FRAME);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut clock = WallClock::start();
    let mut shown = session.drawn_numbers().len();
    let mut last_phase = session.phase();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(err) = pump(session, &mut clock) {
                    warn!(error = %err, "ошибка розыгрыша");
                }

                let drawn = session.drawn_numbers().len();
                if drawn > shown {
                    if let Some(n) = session.current_number() {
                        println!("[CLI] >>> шар {} (вытянуто {}, осталось {})", n, drawn, session.remaining());
                    }
                }
                shown = drawn;

                if session.phase() != last_phase {
                    println!("[CLI] фаза: {}", session.phase().as_str());
                    last_phase = session.phase();
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_line(session, line.trim())? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Обработать строку пользователя. `false`: выходим.
fn handle_line(session: &mut CliSession, line: &str) -> Result<bool> {
    let mut parts = line.split_whitespace();
    let command = match parts.next().unwrap_or("d") {
        "d" | "draw" => SessionCommand::RequestDraw,
        "r" | "restart" => SessionCommand::ResetDraws,
        "s" | "setup" => SessionCommand::ResetSession,
        "n" | "new" => {
            let (Some(start), Some(end)) = (parts.next(), parts.next()) else {
                println!("[CLI] формат: n <start> <end>");
                return Ok(true);
            };
            SessionCommand::StartSessionFromInput(StartSessionInput {
                start: start.to_string(),
                end: end.to_string(),
            })
        }
        "v" | "view" => SessionCommand::Snapshot,
        "q" | "quit" => return Ok(false),
        _ => {
            print_help();
            return Ok(true);
        }
    };

    match execute_command(session, command) {
        Ok(CommandResponse::SessionState(view)) => print_view(&view)?,
        Ok(CommandResponse::Ignored { reason }) => println!("[CLI] проигнорировано: {reason}"),
        Ok(other) => println!("[CLI] {other:?}"),
        Err(err) => println!("[CLI] ошибка: {err:?}"),
    }
    Ok(true)
}

fn print_view(view: &SessionViewDto) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}

fn print_help() {
    println!("[CLI] команды: d(raw) | r(estart) | s(etup) | n <start> <end> | v(iew) | q(uit)");
}
