//! Lagoon headless demo driver
//!
//! Runs the simulation at its real cadences with a scripted paddler and
//! logs the HUD once per play-second. `RUST_LOG=debug` shows collision and
//! spawn traffic.
//!
//! ```text
//! lagoon [--tuning <path>] [--seed <n>] [--seconds <n>] [--fast]
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use lagoon::Tuning;
use lagoon::consts::TICK_HZ;
use lagoon::sim::{InputEvent, Scheduler, World, apply_event, tick};

struct Args {
    tuning: Option<PathBuf>,
    seed: u64,
    seconds: u32,
    fast: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        tuning: None,
        seed: 0,
        seconds: 60,
        fast: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--tuning" => {
                let path = iter.next().ok_or("--tuning needs a path")?;
                args.tuning = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--seconds" => {
                let value = iter.next().ok_or("--seconds needs a number")?;
                args.seconds = value.parse().map_err(|_| format!("bad seconds: {value}"))?;
            }
            "--fast" => args.fast = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

/// Scripted paddler: row hard, then favor the left oar, then coast
fn scripted_events(sim_tick: u64) -> &'static [InputEvent] {
    match sim_tick {
        0 => &[InputEvent::LeftPaddleDown, InputEvent::RightPaddleDown],
        240 => &[InputEvent::RightPaddleUp],
        480 => &[InputEvent::LeftPaddleUp],
        600 => &[InputEvent::LeftPaddleDown, InputEvent::TogglePaddleStrength],
        900 => &[InputEvent::LeftPaddleUp],
        _ => &[],
    }
}

fn run(args: &Args) -> Result<(), String> {
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).map_err(|e| e.to_string())?,
        None => Tuning::default(),
    };

    let mut world = World::with_tuning(tuning, args.seed);
    let mut scheduler = Scheduler::new(world.tuning.fish_escalation_secs);

    log::info!(
        "starting run: seed {}, {} s, {} fish cap",
        args.seed,
        args.seconds,
        world.tuning.max_fish
    );

    let total_ticks = u64::from(args.seconds) * u64::from(TICK_HZ);
    let mut sim_tick: u64 = 0;
    let mut last = Instant::now();

    while sim_tick < total_ticks {
        let dt = if args.fast {
            1.0 / f64::from(TICK_HZ)
        } else {
            thread::sleep(Duration::from_millis(4));
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f64();
            last = now;
            dt
        };

        let due = scheduler.advance(dt);

        for _ in 0..due.sim_ticks {
            for &event in scripted_events(sim_tick) {
                apply_event(&mut world, event);
            }
            tick(&mut world);
            sim_tick += 1;
        }

        for _ in 0..due.clock_ticks {
            world.advance_clock();
            match serde_json::to_string(&world.hud()) {
                Ok(hud) => log::info!("hud {hud}"),
                Err(err) => log::warn!("hud serialization failed: {err}"),
            }
        }

        for _ in 0..due.escalations {
            world.escalate_fish();
        }
    }

    let snapshot = world.render_snapshot();
    log::info!(
        "run complete: boat at {}, heading {:.1} deg, {} fish",
        snapshot.boat_position,
        snapshot.boat_angle,
        snapshot.fish_positions.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: lagoon [--tuning <path>] [--seed <n>] [--seconds <n>] [--fast]");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
