//! The run loop: drives the engine against the scripted host at the fixed
//! tick rate and feeds every snapshot to the telemetry sink.

use std::error::Error;
use std::io::Write;
use std::time::{Duration, Instant};

use log::info;

use phantom_core::constants::{DT, TICK_RATE};
use phantom_sim::AttackEngine;

use crate::config::PhantomConfig;
use crate::host::ScriptedHost;
use crate::telemetry::CsvSink;

/// Nominal wall-clock duration of one tick when pacing in realtime.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The geometry collapsed and the final record is on disk.
    Invalidated,
    /// `max_sim_secs` elapsed with the attack still standing.
    TimedOut,
}

/// Run one scenario to completion.
pub fn run<W: Write>(
    config: &PhantomConfig,
    sink: &mut CsvSink<W>,
) -> Result<RunOutcome, Box<dyn Error>> {
    let mut host = ScriptedHost::new(&config.scenario);
    let mut engine = AttackEngine::new(config.engine, &mut host)?;

    info!(
        "ghost broadcasting as mode S {} / {}",
        config.scenario.ghost_mode_s_hex, config.scenario.ghost_tail
    );

    let max_ticks = (config.scenario.max_sim_secs * TICK_RATE as f64).ceil() as u64;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. The host flies the target, so the engine reads a fresh sample
        host.fly_target(DT);

        // 2. Scripted operator: report the RA once its time arrives
        if let Some(trigger_secs) = config.scenario.ra_trigger_secs {
            if !engine.ra_observed() && engine.time().elapsed_secs + DT >= trigger_secs {
                engine.observe_ra();
            }
        }

        // 3. One engine tick
        let snapshot = engine.tick(&mut host, DT)?;

        // 4. Record it; the invalidating record closes the sink
        sink.record(&snapshot)?;
        if sink.closed() {
            info!(
                "attack invalidated after {:.1} s ({} ticks)",
                snapshot.time.elapsed_secs, snapshot.time.tick
            );
            return Ok(RunOutcome::Invalidated);
        }

        if snapshot.time.tick >= max_ticks {
            info!(
                "scenario limit reached after {:.1} s with the attack still valid",
                snapshot.time.elapsed_secs
            );
            return Ok(RunOutcome::TimedOut);
        }

        // 5. Realtime pacing: absolute deadlines, reset after a stall
        if config.scenario.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                next_tick_time = now;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;
    use phantom_sim::AttackConfig;

    /// Close crossing: ghost seeded 200 m out at 600 kt behind a slowly
    /// departing target invalidates within a couple of simulated seconds.
    fn quick_collapse_config() -> PhantomConfig {
        PhantomConfig {
            engine: AttackConfig {
                start_distance_m: 200.0,
                ghost_speed_kt: 600.0,
                ..Default::default()
            },
            scenario: ScenarioConfig {
                target_heading_deg: 0.0,
                target_speed_mps: 10.0,
                max_sim_secs: 30.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn lines(buffer: &[u8]) -> Vec<String> {
        String::from_utf8(buffer.to_vec())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_tick_duration_constant() {
        assert_eq!(TICK_DURATION.as_millis(), 100);
    }

    #[test]
    fn test_run_ends_invalidated_with_final_record() {
        let config = quick_collapse_config();
        let mut buffer = Vec::new();
        let mut sink = CsvSink::from_writer(&mut buffer).unwrap();

        let outcome = run(&config, &mut sink).unwrap();
        assert_eq!(outcome, RunOutcome::Invalidated);
        drop(sink);

        let lines = lines(&buffer);
        assert!(lines.len() > 2, "expected records before the collapse");

        let valid_flags: Vec<&str> = lines[1..]
            .iter()
            .map(|line| line.split(',').nth(21).unwrap())
            .collect();
        assert!(
            valid_flags[..valid_flags.len() - 1].iter().all(|f| *f == "true"),
            "every record but the last must be valid"
        );
        assert_eq!(*valid_flags.last().unwrap(), "false", "the final record is the invalid one");
    }

    #[test]
    fn test_run_times_out_when_geometry_holds() {
        let mut config = quick_collapse_config();
        // too slow to ever cross the ring inside the window
        config.engine.ghost_speed_kt = 5.0;
        config.scenario.max_sim_secs = 2.0;

        let mut buffer = Vec::new();
        let mut sink = CsvSink::from_writer(&mut buffer).unwrap();
        let outcome = run(&config, &mut sink).unwrap();
        assert_eq!(outcome, RunOutcome::TimedOut);
        drop(sink);

        // header plus one record per tick of the full window
        assert_eq!(lines(&buffer).len() as u64, 1 + 20);
    }

    #[test]
    fn test_scripted_ra_lands_in_the_log() {
        let mut config = quick_collapse_config();
        // keep the geometry alive past the trigger
        config.engine.ghost_speed_kt = 5.0;
        config.scenario.max_sim_secs = 2.0;
        config.scenario.ra_trigger_secs = Some(1.0);

        let mut buffer = Vec::new();
        let mut sink = CsvSink::from_writer(&mut buffer).unwrap();
        run(&config, &mut sink).unwrap();
        drop(sink);

        let lines = lines(&buffer);
        let ra_flags: Vec<&str> = lines[1..]
            .iter()
            .map(|line| line.split(',').nth(22).unwrap())
            .collect();

        // ticks 1..=9 run before the trigger, tick 10 carries it
        assert!(ra_flags[..9].iter().all(|f| *f == "false"));
        assert!(
            ra_flags[9..].iter().all(|f| *f == "true"),
            "RA flag must be set from 1.0 s onward and stay set"
        );
    }
}
