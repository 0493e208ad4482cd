use std::{env, thread, time::Duration};

use blinkcode::{
    hal::{Clock, Millis, PinState, SimPin, SystemClock},
    patterns, PatternPlayer,
};
use log::{info, warn};
use rand::Rng;

mod defaults {
    pub const UNIT_MS: u32 = 100;
    /// bounds of the simulated main loop period
    pub const TICK_MIN_MS: u64 = 1;
    pub const TICK_MAX_MS: u64 = 5;
}

struct Args {
    pattern: String,
    unit: Millis,
    restore: bool,
}

fn parse_args() -> Args {
    let mut args = env::args().skip(1);

    let pattern = args.next().unwrap_or_else(|| patterns::SOS.to_string());

    let unit = match args.next() {
        Some(raw) => match raw.parse::<Millis>() {
            Ok(unit) if unit > 0 => unit,
            _ => {
                warn!("bad unit `{}`, using {}ms", raw, defaults::UNIT_MS);
                defaults::UNIT_MS
            }
        },
        None => defaults::UNIT_MS,
    };

    let restore = match args.next().as_deref() {
        None | Some("false") | Some("0") => false,
        Some("true") | Some("1") | Some("restore") => true,
        Some(other) => {
            warn!("bad restore flag `{}`, not restoring", other);
            false
        }
    };

    Args {
        pattern,
        unit,
        restore,
    }
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let clock = SystemClock::new();
    let led = SimPin::new("led");
    let mut rng = rand::thread_rng();

    let mut player = PatternPlayer::new(led.clone(), &clock).expect("unable to claim pin");
    player
        .start(args.pattern.as_str(), args.unit, args.restore)
        .expect("unable to start pattern");

    let mut timeline = vec![(clock.now_ms(), led.level())];

    while player.is_active() {
        player.update().expect("pin write failed");

        let level = led.level();
        if timeline.last().map(|&(_, last)| last) != Some(level) {
            timeline.push((clock.now_ms(), level));
        }

        let tick = rng.gen_range(defaults::TICK_MIN_MS..=defaults::TICK_MAX_MS);
        thread::sleep(Duration::from_millis(tick));
    }

    info!(
        "`{}` done after {}ms, {} writes",
        args.pattern,
        clock.now_ms(),
        led.write_count()
    );

    for (at, level) in timeline {
        let mark = match level {
            PinState::High => "#",
            PinState::Low => "_",
        };
        println!("{:>6}ms {}", at, mark);
    }
}
