//! grid: runs the musical behavior on a small simulated array.
//!
//! Renders two simulated minutes at 30 fps into an in-memory frame buffer,
//! dumps every frame to CSV under `output/grid/`, and prints an ASCII view of
//! the array every few seconds.  The wall clock is fast-forwarded in step
//! with the frame loop, so highlights move every 30 simulated seconds
//! instead of every 30 real ones.
//!
//! Set `RUST_LOG=debug` to see each reselection.

mod array;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use ba_behavior::{FrameBuffer, MusicalBuilder, ScanOrder};
use ba_core::{Frame, GridPos, ManualClock, SimConfig};
use ba_output::{CsvWriter, FrameOutputObserver};
use ba_sim::{SimBuilder, SimObserver};

use array::{HEIGHT, WIDTH, build_array};

// ── Constants ─────────────────────────────────────────────────────────────────

const FPS:                   f64 = 30.0;
const SIM_SECS:              u64 = 120;
const SEED:                  u64 = 42;
const OUTPUT_INTERVAL:       u64 = 3;   // 10 frames per simulated second
const PRINT_INTERVAL_FRAMES: u64 = 300; // one ASCII frame every 10 s

// ── Observer ──────────────────────────────────────────────────────────────────

/// Keeps the wall clock in step with the frame loop, forwards frames to the
/// CSV observer, and prints the occasional frame.
struct DemoObserver {
    inner:      FrameOutputObserver<CsvWriter>,
    clock:      ManualClock,
    frame_secs: f64,
    reported:   usize,
}

impl SimObserver for DemoObserver {
    fn on_frame_start(&mut self, _frame: Frame) {
        self.clock.advance(self.frame_secs);
    }

    fn on_frame_end(&mut self, frame: Frame, time: f64, buffer: &FrameBuffer) {
        self.reported += 1;
        self.inner.on_frame_end(frame, time, buffer);
        if frame.0.is_multiple_of(PRINT_INTERVAL_FRAMES) {
            print_frame(frame, time, buffer);
        }
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

/// `#` full brightness, `+`/`.` breathing, ` ` dark, `@` sounding.
fn print_frame(frame: Frame, time: f64, buffer: &FrameBuffer) {
    println!("{frame} @ {time:6.2}s");
    for y in 0..buffer.height() as i32 {
        let row: String = (0..buffer.width() as i32)
            .map(|x| {
                let pos = GridPos::new(x, y);
                let b = buffer.brightness_at(pos).unwrap_or(0.0);
                let v = buffer.volume_at(pos).unwrap_or(0.0);
                match (v > 0.0, b) {
                    (true, _)                 => '@',
                    (false, b) if b >= 1.0    => '#',
                    (false, b) if b >= 0.5    => '+',
                    (false, b) if b > 0.0     => '.',
                    _                         => ' ',
                }
            })
            .collect();
        println!("  |{row}|");
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    println!("=== grid: babel_array musical behavior ===");
    println!("Array: {WIDTH}x{HEIGHT}  |  {SIM_SECS} s at {FPS} fps  |  Seed: {SEED}");
    println!();

    // 1. Layout and catalog.
    let (layout, catalog) = build_array()?;

    // 2. Run configuration.
    let config = SimConfig {
        seed: SEED,
        output_interval_frames: OUTPUT_INTERVAL,
        ..SimConfig::at_fps(FPS, SIM_SECS * FPS as u64)
    };

    // 3. Behavior, shuffled from the run seed and reading a wall clock we
    //    drive from the frame loop.
    let clock = ManualClock::default();
    let behavior = MusicalBuilder::from_catalog(layout.clone(), &catalog)
        .scan_order(ScanOrder::shuffled(config.seed))
        .clock(clock.clone())
        .build()?;
    info!(pool = behavior.pool().len(), seed = config.seed, "musical behavior ready");

    let mut sim = SimBuilder::new(config.clone(), behavior).layout(&layout).build()?;

    // 4. Output.
    std::fs::create_dir_all("output/grid")?;
    let writer = CsvWriter::new(Path::new("output/grid"))?;
    let mut obs = DemoObserver {
        inner:      FrameOutputObserver::new(writer),
        clock,
        frame_secs: config.frame_secs,
        reported:   0,
    };

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  frames rendered     : {}", sim.current_frame.0);
    println!("  frames written      : {}", obs.reported);
    println!("  reselections        : {}", sim.behavior.reselections());
    println!("  final highlights    : {:?}", sim.behavior.highlighted());

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
