//! `ba-sim`: frame loop for the babel_array behavior engine.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① on_frame_start(frame)
//!   ② behavior.update(config.frame_secs)
//!   ③ behavior.render(&mut frame_buffer)
//!   ④ on_frame_end(frame, sim_time, &frame_buffer)   every output_interval_frames
//! on_sim_end(final_frame)
//! ```
//!
//! Everything runs on the calling thread; update and render never overlap.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ba_behavior::MusicalBuilder;
//! use ba_core::SimConfig;
//! use ba_sim::{NoopObserver, SimBuilder};
//!
//! let behavior = MusicalBuilder::from_catalog(layout.clone(), &catalog).build()?;
//! let mut sim = SimBuilder::new(SimConfig::at_fps(30.0, 900), behavior)
//!     .layout(&layout)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
