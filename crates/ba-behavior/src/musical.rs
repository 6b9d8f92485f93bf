//! The musical behavior: a few well-separated units breathe and sing.
//!
//! Every `transition_delay` seconds of *wall-clock* time the behavior picks
//! up to `num_to_highlight` units from its musical pool, each at least
//! `min_distance` from the others.  Each frame, every highlighted unit plays
//! at full volume and pulses with a breathing envelope driven by the
//! *simulation* clock, surrounded by a halo of four fully lit neighbours.
//!
//! The two clocks are independent: pausing or fast-forwarding the frame loop
//! changes the breathing, not how often the highlights move.

use std::f64::consts::TAU;
use std::sync::Arc;

use ba_core::{ParamSet, SystemClock, UnitId, WallClock};
use ba_layout::{Layout, MUSICAL_GROUP, UnitCatalog};
use tracing::debug;

use crate::selector::{ScanOrder, select_distant_units};
use crate::{Behavior, BehaviorError, BehaviorResult, BehaviorState, OutputSink};

pub const NUM_TO_HIGHLIGHT: &str = "num_to_highlight";
pub const MIN_DISTANCE: &str = "min_distance";
pub const BREATHING_PERIOD: &str = "breathing_period";
/// Wall-clock seconds between switching highlighted units.
pub const TRANSITION_DELAY: &str = "transition_delay";

const DEFAULTS: [(&str, f64); 4] = [
    (NUM_TO_HIGHLIGHT, 3.0),
    (MIN_DISTANCE, 5.0),
    (BREATHING_PERIOD, 3.0),
    (TRANSITION_DELAY, 30.0),
];

/// Breathing envelope: `(1 + sin(2π · time / period)) / 2`.
///
/// Oscillates within `[0, 1]`, starting at 0.5 and peaking a quarter period
/// in.
#[inline]
pub fn breathing(time: f64, period: f64) -> f64 {
    (1.0 + (TAU * time / period).sin()) / 2.0
}

// ── MusicalParams ─────────────────────────────────────────────────────────────

/// Validated, typed view of the musical parameter set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MusicalParams {
    pub num_to_highlight: usize,
    pub min_distance:     f64,
    pub breathing_period: f64,
    pub transition_delay: f64,
}

impl MusicalParams {
    /// The default parameter set.
    pub fn defaults() -> ParamSet {
        ParamSet::from_defaults(DEFAULTS)
    }

    pub fn from_params(params: &ParamSet) -> BehaviorResult<Self> {
        let count = params.require(NUM_TO_HIGHLIGHT)?;
        let whole = count >= 0.0 && count.fract() == 0.0 && count <= f64::from(u32::MAX);
        if !whole {
            return Err(BehaviorError::Config(format!(
                "{NUM_TO_HIGHLIGHT} must be a non-negative integer, got {count}"
            )));
        }

        let min_distance = params.require(MIN_DISTANCE)?;
        if min_distance.is_nan() || min_distance < 0.0 {
            return Err(BehaviorError::Config(format!(
                "{MIN_DISTANCE} must be non-negative, got {min_distance}"
            )));
        }

        let breathing_period = positive(params, BREATHING_PERIOD)?;
        let transition_delay = positive(params, TRANSITION_DELAY)?;

        Ok(Self {
            num_to_highlight: count as usize,
            min_distance,
            breathing_period,
            transition_delay,
        })
    }
}

fn positive(params: &ParamSet, name: &str) -> BehaviorResult<f64> {
    let value = params.require(name)?;
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(BehaviorError::Config(format!("{name} must be a positive number of seconds, got {value}")))
    }
}

// ── MusicalBehavior ───────────────────────────────────────────────────────────

/// Highlights a sparse, separated subset of the musical units.
///
/// Build with [`MusicalBuilder`].
pub struct MusicalBehavior<L: Layout, C: WallClock = SystemClock> {
    state:          BehaviorState,
    settings:       MusicalParams,
    layout:         L,
    clock:          C,
    order:          ScanOrder,
    /// Eligible units, fixed at construction.
    pool:           Arc<[UnitId]>,
    /// Current highlights; replaced wholesale by `reselect`.
    highlighted:    Arc<[UnitId]>,
    /// Wall-clock reading of the last reselection.
    highlight_time: Option<f64>,
    reselections:   u64,
}

impl<L: Layout, C: WallClock> MusicalBehavior<L, C> {
    /// Replace the highlight set with up to `count` units picked from the
    /// pool, each `min_distance` from the ones picked before it.
    pub fn reselect(&mut self, count: usize) {
        let picked = select_distant_units(
            &self.pool,
            count,
            self.settings.min_distance,
            &self.layout,
            &mut self.order,
        );
        self.reselections += 1;
        debug!(
            requested  = count,
            selected   = picked.len(),
            generation = self.reselections,
            "musical highlights reselected"
        );
        self.highlighted = picked.into();
    }

    /// Snapshot of the current highlights, in render order.
    pub fn highlighted(&self) -> Arc<[UnitId]> {
        Arc::clone(&self.highlighted)
    }

    /// The candidate pool.
    pub fn pool(&self) -> &[UnitId] {
        &self.pool
    }

    pub fn settings(&self) -> &MusicalParams {
        &self.settings
    }

    /// How many times the highlight set has been replaced.
    pub fn reselections(&self) -> u64 {
        self.reselections
    }

    /// Wall-clock reading of the last reselection, if any.
    pub fn highlight_time(&self) -> Option<f64> {
        self.highlight_time
    }

    fn due_for_reselection(&self, now: f64) -> bool {
        match self.highlight_time {
            None => true,
            Some(last) => now - last > self.settings.transition_delay,
        }
    }
}

impl<L: Layout, C: WallClock> Behavior for MusicalBehavior<L, C> {
    fn name(&self) -> &'static str {
        "musical"
    }

    fn state(&self) -> &BehaviorState {
        &self.state
    }

    fn update(&mut self, elapsed: f64) {
        self.state.advance(elapsed);

        let now = self.clock.now_secs();
        if self.due_for_reselection(now) {
            self.reselect(self.settings.num_to_highlight);
            self.highlight_time = Some(now);
        }
    }

    fn render(&self, sink: &mut dyn OutputSink) {
        sink.zero_brightness();
        sink.zero_volume();

        let level = breathing(self.state.time(), self.settings.breathing_period);

        for &unit in self.highlighted.iter() {
            let Some(center) = self.layout.position_of(unit) else {
                continue;
            };

            sink.set_volume(center, 1.0);
            sink.set_brightness(center, level);

            for halo in center.neighbors() {
                sink.set_brightness(halo, 1.0);
            }
        }
    }
}

// ── MusicalBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for [`MusicalBehavior`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                         |
/// |----------------------|---------------------------------|
/// | `.param(name, v)`    | the values in [`MusicalParams::defaults`] |
/// | `.scan_order(o)`     | `ScanOrder::shuffled(0)`        |
/// | `.clock(c)`          | `SystemClock`                   |
///
/// # Example
///
/// ```rust,ignore
/// let behavior = MusicalBuilder::from_catalog(layout, &catalog)
///     .param("num_to_highlight", 4.0)
///     .scan_order(ScanOrder::shuffled(seed))
///     .build()?;
/// ```
pub struct MusicalBuilder<L: Layout, C: WallClock = SystemClock> {
    layout:    L,
    pool:      Vec<UnitId>,
    overrides: Vec<(String, f64)>,
    order:     ScanOrder,
    clock:     C,
}

impl<L: Layout> MusicalBuilder<L> {
    /// Start from an explicit candidate pool.
    pub fn new(layout: L, pool: impl IntoIterator<Item = UnitId>) -> Self {
        Self {
            layout,
            pool:      pool.into_iter().collect(),
            overrides: Vec::new(),
            order:     ScanOrder::default(),
            clock:     SystemClock::new(),
        }
    }

    /// Start from the catalog's musical group.  The catalog is queried once,
    /// here.
    pub fn from_catalog<U: UnitCatalog + ?Sized>(layout: L, catalog: &U) -> Self {
        Self::new(layout, catalog.units_in_group(MUSICAL_GROUP))
    }
}

impl<L: Layout, C: WallClock> MusicalBuilder<L, C> {
    /// Override one default parameter.  Unknown names fail at `build`.
    pub fn param(mut self, name: &str, value: f64) -> Self {
        self.overrides.push((name.to_owned(), value));
        self
    }

    pub fn scan_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// Swap the wall clock used for the reselection cadence.
    pub fn clock<C2: WallClock>(self, clock: C2) -> MusicalBuilder<L, C2> {
        MusicalBuilder {
            layout:    self.layout,
            pool:      self.pool,
            overrides: self.overrides,
            order:     self.order,
            clock,
        }
    }

    /// Validate parameters and the pool, and return a behavior with no
    /// highlights yet.
    pub fn build(self) -> BehaviorResult<MusicalBehavior<L, C>> {
        let params = MusicalParams::defaults()
            .with_overrides(self.overrides.iter().map(|(name, value)| (name.as_str(), *value)))?;
        let settings = MusicalParams::from_params(&params)?;

        if let Some(&missing) = self.pool.iter().find(|&&u| self.layout.position_of(u).is_none()) {
            return Err(BehaviorError::UnknownUnit(missing));
        }

        Ok(MusicalBehavior {
            state: BehaviorState::new(params),
            settings,
            layout: self.layout,
            clock: self.clock,
            order: self.order,
            pool: self.pool.into(),
            highlighted: Vec::<UnitId>::new().into(),
            highlight_time: None,
            reselections: 0,
        })
    }
}
