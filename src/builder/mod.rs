//! Staged construction of complex products.
//!
//! A builder accumulates a product across ordered step calls and hands it
//! over when asked. The lifecycle is:
//!
//! ```text
//! Empty --step--> PartiallyBuilt(steps) --step--> PartiallyBuilt(steps')
//!   |                   |
//!   +------build--------+--> Complete --step/reset--> ...
//! ```
//!
//! Builders do **not** check that any particular step ran before `build()`.
//! Skipped parts come back unset; checking [`VehicleBuilder::state`] before
//! building is the caller's job.

use std::collections::BTreeSet;
use std::fmt;

use crate::product::{Car, Engine, Gps, Manual, SoundSystem};

mod director;

pub use director::{DirectedProvider, Director, Recipe};

/// Identifies one builder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum StepId {
    Engine,
    Seats,
    Gps,
    Sunroof,
    SoundSystem,
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepId::Engine => "engine",
            StepId::Seats => "seats",
            StepId::Gps => "gps",
            StepId::Sunroof => "sunroof",
            StepId::SoundSystem => "sound_system",
        };
        f.write_str(label)
    }
}

/// Observable state of a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildState {
    Empty,
    PartiallyBuilt(BTreeSet<StepId>),
    /// The product was handed over and no step has run since.
    Complete,
}

/// Accumulating state of a builder: the partial product plus the steps
/// that have contributed to it.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{BuildSpec, BuildState, Car, StepId};
///
/// let mut spec = BuildSpec::<Car>::new();
/// assert_eq!(spec.state(), BuildState::Empty);
///
/// spec.record(StepId::Seats, |car| car.seats = Some(2));
/// spec.record(StepId::Seats, |car| car.seats = Some(4));
/// assert_eq!(spec.steps_done().len(), 1);
///
/// let car = spec.finish();
/// assert_eq!(car.seats, Some(4));
/// assert_eq!(spec.state(), BuildState::Complete);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildSpec<P> {
    product: P,
    steps_done: BTreeSet<StepId>,
    completed: bool,
}

impl<P: Default> BuildSpec<P> {
    pub fn new() -> Self {
        Self {
            product: P::default(),
            steps_done: BTreeSet::new(),
            completed: false,
        }
    }

    /// Applies one step. The closure must overwrite whatever the step
    /// contributed before, so repeating a step replaces rather than stacks.
    pub fn record(&mut self, step: StepId, apply: impl FnOnce(&mut P)) {
        self.completed = false;
        apply(&mut self.product);
        self.steps_done.insert(step);
        tracing::trace!(target: "ferrous_provision", step = %step, "builder step applied");
    }

    pub fn steps_done(&self) -> &BTreeSet<StepId> {
        &self.steps_done
    }

    pub fn has_run(&self, step: StepId) -> bool {
        self.steps_done.contains(&step)
    }

    pub fn state(&self) -> BuildState {
        if self.completed {
            BuildState::Complete
        } else if self.steps_done.is_empty() {
            BuildState::Empty
        } else {
            BuildState::PartiallyBuilt(self.steps_done.clone())
        }
    }

    /// Discards any partial product and returns to `Empty`.
    pub fn reset(&mut self) {
        self.product = P::default();
        self.steps_done.clear();
        self.completed = false;
    }

    /// Hands the product over and leaves the spec in `Complete`.
    pub fn finish(&mut self) -> P {
        self.steps_done.clear();
        self.completed = true;
        std::mem::take(&mut self.product)
    }
}

/// Step operations shared by every vehicle builder.
///
/// Each setter overwrites its previous contribution. [`build`](Self::build)
/// transfers the product to the caller; no step is mandatory.
///
/// Builders are single-owner: concurrent step calls on one instance must be
/// serialized by the caller, which `&mut self` already enforces.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{CarBuilder, Engine, VehicleBuilder};
///
/// let mut builder = CarBuilder::new();
/// builder.set_engine(Engine::new(2.0));
/// builder.set_seats(4);
///
/// let car = builder.build();
/// assert_eq!(car.seats, Some(4));
/// // Skipped steps stay at their defaults; this is not an error.
/// assert!(car.gps.is_none());
/// assert!(!car.sunroof);
/// assert!(car.sound_system.is_none());
/// ```
pub trait VehicleBuilder {
    type Output;

    fn reset(&mut self);

    fn set_engine(&mut self, engine: Engine);

    fn set_seats(&mut self, seats: u8);

    fn set_gps(&mut self, gps: Gps);

    fn set_sunroof(&mut self, sunroof: bool);

    fn set_sound_system(&mut self, sound: SoundSystem);

    fn state(&self) -> BuildState;

    /// Returns the product as assembled so far, without validation.
    fn build(&mut self) -> Self::Output;
}

/// Builds [`Car`]s.
#[derive(Debug, Default)]
pub struct CarBuilder {
    spec: BuildSpec<Car>,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VehicleBuilder for CarBuilder {
    type Output = Car;

    fn reset(&mut self) {
        self.spec.reset();
    }

    fn set_engine(&mut self, engine: Engine) {
        self.spec.record(StepId::Engine, |car| car.engine = Some(engine));
    }

    fn set_seats(&mut self, seats: u8) {
        self.spec.record(StepId::Seats, |car| car.seats = Some(seats));
    }

    fn set_gps(&mut self, gps: Gps) {
        self.spec.record(StepId::Gps, |car| car.gps = Some(gps));
    }

    fn set_sunroof(&mut self, sunroof: bool) {
        self.spec.record(StepId::Sunroof, |car| car.sunroof = sunroof);
    }

    fn set_sound_system(&mut self, sound: SoundSystem) {
        self.spec.record(StepId::SoundSystem, |car| car.sound_system = Some(sound));
    }

    fn state(&self) -> BuildState {
        self.spec.state()
    }

    fn build(&mut self) -> Car {
        self.spec.finish()
    }
}

/// Builds the [`Manual`] matching a car configuration.
#[derive(Debug, Default)]
pub struct ManualBuilder {
    spec: BuildSpec<Manual>,
}

impl ManualBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&mut self, step: StepId, text: String) {
        self.spec.record(step, |manual| {
            manual.sections.insert(step, text);
        });
    }
}

impl VehicleBuilder for ManualBuilder {
    type Output = Manual;

    fn reset(&mut self) {
        self.spec.reset();
    }

    fn set_engine(&mut self, engine: Engine) {
        self.write(StepId::Engine, format!("Engine: {:.1}L", engine.volume));
    }

    fn set_seats(&mut self, seats: u8) {
        self.write(StepId::Seats, format!("Seats: {seats}"));
    }

    fn set_gps(&mut self, gps: Gps) {
        let text = if gps.routes.is_empty() {
            "GPS: installed".to_string()
        } else {
            format!("GPS: installed, routes {}", gps.routes.join(", "))
        };
        self.write(StepId::Gps, text);
    }

    fn set_sunroof(&mut self, sunroof: bool) {
        let text = if sunroof { "Sunroof: yes" } else { "Sunroof: no" };
        self.write(StepId::Sunroof, text.to_string());
    }

    fn set_sound_system(&mut self, sound: SoundSystem) {
        let text = match sound {
            SoundSystem::Standard => "Sound: standard".to_string(),
            SoundSystem::Premium { speakers } => format!("Sound: premium, {speakers} speakers"),
        };
        self.write(StepId::SoundSystem, text);
    }

    fn state(&self) -> BuildState {
        self.spec.state()
    }

    fn build(&mut self) -> Manual {
        self.spec.finish()
    }
}
