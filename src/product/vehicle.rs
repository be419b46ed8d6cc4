//! Complex products assembled by [`VehicleBuilder`](crate::VehicleBuilder)s.
//!
//! Every part is optional. A product taken from a builder that skipped a
//! step simply has that part unset; nothing here validates completeness.

use std::collections::BTreeMap;

use crate::builder::StepId;
use crate::traits::Product;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    /// Displacement in litres.
    pub volume: f64,
    pub mileage: f64,
}

impl Engine {
    pub fn new(volume: f64) -> Self {
        Self {
            volume,
            mileage: 0.0,
        }
    }
}

/// Navigation unit with its preloaded routes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gps {
    pub routes: Vec<String>,
}

impl Gps {
    pub fn with_routes<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundSystem {
    Standard,
    Premium { speakers: u8 },
}

/// A car. Fields left at `None`/`false` were never configured.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Car {
    pub engine: Option<Engine>,
    pub seats: Option<u8>,
    pub gps: Option<Gps>,
    pub sunroof: bool,
    pub sound_system: Option<SoundSystem>,
}

impl Car {
    /// Adds distance to the odometer; no-op without an engine.
    pub fn drive(&mut self, km: f64) {
        if let Some(engine) = self.engine.as_mut() {
            engine.mileage += km;
        }
    }
}

impl Product for Car {
    fn name(&self) -> &str {
        "Car"
    }

    fn render(&self) -> String {
        let engine = self
            .engine
            .map(|e| format!("{:.1}L", e.volume))
            .unwrap_or_else(|| "none".to_string());
        let seats = self.seats.map(|s| s.to_string()).unwrap_or_else(|| "none".to_string());
        format!(
            "Car(engine={}, seats={}, gps={}, sunroof={}, sound={})",
            engine,
            seats,
            self.gps.is_some(),
            self.sunroof,
            match self.sound_system {
                Some(SoundSystem::Standard) => "standard".to_string(),
                Some(SoundSystem::Premium { speakers }) => format!("premium/{speakers}"),
                None => "none".to_string(),
            }
        )
    }
}

/// A user manual describing the configured parts of a car.
///
/// One section per builder step; re-running a step rewrites its section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manual {
    pub sections: BTreeMap<StepId, String>,
}

impl Manual {
    pub fn section(&self, step: StepId) -> Option<&str> {
        self.sections.get(&step).map(String::as_str)
    }

    /// All sections in step order, one per line.
    pub fn describe(&self) -> String {
        self.sections
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Product for Manual {
    fn name(&self) -> &str {
        "Manual"
    }

    fn render(&self) -> String {
        self.describe()
    }
}
