//! Named, reproducible builder recipes.

use std::fmt;
use std::marker::PhantomData;

use super::{StepId, VehicleBuilder};
use crate::error::ProvisionResult;
use crate::product::{Engine, Gps, SoundSystem};
use crate::traits::Provider;

/// A fixed, named sequence of builder steps.
///
/// Parameters are baked into the recipe, so running it twice on fresh
/// builders of the same type yields field-for-field equal products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Recipe {
    /// Engine and seats only.
    Basic,
    /// Two-seater with navigation.
    Sports,
    /// Every optional part.
    Full,
}

impl Recipe {
    pub const ALL: [Recipe; 3] = [Recipe::Basic, Recipe::Sports, Recipe::Full];

    pub fn name(self) -> &'static str {
        match self {
            Recipe::Basic => "basic",
            Recipe::Sports => "sports",
            Recipe::Full => "full",
        }
    }

    /// Steps in the order the director applies them.
    pub fn steps(self) -> &'static [StepId] {
        match self {
            Recipe::Basic => &[StepId::Engine, StepId::Seats],
            Recipe::Sports => &[StepId::Engine, StepId::Seats, StepId::Gps],
            Recipe::Full => &[
                StepId::Engine,
                StepId::Seats,
                StepId::Gps,
                StepId::Sunroof,
                StepId::SoundSystem,
            ],
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drives an injected builder through a [`Recipe`].
///
/// # Examples
///
/// ```
/// use ferrous_provision::{CarBuilder, Director, ManualBuilder, Recipe};
///
/// let director = Director::new();
///
/// let car = director.construct(Recipe::Basic, &mut CarBuilder::new());
/// assert!(car.engine.is_some());
/// assert!(car.gps.is_none());
///
/// let manual = director.construct(Recipe::Full, &mut ManualBuilder::new());
/// assert!(manual.describe().contains("Sunroof: yes"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Resets `builder`, applies every step of `recipe` in order and
    /// returns the built product.
    pub fn construct<B>(&self, recipe: Recipe, builder: &mut B) -> B::Output
    where
        B: VehicleBuilder + ?Sized,
    {
        builder.reset();
        for &step in recipe.steps() {
            Self::apply(recipe, step, builder);
        }
        tracing::debug!(
            target: "ferrous_provision",
            recipe = recipe.name(),
            steps = recipe.steps().len(),
            "director constructed product"
        );
        builder.build()
    }

    fn apply<B>(recipe: Recipe, step: StepId, builder: &mut B)
    where
        B: VehicleBuilder + ?Sized,
    {
        match step {
            StepId::Engine => builder.set_engine(Engine::new(match recipe {
                Recipe::Basic => 1.6,
                Recipe::Sports => 3.0,
                Recipe::Full => 2.5,
            })),
            StepId::Seats => builder.set_seats(match recipe {
                Recipe::Sports => 2,
                Recipe::Basic | Recipe::Full => 5,
            }),
            StepId::Gps => builder.set_gps(Gps::with_routes(["home", "work"])),
            StepId::Sunroof => builder.set_sunroof(true),
            StepId::SoundSystem => builder.set_sound_system(SoundSystem::Premium { speakers: 8 }),
        }
    }
}

/// [`Provider`] that runs a recipe on a fresh `B` for every request.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{CarBuilder, DirectedProvider, Provider, Recipe};
///
/// let cars = DirectedProvider::<CarBuilder>::new();
/// let a = cars.provide(&Recipe::Sports).unwrap();
/// let b = cars.provide(&Recipe::Sports).unwrap();
/// assert_eq!(a, b);
/// ```
pub struct DirectedProvider<B> {
    director: Director,
    _builder: PhantomData<fn() -> B>,
}

impl<B> DirectedProvider<B> {
    pub fn new() -> Self {
        Self {
            director: Director::new(),
            _builder: PhantomData,
        }
    }
}

impl<B> Default for DirectedProvider<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for DirectedProvider<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedProvider")
            .field("builder", &std::any::type_name::<B>())
            .finish()
    }
}

impl<B> Provider<Recipe> for DirectedProvider<B>
where
    B: VehicleBuilder + Default,
{
    type Output = B::Output;

    fn provide(&self, recipe: &Recipe) -> ProvisionResult<B::Output> {
        Ok(self.director.construct(*recipe, &mut B::default()))
    }
}
