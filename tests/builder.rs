use ferrous_provision::{
    BuildState, Car, CarBuilder, DirectedProvider, Director, Engine, Gps, ManualBuilder, Product,
    Provider, Recipe, SoundSystem, StepId, VehicleBuilder,
};
use std::collections::BTreeSet;

#[test]
fn test_partial_build_leaves_optional_parts_unset() {
    let mut builder = CarBuilder::new();
    builder.set_engine(Engine::new(1.8));
    builder.set_seats(4);

    let car = builder.build();

    assert_eq!(car.engine, Some(Engine::new(1.8)));
    assert_eq!(car.seats, Some(4));
    assert!(car.gps.is_none());
    assert!(!car.sunroof);
    assert!(car.sound_system.is_none());
}

#[test]
fn test_build_without_any_step_is_not_an_error() {
    let mut builder = CarBuilder::new();
    assert_eq!(builder.build(), Car::default());
}

#[test]
fn test_director_recipes_apply_their_steps() {
    let director = Director::new();

    let basic = director.construct(Recipe::Basic, &mut CarBuilder::new());
    assert!(basic.engine.is_some());
    assert_eq!(basic.seats, Some(5));
    assert!(basic.gps.is_none());
    assert!(!basic.sunroof);

    let full = director.construct(Recipe::Full, &mut CarBuilder::new());
    assert_eq!(full.gps, Some(Gps::with_routes(["home", "work"])));
    assert!(full.sunroof);
    assert_eq!(full.sound_system, Some(SoundSystem::Premium { speakers: 8 }));
}

#[test]
fn test_director_is_reproducible_on_fresh_builders() {
    let director = Director::new();

    for recipe in Recipe::ALL {
        let a = director.construct(recipe, &mut CarBuilder::new());
        let b = director.construct(recipe, &mut CarBuilder::new());
        assert_eq!(a, b, "car recipe {recipe} diverged");

        let m1 = director.construct(recipe, &mut ManualBuilder::new());
        let m2 = director.construct(recipe, &mut ManualBuilder::new());
        assert_eq!(m1, m2, "manual recipe {recipe} diverged");
    }
}

#[test]
fn test_director_resets_a_used_builder() {
    let director = Director::new();
    let mut builder = CarBuilder::new();
    builder.set_sunroof(true);
    builder.set_sound_system(SoundSystem::Standard);

    let car = director.construct(Recipe::Basic, &mut builder);
    let fresh = director.construct(Recipe::Basic, &mut CarBuilder::new());

    assert_eq!(car, fresh);
}

#[test]
fn test_manual_matches_recipe() {
    let manual = Director::new().construct(Recipe::Sports, &mut ManualBuilder::new());

    assert_eq!(manual.section(StepId::Engine), Some("Engine: 3.0L"));
    assert_eq!(manual.section(StepId::Seats), Some("Seats: 2"));
    assert_eq!(manual.section(StepId::Gps), Some("GPS: installed, routes home, work"));
    assert_eq!(manual.section(StepId::Sunroof), None);
    assert_eq!(manual.render(), manual.describe());
    assert_eq!(manual.describe().lines().count(), Recipe::Sports.steps().len());
}

#[test]
fn test_recipe_steps() {
    assert_eq!(Recipe::Basic.steps(), &[StepId::Engine, StepId::Seats]);
    assert_eq!(Recipe::Full.steps().len(), 5);
    assert_eq!(Recipe::Full.to_string(), "full");
}

#[test]
fn test_state_reports_steps_done() {
    let mut builder = ManualBuilder::new();
    assert_eq!(builder.state(), BuildState::Empty);

    builder.set_gps(Gps::default());
    builder.set_gps(Gps::with_routes(["coast"]));
    builder.set_seats(3);

    let expected: BTreeSet<_> = [StepId::Gps, StepId::Seats].into_iter().collect();
    assert_eq!(builder.state(), BuildState::PartiallyBuilt(expected));

    let manual = builder.build();
    assert_eq!(manual.section(StepId::Gps), Some("GPS: installed, routes coast"));
    assert_eq!(builder.state(), BuildState::Complete);
}

#[test]
fn test_builder_behind_trait_object() {
    let mut builder: Box<dyn VehicleBuilder<Output = Car>> = Box::new(CarBuilder::new());
    let car = Director::new().construct(Recipe::Sports, builder.as_mut());

    assert_eq!(car.seats, Some(2));
    assert!(car.render().contains("gps=true"));
}

#[test]
fn test_directed_provider_uses_fresh_builders() {
    let cars = DirectedProvider::<CarBuilder>::new();
    let manuals = DirectedProvider::<ManualBuilder>::default();

    let first = cars.provide(&Recipe::Full).unwrap();
    let second = cars.provide(&Recipe::Full).unwrap();
    assert_eq!(first, second);

    let manual = manuals.provide(&Recipe::Basic).unwrap();
    assert_eq!(manual.sections.len(), 2);
}

#[test]
fn test_cars_are_independent_after_build() {
    let mut builder = CarBuilder::new();
    builder.set_engine(Engine::new(2.0));
    let mut first = builder.build();
    builder.set_engine(Engine::new(2.0));
    let second = builder.build();

    first.drive(120.0);
    assert_eq!(first.engine.map(|e| e.mileage), Some(120.0));
    assert_eq!(second.engine.map(|e| e.mileage), Some(0.0));
}
