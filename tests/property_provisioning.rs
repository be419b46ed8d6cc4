/// Property-based tests for the provisioning components
///
/// These tests use proptest to generate random inputs and verify invariants
/// that should hold for every factory, registry and builder.

use ferrous_provision::{
    CarBuilder, Circle, Director, Engine, FamilyCatalog, GuiFactory, ManualBuilder,
    PrototypeRegistry, ProvisionError, Recipe, Shape, ShapeFactory, ShapeKind, Style,
    VehicleBuilder,
};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

fn any_recipe() -> impl Strategy<Value = Recipe> {
    prop::sample::select(Recipe::ALL.to_vec())
}

// Property: every valid discriminator yields the matching variant
proptest! {
    #[test]
    fn keyed_factory_maps_kind_to_variant(kinds in prop::collection::vec(any_kind(), 1..20)) {
        let factory = ShapeFactory::registry();

        for kind in kinds {
            let shape = factory.create(&kind)?;
            prop_assert_eq!(shape.kind(), kind);
        }
    }
}

// Property: any name outside the closed set is rejected with the trimmed name
proptest! {
    #[test]
    fn unknown_names_are_unsupported(name in "[a-z]{1,12}") {
        prop_assume!(ShapeKind::ALL.iter().all(|k| k.as_str() != name));

        let result = ShapeFactory::new().create_named(&name);
        prop_assert_eq!(result.err(), Some(ProvisionError::UnsupportedVariant(name)));
    }
}

// Property: a clone matches its source at clone time and diverges independently after
proptest! {
    #[test]
    fn clone_is_deep(
        radius in 0.1f64..100.0,
        tags in prop::collection::vec("[a-z]{1,6}", 0..5),
        factor in 1.5f64..10.0,
        extra in "[a-z]{1,6}",
    ) {
        let mut style = Style::new("teal");
        style.tags = tags.clone();
        let mut source: Box<dyn Shape> = Box::new(Circle { radius, style });

        let mut copy = source.clone();
        prop_assert_eq!(copy.render(), source.render());
        prop_assert_eq!(&copy.style().tags, &tags);

        source.scale(factor);
        source.style_mut().tags.push(extra.clone());
        prop_assert_eq!(&copy.style().tags, &tags);
        prop_assert!((copy.area() - std::f64::consts::PI * radius * radius).abs() < 1e-9);

        copy.style_mut().color = extra;
        prop_assert_eq!(source.style().color.as_str(), "teal");
    }
}

// Property: registry clones never share state with the template
proptest! {
    #[test]
    fn registry_templates_survive_mutation(rounds in 1usize..10) {
        let mut registry: PrototypeRegistry<Box<dyn Shape>> = PrototypeRegistry::new();
        registry.register("dot", Box::new(Circle::new(1.0)));

        for _ in 0..rounds {
            let mut copy = registry.create_from_template("dot")?;
            copy.scale(2.0);
            copy.style_mut().tags.push("used".into());
        }

        let pristine = registry.create_from_template("dot")?;
        prop_assert_eq!(pristine.render(), "Circle(radius=1.00, color=black)");
        prop_assert!(pristine.style().tags.is_empty());
    }
}

// Property: director recipes are reproducible regardless of prior builder use
proptest! {
    #[test]
    fn director_recipes_are_reproducible(
        recipe in any_recipe(),
        noise_seats in 0u8..10,
        noise_volume in 0.5f64..6.0,
    ) {
        let director = Director::new();

        let mut used = CarBuilder::new();
        used.set_seats(noise_seats);
        used.set_engine(Engine::new(noise_volume));

        let from_used = director.construct(recipe, &mut used);
        let from_fresh = director.construct(recipe, &mut CarBuilder::new());
        prop_assert_eq!(from_used, from_fresh);

        let manual_a = director.construct(recipe, &mut ManualBuilder::new());
        let manual_b = director.construct(recipe, &mut ManualBuilder::new());
        prop_assert_eq!(manual_a.sections.len(), recipe.steps().len());
        prop_assert_eq!(manual_a, manual_b);
    }
}

// Property: family factories never mix tags, however many products are requested
proptest! {
    #[test]
    fn family_tags_never_mix(picks in prop::collection::vec(any::<bool>(), 1..30)) {
        let catalog = FamilyCatalog::with_defaults();

        for tag in catalog.families() {
            let factory = catalog.factory(tag.as_str())?;
            for &button in &picks {
                let family = if button {
                    factory.create_button().family().clone()
                } else {
                    factory.create_checkbox().family().clone()
                };
                prop_assert_eq!(&family, &tag);
                prop_assert_eq!(factory.family(), &tag);
            }
        }
    }
}
