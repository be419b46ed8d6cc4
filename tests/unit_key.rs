// Unit tests for discriminators, lifetimes and descriptors

use ferrous_provision::{
    Discriminator, KeyedFactory, Lifetime, Product, ProvisionError, ShapeFactory, ShapeKind,
    Circle,
};

#[test]
fn test_shape_kind_parse_is_case_insensitive() {
    assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
    assert_eq!("Square".parse::<ShapeKind>(), Ok(ShapeKind::Square));
    assert_eq!("\tRECTANGLE\n".parse::<ShapeKind>(), Ok(ShapeKind::Rectangle));
}

#[test]
fn test_shape_kind_parse_rejects_near_misses() {
    for raw in ["circles", "rect", "", "squ are"] {
        assert_eq!(
            raw.parse::<ShapeKind>(),
            Err(ProvisionError::UnsupportedVariant(raw.trim().to_string())),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_shape_kind_display_round_trips_labels() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_string_and_integer_discriminators() {
    fn is_discriminator<K: Discriminator>(_: &K) {}
    is_discriminator(&"plugin".to_string());
    is_discriminator(&7u32);

    let mut by_id: KeyedFactory<u32, dyn Product> = KeyedFactory::new();
    by_id.register(7, || Box::new(Circle::default()));
    assert_eq!(by_id.create(&7).unwrap().name(), "Circle");
    assert_eq!(
        by_id.create(&8).unwrap_err(),
        ProvisionError::UnsupportedVariant("8".to_string())
    );
}

#[test]
fn test_lifetime_ownership() {
    assert!(Lifetime::Transient.is_caller_owned());
    assert!(Lifetime::Cloned.is_caller_owned());
    assert!(!Lifetime::Singleton.is_caller_owned());
    assert_eq!(Lifetime::Singleton.to_string(), "singleton");
}

#[test]
fn test_factory_descriptors() {
    let descriptors = ShapeFactory::registry().descriptors();

    assert_eq!(descriptors.len(), 3);
    assert!(descriptors.iter().all(|d| d.source == "keyed_factory"));
    assert!(descriptors.iter().all(|d| d.product_type().contains("Shape")));
    assert_eq!(descriptors[1].label, "rectangle");
}
