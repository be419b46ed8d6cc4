#![no_main]

use ferrous_provision::{
    FamilyCatalog, GuiFactory, PrototypeRegistry, ProvisionError, Shape, ShapeFactory,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    // Lookups either succeed or report the trimmed input back, never panic.
    match ShapeFactory::new().create_named(name) {
        Ok(shape) => assert!(shape.area() > 0.0),
        Err(ProvisionError::UnsupportedVariant(reported)) => assert_eq!(reported, name.trim()),
        Err(other) => panic!("unexpected error: {other}"),
    }

    let catalog = FamilyCatalog::with_defaults();
    if let Ok(factory) = catalog.factory(name) {
        assert!(factory.family().matches(name));
    }

    let mut registry: PrototypeRegistry<String> = PrototypeRegistry::new();
    registry.register("known", "value".to_string());
    match registry.create_from_template(name) {
        Ok(copy) => assert_eq!(copy, "value"),
        Err(error) => assert_eq!(error, ProvisionError::TemplateNotFound(name.to_string())),
    }
});
