use ferrous_provision::{
    Circle, KeyedFactory, Lifetime, LoggingObserver, PrototypeRegistry, ProvisionConfig,
    ProvisionError, ProvisionEvent, ProvisionObserver, Shape, ShapeFactory, ShapeKind,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingObserver {
    created: Mutex<Vec<(&'static str, String, Lifetime)>>,
    failed: Mutex<Vec<(&'static str, ProvisionError)>>,
}

impl ProvisionObserver for RecordingObserver {
    fn created(&self, event: &ProvisionEvent) {
        self.created
            .lock()
            .unwrap()
            .push((event.source, event.variant.clone(), event.lifetime));
    }

    fn failed(&self, source: &'static str, error: &ProvisionError) {
        self.failed.lock().unwrap().push((source, error.clone()));
    }
}

#[test]
fn test_factory_reports_creations_and_failures() {
    let observer = Arc::new(RecordingObserver::default());
    let mut factory: KeyedFactory<ShapeKind, dyn Shape> = KeyedFactory::new();
    factory
        .register(ShapeKind::Circle, || Box::new(Circle::default()))
        .add_observer(observer.clone());

    factory.create(&ShapeKind::Circle).unwrap();
    factory.create(&ShapeKind::Square).unwrap_err();

    let created = observer.created.lock().unwrap();
    assert_eq!(
        *created,
        vec![("keyed_factory", "circle".to_string(), Lifetime::Transient)]
    );

    let failed = observer.failed.lock().unwrap();
    assert_eq!(
        *failed,
        vec![(
            "keyed_factory",
            ProvisionError::UnsupportedVariant("square".to_string())
        )]
    );
}

#[test]
fn test_registry_reports_clones() {
    let observer = Arc::new(RecordingObserver::default());
    let mut registry: PrototypeRegistry<String> = PrototypeRegistry::new();
    registry.register("motd", "welcome".to_string());
    registry.add_observer(observer.clone());

    registry.create_from_template("motd").unwrap();
    registry.create_from_template("missing").unwrap_err();

    assert_eq!(
        observer.created.lock().unwrap()[0],
        ("prototype_registry", "motd".to_string(), Lifetime::Cloned)
    );
    assert_eq!(observer.failed.lock().unwrap().len(), 1);
}

#[test]
fn test_every_observer_is_notified() {
    let first = Arc::new(RecordingObserver::default());
    let second = Arc::new(RecordingObserver::default());
    let mut factory = ShapeFactory::registry();
    factory.add_observer(first.clone()).add_observer(second.clone());

    for kind in ShapeKind::ALL {
        factory.create(&kind).unwrap();
    }

    assert_eq!(first.created.lock().unwrap().len(), 3);
    assert_eq!(second.created.lock().unwrap().len(), 3);
}

#[test]
fn test_configure_attaches_logging_observer_when_enabled() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("ferrous_provision=debug")
        .try_init();

    let config = ProvisionConfig {
        observe_creations: true,
        log_prefix: "[test]".to_string(),
        ..ProvisionConfig::default()
    };

    let mut factory = ShapeFactory::registry();
    factory.configure(&config);
    assert!(format!("{:?}", factory).contains("observers: 1"));

    let mut quiet = ShapeFactory::registry();
    quiet.configure(&ProvisionConfig::default());
    assert!(format!("{:?}", quiet).contains("observers: 0"));

    let mut registry: PrototypeRegistry<u32> = PrototypeRegistry::new();
    registry.configure(&config).register("answer", 42);
    assert_eq!(registry.create_from_template("answer").unwrap(), 42);
    assert!(format!("{:?}", registry).contains("observers: 1"));
}

#[test]
fn test_logging_observer_prefix() {
    assert_eq!(LoggingObserver::new().prefix(), "[ferrous-provision]");
    assert_eq!(LoggingObserver::with_prefix("[x]").prefix(), "[x]");

    let observer = LoggingObserver::default();
    observer.created(&ProvisionEvent {
        source: "keyed_factory",
        variant: "circle".to_string(),
        lifetime: Lifetime::Transient,
        duration: std::time::Duration::from_micros(3),
    });
    observer.failed("prototype_registry", &ProvisionError::TemplateNotFound("x".into()));
}
