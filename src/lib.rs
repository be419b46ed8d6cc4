//! # ferrous-provision
//!
//! Pluggable object provisioning for Rust: the creational patterns as one
//! small, strongly-typed subsystem.
//!
//! ## Features
//!
//! - **Keyed factories**: discriminator -> constructor, fresh instance per call
//! - **Family factories**: sets of products guaranteed to share one family tag
//! - **Staged builders**: incremental construction with reproducible director recipes
//! - **Prototypes**: deep-copy cloning and a named template registry
//! - **Singletons**: concurrency-safe, create-once process-wide instances
//! - **One contract**: every strategy implements [`Provider`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrous_provision::{Product, ProvisionError, ShapeFactory, ShapeKind};
//!
//! let factory = ShapeFactory::registry();
//!
//! let circle = factory.create(&ShapeKind::Circle).unwrap();
//! let rectangle = factory.create(&ShapeKind::Rectangle).unwrap();
//! assert!(circle.render().starts_with("Circle"));
//! assert!(rectangle.render().starts_with("Rectangle"));
//!
//! // Unknown discriminators are rejected, never defaulted.
//! assert!(matches!(
//!     ShapeFactory::new().create_named("triangle"),
//!     Err(ProvisionError::UnsupportedVariant(_))
//! ));
//! ```
//!
//! ## Families
//!
//! ```rust
//! use ferrous_provision::{FamilyCatalog, FamilyTag, WidgetSet};
//!
//! let catalog = FamilyCatalog::with_defaults();
//! let widgets = WidgetSet::from_factory(catalog.factory("Windows").unwrap().as_ref());
//!
//! assert!(widgets.is_consistent());
//! assert_eq!(widgets.checkbox().family(), &FamilyTag::WINDOWS);
//! ```
//!
//! ## Builders
//!
//! ```rust
//! use ferrous_provision::{CarBuilder, Director, Recipe};
//!
//! let director = Director::new();
//! let a = director.construct(Recipe::Full, &mut CarBuilder::new());
//! let b = director.construct(Recipe::Full, &mut CarBuilder::new());
//! assert_eq!(a, b);
//! ```
//!
//! ## Prototypes
//!
//! ```rust
//! use ferrous_provision::{PrototypeRegistry, Shape, Square, Style};
//!
//! let mut templates: PrototypeRegistry<Box<dyn Shape>> = PrototypeRegistry::new();
//! templates.register("tile", Box::new(Square { side: 2.0, style: Style::new("grey") }));
//!
//! let mut tile = templates.create_from_template("tile").unwrap();
//! tile.style_mut().color = "blue".to_string();
//! assert_eq!(templates.create_from_template("tile").unwrap().style().color, "grey");
//! ```
//!
//! ## Singletons
//!
//! ```rust
//! use ferrous_provision::Singleton;
//!
//! static POOL: Singleton<Vec<u32>> = Singleton::new(|| vec![1, 2, 3]);
//!
//! assert!(std::ptr::eq(POOL.get(), POOL.get()));
//! ```

pub mod builder;
pub mod config;
pub mod descriptors;
pub mod error;
pub mod factory;
pub mod family;
pub mod key;
pub mod lifetime;
pub mod observer;
pub mod product;
pub mod prototype;
pub mod singleton;
pub mod traits;

// Internal modules
mod internal;

pub use builder::{
    BuildSpec, BuildState, CarBuilder, DirectedProvider, Director, ManualBuilder, Recipe, StepId,
    VehicleBuilder,
};
pub use config::ProvisionConfig;
pub use descriptors::VariantDescriptor;
pub use error::{ProvisionError, ProvisionResult};
pub use factory::{KeyedFactory, ShapeFactory};
pub use family::{
    FamilyCatalog, GuiFactory, MacButton, MacCheckbox, MacFactory, WidgetSet, WindowsButton,
    WindowsCheckbox, WindowsFactory,
};
pub use key::{Discriminator, ShapeKind};
pub use lifetime::Lifetime;
pub use observer::{LoggingObserver, ProvisionEvent, ProvisionObserver};
pub use product::{
    Button, Car, Checkbox, Circle, CloneButton, CloneCheckbox, CloneShape, Engine, FamilyTag, Gps,
    Manual, Rectangle, Shape, SoundSystem, Square, Style, Widget,
};
pub use prototype::PrototypeRegistry;
pub use singleton::{Singleton, SingletonState};
pub use traits::{CloneProduct, Product, Provider};
