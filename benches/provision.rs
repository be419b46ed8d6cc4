use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ferrous_provision::*;
use std::sync::Arc;

// ===== Micro Benchmarks =====

fn bench_keyed_create(c: &mut Criterion) {
    let factory = ShapeFactory::registry();

    c.bench_function("keyed_create_circle", |b| {
        b.iter(|| {
            let shape = factory.create(black_box(&ShapeKind::Circle)).unwrap();
            black_box(shape);
        })
    });
}

fn bench_closed_vs_keyed(c: &mut Criterion) {
    let closed = ShapeFactory::new();
    let keyed = ShapeFactory::registry();
    let mut group = c.benchmark_group("closed_vs_keyed");

    group.bench_function("closed_match", |b| {
        b.iter(|| black_box(closed.create(black_box(ShapeKind::Square))))
    });
    group.bench_function("keyed_lookup", |b| {
        b.iter(|| black_box(keyed.create(black_box(&ShapeKind::Square)).unwrap()))
    });
    group.bench_function("parse_and_create", |b| {
        b.iter(|| black_box(closed.create_named(black_box("Square")).unwrap()))
    });
    group.finish();
}

fn bench_unsupported_variant(c: &mut Criterion) {
    let factory: KeyedFactory<String, dyn Shape> = KeyedFactory::new();
    let missing = "hexagon".to_string();

    c.bench_function("keyed_create_unsupported", |b| {
        b.iter(|| black_box(factory.create(black_box(&missing)).is_err()))
    });
}

fn bench_observer_overhead(c: &mut Criterion) {
    struct Noop;
    impl ProvisionObserver for Noop {
        fn created(&self, event: &ProvisionEvent) {
            black_box(event);
        }
    }

    let mut group = c.benchmark_group("observer_overhead");
    for count in [0usize, 1, 4] {
        let mut factory = ShapeFactory::registry();
        for _ in 0..count {
            factory.add_observer(Arc::new(Noop));
        }
        group.bench_with_input(BenchmarkId::new("observers", count), &count, |b, _| {
            b.iter(|| black_box(factory.create(&ShapeKind::Rectangle).unwrap()))
        });
    }
    group.finish();
}

fn bench_template_clone(c: &mut Criterion) {
    let mut registry: PrototypeRegistry<Box<dyn Shape>> = PrototypeRegistry::new();
    let mut style = Style::new("red");
    for i in 0..16 {
        style = style.with_tag(format!("tag-{i}"));
    }
    registry.register("tagged", Box::new(Circle { radius: 3.0, style }));

    c.bench_function("prototype_clone_tagged_circle", |b| {
        b.iter(|| black_box(registry.create_from_template(black_box("tagged")).unwrap()))
    });
}

fn bench_director(c: &mut Criterion) {
    let director = Director::new();
    let mut group = c.benchmark_group("director_construct");

    for recipe in Recipe::ALL {
        group.bench_with_input(BenchmarkId::new("car", recipe), &recipe, |b, &recipe| {
            let mut builder = CarBuilder::new();
            b.iter(|| black_box(director.construct(recipe, &mut builder)))
        });
        group.bench_with_input(BenchmarkId::new("manual", recipe), &recipe, |b, &recipe| {
            let mut builder = ManualBuilder::new();
            b.iter(|| black_box(director.construct(recipe, &mut builder)))
        });
    }
    group.finish();
}

fn bench_family_lookup(c: &mut Criterion) {
    let catalog = FamilyCatalog::with_defaults();

    c.bench_function("family_widget_set", |b| {
        b.iter(|| {
            let factory = catalog.factory(black_box("mac")).unwrap();
            black_box(WidgetSet::from_factory(factory.as_ref()))
        })
    });
}

static WARM: Singleton<Vec<u64>> = Singleton::new(|| (0..1000).collect());

fn bench_singleton_hit(c: &mut Criterion) {
    let _ = WARM.get();

    c.bench_function("singleton_hit", |b| {
        b.iter(|| black_box(WARM.get().len()))
    });
}

fn bench_singleton_cold(c: &mut Criterion) {
    c.bench_function("singleton_cold", |b| {
        b.iter_batched(
            || Singleton::new(|| (0..1000u64).collect::<Vec<_>>()),
            |cell| black_box(cell.get().len()),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    micro_benches,
    bench_keyed_create,
    bench_closed_vs_keyed,
    bench_unsupported_variant,
    bench_observer_overhead,
    bench_template_clone,
    bench_singleton_hit,
    bench_singleton_cold
);

criterion_group!(macro_benches, bench_director, bench_family_lookup);

criterion_main!(micro_benches, macro_benches);
