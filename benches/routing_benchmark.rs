use criterion::{black_box, criterion_group, criterion_main, Criterion};
use warehouse_router::utils::generator::{generate_warehouse, GeneratorConfig};
use warehouse_router::{baseline_route, greedy_route};

fn benchmark_routers(c: &mut Criterion) {
    let (warehouse, pick_list) = generate_warehouse(&GeneratorConfig::default(), 42)
        .expect("default config is satisfiable");
    let start = warehouse.packing_station;

    c.bench_function("baseline_route_10_picks", |b| {
        b.iter(|| {
            baseline_route(
                black_box(&pick_list),
                black_box(&warehouse.item_locations),
                black_box(start),
            )
        })
    });

    c.bench_function("greedy_route_10_picks", |b| {
        b.iter(|| {
            greedy_route(
                black_box(&pick_list),
                black_box(&warehouse.item_locations),
                black_box(start),
            )
        })
    });

    // Larger pick list to expose the quadratic scan in the greedy router
    let long_config = GeneratorConfig {
        pick_list_len: 100,
        ..GeneratorConfig::default()
    };
    let (warehouse, long_pick_list) =
        generate_warehouse(&long_config, 42).expect("config is satisfiable");

    c.bench_function("greedy_route_100_picks", |b| {
        b.iter(|| {
            greedy_route(
                black_box(&long_pick_list),
                black_box(&warehouse.item_locations),
                black_box(warehouse.packing_station),
            )
        })
    });
}

criterion_group!(benches, benchmark_routers);
criterion_main!(benches);
