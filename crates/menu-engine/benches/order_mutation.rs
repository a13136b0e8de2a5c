//! Add/remove hot path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use menu_catalog::NodeId;
use menu_test_utils::{meal_catalog, setup_menu};

fn bench_start_order(c: &mut Criterion) {
    let menu = setup_menu(meal_catalog());
    c.bench_function("start_order_meal", |b| {
        b.iter(|| menu.start_order(black_box(NodeId(1))))
    });
}

fn bench_swap_main(c: &mut Criterion) {
    let menu = setup_menu(meal_catalog());
    let Some(base) = menu.start_order(NodeId(1)) else {
        return;
    };
    c.bench_function("swap_main_and_back", |b| {
        b.iter(|| {
            let mut order = base.clone();
            let _ = menu.add_to_order(black_box(NodeId(12)), &mut order);
            let _ = menu.add_to_order(black_box(NodeId(11)), &mut order);
            order
        })
    });
}

fn bench_extras_round_trip(c: &mut Criterion) {
    let menu = setup_menu(meal_catalog());
    let Some(base) = menu.start_order(NodeId(1)) else {
        return;
    };
    c.bench_function("extras_add_remove", |b| {
        b.iter(|| {
            let mut order = base.clone();
            let _ = menu.add_to_order(black_box(NodeId(52)), &mut order);
            let _ = menu.remove_from_order(black_box(NodeId(52)), &mut order);
            order
        })
    });
}

criterion_group!(benches, bench_start_order, bench_swap_main, bench_extras_round_trip);
criterion_main!(benches);
