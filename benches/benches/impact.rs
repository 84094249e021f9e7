// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_box_model::{Axis, BoxModel};
use understory_reorder::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
    DroppableDimension, DroppableFlags, DroppableId, ImpactArgs, ImpactConfig, RestingArgs,
    TypeId, Viewport, get_drag_impact, get_lift_effect, resting_center,
};

const ROW: f64 = 40.0;

fn gen_list(n: usize, flags: DroppableFlags) -> DimensionMap {
    let list = DroppableId(1);
    let mut map = DimensionMap::new().with_droppable(DroppableDimension::new(
        DroppableDescriptor {
            id: list,
            type_id: TypeId::default(),
        },
        Axis::Vertical,
        BoxModel::from_rect(Rect::new(0.0, 0.0, 300.0, n as f64 * ROW)),
        None,
        flags,
    ));
    for i in 0..n {
        let y = i as f64 * ROW;
        map.insert_draggable(DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(i as u64),
                index: i,
                droppable_id: list,
                type_id: TypeId::default(),
            },
            BoxModel::from_rect(Rect::new(0.0, y, 300.0, y + ROW)),
        ));
    }
    map
}

fn viewport(n: usize) -> Viewport {
    Viewport::new(
        Size::new(800.0, 600.0),
        Vec2::ZERO,
        Vec2::new(0.0, (n as f64 * ROW - 600.0).max(0.0)),
    )
}

fn bench_sweep(c: &mut Criterion, name: &str, flags: DroppableFlags) {
    let mut group = c.benchmark_group(name);
    for &n in &[32usize, 256, 2048] {
        let map = gen_list(n, flags);
        let viewport = viewport(n);
        let config = ImpactConfig::default();
        let critical = map.critical(DraggableId(0)).unwrap();
        let lift = get_lift_effect(&critical, &map, &viewport).unwrap();
        // One tick per row, top to bottom.
        let centers: Vec<Point> = (0..n)
            .map(|i| Point::new(150.0, (i as f64 + 0.5) * ROW))
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("sweep_n{n}"), |b| {
            b.iter(|| {
                let mut previous = lift.impact.clone();
                for &center in &centers {
                    previous = get_drag_impact(&ImpactArgs {
                        page_border_box_center: center,
                        draggable_id: DraggableId(0),
                        dimensions: &map,
                        on_lift: &lift.on_lift,
                        previous: &previous,
                        viewport: &viewport,
                        config: &config,
                        allow_grouping: true,
                    })
                    .unwrap();
                }
                black_box(previous);
            });
        });
    }
    group.finish();
}

fn bench_reorder(c: &mut Criterion) {
    bench_sweep(c, "reorder", DroppableFlags::default());
}

fn bench_grouping(c: &mut Criterion) {
    bench_sweep(c, "grouping", DroppableFlags::ENABLED | DroppableFlags::GROUPING);
}

fn bench_lift_and_rest(c: &mut Criterion) {
    let mut group = c.benchmark_group("lift_and_rest");
    for &n in &[32usize, 256, 2048] {
        let map = gen_list(n, DroppableFlags::default());
        let viewport = viewport(n);
        let dragged = DraggableId((n / 2) as u64);
        let critical = map.critical(dragged).unwrap();
        group.bench_function(format!("lift_n{n}"), |b| {
            b.iter(|| black_box(get_lift_effect(&critical, &map, &viewport).unwrap()));
        });
        let lift = get_lift_effect(&critical, &map, &viewport).unwrap();
        let draggable = map.draggable(dragged).unwrap();
        group.bench_function(format!("resting_center_n{n}"), |b| {
            b.iter(|| {
                black_box(
                    resting_center(&RestingArgs {
                        impact: &lift.impact,
                        draggable,
                        dimensions: &map,
                        on_lift: &lift.on_lift,
                    })
                    .unwrap(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reorder, bench_grouping, bench_lift_and_rest);
criterion_main!(benches);
