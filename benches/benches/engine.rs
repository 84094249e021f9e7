// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_box_model::{Axis, BoxModel};
use understory_drag::{
    Action, DimensionSnapshot, DragConfig, DragEngine, LockManager, MovementMode,
    StaticDimensions,
};
use understory_reorder::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
    DroppableDimension, DroppableFlags, DroppableId, TypeId, Viewport,
};

const ROW: f64 = 40.0;

fn gen_engine(n: usize) -> DragEngine<StaticDimensions> {
    let list = DroppableId(1);
    let mut dimensions = DimensionMap::new().with_droppable(DroppableDimension::new(
        DroppableDescriptor {
            id: list,
            type_id: TypeId::default(),
        },
        Axis::Vertical,
        BoxModel::from_rect(Rect::new(0.0, 0.0, 300.0, n as f64 * ROW)),
        None,
        DroppableFlags::default(),
    ));
    for i in 0..n {
        let y = i as f64 * ROW;
        dimensions.insert_draggable(DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(i as u64),
                index: i,
                droppable_id: list,
                type_id: TypeId::default(),
            },
            BoxModel::from_rect(Rect::new(0.0, y, 300.0, y + ROW)),
        ));
    }
    let document = Size::new(800.0, n as f64 * ROW);
    let viewport = Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO, Vec2::ZERO);
    let provider = StaticDimensions::new(
        DimensionSnapshot {
            dimensions,
            viewport,
        },
        document,
    );
    DragEngine::new(provider, LockManager::new(), DragConfig::default())
}

fn bench_full_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    for &n in &[32usize, 256] {
        group.bench_function(format!("pointer_drag_to_end_n{n}"), |b| {
            b.iter_batched(
                || gen_engine(n),
                |mut engine| {
                    engine.claim(DraggableId(0)).unwrap();
                    engine
                        .dispatch(Action::Lift {
                            client_selection: Some(Point::new(150.0, ROW / 2.0)),
                            mode: MovementMode::Fluid,
                        })
                        .unwrap();
                    for i in 0..n {
                        let y = (i as f64 + 0.5) * ROW;
                        engine
                            .dispatch(Action::Move {
                                client: Point::new(150.0, y),
                            })
                            .unwrap();
                    }
                    engine.dispatch(Action::Drop).unwrap();
                    black_box(engine.resting_offset());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_drag);
criterion_main!(benches);
