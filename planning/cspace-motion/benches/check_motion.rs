//! Benchmarks for the two motion-validation disciplines.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use cspace_motion::MotionValidator;
use cspace_types::{State, StateComponent, StateSpace};

fn fine_space() -> StateSpace {
    StateSpace::new(vec![
        StateComponent::linear(0.0, 100.0, 0.1),
        StateComponent::linear(0.0, 100.0, 0.1),
    ])
    .expect("valid descriptor")
}

fn disk_checker(s: &State) -> bool {
    let dx = s[0] - 50.0;
    let dy = s[1] - 30.0;
    dx * dx + dy * dy > 25.0
}

fn bench_check_motion(c: &mut Criterion) {
    let space = fine_space();
    let checker = disk_checker;
    let validator = MotionValidator::new(&space, &checker);

    let s1 = State::from_slice(&[0.0, 0.0]);
    let free = State::from_slice(&[100.0, 0.0]);
    let blocked = State::from_slice(&[100.0, 60.0]);

    c.bench_function("check_motion_free_1000_states", |b| {
        b.iter(|| validator.check_motion(black_box(&s1), black_box(&free)))
    });

    c.bench_function("check_motion_blocked_interior", |b| {
        b.iter(|| validator.check_motion(black_box(&s1), black_box(&blocked)))
    });

    c.bench_function("check_motion_incremental_free_1000_states", |b| {
        b.iter(|| {
            validator
                .check_motion_incremental(black_box(&s1), black_box(&free))
                .is_valid()
        })
    });

    c.bench_function("check_motion_incremental_blocked_interior", |b| {
        b.iter(|| {
            validator
                .check_motion_incremental(black_box(&s1), black_box(&blocked))
                .is_valid()
        })
    });
}

criterion_group!(benches, bench_check_motion);
criterion_main!(benches);
