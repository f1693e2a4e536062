//! Per-keystroke validation cost: one field looked up in a login composite.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use loginkit_validator::prelude::*;

fn login_composite() -> ValidationComposite {
    ValidationComposite::build([
        ValidationBuilder::field("email").required().email().build(),
        ValidationBuilder::field("password").required().min(5).build(),
    ])
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("builder_three_rules", |b| {
        b.iter(|| {
            let list = ValidationBuilder::field(black_box("email"))
                .required()
                .email()
                .min(5)
                .build();
            black_box(list)
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let composite = login_composite();
    let valid = FieldValues::from([("email", "user@example.com"), ("password", "secret")]);
    let invalid = FieldValues::from([("email", "user@"), ("password", "")]);

    c.bench_function("composite_email_valid", |b| {
        b.iter(|| black_box(composite.validate(black_box("email"), &valid)))
    });

    c.bench_function("composite_email_invalid", |b| {
        b.iter(|| black_box(composite.validate(black_box("email"), &invalid)))
    });

    c.bench_function("composite_validate_all", |b| {
        b.iter(|| black_box(composite.validate_all(&invalid)))
    });
}

criterion_group!(benches, bench_build, bench_validate);
criterion_main!(benches);
