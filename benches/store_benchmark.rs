use activity_board::models::ActivityDraft;
use activity_board::services::FormController;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_draft(i: usize) -> ActivityDraft {
    ActivityDraft {
        activity: format!("Activity {}", i),
        price: (i % 50 + 1) as f64,
        activity_type: "busywork".to_string(),
        booking_required: i % 2 == 0,
        accessibility: (i % 10) as f64 / 10.0,
    }
}

fn benchmark_validation(c: &mut Criterion) {
    let valid = make_draft(7);
    let invalid = ActivityDraft {
        activity: "A".to_string(),
        price: f64::NAN,
        activity_type: "sports".to_string(),
        ..make_draft(7)
    };

    let mut group = c.benchmark_group("validation");

    group.bench_function("valid_draft", |b| b.iter(|| black_box(&valid).check()));

    group.bench_function("invalid_draft", |b| {
        b.iter(|| black_box(&invalid).check())
    });

    group.finish();
}

fn benchmark_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("submit_1000", |b| {
        b.iter(|| {
            let mut form = FormController::new();
            for i in 0..1000 {
                let _ = form.submit(make_draft(i));
            }
            form
        })
    });

    // Deleting the first row shifts every later record
    group.bench_function("delete_front_of_1000", |b| {
        b.iter(|| {
            let mut form = FormController::new();
            for i in 0..1000 {
                let _ = form.submit(make_draft(i));
            }
            while !form.store().is_empty() {
                let _ = form.request_delete(0);
                let _ = form.confirm_delete();
            }
            form
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_validation, benchmark_store);
criterion_main!(benches);
