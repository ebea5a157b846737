use cgpa_core::{CgpaAggregator, LedgerService, Session};
use cgpa_domain::{
    CourseEntry, CourseLedger, CourseUpdate, GradeSymbol, GradingScale, NumericInput, PriorTotals,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn large_ledger(count: usize) -> CourseLedger {
    let entries = (0..count)
        .map(|index| {
            CourseEntry::blank(GradingScale::FivePoint)
                .with_name(format!("Course {index}"))
                .with_grade(GradeSymbol::ALL[index % GradeSymbol::ALL.len()])
                .with_units((index % 4 + 1) as f64)
        })
        .collect();
    CourseLedger::from_entries(entries)
}

fn bench_compute(c: &mut Criterion) {
    let ledger = large_ledger(10_000);
    let prior = PriorTotals::new(150.0, 30.0);
    c.bench_function("compute_10k_courses", |b| {
        b.iter(|| {
            CgpaAggregator::compute(
                black_box(&ledger),
                black_box(GradingScale::FourPoint),
                &prior,
            )
        })
    });
}

fn bench_update(c: &mut Criterion) {
    let ledger = large_ledger(1_000);
    let target = ledger.entries()[500].id;
    c.bench_function("update_snapshot_1k_courses", |b| {
        b.iter(|| {
            LedgerService::update(
                black_box(&ledger),
                target,
                CourseUpdate::Units(NumericInput::Value(2.0)),
            )
        })
    });
}

fn bench_session_edits(c: &mut Criterion) {
    c.bench_function("session_add_100_courses", |b| {
        b.iter(|| {
            let mut session = Session::new(GradingScale::FivePoint);
            for _ in 0..100 {
                let id = session.add_course();
                session.update_course(id, CourseUpdate::Units(NumericInput::Value(3.0)));
            }
            session.result()
        })
    });
}

criterion_group!(benches, bench_compute, bench_update, bench_session_edits);
criterion_main!(benches);
