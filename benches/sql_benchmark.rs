use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minisql::sql::engine::Session;
use std::hint::black_box;

fn setup_populated_session(n: usize) -> Session {
    let mut session = Session::new();

    session
        .execute("CREATE TABLE users (id INT, name TEXT, age INT)")
        .unwrap();

    for i in 0..n {
        session
            .execute(&format!("INSERT INTO users ({}, 'user{}', {})", i, i, i % 100))
            .unwrap();
    }
    session
}

fn bench_insert_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert_SQL_Pipeline");
    group.bench_function("insert_single_row_sql", |b| {
        let mut session = Session::new();
        session.execute("CREATE TABLE tests (id INT)").unwrap();
        b.iter(|| {
            session.execute(black_box("INSERT INTO tests (42)")).unwrap();
        });
    });
    group.finish();
}

fn bench_select_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Select_Where_Performance");

    for n in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let mut session = setup_populated_session(n);
            b.iter(|| {
                let res = session
                    .execute("SELECT * FROM users WHERE age = 42")
                    .unwrap();
                black_box(res);
            });
        });
    }
    group.finish();
}

fn bench_text_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Select_Text_Filter");

    for n in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let mut session = setup_populated_session(n);
            b.iter(|| {
                let res = session
                    .execute("SELECT * FROM users WHERE name = 'USER42'")
                    .unwrap();
                black_box(res);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_sql,
    bench_select_scaling,
    bench_text_filter
);
criterion_main!(benches);
