use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlsnip::{ClauseMode, ParamMap, Postgres, SqlBuilder, Value, params};

/// Build a registry with `n` required clauses (`col0 = @i:p0@ ...`) and a
/// parameter mapping that makes every clause eligible.
fn build_registry(n: usize) -> (SqlBuilder, ParamMap) {
    let mut builder = SqlBuilder::new(Postgres);
    let clauses = builder.clauses("WHERE", " AND ", "WHERE ", "");
    let mut parameters = ParamMap::new();
    for i in 0..n {
        clauses.add_clause(format!("col{i} = @i:p{i}@"), params!(), ClauseMode::Required);
        parameters.insert(format!("p{i}"), Value::Int(i as i64));
    }
    (builder, parameters)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/resolve");

    for n in [1, 5, 10, 50] {
        let (builder, parameters) = build_registry(n);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &parameters,
            |b, parameters| {
                b.iter(|| {
                    black_box(
                        builder
                            .resolve("SELECT * FROM t /** WHERE **/", parameters.clone())
                            .unwrap(),
                    );
                });
            },
        );
    }

    group.finish();
}

fn bench_substitution_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/substitution");

    for n in [1, 10, 100] {
        let builder = SqlBuilder::new(Postgres);
        let mut sql = String::from("SELECT * FROM t WHERE 1=1");
        let mut parameters = ParamMap::new();
        for i in 0..n {
            sql.push_str(&format!(" AND col{i} = @i:p{i}@"));
            parameters.insert(format!("p{i}"), Value::Int(i as i64));
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &sql, |b, sql| {
            b.iter(|| {
                black_box(builder.resolve(sql.as_str(), parameters.clone()).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_substitution_only);
criterion_main!(benches);
