// Composite evaluation benchmarks for valtree
// Run with: cargo bench --bench composite

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use valtree::prelude::*;
use valtree::render;

#[derive(Debug)]
struct Address {
    street: String,
    postcode: String,
}

#[derive(Debug)]
struct Person {
    name: String,
    email: Option<String>,
    address: Address,
}

fn person(valid: bool) -> Person {
    Person {
        name: if valid { "Ada Lovelace".into() } else { " ".into() },
        email: Some(if valid { "ada@example.com".into() } else { "ada".into() }),
        address: Address {
            street: "12 St James's Square".into(),
            postcode: if valid { "12345".into() } else { "1234a".into() },
        },
    }
}

fn person_tree(stop_on_first_error: bool) -> Composite<Person> {
    let address = Composite::on(|p: &Person| &p.address)
        .with(NotEmpty::on(|a: &Address| &a.street))
        .with(Pattern::on(|a: &Address| &a.postcode, "[0-9]{5}").unwrap());

    Composite::new()
        .stop_on_first_error(stop_on_first_error)
        .with(NotEmpty::on(|p: &Person| &p.name))
        .with(StringLength::on(|p: &Person| &p.name, Some(2), Some(64)).unwrap())
        .with(Pattern::on(|p: &Person| &p.email, r"[^@\s]+@[^@\s]+").unwrap())
        .with(address)
}

// ================================
// Tree Evaluation
// ================================

fn benchmark_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite/evaluate");

    for (label, valid) in [("valid", true), ("invalid", false)] {
        let subject = person(valid);
        for stop in [false, true] {
            let tree = person_tree(stop);
            group.bench_with_input(
                BenchmarkId::new(label, if stop { "stop_on_first_error" } else { "collect_all" }),
                &subject,
                |b, subject| b.iter(|| tree.evaluate(black_box(subject))),
            );
        }
    }

    group.finish();
}

fn benchmark_wide_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite/width");

    for width in [1_usize, 10, 100] {
        let tree = (0..width).fold(Composite::<str>::new(), |tree, _| {
            tree.with(StringLength::new(Some(1), Some(32)).unwrap())
        });
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &tree, |b, tree| {
            b.iter(|| tree.evaluate(black_box("some text")))
        });
    }

    group.finish();
}

// ================================
// Rendering
// ================================

fn benchmark_render(c: &mut Criterion) {
    let params = [Param::from("This is param1"), Param::from(1234)];

    c.bench_function("render/two_params", |b| {
        b.iter(|| {
            render(
                black_box("The message param1=[{0}] and param2=[{1}]"),
                black_box(&params),
            )
        })
    });
}

criterion_group!(benches, benchmark_tree, benchmark_wide_composite, benchmark_render);
criterion_main!(benches);
