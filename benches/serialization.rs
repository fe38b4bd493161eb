use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fds_syntax::escape::{escape_value, infer_type, unescape_value};
use fds_syntax::{parse, to_string, Entry, Section, Value};

const SIMPLE: &str = "\
# Service
name: Alice
email: alice@example.com
id: 123
active: true
";

fn build_services(count: usize) -> Section {
    let mut root = Section::new();
    for i in 0..count {
        let base = format!("services.svc{}", i);
        root.set(&format!("{}.host", base), format!("host{}.internal", i))
            .unwrap();
        root.set(&format!("{}.port", base), 8000 + i as i64).unwrap();
        root.set(&format!("{}.weight", base), 0.5 + i as f64).unwrap();
        root.set(&format!("{}.enabled", base), i % 2 == 0).unwrap();
        root.set(&format!("{}.key", base), vec![i as u8; 24]).unwrap();
        let tags = (0..3)
            .map(|t| Entry::new(Value::from(format!("tag{}", t))))
            .collect::<Vec<_>>();
        root.set(&format!("{}.tags", base), Value::List(tags)).unwrap();
        root.get_mut(&base)
            .unwrap()
            .add_comment(&format!(" service number {}", i));
    }
    root
}

fn benchmark_parse_simple(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| b.iter(|| parse(black_box(SIMPLE))));
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let root = parse(SIMPLE).unwrap();
    c.bench_function("serialize_simple", |b| {
        b.iter(|| to_string(black_box(&root)))
    });
}

fn benchmark_serialize_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_tree");

    for size in [10, 50, 100, 500].iter() {
        let root = build_services(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &root, |b, root| {
            b.iter(|| to_string(black_box(root)))
        });
    }
    group.finish();
}

fn benchmark_parse_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_tree");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&build_services(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let plain = "This is a medium length string with some content";
    let special = " tabs\tand\nnewlines\\with backslashes ";
    let escaped = escape_value(special);

    group.bench_function("escape_plain", |b| b.iter(|| escape_value(black_box(plain))));
    group.bench_function("escape_special", |b| {
        b.iter(|| escape_value(black_box(special)))
    });
    group.bench_function("unescape_special", |b| {
        b.iter(|| unescape_value(black_box(&escaped)))
    });

    group.finish();
}

fn benchmark_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_type");

    for text in ["123456789", "-2.5", "true", "007", "plain text"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| infer_type(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let root = build_services(50);
    let fds_text = to_string(&root);
    let json_text = serde_json::to_string(&root).unwrap();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("fds_serialize", |b| b.iter(|| to_string(black_box(&root))));
    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&root)))
    });
    group.bench_function("fds_parse", |b| b.iter(|| parse(black_box(&fds_text))));
    group.bench_function("json_parse", |b| {
        b.iter(|| serde_json::from_str::<Section>(black_box(&json_text)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let root = build_services(10);

    c.bench_function("roundtrip_tree", |b| {
        b.iter(|| {
            let text = to_string(black_box(&root));
            let _reparsed = parse(black_box(&text)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_serialize_simple,
    benchmark_serialize_tree,
    benchmark_parse_tree,
    benchmark_escaping,
    benchmark_inference,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
