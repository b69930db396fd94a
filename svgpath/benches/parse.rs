use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use svgpath::{parse, Identity, Tracer};

/// Relative zig-zag with curves and arcs, `segments` groups long.
fn generate_path(segments: usize) -> String {
    let mut path = String::from("M0 0");
    for i in 0..segments {
	match i % 4 {
	    0 => path.push_str(" l10.5-3"),
	    1 => path.push_str(" c1,2 3,4 5,6"),
	    2 => path.push_str(" a5 5 0 1010 10"),
	    _ => path.push_str(" h-2.5e1v.5"),
	}
    }
    path.push('z');
    path
}

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for segments in [100, 1_000, 10_000].iter() {
	let path = generate_path(*segments);
	group.throughput(Throughput::Bytes(path.len() as u64));
	group.bench_with_input(BenchmarkId::from_parameter(segments), &path, |b, path| {
	    b.iter(|| parse(path).expect("generated path is valid"))
	});
    }
    group.finish();
}

fn trace_benchmark(c: &mut Criterion) {
    let actions = parse(&generate_path(10_000)).expect("generated path is valid");
    c.bench_function("trace", |b| {
	b.iter(|| Tracer::new(&actions, &Identity).count())
    });
}

criterion_group!(benches, parse_benchmark, trace_benchmark);
criterion_main!(benches);
