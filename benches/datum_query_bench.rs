use criterion::{Criterion, criterion_group, criterion_main};
use datum_aspect::api::{DatumAspect, DumpDepth};
use datum_aspect::core::{DatumAxes, DatumPart};
use std::hint::black_box;

fn bench_visibility_queries(c: &mut Criterion) {
    let mut aspect = DatumAspect::new();
    aspect.set_draw_datum_axes(DatumAxes::XZ);

    c.bench_function("draw_datum_part_all_parts", |b| {
        b.iter(|| {
            DatumPart::ALL
                .into_iter()
                .filter(|part| black_box(&aspect).draw_datum_part(*part))
                .count()
        })
    });
}

fn bench_dump_unlimited(c: &mut Criterion) {
    let aspect = DatumAspect::new();

    c.bench_function("dump_json_unlimited", |b| {
        b.iter(|| {
            let _ = black_box(&aspect)
                .dump_json_string(DumpDepth::Unlimited)
                .expect("dump should serialize");
        })
    });
}

criterion_group!(benches, bench_visibility_queries, bench_dump_unlimited);
criterion_main!(benches);
