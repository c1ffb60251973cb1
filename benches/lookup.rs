//! Benchmarks for chartable lookups
//!
//! Forward lookups are a binary search per call; reverse lookups hit maps that
//! are built on first use, so each group warms them up before measuring.

use chartable::latex::texmath;
use chartable::{
    codepoint_to_bidi_class, codepoint_to_block, codepoint_to_category, codepoint_to_script,
    get_name, name_to_block, name_to_codepoint, typst,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// A spread of code points over the BMP and the supplementary planes
const SAMPLE: &[u32] = &[
    0x0041, 0x00E9, 0x0101, 0x0301, 0x03B1, 0x05D0, 0x0627, 0x2028, 0x2264, 0x3042, 0x4E00,
    0xAC01, 0xE000, 0x10300, 0x1F600, 0x10FFFF,
];

fn bench_category(c: &mut Criterion) {
    c.bench_function("codepoint_to_category", |b| {
        b.iter(|| {
            for &cp in SAMPLE {
                black_box(codepoint_to_category(black_box(cp)));
            }
        })
    });
}

fn bench_category_sweep(c: &mut Criterion) {
    c.bench_function("codepoint_to_category_bmp_sweep", |b| {
        b.iter(|| {
            let mut letters = 0u32;
            for cp in (0..0x10000).step_by(7) {
                if codepoint_to_category(black_box(cp)).short_name().starts_with('L') {
                    letters += 1;
                }
            }
            letters
        })
    });
}

fn bench_script_and_block(c: &mut Criterion) {
    c.bench_function("codepoint_to_script", |b| {
        b.iter(|| {
            for &cp in SAMPLE {
                black_box(codepoint_to_script(black_box(cp)));
            }
        })
    });

    c.bench_function("codepoint_to_block", |b| {
        b.iter(|| {
            for &cp in SAMPLE {
                black_box(codepoint_to_block(black_box(cp)));
            }
        })
    });
}

fn bench_bidi_fallback(c: &mut Criterion) {
    // 0x10F80 is only covered by the default table
    c.bench_function("codepoint_to_bidi_class_fallback", |b| {
        b.iter(|| codepoint_to_bidi_class(black_box(0x10F80)))
    });
}

fn bench_names(c: &mut Criterion) {
    let _ = get_name(0x41);
    let _ = name_to_codepoint("A");

    c.bench_function("get_name", |b| {
        b.iter(|| {
            for &cp in SAMPLE {
                let _ = black_box(get_name(black_box(cp)));
            }
        })
    });

    c.bench_function("name_to_codepoint_table", |b| {
        b.iter(|| name_to_codepoint(black_box("LATIN SMALL LETTER E WITH ACUTE")))
    });

    c.bench_function("name_to_codepoint_hangul", |b| {
        b.iter(|| name_to_codepoint(black_box("HANGUL SYLLABLE GAG")))
    });
}

fn bench_reverse_lookups(c: &mut Criterion) {
    let _ = name_to_block("ASCII");
    let _ = texmath::notation_to_mathtype_codepoint("leq");
    let _ = typst::notation_to_codepoints("arrow.r");

    c.bench_function("name_to_block_loose", |b| {
        b.iter(|| name_to_block(black_box("is old-italic")))
    });

    c.bench_function("texmath_notation_to_codepoint", |b| {
        b.iter(|| texmath::notation_to_mathtype_codepoint(black_box("\\leq")))
    });

    c.bench_function("typst_notation_to_codepoints", |b| {
        b.iter(|| typst::notation_to_codepoints(black_box("arrow.r")))
    });
}

criterion_group!(
    benches,
    bench_category,
    bench_category_sweep,
    bench_script_and_block,
    bench_bidi_fallback,
    bench_names,
    bench_reverse_lookups,
);
criterion_main!(benches);
