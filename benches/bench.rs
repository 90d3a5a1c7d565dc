use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symrex::{Alphabet, Regex};

fn bench_compile_simple(c: &mut Criterion) {
    c.bench_function("compile_alternation", |b| {
        b.iter(|| black_box(Regex::compile_str(black_box("a|b"), Alphabet::classic())))
    });
}

fn bench_compile_starred_group(c: &mut Criterion) {
    c.bench_function("compile_starred_group", |b| {
        b.iter(|| black_box(Regex::compile_str(black_box("(a|b)*.c"), Alphabet::classic())))
    });
}

fn bench_compile_character_class(c: &mut Criterion) {
    c.bench_function("compile_character_class", |b| {
        b.iter(|| black_box(Regex::compile_str(black_box("[abcdef]"), Alphabet::classic())))
    });
}

fn bench_match_hit(c: &mut Criterion) {
    let regex = Regex::compile_str("(a|b)*.c", Alphabet::classic()).unwrap();

    c.bench_function("match_hit", |b| {
        b.iter(|| black_box(regex.matches_str(black_box("c"))))
    });
}

fn bench_match_miss(c: &mut Criterion) {
    let regex = Regex::compile_str("[abcdef]", Alphabet::classic()).unwrap();

    c.bench_function("match_miss", |b| {
        b.iter(|| black_box(regex.matches_str(black_box("z"))))
    });
}

fn bench_match_chain(c: &mut Criterion) {
    let regex = Regex::compile_str("a.b.c.d.e", Alphabet::classic()).unwrap();

    c.bench_function("match_chain", |b| {
        b.iter(|| black_box(regex.matches_str(black_box("abcde"))))
    });
}

criterion_group!(
    benches,
    bench_compile_simple,
    bench_compile_starred_group,
    bench_compile_character_class,
    bench_match_hit,
    bench_match_miss,
    bench_match_chain,
);

criterion_main!(benches);
