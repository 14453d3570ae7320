use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use conll_ssf::pipelines::{convert_lines, ConvertOptions};
use conll_ssf::ssf::Trailing;
use conll_ssf::Mode;

// bench protocol:
//
// Generated sentences of 20 tokens, alternating NP/VGF chunks of 3 tokens,
// with one illegal continuation per sentence so that repair has work to do.
fn chunk_lines(nb_sentences: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(nb_sentences * 21);
    for _ in 0..nb_sentences {
        for idx in 0..20 {
            let kind = if (idx / 3) % 2 == 0 { "NP" } else { "VGF" };
            let label = if idx % 3 == 0 && idx != 9 { "B" } else { "I" };
            let token = if idx == 19 { "," } else { "token" };
            lines.push(format!("{}\tNN\t{}-{}", token, label, kind));
        }
        lines.push(String::new());
    }
    lines
}

fn pos_lines(nb_sentences: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(nb_sentences * 21);
    for _ in 0..nb_sentences {
        for _ in 0..20 {
            lines.push("token\tlemma\tNN".to_string());
        }
        lines.push(String::new());
    }
    lines
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for nb_sentences in [100, 1_000, 10_000] {
        let chunk = chunk_lines(nb_sentences);
        let pos = pos_lines(nb_sentences);
        let chunk_options = ConvertOptions::new(Mode::Chunk, Trailing::Drop);
        let pos_options = ConvertOptions::new(Mode::Pos, Trailing::Drop);

        group.bench_with_input(BenchmarkId::new("chunk", nb_sentences), &chunk, |b, lines| {
            b.iter(|| convert_lines(black_box(lines.as_slice()), &chunk_options).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("pos", nb_sentences), &pos, |b, lines| {
            b.iter(|| convert_lines(black_box(lines.as_slice()), &pos_options).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
