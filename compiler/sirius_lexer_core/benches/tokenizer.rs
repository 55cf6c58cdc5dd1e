//! Tokenizer throughput benchmarks for `sirius_lexer_core`.
//!
//! Measures raw lexeme production only: no value cooking and no
//! diagnostics.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sirius_lexer_core::{LexemeKind, SourceBuffer, Tokenizer};

/// Generate N small functions for scaling benchmarks.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "int func{i}(int x) {{\n    x <<<= {i};\n    if (x >= 0x{i:X}) return x ^^ 2;\n    \
                 return '\\n' + @'\\u00e9' + sizeof(\"s{i}\\t\");\n}}\n"
            )
        })
        .collect()
}

/// Consumes lexemes in a tight loop without collecting them.
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_core/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let buf = SourceBuffer::new(src);
                    let mut tokenizer = Tokenizer::new(&buf);
                    loop {
                        let lexeme = tokenizer.next_lexeme();
                        if lexeme.kind == LexemeKind::EndOfInput {
                            break;
                        }
                        black_box(lexeme);
                    }
                });
            },
        );
    }

    group.finish();
}

/// Operator-dense input stresses the longest-match table walk.
fn bench_operator_heavy(c: &mut Criterion) {
    let source = "a>>>=b<<<=c^^=d||=e&&=f...g!=h==i;".repeat(2000);
    let mut group = c.benchmark_group("lexer_core/operators");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("dense", |b| {
        b.iter(|| {
            let buf = SourceBuffer::new(black_box(&source));
            black_box(Tokenizer::new(&buf).count())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_throughput, bench_operator_heavy);
criterion_main!(benches);
