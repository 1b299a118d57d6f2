use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ifm_lexer::{tokenize, ChunkedLexer, ChunkedLexerConfig};

fn generate_large_map(rooms: usize) -> String {
    let mut content = String::from("title \"Generated Dungeon\";\nmap \"Level 1\";\n\n");

    for i in 0..rooms {
        let dir = ["n", "ne", "e", "se", "s", "sw", "w", "nw"][i % 8];
        content.push_str(&format!(
            r#"# Room {i}
room "Cell {i}" tag Cell_{i} dir {dir} from last;
    item "key {i}" tag Key_{i} hidden score {score};
    link Cell_{i} to Cell_{prev} oneway;
task "Unlock cell {i}" need Key_{i} after last cmd "unlock door";
"#,
            score = i % 10,
            prev = i.saturating_sub(1),
        ));
    }

    content.push_str("room_border_width = 2.5;\nfont_scale = 1e0;\n");
    content
}

fn bench_lexers(c: &mut Criterion) {
    let source = generate_large_map(2_000);

    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(&source)).count())
    });

    group.bench_function("chunked", |b| {
        b.iter(|| {
            ChunkedLexer::from_source(black_box(&source), ChunkedLexerConfig::default())
                .filter_map(Result::ok)
                .count()
        })
    });

    // A quote that never closes holds back everything after it.
    let stray = format!("x \"\n{}", source.replace('"', "'"));

    group.bench_function("chunked_stray_quote", |b| {
        b.iter(|| {
            ChunkedLexer::from_source(black_box(&stray), ChunkedLexerConfig::default())
                .filter_map(Result::ok)
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lexers);
criterion_main!(benches);
