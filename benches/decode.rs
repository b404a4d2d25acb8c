// benches/decode.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use football_scrape::{
    config::options::DecodeOptions,
    feed,
    fixture::{self, Fixture},
};

/// A synthetic matchday: every fixture with a handful of doubled scorer blocks.
fn sample_feed(fixtures: usize) -> String {
    let mut s = String::from("league,Premier League\n");
    for i in 0..fixtures {
        s.push_str(&format!("fixture,2019-02-{:02},Home {i},3,1,Away {i}\n", 1 + i % 28));
        s.push_str("event,Harry Kane,\"(12'12', 45'+2'45'+2')\"\n");
        s.push_str("event,Son Heung-min,\"(67' pen67' pen)\"\n");
        s.push_str("event,Jan Vertonghen,\"(Dismissed at 80'Dismissed at 80')\"\n");
        s.push_str("event,Marcus Rashford,\"(90'+4'90'+4')\"\n");
    }
    s
}

fn bench_decode(c: &mut Criterion) {
    let opts = DecodeOptions::default();

    c.bench_function("decode_fragment", |b| {
        b.iter(|| {
            let t = fixture::decode_fragment(
                black_box("Harry Kane"),
                black_box("(12'12', 45'+2'45'+2', 67' pen67' pen, Dismissed at 80'Dismissed at 80')"),
                &opts,
            );
            black_box(t.map(|t| t.len()).unwrap_or(0))
        })
    });

    c.bench_function("undouble_long", |b| {
        let s = "Dismissed at 90'+3'Dismissed at 90'+3'";
        b.iter(|| black_box(fixture::undouble(black_box(s))))
    });

    let text = sample_feed(380);
    c.bench_function("feed_parse_season", |b| {
        b.iter(|| black_box(feed::parse_feed(black_box(&text)).map(|l| l.len()).unwrap_or(0)))
    });

    let leagues = feed::parse_feed(&text).unwrap_or_default();
    c.bench_function("fixture_build_season", |b| {
        b.iter(|| {
            let n = leagues
                .iter()
                .flat_map(|l| l.fixtures.iter())
                .filter_map(|raw| Fixture::parse(raw, &opts).ok())
                .count();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
