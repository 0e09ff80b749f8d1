use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kickoff_core::{advance, play_to_completion, simulate_match_json, MatchState, TICK_DT};

fn bench_full_match(c: &mut Criterion) {
    c.bench_function("full_match_seed_42", |b| {
        b.iter(|| {
            let state = MatchState::with_seed(black_box(42)).unwrap();
            play_to_completion(state)
        })
    });
}

fn bench_single_tick(c: &mut Criterion) {
    let mut state = MatchState::with_seed(7).unwrap();
    // 킥오프 이후 인플레이 상태에서 측정
    for _ in 0..100 {
        state = advance(&state, TICK_DT);
    }
    c.bench_function("advance_one_tick", |b| b.iter(|| advance(black_box(&state), TICK_DT)));
}

fn bench_json_api(c: &mut Criterion) {
    let request = r#"{
        "schema_version": 1,
        "seed": 12345,
        "home": { "name": "Home", "formation": "4-3-3" },
        "away": { "name": "Away", "formation": "4-4-2" }
    }"#;
    c.bench_function("simulate_match_json", |b| {
        b.iter(|| simulate_match_json(black_box(request)).unwrap())
    });
}

criterion_group!(benches, bench_full_match, bench_single_tick, bench_json_api);
criterion_main!(benches);
