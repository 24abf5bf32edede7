use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eh_advisor::{match_intent, respond};
use eh_core::{HeatingHours, LightingType, Profile};

fn bench_respond(c: &mut Criterion) {
    let profile = Profile {
        heating_hours: Some(HeatingHours::SixToEight),
        lighting_type: Some(LightingType::Mixed),
        ..Default::default()
    };
    let queries = [
        "hi",
        "thanks!",
        "how do I reduce my heating bill?",
        "my boiler is 20 years old, should I replace it",
        "what grants can I get",
        "should I get solar panels?",
        "is my fridge too old",
        "give me your best tips",
        "something the rules do not cover",
    ];

    c.bench_function("match_intent_1000_mixed", |b| {
        b.iter(|| {
            for _ in 0..111 {
                for q in &queries {
                    black_box(match_intent(q));
                }
            }
        })
    });

    c.bench_function("respond_1000_mixed", |b| {
        b.iter(|| {
            for _ in 0..111 {
                for q in &queries {
                    black_box(respond(q, &profile));
                }
            }
        })
    });
}

criterion_group!(benches, bench_respond);
criterion_main!(benches);
