use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eh_assess::{assess, classify, score, select_missions};
use eh_core::{Categorical, Field, HeatingHours, LightingType, Profile};
use rand::seq::SliceRandom;

fn random_profiles(n: usize) -> Vec<Profile> {
    let mut rng = rand::thread_rng();
    let codes: Vec<(Field, Vec<&str>)> = vec![
        (Field::HeatingHours, HeatingHours::ALL.iter().map(|v| v.code()).collect()),
        (Field::HotWaterUsage, vec!["low", "medium", "high"]),
        (Field::CookingHabits, vec!["light_microwave", "normal_mixed", "heavy_electric", "gas_cooking"]),
        (Field::LightingType, LightingType::ALL.iter().map(|v| v.code()).collect()),
        (Field::ApplianceUsageAge, vec!["new_efficient", "mixed_age", "old_heavy_use", "few_appliances"]),
    ];
    (0..n)
        .map(|_| {
            let mut p = Profile::new();
            for (field, values) in &codes {
                let _ = p.set_answer(*field, values.choose(&mut rng).copied());
            }
            p
        })
        .collect()
}

fn bench_assess(c: &mut Criterion) {
    let profiles = random_profiles(1000);

    c.bench_function("score_1000_profiles", |b| {
        b.iter(|| {
            for p in &profiles {
                black_box(score(p));
            }
        })
    });

    c.bench_function("classify_select_1000_profiles", |b| {
        b.iter(|| {
            for p in &profiles {
                black_box(classify(p));
                black_box(select_missions(p));
            }
        })
    });

    c.bench_function("assess_1000_profiles", |b| {
        b.iter(|| {
            for p in &profiles {
                black_box(assess(p));
            }
        })
    });
}

criterion_group!(benches, bench_assess);
criterion_main!(benches);
