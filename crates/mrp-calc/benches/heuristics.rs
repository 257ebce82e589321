use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mrp_calc::MrpCalculator;
use mrp_core::{DemandProfile, LotSizingRule, MrpConfig};

fn bench_heuristics(c: &mut Criterion) {
    let gross: Vec<i64> = (0..52).map(|week| (week * 37 % 11) * 100).collect();
    let profile = DemandProfile::from_quantities(&gross);

    for rule in [
        LotSizingRule::LeastUnitCost,
        LotSizingRule::LeastTotalCost,
        LotSizingRule::SilverMeal,
    ] {
        let calculator = MrpCalculator::new(MrpConfig::default().with_lot_sizing_rule(rule));
        c.bench_function(&format!("{rule} 52 periods"), |b| {
            b.iter(|| calculator.calculate(black_box(&profile)))
        });
    }
}

criterion_group!(benches, bench_heuristics);
criterion_main!(benches);
