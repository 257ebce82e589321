//! 集成測試

use mrp_lotsizing::*;
use rstest::rstest;
use rust_decimal::Decimal;

const TEXTBOOK: [i64; 8] = [0, 560, 1480, 200, 1200, 1800, 0, 200];

fn decimals(values: &[i64]) -> Vec<Decimal> {
    values.iter().copied().map(Decimal::from).collect()
}

#[test]
fn test_textbook_lot_for_lot() {
    logging::init_test();

    // 無庫存、無排定收貨：淨需求等於毛需求，批對批逐期收貨
    let profile = DemandProfile::from_quantities(&TEXTBOOK);
    let config = MrpConfig::new(1, Decimal::from(1000), Decimal::ONE);

    let result = MrpCalculator::new(config).calculate(&profile).unwrap();

    assert_eq!(result.net_requirements, decimals(&TEXTBOOK));
    assert_eq!(result.receipts, result.net_requirements);
    assert_eq!(result.cost.ordering, Decimal::from(1000) * Decimal::from(6));
    assert_eq!(result.cost.holding, Decimal::ZERO);
}

#[test]
fn test_silver_meal_aggregates_whole_horizon() {
    let profile = DemandProfile::from_quantities(&[100, 0, 0, 100]);
    let config = MrpConfig::new(1, Decimal::from(1000), Decimal::ONE)
        .with_lot_sizing_rule(LotSizingRule::SilverMeal);

    let result = MrpCalculator::new(config).calculate(&profile).unwrap();

    // 一張 200 的訂單於第一期收貨；提前期使下單期落在時界之前，截為急單
    assert_eq!(result.receipts, decimals(&[200, 0, 0, 0]));
    assert_eq!(result.order_count(), 1);
    assert!(result.planned_orders[0].expedited);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_safety_stock_and_scheduled_receipts() {
    let profile = DemandProfile::from_quantities(&[50, 300, 100, 400])
        .with_scheduled_receipts(decimals(&[0, 100, 0, 0]));
    let config = MrpConfig::default()
        .with_safety_stock(Decimal::from(20))
        .with_initial_availability(Decimal::from(120))
        .with_lot_sizing_rule(LotSizingRule::FixedPeriod { periods: 2 });

    let result = MrpCalculator::new(config).calculate(&profile).unwrap();

    assert_eq!(result.availability, decimals(&[120, 70, 20, 20]));
    assert_eq!(result.net_requirements, decimals(&[0, 150, 100, 400]));
    assert_eq!(result.receipts, decimals(&[0, 150, 500, 0]));
    assert_eq!(result.releases, decimals(&[150, 500, 0, 0]));
    // 第 2 期多收 400，持有一期
    assert_eq!(result.cost.holding, Decimal::from(400));
}

#[rstest]
#[case::lot_for_lot(LotSizingRule::LotForLot)]
#[case::fixed_period(LotSizingRule::FixedPeriod { periods: 3 })]
#[case::least_unit_cost(LotSizingRule::LeastUnitCost)]
#[case::least_total_cost(LotSizingRule::LeastTotalCost)]
#[case::silver_meal(LotSizingRule::SilverMeal)]
fn test_receipts_cover_net_requirements(#[case] rule: LotSizingRule) {
    let profile = DemandProfile::from_quantities(&TEXTBOOK);
    let config = MrpConfig::default().with_lot_sizing_rule(rule);

    let result = MrpCalculator::new(config).calculate(&profile).unwrap();

    let received: Decimal = result.receipts.iter().copied().sum();
    let required: Decimal = result.net_requirements.iter().copied().sum();
    assert_eq!(received, required);
    assert!(result.projected_on_hand.iter().all(|b| *b >= Decimal::ZERO));
    assert_eq!(result.projected_on_hand.last(), Some(&Decimal::ZERO));
}

#[test]
fn test_strategy_comparison_ranks_by_total_cost() {
    let profile = DemandProfile::from_quantities(&TEXTBOOK);
    let config = MrpConfig::new(1, Decimal::from(500), Decimal::from(2));

    let report = StrategyComparator::new(config).compare(&profile).unwrap();

    assert_eq!(report.len(), 7);
    let best = report.best().unwrap();
    assert_eq!(best.cost.total, Decimal::from(3000));
    assert_eq!(best.rule, LotSizingRule::LotForLot);
    assert_eq!(
        report.get(LotSizingRule::SilverMeal).unwrap().cost.total,
        Decimal::from(3200)
    );
    assert_eq!(
        report.get(LotSizingRule::LeastUnitCost).unwrap().cost.total,
        Decimal::from(4900)
    );
}

#[test]
fn test_scenario_file_roundtrip() {
    let scenario = PlanningScenario::from_json_str(
        r#"{
            "name": "weekly plan",
            "profile": { "gross_requirements": [0, 560, 1480, 200, 1200, 1800, 0, 200] },
            "config": { "lot_sizing_rule": "least_total_cost" }
        }"#,
    )
    .unwrap();

    let result = MrpCalculator::new(scenario.config.clone())
        .calculate(&scenario.profile)
        .unwrap();

    assert_eq!(result.receipts, decimals(&[0, 2040, 0, 1400, 0, 2000, 0, 0]));
    assert_eq!(result.cost.total, Decimal::from(6080));

    let trace = result.trace.unwrap();
    assert!(trace.iter().all(|row| matches!(row.metrics, TraceMetrics::TotalCost { .. })));
}

#[test]
fn test_ordering_cost_scales_with_order_cost() {
    let profile = DemandProfile::from_quantities(&TEXTBOOK);
    let base = MrpCalculator::new(MrpConfig::new(1, Decimal::from(1000), Decimal::ONE))
        .calculate(&profile)
        .unwrap();
    let doubled = MrpCalculator::new(MrpConfig::new(1, Decimal::from(2000), Decimal::ONE))
        .calculate(&profile)
        .unwrap();

    assert_eq!(doubled.cost.ordering, base.cost.ordering * Decimal::from(2));
}

#[test]
fn test_unrepresentable_demand_is_an_error() {
    let profile = DemandProfile::new(vec![Decimal::MAX, Decimal::MAX]);
    let config = MrpConfig::default().with_lot_sizing_rule(LotSizingRule::EconomicOrderQuantity);

    let result = MrpCalculator::new(config).calculate(&profile);

    assert!(matches!(result, Err(MrpError::CalculationError(_))));
}
