//! 策略比較示例：從 JSON 情境載入，比較所有批量規則的總成本
//!
//! ```text
//! cargo run --example compare_strategies -- demos/scenario.json
//! ```

use anyhow::Context;
use mrp_lotsizing::{logging, LotSizingRule, PlanningScenario, StrategyComparator};

fn main() -> anyhow::Result<()> {
    logging::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/scenario.json".to_string());
    let scenario = PlanningScenario::from_json_file(&path)
        .with_context(|| format!("無法載入情境 {path}"))?;

    println!("=== 策略比較：{} ===\n", scenario.name);

    let mut rules = LotSizingRule::comparison_set();
    rules.push(LotSizingRule::EconomicOrderQuantity);

    let report = StrategyComparator::new(scenario.config.clone())
        .with_rules(rules)
        .compare(&scenario.profile)?;

    println!("{:<4} {:<26} {:>12} {:>12} {:>12}", "#", "規則", "總成本", "持有成本", "下單成本");
    for (rank, entry) in report.entries.iter().enumerate() {
        println!(
            "{:<4} {:<26} {:>12} {:>12} {:>12}",
            rank + 1,
            entry.label,
            entry.cost.total.round_dp(2),
            entry.cost.holding.round_dp(2),
            entry.cost.ordering.round_dp(2)
        );
    }

    if let Some(best) = report.best() {
        println!("\n最佳規則: {}", best.label);
        println!("{}", serde_json::to_string_pretty(&best.result.planned_orders)?);
    }

    Ok(())
}
