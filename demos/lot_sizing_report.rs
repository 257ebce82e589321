//! 單一規則計算示例：列出 MRP 表格與啟發式計算明細

use chrono::NaiveDate;
use mrp_lotsizing::{
    logging, BucketingStrategy, DemandProfile, LotSizingRule, MrpCalculator, MrpConfig,
};
use rust_decimal::Decimal;

fn print_row(label: &str, values: &[Decimal]) {
    let cells: Vec<String> = values.iter().map(|v| format!("{:>7}", v.round_dp(1))).collect();
    println!("{:<14}{}", label, cells.join(""));
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let profile = DemandProfile::from_quantities(&[0, 560, 1480, 200, 1200, 1800, 0, 200]);
    let config = MrpConfig::new(1, Decimal::from(1000), Decimal::ONE)
        .with_lot_sizing_rule(LotSizingRule::LeastUnitCost);

    let result = MrpCalculator::new(config).calculate(&profile)?;

    println!("=== {} ===\n", result.rule);
    let periods: Vec<Decimal> = (1..=result.horizon()).map(Decimal::from).collect();
    print_row("期別", &periods);
    print_row("毛需求", &profile.gross_requirements);
    print_row("可用量", &result.availability);
    print_row("淨需求", &result.net_requirements);
    print_row("計劃收貨", &result.receipts);
    print_row("計劃下單", &result.releases);

    println!(
        "\n下單成本 {}，持有成本 {}，總成本 {}",
        result.cost.ordering, result.cost.holding, result.cost.total
    );

    if let Some(trace) = &result.trace {
        println!("\n{:>4} {:>7} {:>7} {:>9} {:>9}", "期", "淨需求", "Q", "持有成本", "指標");
        for row in trace {
            let value = row.metrics.decision_value();
            println!(
                "{:>4} {:>7} {:>7} {:>9} {:>9}",
                row.period + 1,
                row.net_requirement,
                row.quantity,
                row.holding_cost,
                value.round_dp(4)
            );
        }
    }

    let start =
        NaiveDate::from_ymd_opt(2025, 11, 3).ok_or_else(|| anyhow::anyhow!("無效的起始日期"))?;
    println!();
    for dated in result.dated_orders(start, BucketingStrategy::Weekly) {
        println!(
            "{} 下單 {} → {} 到貨",
            dated.release_date, dated.order.quantity, dated.receipt_date
        );
    }

    for warning in &result.warnings {
        println!("[{:?}] {}", warning.severity, warning.message);
    }

    Ok(())
}
