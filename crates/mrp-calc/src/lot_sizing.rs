//! 批量規則實現

use mrp_core::{LotSizingRule, MrpConfig, MrpError, TraceLog};
use rust_decimal::{Decimal, MathematicalOps};

use crate::heuristics::{
    CycleAggregator, CycleCosts, CycleMetric, LeastTotalCost, LeastUnitCost, SilverMeal,
};

/// 批量規則輸出
#[derive(Debug, Clone, PartialEq)]
pub struct LotSizingOutcome {
    /// 各期收貨量
    pub receipts: Vec<Decimal>,
    /// 經濟批量（僅 EOQ）
    pub economic_lot_size: Option<Decimal>,
    /// 計算明細（僅週期累積型啟發式）
    pub trace: Option<TraceLog>,
}

impl LotSizingOutcome {
    fn receipts_only(receipts: Vec<Decimal>) -> Self {
        Self {
            receipts,
            economic_lot_size: None,
            trace: None,
        }
    }
}

/// 批量規則計算器
pub struct LotSizingCalculator;

impl LotSizingCalculator {
    /// 應用批量規則
    pub fn apply(
        net_requirements: &[Decimal],
        config: &MrpConfig,
    ) -> mrp_core::Result<LotSizingOutcome> {
        match config.lot_sizing_rule {
            LotSizingRule::LotForLot => Ok(Self::lot_for_lot(net_requirements)),
            LotSizingRule::EconomicOrderQuantity => {
                Self::economic_order_quantity(net_requirements, config)
            }
            LotSizingRule::FixedPeriod { periods } => {
                Self::fixed_period(net_requirements, periods)
            }
            LotSizingRule::LeastUnitCost => {
                Self::cycle_heuristic(&LeastUnitCost, net_requirements, config)
            }
            LotSizingRule::LeastTotalCost => {
                Self::cycle_heuristic(&LeastTotalCost, net_requirements, config)
            }
            LotSizingRule::SilverMeal => {
                Self::cycle_heuristic(&SilverMeal, net_requirements, config)
            }
        }
    }

    /// 批對批（Lot for Lot）
    fn lot_for_lot(net_requirements: &[Decimal]) -> LotSizingOutcome {
        LotSizingOutcome::receipts_only(net_requirements.to_vec())
    }

    /// 經濟訂購量（EOQ）
    /// Q = ceil(sqrt(2 * 總淨需求 * 下單成本 / (持有成本 * 期數)))
    ///
    /// 期數只用來把總需求換算成每期需求率。持有成本為 0 時一次訂足全部需求。
    fn economic_order_quantity(
        net_requirements: &[Decimal],
        config: &MrpConfig,
    ) -> mrp_core::Result<LotSizingOutcome> {
        let total_requirement = crate::checked_sum(net_requirements, "EOQ 總淨需求")?;

        if total_requirement.is_zero() {
            return Ok(LotSizingOutcome {
                receipts: vec![Decimal::ZERO; net_requirements.len()],
                economic_lot_size: Some(Decimal::ZERO),
                trace: None,
            });
        }

        let lot_size = if config.holding_cost.is_zero() {
            total_requirement
        } else {
            let periods = Decimal::from(net_requirements.len());
            let radicand = Decimal::TWO
                .checked_mul(total_requirement)
                .and_then(|v| v.checked_mul(config.order_cost))
                .zip(config.holding_cost.checked_mul(periods))
                .and_then(|(numerator, denominator)| numerator.checked_div(denominator))
                .ok_or_else(|| MrpError::overflow("EOQ 批量"))?;
            radicand
                .sqrt()
                .ok_or_else(|| {
                    MrpError::CalculationError(format!("EOQ 無法開方: {radicand}"))
                })?
                .ceil()
        };

        tracing::debug!("EOQ 批量: {} (總淨需求 {})", lot_size, total_requirement);

        let mut receipts = vec![Decimal::ZERO; net_requirements.len()];
        let mut stock = Decimal::ZERO;

        // 庫存不足本期淨需求時補一批（只補一批，批量小於需求時會持續短缺）
        for (t, &net) in net_requirements.iter().enumerate() {
            if stock < net {
                receipts[t] = lot_size;
                stock = stock
                    .checked_add(lot_size)
                    .ok_or_else(|| MrpError::overflow("EOQ 庫存"))?;
            }
            stock = stock
                .checked_sub(net)
                .ok_or_else(|| MrpError::overflow("EOQ 庫存"))?;
        }

        Ok(LotSizingOutcome {
            receipts,
            economic_lot_size: Some(lot_size),
            trace: None,
        })
    }

    /// 固定週期（Fixed Period）
    /// 每 `periods` 期為一個視窗，視窗內的需求合計於第一個正淨需求期一次收貨
    fn fixed_period(
        net_requirements: &[Decimal],
        periods: usize,
    ) -> mrp_core::Result<LotSizingOutcome> {
        if periods == 0 {
            return Err(MrpError::InvalidInput(
                "固定週期長度必須至少為 1 期".to_string(),
            ));
        }

        let mut receipts = vec![Decimal::ZERO; net_requirements.len()];

        for (window_start, window) in net_requirements.chunks(periods).enumerate() {
            let window_total = crate::checked_sum(window, "固定週期批量")?;
            if let Some(offset) = window.iter().position(|n| *n > Decimal::ZERO) {
                receipts[window_start * periods + offset] = window_total;
            }
        }

        Ok(LotSizingOutcome::receipts_only(receipts))
    }

    /// 週期累積型啟發式（LUC / LTC / Silver-Meal）
    fn cycle_heuristic<M>(
        metric: &M,
        net_requirements: &[Decimal],
        config: &MrpConfig,
    ) -> mrp_core::Result<LotSizingOutcome>
    where
        M: CycleMetric,
    {
        let aggregator = CycleAggregator::new(CycleCosts::from(config));
        let mut trace = TraceLog::new();
        let cycles = aggregator.aggregate(metric, net_requirements, &mut trace)?;

        tracing::debug!(
            "{}: {} 個週期，明細 {} 列",
            metric.rule(),
            cycles.len(),
            trace.len()
        );

        Ok(LotSizingOutcome {
            receipts: CycleAggregator::receipts(&cycles, net_requirements.len()),
            economic_lot_size: None,
            trace: Some(trace),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TEXTBOOK: [i64; 8] = [0, 560, 1480, 200, 1200, 1800, 0, 200];

    fn decimals(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    fn config(rule: LotSizingRule) -> MrpConfig {
        MrpConfig::default().with_lot_sizing_rule(rule)
    }

    #[test]
    fn test_lot_for_lot() {
        let nets = decimals(&TEXTBOOK);
        let outcome = LotSizingCalculator::apply(&nets, &config(LotSizingRule::LotForLot)).unwrap();

        assert_eq!(outcome.receipts, nets);
        assert!(outcome.trace.is_none());
        assert!(outcome.economic_lot_size.is_none());
    }

    #[rstest]
    #[case::unit_holding(1000, Decimal::ONE, 1167, &[0, 1167, 1167, 0, 1167, 1167, 1167, 0])]
    #[case::half_holding(1000, Decimal::new(5, 1), 1650, &[0, 1650, 1650, 0, 1650, 1650, 0, 0])]
    #[case::cheap_orders(500, Decimal::from(2), 584, &[0, 584, 584, 584, 584, 584, 584, 584])]
    fn test_economic_order_quantity(
        #[case] order_cost: i64,
        #[case] holding_cost: Decimal,
        #[case] lot_size: i64,
        #[case] expected: &[i64],
    ) {
        let config = MrpConfig::new(1, Decimal::from(order_cost), holding_cost)
            .with_lot_sizing_rule(LotSizingRule::EconomicOrderQuantity);

        let outcome = LotSizingCalculator::apply(&decimals(&TEXTBOOK), &config).unwrap();

        // sqrt(2 * 5440 * 1000 / 8) = 1166.19 → 1167
        assert_eq!(outcome.economic_lot_size, Some(Decimal::from(lot_size)));
        assert_eq!(outcome.receipts, decimals(expected));
    }

    #[test]
    fn test_economic_order_quantity_without_demand() {
        let outcome = LotSizingCalculator::apply(
            &decimals(&[0, 0, 0]),
            &config(LotSizingRule::EconomicOrderQuantity),
        )
        .unwrap();

        assert_eq!(outcome.economic_lot_size, Some(Decimal::ZERO));
        assert_eq!(outcome.receipts, vec![Decimal::ZERO; 3]);
    }

    #[test]
    fn test_economic_order_quantity_without_holding_cost() {
        let config = MrpConfig::new(1, Decimal::from(1000), Decimal::ZERO)
            .with_lot_sizing_rule(LotSizingRule::EconomicOrderQuantity);

        let outcome = LotSizingCalculator::apply(&decimals(&TEXTBOOK), &config).unwrap();

        assert_eq!(outcome.economic_lot_size, Some(Decimal::from(5440)));
        assert_eq!(outcome.receipts, decimals(&[0, 5440, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_economic_order_quantity_single_lot_per_period() {
        // 批量 2 小於單期需求 10：每期只補一批
        let config = MrpConfig::new(1, Decimal::ONE, Decimal::from(10))
            .with_lot_sizing_rule(LotSizingRule::EconomicOrderQuantity);

        let outcome = LotSizingCalculator::apply(&decimals(&[10, 10]), &config).unwrap();

        // sqrt(2 * 20 * 1 / (10 * 2)) = sqrt(2) → 2
        assert_eq!(outcome.economic_lot_size, Some(Decimal::TWO));
        assert_eq!(outcome.receipts, decimals(&[2, 2]));
    }

    #[rstest]
    #[case::two(2, &[0, 560, 1680, 0, 3000, 0, 0, 200])]
    #[case::three(3, &[0, 2040, 0, 3200, 0, 0, 0, 200])]
    #[case::four(4, &[0, 2240, 0, 0, 3200, 0, 0, 0])]
    #[case::one(1, &TEXTBOOK)]
    fn test_fixed_period(#[case] periods: usize, #[case] expected: &[i64]) {
        let outcome = LotSizingCalculator::apply(
            &decimals(&TEXTBOOK),
            &config(LotSizingRule::FixedPeriod { periods }),
        )
        .unwrap();

        assert_eq!(outcome.receipts, decimals(expected));
    }

    #[test]
    fn test_fixed_period_empty_window_places_nothing() {
        let outcome = LotSizingCalculator::apply(
            &decimals(&[0, 0, 40, 10, 0]),
            &config(LotSizingRule::FixedPeriod { periods: 2 }),
        )
        .unwrap();

        assert_eq!(outcome.receipts, decimals(&[0, 0, 50, 0, 0]));
    }

    #[test]
    fn test_fixed_period_rejects_empty_window() {
        let result = LotSizingCalculator::apply(
            &decimals(&TEXTBOOK),
            &config(LotSizingRule::FixedPeriod { periods: 0 }),
        );

        assert!(matches!(result, Err(MrpError::InvalidInput(_))));
    }

    #[rstest]
    #[case::economic_order_quantity(LotSizingRule::EconomicOrderQuantity)]
    #[case::fixed_period(LotSizingRule::FixedPeriod { periods: 2 })]
    #[case::least_unit_cost(LotSizingRule::LeastUnitCost)]
    #[case::least_total_cost(LotSizingRule::LeastTotalCost)]
    #[case::silver_meal(LotSizingRule::SilverMeal)]
    fn test_overflowing_quantities_are_reported(#[case] rule: LotSizingRule) {
        let result = LotSizingCalculator::apply(&[Decimal::MAX, Decimal::MAX], &config(rule));

        assert!(matches!(result, Err(MrpError::CalculationError(_))));
    }

    #[rstest]
    #[case::luc(LotSizingRule::LeastUnitCost, &[0, 2040, 0, 1400, 0, 1800, 0, 200])]
    #[case::ltc(LotSizingRule::LeastTotalCost, &[0, 2040, 0, 1400, 0, 2000, 0, 0])]
    #[case::sm(LotSizingRule::SilverMeal, &[0, 560, 1680, 0, 1200, 2000, 0, 0])]
    fn test_cycle_heuristics_carry_trace(#[case] rule: LotSizingRule, #[case] expected: &[i64]) {
        let outcome = LotSizingCalculator::apply(&decimals(&TEXTBOOK), &config(rule)).unwrap();

        assert_eq!(outcome.receipts, decimals(expected));
        assert!(outcome.trace.is_some_and(|trace| !trace.is_empty()));
    }
}
