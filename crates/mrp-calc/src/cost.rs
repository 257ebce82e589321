//! 成本評估

use mrp_core::{CostBreakdown, MrpError};
use rust_decimal::Decimal;

/// 成本評估器
pub struct CostEvaluator;

impl CostEvaluator {
    /// 評估收貨排程的總成本
    ///
    /// 每次收貨（數量 > 0）計一次下單成本；庫存餘額 `inv += Receipt[t] − Net[t]`
    /// 為正時計 `inv · holding_cost` 的持有成本。餘額為負時不計成本，也不歸零。
    pub fn evaluate(
        receipts: &[Decimal],
        net_requirements: &[Decimal],
        order_cost: Decimal,
        holding_cost: Decimal,
    ) -> mrp_core::Result<CostBreakdown> {
        let mut inventory = Decimal::ZERO;
        let mut holding = Decimal::ZERO;
        let mut ordering = Decimal::ZERO;

        for (t, (receipt, net)) in receipts.iter().zip(net_requirements).enumerate() {
            let overflow = || MrpError::overflow(&format!("第 {t} 期成本"));

            if *receipt > Decimal::ZERO {
                ordering = ordering.checked_add(order_cost).ok_or_else(overflow)?;
            }

            inventory = receipt
                .checked_sub(*net)
                .and_then(|change| inventory.checked_add(change))
                .ok_or_else(overflow)?;

            if inventory > Decimal::ZERO {
                holding = inventory
                    .checked_mul(holding_cost)
                    .and_then(|cost| holding.checked_add(cost))
                    .ok_or_else(overflow)?;
            }
        }

        CostBreakdown::try_new(holding, ordering).ok_or_else(|| MrpError::overflow("總成本"))
    }

    /// 各期期末的計劃結餘（收貨累計 − 淨需求累計）
    pub fn projected_on_hand(
        receipts: &[Decimal],
        net_requirements: &[Decimal],
    ) -> mrp_core::Result<Vec<Decimal>> {
        let mut balance = Decimal::ZERO;
        receipts
            .iter()
            .zip(net_requirements)
            .enumerate()
            .map(|(t, (receipt, net))| {
                balance = receipt
                    .checked_sub(*net)
                    .and_then(|change| balance.checked_add(change))
                    .ok_or_else(|| MrpError::overflow(&format!("第 {t} 期計劃結餘")))?;
                Ok(balance)
            })
            .collect()
    }
}
