//! 計劃訂單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 計劃訂單（批量規則計算結果）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedOrder {
    /// 收貨期
    pub receipt_period: usize,

    /// 下單期
    pub release_period: usize,

    /// 計劃數量
    pub quantity: Decimal,

    /// 下單期已被截到計劃時界起點（實際無法滿足提前期）
    pub expedited: bool,
}

impl PlannedOrder {
    /// 創建新的計劃訂單
    pub fn new(receipt_period: usize, release_period: usize, quantity: Decimal) -> Self {
        Self {
            receipt_period,
            release_period,
            quantity,
            expedited: false,
        }
    }

    /// 建構器模式：標記為急單
    pub fn expedited(mut self) -> Self {
        self.expedited = true;
        self
    }
}

/// 成本明細
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 總成本
    pub total: Decimal,
    /// 持有成本
    pub holding: Decimal,
    /// 下單成本
    pub ordering: Decimal,
}

impl CostBreakdown {
    /// 由持有成本與下單成本組成，合計溢位時返回 `None`
    pub fn try_new(holding: Decimal, ordering: Decimal) -> Option<Self> {
        Some(Self {
            total: holding.checked_add(ordering)?,
            holding,
            ordering,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planned_order() {
        let order = PlannedOrder::new(5, 3, Decimal::from(200));

        assert_eq!(order.receipt_period, 5);
        assert_eq!(order.release_period, 3);
        assert!(!order.expedited);

        let late = PlannedOrder::new(0, 0, Decimal::from(100)).expedited();
        assert!(late.expedited);
    }

    #[test]
    fn test_cost_breakdown_total() {
        let cost = CostBreakdown::try_new(Decimal::from(600), Decimal::from(4000)).unwrap();
        assert_eq!(cost.total, Decimal::from(4600));
    }

    #[test]
    fn test_cost_breakdown_overflow() {
        assert_eq!(CostBreakdown::try_new(Decimal::MAX, Decimal::ONE), None);
    }
}
