//! 批量規則配置模型

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MrpError, Result};

/// 物料批量規則參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MrpConfig {
    /// 提前期（期數，至少 1）
    pub lead_time_periods: u32,

    /// 安全庫存
    pub safety_stock: Decimal,

    /// 期初可用量
    pub initial_availability: Decimal,

    /// 每次下單成本（€/單）
    pub order_cost: Decimal,

    /// 持有成本（€/單位·期）
    pub holding_cost: Decimal,

    /// 批量規則
    pub lot_sizing_rule: LotSizingRule,

    /// 下單期落在計劃時界之前時的處理方式
    pub release_policy: ReleasePolicy,
}

impl MrpConfig {
    /// 創建新的配置
    pub fn new(lead_time_periods: u32, order_cost: Decimal, holding_cost: Decimal) -> Self {
        Self {
            lead_time_periods,
            order_cost,
            holding_cost,
            ..Self::default()
        }
    }

    /// 建構器模式：設置批量規則
    pub fn with_lot_sizing_rule(mut self, rule: LotSizingRule) -> Self {
        self.lot_sizing_rule = rule;
        self
    }

    /// 建構器模式：設置安全庫存
    pub fn with_safety_stock(mut self, stock: Decimal) -> Self {
        self.safety_stock = stock;
        self
    }

    /// 建構器模式：設置期初可用量
    pub fn with_initial_availability(mut self, availability: Decimal) -> Self {
        self.initial_availability = availability;
        self
    }

    /// 建構器模式：設置下單期越界處理方式
    pub fn with_release_policy(mut self, policy: ReleasePolicy) -> Self {
        self.release_policy = policy;
        self
    }

    /// 檢查參數是否合法
    ///
    /// 所有批量規則都假設這些前置條件成立，計算前必須先通過檢查。
    pub fn validate(&self) -> Result<()> {
        if self.lead_time_periods < 1 {
            return Err(MrpError::InvalidInput(
                "提前期必須至少為 1 期".to_string(),
            ));
        }
        if self.safety_stock < Decimal::ZERO {
            return Err(MrpError::InvalidInput(format!(
                "安全庫存不可為負: {}",
                self.safety_stock
            )));
        }
        if self.order_cost <= Decimal::ZERO {
            return Err(MrpError::InvalidInput(format!(
                "下單成本必須為正: {}",
                self.order_cost
            )));
        }
        if self.holding_cost < Decimal::ZERO {
            return Err(MrpError::InvalidInput(format!(
                "持有成本不可為負: {}",
                self.holding_cost
            )));
        }
        if let LotSizingRule::FixedPeriod { periods: 0 } = self.lot_sizing_rule {
            return Err(MrpError::InvalidInput(
                "固定週期長度必須至少為 1 期".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MrpConfig {
    fn default() -> Self {
        Self {
            lead_time_periods: 1,
            safety_stock: Decimal::ZERO,
            initial_availability: Decimal::ZERO,
            order_cost: Decimal::from(1000),
            holding_cost: Decimal::ONE,
            lot_sizing_rule: LotSizingRule::LotForLot,
            release_policy: ReleasePolicy::ClampToHorizonStart,
        }
    }
}

/// 批量規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LotSizingRule {
    /// 批對批（Lot for Lot）- 按淨需求逐期訂購
    LotForLot,

    /// 經濟訂購量（Economic Order Quantity）
    EconomicOrderQuantity,

    /// 固定週期（Fixed Period）- 每 `periods` 期合併一次
    FixedPeriod { periods: usize },

    /// 最小單位成本（Least Unit Cost）
    LeastUnitCost,

    /// 最小總成本（Least Total Cost）
    LeastTotalCost,

    /// Silver-Meal 啟發式
    SilverMeal,
}

impl LotSizingRule {
    /// 成本比較時預設執行的規則組合
    pub fn comparison_set() -> Vec<LotSizingRule> {
        vec![
            LotSizingRule::LotForLot,
            LotSizingRule::FixedPeriod { periods: 2 },
            LotSizingRule::FixedPeriod { periods: 3 },
            LotSizingRule::FixedPeriod { periods: 4 },
            LotSizingRule::LeastUnitCost,
            LotSizingRule::LeastTotalCost,
            LotSizingRule::SilverMeal,
        ]
    }

    /// 顯示名稱
    pub fn label(&self) -> String {
        match self {
            LotSizingRule::LotForLot => "Lot for Lot".to_string(),
            LotSizingRule::EconomicOrderQuantity => "Economic Order Quantity".to_string(),
            LotSizingRule::FixedPeriod { periods } => format!("Fixed Period ({periods})"),
            LotSizingRule::LeastUnitCost => "Least Unit Cost".to_string(),
            LotSizingRule::LeastTotalCost => "Least Total Cost".to_string(),
            LotSizingRule::SilverMeal => "Silver-Meal".to_string(),
        }
    }
}

impl fmt::Display for LotSizingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// 下單期越界處理方式
///
/// 收貨期 `t` 小於提前期時，`t - lead_time` 落在計劃時界之前。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleasePolicy {
    /// 拒絕整個計劃
    Reject,
    /// 下單期截到第 0 期，標記為急單並產生警告
    ClampToHorizonStart,
}
