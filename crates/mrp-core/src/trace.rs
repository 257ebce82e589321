//! 啟發式計算明細
//!
//! 週期累積型啟發式逐期寫入的只追加紀錄，可直接交由呼叫端表格化呈現。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 各規則特有的衍生指標
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceMetrics {
    /// 最小單位成本
    UnitCost {
        holding_cost_per_unit: Decimal,
        order_cost_per_unit: Decimal,
        total_cost_per_unit: Decimal,
    },
    /// 最小總成本
    TotalCost { order_cost: Decimal, deviation: Decimal },
    /// Silver-Meal
    SilverMeal {
        order_cost: Decimal,
        cost_per_period: Decimal,
    },
}

impl TraceMetrics {
    /// 規則用來比較的指標值
    pub fn decision_value(&self) -> Decimal {
        match self {
            TraceMetrics::UnitCost {
                total_cost_per_unit,
                ..
            } => *total_cost_per_unit,
            TraceMetrics::TotalCost { deviation, .. } => *deviation,
            TraceMetrics::SilverMeal {
                cost_per_period, ..
            } => *cost_per_period,
        }
    }
}

/// 明細列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRow {
    /// 期別（從 0 起算）
    pub period: usize,
    /// 該期淨需求
    pub net_requirement: Decimal,
    /// 週期累積數量
    pub quantity: Decimal,
    /// 週期累積持有成本
    pub holding_cost: Decimal,
    pub metrics: TraceMetrics,
}

/// 計算明細紀錄
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceLog {
    rows: Vec<TraceRow>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一列
    pub fn record(&mut self, row: TraceRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceRow> {
        self.rows.iter()
    }

    /// 指定期別的所有列（增加時同一期會有兩列）
    pub fn rows_for_period(&self, period: usize) -> Vec<&TraceRow> {
        self.rows.iter().filter(|r| r.period == period).collect()
    }
}

impl<'a> IntoIterator for &'a TraceLog {
    type Item = &'a TraceRow;
    type IntoIter = std::slice::Iter<'a, TraceRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
