//! # MRP Optimizer
//!
//! 批量規則比較：以相同輸入執行多種規則，依總成本排序

pub mod comparator;

// Re-export 主要類型
pub use comparator::StrategyComparator;

use mrp_calc::LotSizingResult;
use mrp_core::{CostBreakdown, LotSizingRule};
use serde::Serialize;

/// 單一規則的比較結果
#[derive(Debug, Clone, Serialize)]
pub struct StrategyOutcome {
    pub rule: LotSizingRule,

    /// 顯示名稱
    pub label: String,

    pub cost: CostBreakdown,

    /// 完整計算結果
    pub result: LotSizingResult,
}

/// 比較報告（依總成本由低到高）
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub entries: Vec<StrategyOutcome>,
}

impl ComparisonReport {
    /// 總成本最低的規則
    pub fn best(&self) -> Option<&StrategyOutcome> {
        self.entries.first()
    }

    /// 查詢指定規則的結果
    pub fn get(&self, rule: LotSizingRule) -> Option<&StrategyOutcome> {
        self.entries.iter().find(|entry| entry.rule == rule)
    }

    /// 指定規則的名次（從 1 起算）
    pub fn rank_of(&self, rule: LotSizingRule) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.rule == rule)
            .map(|idx| idx + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
