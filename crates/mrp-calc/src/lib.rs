//! # MRP Calculation Engine
//!
//! 批量規則計算引擎：淨需求、批量規則、提前期推算與成本評估

pub mod bucketing;
pub mod calculator;
pub mod cost;
pub mod heuristics;
pub mod lead_time;
pub mod lot_sizing;
pub mod netting;

use chrono::NaiveDate;
use mrp_core::{CostBreakdown, LotSizingRule, MrpError, PlannedOrder, TraceLog};
use rust_decimal::Decimal;
use serde::Serialize;

// Re-export 主要類型
pub use bucketing::BucketingStrategy;
pub use calculator::MrpCalculator;
pub use cost::CostEvaluator;
pub use netting::{NetRequirements, NettingCalculator};

/// 單一批量規則的計算結果
#[derive(Debug, Clone, Serialize)]
pub struct LotSizingResult {
    /// 使用的批量規則
    pub rule: LotSizingRule,

    /// 各期期初可用量
    pub availability: Vec<Decimal>,

    /// 各期淨需求
    pub net_requirements: Vec<Decimal>,

    /// 各期計劃收貨
    pub receipts: Vec<Decimal>,

    /// 各期計劃下單
    pub releases: Vec<Decimal>,

    /// 各期期末計劃結餘（收貨累計 − 淨需求累計）
    pub projected_on_hand: Vec<Decimal>,

    /// 計劃訂單
    pub planned_orders: Vec<PlannedOrder>,

    /// 經濟批量（僅 EOQ）
    pub economic_lot_size: Option<Decimal>,

    /// 計算明細（僅週期累積型啟發式）
    pub trace: Option<TraceLog>,

    /// 成本
    pub cost: CostBreakdown,

    /// 警告信息
    pub warnings: Vec<MrpWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl LotSizingResult {
    /// 計劃時界期數
    pub fn horizon(&self) -> usize {
        self.net_requirements.len()
    }

    /// 下單次數
    pub fn order_count(&self) -> usize {
        self.planned_orders.len()
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: MrpWarning) {
        self.warnings.push(warning);
    }

    /// 把計劃訂單對應到日曆日期
    pub fn dated_orders(&self, start_date: NaiveDate, strategy: BucketingStrategy) -> Vec<DatedOrder> {
        self.planned_orders
            .iter()
            .filter_map(|order| {
                let release_date = bucketing::BucketingCalculator::period_start(
                    start_date,
                    order.release_period,
                    strategy,
                )?;
                let receipt_date = bucketing::BucketingCalculator::period_start(
                    start_date,
                    order.receipt_period,
                    strategy,
                )?;
                Some(DatedOrder {
                    order: order.clone(),
                    release_date,
                    receipt_date,
                })
            })
            .collect()
    }
}

/// 逐項累加，溢位時返回計算錯誤
pub(crate) fn checked_sum<'a, I>(values: I, context: &str) -> mrp_core::Result<Decimal>
where
    I: IntoIterator<Item = &'a Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))
        .ok_or_else(|| MrpError::overflow(context))
}

/// 附帶日曆日期的計劃訂單
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedOrder {
    pub order: PlannedOrder,
    /// 下單日期
    pub release_date: NaiveDate,
    /// 收貨日期
    pub receipt_date: NaiveDate,
}

/// MRP 警告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MrpWarning {
    /// 相關期別
    pub period: Option<usize>,
    pub message: String,
    pub severity: WarningSeverity,
}

impl MrpWarning {
    pub fn new(period: Option<usize>, message: String, severity: WarningSeverity) -> Self {
        Self {
            period,
            message,
            severity,
        }
    }

    pub fn info(period: Option<usize>, message: String) -> Self {
        Self::new(period, message, WarningSeverity::Info)
    }

    pub fn warning(period: Option<usize>, message: String) -> Self {
        Self::new(period, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
