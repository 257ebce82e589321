//! # MRP Core
//!
//! 批量規則計算的核心資料模型與類型定義

pub mod config;
pub mod demand;
pub mod plan;
pub mod scenario;
pub mod trace;

// Re-export 主要類型
pub use config::{LotSizingRule, MrpConfig, ReleasePolicy};
pub use demand::DemandProfile;
pub use plan::{CostBreakdown, PlannedOrder};
pub use scenario::PlanningScenario;
pub use trace::{TraceLog, TraceMetrics, TraceRow};

/// MRP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MrpError {
    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("第 {receipt_period} 期的收貨在提前期 {lead_time} 下需於計劃時界之前下單")]
    NegativeReleaseIndex { receipt_period: usize, lead_time: u32 },

    #[error("情境解析錯誤: {0}")]
    ScenarioParse(#[from] serde_json::Error),

    #[error("情境讀取錯誤: {0}")]
    ScenarioIo(#[from] std::io::Error),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

impl MrpError {
    /// 數值運算溢位
    pub fn overflow(context: &str) -> Self {
        MrpError::CalculationError(format!("{context}超出數值範圍"))
    }
}

pub type Result<T> = std::result::Result<T, MrpError>;
