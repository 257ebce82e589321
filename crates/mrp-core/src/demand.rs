//! 需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MrpError, Result};

/// 逐期需求資料
///
/// 所有序列以期別索引 `t ∈ [0, T)` 對齊。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandProfile {
    /// 毛需求
    pub gross_requirements: Vec<Decimal>,

    /// 已排定收貨（省略時視為全 0）
    #[serde(default)]
    pub scheduled_receipts: Vec<Decimal>,
}

impl DemandProfile {
    /// 創建新的需求資料，已排定收貨全為 0
    pub fn new(gross_requirements: Vec<Decimal>) -> Self {
        let scheduled_receipts = vec![Decimal::ZERO; gross_requirements.len()];
        Self {
            gross_requirements,
            scheduled_receipts,
        }
    }

    /// 由整數序列建立
    pub fn from_quantities(gross_requirements: &[i64]) -> Self {
        Self::new(gross_requirements.iter().copied().map(Decimal::from).collect())
    }

    /// 建構器模式：設置已排定收貨
    pub fn with_scheduled_receipts(mut self, receipts: Vec<Decimal>) -> Self {
        self.scheduled_receipts = receipts;
        self
    }

    /// 計劃期數 T
    pub fn horizon(&self) -> usize {
        self.gross_requirements.len()
    }

    /// 第 t 期的已排定收貨
    pub fn scheduled_receipt(&self, period: usize) -> Decimal {
        self.scheduled_receipts
            .get(period)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 檢查需求資料是否合法
    pub fn validate(&self) -> Result<()> {
        if self.gross_requirements.is_empty() {
            return Err(MrpError::InvalidInput("計劃時界不可為空".to_string()));
        }

        // 反序列化時省略的已排定收貨以空序列表示
        if !self.scheduled_receipts.is_empty()
            && self.scheduled_receipts.len() != self.gross_requirements.len()
        {
            return Err(MrpError::InvalidInput(format!(
                "已排定收貨期數 {} 與毛需求期數 {} 不一致",
                self.scheduled_receipts.len(),
                self.gross_requirements.len()
            )));
        }

        if let Some((period, qty)) = self
            .gross_requirements
            .iter()
            .enumerate()
            .find(|(_, q)| **q < Decimal::ZERO)
        {
            return Err(MrpError::InvalidInput(format!(
                "第 {period} 期毛需求為負: {qty}"
            )));
        }

        if let Some((period, qty)) = self
            .scheduled_receipts
            .iter()
            .enumerate()
            .find(|(_, q)| **q < Decimal::ZERO)
        {
            return Err(MrpError::InvalidInput(format!(
                "第 {period} 期已排定收貨為負: {qty}"
            )));
        }

        Ok(())
    }
}
