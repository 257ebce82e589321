//! 策略比較器

use mrp_calc::MrpCalculator;
use mrp_core::{DemandProfile, LotSizingRule, MrpConfig};
use rayon::prelude::*;

use crate::{ComparisonReport, StrategyOutcome};

/// 策略比較器
///
/// 每個規則各自持有一份配置快照，彼此不共享可變狀態，可以並行執行。
#[derive(Debug, Clone)]
pub struct StrategyComparator {
    config: MrpConfig,
    rules: Vec<LotSizingRule>,
}

impl StrategyComparator {
    /// 使用預設規則組合創建比較器
    pub fn new(config: MrpConfig) -> Self {
        Self {
            config,
            rules: LotSizingRule::comparison_set(),
        }
    }

    /// 建構器模式：指定要比較的規則
    pub fn with_rules(mut self, rules: Vec<LotSizingRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &[LotSizingRule] {
        &self.rules
    }

    /// 執行所有規則並依總成本排序
    ///
    /// 總成本相同時保留規則的宣告順序。任一規則失敗時返回該錯誤。
    pub fn compare(&self, profile: &DemandProfile) -> mrp_core::Result<ComparisonReport> {
        tracing::info!(
            "開始策略比較：{} 種規則，計劃時界 {} 期",
            self.rules.len(),
            profile.horizon()
        );

        let mut entries = self
            .rules
            .par_iter()
            .map(|&rule| {
                let snapshot = self.config.clone().with_lot_sizing_rule(rule);
                let result = MrpCalculator::new(snapshot).calculate(profile)?;
                Ok(StrategyOutcome {
                    rule,
                    label: rule.label(),
                    cost: result.cost,
                    result,
                })
            })
            .collect::<mrp_core::Result<Vec<_>>>()?;

        entries.sort_by(|a, b| a.cost.total.cmp(&b.cost.total));

        if let Some(best) = entries.first() {
            tracing::info!("最低總成本: {} ({})", best.label, best.cost.total);
        }

        Ok(ComparisonReport { entries })
    }
}
