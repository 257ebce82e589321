//! 批量規則主計算器

use mrp_core::{DemandProfile, MrpConfig};
use rust_decimal::Decimal;

use crate::cost::CostEvaluator;
use crate::lead_time::LeadTimeCalculator;
use crate::lot_sizing::LotSizingCalculator;
use crate::netting::NettingCalculator;
use crate::{LotSizingResult, MrpWarning};

/// MRP 計算器
///
/// 持有一份不可變的配置，每次 [`MrpCalculator::calculate`] 都從輸入重新計算，不保留狀態。
#[derive(Debug, Clone)]
pub struct MrpCalculator {
    config: MrpConfig,
}

impl MrpCalculator {
    /// 創建新的計算器
    pub fn new(config: MrpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MrpConfig {
        &self.config
    }

    /// 主計算入口
    pub fn calculate(&self, profile: &DemandProfile) -> mrp_core::Result<LotSizingResult> {
        let config = &self.config;

        tracing::info!(
            "開始批量計算：規則 {}，計劃時界 {} 期，提前期 {} 期",
            config.lot_sizing_rule,
            profile.horizon(),
            config.lead_time_periods
        );

        let start_time = std::time::Instant::now();

        // Step 0: 輸入檢查
        profile.validate()?;
        config.validate()?;

        // Step 1: 淨需求
        tracing::debug!("Step 1: 淨需求計算");
        let netting = NettingCalculator::calculate(profile, config)?;
        tracing::debug!("總淨需求: {}", netting.total()?);

        // Step 2: 批量規則
        tracing::debug!("Step 2: 應用批量規則");
        let outcome = LotSizingCalculator::apply(&netting.net_requirements, config)?;

        // Step 3: 提前期推算
        tracing::debug!("Step 3: 提前期推算");
        let schedule = LeadTimeCalculator::schedule_releases(
            &outcome.receipts,
            config.lead_time_periods,
            config.release_policy,
        )?;

        // Step 4: 成本評估
        tracing::debug!("Step 4: 成本評估");
        let cost = CostEvaluator::evaluate(
            &outcome.receipts,
            &netting.net_requirements,
            config.order_cost,
            config.holding_cost,
        )?;
        let projected_on_hand =
            CostEvaluator::projected_on_hand(&outcome.receipts, &netting.net_requirements)?;

        let mut result = LotSizingResult {
            rule: config.lot_sizing_rule,
            availability: netting.availability,
            net_requirements: netting.net_requirements,
            receipts: outcome.receipts,
            releases: schedule.releases,
            projected_on_hand,
            planned_orders: schedule.planned_orders,
            economic_lot_size: outcome.economic_lot_size,
            trace: outcome.trace,
            cost,
            warnings: schedule.warnings,
            calculation_time_ms: None,
        };

        if result.net_requirements.iter().all(|n| n.is_zero()) {
            result.add_warning(MrpWarning::info(
                None,
                "計劃時界內沒有淨需求，未產生任何訂單".to_string(),
            ));
        } else if let Some(period) = result
            .projected_on_hand
            .iter()
            .position(|balance| *balance < Decimal::ZERO)
        {
            tracing::warn!("第 {} 期起計劃結餘為負，批量不足以滿足淨需求", period);
            result.add_warning(MrpWarning::warning(
                Some(period),
                format!("第 {period} 期起計劃收貨不足以滿足淨需求"),
            ));
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("批量計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "計劃訂單數量: {}，總成本: {}",
            result.order_count(),
            result.cost.total
        );

        Ok(result)
    }
}
