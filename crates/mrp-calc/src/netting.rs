//! 淨需求計算

use mrp_core::{DemandProfile, MrpConfig, MrpError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 淨需求計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetRequirements {
    /// 各期期初可用量（扣除淨需求前）
    pub availability: Vec<Decimal>,
    /// 各期淨需求
    pub net_requirements: Vec<Decimal>,
}

impl NetRequirements {
    /// 全期淨需求合計
    pub fn total(&self) -> mrp_core::Result<Decimal> {
        crate::checked_sum(&self.net_requirements, "總淨需求")
    }

    /// 最後一個淨需求為正的期別
    pub fn last_positive_period(&self) -> Option<usize> {
        self.net_requirements
            .iter()
            .rposition(|n| *n > Decimal::ZERO)
    }
}

/// 淨需求計算器
pub struct NettingCalculator;

impl NettingCalculator {
    /// 計算淨需求（不含計劃收貨回饋）
    ///
    /// 淨需求為正時，補足後的期末可用量恰為安全庫存，
    /// 因此與 [`NettingCalculator::calculate_with_receipts`] 以淨需求作為收貨時的結果相同。
    pub fn calculate(
        profile: &DemandProfile,
        config: &MrpConfig,
    ) -> mrp_core::Result<NetRequirements> {
        Self::calculate_with_receipts(profile, config, |_, _| Decimal::ZERO)
    }

    /// 計算淨需求，`planned_receipt(t, net_t)` 提供第 t 期的計劃收貨
    ///
    /// * `Availability[0] = max(InitialAvailability, SafetyStock)`
    /// * `Availability[t] = max(SafetyStock, Receipt[t-1] − Gross[t-1] + Availability[t-1] + Scheduled[t-1])`
    /// * `Net[t] = max(0, Gross[t] − Availability[t] − Scheduled[t] + SafetyStock)`
    pub fn calculate_with_receipts<F>(
        profile: &DemandProfile,
        config: &MrpConfig,
        mut planned_receipt: F,
    ) -> mrp_core::Result<NetRequirements>
    where
        F: FnMut(usize, Decimal) -> Decimal,
    {
        let horizon = profile.horizon();
        let safety_stock = config.safety_stock;

        let mut availability = Vec::with_capacity(horizon);
        let mut net_requirements = Vec::with_capacity(horizon);

        let mut current = config.initial_availability.max(safety_stock);
        let mut previous_receipt = Decimal::ZERO;

        for t in 0..horizon {
            let gross = profile.gross_requirements[t];
            let scheduled = profile.scheduled_receipt(t);

            if t > 0 {
                let prev_gross = profile.gross_requirements[t - 1];
                let prev_scheduled = profile.scheduled_receipt(t - 1);
                let carried = previous_receipt
                    .checked_sub(prev_gross)
                    .and_then(|v| v.checked_add(current))
                    .and_then(|v| v.checked_add(prev_scheduled))
                    .ok_or_else(|| MrpError::overflow(&format!("第 {t} 期可用量")))?;
                current = safety_stock.max(carried);
            }

            let net = gross
                .checked_sub(current)
                .and_then(|v| v.checked_sub(scheduled))
                .and_then(|v| v.checked_add(safety_stock))
                .ok_or_else(|| MrpError::overflow(&format!("第 {t} 期淨需求")))?
                .max(Decimal::ZERO);

            availability.push(current);
            net_requirements.push(net);
            previous_receipt = planned_receipt(t, net);
        }

        Ok(NetRequirements {
            availability,
            net_requirements,
        })
    }
}
