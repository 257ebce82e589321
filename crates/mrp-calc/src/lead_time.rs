//! 提前期推算（收貨期 → 下單期）

use mrp_core::{MrpError, PlannedOrder, ReleasePolicy};
use rust_decimal::Decimal;

use crate::MrpWarning;

/// 下單排程
#[derive(Debug, Clone, Default)]
pub struct ReleaseSchedule {
    /// 各期下單量
    pub releases: Vec<Decimal>,
    /// 計劃訂單（依收貨期排序）
    pub planned_orders: Vec<PlannedOrder>,
    pub warnings: Vec<MrpWarning>,
}

/// 交期計算器
pub struct LeadTimeCalculator;

impl LeadTimeCalculator {
    /// 計算下單期；落在計劃時界之前時返回 `None`
    pub fn release_period(receipt_period: usize, lead_time: u32) -> Option<usize> {
        receipt_period.checked_sub(lead_time as usize)
    }

    /// 由各期收貨量推算下單排程：`Release[t − LeadTime] += Receipt[t]`
    pub fn schedule_releases(
        receipts: &[Decimal],
        lead_time: u32,
        policy: ReleasePolicy,
    ) -> mrp_core::Result<ReleaseSchedule> {
        let mut schedule = ReleaseSchedule {
            releases: vec![Decimal::ZERO; receipts.len()],
            ..ReleaseSchedule::default()
        };

        for (receipt_period, &quantity) in receipts.iter().enumerate() {
            if quantity <= Decimal::ZERO {
                continue;
            }

            let order = match Self::release_period(receipt_period, lead_time) {
                Some(release_period) => {
                    PlannedOrder::new(receipt_period, release_period, quantity)
                }
                None => match policy {
                    ReleasePolicy::Reject => {
                        return Err(MrpError::NegativeReleaseIndex {
                            receipt_period,
                            lead_time,
                        });
                    }
                    ReleasePolicy::ClampToHorizonStart => {
                        tracing::warn!(
                            "第 {} 期收貨 {} 需提前 {} 期下單，已截到第 0 期",
                            receipt_period,
                            quantity,
                            lead_time
                        );
                        schedule.warnings.push(MrpWarning::warning(
                            Some(receipt_period),
                            format!(
                                "收貨 {quantity} 的下單期落在計劃時界之前（提前期 {lead_time}），已改為第 0 期急單"
                            ),
                        ));
                        PlannedOrder::new(receipt_period, 0, quantity).expedited()
                    }
                },
            };

            let slot = &mut schedule.releases[order.release_period];
            *slot = slot.checked_add(order.quantity).ok_or_else(|| {
                MrpError::overflow(&format!("第 {} 期下單量", order.release_period))
            })?;
            schedule.planned_orders.push(order);
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WarningSeverity;

    fn decimals(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    #[test]
    fn test_release_period() {
        assert_eq!(LeadTimeCalculator::release_period(5, 2), Some(3));
        assert_eq!(LeadTimeCalculator::release_period(2, 2), Some(0));
        assert_eq!(LeadTimeCalculator::release_period(1, 2), None);
    }

    #[test]
    fn test_schedule_offsets_by_lead_time() {
        let receipts = decimals(&[0, 560, 1680, 0, 1200, 2000, 0, 0]);

        let schedule =
            LeadTimeCalculator::schedule_releases(&receipts, 1, ReleasePolicy::Reject).unwrap();

        assert_eq!(schedule.releases, decimals(&[560, 1680, 0, 1200, 2000, 0, 0, 0]));
        assert_eq!(schedule.planned_orders.len(), 4);
        assert_eq!(schedule.planned_orders[0], PlannedOrder::new(1, 0, Decimal::from(560)));
        assert!(schedule.warnings.is_empty());
    }

    #[test]
    fn test_reject_release_before_horizon() {
        let receipts = decimals(&[200, 0, 0, 0]);

        let result = LeadTimeCalculator::schedule_releases(&receipts, 1, ReleasePolicy::Reject);

        assert!(matches!(
            result,
            Err(MrpError::NegativeReleaseIndex {
                receipt_period: 0,
                lead_time: 1
            })
        ));
    }

    #[test]
    fn test_clamp_release_before_horizon() {
        let receipts = decimals(&[100, 50, 0, 80]);

        let schedule = LeadTimeCalculator::schedule_releases(
            &receipts,
            2,
            ReleasePolicy::ClampToHorizonStart,
        )
        .unwrap();

        // 第 0、1 期收貨都截到第 0 期，第 3 期正常推算到第 1 期
        assert_eq!(schedule.releases, decimals(&[150, 80, 0, 0]));
        assert!(schedule.planned_orders[0].expedited);
        assert!(schedule.planned_orders[1].expedited);
        assert!(!schedule.planned_orders[2].expedited);
        assert_eq!(schedule.warnings.len(), 2);
        assert_eq!(schedule.warnings[0].period, Some(0));
        assert_eq!(schedule.warnings[0].severity, WarningSeverity::Warning);
    }

    #[test]
    fn test_clamped_releases_overflow() {
        let receipts = vec![Decimal::MAX, Decimal::MAX, Decimal::ZERO];

        let result = LeadTimeCalculator::schedule_releases(
            &receipts,
            2,
            ReleasePolicy::ClampToHorizonStart,
        );

        assert!(matches!(result, Err(MrpError::CalculationError(_))));
    }
}
