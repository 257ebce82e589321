//! 時間分桶（期別 → 日曆日期）

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// 時間分桶策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketingStrategy {
    /// 每日分桶
    Daily,
    /// 每週分桶
    Weekly,
    /// 每月分桶
    Monthly,
}

/// 時間分桶計算器
pub struct BucketingCalculator;

impl BucketingCalculator {
    /// 第 `period` 期的起始日期；超出日期範圍時返回 `None`
    pub fn period_start(
        start_date: NaiveDate,
        period: usize,
        strategy: BucketingStrategy,
    ) -> Option<NaiveDate> {
        let steps = u32::try_from(period).ok()?;
        match strategy {
            BucketingStrategy::Daily => start_date.checked_add_days(Days::new(u64::from(steps))),
            BucketingStrategy::Weekly => {
                start_date.checked_add_days(Days::new(u64::from(steps) * 7))
            }
            BucketingStrategy::Monthly => start_date.checked_add_months(Months::new(steps)),
        }
    }

    /// 建立 `horizon` 個期別的起始日期
    pub fn create_period_buckets(
        start_date: NaiveDate,
        horizon: usize,
        strategy: BucketingStrategy,
    ) -> Vec<NaiveDate> {
        (0..horizon)
            .map_while(|period| Self::period_start(start_date, period, strategy))
            .collect()
    }
}
