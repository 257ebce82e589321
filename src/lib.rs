//! # MRP Lot Sizing
//!
//! 批量規則計算：淨需求、六種批量規則、成本評估與策略比較
//!
//! ```
//! use mrp_lotsizing::{DemandProfile, LotSizingRule, MrpCalculator, MrpConfig};
//!
//! let profile = DemandProfile::from_quantities(&[0, 560, 1480, 200, 1200, 1800, 0, 200]);
//! let config = MrpConfig::default().with_lot_sizing_rule(LotSizingRule::SilverMeal);
//!
//! let result = MrpCalculator::new(config).calculate(&profile).unwrap();
//! assert_eq!(result.order_count(), 4);
//! ```

pub mod logging;

pub use mrp_calc::{
    BucketingStrategy, CostEvaluator, DatedOrder, LotSizingResult, MrpCalculator, MrpWarning,
    NetRequirements, NettingCalculator, WarningSeverity,
};
pub use mrp_core::{
    CostBreakdown, DemandProfile, LotSizingRule, MrpConfig, MrpError, PlannedOrder,
    PlanningScenario, ReleasePolicy, Result, TraceLog, TraceMetrics, TraceRow,
};
pub use mrp_optimizer::{ComparisonReport, StrategyComparator, StrategyOutcome};
