//! 週期累積型批量啟發式
//!
//! 最小單位成本、最小總成本與 Silver-Meal 共用同一個累積流程：
//! 從第一個正淨需求開啟週期，逐期試算把該期併入週期後的指標，
//! 指標上升就在前一狀態結案並於本期重開週期，持平時視後續是否仍有需求決定，
//! 下降則繼續累積。三者只差在指標的計算方式。

use std::cmp::Ordering;

use mrp_core::{LotSizingRule, MrpConfig, MrpError, TraceLog, TraceMetrics, TraceRow};
use rust_decimal::Decimal;

/// 週期試算所需的成本參數
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleCosts {
    /// 每次下單成本
    pub order_cost: Decimal,
    /// 每單位每期持有成本
    pub holding_cost: Decimal,
}

impl CycleCosts {
    pub fn new(order_cost: Decimal, holding_cost: Decimal) -> Self {
        Self {
            order_cost,
            holding_cost,
        }
    }
}

impl From<&MrpConfig> for CycleCosts {
    fn from(config: &MrpConfig) -> Self {
        Self::new(config.order_cost, config.holding_cost)
    }
}

/// 由單張訂單滿足的連續期間
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    /// 週期起始期（即收貨期）
    pub start: usize,
    /// 累積數量
    pub quantity: Decimal,
    /// 累積持有成本
    pub holding_cost: Decimal,
    /// 週期涵蓋期數
    pub periods: u32,
}

impl Cycle {
    /// 在 `start` 期以該期淨需求開啟週期
    pub fn open(start: usize, net_requirement: Decimal) -> Self {
        Self {
            start,
            quantity: net_requirement,
            holding_cost: Decimal::ZERO,
            periods: 1,
        }
    }

    /// 試算把 `period` 期的淨需求併入週期後的狀態
    ///
    /// 提前收貨的數量要持有 `period - start` 期。數值溢位時返回 `None`。
    pub fn extended(
        &self,
        period: usize,
        net_requirement: Decimal,
        holding_rate: Decimal,
    ) -> Option<Self> {
        let carried = Decimal::from(period - self.start);
        let added_holding = carried
            .checked_mul(holding_rate)?
            .checked_mul(net_requirement)?;
        Some(Self {
            start: self.start,
            quantity: self.quantity.checked_add(net_requirement)?,
            holding_cost: self.holding_cost.checked_add(added_holding)?,
            periods: self.periods + 1,
        })
    }

    /// 零需求期只增加期數
    pub fn skip_idle_period(&mut self) {
        self.periods += 1;
    }
}

/// 週期比較指標
pub trait CycleMetric {
    /// 對應的批量規則
    fn rule(&self) -> LotSizingRule;

    /// 指標值（越小越好），溢位時為 `None`
    fn evaluate(&self, cycle: &Cycle, costs: &CycleCosts) -> Option<Decimal>;

    /// 寫入明細的衍生指標
    fn metrics(&self, cycle: &Cycle, value: Decimal, costs: &CycleCosts) -> Option<TraceMetrics>;

    /// 週期內的零需求期是否只計入期數、不寫明細也不比較
    fn skips_idle_periods(&self) -> bool {
        false
    }

    /// 指標持平時是否繼續累積
    fn extend_on_tie(&self, has_future_demand: bool) -> bool {
        has_future_demand
    }
}

/// 最小單位成本：(下單成本 + 持有成本) / 數量
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastUnitCost;

impl CycleMetric for LeastUnitCost {
    fn rule(&self) -> LotSizingRule {
        LotSizingRule::LeastUnitCost
    }

    fn evaluate(&self, cycle: &Cycle, costs: &CycleCosts) -> Option<Decimal> {
        costs
            .order_cost
            .checked_add(cycle.holding_cost)?
            .checked_div(cycle.quantity)
    }

    fn metrics(&self, cycle: &Cycle, value: Decimal, costs: &CycleCosts) -> Option<TraceMetrics> {
        Some(TraceMetrics::UnitCost {
            holding_cost_per_unit: cycle.holding_cost.checked_div(cycle.quantity)?,
            order_cost_per_unit: costs.order_cost.checked_div(cycle.quantity)?,
            total_cost_per_unit: value,
        })
    }
}

/// 最小總成本：|持有成本 − 下單成本|
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastTotalCost;

impl CycleMetric for LeastTotalCost {
    fn rule(&self) -> LotSizingRule {
        LotSizingRule::LeastTotalCost
    }

    fn evaluate(&self, cycle: &Cycle, costs: &CycleCosts) -> Option<Decimal> {
        Some(cycle.holding_cost.checked_sub(costs.order_cost)?.abs())
    }

    fn metrics(&self, _cycle: &Cycle, value: Decimal, costs: &CycleCosts) -> Option<TraceMetrics> {
        Some(TraceMetrics::TotalCost {
            order_cost: costs.order_cost,
            deviation: value,
        })
    }
}

/// Silver-Meal：(持有成本 + 下單成本) / 週期期數
#[derive(Debug, Clone, Copy, Default)]
pub struct SilverMeal;

impl CycleMetric for SilverMeal {
    fn rule(&self) -> LotSizingRule {
        LotSizingRule::SilverMeal
    }

    fn evaluate(&self, cycle: &Cycle, costs: &CycleCosts) -> Option<Decimal> {
        cycle
            .holding_cost
            .checked_add(costs.order_cost)?
            .checked_div(Decimal::from(cycle.periods))
    }

    fn metrics(&self, _cycle: &Cycle, value: Decimal, costs: &CycleCosts) -> Option<TraceMetrics> {
        Some(TraceMetrics::SilverMeal {
            order_cost: costs.order_cost,
            cost_per_period: value,
        })
    }

    fn skips_idle_periods(&self) -> bool {
        true
    }
}

/// 累積狀態
#[derive(Debug, Clone, Copy)]
enum CycleState {
    NoCycle,
    Accumulating { cycle: Cycle, last_value: Decimal },
}

/// 週期累積器
#[derive(Debug, Clone, Copy)]
pub struct CycleAggregator {
    costs: CycleCosts,
}

impl CycleAggregator {
    pub fn new(costs: CycleCosts) -> Self {
        Self { costs }
    }

    /// 執行累積，返回所有已結案的週期（依起始期排序）
    ///
    /// 每一個試算狀態都會寫入 `trace`；決策本身不讀取明細。
    pub fn aggregate<M>(
        &self,
        metric: &M,
        net_requirements: &[Decimal],
        trace: &mut TraceLog,
    ) -> mrp_core::Result<Vec<Cycle>>
    where
        M: CycleMetric + ?Sized,
    {
        let last_demand = net_requirements
            .iter()
            .rposition(|n| *n > Decimal::ZERO);

        let mut closed = Vec::new();
        let mut state = CycleState::NoCycle;

        for (period, &net) in net_requirements.iter().enumerate() {
            state = match state {
                CycleState::NoCycle => self.open(metric, period, net, trace)?,
                CycleState::Accumulating {
                    mut cycle,
                    last_value,
                } => {
                    if net.is_zero() && metric.skips_idle_periods() {
                        cycle.skip_idle_period();
                        CycleState::Accumulating { cycle, last_value }
                    } else {
                        let candidate = cycle
                            .extended(period, net, self.costs.holding_cost)
                            .ok_or_else(|| {
                                MrpError::overflow(&format!("{} 第 {period} 期週期", metric.rule()))
                            })?;
                        let value = self.record(metric, period, net, &candidate, trace)?;

                        match value.cmp(&last_value) {
                            Ordering::Greater => {
                                tracing::debug!(
                                    "{}: 第 {} 期指標上升，結案週期 start={} qty={}",
                                    metric.rule(),
                                    period,
                                    cycle.start,
                                    cycle.quantity
                                );
                                closed.push(cycle);
                                self.open(metric, period, net, trace)?
                            }
                            Ordering::Equal => {
                                let has_future_demand = last_demand.is_some_and(|last| last > period);
                                if metric.extend_on_tie(has_future_demand) {
                                    CycleState::Accumulating {
                                        cycle: candidate,
                                        last_value: value,
                                    }
                                } else {
                                    tracing::debug!(
                                        "{}: 第 {} 期指標持平且後續無需求，結案週期 start={} qty={}",
                                        metric.rule(),
                                        period,
                                        candidate.start,
                                        candidate.quantity
                                    );
                                    closed.push(candidate);
                                    CycleState::NoCycle
                                }
                            }
                            Ordering::Less => CycleState::Accumulating {
                                cycle: candidate,
                                last_value: value,
                            },
                        }
                    }
                }
            };
        }

        if let CycleState::Accumulating { cycle, .. } = state {
            if cycle.quantity > Decimal::ZERO {
                closed.push(cycle);
            }
        }

        Ok(closed)
    }

    /// 依週期結果產生各期收貨量
    pub fn receipts(cycles: &[Cycle], horizon: usize) -> Vec<Decimal> {
        let mut receipts = vec![Decimal::ZERO; horizon];
        for cycle in cycles {
            receipts[cycle.start] += cycle.quantity;
        }
        receipts
    }

    fn open<M>(
        &self,
        metric: &M,
        period: usize,
        net: Decimal,
        trace: &mut TraceLog,
    ) -> mrp_core::Result<CycleState>
    where
        M: CycleMetric + ?Sized,
    {
        if net <= Decimal::ZERO {
            return Ok(CycleState::NoCycle);
        }

        let cycle = Cycle::open(period, net);
        let last_value = self.record(metric, period, net, &cycle, trace)?;
        Ok(CycleState::Accumulating { cycle, last_value })
    }

    fn record<M>(
        &self,
        metric: &M,
        period: usize,
        net: Decimal,
        cycle: &Cycle,
        trace: &mut TraceLog,
    ) -> mrp_core::Result<Decimal>
    where
        M: CycleMetric + ?Sized,
    {
        let overflow = || MrpError::overflow(&format!("{} 第 {period} 期指標", metric.rule()));
        let value = metric.evaluate(cycle, &self.costs).ok_or_else(overflow)?;
        let metrics = metric
            .metrics(cycle, value, &self.costs)
            .ok_or_else(overflow)?;
        trace.record(TraceRow {
            period,
            net_requirement: net,
            quantity: cycle.quantity,
            holding_cost: cycle.holding_cost,
            metrics,
        });
        Ok(value)
    }
}
