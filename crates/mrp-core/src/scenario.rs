//! 計劃情境（JSON 載入）

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DemandProfile, MrpConfig, Result};

/// 一組可重複執行的計劃輸入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningScenario {
    /// 情境名稱
    #[serde(default)]
    pub name: String,

    /// 需求資料
    pub profile: DemandProfile,

    /// 參數配置（省略的欄位取預設值）
    #[serde(default)]
    pub config: MrpConfig,
}

impl PlanningScenario {
    pub fn new(name: impl Into<String>, profile: DemandProfile, config: MrpConfig) -> Self {
        Self {
            name: name.into(),
            profile,
            config,
        }
    }

    /// 從 JSON 文字載入並檢查
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: PlanningScenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// 從 JSON 檔案載入並檢查
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.profile.validate()?;
        self.config.validate()
    }
}
