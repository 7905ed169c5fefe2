//! 狀態持久化
//!
//! 只持久化「不含計算結果」的子集：產品清單與企業共通資料。
//! 計算結果可隨時由輸入重算，不落盤。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use profit_core::{GeneralData, Product, ProfitError, Result};

use crate::state::AppState;

const STORAGE_DIR: &str = "business-calculator";
const STORAGE_FILE: &str = "state.json";

/// 落盤的狀態子集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub products: Vec<Product>,
    pub general_data: GeneralData,
}

impl From<&AppState> for PersistedState {
    fn from(state: &AppState) -> Self {
        Self {
            products: state.products.clone(),
            general_data: state.general_data.clone(),
        }
    }
}

impl PersistedState {
    /// 還原為應用狀態（計算結果一律為空）
    pub fn into_app_state(self) -> AppState {
        AppState {
            products: self.products,
            general_data: self.general_data,
            calculation_result: None,
        }
    }
}

/// 預設存檔路徑：`<系統資料目錄>/business-calculator/state.json`
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(STORAGE_DIR).join(STORAGE_FILE))
}

/// 將狀態的持久化子集寫入指定路徑
pub fn save_to(state: &AppState, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&PersistedState::from(state))?;
    fs::write(path, json)?;
    tracing::debug!("狀態已保存至 {}", path.display());
    Ok(())
}

/// 從指定路徑載入狀態
///
/// 檔案不存在或內容損壞時回傳預設狀態，不視為錯誤
pub fn load_from(path: &Path) -> AppState {
    let Ok(data) = fs::read_to_string(path) else {
        return AppState::default();
    };
    match serde_json::from_str::<PersistedState>(&data) {
        Ok(persisted) => persisted.into_app_state(),
        Err(err) => {
            tracing::warn!("狀態檔解析失敗，改用預設狀態: {}", err);
            AppState::default()
        }
    }
}

/// 寫入預設存檔路徑
pub fn save(state: &AppState) -> Result<()> {
    let path = default_storage_path().ok_or(ProfitError::StorageUnavailable)?;
    save_to(state, &path)
}

/// 從預設存檔路徑載入
pub fn load() -> AppState {
    match default_storage_path() {
        Some(path) => load_from(&path),
        None => AppState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profit_core::FixedCost;

    fn populated_state() -> AppState {
        let mut state = AppState::new();
        state.add_product(Product::new("Sourdough loaf", 10.0, 5.0, 100.0).with_sale_price(50.0));
        state.set_general_data(
            GeneralData::new(20.0).with_fixed_cost(FixedCost::with_id("1", "Rent", 1000.0)),
        );
        state
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let state = populated_state();
        save_to(&state, &path).unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded.products, state.products);
        assert_eq!(loaded.general_data, state.general_data);
    }

    #[test]
    fn test_result_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut state = populated_state();
        let result = profit_core::CalculationResult {
            products: Vec::new(),
            total_monthly_profit: 1.0,
            total_monthly_revenue: 2.0,
            total_monthly_costs: 1.0,
            average_profit_margin: 50.0,
            total_fixed_costs: 0.0,
        };
        state.set_calculation_result(result);

        save_to(&state, &path).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("calculationResult"));

        let loaded = load_from(&path);
        assert!(loaded.calculation_result.is_none());
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join("absent.json"));

        assert!(loaded.products.is_empty());
        assert_eq!(loaded.general_data.fixed_costs.len(), 4);
    }

    #[test]
    fn test_corrupt_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded = load_from(&path);
        assert!(loaded.products.is_empty());
    }
}
