//! 應用狀態容器

use profit_core::{CalculationResult, FixedCost, GeneralData, Product, ProductDraft};

/// 應用狀態：產品清單、企業共通資料與最近一次計算結果
///
/// 計算結果只存在於當前工作階段，不進持久化（見 `persist` 模組）
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// 產品清單
    pub products: Vec<Product>,

    /// 企業共通資料
    pub general_data: GeneralData,

    /// 最近一次計算結果
    pub calculation_result: Option<CalculationResult>,
}

impl AppState {
    /// 創建新的應用狀態（含預設固定支出項目）
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加產品
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// 依 ID 部分更新產品，回傳是否找到
    pub fn update_product(&mut self, id: &str, patch: &ProductDraft) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                patch.apply_to(product);
                true
            }
            None => false,
        }
    }

    /// 依 ID 移除產品，回傳是否找到
    pub fn remove_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// 覆寫企業共通資料
    pub fn set_general_data(&mut self, data: GeneralData) {
        self.general_data = data;
    }

    /// 添加固定支出
    pub fn add_fixed_cost(&mut self, cost: FixedCost) {
        self.general_data.fixed_costs.push(cost);
    }

    /// 依 ID 更新固定支出的名稱與金額，回傳是否找到
    pub fn update_fixed_cost(&mut self, id: &str, name: Option<&str>, amount: Option<f64>) -> bool {
        match self.general_data.fixed_costs.iter_mut().find(|c| c.id == id) {
            Some(cost) => {
                if let Some(name) = name {
                    cost.name = name.to_string();
                }
                if let Some(amount) = amount {
                    cost.amount = amount;
                }
                true
            }
            None => false,
        }
    }

    /// 依 ID 移除固定支出，回傳是否找到
    pub fn remove_fixed_cost(&mut self, id: &str) -> bool {
        let before = self.general_data.fixed_costs.len();
        self.general_data.fixed_costs.retain(|c| c.id != id);
        self.general_data.fixed_costs.len() != before
    }

    /// 保存計算結果
    pub fn set_calculation_result(&mut self, result: CalculationResult) {
        self.calculation_result = Some(result);
    }

    /// 清空全部狀態，固定支出還原為預設項目
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}
