//! 售價決定規則

/// 毛利率定價是否生效
///
/// 毛利率恰為 0 視同未提供，回落到固定售價──這是沿用既有
/// 系統的行為，呼叫端表單不會送出 0 的毛利率
pub fn margin_pricing_active(use_price_by_margin: bool, contribution_margin: Option<f64>) -> bool {
    use_price_by_margin && contribution_margin.is_some_and(|m| m != 0.0)
}

/// 由目標貢獻毛利率反推售價：價格 = 總成本 / (1 - 毛利率/100)
///
/// 毛利率 ≥ 100 時分母為零或負值，結果為非有限值或負價，不做防護
pub fn price_from_margin(total_cost_per_unit: f64, contribution_margin: f64) -> f64 {
    total_cost_per_unit / (1.0 - contribution_margin / 100.0)
}

/// 決定最終售價
///
/// 回傳 `(calculated_sale_price, final_sale_price)`：毛利率定價生效時
/// 兩者相同，否則採用固定售價（缺值時為 0）
pub fn resolve_sale_price(
    use_price_by_margin: bool,
    contribution_margin: Option<f64>,
    sale_price: Option<f64>,
    total_cost_per_unit: f64,
) -> (Option<f64>, f64) {
    if margin_pricing_active(use_price_by_margin, contribution_margin) {
        let calculated = price_from_margin(
            total_cost_per_unit,
            contribution_margin.unwrap_or_default(),
        );
        (Some(calculated), calculated)
    } else {
        (None, sale_price.unwrap_or(0.0))
    }
}
