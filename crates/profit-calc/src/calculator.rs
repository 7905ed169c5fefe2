//! 主獲利能力計算

use profit_core::{CalculationResult, GeneralData, Product, ProductCalculation};

use crate::costing::UnitCosts;
use crate::pricing;

/// 整批獲利能力計算主入口
///
/// 逐產品計算成本/利潤拆解後彙總企業層級指標。
/// 輸出順序與輸入一一對應：每個輸入產品恰好產生一筆結果，
/// 不過濾、不重排。固定成本按「全部產品的每月總產量」分攤，
/// 同一批次內每個產品用的都是同一個總量。
pub fn calculate_profitability(
    products: &[Product],
    general_data: &GeneralData,
) -> CalculationResult {
    tracing::debug!(
        "開始獲利計算：產品 {} 筆，固定支出 {} 筆",
        products.len(),
        general_data.fixed_costs.len()
    );

    // 整批共用的兩個總量，各計算一次
    let total_fixed_costs = general_data.total_fixed_costs();
    let total_monthly_production: f64 = products.iter().map(|p| p.monthly_production).sum();

    let calculated_products: Vec<ProductCalculation> = products
        .iter()
        .map(|product| {
            let costs = UnitCosts::compute(
                product.material_cost,
                product.production_per_hour,
                general_data.labor_cost_per_hour,
                total_fixed_costs,
                total_monthly_production,
            );

            let (calculated_sale_price, final_sale_price) = pricing::resolve_sale_price(
                product.use_price_by_margin,
                product.contribution_margin,
                product.sale_price,
                costs.total_cost_per_unit,
            );

            let gross_profit_per_unit = final_sale_price - costs.total_cost_per_unit;

            // 僅防護售價為 0，負售價不另外處理
            let profit_margin_percentage = if final_sale_price > 0.0 {
                (gross_profit_per_unit / final_sale_price) * 100.0
            } else {
                0.0
            };

            let monthly_profit = gross_profit_per_unit * product.monthly_production;

            ProductCalculation {
                product: product.clone(),
                labor_cost_per_unit: costs.labor_cost_per_unit,
                direct_cost: costs.direct_cost,
                fixed_cost_per_unit: costs.fixed_cost_per_unit,
                total_cost_per_unit: costs.total_cost_per_unit,
                calculated_sale_price,
                final_sale_price,
                gross_profit_per_unit,
                profit_margin_percentage,
                monthly_profit,
            }
        })
        .collect();

    let total_monthly_profit: f64 = calculated_products.iter().map(|p| p.monthly_profit).sum();
    let total_monthly_revenue: f64 = calculated_products
        .iter()
        .map(|p| p.final_sale_price * p.product.monthly_production)
        .sum();

    // 總成本以減法推導，與營收/利潤恆等式按構造成立
    let total_monthly_costs = total_monthly_revenue - total_monthly_profit;

    let average_profit_margin = if total_monthly_revenue > 0.0 {
        (total_monthly_profit / total_monthly_revenue) * 100.0
    } else {
        0.0
    };

    tracing::debug!(
        "獲利計算完成：每月總利潤 {:.2}，平均毛利率 {:.2}%",
        total_monthly_profit,
        average_profit_margin
    );

    CalculationResult {
        products: calculated_products,
        total_monthly_profit,
        total_monthly_revenue,
        total_monthly_costs,
        average_profit_margin,
        total_fixed_costs,
    }
}
