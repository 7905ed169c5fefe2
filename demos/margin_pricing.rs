//! 毛利率定價示例：由目標貢獻毛利率反推售價，含表單預覽

use profit::{
    calculate_profitability, preview_product_costs, FixedCost, GeneralData, Product, ProductDraft,
};

fn main() -> anyhow::Result<()> {
    println!("=== 毛利率定價示例 ===\n");

    let general_data = GeneralData::new(20.0).with_fixed_cost(FixedCost::new("Rent", 1000.0));

    // 表單編輯中：先預覽成本拆解
    let draft = ProductDraft {
        name: Some("Sourdough loaf".to_string()),
        material_cost: Some(10.0),
        production_per_hour: Some(5.0),
        monthly_production: Some(100.0),
        contribution_margin: Some(40.0),
        use_price_by_margin: Some(true),
        ..Default::default()
    };

    match preview_product_costs(&draft, &general_data, 100.0) {
        Some(preview) => {
            println!("表單預覽:");
            println!("  每單位人工成本: {:.2}", preview.labor_cost_per_unit);
            println!("  直接成本: {:.2}", preview.direct_cost);
            println!("  每單位固定成本: {:.2}", preview.fixed_cost_per_unit);
            println!("  每單位總成本: {:.2}", preview.total_cost_per_unit);
            if let Some(price) = preview.calculated_sale_price {
                println!("  建議售價（40% 毛利率）: {:.2}", price);
            }
        }
        None => println!("表單尚未填寫完整，無預覽"),
    }

    // 提交後的批次計算
    let product = Product::new("Sourdough loaf", 10.0, 5.0, 100.0).with_contribution_margin(40.0);
    let result = calculate_profitability(&[product], &general_data);

    let p = &result.products[0];
    println!("\n批次計算結果:");
    println!("  最終售價: {:.2}", p.final_sale_price);
    println!("  每單位毛利: {:.2}", p.gross_profit_per_unit);
    println!("  毛利率: {:.1}%", p.profit_margin_percentage);
    println!("  每月利潤: {:.2}", p.monthly_profit);

    Ok(())
}
