//! 麵包坊獲利計算示例：建立狀態 → 計算 → 匯出報表

use profit::{calculate_profitability, export_report, AppState, FixedCost, GeneralData, Product};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 麵包坊獲利計算示例 ===\n");

    // 企業共通資料
    let mut state = AppState::new();
    state.set_general_data(
        GeneralData::new(20.0)
            .with_fixed_cost(FixedCost::new("Rent", 800.0))
            .with_fixed_cost(FixedCost::new("Utilities", 150.0))
            .with_fixed_cost(FixedCost::new("Transport", 50.0)),
    );

    // 產品清單
    state.add_product(Product::new("Sourdough loaf", 10.0, 5.0, 100.0).with_sale_price(50.0));
    state.add_product(Product::new("Croissant", 2.0, 20.0, 500.0).with_sale_price(6.0));
    state.add_product(Product::new("Bagel", 1.5, 30.0, 800.0).with_contribution_margin(45.0));

    // 批次計算
    let result = calculate_profitability(&state.products, &state.general_data);

    println!("逐產品拆解:");
    for p in &result.products {
        println!(
            "  - {}: 每單位總成本 {:.2}, 售價 {:.2}, 毛利率 {:.1}%, 每月利潤 {:.2}",
            p.product.name,
            p.total_cost_per_unit,
            p.final_sale_price,
            p.profit_margin_percentage,
            p.monthly_profit
        );
    }

    println!("\n企業彙總:");
    println!("  每月總營收: {:.2}", result.total_monthly_revenue);
    println!("  每月總成本: {:.2}", result.total_monthly_costs);
    println!("  每月總利潤: {:.2}", result.total_monthly_profit);
    println!("  平均毛利率: {:.1}%", result.average_profit_margin);
    println!("  固定支出總和: {:.2}", result.total_fixed_costs);

    // 匯出 CSV 報表到當前目錄
    let (products_path, summary_path) = export_report(&result, std::path::Path::new("."))?;
    println!("\n報表已匯出:");
    println!("  {}", products_path.display());
    println!("  {}", summary_path.display());

    Ok(())
}
