//! 集成測試

use profit::{
    calculate_profitability, export_report, handle_calculate, preview_product_costs, AppState,
    FixedCost, GeneralData, Product, ProductDraft,
};

#[test]
fn test_full_workflow_store_to_export() {
    // 場景：麵包坊輸入兩個產品與共通成本，計算後匯出報表

    // 1. 建立狀態
    let mut state = AppState::new();
    state.set_general_data(
        GeneralData::new(20.0)
            .with_fixed_cost(FixedCost::with_id("1", "Rent", 800.0))
            .with_fixed_cost(FixedCost::with_id("2", "Utilities", 200.0)),
    );

    // 2. 先用草稿預覽成本（總產量須含草稿本身的 100）
    let draft = ProductDraft {
        name: Some("Sourdough loaf".to_string()),
        material_cost: Some(10.0),
        production_per_hour: Some(5.0),
        monthly_production: Some(100.0),
        ..Default::default()
    };
    let preview = preview_product_costs(&draft, &state.general_data, 100.0).unwrap();
    assert_eq!(preview.total_cost_per_unit, 24.0);

    // 3. 提交產品：一個固定售價，一個毛利率定價
    state.add_product(Product::new("Sourdough loaf", 10.0, 5.0, 100.0).with_sale_price(50.0));
    state.add_product(Product::new("Croissant", 10.0, 5.0, 100.0).with_contribution_margin(40.0));

    // 4. 批次計算（固定成本按總產量 200 分攤）
    let result = calculate_profitability(&state.products, &state.general_data);
    assert_eq!(result.products.len(), 2);
    assert_eq!(result.products[0].fixed_cost_per_unit, 5.0); // 1000 / 200
    assert_eq!(result.products[0].total_cost_per_unit, 19.0);
    assert_eq!(result.products[1].calculated_sale_price, Some(19.0 / 0.6));

    // 恆等式：總成本 = 總營收 - 總利潤
    assert_eq!(
        result.total_monthly_costs,
        result.total_monthly_revenue - result.total_monthly_profit
    );

    state.set_calculation_result(result.clone());

    // 5. 匯出兩張報表
    let dir = tempfile::tempdir().unwrap();
    let (products_path, summary_path) = export_report(&result, dir.path()).unwrap();
    let detail = std::fs::read_to_string(products_path).unwrap();
    assert!(detail.contains("Sourdough loaf"));
    assert!(detail.contains("Croissant"));
    let summary = std::fs::read_to_string(summary_path).unwrap();
    assert!(summary.contains("Total Fixed Costs,1000"));
}

#[test]
fn test_api_boundary_matches_direct_call() {
    let products = vec![Product::new("Bagel", 1.5, 30.0, 800.0).with_sale_price(4.0)];
    let general_data =
        GeneralData::new(18.0).with_fixed_cost(FixedCost::with_id("1", "Rent", 400.0));

    let direct = calculate_profitability(&products, &general_data);

    let body = serde_json::json!({
        "products": products,
        "generalData": general_data,
    })
    .to_string();
    let response = handle_calculate(&body);
    assert_eq!(response.status, 200);

    let via_api: profit::CalculationResult = serde_json::from_str(&response.body).unwrap();
    assert_eq!(via_api, direct);
}

#[test]
fn test_persistence_roundtrip_excludes_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = AppState::new();
    state.add_product(Product::new("Rye loaf", 4.0, 6.0, 150.0).with_sale_price(9.0));
    let result = calculate_profitability(&state.products, &state.general_data);
    state.set_calculation_result(result);

    profit_store::persist::save_to(&state, &path).unwrap();
    let restored = profit_store::persist::load_from(&path);

    assert_eq!(restored.products, state.products);
    assert_eq!(restored.general_data, state.general_data);
    assert!(restored.calculation_result.is_none());
}
