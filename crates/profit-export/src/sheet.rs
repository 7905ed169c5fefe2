//! CSV 報表產生

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use profit_core::{CalculationResult, ProfitError, Result};

/// 數值欄位的輸出格式，非有限值沿用 f64 的 Display（inf/NaN）
fn number(v: f64) -> String {
    v.to_string()
}

/// 可缺數值欄位，缺值輸出空白
fn optional_number(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// 可缺數值欄位，缺值或 0 輸出 N/A（沿用既有報表的 falsy 慣例）
fn optional_number_or_na(v: Option<f64>) -> String {
    match v {
        Some(v) if v != 0.0 => v.to_string(),
        _ => "N/A".to_string(),
    }
}

fn csv_err(err: csv::Error) -> ProfitError {
    ProfitError::ExportError(err.to_string())
}

/// 寫出逐產品明細表
pub fn write_products_sheet<W: Write>(result: &CalculationResult, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "Product",
        "Material Cost",
        "Production/Hour",
        "Sale Price",
        "Monthly Production",
        "Uses Price By Margin",
        "Contribution Margin %",
        "Fixed Price",
        "Final Price",
        "Labor Cost/Unit",
        "Direct Cost",
        "Fixed Cost/Unit",
        "Total Cost/Unit",
        "Profit/Unit",
        "Margin %",
        "Monthly Profit",
    ])
    .map_err(csv_err)?;

    for calc in &result.products {
        let product = &calc.product;
        csv.write_record([
            product.name.clone(),
            number(product.material_cost),
            number(product.production_per_hour),
            optional_number(product.sale_price),
            number(product.monthly_production),
            if product.use_price_by_margin { "Yes" } else { "No" }.to_string(),
            optional_number_or_na(product.contribution_margin),
            optional_number_or_na(product.sale_price),
            number(calc.final_sale_price),
            number(calc.labor_cost_per_unit),
            number(calc.direct_cost),
            number(calc.fixed_cost_per_unit),
            number(calc.total_cost_per_unit),
            number(calc.gross_profit_per_unit),
            number(calc.profit_margin_percentage),
            number(calc.monthly_profit),
        ])
        .map_err(csv_err)?;
    }

    csv.flush()?;
    Ok(())
}

/// 寫出企業彙總表（五項總計指標）
pub fn write_summary_sheet<W: Write>(result: &CalculationResult, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Item", "Value"]).map_err(csv_err)?;

    let rows = [
        ("Total Monthly Revenue", result.total_monthly_revenue),
        ("Total Monthly Costs", result.total_monthly_costs),
        ("Total Fixed Costs", result.total_fixed_costs),
        ("Total Monthly Profit", result.total_monthly_profit),
        ("Average Margin (%)", result.average_profit_margin),
    ];
    for (item, value) in rows {
        csv.write_record([item.to_string(), number(value)])
            .map_err(csv_err)?;
    }

    csv.flush()?;
    Ok(())
}

/// 將報表寫入目錄下的兩個檔案，檔名帶當天日期
///
/// 回傳 `(明細表路徑, 彙總表路徑)`
pub fn export_report(result: &CalculationResult, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let stamp = Local::now().format("%Y-%m-%d");
    let products_path = dir.join(format!("profitability-report-{stamp}-products.csv"));
    let summary_path = dir.join(format!("profitability-report-{stamp}-summary.csv"));

    write_products_sheet(result, File::create(&products_path)?)?;
    write_summary_sheet(result, File::create(&summary_path)?)?;

    tracing::info!(
        "報表已匯出：{} / {}",
        products_path.display(),
        summary_path.display()
    );
    Ok((products_path, summary_path))
}
