//! 計算端點處理

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use profit_calc::calculate_profitability;
use profit_core::{GeneralData, Product};

/// 計算請求本文
///
/// 兩個頂層欄位都以 `Option` 承接，缺欄位由處理器回報客戶端錯誤，
/// 不做靜默預設
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub products: Option<Vec<Product>>,
    pub general_data: Option<GeneralData>,
}

/// 端點回應：HTTP 語義的狀態碼加 JSON 本文
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    fn client_error(message: &str) -> Self {
        Self {
            status: 400,
            body: error_body(message),
        }
    }

    fn server_error() -> Self {
        Self {
            status: 500,
            body: error_body("Internal server error"),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn error_body(message: &str) -> String {
    // 錯誤本文結構固定，序列化不會失敗
    serde_json::to_string(&ErrorBody { error: message }).unwrap_or_default()
}

/// 將計算過程包在 unwind 防護內，panic 一律轉為 500
///
/// 引擎是全函數、理論上不會 panic，但端點不得讓 unwind
/// 穿透到外層框架
fn guarded<F>(f: F) -> ApiResponse
where
    F: FnOnce() -> ApiResponse,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        tracing::error!("計算過程發生非預期 panic");
        ApiResponse::server_error()
    })
}

/// 處理一次計算請求
///
/// - 本文無法解析或缺少 `products`/`generalData` → 400
/// - 計算成功 → 200，本文為 `CalculationResult`
/// - 計算或序列化非預期失敗 → 500，不洩漏內部細節
pub fn handle_calculate(body: &str) -> ApiResponse {
    let request: CalculateRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!("計算請求解析失敗: {}", err);
            return ApiResponse::client_error("Missing required data");
        }
    };

    let (Some(products), Some(general_data)) = (request.products, request.general_data) else {
        return ApiResponse::client_error("Missing required data");
    };

    guarded(move || {
        let result = calculate_profitability(&products, &general_data);

        match serde_json::to_string(&result) {
            Ok(json) => ApiResponse::ok(json),
            Err(err) => {
                tracing::error!("計算結果序列化失敗: {}", err);
                ApiResponse::server_error()
            }
        }
    })
}
