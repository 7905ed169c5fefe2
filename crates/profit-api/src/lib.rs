//! # Profit API
//!
//! 計算端點的請求/回應邊界層
//!
//! 與傳輸協定無關：外層 HTTP 框架只需把請求本文字串交給
//! [`handle_calculate`]，再把回傳的狀態碼與本文寫回。
//! 邊界本身無狀態，並行呼叫互不影響。

pub mod handler;

pub use handler::{handle_calculate, ApiResponse, CalculateRequest};
