//! API Response Envelope
//!
//! Defines the uniform [`ApiResponse<T>`] wrapper returned by all endpoints.

use serde::{Deserialize, Serialize};

/// API 統一レスポンスエンベロープ
///
/// すべてのエンドポイントが返す `{success, data?, error?}` 形式の
/// ラッパー型です。`data` と `error` は `None` の場合シリアライズ時に
/// 省略されます。
///
/// ## Fields
/// * `success` - 処理が成功したかどうか
/// * `data` - 成功時のペイロード（オプション）
/// * `error` - 失敗時のユーザー向けメッセージ（オプション）
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let ok = ApiResponse::ok(vec![1, 2, 3]);
/// assert!(ok.success);
///
/// let err = ApiResponse::<()>::error("Player not found");
/// assert_eq!(err.error.as_deref(), Some("Player not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 成功フラグ
    pub success: bool,
    /// 成功時のペイロード
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 失敗時のメッセージ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 成功レスポンスを作成（ペイロード付き）
    #[inline]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// 失敗レスポンスを作成（インバンドエラー）
    ///
    /// HTTP ステータスとは独立に、エンベロープ内でエラーを表現します。
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// ペイロードなしの成功レスポンスを作成
    ///
    /// `{"success": true}` のみをシリアライズします。
    #[inline]
    pub fn success() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}
