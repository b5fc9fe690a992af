//! Export Handler - TXT 附件下载

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
    Json,
};

use crate::domain::story::TEXT_PLAIN;
use crate::infrastructure::http::dto::ExportRequest;
use crate::infrastructure::http::error::ApiError;

/// RFC 5987 `attr-char` 之外的字节全部百分号编码
fn encode_rfc5987(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// 供旧客户端使用的 ASCII 文件名
fn ascii_fallback(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
        .collect()
}

fn content_disposition(file_name: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback(file_name),
        encode_rfc5987(file_name)
    )
}

fn validate_file_name(file_name: &str) -> Result<(), ApiError> {
    if file_name.trim().is_empty() {
        return Err(ApiError::BadRequest("File name is required".to_string()));
    }
    if file_name.contains(['/', '\\']) || file_name.chars().any(char::is_control) {
        return Err(ApiError::BadRequest(format!("Invalid file name: {}", file_name)));
    }
    Ok(())
}

/// 以附件形式返回纯文本
pub async fn export_text(Json(req): Json<ExportRequest>) -> Result<Response, ApiError> {
    validate_file_name(&req.file_name)?;

    tracing::info!(
        file_name = %req.file_name,
        content_chars = req.content.chars().count(),
        "Exporting text"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, format!("{}; charset=utf-8", TEXT_PLAIN))
        .header(header::CONTENT_DISPOSITION, content_disposition(&req.file_name))
        .header(header::CONTENT_LENGTH, req.content.len())
        .body(Body::from(req.content))
        .map_err(|e| ApiError::Internal(format!("Failed to build export response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_chinese_file_name() {
        assert_eq!(encode_rfc5987("第1章.txt"), "%E7%AC%AC1%E7%AB%A0.txt");
        assert_eq!(encode_rfc5987("a b"), "a%20b");
    }

    #[test]
    fn test_content_disposition() {
        let value = content_disposition("小说续写_202401011230.txt");
        assert!(value.starts_with("attachment; filename=\"_____202401011230.txt\""));
        assert!(value.ends_with(
            "filename*=UTF-8''%E5%B0%8F%E8%AF%B4%E7%BB%AD%E5%86%99_202401011230.txt"
        ));
    }

    #[test]
    fn test_rejects_path_like_names() {
        assert!(validate_file_name("../etc/passwd").is_err());
        assert!(validate_file_name("a\\b.txt").is_err());
        assert!(validate_file_name("  ").is_err());
        assert!(validate_file_name("剑神归来_第1章_202401011230.txt").is_ok());
    }
}
