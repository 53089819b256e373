//! 사전 파일 파싱
//!
//! 이미 받아온 사전 텍스트를 (단어, 빈도) 목록으로 변환합니다.
//!
//! # 파일 형식
//! ```text
//! [["北京", 120], ["天安门", 30]]
//! ```
//! 또는 스크립트 형식:
//! ```text
//! var dictionary = [["北京", 120], ["天安门", 30]];
//! ```

use std::fs;
use std::path::Path;

use super::store::DictError;

/// 사전 항목 (단어, 빈도)
pub type DictEntry = (String, f64);

/// 파일에서 사전 항목 로드
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<DictEntry>, DictError> {
    let text = fs::read_to_string(path)?;
    parse_entries(&text)
}

/// 사전 텍스트 파싱 (JSON 배열 또는 `var dictionary = [...];`)
pub fn parse_entries(text: &str) -> Result<Vec<DictEntry>, DictError> {
    let trimmed = text.trim_start();
    let json = if trimmed.starts_with('[') {
        trimmed
    } else {
        extract_script_array(trimmed).ok_or_else(|| {
            DictError::Format("`var dictionary = [...];` 선언을 찾을 수 없습니다".into())
        })?
    };

    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| DictError::Parse(e.to_string()))?;

    from_json_value(&value)
}

/// `var dictionary = [ ... ];` 에서 배열 부분만 추출
///
/// 첫 번째 `];` 까지를 배열로 봅니다.
fn extract_script_array(text: &str) -> Option<&str> {
    let mut offset = 0;
    while let Some(found) = text[offset..].find("var") {
        let start = offset + found;
        if let Some(array) = match_declaration(&text[start + 3..]) {
            return Some(array);
        }
        offset = start + 3;
    }
    None
}

/// `<공백>dictionary<공백>=<공백>[...];` 매칭
fn match_declaration(rest: &str) -> Option<&str> {
    // var 뒤에는 공백이 최소 하나 필요
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix("dictionary")?;
    let rest = rest.trim_start().strip_prefix('=')?;
    let rest = rest.trim_start();
    if !rest.starts_with('[') {
        return None;
    }
    let end = rest.find("];")?;
    Some(&rest[..=end])
}

/// serde_json::Value에서 항목 목록 생성
fn from_json_value(value: &serde_json::Value) -> Result<Vec<DictEntry>, DictError> {
    let items = value
        .as_array()
        .ok_or_else(|| DictError::Format("사전은 배열이어야 합니다".into()))?;

    let mut entries = Vec::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        let pair = item.as_array().ok_or_else(|| {
            DictError::Format(format!("{}번째 항목이 [단어, 빈도] 형식이 아닙니다", idx))
        })?;

        let word = pair
            .first()
            .and_then(|v| v.as_str())
            .ok_or_else(|| DictError::Format(format!("{}번째 항목에 단어가 없습니다", idx)))?;

        let freq = pair.get(1).and_then(|v| v.as_f64());
        match freq {
            Some(f) => entries.push((word.to_string(), f)),
            None => {
                return Err(DictError::InvalidFrequency {
                    word: word.to_string(),
                    freq: None,
                })
            }
        }
    }

    Ok(entries)
}
