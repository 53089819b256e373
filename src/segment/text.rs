//! 문자 오프셋 ↔ 바이트 오프셋 변환

/// 문자 단위로 색인된 문장
///
/// DAG와 경로는 문자 오프셋을 쓰고, 토큰은 원문의 바이트 슬라이스로 돌려줍니다.
#[derive(Debug, Clone)]
pub struct CharText<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// 각 문자의 시작 바이트 + 끝(text.len())
    bounds: Vec<usize>,
}

impl<'a> CharText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut bounds = Vec::with_capacity(text.len() + 1);
        for (idx, c) in text.char_indices() {
            chars.push(c);
            bounds.push(idx);
        }
        bounds.push(text.len());
        Self {
            text,
            chars,
            bounds,
        }
    }

    /// 원문
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// 문자 배열
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// 문자 수
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// 문자 구간 `[start, end)` 의 원문 슬라이스
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.bounds[start]..self.bounds[end]]
    }
}
