//! 문자 분류 및 블록 분할 유틸리티
//!
//! 입력 문자열을 "분할 대상" 블록(한자/영숫자)과 "기타" 블록으로 나눕니다.

/// CJK 통합 한자 시작 코드포인트 (一)
const CJK_UNIFIED_START: u32 = 0x4E00;
/// CJK 통합 한자 끝 코드포인트 (龥)
const CJK_UNIFIED_END: u32 = 0x9FA5;

/// 분할 대상 블록에 함께 묶이는 기호
const EXTRA_SYMBOLS: [char; 5] = ['+', '#', '&', '.', '_'];

/// CJK 통합 한자(U+4E00 ~ U+9FA5)인지 확인
pub fn is_han(c: char) -> bool {
    (CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&(c as u32))
}

/// 사전 기반 분할(DAG + DP) 대상 문자인지 확인
///
/// 한자, ASCII 영문자, ASCII 숫자, `+ # & . _`
pub fn is_segmentable(c: char) -> bool {
    is_han(c) || c.is_ascii_alphanumeric() || EXTRA_SYMBOLS.contains(&c)
}

/// 한 글자 토큰 병합 대상인지 확인 (`[A-Za-z0-9]`)
pub fn is_mergeable_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// 공백 문자인지 확인 (`\r`, `\n` 포함)
pub fn is_skip(c: char) -> bool {
    c.is_whitespace()
}

/// 입력 블록
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// 한자/영숫자 연속 구간 → DAG + DP 로 분할
    Segmentable(&'a str),
    /// 그 외 문자 구간 → 공백/문자 단위 분할
    Other(&'a str),
}

impl<'a> Block<'a> {
    fn new(text: &'a str, segmentable: bool) -> Self {
        if segmentable {
            Block::Segmentable(text)
        } else {
            Block::Other(text)
        }
    }

    /// 블록 원문
    pub fn as_str(&self) -> &'a str {
        match self {
            Block::Segmentable(s) | Block::Other(s) => s,
        }
    }
}

/// 문자열을 분할 대상/기타 블록으로 번갈아 나눔
///
/// 블록을 모두 이어 붙이면 원문과 같습니다. 빈 블록은 만들지 않습니다.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let segmentable = is_segmentable(c);
        match current {
            Some(prev) if prev != segmentable => {
                blocks.push(Block::new(&text[start..idx], prev));
                start = idx;
                current = Some(segmentable);
            }
            Some(_) => {}
            None => current = Some(segmentable),
        }
    }

    if let Some(prev) = current {
        blocks.push(Block::new(&text[start..], prev));
    }

    blocks
}

/// 기타 블록 분할
///
/// 연속된 공백은 하나의 토큰으로, 나머지 문자는 한 글자씩 토큰으로 만듭니다.
///
/// jieba 자바스크립트 구현은 공백을 한 글자씩 내보내고 `\r\n`만 묶지만,
/// 여기서는 `"  "`, `"\r\n\n"` 같은 공백 구간 전체가 토큰 하나입니다.
pub fn split_other(block: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, c) in block.char_indices() {
        if is_skip(c) {
            if run_start.is_none() {
                run_start = Some(idx);
            }
            continue;
        }
        if let Some(start) = run_start.take() {
            tokens.push(&block[start..idx]);
        }
        tokens.push(&block[idx..idx + c.len_utf8()]);
    }

    if let Some(start) = run_start {
        tokens.push(&block[start..]);
    }

    tokens
}
