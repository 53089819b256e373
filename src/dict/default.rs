//! 기본 내장 사전
//!
//! 외부 사전을 로드하기 전에 사용하는 최소 사전입니다.

use lazy_static::lazy_static;

use super::store::Dictionary;

/// 기본 사전 항목 (단어, 빈도)
///
/// `学习`, `中文`은 두 번 들어 있습니다. 빈도표에는 한 번만 남지만 `total`에는
/// 두 번 합산됩니다.
#[rustfmt::skip]
pub const DEFAULT_ENTRIES: [(&str, f64); 77] = [
    ("我", 1.0), ("爱", 1.0), ("北京", 1.0), ("天安门", 1.0),
    ("的", 1.0), ("是", 1.0), ("在", 1.0), ("有", 1.0), ("和", 1.0),
    ("了", 1.0), ("不", 1.0), ("人", 1.0), ("都", 1.0), ("一", 1.0),
    ("个", 1.0), ("上", 1.0), ("也", 1.0), ("很", 1.0), ("到", 1.0),
    ("说", 1.0), ("要", 1.0), ("就", 1.0), ("去", 1.0), ("你", 1.0),
    ("他", 1.0), ("她", 1.0), ("它", 1.0), ("们", 1.0), ("这", 1.0),
    ("那", 1.0), ("什么", 1.0), ("怎么", 1.0), ("为什么", 1.0),
    ("中国", 1.0), ("中文", 1.0), ("学习", 1.0), ("工作", 1.0),
    ("生活", 1.0), ("时间", 1.0), ("地方", 1.0), ("朋友", 1.0),
    ("家人", 1.0), ("学校", 1.0), ("公司", 1.0), ("城市", 1.0),
    ("国家", 1.0), ("世界", 1.0), ("今天", 1.0), ("明天", 1.0),
    ("昨天", 1.0), ("现在", 1.0), ("以后", 1.0), ("以前", 1.0),
    ("天气", 1.0), ("很好", 1.0), ("公园", 1.0), ("散步", 1.0),
    ("人工智能", 1.0), ("技术", 1.0), ("正在", 1.0), ("快速", 1.0),
    ("发展", 1.0), ("改变", 1.0), ("我们", 1.0), ("方式", 1.0),
    ("学习", 1.0), ("中文", 1.0), ("有趣", 1.0), ("事情", 1.0),
    ("需要", 1.0), ("不断", 1.0), ("练习", 1.0), ("首都", 1.0),
    ("悠久", 1.0), ("历史", 1.0), ("丰富", 1.0), ("文化", 1.0),
];

lazy_static! {
    /// 기본 사전 (최초 접근 시 한 번만 빌드)
    pub static ref DEFAULT_DICTIONARY: Dictionary =
        Dictionary::from_entries(DEFAULT_ENTRIES).unwrap_or_else(|e| {
            log::error!("기본 사전 빌드 실패: {}", e);
            Dictionary::new()
        });
}

/// 기본 사전 복사본
pub fn default_dictionary() -> Dictionary {
    DEFAULT_DICTIONARY.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dictionary_stats() {
        let dict = default_dictionary();
        // 중복 2개 제외
        assert_eq!(dict.len(), 75);
        assert!((dict.total() - 77.0).abs() < f64::EPSILON);
        assert!((dict.min_freq() - (1.0f64 / 77.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_default_dictionary_words() {
        let dict = default_dictionary();
        for word in ["我", "爱", "北京", "天安门", "人工智能", "为什么"] {
            assert!(dict.contains(word), "기본 사전에 '{}'가 있어야 함", word);
            assert!(dict.trie().contains(word));
        }
        assert!(!dict.contains("你好"));
    }

    #[test]
    fn test_default_dictionary_is_shared_snapshot() {
        let mut copy = default_dictionary();
        copy.add_word("你好", 1.0).unwrap();
        // 원본 스냅샷은 변하지 않음
        assert!(!DEFAULT_DICTIONARY.contains("你好"));
    }
}
