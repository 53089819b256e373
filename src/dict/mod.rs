//! 단어 사전
//!
//! 문자 단위 Trie와 로그 확률 빈도표로 이루어진 사전입니다.
//!
//! # 사용 예시
//!
//! ```
//! use jieba_lite::dict::Dictionary;
//!
//! let mut dict = Dictionary::from_entries(vec![("北京", 3.0), ("天安门", 1.0)]).unwrap();
//! assert!(dict.contains("北京"));
//! assert!((dict.log_freq("北京").unwrap() - (0.75f64).ln()).abs() < 1e-12);
//!
//! // 단어 추가 (total/min_freq 는 그대로)
//! dict.add_word("长城", 2.0).unwrap();
//! assert!(dict.trie().contains("长城"));
//! assert_eq!(dict.total(), 4.0);
//! ```

mod default;
mod loader;
mod store;
mod trie;

// 공개 인터페이스
pub use default::{default_dictionary, DEFAULT_DICTIONARY, DEFAULT_ENTRIES};
pub use loader::{load_entries, parse_entries, DictEntry};
pub use store::{DictError, Dictionary, DictionaryStats};
pub use trie::TrieNode;
