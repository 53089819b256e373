//! 사전 기반 중국어 분할
//!
//! 사전 단어의 최대 확률 조합으로 문장을 나눕니다.
//!
//! # 개요
//!
//! 한자/영숫자 블록은 3단계 파이프라인으로 분할합니다:
//!
//! 1. **DAG 생성**: 각 위치에서 Trie를 따라가 사전 단어의 끝 위치를 모두 찾음
//! 2. **경로 계산**: 문장 끝에서부터 최대 누적 로그 확률 경로를 구함
//! 3. **토큰화**: 경로를 앞에서부터 따라가며 한 글자 영숫자는 병합
//!
//! 그 외 블록(구두점, 공백 등)은 공백 구간과 한 글자 단위로 나눕니다.
//!
//! # 사용 예시
//!
//! ```
//! use jieba_lite::segment::{SegmentationStrategy, Segmenter};
//!
//! let mut segmenter = Segmenter::new();
//! segmenter.add_word("你好", 1.0).unwrap();
//!
//! let words = segmenter.cut("Hello 你好123", false);
//! assert_eq!(words, vec!["Hello", " ", "你好", "123"]);
//! assert_eq!(words.concat(), "Hello 你好123");
//!
//! // HMM 전략은 아직 DAG 전략과 같은 결과
//! assert!(!SegmentationStrategy::DagPlusHmm.is_implemented());
//! assert_eq!(segmenter.cut("我爱北京天安门", true), segmenter.cut("我爱北京天安门", false));
//!
//! // 모든 후보 조각
//! assert_eq!(segmenter.cut_all("北京"), vec!["北京", "京"]);
//! ```

mod dag;
mod route;
mod segmenter;
mod strategy;
mod text;

// 공개 인터페이스
pub use dag::{build_dag, Dag};
pub use route::{compute_route, Route, RouteEntry};
pub use segmenter::Segmenter;
pub use strategy::SegmentationStrategy;
pub use text::CharText;
