//! 블록 분할 전략
//!
//! 한자/영숫자 블록을 어떤 방식으로 분할할지 정합니다.

use crate::core::unicode::is_mergeable_alnum;
use crate::dict::Dictionary;

use super::dag::build_dag;
use super::route::compute_route;
use super::text::CharText;

/// 분할 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentationStrategy {
    /// 사전 DAG + 최대 확률 경로
    #[default]
    DagOnly,
    /// DAG + HMM 미등록어 복원
    ///
    /// HMM(Viterbi) 복원은 구현되어 있지 않습니다. 이 전략을 선택하면
    /// `DagOnly`와 같은 결과를 돌려줍니다.
    DagPlusHmm,
}

impl std::fmt::Display for SegmentationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentationStrategy::DagOnly => write!(f, "DagOnly"),
            SegmentationStrategy::DagPlusHmm => write!(f, "DagPlusHmm"),
        }
    }
}

impl SegmentationStrategy {
    /// `use_hmm` 플래그로 전략 선택
    pub fn from_hmm_flag(use_hmm: bool) -> Self {
        if use_hmm {
            SegmentationStrategy::DagPlusHmm
        } else {
            SegmentationStrategy::DagOnly
        }
    }

    /// 전략 자체의 알고리즘이 구현되어 있는지
    pub fn is_implemented(&self) -> bool {
        matches!(self, SegmentationStrategy::DagOnly)
    }

    /// 실제로 실행되는 전략
    pub fn effective(&self) -> SegmentationStrategy {
        match self {
            SegmentationStrategy::DagOnly | SegmentationStrategy::DagPlusHmm => {
                SegmentationStrategy::DagOnly
            }
        }
    }

    /// 한자/영숫자 블록 하나를 분할
    pub fn cut_block<'a>(&self, dict: &Dictionary, block: &'a str) -> Vec<&'a str> {
        if !self.is_implemented() {
            log::debug!("{} 전략은 미구현: {}로 대체", self, self.effective());
        }
        match self.effective() {
            SegmentationStrategy::DagOnly | SegmentationStrategy::DagPlusHmm => {
                cut_dag_no_hmm(dict, block)
            }
        }
    }
}

/// DAG + DP 분할
///
/// 최적 경로를 앞에서부터 따라가며 토큰을 만들고, 한 글자짜리 영숫자 토큰이
/// 연달아 나오면 하나로 합칩니다 (예: `1`,`2`,`3` → `123`).
fn cut_dag_no_hmm<'a>(dict: &Dictionary, block: &'a str) -> Vec<&'a str> {
    let text = CharText::new(block);
    let dag = build_dag(dict, &text);
    let route = compute_route(dict, &text, &dag);

    let mut words = Vec::new();
    // 병합 중인 영숫자 구간 [start, end)
    let mut buf: Option<(usize, usize)> = None;

    for span in route.spans() {
        let single_alnum =
            span.len() == 1 && text.chars().get(span.start).copied().is_some_and(is_mergeable_alnum);

        if single_alnum {
            buf = match buf {
                Some((start, _)) => Some((start, span.end)),
                None => Some((span.start, span.end)),
            };
            continue;
        }

        if let Some((start, end)) = buf.take() {
            words.push(text.slice(start, end));
        }
        words.push(text.slice(span.start, span.end));
    }

    if let Some((start, end)) = buf {
        words.push(text.slice(start, end));
    }

    words
}
