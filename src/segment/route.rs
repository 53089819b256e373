//! 최대 로그 확률 경로 계산 (동적 계획법)
//!
//! 문장 끝에서부터 거꾸로, 각 위치에서 끝까지의 최대 누적 로그 확률과
//! 그때 선택한 첫 단어의 끝 위치를 구합니다.
//!
//! route[idx] = max_{x ∈ DAG[idx]} ( logP(sentence[idx..=x]) + route[x+1] )

use std::ops::Range;

use crate::dict::Dictionary;

use super::dag::Dag;
use super::text::CharText;

/// 경로표 항목
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEntry {
    /// 이 위치부터 문장 끝까지의 최대 누적 로그 확률
    pub score: f64,
    /// 선택한 단어의 끝 위치 (포함). 문장 끝(기저 항목)은 None
    pub end: Option<usize>,
}

/// 경로표 (길이 N + 1)
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    entries: Vec<RouteEntry>,
}

impl Route {
    /// 항목 수 (문자 수 + 1)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 항상 기저 항목이 있으므로 비어있지 않음
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&RouteEntry> {
        self.entries.get(idx)
    }

    /// 위치 `idx`의 최대 누적 로그 확률
    pub fn score(&self, idx: usize) -> Option<f64> {
        self.get(idx).map(|e| e.score)
    }

    /// 위치 `idx`에서 선택한 끝 위치
    pub fn best_end(&self, idx: usize) -> Option<usize> {
        self.get(idx).and_then(|e| e.end)
    }

    /// 0부터 앞으로 따라가며 선택된 단어 구간 `[start, end)` 목록
    pub fn spans(&self) -> Vec<Range<usize>> {
        let n = self.entries.len().saturating_sub(1);
        let mut spans = Vec::new();
        let mut x = 0;
        while x < n {
            let y = self.best_end(x).map_or(n, |end| end + 1);
            spans.push(x..y);
            x = y;
        }
        spans
    }
}

/// DAG 위에서 최대 로그 확률 경로 계산
///
/// 끝 위치는 오름차순으로 보며, 최댓값이 같으면 먼저 나온(더 짧은) 후보를 고릅니다.
/// 사전에 없는 조각은 `min_freq`를 로그 확률로 씁니다.
pub fn compute_route(dict: &Dictionary, text: &CharText<'_>, dag: &Dag) -> Route {
    let n = text.len();
    let mut entries = vec![
        RouteEntry {
            score: 0.0,
            end: None,
        };
        n + 1
    ];

    for idx in (0..n).rev() {
        let mut best: Option<(f64, usize)> = None;

        for &x in dag.ends(idx) {
            if x >= n {
                continue;
            }
            let word = text.slice(idx, x + 1);
            let score = dict.log_freq_or_floor(word) + entries[x + 1].score;
            match best {
                Some((best_score, _)) if score <= best_score => {}
                _ => best = Some((score, x)),
            }
        }

        // DAG가 비어 있는 위치는 한 글자로 처리
        let (score, x) = best.unwrap_or_else(|| {
            (
                dict.log_freq_or_floor(text.slice(idx, idx + 1)) + entries[idx + 1].score,
                idx,
            )
        });
        entries[idx] = RouteEntry {
            score,
            end: Some(x),
        };
    }

    Route { entries }
}
