//! 분할 후보 그래프 (DAG)
//!
//! 각 시작 위치 `i`에서 사전 단어로 끝날 수 있는 모든 끝 위치 `j`
//! (`sentence[i..=j]`가 사전 단어)를 구합니다.

use crate::dict::Dictionary;

use super::text::CharText;

/// 분할 후보 그래프
///
/// 불변식:
/// - 모든 위치는 최소 하나의 끝 위치를 가짐 (없으면 자기 자신 `{i}`)
/// - 끝 위치 목록은 오름차순, 중복 없음, 모두 `i` 이상
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dag {
    ends: Vec<Vec<usize>>,
}

impl Dag {
    /// 끝 위치 목록으로 직접 생성
    ///
    /// 정렬/중복 제거 후 범위를 벗어난 끝 위치는 버리고,
    /// 비어 있는 위치에는 `{i}`를 채웁니다.
    pub fn from_ends(mut ends: Vec<Vec<usize>>) -> Self {
        let n = ends.len();
        for (i, list) in ends.iter_mut().enumerate() {
            list.retain(|&j| j >= i && j < n);
            list.sort_unstable();
            list.dedup();
            if list.is_empty() {
                list.push(i);
            }
        }
        Self { ends }
    }

    /// 위치 수 (= 문자 수)
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// 시작 위치 `i`의 끝 위치 목록 (오름차순)
    pub fn ends(&self, i: usize) -> &[usize] {
        self.ends.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// (시작 위치, 끝 위치 목록) 순회
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.ends.iter().enumerate().map(|(i, list)| (i, list.as_slice()))
    }
}

/// 문장의 DAG 생성
///
/// 시작 포인터 `i`와 탐색 포인터 `j`로 Trie를 따라가는 다중 시작 탐색입니다.
/// Trie에 없는 문자를 만나면 `i + 1`부터 다시 시작하고,
/// 문장 끝에 닿아도 `i + 1`부터 다시 시작합니다.
pub fn build_dag(dict: &Dictionary, text: &CharText<'_>) -> Dag {
    let chars = text.chars();
    let n = chars.len();
    let root = dict.trie();
    let mut ends: Vec<Vec<usize>> = vec![Vec::new(); n];

    let mut i = 0;
    let mut j = 0;
    let mut node = root;

    while i < n {
        match node.child(chars[j]) {
            Some(next) => {
                node = next;
                if node.is_terminal() {
                    ends[i].push(j);
                }
                j += 1;
                if j >= n {
                    i += 1;
                    j = i;
                    node = root;
                }
            }
            None => {
                node = root;
                i += 1;
                j = i;
            }
        }
    }

    // 한 글자 대체 경로
    for (i, list) in ends.iter_mut().enumerate() {
        if list.is_empty() {
            list.push(i);
        }
        debug_assert!(list.windows(2).all(|w| w[0] < w[1]));
    }

    Dag { ends }
}
