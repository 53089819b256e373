//! 문자 단위 접두사 트리 (Trie)

use std::collections::HashMap;

/// Trie 노드
///
/// 자식은 문자 하나로 색인되며, `terminal`이면 루트에서 이 노드까지의
/// 경로가 사전 단어입니다.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// 빈 루트 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 단어를 문자 단위로 삽입하고 마지막 노드를 종결 노드로 표시
    pub fn insert(&mut self, word: &str) {
        let mut node = self;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
    }

    /// 자식 노드 조회
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// 이 노드에서 사전 단어가 끝나는지
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// 단어 전체가 사전에 있는지 (접두사만 일치하면 false)
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self;
        for c in word.chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal
    }

    /// 자식이 없는지
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
