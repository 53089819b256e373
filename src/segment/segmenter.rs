//! 문장 분할기
//!
//! 입력을 문자 종류별 블록으로 나누고, 블록마다 알맞은 방식으로 분할한 뒤
//! 순서대로 이어 붙입니다. 모든 토큰은 입력의 슬라이스이므로 이어 붙이면
//! 원문과 같습니다.

use std::path::Path;

use crate::config::SegConfig;
use crate::core::unicode::{split_blocks, split_other, Block};
use crate::dict::{default_dictionary, load_entries, parse_entries, DictError, Dictionary, DictionaryStats};

use super::dag::{build_dag, Dag};
use super::route::{compute_route, Route};
use super::strategy::SegmentationStrategy;
use super::text::CharText;

/// 사전 기반 문장 분할기
///
/// 사전을 소유하며 분할은 `&self`, 사전 변경은 `&mut self`로만 가능합니다.
/// 여러 스레드에서 공유하려면 `RwLock<Segmenter>` 등으로 감싸야 합니다.
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// 단어 사전
    dict: Dictionary,
    /// 외부 사전 로드 여부
    full_dictionary: bool,
    /// `cut_default`에서 쓰는 전략
    strategy: SegmentationStrategy,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// 기본 내장 사전으로 분할기 생성
    pub fn new() -> Self {
        Self::with_dictionary(default_dictionary())
    }

    /// 사전을 지정하여 분할기 생성
    pub fn with_dictionary(dict: Dictionary) -> Self {
        Self {
            dict,
            full_dictionary: false,
            strategy: SegmentationStrategy::DagOnly,
        }
    }

    /// (단어, 빈도) 목록으로 분할기 생성
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Ok(Self::with_dictionary(Dictionary::from_entries(entries)?))
    }

    /// 설정으로 분할기 생성
    ///
    /// 사전 경로가 있으면 로드를 시도하고, 실패하면 경고 후 기본 사전을 사용합니다.
    pub fn from_config(config: &SegConfig) -> Self {
        let mut segmenter = Self::new().with_strategy(SegmentationStrategy::from_hmm_flag(config.use_hmm));

        if let Some(path) = config.dictionary_path.as_deref() {
            if let Err(e) = segmenter.load_dictionary(path) {
                log::warn!("사전 로드 실패, 기본 사전 사용: {} ({})", path, e);
            }
        }

        segmenter
    }

    /// 기본 전략 설정
    pub fn with_strategy(mut self, strategy: SegmentationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 현재 기본 전략
    pub fn strategy(&self) -> SegmentationStrategy {
        self.strategy
    }

    /// 사전 참조
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// 사전 전체 교체 (실패 시 기존 사전 유지)
    pub fn build<I, S>(&mut self, entries: I) -> Result<(), DictError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        self.dict.build(entries)
    }

    /// 단어 추가/덮어쓰기
    ///
    /// `total`과 최소 로그 확률은 갱신하지 않습니다 ([`Dictionary::add_word`]).
    pub fn add_word(&mut self, word: &str, freq: f64) -> Result<(), DictError> {
        self.dict.add_word(word, freq)
    }

    /// 외부 사전 파일 로드
    ///
    /// 이미 외부 사전이 로드되어 있으면 아무것도 하지 않습니다.
    pub fn load_dictionary(&mut self, path: impl AsRef<Path>) -> Result<(), DictError> {
        if self.full_dictionary {
            log::debug!("외부 사전이 이미 로드되어 있습니다");
            return Ok(());
        }
        let path = path.as_ref();
        let entries = load_entries(path)?;
        self.install_full_dictionary(entries)?;
        log::info!("사전 로드 완료: {} (단어 {}개)", path.display(), self.dict.len());
        Ok(())
    }

    /// 외부 사전 텍스트 로드 (JSON 배열 또는 `var dictionary = [...];`)
    pub fn load_dictionary_str(&mut self, text: &str) -> Result<(), DictError> {
        if self.full_dictionary {
            log::debug!("외부 사전이 이미 로드되어 있습니다");
            return Ok(());
        }
        let entries = parse_entries(text)?;
        self.install_full_dictionary(entries)
    }

    fn install_full_dictionary(&mut self, entries: Vec<(String, f64)>) -> Result<(), DictError> {
        self.dict.build(entries)?;
        self.full_dictionary = true;
        Ok(())
    }

    /// 외부 사전이 로드되었는지
    pub fn is_dictionary_loaded(&self) -> bool {
        self.full_dictionary
    }

    /// 사전 통계
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            word_count: self.dict.len(),
            total: self.dict.total(),
            min_log_freq: self.dict.min_freq(),
            is_full_dictionary: self.full_dictionary,
        }
    }

    /// 문장 분할
    ///
    /// `use_hmm`이 true면 [`SegmentationStrategy::DagPlusHmm`]을 선택하지만,
    /// 이 전략은 현재 `DagOnly`와 같은 결과를 냅니다.
    ///
    /// # Examples
    /// ```
    /// use jieba_lite::Segmenter;
    ///
    /// let segmenter = Segmenter::new();
    /// assert_eq!(segmenter.cut("我爱北京天安门", false), vec!["我", "爱", "北京", "天安门"]);
    /// ```
    pub fn cut<'a>(&self, sentence: &'a str, use_hmm: bool) -> Vec<&'a str> {
        self.cut_with(sentence, SegmentationStrategy::from_hmm_flag(use_hmm))
    }

    /// 기본 전략으로 문장 분할
    pub fn cut_default<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        self.cut_with(sentence, self.strategy)
    }

    /// 전략을 지정하여 문장 분할
    pub fn cut_with<'a>(&self, sentence: &'a str, strategy: SegmentationStrategy) -> Vec<&'a str> {
        let mut words = Vec::new();

        for block in split_blocks(sentence) {
            match block {
                Block::Segmentable(text) if !text.is_empty() => {
                    words.extend(strategy.cut_block(&self.dict, text));
                }
                Block::Other(text) if !text.is_empty() => {
                    words.extend(split_other(text));
                }
                _ => {}
            }
        }

        words
    }

    /// 사전에 있는 모든 후보 조각
    ///
    /// `cut`과 같은 블록 경계를 따르므로 `cut`이 내는 토큰은 모두 여기에도 나옵니다.
    /// 한자/영숫자 블록 안에서는 시작 위치 오름차순, 같은 시작 위치에서는 끝 위치
    /// 오름차순이고 사전에 없는 문자는 한 글자 조각입니다. 그 외 블록은 `cut`과 동일하게 나눕니다.
    pub fn cut_all<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        let mut words = Vec::new();

        for block in split_blocks(sentence) {
            match block {
                Block::Segmentable(text) if !text.is_empty() => {
                    let text = CharText::new(text);
                    let dag = build_dag(&self.dict, &text);
                    for (i, ends) in dag.iter() {
                        words.extend(ends.iter().map(|&j| text.slice(i, j + 1)));
                    }
                }
                Block::Other(text) if !text.is_empty() => {
                    words.extend(split_other(text));
                }
                _ => {}
            }
        }

        words
    }

    /// 문장의 DAG
    pub fn dag(&self, sentence: &str) -> Dag {
        build_dag(&self.dict, &CharText::new(sentence))
    }

    /// 문장의 최대 확률 경로표
    pub fn route(&self, sentence: &str) -> Route {
        let text = CharText::new(sentence);
        let dag = build_dag(&self.dict, &text);
        compute_route(&self.dict, &text, &dag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_default_dictionary() {
        let segmenter = Segmenter::new();
        assert_eq!(
            segmenter.cut("我爱北京天安门", false),
            vec!["我", "爱", "北京", "天安门"]
        );
    }

    #[test]
    fn test_cut_mixed_script() {
        let mut segmenter = Segmenter::new();
        segmenter.add_word("你好", 1.0).unwrap();
        assert_eq!(
            segmenter.cut("Hello 你好123", false),
            vec!["Hello", " ", "你好", "123"]
        );
    }

    #[test]
    fn test_cut_punctuation_and_whitespace() {
        let segmenter = Segmenter::new();
        assert_eq!(
            segmenter.cut("今天，天气很好！\r\n", false),
            vec!["今天", "，", "天气", "很好", "！", "\r\n"]
        );
    }

    #[test]
    fn test_cut_empty() {
        let segmenter = Segmenter::new();
        assert!(segmenter.cut("", false).is_empty());
        assert!(segmenter.cut_all("").is_empty());
    }

    #[test]
    fn test_cut_all_order() {
        let segmenter =
            Segmenter::from_entries(vec![("人", 1.0), ("人工", 1.0), ("人工智能", 1.0), ("智能", 1.0)])
                .unwrap();
        assert_eq!(
            segmenter.cut_all("人工智能"),
            vec!["人", "人工", "人工智能", "工", "智能", "能"]
        );
    }

    #[test]
    fn test_cut_all_respects_blocks() {
        // "好!"는 블록 경계를 넘는 단어라 후보가 되지 않음
        let segmenter = Segmenter::from_entries(vec![("你", 1.0), ("好!", 1.0)]).unwrap();
        assert_eq!(segmenter.cut_all("你好!"), vec!["你", "好", "!"]);
        assert_eq!(segmenter.cut_all("北京  ok"), vec!["北", "京", "  ", "o", "k"]);
    }

    #[test]
    fn test_cut_with_strategy() {
        let segmenter = Segmenter::new().with_strategy(SegmentationStrategy::DagPlusHmm);
        assert_eq!(segmenter.strategy(), SegmentationStrategy::DagPlusHmm);
        assert_eq!(
            segmenter.cut_default("我们学习中文"),
            segmenter.cut("我们学习中文", false)
        );
    }

    #[test]
    fn test_stats() {
        let segmenter = Segmenter::new();
        let stats = segmenter.stats();
        assert_eq!(stats.word_count, 75);
        assert!((stats.total - 77.0).abs() < f64::EPSILON);
        assert!(!stats.is_full_dictionary);
    }

    #[test]
    fn test_load_dictionary_str() {
        let mut segmenter = Segmenter::new();
        segmenter
            .load_dictionary_str(r#"var dictionary = [["测试", 5], ["文本", 3]];"#)
            .unwrap();

        assert!(segmenter.is_dictionary_loaded());
        let stats = segmenter.stats();
        assert_eq!(stats.word_count, 2);
        assert!(stats.is_full_dictionary);
        assert_eq!(segmenter.cut("测试文本", false), vec!["测试", "文本"]);

        // 두 번째 로드는 무시
        segmenter.load_dictionary_str(r#"[["其他", 1]]"#).unwrap();
        assert_eq!(segmenter.stats().word_count, 2);
    }

    #[test]
    fn test_load_dictionary_failure_keeps_default() {
        let mut segmenter = Segmenter::new();
        let result = segmenter.load_dictionary_str(r#"[["测试", 0]]"#);
        assert!(matches!(result, Err(DictError::InvalidFrequency { .. })));
        assert!(!segmenter.is_dictionary_loaded());
        assert_eq!(segmenter.stats().word_count, 75);
    }

    #[test]
    fn test_from_config_missing_dictionary() {
        let config = SegConfig {
            dictionary_path: Some("/nonexistent/jieba-lite/dict.json".into()),
            use_hmm: true,
            ..SegConfig::default()
        };
        let segmenter = Segmenter::from_config(&config);
        assert!(!segmenter.is_dictionary_loaded());
        assert_eq!(segmenter.strategy(), SegmentationStrategy::DagPlusHmm);
        assert_eq!(segmenter.stats().word_count, 75);
    }

    #[test]
    fn test_route_and_dag_accessors() {
        let segmenter = Segmenter::new();
        let dag = segmenter.dag("北京");
        assert_eq!(dag.ends(0), &[1]);
        let route = segmenter.route("北京");
        assert_eq!(route.spans(), vec![0..2]);
    }
}
