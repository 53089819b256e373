//! 사전 저장소: Trie + 로그 확률 빈도표
//!
//! (단어, 빈도) 목록으로 Trie와 빈도표를 만들고,
//! 빈도를 `ln(freq / total)` 로그 확률로 변환해 보관합니다.

use std::collections::HashMap;

use serde::Serialize;

use super::trie::TrieNode;

/// 사전 구성/로드 에러
#[derive(Debug)]
pub enum DictError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(String),
    /// 사전 형식 오류
    Format(String),
    /// 빈도가 없거나 0 이하 (유한한 양수만 허용)
    InvalidFrequency { word: String, freq: Option<f64> },
    /// 빈 단어
    EmptyWord,
    /// 빈도 합계가 f64 범위를 넘음
    TotalOverflow,
}

impl std::fmt::Display for DictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
            DictError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            DictError::Format(s) => write!(f, "사전 형식 오류: {}", s),
            DictError::InvalidFrequency { word, freq: Some(v) } => {
                write!(f, "유효하지 않은 빈도값: {} ({})", word, v)
            }
            DictError::InvalidFrequency { word, freq: None } => {
                write!(f, "빈도값 없음: {}", word)
            }
            DictError::EmptyWord => write!(f, "빈 단어는 사전에 넣을 수 없습니다"),
            DictError::TotalOverflow => write!(f, "빈도 합계가 너무 큽니다"),
        }
    }
}

impl std::error::Error for DictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DictError {
    fn from(e: std::io::Error) -> Self {
        DictError::Io(e)
    }
}

/// 단어/빈도 검증
fn validate(word: &str, freq: f64) -> Result<(), DictError> {
    if word.is_empty() {
        return Err(DictError::EmptyWord);
    }
    if !freq.is_finite() || freq <= 0.0 {
        return Err(DictError::InvalidFrequency {
            word: word.to_string(),
            freq: Some(freq),
        });
    }
    Ok(())
}

/// 단어 사전
///
/// 세그멘터가 소유하는 유일한 영속 상태입니다. 분할(`cut`)은 읽기만 하고,
/// `build`/`add_word`만 `&mut self`로 변경합니다.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// 단어 인식용 Trie
    trie: TrieNode,
    /// 단어 -> 로그 확률
    freq: HashMap<String, f64>,
    /// 마지막 전체 빌드 시점의 원시 빈도 합
    total: f64,
    /// 마지막 전체 빌드 시점의 최소 로그 확률 (미등록 조각의 하한값)
    min_freq: f64,
}

impl Dictionary {
    /// 빈 사전 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// (단어, 빈도) 목록으로 사전 생성
    ///
    /// 모든 항목을 먼저 검증하므로 하나라도 잘못되면 사전은 만들어지지 않습니다.
    /// 같은 단어가 여러 번 나오면 빈도표는 마지막 값을 쓰지만 `total`에는 모두 더해집니다.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut raw: HashMap<String, f64> = HashMap::new();
        let mut trie = TrieNode::new();
        let mut total = 0.0;

        for (word, freq) in entries {
            let word = word.as_ref();
            validate(word, freq)?;
            total += freq;
            trie.insert(word);
            raw.insert(word.to_string(), freq);
        }

        if !total.is_finite() {
            return Err(DictError::TotalOverflow);
        }

        let mut min_freq = f64::INFINITY;
        let freq: HashMap<String, f64> = raw
            .into_iter()
            .map(|(word, v)| {
                let log_prob = (v / total).ln();
                min_freq = min_freq.min(log_prob);
                (word, log_prob)
            })
            .collect();

        // 빈 사전은 하한값 0.0
        if freq.is_empty() {
            min_freq = 0.0;
        }

        log::debug!(
            "사전 빌드 완료: 단어 {}개, 총 빈도 {}, 최소 로그 확률 {}",
            freq.len(),
            total,
            min_freq
        );

        Ok(Self {
            trie,
            freq,
            total,
            min_freq,
        })
    }

    /// 사전 전체 교체
    ///
    /// 실패하면 기존 사전은 그대로 남습니다.
    pub fn build<I, S>(&mut self, entries: I) -> Result<(), DictError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        *self = Self::from_entries(entries)?;
        Ok(())
    }

    /// 단어 하나 추가 (이미 있으면 덮어씀)
    ///
    /// 로그 확률은 기존 `total` 기준으로 계산하며, `total`과 `min_freq`는
    /// 다시 계산하지 않습니다. 추가가 누적될수록 두 값은 실제 빈도 분포와
    /// 어긋나며, `build`를 다시 호출해야 맞춰집니다.
    pub fn add_word(&mut self, word: &str, freq: f64) -> Result<(), DictError> {
        validate(word, freq)?;

        // 한 번도 빌드되지 않은 빈 사전: 첫 단어의 빈도를 기준으로 삼음
        if self.total <= 0.0 {
            self.total = freq;
        }

        let log_prob = (freq / self.total).ln();
        self.freq.insert(word.to_string(), log_prob);
        self.trie.insert(word);

        log::debug!("단어 추가: {} (로그 확률 {})", word, log_prob);
        Ok(())
    }

    /// Trie 루트
    pub fn trie(&self) -> &TrieNode {
        &self.trie
    }

    /// 단어의 로그 확률 (미등록이면 None)
    pub fn log_freq(&self, word: &str) -> Option<f64> {
        self.freq.get(word).copied()
    }

    /// 단어의 로그 확률, 미등록이면 `min_freq`
    pub fn log_freq_or_floor(&self, word: &str) -> f64 {
        self.log_freq(word).unwrap_or(self.min_freq)
    }

    /// 단어가 사전에 있는지
    pub fn contains(&self, word: &str) -> bool {
        self.freq.contains_key(word)
    }

    /// 원시 빈도 합
    pub fn total(&self) -> f64 {
        self.total
    }

    /// 최소 로그 확률
    pub fn min_freq(&self) -> f64 {
        self.min_freq
    }

    /// 단어 수
    pub fn len(&self) -> usize {
        self.freq.len()
    }

    /// 사전이 비어있는지
    pub fn is_empty(&self) -> bool {
        self.freq.is_empty()
    }
}

/// 사전 통계
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DictionaryStats {
    /// 서로 다른 단어 수
    pub word_count: usize,
    /// 원시 빈도 합
    pub total: f64,
    /// 최소 로그 확률
    pub min_log_freq: f64,
    /// 외부 사전이 로드되었는지
    pub is_full_dictionary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_entries(vec![("北京", 2.0), ("天安门", 1.0), ("我", 1.0)]).unwrap()
    }

    #[test]
    fn test_build_log_probabilities() {
        let dict = sample();

        assert_eq!(dict.len(), 3);
        assert!((dict.total() - 4.0).abs() < f64::EPSILON);
        assert!((dict.log_freq("北京").unwrap() - (0.5f64).ln()).abs() < 1e-12);
        assert!((dict.log_freq("我").unwrap() - (0.25f64).ln()).abs() < 1e-12);
        assert!((dict.min_freq() - (0.25f64).ln()).abs() < 1e-12);
        assert!(dict.trie().contains("天安门"));
    }

    #[test]
    fn test_floor_for_unknown_word() {
        let dict = sample();
        assert_eq!(dict.log_freq("上海"), None);
        assert_eq!(dict.log_freq_or_floor("上海"), dict.min_freq());
    }

    #[test]
    fn test_duplicate_entries() {
        // 빈도표는 마지막 값, total은 모두 합산
        let dict = Dictionary::from_entries(vec![("学习", 1.0), ("中文", 1.0), ("学习", 2.0)]).unwrap();
        assert_eq!(dict.len(), 2);
        assert!((dict.total() - 4.0).abs() < f64::EPSILON);
        assert!((dict.log_freq("学习").unwrap() - (0.5f64).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Dictionary::from_entries(vec![("我", 1.0), ("爱", bad)]);
            assert!(
                matches!(result, Err(DictError::InvalidFrequency { ref word, .. }) if word == "爱"),
                "빈도 {} 는 거부되어야 함",
                bad
            );
        }
    }

    #[test]
    fn test_empty_word_rejected() {
        let result = Dictionary::from_entries(vec![("", 1.0)]);
        assert!(matches!(result, Err(DictError::EmptyWord)));
    }

    #[test]
    fn test_total_overflow_rejected() {
        // 각각은 유효하지만 합계가 무한대
        let result = Dictionary::from_entries(vec![("甲", 1e308), ("乙", 1e308)]);
        assert!(matches!(result, Err(DictError::TotalOverflow)));

        let mut dict = sample();
        assert!(dict.build(vec![("甲", f64::MAX), ("乙", f64::MAX)]).is_err());
        assert_eq!(dict.len(), 3, "실패한 빌드는 기존 사전 유지");
    }

    #[test]
    fn test_failed_build_keeps_previous() {
        let mut dict = sample();
        let result = dict.build(vec![("上海", 5.0), ("坏", -3.0)]);
        assert!(result.is_err());

        // 기존 상태 유지
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("北京"));
        assert!(!dict.contains("上海"));
        assert!(!dict.trie().contains("上海"));
    }

    #[test]
    fn test_build_replaces() {
        let mut dict = sample();
        dict.build(vec![("上海", 1.0)]).unwrap();
        assert_eq!(dict.len(), 1);
        assert!(!dict.contains("北京"));
        assert!(!dict.trie().contains("北京"));
        assert_eq!(dict.log_freq("上海"), Some(0.0));
    }

    #[test]
    fn test_add_word_keeps_aggregates_stale() {
        let mut dict = sample();
        let total = dict.total();
        let min_freq = dict.min_freq();

        dict.add_word("自定义词", 0.01).unwrap();

        // total/min_freq 는 갱신하지 않음
        assert_eq!(dict.total(), total);
        assert_eq!(dict.min_freq(), min_freq);
        assert!((dict.log_freq("自定义词").unwrap() - (0.01f64 / 4.0).ln()).abs() < 1e-12);
        assert!(dict.log_freq("自定义词").unwrap() < dict.min_freq());
        assert!(dict.trie().contains("自定义词"));
    }

    #[test]
    fn test_add_word_overwrites() {
        let mut dict = sample();
        dict.add_word("我", 4.0).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.log_freq("我"), Some(0.0));
    }

    #[test]
    fn test_add_word_validation() {
        let mut dict = sample();
        assert!(matches!(dict.add_word("", 1.0), Err(DictError::EmptyWord)));
        assert!(matches!(
            dict.add_word("词", 0.0),
            Err(DictError::InvalidFrequency { .. })
        ));
        assert!(!dict.contains("词"));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::from_entries(Vec::<(&str, f64)>::new()).unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.min_freq(), 0.0);
        assert_eq!(dict.total(), 0.0);
    }

    #[test]
    fn test_add_word_into_empty_dictionary() {
        let mut dict = Dictionary::new();
        dict.add_word("你好", 3.0).unwrap();
        assert_eq!(dict.total(), 3.0);
        assert_eq!(dict.log_freq("你好"), Some(0.0));
    }

    #[test]
    fn test_error_display() {
        let err = DictError::InvalidFrequency {
            word: "我".into(),
            freq: None,
        };
        assert!(err.to_string().contains("我"));
    }
}
