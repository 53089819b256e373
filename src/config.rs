//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 분할기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SegConfig {
    /// 시작 시 로드할 외부 사전 파일 (없으면 기본 내장 사전)
    #[serde(default)]
    pub dictionary_path: Option<String>,
    /// 기본 분할에 HMM 전략 사용 여부
    #[serde(default)]
    pub use_hmm: bool,
    /// CLI 출력 시 토큰 구분자
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    " / ".to_string()
}

impl Default for SegConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            use_hmm: false,
            separator: default_separator(),
        }
    }
}

impl SegConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 사전 경로 설정
    pub fn with_dictionary_path(mut self, path: impl Into<String>) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    /// HMM 전략 사용 설정
    pub fn with_hmm(mut self, use_hmm: bool) -> Self {
        self.use_hmm = use_hmm;
        self
    }

    /// 구분자 설정
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// 설정 파일 경로: ~/.config/jieba-lite/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("jieba-lite").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> SegConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> SegConfig {
    let Ok(content) = fs::read_to_string(path) else {
        return SegConfig::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!("설정 파일 파싱 실패, 기본값 사용: {} ({})", path.display(), e);
        SegConfig::default()
    })
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &SegConfig) -> io::Result<PathBuf> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 자동 생성)
pub fn save_config_to(config: &SegConfig, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
