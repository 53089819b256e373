//! jieba-lite - 사전 기반 중국어 분할 CLI

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;

use jieba_lite::config::{load_config, save_config, SegConfig};
use jieba_lite::{DictError, SegmentationStrategy, Segmenter};

#[derive(Parser, Debug)]
#[command(name = "jieba-lite")]
#[command(about = "사전 기반 중국어 분할", long_about = None)]
#[command(version)]
struct Args {
    /// 사전에 있는 모든 후보 조각 출력
    #[arg(long)]
    all: bool,

    /// HMM 전략 선택 (현재 DAG 전략과 동일한 결과)
    #[arg(long)]
    hmm: bool,

    /// 외부 사전 파일 (JSON 배열 또는 var dictionary = [...];)
    #[arg(long, value_name = "PATH")]
    dict: Option<String>,

    /// 토큰 구분자 (기본값은 설정 파일의 separator)
    #[arg(long, value_name = "SEP")]
    separator: Option<String>,

    /// 사전 통계를 JSON으로 출력
    #[arg(long)]
    stats: bool,

    /// 현재 옵션을 설정 파일에 저장
    #[arg(long)]
    save_config: bool,

    /// 분할할 문장 (없으면 표준 입력을 줄 단위로 분할)
    texts: Vec<String>,
}

/// 설정 파일 값 위에 명령행 옵션 적용
fn apply_args(args: &Args, mut config: SegConfig) -> SegConfig {
    if args.hmm {
        config.use_hmm = true;
    }
    if let Some(path) = &args.dict {
        config.dictionary_path = Some(path.clone());
    }
    if let Some(separator) = &args.separator {
        config.separator = separator.clone();
    }
    config
}

/// 분할기 생성
///
/// `--dict`로 지정한 사전은 로드 실패 시 에러를 돌려주고,
/// 설정 파일의 사전은 실패해도 기본 사전으로 계속합니다.
fn build_segmenter(args: &Args, config: &SegConfig) -> Result<Segmenter, DictError> {
    match args.dict.as_deref() {
        Some(path) => {
            let mut segmenter =
                Segmenter::new().with_strategy(SegmentationStrategy::from_hmm_flag(config.use_hmm));
            segmenter.load_dictionary(path)?;
            Ok(segmenter)
        }
        None => Ok(Segmenter::from_config(config)),
    }
}

/// 한 줄 분할 결과를 구분자로 연결
fn render(segmenter: &Segmenter, line: &str, all: bool, separator: &str) -> String {
    let words = if all {
        segmenter.cut_all(line)
    } else {
        segmenter.cut_default(line)
    };
    words.join(separator)
}

fn main() {
    // 로깅 초기화 (기본 warn, RUST_LOG로 변경 가능)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = apply_args(&args, load_config());

    let segmenter = match build_segmenter(&args, &config) {
        Ok(segmenter) => segmenter,
        Err(e) => {
            eprintln!("사전 로드 실패: {}", e);
            process::exit(1);
        }
    };

    // 사전 로드에 성공한 설정만 저장
    if args.save_config {
        match save_config(&config) {
            Ok(path) => log::info!("설정 저장: {}", path.display()),
            Err(e) => {
                eprintln!("설정 저장 실패: {}", e);
                process::exit(1);
            }
        }
    }

    if args.stats {
        match serde_json::to_string_pretty(&segmenter.stats()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("통계 직렬화 실패: {}", e),
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.texts.is_empty() {
        for text in &args.texts {
            let line = render(&segmenter, text, args.all, &config.separator);
            if writeln!(out, "{}", line).is_err() {
                return;
            }
        }
        return;
    }

    // 통계/설정 저장만 요청한 경우 표준 입력을 기다리지 않음
    if args.stats || args.save_config {
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("입력 읽기 실패: {}", e);
                process::exit(1);
            }
        };
        let rendered = render(&segmenter, &line, args.all, &config.separator);
        if writeln!(out, "{}", rendered).is_err() {
            break;
        }
    }
}
