//! title-guard - 새 제목의 독창성 검증 CLI

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use title_guard::config::load_config;
use title_guard::variation::StaticThesaurus;
use title_guard::{CorpusIndex, Result, TitleValidator, ValidationResult};

/// 기존 제목 코퍼스와 비교해 새 제목을 검증합니다.
#[derive(Parser, Debug)]
#[command(name = "title-guard", version, about)]
struct Args {
    /// 기존 제목 코퍼스 (.json 배열, .csv, 또는 한 줄에 제목 하나)
    #[arg(short, long)]
    corpus: PathBuf,

    /// 설정 파일 (JSON, 없으면 기본값)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 동의어 사전 (JSON, 추천 제목 생성에 사용)
    #[arg(long)]
    thesaurus: Option<PathBuf>,

    /// 추천 제목 생성 난수 시드
    #[arg(long)]
    seed: Option<u64>,

    /// 결과를 JSON으로 출력
    #[arg(long)]
    json: bool,

    /// 검증할 제목
    #[arg(required = true)]
    title: Vec<String>,
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let outcome = run(&args, &mut io::stdout().lock());
    if let Err(e) = &outcome {
        eprintln!("오류: {}", e);
    }
    ExitCode::from(exit_status(&outcome))
}

/// 종료 코드: 유효 0, 무효 1, 오류 2
fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// 검증 실행 후 결과를 `out`에 출력, 유효 여부 반환
fn run(args: &Args, out: &mut impl Write) -> Result<bool> {
    let config = args
        .config
        .as_ref()
        .map(|path| load_config(path))
        .unwrap_or_default();
    let validity_threshold = config.validity_threshold;

    let corpus = Arc::new(CorpusIndex::load(&args.corpus)?);
    let thesaurus = load_thesaurus(args.thesaurus.as_ref());
    let validator = TitleValidator::with_corpus(corpus, config).thesaurus(thesaurus);

    let title = args.title.join(" ");
    let result = match args.seed {
        Some(seed) => validator.validate_with_rng(&title, &mut StdRng::seed_from_u64(seed))?,
        None => validator.validate(&title)?,
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        print_report(out, &title, &result, validity_threshold)?;
    }

    Ok(result.is_valid)
}

/// 동의어 사전 로드 (실패하면 동의어 없이 진행)
fn load_thesaurus(path: Option<&PathBuf>) -> StaticThesaurus {
    let Some(path) = path else {
        return StaticThesaurus::new();
    };
    StaticThesaurus::load(path).unwrap_or_else(|e| {
        log::warn!("동의어 사전 로드 실패, 동의어 없이 진행 ({}): {}", path.display(), e);
        StaticThesaurus::new()
    })
}

fn print_report(
    out: &mut impl Write,
    title: &str,
    result: &ValidationResult,
    validity_threshold: f64,
) -> io::Result<()> {
    writeln!(out, "Title: {}", title)?;
    writeln!(out)?;
    if result.is_valid {
        writeln!(out, "✅ Validation Passed")?;
    } else {
        writeln!(out, "❌ Validation Failed")?;
    }
    writeln!(out, "   Verification Probability: {:.1}%", result.confidence)?;

    if !result.feedback.is_empty() {
        writeln!(out)?;
        writeln!(out, "Similarity Analysis Report")?;
        for line in &result.feedback {
            writeln!(out, "  - {}", line)?;
        }
    }

    if let Some(suggestions) = result.suggestions.as_ref().filter(|s| !s.is_empty()) {
        writeln!(out)?;
        writeln!(out, "Recommended Title Suggestions")?;
        for suggestion in suggestions {
            let mark = if suggestion.confidence >= validity_threshold {
                "+"
            } else {
                "-"
            };
            writeln!(
                out,
                "  {} {} (Confidence: {:.1}%)",
                mark, suggestion.title, suggestion.confidence
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use title_guard::config::ValidatorConfig;
    use title_guard::{Suggestion, TitleError};

    /// 코퍼스 파일을 만들고 (임시 디렉터리, 인자) 반환
    fn args_with_corpus(titles: &str, extra: &[&str]) -> (tempfile::TempDir, Args) {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("titles.txt");
        std::fs::write(&corpus, titles).unwrap();

        let mut argv = vec!["title-guard", "--corpus", corpus.to_str().unwrap()];
        argv.extend_from_slice(extra);
        let args = Args::parse_from(argv);
        (dir, args)
    }

    fn run_to_string(args: &Args) -> (Result<bool>, String) {
        let mut out = Vec::new();
        let outcome = run(args, &mut out);
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_multi_word_title() {
        let args = Args::parse_from(["title-guard", "--corpus", "titles.txt", "Morning", "Star"]);
        assert_eq!(args.title.join(" "), "Morning Star");
        assert!(!args.json);
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_missing_thesaurus_falls_back() {
        let path = PathBuf::from("/nonexistent/thesaurus.json");
        assert!(load_thesaurus(Some(&path)).is_empty());
        assert!(load_thesaurus(None).is_empty());
    }

    #[test]
    fn test_default_config_without_flag() {
        let args = Args::parse_from(["title-guard", "-c", "titles.txt", "X"]);
        let config = args.config.as_ref().map(|p| load_config(p)).unwrap_or_default();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_run_near_duplicate_is_invalid() {
        let (_dir, args) = args_with_corpus("Morning Star\n", &["--seed", "1", "Morning", "Stars"]);
        let (outcome, report) = run_to_string(&args);

        assert!(matches!(outcome, Ok(false)));
        assert_eq!(exit_status(&outcome), 1);
        assert!(report.contains("Title: Morning Stars"));
        assert!(report.contains("❌ Validation Failed"));
        assert!(report.contains("Verification Probability: 2.0%"));
        assert!(report.contains("Similarity Analysis Report"));
        assert!(report.contains("  - Similar to 'Morning Star' (score: 98.0%)"));
    }

    #[test]
    fn test_run_dissimilar_is_valid() {
        let (_dir, args) = args_with_corpus("Morning Star\n", &["Quiz", "Box"]);
        let (outcome, report) = run_to_string(&args);

        assert!(matches!(outcome, Ok(true)));
        assert_eq!(exit_status(&outcome), 0);
        assert!(report.contains("✅ Validation Passed"));
        assert!(report.contains("Verification Probability: 100.0%"));
        assert!(report.contains("  - No significant similarities found"));
        assert!(!report.contains("Recommended Title Suggestions"));
    }

    #[test]
    fn test_run_json_output() {
        let (_dir, args) = args_with_corpus("Morning Star\n", &["--json", "morning star"]);
        let (outcome, report) = run_to_string(&args);

        assert!(matches!(outcome, Ok(false)));
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["is_valid"], false);
        assert_eq!(value["confidence"], 0.0);
        assert_eq!(value["feedback"][0], "Exact match found");
    }

    #[test]
    fn test_run_missing_corpus_is_error() {
        let args = Args::parse_from(["title-guard", "-c", "/nonexistent/titles.txt", "Quiz Box"]);
        let (outcome, report) = run_to_string(&args);

        assert!(matches!(outcome, Err(TitleError::Io(_))));
        assert_eq!(exit_status(&outcome), 2);
        assert!(report.is_empty());
    }

    #[test]
    fn test_report_marks_suggestions() {
        let result = ValidationResult {
            is_valid: false,
            feedback: vec!["Similar to 'Morning Star' (score: 51.1%)".to_string()],
            confidence: 48.9,
            suggestions: Some(vec![
                Suggestion { title: "Dusk Sun".to_string(), confidence: 100.0 },
                Suggestion { title: "Sun Evening".to_string(), confidence: 40.0 },
            ]),
        };

        let mut out = Vec::new();
        print_report(&mut out, "Evening Sun", &result, 50.0).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("Verification Probability: 48.9%"));
        assert!(report.contains("Recommended Title Suggestions"));
        assert!(report.contains("  + Dusk Sun (Confidence: 100.0%)"));
        assert!(report.contains("  - Sun Evening (Confidence: 40.0%)"));
    }
}
