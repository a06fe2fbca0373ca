//! 검증기 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::safety::{DEFAULT_BOUNDARY_TERMS, DEFAULT_FORBIDDEN_TERMS};

/// 종합 점수가 이 값을 넘는 코퍼스 제목만 유사 제목으로 취급
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.35;
/// 신뢰도(0~100)가 이 값 이상이면 유효
pub const DEFAULT_VALIDITY_THRESHOLD: f64 = 50.0;

/// 제목 검증기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidatorConfig {
    /// 유사 제목 판정 임계값 (0.0 ~ 1.0, 초과 시 유사)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// 유효 판정 신뢰도 임계값 (0 ~ 100, 이상이면 유효)
    #[serde(default = "default_validity_threshold")]
    pub validity_threshold: f64,
    /// 생성할 최대 변형 제목 수
    #[serde(default = "default_max_variations")]
    pub max_variations: usize,
    /// 반환할 최대 추천 제목 수
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// 단어당 조회할 최대 동의어 수
    #[serde(default = "default_max_synonyms")]
    pub max_synonyms: usize,
    /// 동의어 치환을 시도할 앞쪽 단어 수
    #[serde(default = "default_synonym_positions")]
    pub synonym_positions: usize,
    /// 피드백에 표시할 최대 유사 제목 수
    #[serde(default = "default_feedback_limit")]
    pub feedback_limit: usize,
    /// 추천 제목 신뢰도를 실제 유사도로 다시 계산할지 여부
    /// false면 순위 기반 값(100, 90, 80, ...)
    #[serde(default)]
    pub rescore_suggestions: bool,
    /// 제목 어디에도 단독 단어로 올 수 없는 단어 (접두/접미어)
    #[serde(default = "default_boundary_terms")]
    pub boundary_terms: Vec<String>,
    /// 내용상 금지된 단어
    #[serde(default = "default_forbidden_terms")]
    pub forbidden_terms: Vec<String>,
}

fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

fn default_validity_threshold() -> f64 {
    DEFAULT_VALIDITY_THRESHOLD
}

fn default_max_variations() -> usize {
    5
}

fn default_max_suggestions() -> usize {
    3
}

fn default_max_synonyms() -> usize {
    3
}

fn default_synonym_positions() -> usize {
    3
}

fn default_feedback_limit() -> usize {
    3
}

fn default_boundary_terms() -> Vec<String> {
    DEFAULT_BOUNDARY_TERMS.iter().map(|s| s.to_string()).collect()
}

fn default_forbidden_terms() -> Vec<String> {
    DEFAULT_FORBIDDEN_TERMS.iter().map(|s| s.to_string()).collect()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            validity_threshold: default_validity_threshold(),
            max_variations: default_max_variations(),
            max_suggestions: default_max_suggestions(),
            max_synonyms: default_max_synonyms(),
            synonym_positions: default_synonym_positions(),
            feedback_limit: default_feedback_limit(),
            rescore_suggestions: false,
            boundary_terms: default_boundary_terms(),
            forbidden_terms: default_forbidden_terms(),
        }
    }
}

impl ValidatorConfig {
    /// 기본 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 유사 제목 임계값 설정
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// 유효 판정 임계값 설정
    pub fn with_validity_threshold(mut self, threshold: f64) -> Self {
        self.validity_threshold = threshold;
        self
    }

    pub fn with_max_variations(mut self, max: usize) -> Self {
        self.max_variations = max;
        self
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// 추천 제목 신뢰도 재계산 여부 설정
    pub fn with_rescore_suggestions(mut self, rescore: bool) -> Self {
        self.rescore_suggestions = rescore;
        self
    }

    /// 임계값을 유효 범위로 맞춘 설정
    ///
    /// 유사 임계값은 0.0 ~ 1.0, 유효 임계값은 0 ~ 100
    pub fn sanitized(mut self) -> Self {
        self.similarity_threshold = clamp_threshold(
            "similarity_threshold",
            self.similarity_threshold,
            0.0,
            1.0,
            DEFAULT_SIMILARITY_THRESHOLD,
        );
        self.validity_threshold = clamp_threshold(
            "validity_threshold",
            self.validity_threshold,
            0.0,
            100.0,
            DEFAULT_VALIDITY_THRESHOLD,
        );
        self
    }

    /// 접두/접미 금지어 교체
    pub fn with_boundary_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boundary_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// 금지어 교체
    pub fn with_forbidden_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_terms = terms.into_iter().map(Into::into).collect();
        self
    }
}

/// 범위를 벗어난 임계값 보정
///
/// 유한하지 않은 값은 기본값으로, 범위 밖의 값은 경계값으로 맞춥니다.
fn clamp_threshold(name: &str, value: f64, min: f64, max: f64, default: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("{} 값이 올바르지 않아 기본값 {} 사용: {}", name, default, value);
        return default;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!(
            "{} 값 {}이(가) 범위({} ~ {})를 벗어나 {}(으)로 조정",
            name,
            value,
            min,
            max,
            clamped
        );
    }
    clamped
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
///
/// 임계값은 유효 범위로 조정합니다.
pub fn load_config(path: impl AsRef<Path>) -> ValidatorConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<ValidatorConfig>(&content) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
                ValidatorConfig::default()
            }
        },
        Err(e) => {
            log::warn!("설정 파일 읽기 실패, 기본값 사용 ({}): {}", path.display(), e);
            ValidatorConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(path: impl AsRef<Path>, config: &ValidatorConfig) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert!((config.similarity_threshold - 0.35).abs() < f64::EPSILON);
        assert!((config.validity_threshold - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.max_variations, 5);
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.feedback_limit, 3);
        assert!(!config.rescore_suggestions);
        assert!(config.boundary_terms.iter().any(|t| t == "Daily"));
        assert!(config.forbidden_terms.iter().any(|t| t == "Police"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ValidatorConfig::new()
            .with_similarity_threshold(0.5)
            .with_validity_threshold(70.0)
            .with_max_suggestions(1)
            .with_boundary_terms(["Weekly"])
            .with_forbidden_terms(Vec::<String>::new());

        assert!((config.similarity_threshold - 0.5).abs() < f64::EPSILON);
        assert!((config.validity_threshold - 70.0).abs() < f64::EPSILON);
        assert_eq!(config.max_suggestions, 1);
        assert_eq!(config.boundary_terms, vec!["Weekly"]);
        assert!(config.forbidden_terms.is_empty());
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 일부 필드만 있는 설정 파일은 나머지를 기본값으로 채움
        let json = r#"{"similarity_threshold": 0.5}"#;
        let config: ValidatorConfig = serde_json::from_str(json).unwrap();
        assert!((config.similarity_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.max_variations, 5);
        assert_eq!(config.boundary_terms, default_boundary_terms());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = ValidatorConfig::new().with_validity_threshold(65.0);
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn test_load_clamps_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"similarity_threshold": -0.5, "validity_threshold": 150, "max_suggestions": 2}"#,
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.similarity_threshold, 0.0);
        assert_eq!(config.validity_threshold, 100.0);
        assert_eq!(config.max_suggestions, 2);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let config = ValidatorConfig::new()
            .with_similarity_threshold(0.6)
            .with_validity_threshold(75.0);
        assert_eq!(config.clone().sanitized(), config);

        let config = ValidatorConfig::new()
            .with_similarity_threshold(f64::NAN)
            .with_validity_threshold(1.5)
            .sanitized();
        assert_eq!(config.similarity_threshold, DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(config.validity_threshold, 1.5);
    }

    #[test]
    fn test_load_fallback() {
        assert_eq!(
            load_config("/nonexistent/config.json"),
            ValidatorConfig::default()
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path), ValidatorConfig::default());
    }
}
