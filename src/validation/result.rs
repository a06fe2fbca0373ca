//! 검증 결과

use serde::Serialize;

/// 코퍼스에 같은 제목이 있음
pub const EXACT_MATCH_FEEDBACK: &str = "Exact match found";
/// 내용 금지어 포함
pub const FORBIDDEN_TERM_FEEDBACK: &str = "Contains disallowed words";
/// 접두/접미 금지어 포함
pub const BOUNDARY_TERM_FEEDBACK: &str = "Contains disallowed prefixes/suffixes";
/// 임계값을 넘는 유사 제목 없음
pub const NO_SIMILARITY_FEEDBACK: &str = "No significant similarities found";

/// 추천 제목
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub title: String,
    /// 신뢰도 (0 ~ 100)
    pub confidence: f64,
}

/// 검증 결과
///
/// 유효하지 않으면 `feedback`은 항상 하나 이상의 사유를 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// 최종 판정
    pub is_valid: bool,
    /// 판정 사유 또는 유사 제목 목록
    pub feedback: Vec<String>,
    /// 독창성 신뢰도 (0 ~ 100, 높을수록 기존 제목과 다름)
    pub confidence: f64,
    /// 추천 제목 (유사 제목이 발견된 경우에만)
    pub suggestions: Option<Vec<Suggestion>>,
}

impl ValidationResult {
    /// 즉시 거부 (완전 일치, 금지어)
    pub(crate) fn rejected(reason: &str) -> Self {
        Self {
            is_valid: false,
            feedback: vec![reason.to_string()],
            confidence: 0.0,
            suggestions: None,
        }
    }

    /// 유사 제목 없음
    pub(crate) fn original() -> Self {
        Self {
            is_valid: true,
            feedback: vec![NO_SIMILARITY_FEEDBACK.to_string()],
            confidence: 100.0,
            suggestions: None,
        }
    }
}

/// 유사 제목 피드백 한 줄
///
/// `Similar to '<제목>' (score: <점수*100, 소수 첫째 자리>%)`
pub fn similarity_feedback(title: &str, score: f64) -> String {
    format!("Similar to '{}' (score: {:.1}%)", title, score * 100.0)
}
