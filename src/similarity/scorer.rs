//! 코퍼스 전체 유사도 스코어링

use serde::Serialize;

use crate::corpus::{CorpusIndex, TitleRecord};
use crate::error::Result;
use crate::phonetic;

use super::matcher::ratio;

/// 코퍼스 제목 하나와의 유사도
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatch {
    /// 코퍼스 원본 제목
    pub title: String,
    /// 어휘/음성 유사도 평균 (0.0 ~ 1.0)
    pub combined_score: f64,
    /// 일치 블록 비율
    pub lexical_score: f64,
    /// Soundex 편집 거리 유사도
    pub phonetic_score: f64,
    /// 코퍼스 내 위치 (동점 정렬 기준)
    pub position: usize,
}

/// 두 Soundex 코드의 정규화 편집 거리 유사도
///
/// `1 - levenshtein / max(len)`. 두 코드가 모두 비어 있으면 1.0
pub fn phonetic_similarity(code_a: &str, code_b: &str) -> f64 {
    strsim::normalized_levenshtein(code_a, code_b)
}

/// 유사도 스코어러
///
/// 종합 점수가 임계값을 **초과**하는 코퍼스 제목만 반환합니다.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    threshold: f64,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl SimilarityScorer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// 후보 제목을 코퍼스 전체와 비교
    ///
    /// 결과는 종합 점수 내림차순이며, 동점이면 코퍼스 입력 순서를 따릅니다.
    ///
    /// # Errors
    /// 후보 제목이 비어 있으면 `TitleError::InvalidInput`
    pub fn score_all(&self, candidate: &str, index: &CorpusIndex) -> Result<Vec<SimilarityMatch>> {
        let candidate_lower = candidate.to_lowercase();
        let candidate_code = phonetic::encode(&candidate_lower)?;

        let mut matches: Vec<SimilarityMatch> = index
            .iter()
            .enumerate()
            .map(|(position, record)| {
                score_record(&candidate_lower, &candidate_code, record, position)
            })
            .filter(|m| m.combined_score > self.threshold)
            .collect();

        // 안정 정렬이므로 동점은 코퍼스 순서 유지
        matches.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));

        log::debug!(
            "유사도 계산: '{}' -> 코퍼스 {}개 중 {}개가 임계값 {} 초과",
            candidate,
            index.len(),
            matches.len(),
            self.threshold
        );

        Ok(matches)
    }
}

fn score_record(
    candidate_lower: &str,
    candidate_code: &str,
    record: &TitleRecord,
    position: usize,
) -> SimilarityMatch {
    let lexical_score = ratio(candidate_lower, record.name_lower());
    let phonetic_score = phonetic_similarity(candidate_code, record.phonetic_code());

    SimilarityMatch {
        title: record.name().to_string(),
        combined_score: (lexical_score + phonetic_score) / 2.0,
        lexical_score,
        phonetic_score,
        position,
    }
}
