//! 제목 검증기
//!
//! 완전 일치 -> 금지어 -> 유사도 -> 신뢰도 순서로 판정합니다.

use std::sync::Arc;

use rand::Rng;

use crate::config::ValidatorConfig;
use crate::corpus::CorpusIndex;
use crate::error::{Result, TitleError};
use crate::safety::SafetyFilter;
use crate::similarity::{SimilarityMatch, SimilarityScorer};
use crate::variation::{NoThesaurus, Thesaurus, VariationGenerator};

use super::result::{
    similarity_feedback, Suggestion, ValidationResult, BOUNDARY_TERM_FEEDBACK,
    EXACT_MATCH_FEEDBACK, FORBIDDEN_TERM_FEEDBACK,
};

/// 유사 제목 목록에서 신뢰도 계산
///
/// `clamp(100 - 평균 종합 점수 * 100, 0, 100)`. 목록이 비어 있으면 100.
pub fn confidence_from_matches(matches: &[SimilarityMatch]) -> f64 {
    if matches.is_empty() {
        return 100.0;
    }
    let total: f64 = matches.iter().map(|m| m.combined_score).sum();
    let average = total / matches.len() as f64;
    (100.0 - average * 100.0).clamp(0.0, 100.0)
}

/// 제목 검증기
///
/// 코퍼스는 `Arc`로 공유되며 검증기는 상태를 바꾸지 않으므로
/// 하나의 검증기를 여러 스레드에서 동시에 사용할 수 있습니다.
#[derive(Debug, Clone)]
pub struct TitleValidator<T = NoThesaurus> {
    /// 코퍼스 (없으면 검증 시 `CorpusUnavailable`)
    corpus: Option<Arc<CorpusIndex>>,
    config: ValidatorConfig,
    filter: SafetyFilter,
    scorer: SimilarityScorer,
    generator: VariationGenerator<T>,
}

impl Default for TitleValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleValidator {
    /// 기본 설정으로 검증기 생성 (코퍼스 없음)
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// 설정만 지정하여 검증기 생성 (코퍼스 없음)
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self::build(None, config, NoThesaurus)
    }

    /// 코퍼스와 설정을 지정하여 검증기 생성
    pub fn with_corpus(corpus: Arc<CorpusIndex>, config: ValidatorConfig) -> Self {
        Self::build(Some(corpus), config, NoThesaurus)
    }
}

impl<T: Thesaurus> TitleValidator<T> {
    fn build(corpus: Option<Arc<CorpusIndex>>, config: ValidatorConfig, thesaurus: T) -> Self {
        Self {
            corpus,
            filter: SafetyFilter::from_config(&config),
            scorer: SimilarityScorer::new(config.similarity_threshold),
            generator: VariationGenerator::with_config(thesaurus, &config),
            config,
        }
    }

    /// 동의어 사전 지정 (추천 제목 생성에 사용)
    pub fn thesaurus<U: Thesaurus>(self, thesaurus: U) -> TitleValidator<U> {
        TitleValidator::build(self.corpus, self.config, thesaurus)
    }

    /// 코퍼스 교체
    pub fn corpus(mut self, corpus: Arc<CorpusIndex>) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// 코퍼스가 연결되어 있는지 확인
    pub fn has_corpus(&self) -> bool {
        self.corpus.is_some()
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// 후보 제목 검증 (스레드 로컬 난수 사용)
    ///
    /// # Errors
    /// - 빈 제목: `TitleError::InvalidInput`
    /// - 코퍼스 없음: `TitleError::CorpusUnavailable`
    pub fn validate(&self, candidate: &str) -> Result<ValidationResult> {
        self.validate_with_rng(candidate, &mut rand::thread_rng())
    }

    /// 난수 생성기를 지정하여 후보 제목 검증
    ///
    /// 난수는 추천 제목 생성에만 쓰이므로 판정과 신뢰도는 난수와 무관합니다.
    pub fn validate_with_rng<R: Rng + ?Sized>(
        &self,
        candidate: &str,
        rng: &mut R,
    ) -> Result<ValidationResult> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Err(TitleError::InvalidInput("제목이 비어 있습니다".into()));
        }
        let corpus = self.corpus.as_deref().ok_or(TitleError::CorpusUnavailable)?;
        let candidate_lower = candidate.to_lowercase();

        // 1단계: 완전 일치
        if corpus.contains_exact(&candidate_lower) {
            log::debug!("'{}': 완전 일치", candidate);
            return Ok(ValidationResult::rejected(EXACT_MATCH_FEEDBACK));
        }

        // 2단계: 내용 금지어
        if self.filter.contains_forbidden_term(candidate) {
            log::debug!("'{}': 금지어 포함", candidate);
            return Ok(ValidationResult::rejected(FORBIDDEN_TERM_FEEDBACK));
        }

        // 3단계: 접두/접미 금지어
        if self.filter.has_disallowed_boundary_term(candidate) {
            log::debug!("'{}': 접두/접미 금지어 포함", candidate);
            return Ok(ValidationResult::rejected(BOUNDARY_TERM_FEEDBACK));
        }

        // 4단계: 유사도 계산
        let matches = self.scorer.score_all(candidate, corpus)?;
        if matches.is_empty() {
            log::debug!("'{}': 유사 제목 없음", candidate);
            return Ok(ValidationResult::original());
        }

        // 5단계: 신뢰도 계산
        let confidence = confidence_from_matches(&matches);
        // 유사 제목이 있으면 피드백은 최소 한 줄
        let feedback = matches
            .iter()
            .take(self.config.feedback_limit.max(1))
            .map(|m| similarity_feedback(&m.title, m.combined_score))
            .collect();

        let variations = self.generator.generate(candidate, rng);
        let suggestions = self.rank_suggestions(self.suggest_valid(variations))?;

        let is_valid = confidence >= self.config.validity_threshold;
        log::debug!(
            "'{}': 유사 제목 {}개, 신뢰도 {:.1}, 유효 {}",
            candidate,
            matches.len(),
            confidence,
            is_valid
        );

        Ok(ValidationResult {
            is_valid,
            feedback,
            confidence,
            suggestions: Some(suggestions),
        })
    }

    /// 변형 제목 중 코퍼스에 없고 금지어가 없는 것만 남김
    ///
    /// 입력 순서를 유지하며 최대 `max_suggestions`개.
    /// 코퍼스가 없으면 완전 일치 검사는 생략합니다.
    pub fn suggest_valid(&self, variations: Vec<String>) -> Vec<String> {
        variations
            .into_iter()
            .filter(|variation| {
                let lower = variation.to_lowercase();
                let duplicate = self
                    .corpus
                    .as_deref()
                    .is_some_and(|corpus| corpus.contains_exact(&lower));
                !duplicate && !self.filter.is_blocked(&lower)
            })
            .take(self.config.max_suggestions)
            .collect()
    }

    /// 추천 제목에 신뢰도 부여
    ///
    /// 기본은 순위 기반 고정값 `100 - 10 * 순위`이며 추천 제목 자체를 다시 검증한 값이 아닙니다.
    /// `rescore_suggestions`가 켜져 있으면 추천 제목의 실제 유사도로 다시 계산합니다.
    fn rank_suggestions(&self, titles: Vec<String>) -> Result<Vec<Suggestion>> {
        titles
            .into_iter()
            .enumerate()
            .map(|(rank, title)| {
                let confidence = match self.corpus.as_deref() {
                    Some(corpus) if self.config.rescore_suggestions => {
                        confidence_from_matches(&self.scorer.score_all(&title, corpus)?)
                    }
                    _ => (100.0 - 10.0 * rank as f64).max(0.0),
                };
                Ok(Suggestion { title, confidence })
            })
            .collect()
    }
}
