//! 제목 검증 시스템
//!
//! 새 제목이 기존 코퍼스와 충분히 다른지 판정합니다.
//!
//! # 개요
//!
//! 한 번의 검증은 다음 단계를 순서대로 거치며, 어느 단계에서든 결론이 나면 끝납니다:
//!
//! 1. **완전 일치**: 코퍼스에 같은 제목(대소문자 무시)이 있으면 거부
//! 2. **내용 금지어**: 금지어가 단어로 포함되면 거부
//! 3. **접두/접미 금지어**: "Daily", "News" 같은 단어가 포함되면 거부
//! 4. **유사도 계산**: 임계값을 넘는 유사 제목이 없으면 신뢰도 100으로 통과
//! 5. **신뢰도 계산**: `100 - 평균 유사도 * 100`, 유사 제목 상위 3개와 추천 제목 반환
//!
//! 유사 제목이나 금지어로 거부되는 것은 에러가 아니라 `is_valid == false`인 결과입니다.
//!
//! # 사용 예시
//!
//! ```
//! use std::sync::Arc;
//! use title_guard::corpus::CorpusIndex;
//! use title_guard::validation::TitleValidator;
//! use title_guard::config::ValidatorConfig;
//!
//! let corpus = Arc::new(CorpusIndex::build(["Morning Star", "Evening Post"]).unwrap());
//! let validator = TitleValidator::with_corpus(corpus, ValidatorConfig::default());
//!
//! let result = validator.validate("morning star").unwrap();
//! assert!(!result.is_valid);
//! assert_eq!(result.feedback, vec!["Exact match found"]);
//!
//! let result = validator.validate("Quiz Box").unwrap();
//! assert!(result.is_valid);
//! assert_eq!(result.confidence, 100.0);
//! ```

mod result;
mod validator;

pub use result::{
    similarity_feedback, Suggestion, ValidationResult, BOUNDARY_TERM_FEEDBACK,
    EXACT_MATCH_FEEDBACK, FORBIDDEN_TERM_FEEDBACK, NO_SIMILARITY_FEEDBACK,
};
pub use validator::{confidence_from_matches, TitleValidator};
