//! 유사도 계산 모듈
//!
//! 후보 제목과 코퍼스의 모든 제목을 비교합니다.
//!
//! - **어휘 유사도**: 일치 블록 비율 `2*M / (len(a) + len(b))`
//! - **음성 유사도**: Soundex 코드 간 정규화 편집 거리 `1 - d / max_len`
//! - **종합 점수**: 두 유사도의 평균 (0.0 ~ 1.0)
//!
//! # 사용 예시
//!
//! ```
//! use title_guard::corpus::CorpusIndex;
//! use title_guard::similarity::SimilarityScorer;
//!
//! let index = CorpusIndex::build(["Morning Star"]).unwrap();
//! let scorer = SimilarityScorer::new(0.35);
//!
//! let matches = scorer.score_all("Morning Stars", &index).unwrap();
//! assert_eq!(matches[0].title, "Morning Star");
//! assert!(matches[0].combined_score > 0.9);
//! ```

mod matcher;
mod scorer;

pub use matcher::{matching_characters, ratio};
pub use scorer::{phonetic_similarity, SimilarityMatch, SimilarityScorer};
