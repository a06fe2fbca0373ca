//! 대체 제목 생성 모듈
//!
//! 유사 제목이 발견되었을 때 사용자에게 보여줄 대체 제목을 만듭니다.
//!
//! 1. **동의어 치환**: 앞쪽 단어를 동의어 하나로 바꾼 변형
//! 2. **순서 섞기**: 단어 순서를 무작위로 섞은 변형
//!
//! 무작위 선택은 호출자가 넘긴 `rand::Rng`로만 이루어지므로
//! 시드를 고정하면 결과를 재현할 수 있습니다.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use title_guard::variation::{StaticThesaurus, VariationGenerator};
//!
//! let thesaurus = StaticThesaurus::new().with_entry("morning", ["dawn", "sunrise"]);
//! let generator = VariationGenerator::new(thesaurus);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let variations = generator.generate("Morning Star", &mut rng);
//! assert_eq!(variations.len(), 2); // 동의어 치환 1개 + 순서 섞기 1개
//! ```

mod generator;
mod thesaurus;

pub use generator::VariationGenerator;
pub use thesaurus::{NoThesaurus, StaticThesaurus, Thesaurus};
