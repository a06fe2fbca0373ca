//! 변형 제목 생성기

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ValidatorConfig;
use crate::safety::tokens;

use super::thesaurus::Thesaurus;

/// 동의어 치환과 순서 섞기로 변형 제목을 만드는 생성기
#[derive(Debug, Clone)]
pub struct VariationGenerator<T> {
    thesaurus: T,
    /// 최대 변형 수
    max_variations: usize,
    /// 단어당 후보 동의어 수
    max_synonyms: usize,
    /// 동의어 치환을 시도할 앞쪽 단어 수
    synonym_positions: usize,
}

impl<T: Thesaurus> VariationGenerator<T> {
    /// 기본 한도(변형 5개, 동의어 3개, 앞쪽 단어 3개)로 생성
    pub fn new(thesaurus: T) -> Self {
        Self::with_config(thesaurus, &ValidatorConfig::default())
    }

    pub fn with_config(thesaurus: T, config: &ValidatorConfig) -> Self {
        Self {
            thesaurus,
            max_variations: config.max_variations,
            max_synonyms: config.max_synonyms,
            synonym_positions: config.synonym_positions,
        }
    }

    /// 변형 제목 목록 생성 (최대 `max_variations`개)
    ///
    /// 순서: 앞쪽 단어별 동의어 치환 변형, 그다음 순서 섞기 변형 하나.
    /// 섞은 결과가 원래 순서와 같을 수도 있습니다.
    pub fn generate<R: Rng + ?Sized>(&self, candidate: &str, rng: &mut R) -> Vec<String> {
        let words: Vec<&str> = tokens(candidate).collect();
        let mut variations = Vec::new();

        for (i, word) in words.iter().enumerate().take(self.synonym_positions) {
            let mut synonyms = self.thesaurus.synonyms(word);
            synonyms.truncate(self.max_synonyms);

            if let Some(synonym) = synonyms.choose(rng) {
                let mut replaced: Vec<String> = words.iter().map(|w| w.to_string()).collect();
                replaced[i] = synonym.clone();
                variations.push(replaced.join(" "));
            }
        }

        if words.len() > 1 {
            let mut shuffled = words.clone();
            shuffled.shuffle(rng);
            variations.push(shuffled.join(" "));
        }

        variations.truncate(self.max_variations);
        variations
    }
}
