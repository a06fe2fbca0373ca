//! 동의어 사전
//!
//! JSON 형식:
//! ```json
//! { "morning": ["dawn", "sunrise"], "star": ["celebrity", "headliner"] }
//! ```
//! 항목의 `_`는 공백으로 읽습니다 (`"day_break"` -> `"day break"`).

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;

/// 단어의 동의어를 제공하는 협력자
pub trait Thesaurus {
    /// 단어의 동의어 목록 (없으면 빈 목록)
    fn synonyms(&self, word: &str) -> Vec<String>;
}

/// 동의어를 제공하지 않는 사전 (순서 섞기 변형만 생성됨)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThesaurus;

impl Thesaurus for NoThesaurus {
    fn synonyms(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}

/// 메모리 내 동의어 사전
///
/// 키는 소문자로 저장하고, 조회도 대소문자와 무관합니다.
#[derive(Debug, Clone, Default)]
pub struct StaticThesaurus {
    entries: HashMap<String, Vec<String>>,
}

impl StaticThesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목 추가 (같은 단어면 교체)
    pub fn with_entry<I, S>(mut self, word: &str, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(word, synonyms);
        self
    }

    pub fn insert<I, S>(&mut self, word: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = word.trim().to_lowercase();
        let mut cleaned: Vec<String> = Vec::new();
        for synonym in synonyms {
            let synonym = synonym.as_ref().trim().replace('_', " ");
            // 자기 자신과 중복은 제외
            if synonym.is_empty()
                || synonym.to_lowercase() == key
                || cleaned.contains(&synonym)
            {
                continue;
            }
            cleaned.push(synonym);
        }
        self.entries.insert(key, cleaned);
    }

    /// JSON 파일에서 사전 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let raw: HashMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Ok(Self::from_map(raw))
    }

    /// JSON 문자열에서 사전 로드
    pub fn from_json(json_str: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json_str)?;
        Ok(Self::from_map(raw))
    }

    fn from_map(raw: HashMap<String, Vec<String>>) -> Self {
        let mut thesaurus = Self::new();
        for (word, synonyms) in raw {
            thesaurus.insert(&word, synonyms);
        }
        log::debug!("동의어 사전 로드: 단어 {}개", thesaurus.len());
        thesaurus
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Thesaurus for StaticThesaurus {
    fn synonyms(&self, word: &str) -> Vec<String> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}
