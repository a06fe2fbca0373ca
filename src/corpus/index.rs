//! 코퍼스 인덱스

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, TitleError};
use crate::phonetic;

use super::loader::load_titles;

/// 코퍼스의 제목 하나
///
/// 인덱스 생성 시점에 만들어지며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    name: String,
    name_lower: String,
    phonetic_code: String,
}

impl TitleRecord {
    fn new(name: &str) -> Result<Self> {
        let name_lower = name.to_lowercase();
        let phonetic_code = phonetic::encode(&name_lower)?;
        Ok(Self {
            name: name.to_string(),
            name_lower,
            phonetic_code,
        })
    }

    /// 원본 제목
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 소문자 제목
    pub fn name_lower(&self) -> &str {
        &self.name_lower
    }

    /// Soundex 코드
    pub fn phonetic_code(&self) -> &str {
        &self.phonetic_code
    }
}

/// 읽기 전용 코퍼스 스냅샷
///
/// 입력 순서를 보존하며, 소문자 제목 집합으로 O(1) 완전 일치 검사를 제공합니다.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    records: Vec<TitleRecord>,
    lower_names: HashSet<String>,
}

impl CorpusIndex {
    /// 원본 제목 목록에서 인덱스 생성
    ///
    /// 제목 앞뒤 공백은 제거합니다.
    ///
    /// # Errors
    /// 비어 있거나 공백뿐인 제목이 있으면 `TitleError::InvalidInput`
    pub fn build<I, S>(raw_titles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut lower_names = HashSet::new();

        for (i, raw) in raw_titles.into_iter().enumerate() {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                return Err(TitleError::InvalidInput(format!(
                    "코퍼스 {}번째 제목이 비어 있습니다",
                    i + 1
                )));
            }
            let record = TitleRecord::new(name)?;
            lower_names.insert(record.name_lower.clone());
            records.push(record);
        }

        log::info!(
            "코퍼스 인덱스 생성: 제목 {}개 (고유 {}개)",
            records.len(),
            lower_names.len()
        );

        Ok(Self {
            records,
            lower_names,
        })
    }

    /// 코퍼스 파일에서 인덱스 생성 (형식은 `load_titles` 참고)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let titles = load_titles(path)?;
        Self::build(titles)
    }

    /// 소문자 후보 제목이 코퍼스에 그대로 있는지 확인
    pub fn contains_exact(&self, candidate_lower: &str) -> bool {
        self.lower_names.contains(candidate_lower)
    }

    /// 입력 순서대로 레코드 순회
    pub fn iter(&self) -> std::slice::Iter<'_, TitleRecord> {
        self.records.iter()
    }

    /// 위치로 레코드 조회
    pub fn get(&self, position: usize) -> Option<&TitleRecord> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a CorpusIndex {
    type Item = &'a TitleRecord;
    type IntoIter = std::slice::Iter<'a, TitleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
