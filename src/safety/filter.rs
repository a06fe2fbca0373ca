//! 단어 단위 금지어 필터

use std::collections::HashSet;

use crate::config::ValidatorConfig;

use super::terms::{DEFAULT_BOUNDARY_TERMS, DEFAULT_FORBIDDEN_TERMS};

/// 공백 기준 단어 분리
pub fn tokens(title: &str) -> impl Iterator<Item = &str> {
    title.split_whitespace()
}

fn fold_terms<I, S>(terms: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// 접두/접미 금지어와 내용 금지어 검사기
///
/// 생성 후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct SafetyFilter {
    boundary_terms: HashSet<String>,
    forbidden_terms: HashSet<String>,
}

impl Default for SafetyFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDARY_TERMS, DEFAULT_FORBIDDEN_TERMS)
    }
}

impl SafetyFilter {
    /// 금지어 목록으로 필터 생성 (소문자로 정규화)
    pub fn new<B, F, S, T>(boundary_terms: B, forbidden_terms: F) -> Self
    where
        B: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            boundary_terms: fold_terms(boundary_terms),
            forbidden_terms: fold_terms(forbidden_terms),
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(&config.boundary_terms, &config.forbidden_terms)
    }

    /// 접두/접미 금지어가 단독 단어로 포함되어 있는지 검사
    pub fn has_disallowed_boundary_term(&self, candidate: &str) -> bool {
        contains_any(candidate, &self.boundary_terms)
    }

    /// 내용 금지어가 단독 단어로 포함되어 있는지 검사
    pub fn contains_forbidden_term(&self, candidate: &str) -> bool {
        contains_any(candidate, &self.forbidden_terms)
    }

    /// 두 검사 중 하나라도 걸리면 true
    pub fn is_blocked(&self, candidate: &str) -> bool {
        self.contains_forbidden_term(candidate) || self.has_disallowed_boundary_term(candidate)
    }
}

fn contains_any(candidate: &str, terms: &HashSet<String>) -> bool {
    if terms.is_empty() {
        return false;
    }
    tokens(candidate).any(|token| terms.contains(&token.to_lowercase()))
}
