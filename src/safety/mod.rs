//! 금지어 검사 모듈
//!
//! 공백으로 나눈 단어 단위로만 비교합니다 (부분 문자열 검사 아님).
//! 두 금지어 집합 모두 소문자로 정규화해 대소문자를 구분하지 않습니다.

mod filter;
mod terms;

pub use filter::{tokens, SafetyFilter};
pub use terms::{DEFAULT_BOUNDARY_TERMS, DEFAULT_FORBIDDEN_TERMS};
