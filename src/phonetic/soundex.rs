//! American Soundex 부호화
//!
//! 첫 글자는 대문자로 유지하고 나머지 자음을 6개 소리 그룹 숫자로 바꿉니다.
//! 결과는 항상 4글자 (첫 글자 + 숫자 3개)입니다.

use crate::error::{Result, TitleError};

/// Soundex 코드 길이
pub const SOUNDEX_LEN: usize = 4;

/// 자음의 소리 그룹 숫자
///
/// 모음, y, 공백, 숫자 등은 None
fn sound_class(c: char) -> Option<char> {
    match c.to_ascii_lowercase() {
        'b' | 'f' | 'p' | 'v' => Some('1'),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some('2'),
        'd' | 't' => Some('3'),
        'l' => Some('4'),
        'm' | 'n' => Some('5'),
        'r' => Some('6'),
        _ => None,
    }
}

/// h/w는 같은 그룹 자음 사이에 끼어도 연속으로 취급
fn is_transparent(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'h' | 'w')
}

/// 단어(또는 제목 전체)를 Soundex 코드로 변환
///
/// 대소문자와 무관하게 같은 코드를 반환합니다.
///
/// # Errors
/// 빈 문자열이면 `TitleError::InvalidInput`
///
/// # Examples
/// ```
/// use title_guard::phonetic::encode;
///
/// assert_eq!(encode("Robert").unwrap(), "R163");
/// assert_eq!(encode("rupert").unwrap(), "R163");
/// assert_eq!(encode("Tymczak").unwrap(), "T522");
/// ```
pub fn encode(word: &str) -> Result<String> {
    let mut chars = word.chars();
    let first = chars
        .next()
        .ok_or_else(|| TitleError::InvalidInput("빈 문자열은 부호화할 수 없습니다".into()))?;

    let mut code = String::with_capacity(SOUNDEX_LEN);
    // 'ß' 처럼 대문자가 여러 글자로 풀리는 경우에도 길이를 유지
    code.extend(first.to_uppercase().take(1));
    let mut digits = 0;
    // 첫 글자와 같은 그룹의 자음이 바로 이어지면 숫자를 추가하지 않음
    let mut last = sound_class(first);

    for c in chars {
        if digits == SOUNDEX_LEN - 1 {
            break;
        }
        match sound_class(c) {
            Some(class) => {
                if Some(class) != last {
                    code.push(class);
                    digits += 1;
                }
                last = Some(class);
            }
            None => {
                if !is_transparent(c) {
                    last = None;
                }
            }
        }
    }

    for _ in digits..SOUNDEX_LEN - 1 {
        code.push('0');
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_codes() {
        assert_eq!(encode("Robert").unwrap(), "R163");
        assert_eq!(encode("Rupert").unwrap(), "R163");
        assert_eq!(encode("Rubin").unwrap(), "R150");
        assert_eq!(encode("Tymczak").unwrap(), "T522");
        assert_eq!(encode("Pfister").unwrap(), "P236");
        assert_eq!(encode("Lee").unwrap(), "L000");
    }

    #[test]
    fn test_h_and_w_do_not_split_runs() {
        // s-h-c: h를 사이에 둔 같은 그룹(2)은 하나로 합쳐짐
        assert_eq!(encode("Ashcraft").unwrap(), "A261");
        assert_eq!(encode("Ashcroft").unwrap(), "A261");
    }

    #[test]
    fn test_vowels_split_runs() {
        // c-a-k: 모음 사이의 같은 그룹은 각각 숫자로
        assert_eq!(encode("Cacak").unwrap(), "C220");
    }

    #[test]
    fn test_case_invariant() {
        for word in ["Morning Star", "DAILY HERALD", "evening sun"] {
            assert_eq!(
                encode(word).unwrap(),
                encode(&word.to_lowercase()).unwrap(),
                "'{}' 코드가 대소문자에 따라 달라짐",
                word
            );
        }
    }

    #[test]
    fn test_titles_with_spaces() {
        // 모음이 연속을 끊으므로 n-i-n은 숫자 두 개
        assert_eq!(encode("morning star").unwrap(), "M655");
        // 공백도 연속을 끊음
        assert_eq!(encode("ab bc").unwrap(), "A112");
        assert_eq!(encode("a").unwrap(), "A000");
    }

    #[test]
    fn test_fixed_length() {
        for word in ["x", "ab", "Supercalifragilistic", "the daily bugle"] {
            assert_eq!(encode(word).unwrap().chars().count(), SOUNDEX_LEN);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(encode("Herald").unwrap(), encode("Herald").unwrap());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(encode(""), Err(TitleError::InvalidInput(_))));
    }
}
