//! 제목 검증 엔진 에러 타입
//!
//! 검증 실패(유사 제목, 금지어 등)는 에러가 아니라 `ValidationResult`로 반환됩니다.
//! 여기의 에러는 잘못된 입력이나 준비되지 않은 코퍼스에만 사용합니다.

/// 제목 검증 엔진 에러
#[derive(Debug)]
pub enum TitleError {
    /// 빈 후보 제목, 빈 코퍼스 레코드 등 잘못된 입력
    InvalidInput(String),
    /// 코퍼스가 로드되지 않은 상태에서 검증 시도
    CorpusUnavailable,
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(String),
    /// 파일 형식 오류
    Format(String),
}

impl std::fmt::Display for TitleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleError::InvalidInput(s) => write!(f, "잘못된 입력: {}", s),
            TitleError::CorpusUnavailable => write!(f, "코퍼스가 로드되지 않았습니다"),
            TitleError::Io(e) => write!(f, "파일 입출력 오류: {}", e),
            TitleError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            TitleError::Format(s) => write!(f, "파일 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for TitleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TitleError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TitleError {
    fn from(e: std::io::Error) -> Self {
        TitleError::Io(e)
    }
}

impl From<serde_json::Error> for TitleError {
    fn from(e: serde_json::Error) -> Self {
        TitleError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TitleError>;
