//! 코퍼스 파일 로드
//!
//! 지원 형식 (확장자로 구분):
//! - `.json`: 문자열 배열 `["Title A", "Title B"]`
//! - `.csv`: 헤더 포함. `Title Name` 열, 없으면 첫 번째 열 사용
//! - 그 외: 한 줄에 제목 하나 (빈 줄은 무시)

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::error::{Result, TitleError};

/// CSV 코퍼스에서 제목을 담는 열 이름
pub const TITLE_COLUMN: &str = "Title Name";

/// 코퍼스 파일에서 원본 제목 목록 로드
///
/// 빈 제목 검사는 `CorpusIndex::build`가 담당합니다.
pub fn load_titles(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let titles = match extension.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        _ => load_lines(path)?,
    };

    log::debug!("코퍼스 파일 로드: {} ({}개)", path.display(), titles.len());
    Ok(titles)
}

fn load_json(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let titles: Vec<String> = serde_json::from_reader(reader)?;
    Ok(titles)
}

/// CSV 오류 변환 (입출력 오류는 다른 형식과 같이 `TitleError::Io`)
fn csv_error(err: csv::Error, context: impl FnOnce() -> String) -> TitleError {
    let message = format!("{}: {}", context(), err);
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => TitleError::Io(io_err),
        _ => TitleError::Format(message),
    }
}

fn load_csv(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| csv_error(e, || format!("CSV 열기 실패 {}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| csv_error(e, || "CSV 헤더 읽기 실패".to_string()))?
        .clone();
    let column = headers
        .iter()
        .position(|h| h.trim() == TITLE_COLUMN)
        .unwrap_or(0);

    let mut titles = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| csv_error(e, || format!("CSV {}번째 행 읽기 실패", idx + 1)))?;
        let title = row.get(column).ok_or_else(|| {
            TitleError::Format(format!("CSV {}번째 행에 제목 열이 없습니다", idx + 1))
        })?;
        titles.push(title.to_string());
    }

    Ok(titles)
}

fn load_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "titles.json", r#"["Morning Star", "Evening Post"]"#);
        assert_eq!(load_titles(&path).unwrap(), vec!["Morning Star", "Evening Post"]);
    }

    #[test]
    fn test_load_csv_title_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "titles.csv",
            "Register No,Title Name\n1,Morning Star\n2,\"Sun, Moon and Stars\"\n",
        );
        assert_eq!(
            load_titles(&path).unwrap(),
            vec!["Morning Star", "Sun, Moon and Stars"]
        );
    }

    #[test]
    fn test_load_csv_first_column_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "titles.CSV", "title,lang\nHindi Herald,hi\n");
        assert_eq!(load_titles(&path).unwrap(), vec!["Hindi Herald"]);
    }

    #[test]
    fn test_load_plain_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "titles.txt", "Morning Star\n\n  \nEvening Post\n");
        assert_eq!(load_titles(&path).unwrap(), vec!["Morning Star", "Evening Post"]);
    }

    #[test]
    fn test_missing_file() {
        // 형식과 무관하게 같은 오류 종류
        for path in [
            "/nonexistent/titles.txt",
            "/nonexistent/titles.json",
            "/nonexistent/titles.csv",
        ] {
            assert!(matches!(load_titles(path), Err(TitleError::Io(_))), "{}", path);
        }
    }

    #[test]
    fn test_ragged_csv_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "titles.csv", "Title Name,Language\nMorning Star\n");
        assert!(matches!(load_titles(&path), Err(TitleError::Format(_))));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "titles.json", r#"{"not": "an array"}"#);
        assert!(matches!(load_titles(&path), Err(TitleError::Parse(_))));
    }
}
