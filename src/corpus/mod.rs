//! 기존 제목 코퍼스
//!
//! 참조 제목 목록을 한 번 읽어 소문자 형태와 Soundex 코드를 미리 계산해 둡니다.
//! 만들어진 뒤에는 변경되지 않으므로 `Arc`로 여러 검증기/스레드가 잠금 없이 공유합니다.

mod index;
mod loader;

pub use index::{CorpusIndex, TitleRecord};
pub use loader::{load_titles, TITLE_COLUMN};
