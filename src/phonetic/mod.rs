//! 음성 부호화 모듈
//!
//! 제목을 발음 기준의 고정 길이 코드(American Soundex)로 변환합니다.
//! 철자는 다르지만 발음이 비슷한 제목("Smith Post" / "Smyth Post")을
//! 같은 코드로 모으는 데 사용됩니다.

mod soundex;

pub use soundex::{encode, SOUNDEX_LEN};
