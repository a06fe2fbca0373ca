//! 기본 금지어 목록

/// 제목에 단독 단어로 올 수 없는 일반/구조적 단어 (접두/접미어)
pub const DEFAULT_BOUNDARY_TERMS: &[&str] = &[
    "The", "India", "Samachar", "News", "Report", "Bulletin", "Daily", "Times",
];

/// 내용상 제목에 쓸 수 없는 단어
pub const DEFAULT_FORBIDDEN_TERMS: &[&str] = &[
    "Police", "Crime", "Corruption", "CBI", "CID", "Army", "Terrorism", "Violence",
    "Extremism", "Rebellion", "Insurgency", "Propaganda", "Espionage", "Sedition",
    "Revolution", "Narcotics", "Illegal", "Trafficking", "Scandal", "Bribery",
    "Fraud", "Hate", "Racism", "Discrimination", "Abuse", "Exploitation",
    "Pornography", "Obscenity", "Defamation", "Blasphemy",
];
