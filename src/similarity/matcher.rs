//! 일치 블록 기반 문자열 유사도
//!
//! 가장 긴 공통 연속 블록을 찾고, 그 왼쪽/오른쪽 나머지 구간에서 다시 찾는 과정을
//! 반복해 일치 문자 수 M을 구합니다. 편집 거리와 달리 블록 단위로 비교하므로
//! 단어 순서가 바뀐 제목은 낮은 점수를 받습니다.

/// 두 문자열의 일치 블록 비율 (0.0 ~ 1.0)
///
/// 같은 문자열이면 1.0, 공통 문자가 없으면 0.0.
/// 둘 다 빈 문자열이면 1.0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// 일치 블록들의 길이 합 M
pub fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// `a[alo..ahi]`와 `b[blo..bhi]`에서 가장 긴 공통 블록 `(i, j, size)`
///
/// 길이가 같으면 `a`에서 먼저 시작하는 블록, 그다음 `b`에서 먼저 시작하는 블록을 고릅니다.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    if alo >= ahi || blo >= bhi {
        return best;
    }

    // run[j - blo + 1]: a[i], b[j]에서 끝나는 공통 블록 길이
    let width = bhi - blo + 1;
    let mut prev = vec![0usize; width];
    let mut run = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = if a[i] == b[j] { prev[j - blo] + 1 } else { 0 };
            run[j - blo + 1] = k;
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }

    best
}
