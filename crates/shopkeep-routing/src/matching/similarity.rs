use shopkeep_core::SimilarityMetric;

/// Similarity of `left` and `right` in `[0, 1]` under `metric`.
pub fn similarity(metric: SimilarityMetric, left: &str, right: &str) -> f64 {
    match metric {
        SimilarityMetric::Gestalt => gestalt_ratio(left, right),
        SimilarityMetric::Levenshtein => strsim::normalized_levenshtein(left, right),
        SimilarityMetric::JaroWinkler => strsim::jaro_winkler(left, right),
    }
}

/// Ratcliff/Obershelp ratio: `2 * M / T`.
///
/// `M` counts the characters in the longest common block, then recursively in
/// the longest blocks to its left and right; `T` is the combined length. Two
/// empty strings are identical and score `1.0`.
pub fn gestalt_ratio(left: &str, right: &str) -> f64 {
    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();
    let total = left_chars.len() + right_chars.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_characters(&left_chars, &right_chars);
    (2 * matched) as f64 / total as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    left: usize,
    right: usize,
    len: usize,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    left_lo: usize,
    left_hi: usize,
    right_lo: usize,
    right_hi: usize,
}

fn matching_characters(left: &[char], right: &[char]) -> usize {
    let mut pending = vec![Window {
        left_lo: 0,
        left_hi: left.len(),
        right_lo: 0,
        right_hi: right.len(),
    }];
    let mut matched = 0;

    while let Some(window) = pending.pop() {
        let Some(block) = longest_block(left, right, window) else {
            continue;
        };
        matched += block.len;

        if window.left_lo < block.left && window.right_lo < block.right {
            pending.push(Window {
                left_hi: block.left,
                right_hi: block.right,
                ..window
            });
        }
        let left_end = block.left + block.len;
        let right_end = block.right + block.len;
        if left_end < window.left_hi && right_end < window.right_hi {
            pending.push(Window {
                left_lo: left_end,
                right_lo: right_end,
                ..window
            });
        }
    }

    matched
}

/// Longest common run inside `window`; ties go to the earliest start in `left`,
/// then in `right`.
fn longest_block(left: &[char], right: &[char], window: Window) -> Option<Block> {
    let width = window.right_hi - window.right_lo;
    let mut previous = vec![0usize; width + 1];
    let mut best = Block {
        left: window.left_lo,
        right: window.right_lo,
        len: 0,
    };

    for left_index in window.left_lo..window.left_hi {
        let mut current = vec![0usize; width + 1];
        for right_index in window.right_lo..window.right_hi {
            if left[left_index] != right[right_index] {
                continue;
            }
            let offset = right_index - window.right_lo;
            let run = previous[offset] + 1;
            current[offset + 1] = run;
            if run > best.len {
                best = Block {
                    left: left_index + 1 - run,
                    right: right_index + 1 - run,
                    len: run,
                };
            }
        }
        previous = current;
    }

    (best.len > 0).then_some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_identical_strings() {
        assert_close(gestalt_ratio("Jeans azul", "Jeans azul"), 1.0);
        assert_close(gestalt_ratio("", ""), 1.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_close(gestalt_ratio("abc", "xyz"), 0.0);
        assert_close(gestalt_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_shifted_block() {
        // "bcd" is the only common block
        assert_close(gestalt_ratio("abcd", "bcde"), 0.75);
    }

    #[test]
    fn test_recurses_on_both_sides() {
        // "ab" then "cd" to the right of it
        assert_close(gestalt_ratio("abxcd", "abcd"), 8.0 / 9.0);
    }

    #[test]
    fn test_crossing_blocks_are_not_counted() {
        // "ab" and "cd" appear in opposite orders; only one block survives
        assert_close(gestalt_ratio("abcd", "cdab"), 0.5);
    }

    #[test]
    fn test_typo_clears_default_threshold() {
        let ratio = gestalt_ratio("Camiseta blanka", "Camiseta blanca L blanco 19.99");
        assert!(ratio >= 0.6, "ratio was {ratio}");
    }

    #[test]
    fn test_ratio_is_case_sensitive() {
        assert!(gestalt_ratio("JEANS", "jeans") < 0.01);
    }

    #[test]
    fn test_metric_dispatch() {
        assert_close(similarity(SimilarityMetric::Gestalt, "abcd", "bcde"), 0.75);
        assert_close(similarity(SimilarityMetric::Levenshtein, "kitten", "kitten"), 1.0);
        assert_close(similarity(SimilarityMetric::JaroWinkler, "", ""), 1.0);
        let levenshtein = similarity(SimilarityMetric::Levenshtein, "kitten", "sitting");
        assert!((0.0..1.0).contains(&levenshtein));
    }
}
