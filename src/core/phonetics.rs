//! String-level heuristics shared by the generators and the quality scorer.
//!
//! Everything here works on `char`s rather than bytes so that keywords with
//! non-ASCII letters never split a code point. `y` is treated as a vowel
//! throughout, which keeps names like "Sync" from reading as all-consonant.

/// Letters counted as vowels by every heuristic in this module.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Capitalize the first character of a string, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}

/// Whether `c` is a vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Lowercase letters and digits only; everything else is dropped.
pub fn strip_to_alphanumeric(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Approximate syllable count: the number of maximal vowel runs.
pub fn syllable_count(name: &str) -> usize {
    let mut count = 0;
    let mut in_vowel_run = false;
    for c in name.chars() {
        let vowel = c.is_alphabetic() && is_vowel(c);
        if vowel && !in_vowel_run {
            count += 1;
        }
        in_vowel_run = vowel;
    }
    count
}

/// Number of runs of at least `min_run` consecutive consonants.
///
/// Non-letters are skipped, so "data-flow" is read as "dataflow".
pub fn consonant_runs(name: &str, min_run: usize) -> usize {
    let mut runs = 0;
    let mut current = 0;
    for c in name.chars().filter(|c| c.is_alphabetic()) {
        if is_vowel(c) {
            if current >= min_run {
                runs += 1;
            }
            current = 0;
        } else {
            current += 1;
        }
    }
    if current >= min_run {
        runs += 1;
    }
    runs
}

/// Share of characters that are vowels, in [0, 1]. Empty input yields 0.
pub fn vowel_ratio(name: &str) -> f64 {
    let total = char_len(name);
    if total == 0 {
        return 0.0;
    }
    let vowels = name.chars().filter(|&c| is_vowel(c)).count();
    vowels as f64 / total as f64
}

/// Whether any two-letter sequence occurs twice without overlapping.
pub fn has_repeated_bigram(name: &str) -> bool {
    let chars: Vec<char> = name.chars().flat_map(char::to_lowercase).collect();
    if chars.len() < 4 {
        return false;
    }
    for i in 0..chars.len() - 1 {
        for j in (i + 2)..chars.len() - 1 {
            if chars[i] == chars[j] && chars[i + 1] == chars[j + 1] {
                return true;
            }
        }
    }
    false
}

/// Split a display-cased name at uppercase letters: "FlowForge" -> ["Flow", "Forge"].
///
/// Leading characters before the first uppercase letter are ignored.
pub fn capital_parts(name: &str) -> Vec<&str> {
    let starts: Vec<usize> = name
        .char_indices()
        .filter(|(_, c)| c.is_uppercase())
        .map(|(i, _)| i)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(name.len());
            &name[start..end]
        })
        .collect()
}

/// Whether two capital-delimited parts share their initial letter.
pub fn has_alliteration(name: &str) -> bool {
    let initials: Vec<char> = capital_parts(name)
        .iter()
        .filter_map(|part| part.chars().next())
        .collect();

    initials
        .iter()
        .enumerate()
        .any(|(i, c)| initials[i + 1..].contains(c))
}

/// Whether `haystack` (already lowercased) contains any of `needles`.
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles
        .iter()
        .any(|n| !n.as_ref().is_empty() && haystack.contains(n.as_ref()))
}
