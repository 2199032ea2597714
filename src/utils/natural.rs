//! Natural ("alphanumeric") string ordering.
//!
//! Embedded runs of ASCII digits compare by numeric value, so `"file2"`
//! sorts before `"file10"`. Everything else compares character by
//! character, case-insensitively unless asked otherwise.

use std::cmp::Ordering;
use std::path::Path;

use rayon::prelude::*;

/// How non-digit characters are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Compare the Unicode lowercase mapping of both characters.
    #[default]
    Insensitive,
    /// Compare raw code points.
    Sensitive,
}

/// Natural-order comparator.
///
/// The default value is case-insensitive, which is what the free function
/// [`natural_sort`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NaturalSort {
    case: CaseSensitivity,
}

impl NaturalSort {
    pub const fn new(case: CaseSensitivity) -> Self {
        Self { case }
    }

    pub const fn case_insensitive() -> Self {
        Self::new(CaseSensitivity::Insensitive)
    }

    pub const fn case_sensitive() -> Self {
        Self::new(CaseSensitivity::Sensitive)
    }

    pub fn case(&self) -> CaseSensitivity {
        self.case
    }

    /// Compare two strings in natural order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let (mut a, mut b) = (a, b);

        loop {
            let mut a_chars = a.chars();
            let mut b_chars = b.chars();

            match (a_chars.next(), b_chars.next()) {
                (None, None) => return Ordering::Equal,
                // Digit runs are consumed whole, so running out of input always
                // happens on a token boundary: the shorter string goes first.
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                    let run_a = digit_run(a);
                    let run_b = digit_run(b);
                    match compare_digit_runs(run_a, run_b) {
                        Ordering::Equal => {
                            a = &a[run_a.len()..];
                            b = &b[run_b.len()..];
                        }
                        ord => return ord,
                    }
                }
                (Some(x), Some(y)) => match self.compare_chars(x, y) {
                    Ordering::Equal => {
                        a = a_chars.as_str();
                        b = b_chars.as_str();
                    }
                    ord => return ord,
                },
            }
        }
    }

    /// Stable sort of `items` in natural order, using the rayon pool.
    pub fn sort<T>(&self, items: &mut [T])
    where
        T: AsRef<str> + Send,
    {
        items.par_sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Stable sort of paths by their (lossy) string form.
    ///
    /// Each path is converted to a string once, not per comparison.
    pub fn sort_paths<P>(&self, paths: Vec<P>) -> Vec<P>
    where
        P: AsRef<Path> + Send,
    {
        let mut keyed: Vec<(String, P)> = paths
            .into_iter()
            .map(|path| (path.as_ref().to_string_lossy().into_owned(), path))
            .collect();
        keyed.par_sort_by(|a, b| self.compare(&a.0, &b.0));
        keyed.into_iter().map(|(_, path)| path).collect()
    }

    fn compare_chars(&self, x: char, y: char) -> Ordering {
        if x == y {
            return Ordering::Equal;
        }
        match self.case {
            CaseSensitivity::Sensitive => x.cmp(&y),
            CaseSensitivity::Insensitive => x.to_lowercase().cmp(y.to_lowercase()),
        }
    }
}

/// Compare two strings in natural, case-insensitive order.
///
/// ```
/// use std::cmp::Ordering;
/// use fontsrt_utils::natural_sort;
///
/// assert_eq!(natural_sort("file2", "file10"), Ordering::Less);
/// assert_eq!(natural_sort("file02", "file2"), Ordering::Equal);
/// ```
pub fn natural_sort(a: &str, b: &str) -> Ordering {
    NaturalSort::case_insensitive().compare(a, b)
}

/// Same as [`natural_sort`], with a missing value treated as `""`.
pub fn natural_sort_opt(a: Option<&str>, b: Option<&str>) -> Ordering {
    natural_sort(a.unwrap_or_default(), b.unwrap_or_default())
}

/// Sort a slice in natural, case-insensitive order.
pub fn sort_natural<T>(items: &mut [T])
where
    T: AsRef<str> + Send,
{
    NaturalSort::case_insensitive().sort(items);
}

/// Wrapper that orders its contents naturally.
///
/// Equality follows the comparator, so `Natural("a01") == Natural("A1")`.
/// Useful as a `BTreeMap` key or with `Iterator::max`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural<T>(pub T);

impl<T: AsRef<str>> Ord for Natural<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_sort(self.0.as_ref(), other.0.as_ref())
    }
}

impl<T: AsRef<str>> PartialOrd for Natural<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: AsRef<str>> PartialEq for Natural<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: AsRef<str>> Eq for Natural<T> {}

fn digit_run(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}

/// Numeric comparison of two digit runs of any length.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_numeric_chunks() {
        assert_eq!(natural_sort("file2", "file10"), Ordering::Less);
        assert_eq!(natural_sort("a10b", "a9b"), Ordering::Greater);
        assert_eq!(natural_sort("file02", "file2"), Ordering::Equal);
        assert_eq!(natural_sort("v1.10", "v1.9"), Ordering::Greater);
    }

    #[test]
    fn test_empty_and_prefix() {
        assert_eq!(natural_sort("", ""), Ordering::Equal);
        assert_eq!(natural_sort("", "a"), Ordering::Less);
        assert_eq!(natural_sort("a", ""), Ordering::Greater);
        assert_eq!(natural_sort("file10", "file10x"), Ordering::Less);
        assert_eq!(natural_sort("file", "file1"), Ordering::Less);
        assert_eq!(natural_sort("file1", "file"), Ordering::Greater);
    }

    #[test]
    fn test_zero_runs() {
        assert_eq!(natural_sort("x0", "x000"), Ordering::Equal);
        assert_eq!(natural_sort("x0", "x1"), Ordering::Less);
        assert_eq!(natural_sort("x00y", "x0z"), Ordering::Less);
    }

    #[test]
    fn test_missing_input_is_empty() {
        assert_eq!(natural_sort_opt(None, None), Ordering::Equal);
        assert_eq!(natural_sort_opt(None, Some("")), Ordering::Equal);
        assert_eq!(natural_sort_opt(None, Some("a")), Ordering::Less);
        assert_eq!(natural_sort_opt(Some("1"), None), Ordering::Greater);
    }

    #[test]
    fn test_long_digit_runs() {
        let small = format!("n{}", "9".repeat(40));
        let big = format!("n1{}", "0".repeat(40));
        assert_eq!(natural_sort(&small, &big), Ordering::Less);
        assert_eq!(natural_sort(&big, &small), Ordering::Greater);

        let padded = format!("n{}{}", "0".repeat(100), "9".repeat(40));
        assert_eq!(natural_sort(&small, &padded), Ordering::Equal);
    }

    #[test]
    fn test_case_handling() {
        assert_eq!(natural_sort("File2", "file10"), Ordering::Less);
        assert_eq!(natural_sort("ABC", "abc"), Ordering::Equal);
        assert_eq!(natural_sort("B", "a"), Ordering::Greater);

        let sensitive = NaturalSort::case_sensitive();
        assert_eq!(sensitive.compare("B", "a"), Ordering::Less);
        assert_eq!(sensitive.compare("ABC", "abc"), Ordering::Less);
        assert_eq!(sensitive.compare("file2", "file10"), Ordering::Less);
    }

    #[test]
    fn test_digit_against_letter() {
        // '1' (0x31) is below 'a' (0x61) and above ' ' (0x20).
        assert_eq!(natural_sort("a1", "ab"), Ordering::Less);
        assert_eq!(natural_sort("a1", "a "), Ordering::Greater);
    }

    #[test]
    fn test_sort_slice() {
        let mut files = vec!["img10.png", "img2.png", "img1.png"];
        sort_natural(&mut files);
        assert_eq!(files, vec!["img1.png", "img2.png", "img10.png"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut files = vec!["b", "A02", "a2", "a1"];
        sort_natural(&mut files);
        assert_eq!(files, vec!["a1", "A02", "a2", "b"]);
    }

    #[test]
    fn test_sort_paths() {
        let paths = vec![
            std::path::PathBuf::from("fonts/Roboto10.ttf"),
            std::path::PathBuf::from("fonts/roboto9.ttf"),
            std::path::PathBuf::from("fonts/Roboto09.ttf"),
            std::path::PathBuf::from("fonts/Inter.ttf"),
        ];
        let sorted = NaturalSort::default().sort_paths(paths);
        assert_eq!(
            sorted,
            vec![
                std::path::PathBuf::from("fonts/Inter.ttf"),
                std::path::PathBuf::from("fonts/roboto9.ttf"),
                std::path::PathBuf::from("fonts/Roboto09.ttf"),
                std::path::PathBuf::from("fonts/Roboto10.ttf"),
            ]
        );
        assert!(NaturalSort::default().sort_paths(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_natural_wrapper() {
        let mut set = BTreeSet::new();
        for name in ["track10", "track2", "Track02", "track1"] {
            set.insert(Natural(name));
        }
        let ordered: Vec<&str> = set.iter().map(|n| n.0).collect();
        // "Track02" equals "track2"; insert keeps the key already present.
        assert_eq!(ordered, vec!["track1", "track2", "track10"]);
        assert!(!set.insert(Natural("TRACK2")));
        assert!(set.contains(&Natural("track002")));

        let max = ["9", "10", "2"].into_iter().map(Natural).max();
        assert_eq!(max.map(|n| n.0), Some("10"));
    }
}
