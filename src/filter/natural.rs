use std::cmp::Ordering;
use std::iter::Peekable;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Human-friendly string comparison.
///
/// Runs of ASCII digits compare by numeric value, so `"line 9"` sorts before
/// `"line 10"`. Other characters compare case-insensitively, with whitespace
/// before punctuation, punctuation before digits and digits before letters.
/// Accents are folded onto their base letter, so `"élan"` sorts with the
/// `e` words. Strings differing only in case or accents compare equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = fold_marks(a).peekable();
    let mut right = fold_marks(b).peekable();

    loop {
        let ord = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let x_run = take_digits(&mut left);
                let y_run = take_digits(&mut right);
                cmp_digit_runs(&x_run, &y_run)
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                collation_key(x).cmp(&collation_key(y))
            }
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Canonical decomposition with the combining marks dropped
fn fold_marks(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().filter(|c| !is_combining_mark(*c))
}

fn take_digits(chars: &mut Peekable<impl Iterator<Item = char>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn collation_key(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_ascii_digit() {
        2
    } else if c.is_alphanumeric() {
        3
    } else {
        1
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(natural_cmp("line 9", "line 10"), Ordering::Less);
        assert_eq!(natural_cmp("line 10", "line 9"), Ordering::Greater);
        assert_eq!(natural_cmp("v2.10", "v2.9"), Ordering::Greater);
    }

    #[test]
    fn test_leading_zeros_do_not_change_value() {
        assert_eq!(natural_cmp("id 007", "id 7"), Ordering::Equal);
        assert_eq!(natural_cmp("id 008", "id 7"), Ordering::Greater);
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Equal);
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("abc", "abcd"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(natural_cmp(" x", "-x"), Ordering::Less);
        assert_eq!(natural_cmp("-x", "1x"), Ordering::Less);
        assert_eq!(natural_cmp("1x", "ax"), Ordering::Less);
    }

    #[test]
    fn test_accents_fold_onto_base_letter() {
        assert_eq!(natural_cmp("élan", "zebra"), Ordering::Less);
        assert_eq!(natural_cmp("Ärger", "Zoo"), Ordering::Less);
        assert_eq!(natural_cmp("café 2", "cafe 10"), Ordering::Less);
        assert_eq!(natural_cmp("Éte", "ete"), Ordering::Equal);
    }
}
