//! Identifier lookup and string predicates.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMERIC: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
    static ref UUID: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    ).unwrap();
}

/// Finds `needle` in `haystack`, ignoring case.
///
/// With `exact` set, the first entry equal to the needle is returned.
/// Otherwise the entry that starts with the needle and has the fewest extra
/// characters wins; on a tie the earlier entry is kept. The haystack is
/// scanned in iteration order, so pass an ordered collection when the
/// result has to be reproducible.
pub fn closest_match<'a, I, S>(haystack: I, needle: &str, exact: bool) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let needle = needle.to_lowercase();
    let needle_len = needle.chars().count();
    let mut found: Option<(&'a str, usize)> = None;

    for value in haystack {
        let value = value.as_ref();
        let lowercase = value.to_lowercase();
        if exact {
            if lowercase == needle {
                return Some(value);
            }
            continue;
        }
        if lowercase.starts_with(&needle) {
            let delta = lowercase.chars().count() - needle_len;
            if found.is_none_or(|(_, best)| delta < best) {
                found = Some((value, delta));
            }
            if delta == 0 {
                break;
            }
        }
    }
    found.map(|(value, _)| value)
}

/// An optional minus sign, digits, and optionally a fraction: `-3.5`, `42`.
pub fn is_numeric(s: &str) -> bool {
    NUMERIC.is_match(s)
}

/// Canonical 8-4-4-4-12 hexadecimal form, in either case.
pub fn is_uuid(s: &str) -> bool {
    UUID.is_match(s)
}
