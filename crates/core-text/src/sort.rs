//! Natural (alphanumeric) ordering and line sorting.

use std::cmp::Ordering;

/// Trailing delimiters recognised when re-sorting lines.
const LINE_DELIMITERS: [char; 2] = [',', ';'];

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut digits = None;
    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match digits {
            Some(prev) if prev != is_digit => {
                out.push(chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        digits = Some(is_digit);
    }
    if let Some(prev) = digits {
        out.push(chunk(&s[start..], prev));
    }
    out
}

fn chunk(s: &str, digits: bool) -> Chunk<'_> {
    if digits { Chunk::Digits(s) } else { Chunk::Text(s) }
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}

fn cmp_text(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    if case_sensitive {
        a.cmp(b)
    } else {
        a.to_lowercase().cmp(&b.to_lowercase())
    }
}

/// Compare so that digit runs order by numeric value: `item2 < item10`.
pub fn natural_cmp(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    let ca = chunks(a);
    let cb = chunks(b);
    for (x, y) in ca.iter().zip(cb.iter()) {
        let ord = match (x, y) {
            (Chunk::Digits(x), Chunk::Digits(y)) => cmp_digits(x, y),
            (Chunk::Text(x), Chunk::Text(y)) => cmp_text(x, y, case_sensitive),
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ca.len().cmp(&cb.len()).then_with(|| a.cmp(b))
}

/// Delimiter shared by every line except the last, where the last lacks it.
pub fn shared_trailing_delimiter<S: AsRef<str>>(lines: &[S]) -> Option<char> {
    let (last, init) = lines.split_last()?;
    if init.is_empty() {
        return None;
    }
    let candidate = init[0].as_ref().trim_end().chars().next_back()?;
    if !LINE_DELIMITERS.contains(&candidate) {
        return None;
    }
    let shared = init
        .iter()
        .all(|l| l.as_ref().trim_end().ends_with(candidate));
    let last_lacks = !last.as_ref().trim_end().ends_with(candidate);
    (shared && last_lacks).then_some(candidate)
}

/// Natural-sort `lines` ascending or descending.
///
/// A trailing delimiter shared by all but the last line is stripped before
/// sorting and re-applied to all but the new last line.
pub fn sort_lines<S: AsRef<str>>(lines: &[S], ascending: bool, case_sensitive: bool) -> Vec<String> {
    let delimiter = shared_trailing_delimiter(lines);
    let mut cores: Vec<String> = lines
        .iter()
        .map(|l| {
            let trimmed = l.as_ref().trim_end();
            match delimiter {
                Some(d) => trimmed.strip_suffix(d).unwrap_or(trimmed).to_string(),
                None => l.as_ref().to_string(),
            }
        })
        .collect();
    cores.sort_by(|a, b| {
        let ord = natural_cmp(a.trim_start(), b.trim_start(), case_sensitive);
        if ascending { ord } else { ord.reverse() }
    });
    if let Some(d) = delimiter {
        let last = cores.len().saturating_sub(1);
        for (i, core) in cores.iter_mut().enumerate() {
            if i != last {
                core.push(d);
            }
        }
    }
    cores
}
