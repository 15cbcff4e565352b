//! Text format reader.
//!
//! ```text
//! n
//! s1 s2 ... sn        (optional set cardinalities)
//! <elements of S1>    (1-based)
//! ...
//! <elements of Sn>
//! a11 a12 ... a1n     (upper-triangular rows, row i has n-i+1 values)
//! ...
//! ann
//! ```
//!
//! Blank lines are skipped. The cardinality line is recognised when it
//! holds exactly `n` integers, none larger than `n`.

use super::{CoefficientMatrix, Instance};
use crate::error::{QbfScError, Result};
use std::str::FromStr;

struct Lines<'a> {
    inner: std::vec::IntoIter<(usize, &'a str)>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        Self {
            inner: lines.into_iter(),
            last: 0,
        }
    }

    fn peek(&self) -> Option<(usize, &'a str)> {
        self.inner.as_slice().first().copied()
    }

    fn remaining(&self) -> usize {
        self.inner.len()
    }

    fn next_or(&mut self, what: &str) -> Result<(usize, &'a str)> {
        match self.inner.next() {
            Some((line, text)) => {
                self.last = line;
                Ok((line, text))
            }
            None => Err(QbfScError::malformed(
                self.last,
                format!("unexpected end of input, missing {what}"),
            )),
        }
    }
}

fn tokens<T: FromStr>(line: usize, text: &str) -> Result<Vec<T>> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<T>()
                .map_err(|_| QbfScError::malformed(line, format!("invalid number '{tok}'")))
        })
        .collect()
}

pub(super) fn parse(text: &str) -> Result<Instance> {
    let mut lines = Lines::new(text);

    let (line, header) = lines.next_or("dimension")?;
    let n: usize = header
        .parse()
        .map_err(|_| QbfScError::malformed(line, format!("invalid dimension '{header}'")))?;
    if n == 0 {
        return Err(QbfScError::malformed(line, "dimension must be positive"));
    }
    // n set lines and n matrix rows at the least.
    if lines.remaining() / 2 < n {
        return Err(QbfScError::malformed(
            line,
            format!(
                "dimension {n} needs at least {} more lines, found {}",
                n.saturating_mul(2),
                lines.remaining()
            ),
        ));
    }

    let cardinalities = match lines.peek() {
        Some((line, text)) => match tokens::<usize>(line, text) {
            Ok(values) if values.len() == n && values.iter().all(|&v| v <= n) => {
                lines.next_or("set cardinalities")?;
                Some(values)
            }
            _ => None,
        },
        None => None,
    };

    let mut sets = Vec::with_capacity(n);
    for i in 0..n {
        let (line, text) = lines.next_or(&format!("set {}", i + 1))?;
        let mut set = Vec::new();
        for element in tokens::<usize>(line, text)? {
            if element == 0 || element > n {
                return Err(QbfScError::malformed(
                    line,
                    format!("element {element} outside 1..={n}"),
                ));
            }
            set.push(element - 1);
        }
        set.sort_unstable();
        set.dedup();
        if let Some(expected) = cardinalities.as_ref().map(|c| c[i]) {
            if set.len() != expected {
                return Err(QbfScError::malformed(
                    line,
                    format!(
                        "set {} has {} elements, cardinality line declares {expected}",
                        i + 1,
                        set.len()
                    ),
                ));
            }
        }
        sets.push(set);
    }

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let (line, text) = lines.next_or(&format!("matrix row {}", i + 1))?;
        let row = tokens::<f64>(line, text)?;
        if row.len() != n - i {
            return Err(QbfScError::malformed(
                line,
                format!("matrix row {} has {} values, expected {}", i + 1, row.len(), n - i),
            ));
        }
        rows.push(row);
    }

    if let Some((line, _)) = lines.peek() {
        return Err(QbfScError::malformed(line, "trailing content after matrix"));
    }

    let matrix = CoefficientMatrix::from_upper_rows(&rows)?;
    Instance::new(sets, matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::fixtures::{small_instance, SMALL_INSTANCE_TEXT};

    #[test]
    fn test_parse_with_cardinalities() {
        let parsed = parse(SMALL_INSTANCE_TEXT).unwrap();
        let expected = small_instance();
        assert_eq!(parsed.sets(), expected.sets());
        assert_eq!(parsed.matrix(), expected.matrix());
    }

    #[test]
    fn test_parse_without_cardinalities() {
        let text = "3\n1 2\n3\n2\n1 0 2\n4 -1\n5\n";
        let inst = parse(text).unwrap();
        assert_eq!(inst.size(), 3);
        assert_eq!(inst.set(0), &[0, 1]);
        assert_eq!(inst.set(1), &[2]);
        assert_eq!(inst.matrix().get(1, 2), -1.0);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = "\n2\n\n1\n\n2\n1 1\n\n1\n";
        let inst = parse(text).unwrap();
        assert_eq!(inst.size(), 2);
        assert_eq!(inst.matrix().get(0, 1), 1.0);
    }

    #[test]
    fn test_cardinality_mismatch() {
        let text = "2\n2 1\n1\n2\n1 1\n1\n";
        let err = parse(text).unwrap_err();
        assert!(
            matches!(err, QbfScError::MalformedInstance { line: 3, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_element_out_of_range() {
        let text = "2\n1 3\n2\n1 1\n1\n";
        assert!(matches!(
            parse(text),
            Err(QbfScError::MalformedInstance { line: 2, .. })
        ));
    }

    #[test]
    fn test_short_matrix_row() {
        let text = "2\n1\n2\n1\n1\n";
        let err = parse(text).unwrap_err();
        assert!(err.to_string().contains("matrix row 1"), "{err}");
    }

    #[test]
    fn test_truncated_input() {
        let err = parse("2\n1 1\n1\n2\n1 0\n").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"), "{err}");
    }

    #[test]
    fn test_dimension_larger_than_input() {
        let err = parse("1000000000000000000\n1\n").unwrap_err();
        assert!(
            matches!(err, QbfScError::MalformedInstance { line: 1, .. }),
            "{err:?}"
        );
        let err = parse(&format!("{}\n1\n", usize::MAX)).unwrap_err();
        assert!(err.to_string().contains("needs at least"), "{err}");
        assert!(parse("3\n1\n2\n").is_err());
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(parse("abc\n").is_err());
        assert!(parse("0\n").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_uncoverable_instance_rejected() {
        let text = "2\n1\n1\n1 0\n1\n";
        assert!(parse(text).is_err());
    }

    #[test]
    fn test_trailing_content_rejected() {
        let text = "1\n1\n1\n7\n8\n";
        assert!(matches!(
            parse(text),
            Err(QbfScError::MalformedInstance { line: 5, .. })
        ));
    }
}
