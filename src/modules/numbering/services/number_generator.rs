use chrono::{Datelike, Utc};

/// Generator for display invoice numbers.
///
/// Renders a tenant-configured format template with the current financial
/// year and the next sequence value. Pure string manipulation with no error
/// path: any template, including one with no digits at all, resolves through
/// the fallback append rule.
///
/// Substitution order is fixed: year ranges ("YY-YY", then "YYYY-YYYY"),
/// then standalone year tokens (2-digit 20-99, then 4-digit 2000-2099).
/// Substituted spans are exempt from later passes, so a freshly written
/// "31-32" range is never re-interpreted as two standalone year tokens. The
/// trailing sequence slot is then the last maximal digit run of the processed
/// string, substitutions included.
pub struct InvoiceNumberGenerator;

/// A span of the format string during substitution. `Substituted` text is
/// finished and skipped by later passes.
#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    Digits(String),
    Substituted(String),
}

impl Piece {
    fn as_str(&self) -> &str {
        match self {
            Piece::Text(s) | Piece::Digits(s) | Piece::Substituted(s) => s,
        }
    }
}

impl InvoiceNumberGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates the display number for the current date
    pub fn generate(&self, sequence: u64, format: &str) -> String {
        self.generate_for_year(sequence, format, Utc::now().year())
    }

    /// Generates the display number for a fixed year (deterministic variant)
    pub fn generate_for_year(&self, sequence: u64, format: &str, year: i32) -> String {
        if format.trim().is_empty() {
            return sequence.to_string();
        }

        let short = year.rem_euclid(100);
        let next_short = (year + 1).rem_euclid(100);
        let year_range = format!("{:02}-{:02}", short, next_short);
        let full_year_range = format!("{}-{}", year, year + 1);
        let year_short = format!("{:02}", short);
        let year_full = year.to_string();

        let mut pieces = tokenize(format);
        pieces = substitute_year_range(pieces, 2, &year_range);
        pieces = substitute_year_range(pieces, 4, &full_year_range);
        pieces = substitute_standalone_year(pieces, 2, 20..=99, &year_short);
        pieces = substitute_standalone_year(pieces, 4, 2000..=2099, &year_full);

        let processed: String = pieces.iter().map(Piece::as_str).collect();

        match last_digit_run(&processed) {
            Some((start, width)) => format!(
                "{}{:0width$}",
                &processed[..start],
                sequence,
                width = width
            ),
            None => format!("{}{:05}", processed, sequence),
        }
    }
}

impl Default for InvoiceNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a format string into maximal ASCII digit runs and literal text
fn tokenize(format: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_is_digits = false;

    for ch in format.chars() {
        let is_digit = ch.is_ascii_digit();
        if !current.is_empty() && is_digit != current_is_digits {
            pieces.push(flush(&mut current, current_is_digits));
        }
        current_is_digits = is_digit;
        current.push(ch);
    }
    if !current.is_empty() {
        pieces.push(flush(&mut current, current_is_digits));
    }

    pieces
}

fn flush(current: &mut String, is_digits: bool) -> Piece {
    let text = std::mem::take(current);
    if is_digits {
        Piece::Digits(text)
    } else {
        Piece::Text(text)
    }
}

/// Collapses every `<width digits>-<width digits>` pattern into one
/// substituted span
fn substitute_year_range(pieces: Vec<Piece>, width: usize, replacement: &str) -> Vec<Piece> {
    let mut out = Vec::with_capacity(pieces.len());
    let mut i = 0;

    while i < pieces.len() {
        let is_range = i + 2 < pieces.len()
            && matches!(&pieces[i], Piece::Digits(d) if d.len() == width)
            && matches!(&pieces[i + 1], Piece::Text(t) if t == "-")
            && matches!(&pieces[i + 2], Piece::Digits(d) if d.len() == width);

        if is_range {
            out.push(Piece::Substituted(replacement.to_string()));
            i += 3;
        } else {
            out.push(pieces[i].clone());
            i += 1;
        }
    }

    out
}

/// Replaces remaining standalone digit runs of the given width whose value
/// falls in the year range
fn substitute_standalone_year(
    pieces: Vec<Piece>,
    width: usize,
    range: std::ops::RangeInclusive<u32>,
    replacement: &str,
) -> Vec<Piece> {
    pieces
        .into_iter()
        .map(|piece| match &piece {
            Piece::Digits(d) if d.len() == width => match d.parse::<u32>() {
                Ok(value) if range.contains(&value) => {
                    Piece::Substituted(replacement.to_string())
                }
                _ => piece,
            },
            _ => piece,
        })
        .collect()
}

/// Byte offset and length of the last maximal ASCII digit run, if any
fn last_digit_run(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let mut last = None;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            last = Some((start, i - start));
        } else {
            i += 1;
        }
    }

    last
}
