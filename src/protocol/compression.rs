//! # ZPL Graphic Field Compression
//!
//! Run-length scheme used inside `^GF` fields with the `A` (ASCII hex)
//! format. The input is the hex text of a bitmap, one line per row; the
//! output is the same data with runs and whole lines replaced by shorthand.
//!
//! ## Repeat Counts
//!
//! A run of `n` identical hex digits is written as a count code followed by
//! the digit. Count codes are single letters:
//!
//! | Letters | Counts |
//! |---------|--------|
//! | `G`..`Y` | 1..19 |
//! | `g`..`z` | 20, 40, ..., 400 |
//!
//! Counts that are not in the table are written as two letters that add up:
//!
//! ```text
//! 45 × '0'  →  h (40) + K (5) + '0'  →  "hK0"
//! 60 × 'F'  →  i (60) + 'F'          →  "iF"
//! ```
//!
//! ## Line Shorthand
//!
//! | Char | Meaning |
//! |------|---------|
//! | `,` | Whole line is `0` (background) |
//! | `!` | Whole line is `F` (ink) |
//! | `:` | Same as the previous line |
//!
//! ## Encoding Pipeline
//!
//! ```text
//! "0000\n00FF\n00FF\n"
//!    │ tokenize
//!    ▼
//! Run(0,4) LineEnd  Run(0,2) Run(F,2) LineEnd  Run(0,2) Run(F,2) LineEnd
//!    │ encode lines
//!    ▼
//! ","  "H0HF"  ":"   →   ",H0HF:"
//! ```

use crate::error::ZplError;

// ============================================================================
// CODE ALPHABET
// ============================================================================

/// Count → letter table, in ascending count order.
///
/// The printer firmware expects exactly these letters.
pub const ALPHABET: [(usize, char); 39] = [
    (1, 'G'),
    (2, 'H'),
    (3, 'I'),
    (4, 'J'),
    (5, 'K'),
    (6, 'L'),
    (7, 'M'),
    (8, 'N'),
    (9, 'O'),
    (10, 'P'),
    (11, 'Q'),
    (12, 'R'),
    (13, 'S'),
    (14, 'T'),
    (15, 'U'),
    (16, 'V'),
    (17, 'W'),
    (18, 'X'),
    (19, 'Y'),
    (20, 'g'),
    (40, 'h'),
    (60, 'i'),
    (80, 'j'),
    (100, 'k'),
    (120, 'l'),
    (140, 'm'),
    (160, 'n'),
    (180, 'o'),
    (200, 'p'),
    (220, 'q'),
    (240, 'r'),
    (260, 's'),
    (280, 't'),
    (300, 'u'),
    (320, 'v'),
    (340, 'w'),
    (360, 'x'),
    (380, 'y'),
    (400, 'z'),
];

/// Largest count a single letter can express.
pub const MAX_CODE: usize = 400;

/// Line shorthand: whole line is background.
pub const BLANK_LINE: char = ',';

/// Line shorthand: whole line is ink.
pub const SOLID_LINE: char = '!';

/// Line shorthand: repeat the previous line.
pub const REPEAT_LINE: char = ':';

/// Letter for a repeat count, if the count is in the table.
///
/// ```
/// use zpl_label::protocol::compression::code;
///
/// assert_eq!(code(1), Some('G'));
/// assert_eq!(code(19), Some('Y'));
/// assert_eq!(code(20), Some('g'));
/// assert_eq!(code(400), Some('z'));
/// assert_eq!(code(21), None);
/// ```
pub fn code(count: usize) -> Option<char> {
    ALPHABET
        .binary_search_by_key(&count, |&(n, _)| n)
        .ok()
        .map(|i| ALPHABET[i].1)
}

/// Repeat count for a letter, if it is a count code.
pub fn count_of(letter: char) -> Option<usize> {
    match letter {
        'G'..='Y' => Some(letter as usize - 'G' as usize + 1),
        'g'..='z' => Some((letter as usize - 'g' as usize + 1) * 20),
        _ => None,
    }
}

// ============================================================================
// TOKENIZER
// ============================================================================

/// One unit of the hex row stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `len` consecutive copies of the hex digit `digit`.
    Run { digit: u8, len: usize },
    /// End of a bitmap row.
    LineEnd,
}

/// Split row-delimited hex text into runs and line boundaries.
///
/// Runs never span a line break. A trailing row without a final `\n` is still
/// closed with [`Token::LineEnd`].
///
/// ```
/// use zpl_label::protocol::compression::{tokenize, Token};
///
/// assert_eq!(
///     tokenize("00F\n"),
///     vec![
///         Token::Run { digit: b'0', len: 2 },
///         Token::Run { digit: b'F', len: 1 },
///         Token::LineEnd,
///     ]
/// );
/// ```
pub fn tokenize(hex_rows: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<(u8, usize)> = None;

    for &byte in hex_rows.as_bytes() {
        if byte == b'\n' {
            if let Some((digit, len)) = current.take() {
                tokens.push(Token::Run { digit, len });
            }
            tokens.push(Token::LineEnd);
            continue;
        }

        current = match current {
            Some((digit, len)) if digit == byte => Some((digit, len + 1)),
            Some((digit, len)) => {
                tokens.push(Token::Run { digit, len });
                Some((byte, 1))
            }
            None => Some((byte, 1)),
        };
    }

    if let Some((digit, len)) = current {
        tokens.push(Token::Run { digit, len });
        tokens.push(Token::LineEnd);
    }

    tokens
}

// ============================================================================
// ENCODER
// ============================================================================

/// Append the count code and digit for one run.
///
/// Runs above 419 (beyond what one table letter plus a remainder can hold)
/// are prefixed with one `z` per full 400; letters add up when decoded.
fn push_run(out: &mut String, digit: u8, len: usize) {
    let mut len = len;
    while len >= MAX_CODE + 20 {
        out.push('z');
        len -= MAX_CODE;
    }

    if len <= 20 {
        push_code(out, len);
    } else {
        let tens = (len / 20) * 20;
        let rest = len % 20;
        push_code(out, tens);
        if rest != 0 {
            push_code(out, rest);
        }
    }
    out.push(digit as char);
}

fn push_code(out: &mut String, count: usize) {
    if let Some(letter) = code(count) {
        out.push(letter);
    }
}

/// Encode the runs of one line, given the line's full hex width.
fn encode_line(runs: &[(u8, usize)], line_width: usize) -> String {
    let mut line = String::new();
    let Some((&(last_digit, last_len), head)) = runs.split_last() else {
        return line;
    };

    for &(digit, len) in head {
        push_run(&mut line, digit, len);
    }

    // Whole-line shorthand only applies when one run covers the line
    match last_digit {
        b'0' if last_len >= line_width => line.push(BLANK_LINE),
        b'F' if last_len >= line_width => line.push(SOLID_LINE),
        _ => push_run(&mut line, last_digit, last_len),
    }

    line
}

/// Compress row-delimited hex text.
///
/// `width_bytes` is the packed row width; each line holds `width_bytes * 2`
/// hex digits. A line whose encoding matches the previous line's encoding is
/// replaced with `:`.
///
/// ## Example
///
/// ```
/// use zpl_label::protocol::compression::compress;
///
/// // Blank, blank, then a line with 45 zeros and three Fs
/// let rows = format!("{}\n{}\n{}FFF\n", "0".repeat(48), "0".repeat(48), "0".repeat(45));
/// assert_eq!(compress(&rows, 24), ",:hK0IF");
/// ```
pub fn compress(hex_rows: &str, width_bytes: usize) -> String {
    let line_width = width_bytes * 2;
    let mut out = String::new();
    let mut runs: Vec<(u8, usize)> = Vec::new();
    let mut previous: Option<String> = None;
    let mut repeated = 0usize;

    for token in tokenize(hex_rows) {
        match token {
            Token::Run { digit, len } => runs.push((digit, len)),
            Token::LineEnd => {
                let line = encode_line(&runs, line_width);
                runs.clear();

                if previous.as_deref() == Some(line.as_str()) {
                    out.push(REPEAT_LINE);
                    repeated += 1;
                } else {
                    out.push_str(&line);
                    previous = Some(line);
                }
            }
        }
    }

    log::trace!(
        "compressed {} hex chars into {} ({} repeated lines)",
        hex_rows.len(),
        out.len(),
        repeated
    );

    out
}

// ============================================================================
// REFERENCE DECODER
// ============================================================================

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

/// Rebuild packed rows from compressed field data.
///
/// Count letters accumulate until a hex digit consumes them. `,` and `!`
/// fill the rest of the current row; `:` repeats the previous row. Returns
/// `width_bytes * height` bytes.
///
/// ## Errors
///
/// [`ZplError::InvalidCommand`] for unknown characters, rows that overflow,
/// a `:` with no previous row, dangling count letters, or a row count other
/// than `height`.
///
/// ```
/// use zpl_label::protocol::compression::decompress;
///
/// let data = decompress(",:hK0IF", 24, 3).unwrap();
/// assert_eq!(data.len(), 72);
/// assert!(data[..70].iter().all(|&b| b == 0));
/// assert_eq!(&data[70..], &[0x0F, 0xFF]);
/// ```
pub fn decompress(data: &str, width_bytes: usize, height: usize) -> Result<Vec<u8>, ZplError> {
    let line_width = width_bytes * 2;
    let mut rows: Vec<Vec<u8>> = Vec::with_capacity(height);
    let mut line: Vec<u8> = Vec::with_capacity(line_width);
    let mut count = 0usize;

    for (pos, ch) in data.char_indices() {
        if let Some(n) = count_of(ch) {
            count += n;
            continue;
        }

        let fill = match ch {
            BLANK_LINE => Some(0),
            SOLID_LINE => Some(15),
            _ => None,
        };

        if ch == REPEAT_LINE || fill.is_some() {
            if count != 0 || (ch == REPEAT_LINE && !line.is_empty()) {
                return Err(ZplError::InvalidCommand(format!(
                    "unexpected '{}' at position {}",
                    ch, pos
                )));
            }
            if let Some(value) = fill {
                line.resize(line_width, value);
            } else {
                let prev = rows.last().ok_or_else(|| {
                    ZplError::InvalidCommand("line repeat before any line".to_string())
                })?;
                line.clone_from(prev);
            }
        } else {
            let value = u8::try_from(ch)
                .ok()
                .and_then(hex_value)
                .ok_or_else(|| {
                    ZplError::InvalidCommand(format!(
                        "invalid character '{}' at position {}",
                        ch, pos
                    ))
                })?;
            let repeat = count.max(1);
            count = 0;
            if line.len() + repeat > line_width {
                return Err(ZplError::InvalidCommand(format!(
                    "row {} overflows {} hex digits at position {}",
                    rows.len(),
                    line_width,
                    pos
                )));
            }
            line.extend(std::iter::repeat_n(value, repeat));
        }

        if line.len() == line_width {
            rows.push(std::mem::replace(&mut line, Vec::with_capacity(line_width)));
        }
    }

    if count != 0 || !line.is_empty() {
        return Err(ZplError::InvalidCommand(
            "data ends in the middle of a row".to_string(),
        ));
    }
    if rows.len() != height {
        return Err(ZplError::InvalidCommand(format!(
            "expected {} rows, decoded {}",
            height,
            rows.len()
        )));
    }

    Ok(rows
        .iter()
        .flat_map(|row| row.chunks(2).map(|pair| (pair[0] << 4) | pair[1]))
        .collect())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn run(digit: u8, len: usize) -> String {
        let mut out = String::new();
        push_run(&mut out, digit, len);
        out
    }

    #[test]
    fn test_alphabet_is_sorted_and_unique() {
        for pair in ALPHABET.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert_ne!(pair[0].1, pair[1].1);
        }
    }

    #[test]
    fn test_count_of_inverts_code() {
        for &(n, letter) in &ALPHABET {
            assert_eq!(count_of(letter), Some(n));
            assert_eq!(code(n), Some(letter));
        }
        assert_eq!(count_of('Z'), None);
        assert_eq!(count_of('0'), None);
        assert_eq!(count_of('F'), None);
        assert_eq!(count_of(','), None);
    }

    #[test]
    fn test_alphabet_coverage() {
        for n in 1..=400 {
            let expected = n <= 19 || n % 20 == 0;
            assert_eq!(code(n).is_some(), expected, "count {}", n);
        }
        assert_eq!(code(0), None);
        assert_eq!(code(420), None);
    }

    #[test]
    fn test_short_runs() {
        assert_eq!(run(b'0', 1), "G0");
        assert_eq!(run(b'A', 19), "YA");
        assert_eq!(run(b'F', 20), "gF");
    }

    #[test]
    fn test_run_decomposition() {
        assert_eq!(run(b'0', 45), "hK0");
        assert_eq!(run(b'3', 21), "gG3");
        assert_eq!(run(b'F', 60), "iF");
        assert_eq!(run(b'0', 419), "zY0");
        assert_eq!(run(b'0', 400), "z0");
    }

    #[test]
    fn test_very_long_runs_stack_letters() {
        assert_eq!(run(b'0', 420), "zg0");
        assert_eq!(run(b'0', 845), "zzhK0");
        assert_eq!(run(b'0', 1200), "zzz0");
    }

    #[test]
    fn test_tokenize_breaks_runs_at_lines() {
        assert_eq!(
            tokenize("00\n00\n"),
            vec![
                Token::Run { digit: b'0', len: 2 },
                Token::LineEnd,
                Token::Run { digit: b'0', len: 2 },
                Token::LineEnd,
            ]
        );
    }

    #[test]
    fn test_tokenize_unterminated_row() {
        assert_eq!(
            tokenize("0F"),
            vec![
                Token::Run { digit: b'0', len: 1 },
                Token::Run { digit: b'F', len: 1 },
                Token::LineEnd,
            ]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(compress("0000\n", 2), ",");
    }

    #[test]
    fn test_solid_line() {
        assert_eq!(compress("FFFF\n", 2), "!");
    }

    #[test]
    fn test_trailing_zeros_not_whole_line() {
        // Only the full-width run gets the shorthand
        assert_eq!(compress("F000\n", 2), "GFI0");
        assert_eq!(compress("0FFF\n", 2), "G0IF");
    }

    #[test]
    fn test_repeated_line() {
        assert_eq!(compress("0F0F\n0F0F\n0F0F\n", 2), "G0GFG0GF::");
    }

    #[test]
    fn test_repeat_compares_encoded_text() {
        // A blank line after a distinct line is not a repeat
        assert_eq!(compress("0F\n00\n00\nFF\nFF\n", 1), "G0GF,:!:");
    }

    #[test]
    fn test_white_8x2_scenario() {
        assert_eq!(compress("00\n00\n", 1), ",:");
    }

    #[test]
    fn test_long_blank_line() {
        let rows = format!("{}\n", "0".repeat(1000));
        assert_eq!(compress(&rows, 500), ",");
    }

    #[test]
    fn test_long_mixed_line() {
        let rows = format!("{}F\n", "0".repeat(999));
        assert_eq!(compress(&rows, 500), "zzoY0GF");
    }

    #[test]
    fn test_decompress_shorthand() {
        assert_eq!(decompress(",", 2, 1).unwrap(), vec![0x00, 0x00]);
        assert_eq!(decompress("!", 2, 1).unwrap(), vec![0xFF, 0xFF]);
        assert_eq!(
            decompress("G0GFG0GF:", 2, 2).unwrap(),
            vec![0x0F, 0x0F, 0x0F, 0x0F]
        );
    }

    #[test]
    fn test_decompress_partial_fill() {
        // ',' after data fills the rest of the row
        assert_eq!(decompress("HF,", 2, 1).unwrap(), vec![0xFF, 0x00]);
        assert_eq!(decompress("A!", 2, 1).unwrap(), vec![0xAF, 0xFF]);
    }

    #[test]
    fn test_decompress_bare_digits() {
        assert_eq!(decompress("A5C3", 2, 1).unwrap(), vec![0xA5, 0xC3]);
    }

    #[test]
    fn test_decompress_errors() {
        assert!(matches!(decompress(":", 1, 1), Err(ZplError::InvalidCommand(_))));
        assert!(matches!(decompress("IF", 1, 1), Err(ZplError::InvalidCommand(_))));
        assert!(matches!(decompress("G0", 1, 1), Err(ZplError::InvalidCommand(_))));
        assert!(matches!(decompress("H0Z", 1, 1), Err(ZplError::InvalidCommand(_))));
        assert!(matches!(decompress(",", 1, 2), Err(ZplError::InvalidCommand(_))));
        assert!(matches!(decompress(",H", 1, 1), Err(ZplError::InvalidCommand(_))));
    }

    #[test]
    fn test_compress_then_decompress() {
        let rows = "0123\nFFFF\nFFFF\n0000\n00A0\n0000\n";
        let data = compress(rows, 2);
        assert_eq!(
            decompress(&data, 2, 6).unwrap(),
            vec![0x01, 0x23, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0xA0, 0x00, 0x00]
        );
    }
}
