use log::debug;

use super::dataset::{DataItem, Dataset};
use crate::error::{NeuralError, Result};

/// Digit images are 16x16 binary pixels.
pub const SIDE: usize = 16;
pub const PIXELS: usize = SIDE * SIDE;
/// One-hot digit columns following the pixels.
pub const DIGITS: usize = 10;

/// Parses Semeion-format text: one sample per line, whitespace-separated
/// reals, 256 pixels followed by 10 one-hot digit columns. Further columns
/// are ignored; blank lines are skipped.
pub fn parse(text: &str) -> Result<Dataset> {
    let mut items = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        items.push(parse_line(index + 1, line)?);
    }
    debug!("parsed {} semeion samples", items.len());
    Dataset::new(items)
}

/// Reads and parses a Semeion file.
pub fn load(path: &str) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

fn parse_line(line: usize, text: &str) -> Result<DataItem> {
    let values = text
        .split_whitespace()
        .take(PIXELS + DIGITS)
        .map(|field| {
            field.parse::<f64>().map_err(|e| NeuralError::Parse {
                line,
                message: format!("invalid number {field:?}: {e}"),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.len() < PIXELS + DIGITS {
        return Err(NeuralError::Parse {
            line,
            message: format!("expected {} values, found {}", PIXELS + DIGITS, values.len()),
        });
    }

    let (input, target) = values.split_at(PIXELS);
    Ok(DataItem::new(input.to_vec(), target.to_vec()))
}

/// Draws a digit image as 16 rows of `*` (lit) and ` ` (dark).
pub fn render(pixels: &[f64]) -> String {
    pixels
        .chunks(SIDE)
        .map(|row| {
            row.iter()
                .map(|&p| if p.round() >= 1.0 { '*' } else { ' ' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A Semeion line with a vertical bar in column `digit` labeled `digit`.
    pub(crate) fn sample_line(digit: usize) -> String {
        let mut fields = Vec::with_capacity(PIXELS + DIGITS);
        for i in 0..PIXELS {
            fields.push(if i % SIDE == digit { "1.0000" } else { "0.0000" });
        }
        for d in 0..DIGITS {
            fields.push(if d == digit { "1" } else { "0" });
        }
        fields.join(" ")
    }

    #[test]
    fn parses_lines_and_skips_blanks() {
        let text = format!("{}\n\n{} \n", sample_line(3), sample_line(7));
        let data = parse(&text).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.input_width(), PIXELS);
        assert_eq!(data.target_width(), DIGITS);
        assert_eq!(data.items()[0].target[3], 1.0);
        assert_eq!(data.items()[1].input[7], 1.0);
        assert_eq!(data.items()[1].input[8], 0.0);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = format!("{} 9 9 9", sample_line(0));
        let data = parse(&text).unwrap();
        assert_eq!(data.target_width(), DIGITS);
    }

    #[test]
    fn short_line_reports_line_number() {
        let text = format!("{}\n1 0 1", sample_line(1));
        match parse(&text) {
            Err(NeuralError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("found 3"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_number_is_a_parse_error() {
        let text = sample_line(2).replacen("0.0000", "zero", 1);
        assert!(matches!(parse(&text), Err(NeuralError::Parse { line: 1, .. })));
    }

    #[test]
    fn empty_text_is_an_empty_dataset() {
        assert!(matches!(parse("\n\n"), Err(NeuralError::EmptyDataset)));
    }

    #[test]
    fn render_draws_rows() {
        let data = parse(&sample_line(0)).unwrap();
        let picture = render(&data.items()[0].input);
        let rows: Vec<&str> = picture.lines().collect();
        assert_eq!(rows.len(), SIDE);
        assert_eq!(rows[0], format!("*{}", " ".repeat(SIDE - 1)));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(load("/nonexistent/semeion.data"), Err(NeuralError::Io(_))));
    }
}
