use crate::surface::WidthOracle;

/// Break text into the lines it occupies in a column `column_width` wide.
///
/// Every hard newline in `text` ends a line. A source line that is narrower than the
/// column is kept as it is; a wider one is wrapped greedily at spaces, with each word
/// but the last keeping its trailing space. A word that is wider than the column on
/// its own is emitted on a line of its own the moment it is reached and overflows;
/// the words already gathered for the current line are not flushed by it. With `extrapolate` set nothing is
/// wrapped and every source line becomes exactly one line.
///
/// A line fits only if it is strictly narrower than the column, so a line exactly as
/// wide as the column wraps.
///
/// `column_width` must be positive.
pub fn break_lines<W: WidthOracle + ?Sized>(
    oracle: &W,
    text: &str,
    column_width: f32,
    extrapolate: bool,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if extrapolate || oracle.width_of(line) < column_width {
            lines.push(line.to_string());
            continue;
        }
        wrap_words(oracle, line, column_width, &mut lines);
    }

    lines
}

fn wrap_words<W: WidthOracle + ?Sized>(
    oracle: &W,
    line: &str,
    column_width: f32,
    lines: &mut Vec<String>,
) {
    let mut current = String::new();
    let mut current_width = 0.0;

    let mut words = line.split(' ').peekable();
    while let Some(word) = words.next() {
        let word = if words.peek().is_some() {
            format!("{word} ")
        } else {
            word.to_string()
        };
        let word_width = oracle.width_of(&word);

        if word_width > column_width {
            // emitted as soon as it is seen; the words gathered so far keep packing
            log::debug!("word {word:?} is wider than the column ({word_width} > {column_width})");
            lines.push(word);
            continue;
        }

        if current_width + word_width < column_width {
            current.push_str(&word);
            current_width += word_width;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word;
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is one unit wide
    struct CharWidths;

    impl WidthOracle for CharWidths {
        fn width_of(&self, text: &str) -> f32 {
            text.chars().count() as f32
        }
    }

    fn words_of(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|line| line.split(' '))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn wraps_before_the_word_that_would_fill_the_column() {
        let lines = break_lines(&CharWidths, "The quick brown fox", 11.0, false);
        assert_eq!(lines, vec!["The quick ", "brown fox"]);
    }

    #[test]
    fn short_lines_are_kept_verbatim() {
        let lines = break_lines(&CharWidths, "  two  spaces ", 20.0, false);
        assert_eq!(lines, vec!["  two  spaces "]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let word = "Supercalifragilisticexpialidocious";
        let lines = break_lines(&CharWidths, word, 10.0, false);
        assert_eq!(lines, vec![word]);
    }

    #[test]
    fn oversized_word_leaves_the_gathered_words_alone() {
        let lines = break_lines(&CharWidths, "aa HUGEWORDXX bb", 6.0, false);
        assert_eq!(lines, vec!["HUGEWORDXX ", "aa bb"]);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn exact_fit_wraps() {
        // "abcd" is exactly as wide as the column, so it is not a fast-path fit
        // and has to go through word packing on its own
        assert_eq!(break_lines(&CharWidths, "abcd", 4.0, false), vec!["abcd"]);
        assert_eq!(
            break_lines(&CharWidths, "ab cd", 5.0, false),
            vec!["ab ", "cd"]
        );
    }

    #[test]
    fn hard_newlines_are_independent_lines() {
        let text = "first line\n\nthird\r\nfourth\n";
        let lines = break_lines(&CharWidths, text, 100.0, false);
        assert_eq!(lines, vec!["first line", "", "third", "fourth"]);
    }

    #[test]
    fn a_lone_trailing_carriage_return_is_dropped() {
        assert_eq!(break_lines(&CharWidths, "abc\r", 100.0, false), vec!["abc"]);
        assert_eq!(break_lines(&CharWidths, "abc\r", 100.0, true), vec!["abc"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(break_lines(&CharWidths, "", 10.0, false).is_empty());
        assert!(break_lines(&CharWidths, "", 10.0, true).is_empty());
    }

    #[test]
    fn extrapolate_never_wraps() {
        let text = "a very long line that would normally wrap\nshort";
        let lines = break_lines(&CharWidths, text, 5.0, true);
        assert_eq!(
            lines,
            vec!["a very long line that would normally wrap", "short"]
        );
    }

    #[test]
    fn wrapped_lines_stay_narrower_than_the_column() {
        let text = lipsum::lipsum(300);
        for width in [8.0, 13.0, 20.0, 37.5, 80.0] {
            for line in break_lines(&CharWidths, &text, width, false) {
                let single_word = line.trim_end().split(' ').count() == 1;
                assert!(
                    CharWidths.width_of(&line) < width || single_word,
                    "{line:?} overflows {width}"
                );
            }
        }
    }

    #[test]
    fn wrapping_preserves_word_order() {
        let text = lipsum::lipsum(250);
        let expected: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let longest = text
            .split(' ')
            .map(|word| CharWidths.width_of(word) + 1.0)
            .fold(0.0, f32::max);
        for width in [longest, longest + 7.0, 31.0_f32.max(longest), 64.0] {
            let lines = break_lines(&CharWidths, &text, width, false);
            assert_eq!(words_of(&lines), expected, "width {width}");
        }
    }

    #[test]
    fn narrow_columns_keep_every_word() {
        let text = lipsum::lipsum(250);
        let mut expected: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        expected.sort();
        for width in [3.0, 5.0, 12.0] {
            let mut words = words_of(&break_lines(&CharWidths, &text, width, false));
            words.sort();
            assert_eq!(words, expected, "width {width}");
        }
    }

    #[test]
    fn no_empty_lines_come_from_wrapping() {
        let text = lipsum::lipsum(120);
        for width in [3.0, 6.0, 9.0] {
            let lines = break_lines(&CharWidths, &text, width, false);
            assert!(lines.iter().all(|l| !l.is_empty()));
        }
    }
}
