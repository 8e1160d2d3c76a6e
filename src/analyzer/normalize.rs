use crate::core::model::Token;

/// Line the analyzer prints after each analyzed input.
pub const EOS_MARKER: &str = "EOS";

/// Value the dictionary uses for an unknown feature.
const PLACEHOLDER: &str = "*";

// Column layout of the dictionary's feature string. A dictionary with a
// different column order produces wrong fallbacks here, not errors.
const POS_FIELD: usize = 0;
const FORM_FIELD: usize = 6;
const BASE_FIELD: usize = 7;
const READING_FIELD: usize = 9;

/// Convert raw analyzer output into tokens, one per non-blank, non-`EOS` line
/// that has a surface.
pub fn parse_tokens(output: &str) -> Vec<Token> {
    output
        .lines()
        .filter(|line| !line.is_empty() && *line != EOS_MARKER)
        .map(token_from_line)
        .filter(|token| !token.surface.is_empty())
        .collect()
}

/// Build a token from a single `surface\tf0,f1,...` analyzer line.
///
/// Missing or placeholder feature fields never fail: `base` and `reading` fall
/// back to the normalized form and then to the surface itself.
pub fn token_from_line(line: &str) -> Token {
    let (surface, feature) = line.split_once('\t').unwrap_or((line, ""));
    let fields: Vec<&str> = if feature.is_empty() {
        Vec::new()
    } else {
        feature.split(',').collect()
    };

    let pos = fields.get(POS_FIELD).copied().unwrap_or("");
    let base = known_field(&fields, BASE_FIELD)
        .or_else(|| known_field(&fields, FORM_FIELD))
        .unwrap_or(surface);
    let reading = known_field(&fields, READING_FIELD)
        .or_else(|| known_field(&fields, FORM_FIELD))
        .unwrap_or(surface);

    Token {
        surface: surface.to_string(),
        base: base.to_string(),
        pos: pos.to_string(),
        reading: reading.to_string(),
    }
}

fn known_field<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields.get(idx).copied().filter(|value| *value != PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIDIC_LINE: &str =
        "食べ\t動詞,一般,*,*,下一段-バ行,連用形-一般,タベル,食べる,食べ,タベ,食べ,タベ,和";

    #[test]
    fn full_feature_line_uses_base_and_reading_columns() {
        let token = token_from_line(UNIDIC_LINE);

        assert_eq!(token.surface, "食べ");
        assert_eq!(token.pos, "動詞");
        assert_eq!(token.base, "食べる");
        assert_eq!(token.reading, "タベ");
    }

    #[test]
    fn base_prefers_field_seven_over_field_six() {
        let token = token_from_line("行っ\t動詞,*,*,*,*,*,イク,行く");
        assert_eq!(token.base, "行く");
        // No field 9, so reading uses field 6.
        assert_eq!(token.reading, "イク");
    }

    #[test]
    fn placeholder_fields_fall_through() {
        let token = token_from_line("ｘ\t記号,*,*,*,*,*,エックス,*,*,*");
        assert_eq!(token.base, "エックス");
        assert_eq!(token.reading, "エックス");

        let token = token_from_line("ｘ\t記号,*,*,*,*,*,*,*,*,*");
        assert_eq!(token.pos, "記号");
        assert_eq!(token.base, "ｘ");
        assert_eq!(token.reading, "ｘ");
    }

    #[test]
    fn short_feature_lists_fall_back_to_surface() {
        let token = token_from_line("ぴえん\t感動詞,一般");
        assert_eq!(token.pos, "感動詞");
        assert_eq!(token.base, "ぴえん");
        assert_eq!(token.reading, "ぴえん");
    }

    #[test]
    fn line_without_tab_has_no_features() {
        let token = token_from_line("こんにちは");
        assert_eq!(token.surface, "こんにちは");
        assert_eq!(token.pos, "");
        assert_eq!(token.base, "こんにちは");
        assert_eq!(token.reading, "こんにちは");
    }

    #[test]
    fn only_first_tab_splits_surface() {
        let token = token_from_line("a\tb\tc,d");
        assert_eq!(token.surface, "a");
        assert_eq!(token.pos, "b\tc");
    }

    #[test]
    fn skips_blank_lines_and_eos_markers() {
        let output = "猫\t名詞\n\nが\t助詞\nEOS\n鳴く\t動詞\nEOS\n";

        let tokens = parse_tokens(output);

        let surfaces: Vec<_> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["猫", "が", "鳴く"]);
    }

    #[test]
    fn token_count_matches_content_lines() {
        let output = "a\tX\na\tX\nEOS\nb\nEOS\n";
        let expected = output
            .lines()
            .filter(|line| !line.is_empty() && *line != EOS_MARKER)
            .count();

        let tokens = parse_tokens(output);

        assert_eq!(tokens.len(), expected);
        // Duplicates are kept in order.
        assert_eq!(tokens[0], tokens[1]);
    }

    #[test]
    fn lines_without_surface_are_dropped() {
        assert!(parse_tokens("\t名詞,*,*\nEOS\n").is_empty());

        let tokens = parse_tokens("猫\t名詞\n\tX\nが\t助詞\nEOS\n");
        let surfaces: Vec<_> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["猫", "が"]);
    }

    #[test]
    fn empty_output_yields_no_tokens() {
        assert!(parse_tokens("").is_empty());
        assert!(parse_tokens("EOS\n").is_empty());
    }
}
