//! The typography mapper
//!
//! This module provides the scan engine: a left-to-right walk over an
//! immutable text snapshot that emits a display directive for every
//! ASCII punctuation run matched by the enabled rules. The text is
//! never modified; the host decides what to do with the directives.

use crate::config::Config;
use crate::directive::Directive;
use crate::error::Result;
use crate::rules::{self, PatternRule};

/// Compiled typography mapper
///
/// Holds the priority-ordered rule list built from one configuration
/// snapshot. Construction validates the configuration; scanning never
/// fails after that. To change the configuration, build a new mapper
/// and rescan.
pub struct Mapper {
    rules: Vec<PatternRule>,
}

impl Mapper {
    /// Compile a mapper from a configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            rules: rules::build_rules(config)?,
        })
    }

    /// Scan a text snapshot, yielding directives lazily from left to
    /// right
    ///
    /// At each position the rules are tried in priority order and the
    /// first match wins; the scan then resumes just past the replaced
    /// span, so emitted directives never overlap. The iterator holds
    /// no state beyond its position - calling `scan` again restarts
    /// from the beginning with identical results.
    ///
    /// Offsets are relative to `text`; a host scanning a viewport
    /// slice maps them back itself.
    pub fn scan<'m, 't>(&'m self, text: &'t str) -> Scan<'m, 't> {
        Scan {
            rules: &self.rules,
            text,
            pos: 0,
        }
    }

    /// Collect the full directive set for a text
    pub fn scan_all(&self, text: &str) -> Vec<Directive> {
        self.scan(text).collect()
    }
}

/// Lazy directive iterator over one text snapshot
pub struct Scan<'m, 't> {
    rules: &'m [PatternRule],
    text: &'t str,
    pos: usize,
}

impl Iterator for Scan<'_, '_> {
    type Item = Directive;

    fn next(&mut self) -> Option<Directive> {
        while self.pos < self.text.len() {
            for rule in self.rules {
                if let Some(directive) = rule.match_at(self.text, self.pos) {
                    // Resume after the replaced span; context characters
                    // past it are scanned again as anchors
                    self.pos = directive.end;
                    return Some(directive);
                }
            }

            // No rule fired here - advance one character
            self.pos += 1;
            while self.pos < self.text.len() && !self.text.is_char_boundary(self.pos) {
                self.pos += 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{
        Category, EM_DASH, EN_DASH, LEFT_DOUBLE, LEFT_SINGLE, RIGHT_DOUBLE, RIGHT_SINGLE,
        SENTENCE_SPACE,
    };

    fn mapper(config: &Config) -> Mapper {
        Mapper::new(config).unwrap()
    }

    fn default_mapper() -> Mapper {
        mapper(&Config::default())
    }

    #[test]
    fn test_empty_and_plain_text() {
        let mapper = default_mapper();
        assert!(mapper.scan_all("").is_empty());
        assert!(mapper.scan_all("no punctuation here at all").is_empty());
    }

    #[test]
    fn test_double_quotes() {
        let mapper = default_mapper();
        let directives = mapper.scan_all("she said \"hello\" twice");
        assert_eq!(
            directives,
            vec![
                Directive::new(9, 10, LEFT_DOUBLE),
                Directive::new(15, 16, RIGHT_DOUBLE),
            ]
        );
    }

    #[test]
    fn test_single_quotes() {
        let mapper = default_mapper();
        let directives = mapper.scan_all("a 'quoted phrase' here");
        assert_eq!(
            directives,
            vec![
                Directive::new(2, 3, LEFT_SINGLE),
                Directive::new(16, 17, RIGHT_SINGLE),
            ]
        );
    }

    #[test]
    fn test_inner_apostrophe() {
        let mapper = default_mapper();
        let directives = mapper.scan_all("it's Ada's book");
        assert_eq!(
            directives,
            vec![
                Directive::new(2, 3, RIGHT_SINGLE),
                Directive::new(8, 9, RIGHT_SINGLE),
            ]
        );
    }

    #[test]
    fn test_exception_precedence() {
        // The fragment rule must beat the generic opening rule
        let mapper = default_mapper();
        let directives = mapper.scan_all("'bout the\" house'");
        assert_eq!(directives[0], Directive::new(0, 1, RIGHT_SINGLE));
    }

    #[test]
    fn test_exception_boundary_required() {
        let mapper = default_mapper();
        // 'tis closes, 'tissue opens
        assert_eq!(
            mapper.scan_all("'tis so")[0],
            Directive::new(0, 1, RIGHT_SINGLE)
        );
        assert_eq!(
            mapper.scan_all("'tissue box")[0],
            Directive::new(0, 1, LEFT_SINGLE)
        );
    }

    #[test]
    fn test_en_dash() {
        let mapper = default_mapper();
        assert_eq!(mapper.scan_all("a--b"), vec![Directive::new(1, 3, EN_DASH)]);
    }

    #[test]
    fn test_em_dash() {
        let mapper = default_mapper();
        assert_eq!(mapper.scan_all("a---b"), vec![Directive::new(1, 4, EM_DASH)]);
    }

    #[test]
    fn test_long_hyphen_run_unmatched() {
        // Four or more hyphens: neither dash rule may fire anywhere in
        // the run
        let mapper = default_mapper();
        assert!(mapper.scan_all("a----b").is_empty());
        assert!(mapper.scan_all("a-----b").is_empty());
    }

    #[test]
    fn test_dash_at_text_end() {
        let mapper = default_mapper();
        assert_eq!(mapper.scan_all("a--"), vec![Directive::new(1, 3, EN_DASH)]);
        assert_eq!(mapper.scan_all("a---"), vec![Directive::new(1, 4, EM_DASH)]);
    }

    #[test]
    fn test_boundary_quotes_unmatched() {
        // No neighbor on the required side, no heuristic, no directive
        let mapper = default_mapper();
        assert!(mapper.scan_all("\"").is_empty());
        assert!(mapper.scan_all("'").is_empty());
    }

    #[test]
    fn test_non_overlap() {
        let mapper = default_mapper();
        let texts = [
            "He said \"it's a '90s thing,\" she said--really.",
            "''''",
            "\"\"\"\"",
            "--------",
            "'bout 'em 'cause 'round 'twas 'tis",
            "a'b'c'd--e---f",
        ];
        for text in texts {
            let directives = mapper.scan_all(text);
            for pair in directives.windows(2) {
                assert!(!pair[0].overlaps(&pair[1]), "overlap in {:?}", text);
                assert!(pair[0].end <= pair[1].start, "out of order in {:?}", text);
            }
        }
    }

    #[test]
    fn test_scan_restartable() {
        let mapper = default_mapper();
        let text = "say \"hi\"--now";
        let first: Vec<_> = mapper.scan(text).collect();
        let second: Vec<_> = mapper.scan(text).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_scan_is_lazy() {
        let mapper = default_mapper();
        let mut scan = mapper.scan("'one' and 'two'");
        assert_eq!(scan.next(), Some(Directive::new(0, 1, LEFT_SINGLE)));
        assert_eq!(scan.next(), Some(Directive::new(4, 5, RIGHT_SINGLE)));
    }

    #[test]
    fn test_category_isolation() {
        let text = "a--b \"c\" 'd'";
        let all = default_mapper().scan_all(text);
        assert_eq!(all.len(), 5);

        for disabled in [Category::DoubleQuote, Category::SingleQuote, Category::EnDash] {
            let mut config = Config::default();
            config.set_enabled(disabled, false);
            let remaining = mapper(&config).scan_all(text);
            let expected: Vec<_> = all
                .iter()
                .copied()
                .filter(|d| Category::of_replacement(d.replacement) != Some(disabled))
                .collect();
            assert_eq!(remaining, expected, "disabling {:?}", disabled);
        }
    }

    #[test]
    fn test_sentence_spacing() {
        let mut config = Config::default();
        config.sentence_spacing = true;
        let mapper = mapper(&config);

        assert_eq!(
            mapper.scan_all("One. Two"),
            vec![Directive::new(4, 5, SENTENCE_SPACE)]
        );
        // Already double-spaced: leave it alone
        assert!(mapper.scan_all("One.  Two").is_empty());
        // Trailing space with nothing after it
        assert!(mapper.scan_all("One. ").is_empty());
    }

    #[test]
    fn test_sentence_spacing_after_closing_quote() {
        let mut config = Config::default();
        config.sentence_spacing = true;
        let mapper = mapper(&config);

        let directives = mapper.scan_all("\"Done.\" Next");
        assert!(directives.contains(&Directive::new(7, 8, SENTENCE_SPACE)));
    }

    #[test]
    fn test_sentence_spacing_off_by_default() {
        let mapper = default_mapper();
        assert!(mapper.scan_all("One. Two").is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        // Non-ASCII neighbors are outside the heuristic classes; the
        // scan must still walk them safely
        let mapper = default_mapper();
        let directives = mapper.scan_all("café--naïve");
        assert_eq!(directives, vec![Directive::new(5, 7, EN_DASH)]);
    }

    #[test]
    fn test_end_to_end_example() {
        let text = "He said \"it's a '90s thing,\" she said--really.";
        let directives = default_mapper().scan_all(text);
        assert_eq!(
            directives,
            vec![
                Directive::new(8, 9, LEFT_DOUBLE),
                Directive::new(11, 12, RIGHT_SINGLE),
                Directive::new(16, 17, RIGHT_SINGLE),
                Directive::new(27, 28, RIGHT_DOUBLE),
                Directive::new(37, 39, EN_DASH),
            ]
        );
    }
}
