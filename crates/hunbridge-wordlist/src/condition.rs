// Affix rule conditions
//
// A condition is a sequence of elements, each matching one character:
// a literal, `.` for any character, or a bracketed set `[abc]` / `[^abc]`.
// Suffix conditions are matched against the end of the root, prefix
// conditions against its start.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Element {
    Any,
    Char(char),
    Set { negated: bool, chars: Vec<char> },
}

impl Element {
    fn matches(&self, c: char) -> bool {
        match self {
            Element::Any => true,
            Element::Char(expected) => *expected == c,
            Element::Set { negated, chars } => chars.contains(&c) != *negated,
        }
    }
}

/// Error for a condition with an unterminated `[` set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unterminated character set in condition {0:?}")]
pub struct ConditionError(pub String);

/// Parsed affix condition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Condition {
    elements: Vec<Element>,
}

impl Condition {
    pub fn parse(pattern: &str) -> Result<Self, ConditionError> {
        if pattern == "." {
            return Ok(Self::default());
        }

        let mut elements = Vec::new();
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '.' => elements.push(Element::Any),
                '[' => {
                    let mut set = Vec::new();
                    let mut negated = false;
                    let mut closed = false;
                    for s in chars.by_ref() {
                        match s {
                            ']' => {
                                closed = true;
                                break;
                            }
                            '^' if set.is_empty() && !negated => negated = true,
                            _ => set.push(s),
                        }
                    }
                    if !closed {
                        return Err(ConditionError(pattern.to_string()));
                    }
                    elements.push(Element::Set { negated, chars: set });
                }
                _ => elements.push(Element::Char(c)),
            }
        }
        Ok(Self { elements })
    }

    /// Number of characters the condition inspects.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the last characters of `word` satisfy the condition.
    pub fn matches_end(&self, word: &str) -> bool {
        let tail: Vec<char> = word.chars().rev().take(self.len()).collect();
        tail.len() == self.len()
            && self
                .elements
                .iter()
                .rev()
                .zip(tail)
                .all(|(element, c)| element.matches(c))
    }

    /// Whether the first characters of `word` satisfy the condition.
    pub fn matches_start(&self, word: &str) -> bool {
        let head: Vec<char> = word.chars().take(self.len()).collect();
        head.len() == self.len()
            && self
                .elements
                .iter()
                .zip(head)
                .all(|(element, c)| element.matches(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_matches_everything() {
        let c = Condition::parse(".").unwrap();
        assert!(c.is_empty());
        assert!(c.matches_end(""));
        assert!(c.matches_start("word"));
    }

    #[test]
    fn literal_suffix() {
        let c = Condition::parse("y").unwrap();
        assert!(c.matches_end("happy"));
        assert!(!c.matches_end("happen"));
    }

    #[test]
    fn negated_set_before_literal() {
        let c = Condition::parse("[^aeiou]y").unwrap();
        assert_eq!(c.len(), 2);
        assert!(c.matches_end("try"));
        assert!(!c.matches_end("play"));
        assert!(!c.matches_end("y"));
    }

    #[test]
    fn positive_set_at_start() {
        let c = Condition::parse("[ai]").unwrap();
        assert!(c.matches_start("able"));
        assert!(!c.matches_start("uncle"));
    }

    #[test]
    fn non_ascii_characters() {
        let c = Condition::parse("[äö]").unwrap();
        assert!(c.matches_end("pöytä"));
        assert!(!c.matches_end("talo"));
    }

    #[test]
    fn unterminated_set_is_an_error() {
        assert_eq!(
            Condition::parse("[ab"),
            Err(ConditionError("[ab".to_string()))
        );
    }
}
