// Edit-distance-one suggestion generation
//
// Candidates are produced in a fixed order (case change, deletion,
// adjacent transposition, replacement, insertion, split into two words)
// and kept when the speller accepts them.

use hashbrown::HashSet;

/// Upper bound on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 15;

/// Collects distinct accepted candidates up to [`MAX_SUGGESTIONS`].
struct Collector<'a, F: Fn(&str) -> bool> {
    word: &'a str,
    is_correct: F,
    seen: HashSet<String>,
    out: Vec<String>,
}

impl<F: Fn(&str) -> bool> Collector<'_, F> {
    fn full(&self) -> bool {
        self.out.len() >= MAX_SUGGESTIONS
    }

    fn offer(&mut self, candidate: String) {
        if self.full() || candidate == self.word || self.seen.contains(&candidate) {
            return;
        }
        let accepted = match candidate.split_once(' ') {
            Some((left, right)) => (self.is_correct)(left) && (self.is_correct)(right),
            None => (self.is_correct)(&candidate),
        };
        if accepted {
            self.out.push(candidate.clone());
        }
        self.seen.insert(candidate);
    }
}

/// Suggestions for `word`.
///
/// `alphabet` lists the characters tried for replacement and insertion, in
/// order of preference.
pub fn suggest(word: &str, alphabet: &[char], is_correct: impl Fn(&str) -> bool) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let mut c = Collector {
        word,
        is_correct,
        seen: HashSet::new(),
        out: Vec::new(),
    };
    let join = |parts: &[&[char]]| -> String { parts.iter().flat_map(|p| p.iter()).collect() };

    c.offer(capitalize(word));

    for i in 0..chars.len() {
        c.offer(join(&[&chars[..i], &chars[i + 1..]]));
    }

    for i in 1..chars.len() {
        let mut swapped = chars.clone();
        swapped.swap(i - 1, i);
        c.offer(swapped.into_iter().collect());
    }

    for i in 0..chars.len() {
        for &a in alphabet {
            if c.full() {
                return c.out;
            }
            if a != chars[i] {
                c.offer(join(&[&chars[..i], &[a], &chars[i + 1..]]));
            }
        }
    }

    for i in 0..=chars.len() {
        for &a in alphabet {
            if c.full() {
                return c.out;
            }
            c.offer(join(&[&chars[..i], &[a], &chars[i..]]));
        }
    }

    for i in 1..chars.len() {
        c.offer(join(&[&chars[..i], &[' '], &chars[i..]]));
    }

    c.out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
