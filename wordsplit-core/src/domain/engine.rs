//! Compound decomposition by dynamic programming
//!
//! The engine looks for a sequence of dictionary words, optionally joined by
//! interfixes, that covers the whole input. For every end position, taken
//! left to right, it records the best decomposition of the text before it:
//! candidate boundaries are scanned from that end toward the left, the text
//! right of a boundary must be a dictionary word (after an optional
//! interfix), and the text left of it must already have a recorded
//! decomposition. Only boundaries within one dictionary word plus one
//! interfix of the end are scanned, so the work grows linearly with the word.
//!
//! Among complete decompositions the engine keeps the one with the fewest
//! fragments. Ties go to the longer first fragment, then the longer second
//! fragment, and so on; a remaining tie keeps the candidate found first.
//!
//! All lengths are counted in `char`s.

use std::cmp::Ordering;
use std::sync::Arc;

use smallvec::SmallVec;

use super::dictionary::Dictionary;
use super::interfix::{InterfixMode, InterfixPolicy};

/// One fragment of a decomposed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Dictionary spelling of the fragment
    pub fragment: String,
    /// Exact input text the fragment covers
    pub surface: String,
    /// Interfix between the previous fragment and this one
    pub interfix: Option<String>,
}

/// Structured result of a successful decomposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    parts: Vec<Part>,
}

impl Decomposition {
    /// Fragments in input order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of fragments, interfixes excluded
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false
    ///
    /// Decompositions only come out of [`DecompositionEngine::decompose`],
    /// which returns `None` for anything shorter than two parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Dictionary spellings of all fragments
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.fragment.as_str())
    }

    /// Interfixes and surface texts joined back together
    ///
    /// This always equals the word that was decomposed.
    pub fn surface(&self) -> String {
        let mut text = String::new();
        for part in &self.parts {
            if let Some(interfix) = &part.interfix {
                text.push_str(interfix);
            }
            text.push_str(&part.surface);
        }
        text
    }

    /// Render as a fragment list according to `mode`
    ///
    /// Hidden mode returns dictionary spellings. The visible modes return
    /// surface text, so their output concatenates back to the input.
    pub fn render(&self, mode: InterfixMode) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.parts.len() * 2);

        for part in &self.parts {
            match (&part.interfix, mode) {
                (_, InterfixMode::Hidden) => {
                    out.push(part.fragment.clone());
                    continue;
                }
                (Some(interfix), InterfixMode::Separate) => out.push(interfix.clone()),
                (Some(interfix), InterfixMode::Attached) => {
                    if let Some(previous) = out.last_mut() {
                        previous.push_str(interfix);
                    }
                }
                (None, _) => {}
            }
            out.push(part.surface.clone());
        }

        out
    }
}

/// Decomposition engine over a shared dictionary
#[derive(Debug, Clone)]
pub struct DecompositionEngine {
    dictionary: Arc<Dictionary>,
    interfixes: InterfixPolicy,
    min_fragment_length: usize,
    fold_initial_case: bool,
}

impl DecompositionEngine {
    /// Create an engine; a minimum length of zero is treated as one
    pub fn new(
        dictionary: Arc<Dictionary>,
        interfixes: InterfixPolicy,
        min_fragment_length: usize,
    ) -> Self {
        Self {
            dictionary,
            interfixes,
            min_fragment_length: min_fragment_length.max(1),
            fold_initial_case: false,
        }
    }

    /// Retry failed lookups with the first letter's case swapped
    ///
    /// German nouns are capitalized in the dictionary but lowercase inside a
    /// compound ("Arbeits*zeit*" vs "Zeit").
    pub fn with_initial_case_folding(mut self, enabled: bool) -> Self {
        self.fold_initial_case = enabled;
        self
    }

    /// The dictionary this engine matches against
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// The interfix policy in use
    pub fn interfixes(&self) -> &InterfixPolicy {
        &self.interfixes
    }

    /// Minimum fragment length in characters
    pub fn min_fragment_length(&self) -> usize {
        self.min_fragment_length
    }

    /// Split `word` into fragments
    ///
    /// Never fails: the empty string yields no fragments and a word without
    /// a valid decomposition is returned unchanged.
    pub fn split(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }

        match self.decompose(word) {
            Some(decomposition) => decomposition.render(self.interfixes.mode()),
            None => vec![word.to_string()],
        }
    }

    /// Find the preferred decomposition of `word` into two or more fragments
    pub fn decompose(&self, word: &str) -> Option<Decomposition> {
        let char_len = word.chars().count();
        if char_len < self.min_fragment_length || self.dictionary.contains(word) {
            return None;
        }

        let mut search = Search::new(self, word);
        let chain = search.run()?;
        if chain.len() < 2 {
            return None;
        }

        let decomposition = search.materialize(&chain);
        log::trace!(
            "Decomposed {:?} into {:?}",
            word,
            decomposition.fragments().collect::<Vec<_>>()
        );
        Some(decomposition)
    }

    fn lookup(&self, fragment: &str) -> Option<&str> {
        if let Some(entry) = self.dictionary.get(fragment) {
            return Some(entry);
        }
        if !self.fold_initial_case {
            return None;
        }

        let variant = swap_initial_case(fragment)?;
        self.dictionary.get(&variant)
    }
}

fn swap_initial_case(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let first = chars.next()?;

    let mut swapped: String = if first.is_lowercase() {
        first.to_uppercase().collect()
    } else if first.is_uppercase() {
        first.to_lowercase().collect()
    } else {
        return None;
    };
    swapped.push_str(chars.as_str());
    Some(swapped)
}

/// Matched fragment, in char positions
#[derive(Debug, Clone, Copy)]
struct Piece<'d> {
    /// Start of the interfix, or of the fragment when there is none
    start: usize,
    fragment_start: usize,
    end: usize,
    entry: &'d str,
}

impl Piece<'_> {
    fn fragment_len(&self) -> usize {
        self.end - self.fragment_start
    }
}

type Chain<'d> = SmallVec<[Piece<'d>; 4]>;

/// Fewest pieces first, then longer pieces earlier
fn compare_chains(a: &Chain<'_>, b: &Chain<'_>) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| y.fragment_len().cmp(&x.fragment_len()))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    })
}

/// Best decomposition of a prefix: its last piece and the number of pieces
///
/// The rest of the chain is found through the step recorded at
/// `piece.start`.
#[derive(Debug, Clone, Copy)]
struct Step<'d> {
    piece: Piece<'d>,
    pieces: usize,
}

/// State for one top-level decomposition
struct Search<'e, 'w> {
    engine: &'e DecompositionEngine,
    word: &'w str,
    /// Byte offset of every char position, plus the end of the word
    offsets: Vec<usize>,
    /// Best step covering `word[..end]`, indexed by `end`
    memo: Vec<Option<Step<'e>>>,
    /// Longest dictionary word in chars
    longest_fragment: usize,
    /// Longest interfix in chars
    longest_interfix: usize,
}

impl<'e, 'w> Search<'e, 'w> {
    fn new(engine: &'e DecompositionEngine, word: &'w str) -> Self {
        let offsets: Vec<usize> = word
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(word.len()))
            .collect();
        let memo = vec![None; offsets.len()];
        let longest_interfix = engine
            .interfixes
            .candidates()
            .first()
            .map_or(0, |candidate| candidate.chars().count());

        Self {
            engine,
            word,
            offsets,
            memo,
            longest_fragment: engine.dictionary.longest_word_chars(),
            longest_interfix,
        }
    }

    fn slice(&self, start: usize, end: usize) -> &'w str {
        &self.word[self.offsets[start]..self.offsets[end]]
    }

    /// Fill the memo left to right and return the chain covering the word
    fn run(&mut self) -> Option<Chain<'e>> {
        let len = self.offsets.len() - 1;
        for end in 1..=len {
            self.memo[end] = self.best_step(end);
        }

        self.memo[len].map(|last| self.chain(last))
    }

    fn best_step(&self, end: usize) -> Option<Step<'e>> {
        let engine = self.engine;
        let min = engine.min_fragment_length;

        // A case-folded lookup never matches a surface longer than its entry
        if end >= min && end <= self.longest_fragment {
            if let Some(entry) = engine.lookup(self.slice(0, end)) {
                let piece = Piece {
                    start: 0,
                    fragment_start: 0,
                    end,
                    entry,
                };
                return Some(Step { piece, pieces: 1 });
            }
        }

        if end < 2 * min {
            return None;
        }

        let reach = self.longest_fragment + self.longest_interfix;
        let lowest = min.max(end.saturating_sub(reach));

        let mut best: Option<Step<'e>> = None;
        for boundary in (lowest..=end - min).rev() {
            let Some(prefix) = self.memo[boundary] else {
                continue;
            };
            let Some(piece) = self.match_suffix(boundary, end) else {
                continue;
            };
            let candidate = Step {
                piece,
                pieces: prefix.pieces + 1,
            };

            let better = best
                .as_ref()
                .map_or(true, |current| self.compare(&candidate, current) == Ordering::Less);
            if better {
                best = Some(candidate);
            }
        }

        best
    }

    fn compare(&self, a: &Step<'e>, b: &Step<'e>) -> Ordering {
        a.pieces
            .cmp(&b.pieces)
            .then_with(|| compare_chains(&self.chain(*a), &self.chain(*b)))
    }

    /// Follow recorded steps back from `last` to the start of the word
    fn chain(&self, last: Step<'e>) -> Chain<'e> {
        let mut chain = Chain::new();
        let mut step = Some(last);

        while let Some(current) = step {
            chain.push(current.piece);
            step = match current.piece.start {
                0 => None,
                start => self.memo[start],
            };
        }

        chain.reverse();
        chain
    }

    /// Match `word[boundary..end]` directly, or after a leading interfix
    fn match_suffix(&self, boundary: usize, end: usize) -> Option<Piece<'e>> {
        let engine = self.engine;
        let suffix = self.slice(boundary, end);

        if let Some(entry) = engine.lookup(suffix) {
            return Some(Piece {
                start: boundary,
                fragment_start: boundary,
                end,
                entry,
            });
        }

        for interfix in engine.interfixes.prefixes_of(suffix) {
            let fragment_start = boundary + interfix.chars().count();
            if end - fragment_start < engine.min_fragment_length {
                continue;
            }
            if let Some(entry) = engine.lookup(self.slice(fragment_start, end)) {
                return Some(Piece {
                    start: boundary,
                    fragment_start,
                    end,
                    entry,
                });
            }
        }

        None
    }

    fn materialize(&self, chain: &Chain<'e>) -> Decomposition {
        let parts = chain
            .iter()
            .map(|piece| Part {
                fragment: piece.entry.to_string(),
                surface: self.slice(piece.fragment_start, piece.end).to_string(),
                interfix: (piece.start < piece.fragment_start)
                    .then(|| self.slice(piece.start, piece.fragment_start).to_string()),
            })
            .collect();

        Decomposition { parts }
    }
}
