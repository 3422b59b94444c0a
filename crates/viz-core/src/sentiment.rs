//! Lexicon-based sentiment scoring.
//!
//! Produces a compound polarity score in [-1.0, 1.0] per sentence from a
//! valence lexicon of everyday conversational vocabulary, with intensity
//! modifiers and a negation window.

use std::collections::{HashMap, HashSet};

// ── Lexicon ───────────────────────────────────────────────────────────────────

/// Word valences, intensity modifiers and negation words.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valence: HashMap<String, f64>,
    modifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Build the default conversational lexicon.
    pub fn new() -> Self {
        let positive = [
            ("love", 0.8),
            ("loved", 0.8),
            ("like", 0.4),
            ("great", 0.7),
            ("good", 0.5),
            ("nice", 0.5),
            ("best", 0.75),
            ("better", 0.45),
            ("awesome", 0.8),
            ("amazing", 0.8),
            ("wonderful", 0.8),
            ("beautiful", 0.7),
            ("fantastic", 0.8),
            ("excellent", 0.8),
            ("perfect", 0.8),
            ("happy", 0.7),
            ("glad", 0.6),
            ("excited", 0.7),
            ("fun", 0.6),
            ("funny", 0.55),
            ("haha", 0.5),
            ("lol", 0.45),
            ("thanks", 0.5),
            ("thank", 0.5),
            ("congrats", 0.75),
            ("congratulations", 0.75),
            ("win", 0.6),
            ("won", 0.6),
            ("yay", 0.7),
            ("cool", 0.45),
            ("sweet", 0.5),
            ("cute", 0.55),
            ("enjoy", 0.55),
            ("enjoyed", 0.55),
            ("proud", 0.65),
            ("yes", 0.3),
            ("sure", 0.3),
            ("welcome", 0.4),
        ];
        let negative = [
            ("hate", -0.8),
            ("hated", -0.8),
            ("bad", -0.5),
            ("terrible", -0.8),
            ("awful", -0.8),
            ("horrible", -0.85),
            ("worst", -0.85),
            ("worse", -0.55),
            ("sad", -0.6),
            ("angry", -0.7),
            ("mad", -0.6),
            ("upset", -0.6),
            ("annoying", -0.55),
            ("annoyed", -0.55),
            ("boring", -0.5),
            ("bored", -0.45),
            ("tired", -0.35),
            ("sick", -0.5),
            ("hurt", -0.55),
            ("cry", -0.6),
            ("crying", -0.65),
            ("sorry", -0.3),
            ("miss", -0.3),
            ("missed", -0.3),
            ("lost", -0.5),
            ("lose", -0.5),
            ("fight", -0.55),
            ("fighting", -0.6),
            ("wrong", -0.45),
            ("stupid", -0.65),
            ("dumb", -0.6),
            ("ugh", -0.5),
            ("no", -0.25),
            ("never", -0.3),
            ("problem", -0.4),
            ("worried", -0.5),
            ("worry", -0.45),
            ("scared", -0.6),
            ("afraid", -0.55),
        ];

        let mut valence = HashMap::new();
        for (word, score) in positive.iter().chain(negative.iter()) {
            valence.insert((*word).to_string(), *score);
        }

        let modifiers = [
            ("very", 1.5),
            ("really", 1.4),
            ("so", 1.3),
            ("extremely", 1.8),
            ("totally", 1.4),
            ("absolutely", 1.6),
            ("super", 1.5),
            ("quite", 1.2),
            ("pretty", 1.15),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("barely", 0.6),
            ("kinda", 0.8),
            ("bit", 0.75),
        ]
        .into_iter()
        .map(|(w, m)| (w.to_string(), m))
        .collect();

        let negations = [
            "not", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "cant", "can't",
            "couldnt", "couldn't", "wont", "won't", "wouldnt", "wouldn't", "isnt", "isn't",
            "arent", "aren't", "wasnt", "wasn't", "werent", "weren't", "havent", "haven't",
            "hasnt", "hasn't", "aint", "ain't", "neither", "nobody", "nothing",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self {
            valence,
            modifiers,
            negations,
        }
    }

    /// Valence of a word, or `None` when the word carries no sentiment.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valence.get(&word.to_lowercase()).copied()
    }

    /// Intensity multiplier of a modifier word, if it is one.
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(&word.to_lowercase()).copied()
    }

    /// `true` when the word negates what follows it.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

// ── SentimentAnalyzer ─────────────────────────────────────────────────────────

/// Scores message text for polarity.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
    /// How many tokens after a negation word still get their valence flipped.
    negation_window: usize,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
            negation_window: 3,
        }
    }

    /// Replace the default lexicon.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Compound polarity score of one sentence, in [-1.0, 1.0].
    ///
    /// The score is the clamped mean valence of the sentiment-bearing words,
    /// after intensity modifiers and negation flips. Sentences with no
    /// sentiment-bearing words score 0.0.
    pub fn score_sentence(&self, sentence: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0u32;
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut tokens_since_negation = 0usize;

        for token in sentence.split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if word.is_empty() {
                continue;
            }

            if self.lexicon.is_negation(word) {
                negation_active = true;
                tokens_since_negation = 0;
                continue;
            }

            if let Some(modifier) = self.lexicon.modifier(word) {
                current_modifier = modifier;
                continue;
            }

            if let Some(valence) = self.lexicon.valence(word) {
                let mut score = valence * current_modifier;
                if negation_active && tokens_since_negation < self.negation_window {
                    // Flip with damping; "not great" is milder than "terrible".
                    score = -score * 0.8;
                }
                total += score;
                hits += 1;
                current_modifier = 1.0;
            }

            if negation_active {
                tokens_since_negation += 1;
                if tokens_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        if hits == 0 {
            0.0
        } else {
            (total / f64::from(hits)).clamp(-1.0, 1.0)
        }
    }

    /// Score of a whole message: the mean of its sentence scores.
    ///
    /// A message with no sentences (empty text) scores 0.0.
    pub fn score_message(&self, text: &str) -> f64 {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return 0.0;
        }
        let total: f64 = sentences.iter().map(|s| self.score_sentence(s)).sum();
        (total / sentences.len() as f64).clamp(-1.0, 1.0)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text into sentences on `.`, `!` and `?`, dropping empty fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
