//! Utterance emotion classification — keyword/structure scoring over text.
//!
//! Pure and deterministic: no LLM call, no state. Each rule carries a set of
//! pattern matchers and a salience weight; a rule's score is weight times
//! the number of matchers that hit. The rule table is scanned in declaration
//! order and a later rule only wins with a strictly greater score, so ties
//! resolve to the earlier label.

use super::label::Emotion;
use tracing::debug;

// ── Matchers ───────────────────────────────────────────────

/// A single predicate over the lower-cased utterance.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Substring match: keyword, phrase, or emoji.
    Contains(&'static str),
    /// The character occurs at least twice anywhere in the text.
    Repeated(char),
    /// The utterance begins with this word (followed by a non-letter or end).
    Prefix(&'static str),
}

impl Matcher {
    fn matches(&self, lower: &str) -> bool {
        match self {
            Matcher::Contains(s) => lower.contains(s),
            Matcher::Repeated(c) => lower.matches(*c).count() >= 2,
            Matcher::Prefix(w) => starts_with_word(lower, w),
        }
    }
}

/// True when `lower` begins with `word` as a whole word (ignoring leading
/// whitespace), e.g. "how " matches but "however" prefix "how" does not
/// unless followed by a non-letter.
fn starts_with_word(lower: &str, word: &str) -> bool {
    let trimmed = lower.trim_start();
    if !trimmed.starts_with(word) {
        return false;
    }
    match trimmed[word.len()..].chars().next() {
        None => true,
        Some(c) => !c.is_alphanumeric(),
    }
}

// ── Rule table ─────────────────────────────────────────────

struct EmotionRule {
    emotion: Emotion,
    weight: u32,
    matchers: &'static [Matcher],
}

use Matcher::{Contains, Prefix, Repeated};

/// Declaration order doubles as the tie-break order. Weights reflect
/// salience: strong moods score 3, most others 2, curious only 1 so its
/// broad wh-prefix cue does not drown out real signals.
const RULES: &[EmotionRule] = &[
    EmotionRule {
        emotion: Emotion::Excited,
        weight: 3,
        matchers: &[
            Contains("excited"),
            Contains("can't wait"),
            Contains("cant wait"),
            Contains("let's go"),
            Contains("woohoo"),
            Contains("yay"),
            Contains("awesome"),
            Contains("incredible"),
            Contains("omg"),
            Contains("🤩"),
            Contains("🎉"),
            Contains("🔥"),
            Repeated('!'),
        ],
    },
    EmotionRule {
        emotion: Emotion::Joyful,
        weight: 2,
        matchers: &[
            Contains("happy"),
            Contains("joy"),
            Contains("wonderful"),
            Contains("delighted"),
            Contains("cheerful"),
            Contains("haha"),
            Contains("lol"),
            Contains("😄"),
            Contains("😊"),
            Contains("😁"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Grateful,
        weight: 2,
        matchers: &[
            Contains("thank"),
            Contains("grateful"),
            Contains("appreciate"),
            Contains("means a lot"),
            Contains("you're the best"),
            Contains("🙏"),
            Contains("💖"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Sad,
        weight: 3,
        matchers: &[
            Contains("sad"),
            Contains("unhappy"),
            Contains("depressed"),
            Contains("crying"),
            Contains("heartbroken"),
            Contains("lonely"),
            Contains("miss you"),
            Contains("miserable"),
            Contains("😢"),
            Contains("😭"),
            Contains("💔"),
            Contains("😞"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Anxious,
        weight: 3,
        matchers: &[
            Contains("anxious"),
            Contains("nervous"),
            Contains("worried"),
            Contains("scared"),
            Contains("afraid"),
            Contains("panic"),
            Contains("stressed"),
            Contains("overwhelmed"),
            Contains("😰"),
            Contains("😨"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Angry,
        weight: 3,
        matchers: &[
            Contains("angry"),
            Contains("furious"),
            Contains("mad at"),
            Contains("hate"),
            Contains("annoyed"),
            Contains("outraged"),
            Contains("fed up"),
            Contains("sick of"),
            Contains("😡"),
            Contains("🤬"),
            Contains("😤"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Confused,
        weight: 2,
        matchers: &[
            Contains("confused"),
            Contains("don't understand"),
            Contains("dont understand"),
            Contains("makes no sense"),
            Contains("doesn't make sense"),
            Contains("what do you mean"),
            Contains("lost me"),
            Contains("🤔"),
            Contains("😕"),
            Repeated('?'),
        ],
    },
    EmotionRule {
        emotion: Emotion::Curious,
        weight: 1,
        matchers: &[
            Contains("curious"),
            Contains("i wonder"),
            Contains("interesting"),
            Contains("tell me more"),
            Prefix("what"),
            Prefix("why"),
            Prefix("how"),
            Prefix("when"),
            Prefix("where"),
            Prefix("who"),
            Prefix("which"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Tired,
        weight: 2,
        matchers: &[
            Contains("tired"),
            Contains("exhausted"),
            Contains("sleepy"),
            Contains("worn out"),
            Contains("drained"),
            Contains("no energy"),
            Contains("need sleep"),
            Contains("😴"),
            Contains("🥱"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Bored,
        weight: 2,
        matchers: &[
            Contains("bored"),
            Contains("boring"),
            Contains("nothing to do"),
            Contains("so dull"),
            Contains("tedious"),
            Contains("meh"),
            Contains("😒"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Proud,
        weight: 2,
        matchers: &[
            Contains("proud"),
            Contains("accomplished"),
            Contains("nailed it"),
            Contains("i did it"),
            Contains("achievement"),
            Contains("pulled it off"),
            Contains("💪"),
            Contains("🏆"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Surprised,
        weight: 2,
        matchers: &[
            Contains("surprised"),
            Contains("can't believe"),
            Contains("cant believe"),
            Contains("no way"),
            Contains("unbelievable"),
            Contains("didn't expect"),
            Contains("didnt expect"),
            Contains("shocked"),
            Contains("😲"),
            Contains("😱"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Playful,
        weight: 2,
        matchers: &[
            Contains("just kidding"),
            Contains("teasing"),
            Contains("silly"),
            Contains("playful"),
            Contains("hehe"),
            Contains("prank"),
            Contains("😜"),
            Contains("😏"),
            Contains("😉"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Romantic,
        weight: 3,
        matchers: &[
            Contains("love you"),
            Contains("in love"),
            Contains("crush on"),
            Contains("romantic"),
            Contains("darling"),
            Contains("sweetheart"),
            Contains("date night"),
            Contains("❤"),
            Contains("💕"),
            Contains("😍"),
        ],
    },
    EmotionRule {
        emotion: Emotion::Disappointed,
        weight: 2,
        matchers: &[
            Contains("disappointed"),
            Contains("let down"),
            Contains("letdown"),
            Contains("bummer"),
            Contains("expected better"),
            Contains("what a shame"),
            Contains("underwhelming"),
            Contains("😔"),
        ],
    },
];

/// Prefixes that mark a help-seeking utterance when no rule scored.
/// The wh-words are listed for completeness but in practice the Curious
/// rule's prefix matchers claim those first.
const HELP_PREFIXES: &[&str] = &[
    "what", "why", "how", "when", "where", "who", "which", "can you", "could you", "would you",
    "help", "assist", "please",
];

// ── Classification ─────────────────────────────────────────

/// Classify the emotional tone of an utterance.
///
/// Total over all string input: no signal falls through to `Helpful` (for
/// help-seeking phrasing) and finally `Neutral`. Empty text is `Neutral`.
pub fn classify(text: &str) -> Emotion {
    let lower = text.to_lowercase();

    let mut best: Option<(Emotion, u32)> = None;
    for rule in RULES {
        let hits = rule.matchers.iter().filter(|m| m.matches(&lower)).count() as u32;
        let score = hits * rule.weight;
        if score == 0 {
            continue;
        }
        // Strictly greater only: earlier rules win ties.
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((rule.emotion, score));
        }
    }

    if let Some((emotion, score)) = best {
        debug!(emotion = %emotion, score, "utterance classified");
        return emotion;
    }

    if HELP_PREFIXES.iter().any(|p| starts_with_word(&lower, p)) {
        return Emotion::Helpful;
    }

    Emotion::Neutral
}

/// Per-emotion non-zero scores in declaration order, for host-side
/// debugging and telemetry. `classify` is the argmax of this list.
pub fn score_breakdown(text: &str) -> Vec<(Emotion, u32)> {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .filter_map(|rule| {
            let hits = rule.matchers.iter().filter(|m| m.matches(&lower)).count() as u32;
            let score = hits * rule.weight;
            (score > 0).then_some((rule.emotion, score))
        })
        .collect()
}
