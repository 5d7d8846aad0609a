//! Mock flashcard generation from a topic string.
//!
//! Topics are matched against a small fixed taxonomy by keyword. A match
//! samples cards from that topic's built-in fact table; anything else gets
//! numbered placeholder cards. The random source is supplied by the caller
//! so tests can seed it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Fewest cards a single generate request may ask for.
pub const MIN_GENERATE_COUNT: i32 = 1;

/// Most cards a single generate request may ask for.
pub const MAX_GENERATE_COUNT: i32 = 20;

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// Request body for card generation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateCardsRequest {
    #[validate(custom(function = "crate::deck::not_blank"))]
    pub topic: String,
    #[validate(range(min = 1, max = 20))]
    pub count: i32,
}

/// A candidate card. Nothing is persisted until the caller creates a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCard {
    pub front_text: String,
    pub back_text: String,
}

/// Topic families with a built-in fact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicSet {
    Animals,
    Chemistry,
    Math,
    History,
    Generic,
}

impl TopicSet {
    /// Fact table for the topic, or `None` for [`TopicSet::Generic`].
    fn facts(self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            Self::Animals => Some(&ANIMAL_FACTS),
            Self::Chemistry => Some(&CHEMISTRY_FACTS),
            Self::Math => Some(&MATH_FACTS),
            Self::History => Some(&HISTORY_FACTS),
            Self::Generic => None,
        }
    }
}

/* --------------------------------------------------------------------------
Generation
-------------------------------------------------------------------------- */

/// Classify a topic by keyword. The first matching rule wins.
pub fn classify_topic(topic: &str) -> TopicSet {
    let lower = topic.to_lowercase();
    let has_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has_any(&["animal", "zoo"]) {
        TopicSet::Animals
    } else if has_any(&["chem", "acid", "base"]) {
        TopicSet::Chemistry
    } else if has_any(&["math", "algebra"]) {
        TopicSet::Math
    } else if has_any(&["history"]) {
        TopicSet::History
    } else {
        TopicSet::Generic
    }
}

/// Validate a generate request and produce its cards.
pub fn generate_for_request<R: Rng>(
    request: &GenerateCardsRequest,
    rng: &mut R,
) -> Result<Vec<GeneratedCard>, CoreError> {
    request.validate()?;
    generate_cards(&request.topic, request.count, rng)
}

/// Generate `count` cards for `topic`.
///
/// `count` must lie in `MIN_GENERATE_COUNT..=MAX_GENERATE_COUNT`.
pub fn generate_cards<R: Rng>(
    topic: &str,
    count: i32,
    rng: &mut R,
) -> Result<Vec<GeneratedCard>, CoreError> {
    if topic.trim().is_empty() {
        return Err(CoreError::ValidationFailed("Topic is required".to_string()));
    }
    if !(MIN_GENERATE_COUNT..=MAX_GENERATE_COUNT).contains(&count) {
        return Err(CoreError::ValidationFailed(format!(
            "Count must be between {MIN_GENERATE_COUNT} and {MAX_GENERATE_COUNT}"
        )));
    }

    let count = count as usize;
    let cards = match classify_topic(topic).facts() {
        Some(facts) => sample_facts(facts, count, rng),
        None => generic_cards(topic, count),
    };
    Ok(cards)
}

/// Draw `min(count, facts.len())` entries without replacement.
///
/// Each draw redraws on collision until it finds an unused index or every
/// index has already been used, so the loop always terminates.
fn sample_facts<R: Rng>(
    facts: &[(&str, &str)],
    count: usize,
    rng: &mut R,
) -> Vec<GeneratedCard> {
    let take = count.min(facts.len());
    let mut used: Vec<usize> = Vec::with_capacity(take);
    let mut cards = Vec::with_capacity(take);

    for _ in 0..take {
        let mut index = rng.random_range(0..facts.len());
        while used.contains(&index) && used.len() < facts.len() {
            index = rng.random_range(0..facts.len());
        }
        used.push(index);

        let (front, back) = facts[index];
        cards.push(GeneratedCard {
            front_text: front.to_string(),
            back_text: back.to_string(),
        });
    }

    cards
}

fn generic_cards(topic: &str, count: usize) -> Vec<GeneratedCard> {
    (1..=count)
        .map(|i| GeneratedCard {
            front_text: format!("What is {topic} {i}?"),
            back_text: format!("Definition or answer for {topic} {i}"),
        })
        .collect()
}

/* --------------------------------------------------------------------------
Fact tables
-------------------------------------------------------------------------- */

static ANIMAL_FACTS: [(&str, &str); 20] = [
    ("What is the largest mammal?", "Blue whale"),
    ("What is the fastest land animal?", "Cheetah"),
    ("What animal is known as the king of the jungle?", "Lion"),
    ("What is a group of lions called?", "Pride"),
    ("What is the smallest mammal?", "Bumblebee bat"),
    ("What animal has the longest neck?", "Giraffe"),
    ("What is a baby kangaroo called?", "Joey"),
    ("What is the largest bird?", "Ostrich"),
    ("What animal is known for changing colors?", "Chameleon"),
    ("What is a group of elephants called?", "Herd"),
    ("What is the largest reptile?", "Saltwater crocodile"),
    ("What animal sleeps the most?", "Koala"),
    ("What is the national animal of India?", "Tiger"),
    ("What animal has the best memory?", "Elephant"),
    ("What is a group of crows called?", "Murder"),
    ("What is the smallest bird?", "Bee hummingbird"),
    ("What animal is known for its trunk?", "Elephant"),
    ("What is the largest fish?", "Whale shark"),
    ("What animal is the symbol of wisdom?", "Owl"),
    ("What is a group of wolves called?", "Pack"),
];

static CHEMISTRY_FACTS: [(&str, &str); 20] = [
    ("What is the chemical symbol for water?", "H2O"),
    ("What is the pH of a neutral solution?", "7"),
    ("What is the most abundant element in the universe?", "Hydrogen"),
    ("What is the chemical formula for table salt?", "NaCl"),
    ("What is the pH of an acid?", "Less than 7"),
    ("What is the pH of a base?", "Greater than 7"),
    ("What is the chemical symbol for gold?", "Au"),
    ("What is the atomic number of carbon?", "6"),
    ("What is the chemical formula for carbon dioxide?", "CO2"),
    ("What is the most common gas in Earth's atmosphere?", "Nitrogen"),
    ("What is the chemical symbol for iron?", "Fe"),
    ("What is the chemical formula for methane?", "CH4"),
    ("What is the process of rusting called?", "Oxidation"),
    ("What is the chemical symbol for oxygen?", "O"),
    ("What is the pH scale range?", "0 to 14"),
    ("What is the chemical formula for glucose?", "C6H12O6"),
    ("What is the most reactive element?", "Francium"),
    ("What is the chemical symbol for silver?", "Ag"),
    ("What is the process of splitting water called?", "Electrolysis"),
    ("What is the chemical formula for ammonia?", "NH3"),
];

static MATH_FACTS: [(&str, &str); 20] = [
    ("What is 2 + 2?", "4"),
    ("What is the square root of 16?", "4"),
    ("What is 5 × 5?", "25"),
    ("What is the value of π (pi)?", "3.14159..."),
    ("What is 10 ÷ 2?", "5"),
    ("What is the square of 9?", "81"),
    ("What is 3 to the power of 3?", "27"),
    ("What is the square root of 25?", "5"),
    ("What is 7 × 8?", "56"),
    ("What is 100 ÷ 4?", "25"),
    ("What is the area of a circle formula?", "πr²"),
    ("What is the perimeter of a square?", "4 × side"),
    ("What is 15 + 15?", "30"),
    ("What is 12 × 12?", "144"),
    ("What is 50 ÷ 5?", "10"),
    ("What is the square root of 36?", "6"),
    ("What is 9 × 7?", "63"),
    ("What is 20 ÷ 4?", "5"),
    ("What is the area of a rectangle?", "length × width"),
    ("What is 6 to the power of 2?", "36"),
];

static HISTORY_FACTS: [(&str, &str); 20] = [
    ("When did World War II end?", "1945"),
    ("Who was the first President of the United States?", "George Washington"),
    ("When did the American Civil War begin?", "1861"),
    ("Who wrote the Declaration of Independence?", "Thomas Jefferson"),
    ("When did the Berlin Wall fall?", "1989"),
    ("Who was the first man on the moon?", "Neil Armstrong"),
    ("When did World War I begin?", "1914"),
    ("Who was the leader of Nazi Germany?", "Adolf Hitler"),
    ("When did the Renaissance period begin?", "14th century"),
    ("Who was the first female Prime Minister of the UK?", "Margaret Thatcher"),
    ("When did the French Revolution begin?", "1789"),
    ("Who discovered America?", "Christopher Columbus"),
    ("When did the Industrial Revolution begin?", "18th century"),
    ("Who was the first Emperor of Rome?", "Augustus"),
    ("When did the Cold War end?", "1991"),
    ("Who was the first person to circumnavigate the globe?", "Ferdinand Magellan"),
    ("When did the Great Depression begin?", "1929"),
    ("Who was the first woman to win a Nobel Prize?", "Marie Curie"),
    ("When did the Russian Revolution occur?", "1917"),
    ("Who was the first person to reach the South Pole?", "Roald Amundsen"),
];

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn classification_is_first_match_wins() {
        assert_eq!(classify_topic("Animal Kingdom"), TopicSet::Animals);
        assert_eq!(classify_topic("ZOO trip"), TopicSet::Animals);
        assert_eq!(classify_topic("Organic Chemistry"), TopicSet::Chemistry);
        assert_eq!(classify_topic("acids"), TopicSet::Chemistry);
        assert_eq!(classify_topic("Database design"), TopicSet::Chemistry);
        assert_eq!(classify_topic("Linear Algebra"), TopicSet::Math);
        assert_eq!(classify_topic("World History"), TopicSet::History);
        // "animal" outranks "history".
        assert_eq!(classify_topic("animal history"), TopicSet::Animals);
        // "chem" outranks "math".
        assert_eq!(classify_topic("math for chemists"), TopicSet::Chemistry);
        assert_eq!(classify_topic("quantum foam"), TopicSet::Generic);
    }

    #[test]
    fn animal_topic_samples_distinct_cards_from_table() {
        let cards = generate_cards("Animal Kingdom", 5, &mut seeded()).unwrap();
        assert_eq!(cards.len(), 5);

        let fronts: HashSet<_> = cards.iter().map(|c| c.front_text.as_str()).collect();
        assert_eq!(fronts.len(), 5, "sampled cards must be distinct");

        for card in &cards {
            assert!(ANIMAL_FACTS
                .iter()
                .any(|(q, a)| *q == card.front_text && *a == card.back_text));
        }
    }

    #[test]
    fn full_count_uses_every_entry_once() {
        let cards = generate_cards("chemistry", 20, &mut seeded()).unwrap();
        assert_eq!(cards.len(), 20);
        let fronts: HashSet<_> = cards.iter().map(|c| c.front_text.clone()).collect();
        assert_eq!(fronts.len(), 20);
    }

    #[test]
    fn sampling_terminates_when_count_exceeds_table() {
        let cards = sample_facts(&MATH_FACTS, 25, &mut seeded());
        assert_eq!(cards.len(), 20);
    }

    #[test]
    fn same_seed_gives_same_cards() {
        let a = generate_cards("history", 6, &mut seeded()).unwrap();
        let b = generate_cards("history", 6, &mut seeded()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generic_topic_produces_numbered_cards() {
        let cards = generate_cards("quantum foam", 3, &mut seeded()).unwrap();
        assert_eq!(
            cards,
            vec![
                GeneratedCard {
                    front_text: "What is quantum foam 1?".into(),
                    back_text: "Definition or answer for quantum foam 1".into(),
                },
                GeneratedCard {
                    front_text: "What is quantum foam 2?".into(),
                    back_text: "Definition or answer for quantum foam 2".into(),
                },
                GeneratedCard {
                    front_text: "What is quantum foam 3?".into(),
                    back_text: "Definition or answer for quantum foam 3".into(),
                },
            ]
        );
    }

    #[test]
    fn generic_topic_keeps_original_casing() {
        let cards = generate_cards("Rust Traits", 1, &mut seeded()).unwrap();
        assert_eq!(cards[0].front_text, "What is Rust Traits 1?");
    }

    #[test]
    fn count_out_of_range_is_rejected() {
        assert_matches!(
            generate_cards("zoo", 0, &mut seeded()),
            Err(CoreError::ValidationFailed(_))
        );
        assert_matches!(
            generate_cards("zoo", 21, &mut seeded()),
            Err(CoreError::ValidationFailed(_))
        );
    }

    #[test]
    fn blank_topic_is_rejected() {
        assert_matches!(
            generate_cards("   ", 3, &mut seeded()),
            Err(CoreError::ValidationFailed(_))
        );
    }

    #[test]
    fn request_validation_runs_before_generation() {
        let request = GenerateCardsRequest {
            topic: "zoo".into(),
            count: 50,
        };
        assert_matches!(
            generate_for_request(&request, &mut seeded()),
            Err(CoreError::ValidationFailed(_))
        );
    }
}
