//! Keyword responder — the deterministic rule table behind the companion's replies.
//!
//! Classification is a pure function: lower-case the input, scan the
//! ordered rule list, first rule with any keyword contained as a
//! substring wins. No randomness, no external state.

/// One keyword-set-to-reply mapping. Rules earlier in the table take
/// precedence over later ones.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// The greeting every fresh conversation is seeded with.
pub const GREETING: &str = "Hello! I'm your AI wellness companion. I'm here to listen, \
    support, and help you navigate your mental wellness journey. How are you feeling today?";

/// Reply used when no rule matches.
pub const FALLBACK_REPLY: &str = "Thank you for sharing that with me. I'm here to listen \
    and support you. Can you tell me more about how you've been feeling lately? Remember, \
    there's no judgment here - this is your safe space to express yourself.";

/// Pre-canned prompts the frontend can feed straight into the engine.
pub const QUICK_RESPONSES: &[&str] = &[
    "I'm feeling anxious",
    "I had a good day",
    "I'm feeling overwhelmed",
    "I need some motivation",
];

/// Ordered precedence: sadness > anxiety/stress > anger > positive > fatigue.
pub const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        keywords: &["sad", "down", "depressed"],
        reply: "I hear that you're feeling down, and I want you to know that your feelings \
            are valid. It's okay to have difficult days. Would you like to try a quick \
            breathing exercise together, or would you prefer to talk about what's making \
            you feel this way?",
    },
    ResponseRule {
        keywords: &["anxious", "worried", "stress"],
        reply: "Anxiety can feel overwhelming, but remember that you're not alone in this. \
            Let's take a moment to ground ourselves. Can you name 5 things you can see \
            around you right now? This is a technique called 5-4-3-2-1 grounding that can \
            help calm your mind.",
    },
    ResponseRule {
        keywords: &["angry", "mad", "frustrated"],
        reply: "I understand you're feeling frustrated. Anger is a natural emotion that \
            tells us something important needs attention. Would it help to talk about \
            what's causing these feelings? Sometimes expressing what's bothering us can \
            help us process it better.",
    },
    ResponseRule {
        keywords: &["good", "great", "happy"],
        reply: "That's wonderful to hear! I'm so glad you're feeling positive. What's been \
            contributing to your good mood today? Celebrating these moments can help us \
            remember what brings us joy.",
    },
    ResponseRule {
        keywords: &["tired", "exhausted"],
        reply: "Feeling tired can affect our emotional well-being too. Are you getting \
            enough sleep? Sometimes fatigue can make everything feel more difficult. \
            Let's talk about some healthy sleep habits that might help you feel more \
            rested.",
    },
];

/// Classify a user utterance into a reply. Total — always returns a
/// string, falling back to [`FALLBACK_REPLY`] when no rule matches.
pub fn classify(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    RESPONSE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anxiety_input_gets_anxiety_reply() {
        let reply = classify("I feel so anxious and stressed");
        assert_eq!(reply, RESPONSE_RULES[1].reply);
    }

    #[test]
    fn test_positive_input_gets_positive_reply() {
        let reply = classify("I'm feeling really good today");
        assert_eq!(reply, RESPONSE_RULES[3].reply);
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        assert_eq!(classify("purple elephants"), FALLBACK_REPLY);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = classify("I feel so anxious and stressed");
        for _ in 0..10 {
            assert_eq!(classify("I feel so anxious and stressed"), first);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("SO TIRED"), classify("so tired"));
        assert_eq!(classify("I am SAD"), RESPONSE_RULES[0].reply);
    }

    #[test]
    fn test_earlier_rule_wins() {
        // "sad" (rule 0) and "stress" (rule 1) both present — sadness wins.
        let reply = classify("I'm sad and stressed");
        assert_eq!(reply, RESPONSE_RULES[0].reply);
    }

    #[test]
    fn test_substring_match() {
        // "stressed" contains the keyword "stress".
        assert_eq!(classify("totally stressed out"), RESPONSE_RULES[1].reply);
    }

    #[test]
    fn test_quick_responses_all_classify() {
        // Every quick response should hit a rule or the fallback without panicking.
        for qr in QUICK_RESPONSES {
            assert!(!classify(qr).is_empty());
        }
    }
}
