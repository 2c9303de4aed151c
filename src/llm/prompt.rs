//! Prompt builder for Bengali spelling refinement.
//!
//! [`PromptBuilder`] constructs two kinds of prompts:
//! * **Flat** (`build`) — single string, for Ollama native `/api/generate`.
//! * **Chat** (`build_chat`) — `(system_msg, user_msg)` tuple for any
//!   OpenAI-compatible `/v1/chat/completions` endpoint.
//!
//! The input handed to the LLM is the transliteration engine's output: a
//! rule-generated Bengali draft whose spellings may be phonetically plausible
//! but orthographically wrong.  The prompt therefore asks for spelling and
//! orthography refinement only — grammar, word order and word count must
//! stay untouched, so the refined text remains interchangeable with the
//! engine's own output.

// ---------------------------------------------------------------------------
// System instruction
// ---------------------------------------------------------------------------

/// Covers ambiguous sibilants (শ/ষ/স), nasals (ন/ণ), vowel length (ি/ী),
/// and জ/য — the classes of error a phonetic rule engine cannot resolve.
const SYSTEM_INSTRUCTION: &str = "\
You are a Bengali spelling refinement assistant.
The input is Bengali text produced by a rule-based phonetic transliterator
from Latin-script \"Banglish\" typing.  Task: fix the spellings.

Rules:
1. Correct phonetically plausible but misspelled Bengali words
   (শ/ষ/স, ন/ণ, ি/ী, ু/ূ, জ/য and similar confusions).
2. Never change the word order, add words, or remove words.
3. Preserve punctuation, digits, whitespace, and any non-Bengali fragment
   exactly as given.
4. Reply with ONLY the corrected text — no explanation.
5. If the text is already correct, return it unchanged.";

// ---------------------------------------------------------------------------
// Few-shot examples
// ---------------------------------------------------------------------------

const FEW_SHOT_EXAMPLES: &str = "
Examples:
Input: \"আমি ভালো আচি\"
Output: \"আমি ভালো আছি\"

Input: \"তুমি কথায় যাচ্চ\"
Output: \"তুমি কোথায় যাচ্ছ\"

Input: \"বাংলা আমার মাতরিভাশা\"
Output: \"বাংলা আমার মাতৃভাষা\"
";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds refinement prompts in either flat or chat-message format.
///
/// # Example
/// ```rust
/// use banglish::llm::PromptBuilder;
///
/// let builder = PromptBuilder::new();
/// let (system, user) = builder.build_chat("আমি ভালো আচি", None);
/// assert!(system.contains("Banglish"));
/// assert!(user.contains("আমি ভালো আচি"));
/// ```
#[derive(Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a **flat** prompt string (suitable for Ollama `/api/generate`).
    ///
    /// Structure (in order):
    /// 1. System instruction
    /// 2. Few-shot examples
    /// 3. Context (if provided) — surrounding editor text
    /// 4. Transliterated draft + "Corrected:" cue
    pub fn build(&self, draft: &str, context: Option<&str>) -> String {
        let mut prompt = String::with_capacity(2048);
        prompt.push_str(SYSTEM_INSTRUCTION);
        prompt.push_str(FEW_SHOT_EXAMPLES);
        if let Some(ctx) = context {
            prompt.push_str("\nSurrounding text:\n");
            prompt.push_str(ctx);
            prompt.push('\n');
        }
        prompt.push_str(&format!("\nTransliterated draft:\n{}\n\nCorrected:\n", draft));
        prompt
    }

    /// Build a **(system_msg, user_msg)** pair (for OpenAI-compatible APIs).
    ///
    /// * `system_msg` — the refinement instruction.
    /// * `user_msg` — few-shot examples + optional context + the draft.
    pub fn build_chat(&self, draft: &str, context: Option<&str>) -> (String, String) {
        let system_msg = SYSTEM_INSTRUCTION.to_string();

        let mut user_msg = String::with_capacity(1024);
        user_msg.push_str(FEW_SHOT_EXAMPLES);
        if let Some(ctx) = context {
            user_msg.push_str("\nSurrounding text:\n");
            user_msg.push_str(ctx);
            user_msg.push('\n');
        }
        user_msg.push_str(&format!("\nTransliterated draft:\n{}\n\nCorrected:\n", draft));

        (system_msg, user_msg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
