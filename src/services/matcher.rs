//! 意图匹配
//!
//! 线性子串扫描：按存储顺序遍历意图，意图内按声明顺序遍历模式，
//! 第一个小写形式出现在归一化输入中的模式胜出。匹配是原始子串，不分词，
//! 所以 "cat" 会命中 "concatenate"。

use crate::services::intent_store::IntentStore;

/// 无匹配时的回复
pub const FALLBACK_RESPONSE: &str = "I'm not sure I understand.";

/// 空输入提示
pub const EMPTY_INPUT_PROMPT: &str = "Please say something!";

/// 匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 输入为空，未进行匹配
    Prompt,
    /// 命中意图
    Matched { tag: String, response: String },
    /// 没有模式命中
    Fallback,
}

impl Reply {
    /// 返回给用户的文本
    pub fn text(&self) -> &str {
        match self {
            Reply::Prompt => EMPTY_INPUT_PROMPT,
            Reply::Matched { response, .. } => response,
            Reply::Fallback => FALLBACK_RESPONSE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Reply::Fallback)
    }
}

/// 归一化输入：去除首尾空白并转小写
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 对已归一化的输入做匹配，空输入直接返回提示
pub fn match_normalized(store: &IntentStore, normalized: &str) -> Reply {
    if normalized.is_empty() {
        return Reply::Prompt;
    }
    for intent in store.intents() {
        for pattern in &intent.patterns {
            if normalized.contains(&pattern.to_lowercase()) {
                // 没有候选回复的意图退化为兜底回复
                return match intent.primary_response() {
                    Some(response) => Reply::Matched {
                        tag: intent.tag.clone(),
                        response: response.to_string(),
                    },
                    None => Reply::Fallback,
                };
            }
        }
    }
    Reply::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intent;
    use rstest::rstest;

    fn store() -> IntentStore {
        IntentStore::new(vec![
            Intent::new("greeting", ["hello", "hi"], ["Hi there!", "Hello!"]),
            Intent::new("animals", ["cat"], ["Meow."]),
            Intent::new("hours", ["Open", "hours"], ["We are open 9 to 5."]),
        ])
    }

    fn respond(store: &IntentStore, text: &str) -> Reply {
        match_normalized(store, &normalize(text))
    }

    #[test]
    fn test_greeting_scenario() {
        let reply = respond(&store(), "Hi, how are you?");
        assert_eq!(reply.text(), "Hi there!");
        assert_eq!(
            reply,
            Reply::Matched {
                tag: "greeting".into(),
                response: "Hi there!".into()
            }
        );
    }

    #[rstest]
    #[case("HELLO")]
    #[case("  well hello  ")]
    #[case("hi")]
    fn test_case_insensitive_match(#[case] input: &str) {
        assert_eq!(respond(&store(), input).text(), "Hi there!");
    }

    #[test]
    fn test_uppercase_pattern_matches() {
        assert_eq!(
            respond(&store(), "when are you open?").text(),
            "We are open 9 to 5."
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn test_empty_input_prompts(#[case] input: &str) {
        assert_eq!(respond(&store(), input), Reply::Prompt);
        assert_eq!(respond(&store(), input).text(), EMPTY_INPUT_PROMPT);
    }

    #[rstest]
    #[case("goodbye")]
    #[case("what is the price?")]
    #[case("xyz")]
    fn test_no_match_falls_back(#[case] input: &str) {
        let reply = respond(&store(), input);
        assert!(reply.is_fallback());
        assert_eq!(reply.text(), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_raw_substring_matching() {
        assert_eq!(respond(&store(), "concatenate").text(), "Meow.");
        // "this" contains "hi", so the greeting wins before anything else
        assert_eq!(respond(&store(), "this").text(), "Hi there!");
    }

    #[test]
    fn test_first_intent_wins() {
        // both greeting and animals match; greeting is first in store order
        assert_eq!(respond(&store(), "hi cat").text(), "Hi there!");
    }

    #[test]
    fn test_intent_without_responses_falls_back() {
        let store = IntentStore::new(vec![Intent::new(
            "silent",
            ["ping"],
            Vec::<String>::new(),
        )]);
        assert_eq!(respond(&store, "ping"), Reply::Fallback);
    }

    #[test]
    fn test_empty_store_falls_back() {
        assert_eq!(respond(&IntentStore::default(), "hello"), Reply::Fallback);
    }

    #[test]
    fn test_empty_pattern_matches_any_input() {
        let store = IntentStore::new(vec![Intent::new("catch-all", [""], ["catch-all"])]);
        assert_eq!(respond(&store, "xyz").text(), "catch-all");
        assert_eq!(respond(&store, "Anything at all").text(), "catch-all");
        // blank input still prompts before any pattern is tried
        assert_eq!(respond(&store, "   "), Reply::Prompt);
    }
}
