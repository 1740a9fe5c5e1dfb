use super::QuestionExtractor;

fn extract(raw_text: &str) -> [String; 3] {
    QuestionExtractor::default().extract(raw_text)
}

#[test]
fn splits_numbered_list_and_strips_label_header() {
    let reply = "想定質問：\n1. 強みは何ですか。\n2. 弱みは何ですか。\n3. 志望理由を教えてください。";

    assert_eq!(
        extract(reply),
        [
            "強みは何ですか。".to_string(),
            "弱みは何ですか。".to_string(),
            "志望理由を教えてください。".to_string(),
        ]
    );
}

#[test]
fn splits_numbered_list_without_header() {
    let reply = "1. Why this company?\n2. What is your strength?\n3. Where do you see yourself in five years?";

    assert_eq!(
        extract(reply),
        [
            "Why this company?".to_string(),
            "What is your strength?".to_string(),
            "Where do you see yourself in five years?".to_string(),
        ]
    );
}

#[test]
fn tolerates_surrounding_whitespace_around_numbered_items() {
    let reply = "  1.   志望動機を教えてください。  \n\n  2. 学生時代に力を入れたことは何ですか。\n 3. 入社後に挑戦したいことは何ですか。 ";

    assert_eq!(
        extract(reply),
        [
            "志望動機を教えてください。".to_string(),
            "学生時代に力を入れたことは何ですか。".to_string(),
            "入社後に挑戦したいことは何ですか。".to_string(),
        ]
    );
}

#[test]
fn strips_english_label_header() {
    let reply = "Anticipated questions:\n1. Tell me about yourself.\n2. Why us?\n3. Any questions for us?";

    assert_eq!(
        extract(reply),
        [
            "Tell me about yourself.".to_string(),
            "Why us?".to_string(),
            "Any questions for us?".to_string(),
        ]
    );
}

#[test]
fn falls_back_to_line_split_when_numbering_is_missing() {
    let reply = "強みは何ですか。\n弱みは何ですか。\n志望理由を教えてください。";

    assert_eq!(
        extract(reply),
        [
            "強みは何ですか。".to_string(),
            "弱みは何ですか。".to_string(),
            "志望理由を教えてください。".to_string(),
        ]
    );
}

#[test]
fn pads_with_empty_strings_when_reply_underproduces() {
    let reply = "強みは何ですか。\n弱みは何ですか。";

    assert_eq!(
        extract(reply),
        [
            "強みは何ですか。".to_string(),
            "弱みは何ですか。".to_string(),
            String::new(),
        ]
    );
}

#[test]
fn discards_items_beyond_the_third() {
    let reply = "1. one\n2. two\n3. three\n4. four";

    assert_eq!(
        extract(reply),
        ["one".to_string(), "two".to_string(), "three".to_string()]
    );
}

#[test]
fn empty_input_yields_three_empty_slots() {
    assert_eq!(extract(""), [String::new(), String::new(), String::new()]);
}

#[test]
fn whitespace_only_input_yields_three_empty_slots() {
    assert_eq!(
        extract("   \n\t \n  "),
        [String::new(), String::new(), String::new()]
    );
}

#[test]
fn label_only_input_yields_three_empty_slots() {
    assert_eq!(
        extract("想定質問："),
        [String::new(), String::new(), String::new()]
    );
}

#[test]
fn custom_label_patterns_replace_the_defaults() {
    let extractor = QuestionExtractor::with_label_patterns(["^Interview prep[:：]?"])
        .expect("patterns should compile");

    let reply = "Interview prep:\n1. one\n2. two\n3. three";
    assert_eq!(
        extractor.extract(reply),
        ["one".to_string(), "two".to_string(), "three".to_string()]
    );

    // The Japanese default no longer applies, so the header survives as a
    // line-split fallback entry.
    let reply = "想定質問：\nfirst\nsecond";
    assert_eq!(
        extractor.extract(reply),
        [
            "想定質問：".to_string(),
            "first".to_string(),
            "second".to_string(),
        ]
    );
}

#[test]
fn invalid_custom_pattern_is_a_construction_error() {
    assert!(QuestionExtractor::with_label_patterns(["(unclosed"]).is_err());
}
