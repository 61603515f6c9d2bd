use super::*;

// ===== endpoint and body =====

#[test]
fn summary_endpoint_uses_default_base() {
    assert_eq!(summary_endpoint(), "/api/summary");
}

#[test]
fn summary_form_body_encodes_pairs() {
    assert_eq!(
        summary_form_body("https://example.com/news?id=1", Language::English),
        "link=https%3A%2F%2Fexample.com%2Fnews%3Fid%3D1&language=ENGLISH"
    );
}

#[test]
fn summary_form_body_encodes_spaces_as_plus() {
    assert_eq!(summary_form_body("a b", Language::Korean), "link=a+b&language=KOREAN");
}

#[test]
fn summary_request_failed_message_formats_status() {
    assert_eq!(summary_request_failed_message(502), "summary request failed: 502");
}

// ===== response decoding =====

#[test]
fn extract_summary_reads_choices_chain() {
    let body = r#"{"choices":[{"message":{"content":"three sentences"}}]}"#;
    assert_eq!(extract_summary(body), "three sentences");
}

#[test]
fn extract_summary_unwraps_data_envelope() {
    let body = r#"{"data":{"choices":[{"message":{"content":"wrapped"}}]}}"#;
    assert_eq!(extract_summary(body), "wrapped");
}

#[test]
fn extract_summary_ignores_null_data_envelope() {
    let body = r#"{"data":null,"content":"outer"}"#;
    assert_eq!(extract_summary(body), "outer");
}

#[test]
fn extract_summary_prefers_content_over_summary() {
    let body = r#"{"content":"first","summary":"second"}"#;
    assert_eq!(extract_summary(body), "first");
}

#[test]
fn extract_summary_reads_summary_and_text_fields() {
    assert_eq!(extract_summary(r#"{"summary":"s"}"#), "s");
    assert_eq!(extract_summary(r#"{"text":"t"}"#), "t");
}

#[test]
fn extract_summary_accepts_bare_string_payload() {
    assert_eq!(extract_summary(r#""just text""#), "just text");
    assert_eq!(extract_summary(r#"{"data":"inner"}"#), "inner");
}

#[test]
fn extract_summary_pretty_prints_unknown_json() {
    assert_eq!(extract_summary(r#"{"unexpected":true}"#), "{\n  \"unexpected\": true\n}");
}

#[test]
fn extract_summary_passes_non_json_through() {
    assert_eq!(extract_summary("plain words"), "plain words");
}

#[test]
fn extract_summary_keeps_empty_content_empty() {
    assert_eq!(extract_summary(r#"{"content":""}"#), "");
}

// ===== error bodies =====

#[test]
fn error_text_prefers_message_field() {
    assert_eq!(error_text_from_body(400, r#"{"message":"bad link"}"#), "bad link");
}

#[test]
fn error_text_falls_back_to_compact_json() {
    assert_eq!(error_text_from_body(400, r#"{"error":"x"}"#), r#"{"error":"x"}"#);
}

#[test]
fn error_text_skips_empty_message_field() {
    assert_eq!(error_text_from_body(400, r#"{"message":""}"#), r#"{"message":""}"#);
}

#[test]
fn error_text_unquotes_json_string_body() {
    assert_eq!(error_text_from_body(500, r#""boom""#), "boom");
}

#[test]
fn error_text_uses_raw_body_when_not_json() {
    assert_eq!(error_text_from_body(504, "gateway exploded"), "gateway exploded");
}

#[test]
fn error_text_uses_status_line_when_body_is_unusable() {
    assert_eq!(error_text_from_body(500, ""), "summary request failed: 500");
    assert_eq!(error_text_from_body(500, "   "), "summary request failed: 500");
    assert_eq!(error_text_from_body(500, "null"), "summary request failed: 500");
}

// ===== placeholder =====

#[test]
fn fallback_if_empty_substitutes_placeholder() {
    assert_eq!(fallback_if_empty(String::new()), "No summary was returned.");
}

#[test]
fn fallback_if_empty_keeps_text() {
    assert_eq!(fallback_if_empty("hi".to_owned()), "hi");
    assert_eq!(fallback_if_empty("   ".to_owned()), "   ");
}
