#![allow(dead_code)]
//! Static entry corpora used across harnesses.

/// Newline-delimited JSON entries in the shape the ingestor reads.
pub const CORPUS_NDJSON: &[&str] = &[
    r#"{"line":"GET /healthz 200","labels":{"app":"api","team":"blue"},"extracted":{"org":"acme"}}"#,
    r#"{"line":"payment failed","labels":{"app":"payments"},"extracted":{"org":"globex","status":502}}"#,
    r#"{"line":"cache miss","labels":{"app":"cache","team":"red"},"extracted":{}}"#,
    r#"{"line":"user login","labels":{"app":"auth"},"extracted":{"org":{"id":7}}}"#,
    r#"{"line":"batch done","labels":{"app":"worker"},"extracted":{"org":1234}}"#,
];

/// Lines that must be skipped by the ingestor without aborting.
pub const CORPUS_MALFORMED: &[&str] = &[
    "plain text line",
    r#"{"line": "unterminated"#,
    r#"{"labels":{"app":5}}"#,
];

/// A line that is not valid UTF-8.
pub const CORPUS_NON_UTF8: &[u8] = b"\xff\xfe {\"line\":\"latin-1 garbage\"}";
