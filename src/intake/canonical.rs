//! 페이로드 정규화
//!
//! 서명자가 서명한 바이트열을 그대로 재현한다.
//! - 필드 순서 고정: sender_pk, receiver_pk, buy_currency, sell_currency,
//!   buy_amount, sell_amount, platform
//! - 멤버 구분자 `", "`, 키/값 구분자 `": "` (한 줄)
//! - ASCII 출력 외 문자는 `\uXXXX` 이스케이프 (소문자 16진수, 서로게이트 쌍)

use std::fmt::Write;

use super::model::{Amount, Payload};

/// 정규화된 서명 메시지 생성
pub fn canonicalize(payload: &Payload) -> String {
    let fields: [(&str, Token<'_>); 7] = [
        ("sender_pk", Token::Str(&payload.sender_pk)),
        ("receiver_pk", Token::Str(&payload.receiver_pk)),
        ("buy_currency", Token::Str(&payload.buy_currency)),
        ("sell_currency", Token::Str(&payload.sell_currency)),
        ("buy_amount", Token::Amount(&payload.buy_amount)),
        ("sell_amount", Token::Amount(&payload.sell_amount)),
        ("platform", Token::Str(payload.platform.as_str())),
    ];

    let mut out = String::with_capacity(256);
    out.push('{');
    for (i, (key, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_json_string(&mut out, key);
        out.push_str(": ");
        match value {
            Token::Str(s) => write_json_string(&mut out, s),
            Token::Amount(Amount::Text(s)) => write_json_string(&mut out, s),
            Token::Amount(Amount::Number(n)) => out.push_str(&n.to_string()),
        }
    }
    out.push('}');
    out
}

enum Token<'a> {
    Str(&'a str),
    Amount(&'a Amount),
}

fn write_json_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // String에 대한 write!는 실패하지 않음
                    let _ = write!(out, "\\u{:04x}", unit);
                }
            }
        }
    }
    out.push('"');
}
