use serde_json::Value;

/// 접수 요청 최상위 필수 키
pub const SUBMISSION_KEYS: [&str; 2] = ["sig", "payload"];

/// 페이로드 필수 키 (서명 순서와 동일)
pub const PAYLOAD_KEYS: [&str; 7] = [
    "sender_pk",
    "receiver_pk",
    "buy_currency",
    "sell_currency",
    "buy_amount",
    "sell_amount",
    "platform",
];

/// 구조 검증 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    Valid,
    Invalid { missing: Vec<String> },
}

/// 필수 키 존재 여부만 확인 (값 타입은 보지 않음)
///
/// 페이로드 키는 `payload.sender_pk` 형태로 보고한다.
/// 최상위 키가 빠지면 페이로드는 검사하지 않는다.
pub fn validate(raw: &Value) -> Structure {
    let missing_top: Vec<String> = SUBMISSION_KEYS
        .iter()
        .filter(|key| raw.get(**key).is_none())
        .map(|key| key.to_string())
        .collect();

    if !missing_top.is_empty() {
        return Structure::Invalid { missing: missing_top };
    }

    let payload = &raw["payload"];
    let missing: Vec<String> = PAYLOAD_KEYS
        .iter()
        .filter(|key| payload.get(**key).is_none())
        .map(|key| format!("payload.{}", key))
        .collect();

    if missing.is_empty() {
        Structure::Valid
    } else {
        Structure::Invalid { missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "sender_pk": "s",
            "receiver_pk": "r",
            "buy_currency": "Ethereum",
            "sell_currency": "Algorand",
            "buy_amount": 1,
            "sell_amount": "2",
            "platform": "Ethereum"
        })
    }

    #[test]
    fn test_valid_submission() {
        let raw = json!({ "sig": "0x00", "payload": full_payload() });
        assert_eq!(validate(&raw), Structure::Valid);
    }

    #[test]
    fn test_missing_top_level_keys() {
        let raw = json!({ "payload": full_payload() });
        assert_eq!(
            validate(&raw),
            Structure::Invalid { missing: vec!["sig".to_string()] }
        );

        let raw = json!({});
        assert_eq!(
            validate(&raw),
            Structure::Invalid { missing: vec!["sig".to_string(), "payload".to_string()] }
        );
    }

    #[test]
    fn test_missing_payload_keys() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("platform");
        payload.as_object_mut().unwrap().remove("buy_amount");

        let raw = json!({ "sig": "0x00", "payload": payload });
        assert_eq!(
            validate(&raw),
            Structure::Invalid {
                missing: vec!["payload.buy_amount".to_string(), "payload.platform".to_string()]
            }
        );
    }

    #[test]
    fn test_non_object_inputs() {
        assert_ne!(validate(&json!([1, 2, 3])), Structure::Valid);
        assert_ne!(validate(&json!("text")), Structure::Valid);

        // payload가 객체가 아니면 모든 페이로드 키가 누락된 것으로 본다
        let raw = json!({ "sig": "0x00", "payload": "oops" });
        match validate(&raw) {
            Structure::Invalid { missing } => assert_eq!(missing.len(), PAYLOAD_KEYS.len()),
            Structure::Valid => panic!("Expected Invalid"),
        }
    }

    #[test]
    fn test_null_values_count_as_present() {
        let mut payload = full_payload();
        payload["receiver_pk"] = Value::Null;
        let raw = json!({ "sig": Value::Null, "payload": payload });
        assert_eq!(validate(&raw), Structure::Valid);
    }
}
