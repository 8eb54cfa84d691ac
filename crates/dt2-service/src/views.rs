use dt2_chain::{encoding, Details, UserRecord, U256};
use serde::{Deserialize, Serialize};

/// A user record as clients see it; `age` is a decimal string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub name: String,
    pub age: String,
}

impl From<UserRecord> for UserView {
    fn from(record: UserRecord) -> Self {
        Self {
            name: record.name,
            age: decimal(record.age),
        }
    }
}

/// `getDetails` snapshot with integers as strings and bytes as hex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsView {
    pub message: String,
    pub numbers: Vec<String>,
    pub names: Vec<String>,
    pub fixed_data: String,
    pub dynamic_data: String,
}

impl From<Details> for DetailsView {
    fn from(details: Details) -> Self {
        Self {
            message: details.message,
            numbers: decimals(&details.numbers),
            names: details.names,
            fixed_data: encoding::to_hex(details.fixed_data.as_slice()),
            dynamic_data: encoding::to_hex(&details.dynamic_data),
        }
    }
}

/// Result of the `number` operation: one element, or the whole sequence
/// after an append.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberReply {
    Element(String),
    Sequence(Vec<String>),
}

/// Integers cross the JSON boundary as decimal strings; JSON numbers lose
/// precision past 2^53.
pub(crate) fn decimal(value: U256) -> String {
    value.to_string()
}

pub(crate) fn decimals(values: &[U256]) -> Vec<String> {
    values.iter().copied().map(decimal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt2_chain::{Bytes, B256};

    #[test]
    fn large_integers_stay_exact() {
        let big = U256::from(u64::MAX) + U256::from(1);
        assert_eq!(decimal(big), "18446744073709551616");
    }

    #[test]
    fn user_view_from_record() {
        let view = UserView::from(UserRecord {
            name: "Charlie".into(),
            age: U256::from(30),
        });
        assert_eq!(view, UserView { name: "Charlie".into(), age: "30".into() });
    }

    #[test]
    fn details_view_serializes_camel_case() {
        let view = DetailsView::from(Details {
            message: "Hello, Solidity!".into(),
            numbers: vec![U256::from(1), U256::from(2)],
            names: vec!["Alice".into(), "Bob".into()],
            fixed_data: B256::ZERO,
            dynamic_data: Bytes::from_static(&[0x12, 0x34, 0x56]),
        });
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["numbers"], serde_json::json!(["1", "2"]));
        assert_eq!(json["dynamicData"], "0x123456");
        assert_eq!(
            json["fixedData"],
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn number_reply_is_untagged() {
        let one = serde_json::to_value(NumberReply::Element("7".into())).unwrap();
        assert_eq!(one, serde_json::json!("7"));
        let many = serde_json::to_value(NumberReply::Sequence(vec!["1".into()])).unwrap();
        assert_eq!(many, serde_json::json!(["1"]));
    }
}
