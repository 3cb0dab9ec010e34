use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// Checks that every json input deserializes into the paired value.
pub fn test_deserialize_ok<T>(cases: Vec<(&str, T)>)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    for (input, expected) in cases {
        let actual: T = serde_json::from_str(input)
            .unwrap_or_else(|err| panic!("cannot deserialize {input}: {err}"));
        assert_eq!(actual, expected, "input: {input}");
    }
}

/// Checks that every value serializes exactly into the paired json.
pub fn test_serialize_json_ok<T>(cases: Vec<(T, Value)>)
where
    T: Debug + Serialize,
{
    for (value, expected) in cases {
        let actual = serde_json::to_value(&value).expect("serializable value");
        assert_eq!(actual, expected, "value: {value:?}");
    }
}
