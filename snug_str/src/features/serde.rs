use core::fmt;

use serde::de::{Deserializer, Error, Unexpected, Visitor};

use crate::SnugString;

fn snug_string<'de: 'a, 'a, D: Deserializer<'de>>(deserializer: D) -> Result<SnugString, D::Error> {
    struct SnugStringVisitor;

    impl<'a> Visitor<'a> for SnugStringVisitor {
        type Value = SnugString;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string")
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(SnugString::from(v))
        }

        fn visit_borrowed_str<E: Error>(self, v: &'a str) -> Result<Self::Value, E> {
            Ok(SnugString::from(v))
        }

        fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(SnugString::from(v))
        }

        fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            match core::str::from_utf8(v) {
                Ok(s) => Ok(SnugString::from(s)),
                Err(_) => Err(Error::invalid_value(Unexpected::Bytes(v), &self)),
            }
        }

        fn visit_borrowed_bytes<E: Error>(self, v: &'a [u8]) -> Result<Self::Value, E> {
            match core::str::from_utf8(v) {
                Ok(s) => Ok(SnugString::from(s)),
                Err(_) => Err(Error::invalid_value(Unexpected::Bytes(v), &self)),
            }
        }

        fn visit_byte_buf<E: Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
            match String::from_utf8(v) {
                Ok(s) => Ok(SnugString::from(s)),
                Err(e) => Err(Error::invalid_value(
                    Unexpected::Bytes(&e.into_bytes()),
                    &self,
                )),
            }
        }
    }

    deserializer.deserialize_str(SnugStringVisitor)
}

impl serde::Serialize for SnugString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_str().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for SnugString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        snug_string(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::SnugString;

    #[test]
    fn test_roundtrip() {
        let original = SnugString::new("hello world");
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, "\"hello world\"");

        let back: SnugString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_deserialize_inline_and_heap() {
        let short: SnugString = serde_json::from_str("\"short\"").unwrap();
        assert!(!short.is_heap_allocated());

        let long: SnugString =
            serde_json::from_str("\"a string that is too long to stay inline\"").unwrap();
        assert!(long.is_heap_allocated());
    }
}
