use super::Serializer;
use crate::error::DecodeError;
use crate::wire::WireValue;

/// Sequence serializer wrapping an element serializer.
///
/// Encodes each element in order. Decoding requires a wire array and stops at
/// the first element that fails, reporting its index in the error path.
#[derive(Debug, Clone, Default)]
pub struct ArraySerializer<S> {
    element: S,
}

impl<S: Serializer> ArraySerializer<S> {
    /// Wraps `element`.
    pub fn new(element: S) -> Self {
        Self { element }
    }

    /// Returns the element serializer.
    pub fn element(&self) -> &S {
        &self.element
    }
}

impl<S: Serializer> Serializer for ArraySerializer<S> {
    type Value = Vec<S::Value>;

    fn encode(&self, value: &Self::Value) -> WireValue {
        WireValue::Array(value.iter().map(|item| self.element.encode(item)).collect())
    }

    fn decode(&self, wire: &WireValue) -> Result<Self::Value, DecodeError> {
        let items = wire
            .as_array()
            .ok_or_else(|| DecodeError::mismatch("array", wire))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.element.decode(item).map_err(|e| e.at_index(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::{StringSerializer, U64Serializer};
    use serde_json::json;

    #[test]
    fn test_preserves_order() {
        let ser = ArraySerializer::new(StringSerializer);
        let value = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        let wire = ser.encode(&value);
        assert_eq!(wire, json!(["c", "a", "b"]));
        assert_eq!(ser.decode(&wire).unwrap(), value);
    }

    #[test]
    fn test_empty() {
        let ser = ArraySerializer::new(U64Serializer);
        assert_eq!(ser.encode(&vec![]), json!([]));
        assert!(ser.decode(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_failing_element_reports_index() {
        let ser = ArraySerializer::new(U64Serializer);
        let err = ser.decode(&json!([1, 2, "three", 4])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "$[2]: expected unsigned 64-bit integer, got string"
        );
    }

    #[test]
    fn test_nested_arrays() {
        let ser = ArraySerializer::new(ArraySerializer::new(U64Serializer));
        let value = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(ser.decode(&ser.encode(&value)).unwrap(), value);

        let err = ser.decode(&json!([[1], [2, null]])).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "$[1][1]");
    }

    #[test]
    fn test_rejects_non_array() {
        let ser = ArraySerializer::new(U64Serializer);
        let err = ser.decode(&json!({"0": 1})).unwrap_err();
        assert_eq!(err.to_string(), "$: expected array, got object");
    }
}
