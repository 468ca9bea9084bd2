//! Validation and conversion of caller sequences into owned f64 buffers.

use crate::error::{Argument, BridgeError, BridgeResult};
use crate::host::HostValue;
use std::ops::Deref;

/// An owned, fully initialized buffer of f64 values.
///
/// Only [`to_numeric_vector`] builds one from caller input, and it either
/// returns the whole buffer or nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericVector {
    data: Vec<f64>,
}

impl NumericVector {
    /// Empty buffer with room for exactly `len` values.
    ///
    /// Allocation failure is reported instead of aborting the process.
    pub fn try_with_capacity(len: usize, argument: Argument) -> BridgeResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BridgeError::AllocationFailure {
                argument,
                requested: len,
            })?;
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

impl Deref for NumericVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.data
    }
}

/// Convert one caller value into a [`NumericVector`].
///
/// The value must be a list and every element a float. Scanning stops at
/// the first element that is not, and the error carries its index. The
/// buffer is only allocated once every element has passed.
pub fn to_numeric_vector(value: &HostValue, argument: Argument) -> BridgeResult<NumericVector> {
    let items = value.as_sequence().ok_or(BridgeError::TypeMismatch {
        argument,
        found: value.type_name(),
    })?;

    check_elements(items, argument)?;

    let mut vector = NumericVector::try_with_capacity(items.len(), argument)?;
    vector
        .data
        .extend(items.iter().filter_map(HostValue::as_float));

    debug_assert_eq!(vector.len(), items.len());
    Ok(vector)
}

/// Fail on the first element that is not a float.
fn check_elements(items: &[HostValue], argument: Argument) -> BridgeResult<()> {
    match items.iter().position(|item| item.as_float().is_none()) {
        Some(index) => Err(BridgeError::ElementTypeMismatch {
            argument,
            index,
            found: items[index].type_name(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_in_order() {
        let value = HostValue::from(vec![3.0, -1.5, 0.25]);
        let vector = to_numeric_vector(&value, Argument::X).unwrap();
        assert_eq!(vector.as_slice(), &[3.0, -1.5, 0.25]);
        assert_eq!(vector.len(), 3);
    }

    #[test]
    fn test_buffer_is_sized_exactly() {
        let value = HostValue::from(vec![1.0; 37]);
        let vector = to_numeric_vector(&value, Argument::X).unwrap();
        assert_eq!(vector.len(), 37);
        assert_eq!(vector.capacity(), 37);
    }

    #[test]
    fn test_elements_checked_before_any_buffer_exists() {
        let mut items = vec![HostValue::Float(0.5); 1000];
        items[0] = HostValue::None;
        items[999] = HostValue::from("z");
        assert!(matches!(
            check_elements(&items, Argument::W),
            Err(BridgeError::ElementTypeMismatch { index: 0, found: "NoneType", .. })
        ));

        items[0] = HostValue::Float(0.5);
        assert!(matches!(
            check_elements(&items, Argument::W),
            Err(BridgeError::ElementTypeMismatch { index: 999, found: "str", .. })
        ));

        items[999] = HostValue::Float(0.5);
        assert!(check_elements(&items, Argument::W).is_ok());
    }

    #[test]
    fn test_empty_list_is_valid() {
        let vector = to_numeric_vector(&HostValue::List(vec![]), Argument::W).unwrap();
        assert!(vector.is_empty());
    }

    #[test]
    fn test_non_sequence_is_type_mismatch() {
        let err = to_numeric_vector(&HostValue::Float(1.0), Argument::W).unwrap_err();
        match err {
            BridgeError::TypeMismatch { argument, found } => {
                assert_eq!(argument, Argument::W);
                assert_eq!(found, "float");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_first_bad_element_is_reported() {
        let value = HostValue::List(vec![
            HostValue::Float(1.0),
            HostValue::from("a"),
            HostValue::Int(3),
        ]);
        match to_numeric_vector(&value, Argument::X) {
            Err(BridgeError::ElementTypeMismatch {
                argument,
                index,
                found,
            }) => {
                assert_eq!(argument, Argument::X);
                assert_eq!(index, 1);
                assert_eq!(found, "str");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ints_are_not_coerced() {
        let value = HostValue::List(vec![HostValue::Float(1.0), HostValue::Int(0)]);
        assert!(matches!(
            to_numeric_vector(&value, Argument::X),
            Err(BridgeError::ElementTypeMismatch { index: 1, found: "int", .. })
        ));
    }

    #[test]
    fn test_nested_lists_are_rejected() {
        let value = HostValue::List(vec![HostValue::from(vec![1.0])]);
        assert!(matches!(
            to_numeric_vector(&value, Argument::W),
            Err(BridgeError::ElementTypeMismatch { index: 0, found: "list", .. })
        ));
    }

    #[test]
    fn test_oversized_allocation_is_reported() {
        match NumericVector::try_with_capacity(usize::MAX, Argument::X) {
            Err(BridgeError::AllocationFailure { argument, requested }) => {
                assert_eq!(argument, Argument::X);
                assert_eq!(requested, usize::MAX);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
