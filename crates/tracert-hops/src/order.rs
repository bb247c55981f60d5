use crate::error::OrderError;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Display;

/// The numeric value of a key. Integers stay exact; everything else is a
/// finite float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int(i128),
    Float(f64),
}

impl NumericValue {
    pub fn compare(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (NumericValue::Int(a), NumericValue::Int(b)) => a.cmp(&b),
            (NumericValue::Float(a), NumericValue::Float(b)) => a.total_cmp(&b),
            (NumericValue::Int(a), NumericValue::Float(b)) => compare_int_float(a, b),
            (NumericValue::Float(a), NumericValue::Int(b)) => compare_int_float(b, a).reverse(),
        }
    }
}

// `float` is finite.
fn compare_int_float(int: i128, float: f64) -> Ordering {
    let floor = float.floor();
    if floor < i128::MIN as f64 {
        return Ordering::Greater;
    }
    if floor >= i128::MAX as f64 {
        return Ordering::Less;
    }
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Ordering::Less,
        ordering => ordering,
    }
}

/// A map key that compares by its numeric value.
///
/// Integer keys are always numeric. String keys (as found in JSON objects)
/// are numeric when they parse to an integer or a finite number, so `"10"`
/// sorts after `"3"`.
pub trait NumericKey: Display {
    fn numeric_value(&self) -> Option<NumericValue>;
}

macro_rules! numeric_integer_key {
    ($($ty:ty),*) => {
        $(
            impl NumericKey for $ty {
                fn numeric_value(&self) -> Option<NumericValue> {
                    Some(NumericValue::Int(*self as i128))
                }
            }
        )*
    };
}

numeric_integer_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl NumericKey for str {
    fn numeric_value(&self) -> Option<NumericValue> {
        let trimmed = self.trim();
        if let Ok(int) = trimmed.parse::<i128>() {
            return Some(NumericValue::Int(int));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(NumericValue::Float)
    }
}

impl NumericKey for String {
    fn numeric_value(&self) -> Option<NumericValue> {
        self.as_str().numeric_value()
    }
}

impl<T: NumericKey + ?Sized> NumericKey for &T {
    fn numeric_value(&self) -> Option<NumericValue> {
        (**self).numeric_value()
    }
}

/// Sorts keys by numeric value, ascending unless `desc` is set.
///
/// Every input key appears exactly once in the output. The first key without
/// a numeric value aborts the ordering.
pub fn order_keys<I, K>(keys: I, desc: bool) -> Result<Vec<K>, OrderError>
where
    I: IntoIterator<Item = K>,
    K: NumericKey,
{
    let mut valued: Vec<(NumericValue, K)> = Vec::new();
    for key in keys {
        let value = key.numeric_value().ok_or_else(|| OrderError::InvalidKeyKind {
            key: key.to_string(),
        })?;
        valued.push((value, key));
    }

    if desc {
        valued.sort_by(|a, b| b.0.compare(&a.0));
    } else {
        valued.sort_by(|a, b| a.0.compare(&b.0));
    }

    Ok(valued.into_iter().map(|(_, key)| key).collect())
}

/// Orders the keys of `map`, cloning them out of it.
pub fn ordered_keys<K, V>(map: &HashMap<K, V>, desc: bool) -> Result<Vec<K>, OrderError>
where
    K: NumericKey + Clone,
{
    let keys = order_keys(map.keys(), desc)?;
    Ok(keys.into_iter().cloned().collect())
}
