use crate::callable::Callable;
use crate::dynamic::Value;
use crate::object::ObjectMap;

/// Visitor over a single [`Value`]'s payload.
///
/// [`Value::step`] calls exactly one method, the one matching the value's
/// kind. Every method defaults to doing nothing, so a stepper only overrides
/// what it cares about. Containers hand over their elements without
/// descending; a recursive stepper calls `step` on each element itself.
///
/// The error type lets a stepper abort, e.g. a serializer whose output
/// failed.
///
/// ```
/// use core::convert::Infallible;
/// use axzdict_values::{array, Stepper, Value};
///
/// /// Sums every integral in a tree.
/// struct Sum(i64);
///
/// impl Stepper for Sum {
///     type Error = Infallible;
///
///     fn step_integral(&mut self, value: i32) -> Result<(), Infallible> {
///         self.0 += i64::from(value);
///         Ok(())
///     }
///
///     fn step_array(&mut self, items: &[Value]) -> Result<(), Infallible> {
///         items.iter().try_for_each(|item| item.step(&mut *self))
///     }
/// }
///
/// let mut sum = Sum(0);
/// array![1, array![2, 3], "skip"].step(&mut sum).unwrap();
/// assert_eq!(sum.0, 6);
/// ```
pub trait Stepper {
    type Error;

    fn step_null(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn step_bool(&mut self, value: bool) -> Result<(), Self::Error> {
        let _ = value;
        Ok(())
    }

    fn step_integral(&mut self, value: i32) -> Result<(), Self::Error> {
        let _ = value;
        Ok(())
    }

    fn step_number(&mut self, value: f64) -> Result<(), Self::Error> {
        let _ = value;
        Ok(())
    }

    fn step_string(&mut self, value: &str) -> Result<(), Self::Error> {
        let _ = value;
        Ok(())
    }

    fn step_bytes(&mut self, value: &[u8]) -> Result<(), Self::Error> {
        let _ = value;
        Ok(())
    }

    fn step_array(&mut self, items: &[Value]) -> Result<(), Self::Error> {
        let _ = items;
        Ok(())
    }

    fn step_object(&mut self, entries: &ObjectMap) -> Result<(), Self::Error> {
        let _ = entries;
        Ok(())
    }

    fn step_callable(&mut self, callable: &Callable) -> Result<(), Self::Error> {
        let _ = callable;
        Ok(())
    }
}
