//! Transform trait.

use crate::conll::Line;

pub trait Transform {
    /// Takes ownership of the lines and returns them, same length and order.
    fn transform_own(&self, lines: Vec<Line>) -> Vec<Line>;
}
