use crate::TcError;

/// Floating point type used for matrix cells and result values.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}

/// Signed incidence of a branch at a node, read from one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incidence {
    /// `+1`: the branch leaves this node.
    Departs,
    /// `-1`: the branch enters this node.
    Arrives,
    /// Anything else, including fractional values.
    Absent,
}

impl Incidence {
    /// Classify a cell by exact comparison against `1` and `-1`.
    pub fn of(value: Real) -> Self {
        if value == 1.0 {
            Incidence::Departs
        } else if value == -1.0 {
            Incidence::Arrives
        } else {
            Incidence::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn incidence_is_exact() {
        assert_eq!(Incidence::of(1.0), Incidence::Departs);
        assert_eq!(Incidence::of(-1.0), Incidence::Arrives);
        assert_eq!(Incidence::of(0.0), Incidence::Absent);
        assert_eq!(Incidence::of(0.999), Incidence::Absent);
        assert_eq!(Incidence::of(2.0), Incidence::Absent);
    }
}
