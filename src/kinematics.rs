//! Kinematic limits of a three-body decay `M -> 1 2 3` on the Dalitz plane spanned by
//! `m12^2` (x) and `m13^2` (y).

use crate::{
    error::{Error, Result},
    shapes::Rect,
};

/// Margin the usual Dalitz plot leaves around the kinematic limits, in mass squared
/// units
pub const DALITZ_PLOT_MARGIN: f64 = 0.10;

/// The rectangle enclosing the kinematically allowed region of the Dalitz plot.
///
/// `m12^2` ranges over `[(m1 + m2)^2, (M - m3)^2]` and `m13^2` over
/// `[(m1 + m3)^2, (M - m2)^2]`.
///
/// **Returns** an error if any mass is negative or not finite, or if the daughters
/// outweigh the mother
pub fn dalitz_bounds(m_mother: f64, m1: f64, m2: f64, m3: f64) -> Result<Rect> {
    let masses = [m_mother, m1, m2, m3];
    if masses.iter().any(|m| !m.is_finite() || *m < 0.0) {
        return Err(Error::ForbiddenDecay(format!(
            "masses must be finite and non-negative, got {masses:?}"
        )));
    }
    if m1 + m2 + m3 > m_mother {
        return Err(Error::ForbiddenDecay(format!(
            "daughter masses {m1} + {m2} + {m3} exceed mother mass {m_mother}"
        )));
    }

    Ok(Rect::from_bounds(
        (m1 + m2).powi(2),
        (m_mother - m3).powi(2),
        (m1 + m3).powi(2),
        (m_mother - m2).powi(2),
    ))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn d0_to_kshort_pi_pi() {
        let (m_d0, m_ks, m_pi) = (1.86484, 0.497614, 0.13957);
        let rect = dalitz_bounds(m_d0, m_ks, m_pi, m_pi).unwrap();
        assert_relative_eq!(rect.xlo(), (m_ks + m_pi).powi(2));
        assert_relative_eq!(rect.xhi(), (m_d0 - m_pi).powi(2));
        assert_relative_eq!(rect.ylo(), (m_ks + m_pi).powi(2));
        assert_relative_eq!(rect.yhi(), (m_d0 - m_pi).powi(2));
        assert!(rect.is_ordered());
    }

    #[test]
    fn plot_margin() {
        let rect = dalitz_bounds(3.0, 1.0, 0.5, 0.5)
            .unwrap()
            .expand(DALITZ_PLOT_MARGIN);
        assert_relative_eq!(rect.xlo(), 2.25 - 0.1);
        assert_relative_eq!(rect.xhi(), 6.25 + 0.1);
        assert_relative_eq!(rect.ylo(), 2.25 - 0.1);
        assert_relative_eq!(rect.yhi(), 6.25 + 0.1);
    }

    #[test]
    fn reject_forbidden_decays() {
        assert!(matches!(
            dalitz_bounds(1.0, 0.5, 0.5, 0.5),
            Err(Error::ForbiddenDecay(_))
        ));
        assert!(matches!(
            dalitz_bounds(1.0, -0.1, 0.1, 0.1),
            Err(Error::ForbiddenDecay(_))
        ));
        assert!(matches!(
            dalitz_bounds(f64::NAN, 0.1, 0.1, 0.1),
            Err(Error::ForbiddenDecay(_))
        ));
    }
}
