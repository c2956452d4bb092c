//! Maximum amplitude space vector PWM duty cycles.
//!
//! Within a sector the reference vector is synthesised from the two active
//! switching states bounding the sector (on-times `x` and `y`) and the null
//! states, which get the remaining `z = 1 - (x + y)` split evenly between the
//! start and the end of the period. Every sector uses the same template, only
//! rotated by one phase, which the [`LAYOUTS`] table makes explicit.

use crate::{projection::PhaseProjections, InvalidSectorError, Sector};

/// Duty cycles of the three phases, each the fraction of the PWM period the
/// phase is driven high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyCycles<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> DutyCycles<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> DutyCycles<U> {
        DutyCycles {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
        }
    }

    pub fn into_array(self) -> [T; 3] {
        [self.a, self.b, self.c]
    }
}

impl DutyCycles<f64> {
    pub fn max(&self) -> f64 {
        self.a.max(self.b).max(self.c)
    }

    pub fn min(&self) -> f64 {
        self.a.min(self.b).min(self.c)
    }
}

/// Signed projection used as one of the active vector on-times.
#[derive(Debug, Clone, Copy)]
enum Pick {
    A,
    B,
    C,
    NegA,
    NegB,
    NegC,
}

impl Pick {
    fn of(self, p: &PhaseProjections) -> f64 {
        match self {
            Pick::A => p.a,
            Pick::B => p.b,
            Pick::C => p.c,
            Pick::NegA => -p.a,
            Pick::NegB => -p.b,
            Pick::NegC => -p.c,
        }
    }
}

/// How a phase duty cycle is built from the on-times.
#[derive(Debug, Clone, Copy)]
enum Term {
    /// `x + y + z/2`, high for both active vectors.
    Full,
    /// `x + z/2`
    X,
    /// `y + z/2`
    Y,
    /// `z/2`, high for the null vector only.
    Null,
}

impl Term {
    fn duty(self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Term::Full => x + y + 0.5 * z,
            Term::X => x + 0.5 * z,
            Term::Y => y + 0.5 * z,
            Term::Null => 0.5 * z,
        }
    }
}

struct SectorLayout {
    x: Pick,
    y: Pick,
    /// Templates for phases a, b and c.
    duties: [Term; 3],
}

/// Indexed by [`Sector::index`].
const LAYOUTS: [SectorLayout; 6] = [
    SectorLayout {
        x: Pick::A,
        y: Pick::B,
        duties: [Term::Full, Term::Y, Term::Null],
    },
    SectorLayout {
        x: Pick::NegC,
        y: Pick::NegA,
        duties: [Term::X, Term::Full, Term::Null],
    },
    SectorLayout {
        x: Pick::B,
        y: Pick::C,
        duties: [Term::Null, Term::Full, Term::Y],
    },
    SectorLayout {
        x: Pick::NegA,
        y: Pick::NegB,
        duties: [Term::Null, Term::X, Term::Full],
    },
    SectorLayout {
        x: Pick::C,
        y: Pick::A,
        duties: [Term::Y, Term::Null, Term::Full],
    },
    SectorLayout {
        x: Pick::NegB,
        y: Pick::NegC,
        duties: [Term::Full, Term::Null, Term::X],
    },
];

/// Split phase projections into duty cycles using the layout of `sector`.
///
/// The projections are expected to describe a vector inside the sector, other
/// combinations give well defined but meaningless values.
pub fn decompose(sector: Sector, projections: &PhaseProjections) -> DutyCycles<f64> {
    let layout = &LAYOUTS[usize::from(sector.index())];
    let x = layout.x.of(projections);
    let y = layout.y.of(projections);
    let z = 1. - (x + y);

    let [a, b, c] = layout.duties.map(|term| term.duty(x, y, z));
    DutyCycles { a, b, c }
}

/// Duty cycles for a maximum amplitude vector at `angle` degrees.
pub fn duty_cycles(sector: Sector, angle: f64) -> DutyCycles<f64> {
    decompose(sector, &PhaseProjections::from_angle(angle))
}

/// Angle inputs accepted by [`compute_duty_cycles`].
///
/// Each duty cycle of the result has the same shape as the input, a scalar
/// angle gives scalar duties and an array of angles gives arrays. Slices,
/// whose length is only known at runtime, need the `alloc` feature and give
/// vectors; without it, map [`duty_cycles`] over them.
pub trait Angles {
    type Output;

    fn duty_cycles(self, sector: Sector) -> DutyCycles<Self::Output>;
}

impl Angles for f64 {
    type Output = f64;

    fn duty_cycles(self, sector: Sector) -> DutyCycles<f64> {
        duty_cycles(sector, self)
    }
}

impl<const N: usize> Angles for [f64; N] {
    type Output = [f64; N];

    fn duty_cycles(self, sector: Sector) -> DutyCycles<[f64; N]> {
        let each = self.map(|angle| duty_cycles(sector, angle));
        DutyCycles {
            a: each.map(|d| d.a),
            b: each.map(|d| d.b),
            c: each.map(|d| d.c),
        }
    }
}

#[cfg(feature = "alloc")]
impl Angles for &[f64] {
    type Output = alloc::vec::Vec<f64>;

    fn duty_cycles(self, sector: Sector) -> DutyCycles<alloc::vec::Vec<f64>> {
        let mut duties = DutyCycles {
            a: alloc::vec::Vec::with_capacity(self.len()),
            b: alloc::vec::Vec::with_capacity(self.len()),
            c: alloc::vec::Vec::with_capacity(self.len()),
        };
        for &angle in self {
            let d = duty_cycles(sector, angle);
            duties.a.push(d.a);
            duties.b.push(d.b);
            duties.c.push(d.c);
        }
        duties
    }
}

/// Compute the duty cycles for a sector number (1 to 6) and one or more
/// angles in degrees.
///
/// The angles are not checked against the sector, the caller picks the
/// sector owning them (see [`Sector::from_angle`]).
pub fn compute_duty_cycles<A: Angles>(
    sector: u8,
    angle: A,
) -> Result<DutyCycles<A::Output>, InvalidSectorError> {
    let sector = Sector::try_from(sector)?;
    Ok(angle.duty_cycles(sector))
}
