use crate::InvalidSectorError;

/// One of the six 60° regions of the space vector plane.
///
/// Sector *k* spans `[60·(k - 1), 60·k)` degrees, measured from the phase A
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sector {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Sector {
    pub const ALL: [Sector; 6] = [
        Sector::One,
        Sector::Two,
        Sector::Three,
        Sector::Four,
        Sector::Five,
        Sector::Six,
    ];

    /// Sector number, between 1 and 6 inclusive.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Zero-indexed sector, between 0 and 5 inclusive.
    pub const fn index(self) -> u8 {
        match self {
            Sector::One => 0,
            Sector::Two => 1,
            Sector::Three => 2,
            Sector::Four => 3,
            Sector::Five => 4,
            Sector::Six => 5,
        }
    }

    /// The sector following this one counter-clockwise.
    pub const fn next(self) -> Sector {
        Sector::ALL[(self.index() as usize + 1) % 6]
    }

    /// Start and end angle of the sector in degrees.
    pub fn span(self) -> (f64, f64) {
        let start = 60. * f64::from(self.index());
        (start, start + 60.)
    }

    /// Get the sector that owns an angle given in degrees.
    ///
    /// The angle is first wrapped into `[0, 360)`, so any real angle maps to
    /// a sector.
    pub fn from_angle(angle: f64) -> Sector {
        let mut wrapped = angle % 360.;
        if wrapped < 0. {
            wrapped += 360.;
        }
        // A tiny negative angle wraps to exactly 360.
        let index = ((wrapped / 60.) as usize).min(5);
        Sector::ALL[index]
    }
}

impl TryFrom<u8> for Sector {
    type Error = InvalidSectorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=6 => Ok(Sector::ALL[usize::from(value - 1)]),
            _ => Err(InvalidSectorError(value)),
        }
    }
}

impl From<Sector> for u8 {
    fn from(sector: Sector) -> u8 {
        sector.number()
    }
}
