use std::{fmt, str::FromStr};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Projected coordinate systems that habitat survey data is delivered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crs {
    /// EPSG:29903, TM75 / Irish Grid. Used by the main habitat survey.
    #[default]
    IrishGrid,
    /// EPSG:2157, IRENET95 / Irish Transverse Mercator.
    IrishTransverseMercator,
}

impl Crs {
    pub const ALL: [Crs; 2] = [Crs::IrishGrid, Crs::IrishTransverseMercator];

    #[inline]
    pub fn epsg(self) -> u32 {
        match self {
            Self::IrishGrid => 29903,
            Self::IrishTransverseMercator => 2157,
        }
    }

    /// PROJ.4 definition of the source system.
    #[inline]
    pub(crate) fn proj4(self) -> &'static str {
        match self {
            Self::IrishGrid => concat!(
                "+proj=tmerc +lat_0=53.5 +lon_0=-8 +k=1.000035 +x_0=200000 +y_0=250000 ",
                "+ellps=mod_airy +towgs84=482.5,-130.6,564.6,-1.042,-0.214,-0.631,8.15 ",
                "+units=m +no_defs +type=crs",
            ),
            Self::IrishTransverseMercator => concat!(
                "+proj=tmerc +lat_0=53.5 +lon_0=-8 +k=0.99982 +x_0=600000 +y_0=750000 ",
                "+ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs +type=crs",
            ),
        }
    }

    /// Look up a supported system by its EPSG code.
    pub fn from_epsg(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|crs| crs.epsg() == code)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

impl FromStr for Crs {
    type Err = anyhow::Error;

    /// Accepts `29903`, `EPSG:29903` or `epsg:29903`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let code = trimmed.get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("epsg:"))
            .map_or(trimmed, |_| &trimmed[5..]);

        code.parse::<u32>().ok()
            .and_then(Self::from_epsg)
            .ok_or_else(|| anyhow!("Unsupported CRS: {s}. Expected EPSG:29903 or EPSG:2157"))
    }
}
