//! Low-precision built-in position provider.
//!
//! Planets come from mean orbital elements (J2000 epoch plus secular rates
//! per Julian century), good to a fraction of a degree over a few centuries
//! around the epoch. The Sun and Moon use short analytic series. Accuracy is
//! well inside the scorer's 2° orb for the modern era, which is all the
//! momentum score needs.

use crate::ephemeris::provider::{datetime_to_julian_day, EphemerisError, PositionProvider};
use crate::ephemeris::types::{normalize_degrees, Body, PlanetPosition};
use chrono::{DateTime, Datelike, Utc};

const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

pub const MIN_SUPPORTED_YEAR: i32 = 1000;
pub const MAX_SUPPORTED_YEAR: i32 = 3000;

/// (a, e, I, L, long. perihelion, long. ascending node) and their rates per century
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    base: [f64; 6],
    rate: [f64; 6],
}

const MERCURY: OrbitalElements = OrbitalElements {
    base: [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
    rate: [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
};
const VENUS: OrbitalElements = OrbitalElements {
    base: [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
    rate: [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
};
const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    base: [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    rate: [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
};
const MARS: OrbitalElements = OrbitalElements {
    base: [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
    rate: [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
};
const JUPITER: OrbitalElements = OrbitalElements {
    base: [5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909],
    rate: [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
};
const SATURN: OrbitalElements = OrbitalElements {
    base: [9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448],
    rate: [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794],
};
const URANUS: OrbitalElements = OrbitalElements {
    base: [19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503],
    rate: [-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589],
};
const NEPTUNE: OrbitalElements = OrbitalElements {
    base: [30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574],
    rate: [0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664],
};
const PLUTO: OrbitalElements = OrbitalElements {
    base: [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
    rate: [-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482],
};

fn elements_for(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon => None,
    }
}

/// Built-in provider based on mean orbital elements
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerianProvider;

impl KeplerianProvider {
    pub fn new() -> Self {
        Self
    }

    /// Apparent solar longitude from mean longitude and equation of centre
    pub fn solar_longitude(jd: f64) -> f64 {
        let n = jd - J2000;
        let mean_lon = 280.460 + 0.985_647_4 * n;
        let g = (357.528 + 0.985_600_3 * n).to_radians();
        normalize_degrees(mean_lon + 1.915 * g.sin() + 0.020 * (2.0 * g).sin())
    }

    /// Lunar longitude: mean longitude plus the six largest periodic terms
    pub fn lunar_longitude(jd: f64) -> f64 {
        let d = jd - J2000;
        let l = 218.316 + 13.176_396 * d; // mean longitude
        let m = (134.963 + 13.064_993 * d).to_radians(); // mean anomaly
        let ms = (357.529 + 0.985_600_28 * d).to_radians(); // solar mean anomaly
        let el = (297.850 + 12.190_749 * d).to_radians(); // mean elongation
        let f = (93.272 + 13.229_350 * d).to_radians(); // argument of latitude
        let lon = l
            + 6.289 * m.sin()
            + 1.274 * (2.0 * el - m).sin()
            + 0.658 * (2.0 * el).sin()
            + 0.214 * (2.0 * m).sin()
            - 0.186 * ms.sin()
            - 0.114 * (2.0 * f).sin();
        normalize_degrees(lon)
    }

    /// Geocentric ecliptic longitude of a planet
    pub fn planet_longitude(body: Body, jd: f64) -> Option<f64> {
        let elements = elements_for(body)?;
        let t = (jd - J2000) / DAYS_PER_CENTURY;
        let (px, py, _) = heliocentric(elements, t);
        let (ex, ey, _) = heliocentric(&EARTH_MOON_BARYCENTER, t);
        let lon = (py - ey).atan2(px - ex).to_degrees();
        Some(normalize_degrees(lon))
    }
}

impl PositionProvider for KeplerianProvider {
    fn positions(&self, at: DateTime<Utc>) -> Result<Vec<PlanetPosition>, EphemerisError> {
        let year = at.year();
        if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
            return Err(EphemerisError::UnsupportedDate {
                datetime: at,
                min_year: MIN_SUPPORTED_YEAR,
                max_year: MAX_SUPPORTED_YEAR,
            });
        }

        let jd = datetime_to_julian_day(at);
        Body::ALL
            .iter()
            .map(|&body| -> Result<PlanetPosition, EphemerisError> {
                let lon = match body {
                    Body::Sun => Self::solar_longitude(jd),
                    Body::Moon => Self::lunar_longitude(jd),
                    other => Self::planet_longitude(other, jd).ok_or_else(|| {
                        EphemerisError::CalculationFailed {
                            planet_id: other.to_string(),
                            datetime: at,
                            message: "no orbital elements".to_string(),
                        }
                    })?,
                };
                Ok(PlanetPosition::new(body, lon))
            })
            .collect()
    }
}

/// Heliocentric ecliptic coordinates (AU) at `t` Julian centuries from J2000
fn heliocentric(el: &OrbitalElements, t: f64) -> (f64, f64, f64) {
    let at = |i: usize| el.base[i] + el.rate[i] * t;
    let a = at(0);
    let e = at(1);
    let incl = at(2).to_radians();
    let mean_lon = at(3);
    let peri = at(4);
    let node = at(5);

    let mean_anomaly = normalize_degrees(mean_lon - peri).to_radians();
    let ecc_anomaly = solve_kepler(mean_anomaly, e);
    let arg_peri = (peri - node).to_radians();
    let node = node.to_radians();

    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
    let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
    let z = (sw * si) * xp + (cw * si) * yp;
    (x, y, z)
}

/// Newton iteration on E - e sin E = M (radians)
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..12 {
        let delta = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-10 {
            break;
        }
    }
    ecc
}
