//! Screw thread standards.
//!
//! [`ThreadTable`] maps a thread name (`"M8x1.25"`, `"unc_1/4"`, ...) to the
//! [`ThreadRecord`] holding its radius, pitch, taper and the matching hex
//! head size. The table is immutable once built and can be shared freely
//! across threads.

use std::collections::HashMap;
use std::f64::consts::FRAC_PI_6;
use std::sync::OnceLock;

/// Length unit a thread record is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Millimeter,
    Inch,
}

/// Geometry of one thread standard.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadRecord {
    pub name: String,
    /// Nominal major radius.
    pub radius: f64,
    /// Distance between adjacent thread crests.
    pub pitch: f64,
    /// Taper angle in radians, zero for parallel threads.
    pub taper: f64,
    /// Across-flats width of the matching hex head.
    pub hex_flat_to_flat: f64,
    pub units: Units,
}

impl ThreadRecord {
    /// Corner (circumscribed) radius of the matching hex head.
    pub fn hex_radius(&self) -> f64 {
        self.hex_flat_to_flat / (2.0 * FRAC_PI_6.cos())
    }

    /// Height of the matching hex head (empirical, 5/12 of its corner diameter).
    pub fn hex_height(&self) -> f64 {
        2.0 * self.hex_radius() * (5.0 / 12.0)
    }

    fn iso(name: &str, diameter: f64, pitch: f64, flat_to_flat: f64) -> Self {
        Self {
            name: name.to_string(),
            radius: diameter / 2.0,
            pitch,
            taper: 0.0,
            hex_flat_to_flat: flat_to_flat,
            units: Units::Millimeter,
        }
    }

    fn uts(name: &str, diameter: f64, tpi: f64, flat_to_flat: f64) -> Self {
        Self {
            name: name.to_string(),
            radius: diameter / 2.0,
            pitch: 1.0 / tpi,
            taper: 0.0,
            hex_flat_to_flat: flat_to_flat,
            units: Units::Inch,
        }
    }

    fn npt(name: &str, diameter: f64, tpi: f64, flat_to_flat: f64) -> Self {
        Self {
            taper: (1.0_f64 / 32.0).atan(),
            ..Self::uts(name, diameter, tpi, flat_to_flat)
        }
    }
}

/// Name-indexed collection of thread records.
#[derive(Debug, Clone, Default)]
pub struct ThreadTable {
    records: HashMap<String, ThreadRecord>,
}

// (name, diameter mm, pitch mm, hex across flats mm)
const ISO_COARSE: &[(&str, f64, f64, f64)] = &[
    ("M1.6x0.35", 1.6, 0.35, 3.2),
    ("M2x0.4", 2.0, 0.4, 4.0),
    ("M2.5x0.45", 2.5, 0.45, 5.0),
    ("M3x0.5", 3.0, 0.5, 6.0),
    ("M4x0.7", 4.0, 0.7, 7.0),
    ("M5x0.8", 5.0, 0.8, 8.0),
    ("M6x1", 6.0, 1.0, 10.0),
    ("M8x1.25", 8.0, 1.25, 13.0),
    ("M10x1.5", 10.0, 1.5, 17.0),
    ("M12x1.75", 12.0, 1.75, 19.0),
    ("M16x2", 16.0, 2.0, 24.0),
    ("M20x2.5", 20.0, 2.5, 30.0),
    ("M24x3", 24.0, 3.0, 36.0),
    ("M30x3.5", 30.0, 3.5, 46.0),
    ("M36x4", 36.0, 4.0, 55.0),
    ("M42x4.5", 42.0, 4.5, 65.0),
    ("M48x5", 48.0, 5.0, 75.0),
    ("M56x5.5", 56.0, 5.5, 85.0),
    ("M64x6", 64.0, 6.0, 95.0),
];

const ISO_FINE: &[(&str, f64, f64, f64)] = &[
    ("M1.6x0.2", 1.6, 0.2, 3.2),
    ("M2x0.25", 2.0, 0.25, 4.0),
    ("M2.5x0.35", 2.5, 0.35, 5.0),
    ("M3x0.35", 3.0, 0.35, 6.0),
    ("M4x0.5", 4.0, 0.5, 7.0),
    ("M5x0.5", 5.0, 0.5, 8.0),
    ("M6x0.75", 6.0, 0.75, 10.0),
    ("M8x1", 8.0, 1.0, 13.0),
    ("M10x1.25", 10.0, 1.25, 17.0),
    ("M12x1.5", 12.0, 1.5, 19.0),
    ("M16x1.5", 16.0, 1.5, 24.0),
    ("M20x2", 20.0, 2.0, 30.0),
    ("M24x2", 24.0, 2.0, 36.0),
    ("M30x2", 30.0, 2.0, 46.0),
    ("M36x3", 36.0, 3.0, 55.0),
    ("M42x3", 42.0, 3.0, 65.0),
    ("M48x3", 48.0, 3.0, 75.0),
    ("M56x4", 56.0, 4.0, 85.0),
    ("M64x4", 64.0, 4.0, 95.0),
];

// (name, diameter in, threads per inch, hex across flats in)
const UTS_COARSE: &[(&str, f64, f64, f64)] = &[
    ("unc_1/4", 1.0 / 4.0, 20.0, 7.0 / 16.0),
    ("unc_5/16", 5.0 / 16.0, 18.0, 1.0 / 2.0),
    ("unc_3/8", 3.0 / 8.0, 16.0, 9.0 / 16.0),
    ("unc_7/16", 7.0 / 16.0, 14.0, 5.0 / 8.0),
    ("unc_1/2", 1.0 / 2.0, 13.0, 3.0 / 4.0),
    ("unc_9/16", 9.0 / 16.0, 12.0, 13.0 / 16.0),
    ("unc_5/8", 5.0 / 8.0, 11.0, 15.0 / 16.0),
    ("unc_3/4", 3.0 / 4.0, 10.0, 9.0 / 8.0),
    ("unc_7/8", 7.0 / 8.0, 9.0, 21.0 / 16.0),
    ("unc_1", 1.0, 8.0, 3.0 / 2.0),
];

const UTS_FINE: &[(&str, f64, f64, f64)] = &[
    ("unf_1/4", 1.0 / 4.0, 28.0, 7.0 / 16.0),
    ("unf_5/16", 5.0 / 16.0, 24.0, 1.0 / 2.0),
    ("unf_3/8", 3.0 / 8.0, 24.0, 9.0 / 16.0),
    ("unf_7/16", 7.0 / 16.0, 20.0, 5.0 / 8.0),
    ("unf_1/2", 1.0 / 2.0, 20.0, 3.0 / 4.0),
    ("unf_9/16", 9.0 / 16.0, 18.0, 13.0 / 16.0),
    ("unf_5/8", 5.0 / 8.0, 18.0, 15.0 / 16.0),
    ("unf_3/4", 3.0 / 4.0, 16.0, 9.0 / 8.0),
    ("unf_7/8", 7.0 / 8.0, 14.0, 21.0 / 16.0),
    ("unf_1", 1.0, 12.0, 3.0 / 2.0),
];

// National pipe thread, outside diameter of the pipe.
const NPT: &[(&str, f64, f64, f64)] = &[
    ("npt_1/8", 0.405, 27.0, 11.0 / 16.0),
    ("npt_1/4", 0.540, 18.0, 7.0 / 8.0),
    ("npt_3/8", 0.675, 18.0, 1.0),
    ("npt_1/2", 0.840, 14.0, 1.0 + 1.0 / 8.0),
    ("npt_3/4", 1.050, 14.0, 1.0 + 5.0 / 16.0),
    ("npt_1", 1.315, 11.5, 1.0 + 1.0 / 2.0),
    ("npt_1_1/4", 1.660, 11.5, 1.0 + 13.0 / 16.0),
    ("npt_1_1/2", 1.900, 11.5, 2.0 + 1.0 / 16.0),
    ("npt_2", 2.375, 11.5, 2.0 + 9.0 / 16.0),
];

impl ThreadTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in ISO metric, UTS and NPT thread table.
    ///
    /// Metric coarse threads are also registered under their bare
    /// diameter, so `"M8"` resolves to `"M8x1.25"`.
    pub fn standard() -> &'static ThreadTable {
        static STANDARD: OnceLock<ThreadTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut table = ThreadTable::new();
            for &(name, d, pitch, f2f) in ISO_COARSE {
                let record = ThreadRecord::iso(name, d, pitch, f2f);
                if let Some((alias, _)) = name.split_once('x') {
                    table.insert_as(alias, record.clone());
                }
                table.insert(record);
            }
            for &(name, d, pitch, f2f) in ISO_FINE {
                table.insert(ThreadRecord::iso(name, d, pitch, f2f));
            }
            for &(name, d, tpi, f2f) in UTS_COARSE.iter().chain(UTS_FINE) {
                table.insert(ThreadRecord::uts(name, d, tpi, f2f));
            }
            for &(name, d, tpi, f2f) in NPT {
                table.insert(ThreadRecord::npt(name, d, tpi, f2f));
            }
            table
        })
    }

    /// Register `record` under its own name, replacing any previous entry.
    pub fn insert(&mut self, record: ThreadRecord) {
        self.records.insert(record.name.clone(), record);
    }

    /// Register `record` under an additional lookup name.
    pub fn insert_as(&mut self, name: &str, record: ThreadRecord) {
        self.records.insert(name.to_string(), record);
    }

    /// Exact-match lookup by name.
    pub fn lookup(&self, name: &str) -> Option<&ThreadRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All registered lookup names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
