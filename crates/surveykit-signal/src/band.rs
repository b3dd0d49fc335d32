//! # Channel → Band Resolution
//!
//! Maps an absolute radio frequency channel number (EARFCN for LTE,
//! NR-ARFCN for 5G) to a 3GPP band label via per-generation range tables.
//!
//! The tables are process-lifetime constants: read-only after link time,
//! safe for concurrent lookup from any thread, no lazy-init machinery.
//!
//! ## Row order is behavior
//!
//! Resolution scans each table top to bottom and the **first** inclusive
//! range containing the channel wins. The NR table contains genuinely
//! overlapping rows: bands 2 and 34 both span 386000–398000, and bands
//! 77/78/257 share the 620000+ C-band/mmWave plan. That reflects real
//! shared-spectrum allocations; without carrier context there is no
//! "right" answer, so the declared order is the accepted tie-break. Do
//! not re-sort, deduplicate, or truncate these rows.

use surveykit_common::record::Generation;

// ── Range Tables ────────────────────────────────────────────────────

/// One row of a channel-number range table. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandRange {
    pub low: u32,
    pub high: u32,
    /// 3GPP band number.
    pub band: u16,
}

/// LTE EARFCN ranges (major bands).
pub const LTE_BAND_RANGES: &[BandRange] = &[
    BandRange { low: 0, high: 599, band: 1 },
    BandRange { low: 600, high: 1199, band: 2 },
    BandRange { low: 1200, high: 1949, band: 3 },
    BandRange { low: 1950, high: 2399, band: 4 },
    BandRange { low: 2400, high: 2649, band: 5 },
    BandRange { low: 2650, high: 2749, band: 6 },
    BandRange { low: 2750, high: 3449, band: 7 },
    BandRange { low: 3450, high: 3799, band: 8 },
    BandRange { low: 3800, high: 4149, band: 9 },
    BandRange { low: 4150, high: 4749, band: 10 },
    BandRange { low: 4750, high: 4949, band: 11 },
    BandRange { low: 5010, high: 5179, band: 12 },
    BandRange { low: 5180, high: 5279, band: 13 },
    BandRange { low: 5280, high: 5379, band: 14 },
    BandRange { low: 5730, high: 5849, band: 17 },
    BandRange { low: 5850, high: 5999, band: 18 },
    BandRange { low: 6000, high: 6149, band: 19 },
    BandRange { low: 6150, high: 6449, band: 20 },
    BandRange { low: 6450, high: 6599, band: 21 },
    BandRange { low: 6600, high: 7399, band: 22 },
    BandRange { low: 7500, high: 7699, band: 23 },
    BandRange { low: 7700, high: 8039, band: 24 },
    BandRange { low: 8040, high: 8689, band: 25 },
    BandRange { low: 8690, high: 9039, band: 26 },
    BandRange { low: 9040, high: 9209, band: 27 },
    BandRange { low: 9210, high: 9659, band: 28 },
    BandRange { low: 9660, high: 9769, band: 29 },
    BandRange { low: 9770, high: 9869, band: 30 },
    BandRange { low: 9870, high: 9919, band: 31 },
    BandRange { low: 36000, high: 36199, band: 33 },
    BandRange { low: 36200, high: 36349, band: 34 },
    BandRange { low: 36350, high: 36949, band: 35 },
    BandRange { low: 36950, high: 37549, band: 36 },
    BandRange { low: 37550, high: 37749, band: 37 },
    BandRange { low: 37750, high: 38249, band: 38 },
    BandRange { low: 38250, high: 38649, band: 39 },
    BandRange { low: 38650, high: 39649, band: 40 },
    BandRange { low: 39650, high: 41589, band: 41 },
    BandRange { low: 41590, high: 43589, band: 42 },
    BandRange { low: 43590, high: 45589, band: 43 },
    BandRange { low: 45590, high: 46589, band: 44 },
    BandRange { low: 46590, high: 46789, band: 45 },
    BandRange { low: 46790, high: 54539, band: 46 },
    BandRange { low: 54540, high: 55239, band: 47 },
    BandRange { low: 55240, high: 56739, band: 48 },
    BandRange { low: 56740, high: 58239, band: 49 },
    BandRange { low: 58240, high: 59089, band: 50 },
    BandRange { low: 59090, high: 59139, band: 51 },
    BandRange { low: 59140, high: 60139, band: 52 },
    BandRange { low: 60140, high: 60254, band: 53 },
    BandRange { low: 65536, high: 66435, band: 65 },
    BandRange { low: 66436, high: 67335, band: 66 },
    BandRange { low: 67336, high: 67535, band: 67 },
    BandRange { low: 67536, high: 67835, band: 68 },
    BandRange { low: 68336, high: 68585, band: 70 },
    BandRange { low: 68586, high: 68935, band: 71 },
    BandRange { low: 68936, high: 68985, band: 72 },
    BandRange { low: 68986, high: 69035, band: 73 },
    BandRange { low: 69036, high: 69465, band: 74 },
    BandRange { low: 69466, high: 70315, band: 85 },
];

/// 5G NR-ARFCN ranges (major bands). Overlapping rows are intentional;
/// see the module docs.
pub const NR_BAND_RANGES: &[BandRange] = &[
    BandRange { low: 422000, high: 434000, band: 1 },
    BandRange { low: 386000, high: 398000, band: 2 },
    BandRange { low: 361000, high: 376000, band: 3 },
    BandRange { low: 173800, high: 178800, band: 5 },
    BandRange { low: 524000, high: 538000, band: 7 },
    BandRange { low: 185000, high: 192000, band: 8 },
    BandRange { low: 145800, high: 149200, band: 12 },
    BandRange { low: 151600, high: 153600, band: 13 },
    BandRange { low: 157600, high: 161600, band: 14 },
    BandRange { low: 158200, high: 164200, band: 18 },
    BandRange { low: 172000, high: 175000, band: 20 },
    BandRange { low: 285400, high: 286400, band: 25 },
    BandRange { low: 171800, high: 178800, band: 26 },
    BandRange { low: 151600, high: 160600, band: 28 },
    BandRange { low: 386000, high: 398000, band: 34 },
    BandRange { low: 402000, high: 405000, band: 38 },
    BandRange { low: 376000, high: 384000, band: 39 },
    BandRange { low: 460000, high: 480000, band: 40 },
    BandRange { low: 499200, high: 537999, band: 41 },
    BandRange { low: 514080, high: 524000, band: 48 },
    BandRange { low: 286400, high: 303400, band: 66 },
    BandRange { low: 285400, high: 286400, band: 70 },
    BandRange { low: 295000, high: 303600, band: 71 },
    BandRange { low: 620000, high: 680000, band: 77 },
    BandRange { low: 620000, high: 653333, band: 78 },
    BandRange { low: 693334, high: 733333, band: 79 },
    BandRange { low: 620000, high: 680000, band: 257 },
    BandRange { low: 2016667, high: 2070832, band: 258 },
    BandRange { low: 2229166, high: 2279165, band: 260 },
    BandRange { low: 2070833, high: 2084999, band: 261 },
];

// ── Band Label ──────────────────────────────────────────────────────

/// Outcome of a band resolution.
///
/// `Unknown` and `Unavailable` are distinct on purpose: `Unknown` means
/// a channel number was given but matched no declared range;
/// `Unavailable` means there was no channel number to even attempt
/// resolution with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandLabel {
    Lte(u16),
    Nr(u16),
    Unknown,
    Unavailable,
}

impl std::fmt::Display for BandLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandLabel::Lte(n) => write!(f, "B{n}"),
            BandLabel::Nr(n) => write!(f, "n{n}"),
            BandLabel::Unknown => write!(f, "Unknown"),
            BandLabel::Unavailable => write!(f, "N/A"),
        }
    }
}

// ── Resolution ──────────────────────────────────────────────────────

/// Resolve a channel number to a band label for the given generation.
///
/// Pure lookup over the const tables; the only "failure" mode is the
/// in-band `Unknown`/`Unavailable`. Generations without a channel-number
/// plan (UMTS, GSM, unclassified) always resolve `Unavailable`.
pub fn resolve_band(generation: Generation, channel: Option<u32>) -> BandLabel {
    let Some(channel) = channel else {
        return BandLabel::Unavailable;
    };

    match generation {
        Generation::Lte => match first_match(LTE_BAND_RANGES, channel) {
            Some(band) => BandLabel::Lte(band),
            None => {
                tracing::debug!(channel, "EARFCN outside every declared LTE range");
                BandLabel::Unknown
            }
        },
        Generation::Nr => match first_match(NR_BAND_RANGES, channel) {
            Some(band) => BandLabel::Nr(band),
            None => {
                tracing::debug!(channel, "NR-ARFCN outside every declared NR range");
                BandLabel::Unknown
            }
        },
        Generation::Umts | Generation::Gsm | Generation::Other => BandLabel::Unavailable,
    }
}

/// First declared range containing `channel`, inclusive on both bounds.
fn first_match(table: &[BandRange], channel: u32) -> Option<u16> {
    table
        .iter()
        .find(|r| r.low <= channel && channel <= r.high)
        .map(|r| r.band)
}

// ── Tests ───────────────────────────────────────────────────────────
