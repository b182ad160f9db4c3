//! Monthly phone statistics and their line-chart URL.
//!
//! `MonthlyStats` collects one sample per calendar month. `MonthlyStats::chart_url`
//! encodes the samples as a Google Chart API line chart: supported, valid (totals) and
//! total (all) records, plus a hidden zero baseline that pins the y axis at 0.

use url::form_urlencoded;

const CHART_WIDTH: u32 = 600;
const CHART_HEIGHT: u32 = 300;
const BACKGROUND_COLOUR: &str = "ffd480";
const STRIPE_COLOUR: &str = "ffe4a0";
const SERIES_COLOURS: [&str; 4] = ["00FF00", "FF0000", "0000FF", "00000000"];
const LEGEND: [&str; 3] = ["Supported phones", "Valid records", "Total records"];
/// Width of one background stripe, in months.
const MONTH_STRIPES: f64 = 3.0;
const GRID: &str = "0,10,5,5";

/// Extended encoding alphabet; each value is written as two characters.
const EXTENDED_ENCODING: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-.";
const EXTENDED_MAX: u64 = 4095;

/// Parallel per-month series, oldest month first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyStats {
    /// `YYYY-MM` for every month.
    pub labels: Vec<String>,
    /// The year on January samples, empty otherwise.
    pub years: Vec<String>,
    /// Non-deleted records with connection info.
    pub supported: Vec<u64>,
    /// Non-deleted records without connection info.
    pub unsupported: Vec<u64>,
    /// `supported + unsupported`.
    pub totals: Vec<u64>,
    /// All records regardless of state.
    pub alls: Vec<u64>,
}

impl MonthlyStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the sample for one month.
    pub fn push(&mut self, year: i32, month: u32, supported: u64, unsupported: u64, all: u64) {
        self.years.push(if month == 1 {
            year.to_string()
        } else {
            String::new()
        });
        self.labels.push(format!("{}-{:02}", year, month));
        self.supported.push(supported);
        self.unsupported.push(unsupported);
        self.totals.push(supported + unsupported);
        self.alls.push(all);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Smallest multiple of 100 strictly greater than the largest "all" sample.
    pub fn y_max(&self) -> u64 {
        let max_all = self.alls.iter().copied().max().unwrap_or(0);
        (max_all / 100 + 1) * 100
    }

    /// Renders the statistics as a line chart URL rooted at `base_url`.
    ///
    /// `base_url` must end with the query separator, e.g. `http://host/chart?`.
    pub fn chart_url(&self, base_url: &str) -> String {
        let y_max = self.y_max();

        let data = [
            encode_series(&self.supported, y_max),
            encode_series(&self.totals, y_max),
            encode_series(&self.alls, y_max),
            encode_series(&[0, 0], y_max),
        ]
        .join(",");

        let legend = LEGEND.iter().map(|label| quote(label)).collect::<Vec<_>>();

        // Guard against an empty range so the stripe width stays finite.
        let stripe = MONTH_STRIPES / self.len().max(1) as f64;
        let fill = format!(
            "bg,s,{bg}|c,ls,0,{stripe_colour},{stripe},{bg},{stripe}",
            bg = BACKGROUND_COLOUR,
            stripe_colour = STRIPE_COLOUR,
            stripe = stripe,
        );

        let step = (y_max / 10).max(1) as usize;
        let mut left_axis: Vec<String> = (0..=y_max)
            .step_by(step)
            .map(|value| value.to_string())
            .collect();
        if let Some(first) = left_axis.first_mut() {
            first.clear();
        }

        let params = [
            "cht=lc".to_string(),
            format!("chs={}x{}", CHART_WIDTH, CHART_HEIGHT),
            format!("chd=e:{}", data),
            format!("chdl={}", legend.join("|")),
            format!("chco={}", SERIES_COLOURS.join(",")),
            format!("chf={}", fill),
            "chxt=y,x".to_string(),
            format!(
                "chxl=0:|{}|1:|{}",
                left_axis.join("|"),
                self.years.join("|")
            ),
            format!("chg={}", GRID),
        ];

        format!("{}{}", base_url, params.join("&"))
    }
}

/// Scales `values` onto 0..=4095 over `[0, upper]` and writes them in extended encoding.
fn encode_series(values: &[u64], upper: u64) -> String {
    let mut encoded = String::with_capacity(values.len() * 2);
    for &value in values {
        let scaled = ((value as f64) * EXTENDED_MAX as f64 / upper.max(1) as f64).round() as u64;
        let scaled = scaled.min(EXTENDED_MAX) as usize;
        encoded.push(EXTENDED_ENCODING[scaled / 64] as char);
        encoded.push(EXTENDED_ENCODING[scaled % 64] as char);
    }
    encoded
}

/// Percent-encodes a legend label, spaces as `%20`.
fn quote(label: &str) -> String {
    form_urlencoded::byte_serialize(label.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
