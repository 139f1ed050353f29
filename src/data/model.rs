// ---------------------------------------------------------------------------
// Row – one parsed CSV line
// ---------------------------------------------------------------------------

/// Positional layout of the portfolio CSV (no header row).
pub const FIELD_NAME: usize = 0;
pub const FIELD_PRICE: usize = 1;
pub const FIELD_TARGET: usize = 4;

/// One parsed CSV line: an ordered sequence of trimmed string fields.
///
/// Field 0 is the asset name, field 1 the current price and field 4 the
/// target price; everything else is opaque labeled data passed through
/// to the renderer. Short rows are legal; missing fields read as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Row { fields }
    }

    /// Field at `idx`, if present.
    pub fn field(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }

    /// Asset name (empty string for blank/short rows).
    pub fn name(&self) -> &str {
        self.field(FIELD_NAME).unwrap_or("")
    }

    /// Raw current-price field, untouched for display.
    pub fn price_raw(&self) -> Option<&str> {
        self.field(FIELD_PRICE)
    }

    /// Current price parsed as a float.
    pub fn price(&self) -> Option<f64> {
        parse_numeric(self.price_raw())
    }

    /// Target price parsed as a float.
    pub fn target(&self) -> Option<f64> {
        parse_numeric(self.field(FIELD_TARGET))
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

fn parse_numeric(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
}

// ---------------------------------------------------------------------------
// Portfolio – the complete parsed dataset
// ---------------------------------------------------------------------------

/// All rows of one refresh, in input (line) order. Rebuilt wholesale on
/// every refresh; never mutated in place. The first field serves as a
/// lookup key for thresholds but uniqueness is not enforced.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    rows: Vec<Row>,
}

impl Portfolio {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Portfolio { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows (including blank ones the renderer will skip).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row, used by the table view to size its column set.
    pub fn max_fields(&self) -> usize {
        self.rows.iter().map(|r| r.fields.len()).max().unwrap_or(0)
    }
}
