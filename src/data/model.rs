use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Source column names
// ---------------------------------------------------------------------------

pub mod columns {
    pub const HOSPITAL_NAME: &str = "Hospital Name";
    pub const SERVICES: &str = "Services";
    pub const INSURANCE_COVERAGE: &str = "Insurance Coverage";
    pub const HOSPITAL_TYPE: &str = "Hospital Type";
    pub const HOSPITAL_OWNERSHIP: &str = "Hospital Ownership";
    pub const STATE: &str = "State";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";

    /// Columns a source file must carry to be loadable.
    pub const REQUIRED: [&str; 6] = [
        HOSPITAL_NAME,
        SERVICES,
        INSURANCE_COVERAGE,
        STATE,
        LATITUDE,
        LONGITUDE,
    ];
}

// ---------------------------------------------------------------------------
// HospitalRow – one deserialized CSV row, coordinates still raw text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HospitalRow {
    #[serde(rename = "Hospital Name")]
    pub name: String,
    #[serde(rename = "Services")]
    pub services: String,
    #[serde(rename = "Insurance Coverage")]
    pub insurance: String,
    #[serde(rename = "Hospital Type", default)]
    pub hospital_type: Option<String>,
    #[serde(rename = "Hospital Ownership", default)]
    pub ownership: Option<String>,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
}

/// A loaded row: typed view plus the original cells in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub fields: HospitalRow,
    pub cells: Vec<String>,
}

/// The loader's output, before any coordinate cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

// ---------------------------------------------------------------------------
// Selector – the five filterable attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selector {
    Service,
    Insurer,
    HospitalType,
    State,
    Ownership,
}

impl Selector {
    /// Sidebar order.
    pub const ALL: [Selector; 5] = [
        Selector::Service,
        Selector::Insurer,
        Selector::HospitalType,
        Selector::State,
        Selector::Ownership,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Selector::Service => "Select a Service:",
            Selector::Insurer => "Select an Insurer:",
            Selector::HospitalType => "Select Hospital Type:",
            Selector::State => "Select a State:",
            Selector::Ownership => "Select Hospital Ownership:",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Selector::Service => columns::SERVICES,
            Selector::Insurer => columns::INSURANCE_COVERAGE,
            Selector::HospitalType => columns::HOSPITAL_TYPE,
            Selector::State => columns::STATE,
            Selector::Ownership => columns::HOSPITAL_OWNERSHIP,
        }
    }

    /// Delimited text fields are matched by substring and offer their
    /// individual entries as options.
    pub fn is_delimited(self) -> bool {
        matches!(self, Selector::Service | Selector::Insurer)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// HospitalRecord – one cleaned row
// ---------------------------------------------------------------------------

/// A hospital whose coordinates parsed as finite numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalRecord {
    pub name: String,
    pub services: String,
    pub insurance: String,
    pub hospital_type: Option<String>,
    pub ownership: Option<String>,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Original cells in header order, for the results table.
    pub cells: Vec<String>,
}

impl HospitalRecord {
    /// The value a selector inspects, `None` when the cell is empty.
    pub fn field(&self, selector: Selector) -> Option<&str> {
        let value = match selector {
            Selector::Service => Some(self.services.as_str()),
            Selector::Insurer => Some(self.insurance.as_str()),
            Selector::HospitalType => self.hospital_type.as_deref(),
            Selector::State => Some(self.state.as_str()),
            Selector::Ownership => self.ownership.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// HospitalDataset – the cleaned record set
// ---------------------------------------------------------------------------

/// Characters separating entries in the Services / Insurance Coverage cells.
const LIST_DELIMITERS: [char; 3] = [',', ';', '|'];

#[derive(Debug, Clone, PartialEq)]
pub struct HospitalDataset {
    /// Source header row, in file order.
    pub headers: Vec<String>,
    pub records: Vec<HospitalRecord>,
    /// For each selector the sorted set of values offered in its dropdown.
    pub options: BTreeMap<Selector, BTreeSet<String>>,
    has_hospital_type: bool,
    has_ownership: bool,
}

impl HospitalDataset {
    /// Build selector indices from the cleaned records.
    pub fn new(headers: Vec<String>, records: Vec<HospitalRecord>) -> Self {
        let has_hospital_type = headers.iter().any(|h| h == columns::HOSPITAL_TYPE);
        let has_ownership = headers.iter().any(|h| h == columns::HOSPITAL_OWNERSHIP);

        let mut options: BTreeMap<Selector, BTreeSet<String>> = BTreeMap::new();
        for selector in Selector::ALL {
            let values = options.entry(selector).or_default();
            // Delimited entries match case-insensitively; keep one spelling each.
            let mut seen: HashSet<String> = HashSet::new();
            for record in &records {
                let Some(value) = record.field(selector) else {
                    continue;
                };
                if selector.is_delimited() {
                    for entry in split_entries(value) {
                        if seen.insert(entry.to_lowercase()) {
                            values.insert(entry.to_string());
                        }
                    }
                } else {
                    values.insert(value.trim().to_string());
                }
            }
        }

        HospitalDataset {
            headers,
            records,
            options,
            has_hospital_type,
            has_ownership,
        }
    }

    /// Whether the source file carried the column a selector filters on.
    pub fn has_column_for(&self, selector: Selector) -> bool {
        match selector {
            Selector::HospitalType => self.has_hospital_type,
            Selector::Ownership => self.has_ownership,
            _ => true,
        }
    }

    pub fn options_for(&self, selector: Selector) -> impl Iterator<Item = &String> {
        self.options.get(&selector).into_iter().flatten()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn split_entries(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(LIST_DELIMITERS)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

// ---------------------------------------------------------------------------
// UserLocation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for UserLocation {
    fn default() -> Self {
        crate::config::DEFAULT_LOCATION
    }
}

impl fmt::Display for UserLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
