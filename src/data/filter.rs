use std::fmt;

use super::model::{HospitalDataset, HospitalRecord, Selector};

// ---------------------------------------------------------------------------
// Selection: one dropdown's value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No constraint.
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Only(value) => f.write_str(value),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter state: one selection per selector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub service: Selection,
    pub insurer: Selection,
    pub hospital_type: Selection,
    pub state: Selection,
    pub ownership: Selection,
}

impl FilterState {
    pub fn get(&self, selector: Selector) -> &Selection {
        match selector {
            Selector::Service => &self.service,
            Selector::Insurer => &self.insurer,
            Selector::HospitalType => &self.hospital_type,
            Selector::State => &self.state,
            Selector::Ownership => &self.ownership,
        }
    }

    pub fn set(&mut self, selector: Selector, selection: Selection) {
        let slot = match selector {
            Selector::Service => &mut self.service,
            Selector::Insurer => &mut self.insurer,
            Selector::HospitalType => &mut self.hospital_type,
            Selector::State => &mut self.state,
            Selector::Ownership => &mut self.ownership,
        };
        *slot = selection;
    }

    /// Whether every selector is at "All".
    pub fn is_unconstrained(&self) -> bool {
        Selector::ALL.iter().all(|s| self.get(*s).is_all())
    }

    /// Build the active predicates for `dataset`.
    ///
    /// "All" selections produce nothing, and neither do selectors whose
    /// column the dataset lacks.
    pub fn predicates(&self, dataset: &HospitalDataset) -> Vec<Predicate> {
        Selector::ALL
            .into_iter()
            .filter(|s| dataset.has_column_for(*s))
            .filter_map(|s| match self.get(s) {
                Selection::All => None,
                Selection::Only(value) => Some(Predicate::new(s, value)),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring; `needle` is stored lowercased.
    Contains { selector: Selector, needle: String },
    Equals { selector: Selector, value: String },
}

impl Predicate {
    pub fn new(selector: Selector, value: &str) -> Self {
        if selector.is_delimited() {
            Predicate::Contains {
                selector,
                needle: value.to_lowercase(),
            }
        } else {
            Predicate::Equals {
                selector,
                value: value.trim().to_string(),
            }
        }
    }

    /// A missing field never matches.
    pub fn matches(&self, record: &HospitalRecord) -> bool {
        match self {
            Predicate::Contains { selector, needle } => record
                .field(*selector)
                .is_some_and(|field| field.to_lowercase().contains(needle.as_str())),
            Predicate::Equals { selector, value } => record
                .field(*selector)
                .is_some_and(|field| field.trim() == value),
        }
    }
}

/// Return indices of records that pass every predicate, in dataset order.
pub fn apply(dataset: &HospitalDataset, predicates: &[Predicate]) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| predicates.iter().all(|p| p.matches(record)))
        .map(|(i, _)| i)
        .collect()
}

/// Return indices of records passing all active filters.
pub fn filtered_indices(dataset: &HospitalDataset, filters: &FilterState) -> Vec<usize> {
    apply(dataset, &filters.predicates(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        name: &str,
        services: &str,
        insurance: &str,
        state: &str,
        hospital_type: Option<&str>,
    ) -> HospitalRecord {
        HospitalRecord {
            name: name.to_string(),
            services: services.to_string(),
            insurance: insurance.to_string(),
            hospital_type: hospital_type.map(str::to_string),
            ownership: None,
            state: state.to_string(),
            latitude: 40.0,
            longitude: -74.0,
            cells: Vec::new(),
        }
    }

    fn headers(with_type: bool) -> Vec<String> {
        let mut h: Vec<String> = [
            "Hospital Name",
            "Services",
            "Insurance Coverage",
            "State",
            "Latitude",
            "Longitude",
        ]
        .map(String::from)
        .to_vec();
        if with_type {
            h.push("Hospital Type".into());
        }
        h
    }

    fn three_hospitals() -> HospitalDataset {
        HospitalDataset::new(
            headers(true),
            vec![
                record("Mercy", "Cardiology, Oncology", "Aetna, Cigna", "NY", Some("Acute Care")),
                record("Bayview", "Pediatrics", "Medicare", "CA", Some("Acute Care")),
                record("Hilltop", "Trauma; Oncology", "Aetna", "TX", None),
            ],
        )
    }

    fn only(value: &str) -> Selection {
        Selection::Only(value.to_string())
    }

    #[test]
    fn all_selectors_yield_full_set() {
        let ds = three_hospitals();
        let filters = FilterState::default();
        assert!(filters.is_unconstrained());
        assert!(filters.predicates(&ds).is_empty());
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2]);
    }

    #[test]
    fn service_and_state_select_single_record() {
        let ds = three_hospitals();
        let mut filters = FilterState::default();
        filters.set(Selector::Service, only("Cardiology"));
        filters.set(Selector::State, only("NY"));
        assert_eq!(filtered_indices(&ds, &filters), vec![0]);

        filters.set(Selector::State, only("CA"));
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn substring_match_ignores_case() {
        let ds = three_hospitals();
        let mut filters = FilterState::default();
        filters.set(Selector::Service, only("oncology"));
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 2]);

        filters.set(Selector::Service, Selection::All);
        filters.set(Selector::Insurer, only("AETNA"));
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 2]);
    }

    #[test]
    fn exact_match_rejects_missing_values() {
        let ds = three_hospitals();
        let mut filters = FilterState::default();
        filters.set(Selector::HospitalType, only("Acute Care"));
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1]);

        filters.set(Selector::HospitalType, only("Acute"));
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn absent_column_disables_its_filter() {
        let ds = HospitalDataset::new(
            headers(false),
            vec![record("Mercy", "Cardiology", "Aetna", "NY", None)],
        );
        let mut filters = FilterState::default();
        filters.set(Selector::HospitalType, only("Acute Care"));
        filters.set(Selector::Ownership, only("Private"));
        assert!(filters.predicates(&ds).is_empty());
        assert_eq!(filtered_indices(&ds, &filters), vec![0]);
    }

    #[test]
    fn filtered_set_is_subset_of_cleaned_set() {
        let ds = three_hospitals();
        for state in ["All", "NY", "CA", "TX", "WA"] {
            for service in ["All", "Oncology", "Pediatrics"] {
                let mut filters = FilterState::default();
                if state != "All" {
                    filters.set(Selector::State, only(state));
                }
                if service != "All" {
                    filters.set(Selector::Service, only(service));
                }
                let idx = filtered_indices(&ds, &filters);
                assert!(idx.len() <= ds.len());
                assert!(idx.iter().all(|&i| i < ds.len()));
                assert!(idx.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn conjunction_is_commutative() {
        let ds = three_hospitals();
        let mut filters = FilterState::default();
        filters.set(Selector::Service, only("Oncology"));
        filters.set(Selector::Insurer, only("Aetna"));
        filters.set(Selector::HospitalType, only("Acute Care"));
        filters.set(Selector::State, only("NY"));

        let forward = filters.predicates(&ds);
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(2);

        let expected = apply(&ds, &forward);
        assert_eq!(expected, vec![0]);
        assert_eq!(apply(&ds, &reversed), expected);
        assert_eq!(apply(&ds, &rotated), expected);
    }

    #[test]
    fn selection_displays_sentinel() {
        assert_eq!(Selection::All.to_string(), "All");
        assert_eq!(only("NY").to_string(), "NY");
    }
}
