//! Draft state for the seven-section village wizard, shared by the create
//! and edit pages.
//!
//! The draft mirrors the wire shape. Sub-sections are lazily materialized:
//! in edit mode a slice the backend returned as null stays `None` until the
//! user first touches a field in it, at which point the whole slice appears
//! with its documented defaults plus the touched field.

use payloads::{
    CommunityLife, Infrastructure, Internet, Leisure, Transport,
    VillageDetails, VillageLink,
};

/// Tab order of the wizard. Position in this array drives the progress
/// indicator; completion is advisory and never blocks stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Basic,
    Infrastructure,
    Internet,
    Transport,
    Community,
    Leisure,
    Links,
}

impl Section {
    pub const ORDER: [Section; 7] = [
        Self::Basic,
        Self::Infrastructure,
        Self::Internet,
        Self::Transport,
        Self::Community,
        Self::Leisure,
        Self::Links,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Infrastructure => "Infrastructure",
            Self::Internet => "Internet",
            Self::Transport => "Transport",
            Self::Community => "Community",
            Self::Leisure => "Leisure",
            Self::Links => "Links",
        }
    }

    pub fn position(&self) -> usize {
        Self::ORDER.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Option<Section> {
        Self::ORDER.get(self.position() + 1).copied()
    }

    pub fn previous(&self) -> Option<Section> {
        self.position().checked_sub(1).map(|i| Self::ORDER[i])
    }
}

/// One error string per failing required field of the basic section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasicErrors {
    pub name: Option<&'static str>,
    pub county: Option<&'static str>,
    pub population: Option<&'static str>,
    pub description: Option<&'static str>,
    pub latitude: Option<&'static str>,
    pub longitude: Option<&'static str>,
}

impl BasicErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.county.is_none()
            && self.population.is_none()
            && self.description.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VillageDraft {
    pub details: VillageDetails,
}

impl VillageDraft {
    /// Create mode: every slice starts materialized so the wizard shows
    /// editable defaults from the first render.
    pub fn new() -> Self {
        Self {
            details: VillageDetails {
                infrastructure: Some(Infrastructure::default()),
                internet: Some(Internet::default()),
                transport: Some(Transport::default()),
                community: Some(CommunityLife::default()),
                leisure: Some(Leisure::default()),
                ..Default::default()
            },
        }
    }

    /// Edit mode: absent slices stay absent until first touched.
    pub fn from_existing(details: VillageDetails) -> Self {
        Self { details }
    }

    // Lazy slice accessors. Calling one counts as touching the section.

    pub fn infrastructure_mut(&mut self) -> &mut Infrastructure {
        self.details.infrastructure.get_or_insert_with(Default::default)
    }

    pub fn internet_mut(&mut self) -> &mut Internet {
        self.details.internet.get_or_insert_with(Default::default)
    }

    pub fn transport_mut(&mut self) -> &mut Transport {
        self.details.transport.get_or_insert_with(Default::default)
    }

    pub fn community_mut(&mut self) -> &mut CommunityLife {
        self.details.community.get_or_insert_with(Default::default)
    }

    pub fn leisure_mut(&mut self) -> &mut Leisure {
        self.details.leisure.get_or_insert_with(Default::default)
    }

    // Link list operations. Links have no stable identity before they are
    // persisted; removal re-indexes the rest.

    pub fn add_link(&mut self) {
        self.details.links.push(VillageLink::default());
    }

    pub fn remove_link(&mut self, index: usize) {
        if index < self.details.links.len() {
            self.details.links.remove(index);
        }
    }

    pub fn update_link_title(&mut self, index: usize, title: String) {
        if let Some(link) = self.details.links.get_mut(index) {
            link.title = title;
        }
    }

    pub fn update_link_url(&mut self, index: usize, url: String) {
        if let Some(link) = self.details.links.get_mut(index) {
            link.url = url;
        }
    }

    /// Advisory per-section completion. Feedback only: an incomplete
    /// section never blocks navigation or submission.
    pub fn is_complete(&self, section: Section) -> bool {
        let d = &self.details;
        match section {
            Section::Basic => {
                !d.name.trim().is_empty()
                    && !d.county.trim().is_empty()
                    && d.population > 0
                    && !d.description.trim().is_empty()
                    && d.latitude != 0.0
                    && d.longitude != 0.0
            }
            Section::Infrastructure => d.infrastructure.as_ref().is_some_and(|i| {
                i.has_grocery_store
                    || i.has_pharmacy
                    || i.has_school
                    || i.has_kindergarten
                    || i.restaurants_count > 0
                    || i.grocery_store_distance_km.is_some()
                    || i.hospital_distance_km.is_some()
            }),
            Section::Internet => d.internet.as_ref().is_some_and(|i| {
                i.average_speed_mbps > 0 && !i.types.is_empty()
            }),
            Section::Transport => d.transport.as_ref().is_some_and(|t| {
                t.has_bus_stop
                    || t.bus_lines_count > 0
                    || t.train_station_distance_km.is_some()
                    || t.airport_distance_km.is_some()
            }),
            Section::Community => d.community.as_ref().is_some_and(|c| {
                c.has_community_center
                    || c.has_village_society
                    || c.annual_events_count > 0
            }),
            Section::Leisure => d.leisure.as_ref().is_some_and(|l| {
                l.has_playground
                    || l.has_sports_field
                    || l.has_hiking_trails
                    || l.beach_distance_km.is_some()
                    || l.forest_distance_km.is_some()
            }),
            Section::Links => {
                d.links.iter().any(|l| !l.url.trim().is_empty())
            }
        }
    }

    /// Submit-time validation. Only the basic section is checked; the
    /// caller jumps the active tab back to `Section::Basic` when this is
    /// non-empty.
    pub fn validate_basic(&self) -> BasicErrors {
        let d = &self.details;
        BasicErrors {
            name: d
                .name
                .trim()
                .is_empty()
                .then_some("Village name is required"),
            county: d
                .county
                .trim()
                .is_empty()
                .then_some("County is required"),
            population: (d.population == 0)
                .then_some("Population must be greater than zero"),
            description: d
                .description
                .trim()
                .is_empty()
                .then_some("Description is required"),
            latitude: (d.latitude == 0.0)
                .then_some("Latitude is required"),
            longitude: (d.longitude == 0.0)
                .then_some("Longitude is required"),
        }
    }
}

impl Default for VillageDraft {
    fn default() -> Self {
        Self::new()
    }
}

// Numeric input coercion. Inputs display the empty string when unset; on
// change, counts coerce to 0 and distances to None ("unknown", distinct
// from a zero distance).

pub fn coerce_count(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

pub fn coerce_coordinate(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

pub fn coerce_distance(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

pub fn display_count(value: u32) -> String {
    if value == 0 { String::new() } else { value.to_string() }
}

pub fn display_coordinate(value: f64) -> String {
    if value == 0.0 { String::new() } else { value.to_string() }
}

pub fn display_distance(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_basic() -> VillageDraft {
        let mut draft = VillageDraft::from_existing(VillageDetails::default());
        draft.details.name = "Kärla".to_string();
        draft.details.county = "Saaremaa".to_string();
        draft.details.population = 420;
        draft.details.description = "A small village".to_string();
        draft.details.latitude = 58.33;
        draft.details.longitude = 22.25;
        draft
    }

    #[test]
    fn create_mode_materializes_every_slice() {
        let draft = VillageDraft::new();
        assert!(draft.details.infrastructure.is_some());
        assert!(draft.details.internet.is_some());
        assert!(draft.details.transport.is_some());
        assert!(draft.details.community.is_some());
        assert!(draft.details.leisure.is_some());
    }

    #[test]
    fn first_write_materializes_an_absent_slice_with_defaults() {
        let mut draft =
            VillageDraft::from_existing(VillageDetails::default());
        assert!(draft.details.infrastructure.is_none());

        draft.infrastructure_mut().has_pharmacy = true;

        let infra = draft.details.infrastructure.as_ref().unwrap();
        assert!(infra.has_pharmacy);
        // Everything else at its documented default.
        assert!(!infra.has_grocery_store);
        assert_eq!(infra.restaurants_count, 0);
        assert_eq!(infra.grocery_store_distance_km, None);
    }

    #[test]
    fn basic_validation_reports_every_failing_field() {
        let draft = VillageDraft::from_existing(VillageDetails::default());
        let errors = draft.validate_basic();
        assert!(errors.name.is_some());
        assert!(errors.county.is_some());
        assert!(errors.population.is_some());
        assert!(errors.description.is_some());
        assert!(errors.latitude.is_some());
        assert!(errors.longitude.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn basic_validation_passes_with_required_fields() {
        assert!(filled_basic().validate_basic().is_empty());
    }

    #[test]
    fn zero_coordinates_fail_validation() {
        let mut draft = filled_basic();
        draft.details.latitude = 0.0;
        let errors = draft.validate_basic();
        assert!(errors.latitude.is_some());
        assert!(errors.longitude.is_none());
    }

    #[test]
    fn other_sections_are_not_validated_at_submit() {
        // A completely empty internet section does not block submission.
        let draft = filled_basic();
        assert!(!draft.is_complete(Section::Internet));
        assert!(draft.validate_basic().is_empty());
    }

    #[test]
    fn removing_a_link_preserves_the_order_of_the_rest() {
        let mut draft = VillageDraft::new();
        for title in ["first", "second", "third"] {
            draft.add_link();
            let index = draft.details.links.len() - 1;
            draft.update_link_title(index, title.to_string());
        }

        draft.remove_link(1);

        let titles: Vec<&str> = draft
            .details
            .links
            .iter()
            .map(|l| l.title.as_str())
            .collect();
        assert_eq!(titles, ["first", "third"]);
    }

    #[test]
    fn out_of_range_link_operations_are_ignored() {
        let mut draft = VillageDraft::new();
        draft.add_link();
        draft.remove_link(5);
        draft.update_link_url(5, "https://example.com".to_string());
        assert_eq!(draft.details.links.len(), 1);
        assert!(draft.details.links[0].url.is_empty());
    }

    #[test]
    fn internet_completion_needs_speed_and_a_type() {
        let mut draft = VillageDraft::new();
        assert!(!draft.is_complete(Section::Internet));

        draft.internet_mut().average_speed_mbps = 100;
        assert!(!draft.is_complete(Section::Internet));

        draft.internet_mut().types.push(payloads::InternetType::Fiber);
        assert!(draft.is_complete(Section::Internet));
    }

    #[test]
    fn completion_is_advisory_and_tab_order_is_fixed() {
        assert_eq!(Section::ORDER[0], Section::Basic);
        assert_eq!(Section::ORDER[6], Section::Links);
        assert_eq!(Section::Basic.next(), Some(Section::Infrastructure));
        assert_eq!(Section::Basic.previous(), None);
        assert_eq!(Section::Links.next(), None);
        assert_eq!(Section::Links.previous(), Some(Section::Leisure));
    }

    #[test]
    fn count_coercion() {
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("  "), 0);
        assert_eq!(coerce_count("12"), 12);
        assert_eq!(coerce_count("nope"), 0);
        assert_eq!(display_count(0), "");
        assert_eq!(display_count(7), "7");
    }

    #[test]
    fn distance_coercion_distinguishes_unknown_from_zero() {
        assert_eq!(coerce_distance(""), None);
        assert_eq!(coerce_distance("0"), Some(0.0));
        assert_eq!(coerce_distance("2.5"), Some(2.5));
        assert_eq!(coerce_distance("nope"), None);
        assert_eq!(display_distance(None), "");
        assert_eq!(display_distance(Some(0.0)), "0");
    }
}
