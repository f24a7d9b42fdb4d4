use payloads::{PropertyId, Role, VillageId, responses};
use std::collections::HashMap;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::SessionUser),
}

/// Client-side cache collections. Every query subscribes to exactly one
/// key; every mutation names the keys it invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Properties,
    Users,
    Sellers,
    Buyers,
    Villages,
    PageContent,
}

/// The mutations the dashboard can issue, with their invalidation sets.
///
/// Recording a mutation bumps the version of each listed key and drops the
/// cached collection, so any subscribed query refetches on its next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminMutation {
    UpdatePropertyStatus,
    DeleteUser,
    DeleteSeller,
    DeleteBuyer,
    CreateVillage,
    UpdateVillage,
    DeleteVillage,
    SavePageContent,
}

impl AdminMutation {
    pub fn invalidates(&self) -> &'static [CacheKey] {
        match self {
            Self::UpdatePropertyStatus => &[CacheKey::Properties],
            Self::DeleteUser => &[CacheKey::Users],
            // Sellers and buyers also appear in the combined user list.
            Self::DeleteSeller => &[CacheKey::Sellers, CacheKey::Users],
            Self::DeleteBuyer => &[CacheKey::Buyers, CacheKey::Users],
            Self::CreateVillage
            | Self::UpdateVillage
            | Self::DeleteVillage => &[CacheKey::Villages],
            Self::SavePageContent => &[CacheKey::PageContent],
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,

    // === Cache invalidation graph ===
    // Version per cache key; fetch hooks carry the version in their deps so
    // a bump forces a refetch.
    pub cache_versions: HashMap<CacheKey, u64>,

    // === Collections (canonical stores, managed by the fetch hooks) ===
    pub properties: FetchState<Vec<responses::Property>>,
    pub individual_properties: HashMap<PropertyId, responses::Property>,
    pub users: FetchState<Vec<responses::AdminUser>>,
    pub sellers: FetchState<Vec<responses::AdminUser>>,
    pub buyers: FetchState<Vec<responses::AdminUser>>,
    pub villages: FetchState<Vec<responses::Village>>,
    pub individual_villages: HashMap<VillageId, responses::Village>,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            &self.auth_state,
            AuthState::LoggedIn(user) if user.role == Role::Admin
        )
    }

    pub fn session_user(&self) -> Option<&responses::SessionUser> {
        match &self.auth_state {
            AuthState::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn cache_version(&self, key: CacheKey) -> u64 {
        self.cache_versions.get(&key).copied().unwrap_or(0)
    }

    /// Record a completed mutation: bump versions and drop the cached
    /// collections it invalidates.
    pub fn record_mutation(&mut self, mutation: AdminMutation) {
        for key in mutation.invalidates() {
            *self.cache_versions.entry(*key).or_insert(0) += 1;
            self.clear_cache(*key);
        }
    }

    fn clear_cache(&mut self, key: CacheKey) {
        match key {
            CacheKey::Properties => {
                self.properties = FetchState::NotFetched;
                self.individual_properties.clear();
            }
            CacheKey::Users => self.users = FetchState::NotFetched,
            CacheKey::Sellers => self.sellers = FetchState::NotFetched,
            CacheKey::Buyers => self.buyers = FetchState::NotFetched,
            CacheKey::Villages => {
                self.villages = FetchState::NotFetched;
                self.individual_villages.clear();
            }
            // Page content is held in page-local state and refetched via
            // the version bump alone.
            CacheKey::PageContent => {}
        }
    }

    pub fn get_property(
        &self,
        property_id: PropertyId,
    ) -> Option<&responses::Property> {
        self.individual_properties.get(&property_id)
    }

    pub fn set_property(&mut self, property: responses::Property) {
        self.individual_properties.insert(property.id, property);
    }

    pub fn set_properties(&mut self, properties: Vec<responses::Property>) {
        for property in &properties {
            self.individual_properties
                .insert(property.id, property.clone());
        }
        self.properties = FetchState::Fetched(properties);
    }

    pub fn get_village(
        &self,
        village_id: VillageId,
    ) -> Option<&responses::Village> {
        self.individual_villages.get(&village_id)
    }

    pub fn set_village(&mut self, village: responses::Village) {
        self.individual_villages.insert(village.id, village);
    }

    pub fn set_villages(&mut self, villages: Vec<responses::Village>) {
        for village in &villages {
            self.individual_villages.insert(village.id, village.clone());
        }
        self.villages = FetchState::Fetched(villages);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.cache_versions.clear();
        self.properties = FetchState::NotFetched;
        self.individual_properties.clear();
        self.users = FetchState::NotFetched;
        self.sellers = FetchState::NotFetched;
        self.buyers = FetchState::NotFetched;
        self.villages = FetchState::NotFetched;
        self.individual_villages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_invalidation_sets() {
        assert_eq!(
            AdminMutation::UpdatePropertyStatus.invalidates(),
            &[CacheKey::Properties]
        );
        assert_eq!(
            AdminMutation::DeleteSeller.invalidates(),
            &[CacheKey::Sellers, CacheKey::Users]
        );
        assert_eq!(
            AdminMutation::SavePageContent.invalidates(),
            &[CacheKey::PageContent]
        );
    }

    #[test]
    fn recording_a_mutation_bumps_only_its_keys() {
        let mut state = State::default();
        state.record_mutation(AdminMutation::DeleteBuyer);
        assert_eq!(state.cache_version(CacheKey::Buyers), 1);
        assert_eq!(state.cache_version(CacheKey::Users), 1);
        assert_eq!(state.cache_version(CacheKey::Properties), 0);

        state.record_mutation(AdminMutation::DeleteBuyer);
        assert_eq!(state.cache_version(CacheKey::Buyers), 2);
    }

    #[test]
    fn recording_a_mutation_drops_the_cached_collection() {
        let mut state = State::default();
        state.villages = FetchState::Fetched(vec![]);
        state.record_mutation(AdminMutation::DeleteVillage);
        assert!(!state.villages.is_fetched());
    }
}
