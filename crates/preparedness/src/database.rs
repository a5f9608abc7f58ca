use std::{error, fmt, result};

use async_trait::async_trait;
use model::{
    check_in::{CheckIn, NewCheckIn},
    evacuation_center::EvacuationCenter,
    go_bag::GoBagItem,
    hazard_zone::HazardZone,
    household::Household,
    incident::{Incident, NewIncident},
    member::Member,
    poi::Poi,
    user::User,
    WithId,
};
use serde::Serialize;
use thiserror::Error;
use utility::id::Id;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("the requested record does not exist")]
    NotFound,
    #[error(transparent)]
    Other(Box<dyn error::Error + Send + Sync>),
}

impl StorageError {
    pub fn other<E: error::Error + Send + Sync + 'static>(why: E) -> Self {
        Self::Other(Box::new(why))
    }
}

pub type Result<T> = result::Result<T, StorageError>;

/// The kind of relational backend behind a [`Storage`] handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// A remotely managed Postgres service.
    Hosted,
    /// A local SQLite file, used as a development fallback.
    Embedded,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Hosted => write!(f, "hosted"),
            BackendKind::Embedded => write!(f, "embedded"),
        }
    }
}

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get_user(&self, id: &Id<User>) -> Result<Option<WithId<User>>>;

    async fn get_user_by_username(&self, username: &str)
        -> Result<Option<WithId<User>>>;

    /// Inserts the user under a freshly generated id.
    async fn create_user(&self, user: User) -> Result<WithId<User>>;
}

#[async_trait]
pub trait IncidentRepo: Send + Sync {
    /// Stores the report, stamped with the current time.
    async fn create_incident(&self, incident: NewIncident) -> Result<WithId<Incident>>;

    /// Returns all reports, oldest first.
    async fn get_incidents(&self) -> Result<Vec<WithId<Incident>>>;
}

#[async_trait]
pub trait GoBagRepo: Send + Sync {
    async fn get_go_bag_items(&self) -> Result<Vec<WithId<GoBagItem>>>;

    async fn create_go_bag_item(&self, item: GoBagItem) -> Result<WithId<GoBagItem>>;

    /// Returns `None` if no item has the given id.
    async fn update_go_bag_item(
        &self,
        id: &Id<GoBagItem>,
        checked: bool,
    ) -> Result<Option<WithId<GoBagItem>>>;
}

#[async_trait]
pub trait EvacuationCenterRepo: Send + Sync {
    async fn get_evacuation_centers(&self) -> Result<Vec<WithId<EvacuationCenter>>>;

    async fn create_evacuation_center(
        &self,
        center: EvacuationCenter,
    ) -> Result<WithId<EvacuationCenter>>;

    /// Returns `None` if no center has the given id.
    async fn update_evacuation_center(
        &self,
        id: &Id<EvacuationCenter>,
        status: &str,
    ) -> Result<Option<WithId<EvacuationCenter>>>;
}

#[async_trait]
pub trait HouseholdRepo: Send + Sync {
    async fn get_households(&self) -> Result<Vec<WithId<Household>>>;

    async fn get_household(&self, id: &Id<Household>) -> Result<Option<WithId<Household>>>;

    async fn create_household(&self, household: Household) -> Result<WithId<Household>>;
}

#[async_trait]
pub trait MemberRepo: Send + Sync {
    async fn get_members(&self, household_id: &Id<Household>)
        -> Result<Vec<WithId<Member>>>;

    async fn get_all_members(&self) -> Result<Vec<WithId<Member>>>;

    async fn get_member(&self, id: &Id<Member>) -> Result<Option<WithId<Member>>>;

    async fn create_member(&self, member: Member) -> Result<WithId<Member>>;

    /// Sets the status of a member. The last known location is only replaced
    /// if a non-empty `location` is passed. Returns `None` if no member has
    /// the given id.
    async fn update_member_status(
        &self,
        id: &Id<Member>,
        status: &str,
        location: Option<&str>,
    ) -> Result<Option<WithId<Member>>>;
}

#[async_trait]
pub trait CheckInRepo: Send + Sync {
    async fn get_check_ins(&self, member_id: &Id<Member>) -> Result<Vec<WithId<CheckIn>>>;

    /// Stores the check-in, stamped with the current time.
    async fn create_check_in(&self, check_in: NewCheckIn) -> Result<WithId<CheckIn>>;
}

#[async_trait]
pub trait HazardZoneRepo: Send + Sync {
    async fn get_hazard_zones(&self) -> Result<Vec<WithId<HazardZone>>>;

    async fn create_hazard_zone(&self, zone: HazardZone) -> Result<WithId<HazardZone>>;
}

#[async_trait]
pub trait PoiRepo: Send + Sync {
    /// Returns all points of interest, or only those of `kind` if given.
    async fn get_pois(&self, kind: Option<&str>) -> Result<Vec<WithId<Poi>>>;

    async fn create_poi(&self, poi: Poi) -> Result<WithId<Poi>>;
}

/// A handle to one relational backend. Every operation is a single
/// statement; nothing spans a transaction.
pub trait Storage:
    UserRepo
    + IncidentRepo
    + GoBagRepo
    + EvacuationCenterRepo
    + HouseholdRepo
    + MemberRepo
    + CheckInRepo
    + HazardZoneRepo
    + PoiRepo
{
    fn backend(&self) -> BackendKind;
}
