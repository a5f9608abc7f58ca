//! SQLite backed storage, used when no hosted database is configured.

use std::{path::Path, str::FromStr};

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
use preparedness::database::{
    BackendKind, CheckInRepo, EvacuationCenterRepo, GoBagRepo, HazardZoneRepo, HouseholdRepo,
    IncidentRepo, MemberRepo, PoiRepo, Result, Storage, UserRepo,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use utility::id::Id;

use crate::codec::{Codec, Embedded};
use crate::queries;
use crate::schema;
use crate::ConnectError;

#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Opens the database file at `path`, creating it and its tables if
    /// necessary.
    pub async fn open(path: &Path) -> std::result::Result<Self, ConnectError> {
        let embedded_error = |source| ConnectError::Embedded {
            path: path.to_path_buf(),
            source,
        };
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(embedded_error)?;
        Self::with_pool(pool).await.map_err(embedded_error)
    }

    /// A private database that lives as long as the returned handle.
    pub async fn in_memory() -> std::result::Result<Self, ConnectError> {
        let embedded_error = |source| ConnectError::Embedded {
            path: ":memory:".into(),
            source,
        };
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(embedded_error)?;
        // Every connection would see its own empty database otherwise.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(embedded_error)?;
        Self::with_pool(pool).await.map_err(embedded_error)
    }

    async fn with_pool(pool: SqlitePool) -> std::result::Result<Self, sqlx::Error> {
        for table in schema::TABLES {
            sqlx::query(table).execute(&pool).await?;
        }
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserRepo for SqliteDatabase {
    async fn get_user(&self, id: &Id<User>) -> Result<Option<WithId<User>>> {
        queries::user::embedded::get(&self.pool, id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<WithId<User>>> {
        queries::user::embedded::get_by_username(&self.pool, username).await
    }

    async fn create_user(&self, user: User) -> Result<WithId<User>> {
        queries::user::embedded::insert(&self.pool, user).await
    }
}

#[async_trait]
impl IncidentRepo for SqliteDatabase {
    async fn create_incident(&self, incident: NewIncident) -> Result<WithId<Incident>> {
        queries::incident::embedded::insert(&self.pool, incident).await
    }

    async fn get_incidents(&self) -> Result<Vec<WithId<Incident>>> {
        queries::incident::embedded::get_all(&self.pool).await
    }
}

#[async_trait]
impl GoBagRepo for SqliteDatabase {
    async fn get_go_bag_items(&self) -> Result<Vec<WithId<GoBagItem>>> {
        queries::go_bag::embedded::get_all(&self.pool).await
    }

    async fn create_go_bag_item(&self, item: GoBagItem) -> Result<WithId<GoBagItem>> {
        queries::go_bag::embedded::insert(&self.pool, item).await
    }

    async fn update_go_bag_item(
        &self,
        id: &Id<GoBagItem>,
        checked: bool,
    ) -> Result<Option<WithId<GoBagItem>>> {
        queries::go_bag::embedded::update_checked(&self.pool, id, checked).await
    }
}

#[async_trait]
impl EvacuationCenterRepo for SqliteDatabase {
    async fn get_evacuation_centers(&self) -> Result<Vec<WithId<EvacuationCenter>>> {
        queries::evacuation_center::embedded::get_all(&self.pool).await
    }

    async fn create_evacuation_center(
        &self,
        center: EvacuationCenter,
    ) -> Result<WithId<EvacuationCenter>> {
        queries::evacuation_center::embedded::insert(&self.pool, center).await
    }

    async fn update_evacuation_center(
        &self,
        id: &Id<EvacuationCenter>,
        status: &str,
    ) -> Result<Option<WithId<EvacuationCenter>>> {
        queries::evacuation_center::embedded::update_status(&self.pool, id, status).await
    }
}

#[async_trait]
impl HouseholdRepo for SqliteDatabase {
    async fn get_households(&self) -> Result<Vec<WithId<Household>>> {
        queries::household::embedded::get_all(&self.pool).await
    }

    async fn get_household(&self, id: &Id<Household>) -> Result<Option<WithId<Household>>> {
        queries::household::embedded::get(&self.pool, id).await
    }

    async fn create_household(&self, household: Household) -> Result<WithId<Household>> {
        queries::household::embedded::insert(&self.pool, household).await
    }
}

#[async_trait]
impl MemberRepo for SqliteDatabase {
    async fn get_members(&self, household_id: &Id<Household>) -> Result<Vec<WithId<Member>>> {
        queries::member::embedded::get_by_household(&self.pool, household_id).await
    }

    async fn get_all_members(&self) -> Result<Vec<WithId<Member>>> {
        queries::member::embedded::get_all(&self.pool).await
    }

    async fn get_member(&self, id: &Id<Member>) -> Result<Option<WithId<Member>>> {
        queries::member::embedded::get(&self.pool, id).await
    }

    async fn create_member(&self, member: Member) -> Result<WithId<Member>> {
        queries::member::embedded::insert(&self.pool, member).await
    }

    async fn update_member_status(
        &self,
        id: &Id<Member>,
        status: &str,
        location: Option<&str>,
    ) -> Result<Option<WithId<Member>>> {
        queries::member::embedded::update_status(&self.pool, id, status, location).await
    }
}

#[async_trait]
impl CheckInRepo for SqliteDatabase {
    async fn get_check_ins(&self, member_id: &Id<Member>) -> Result<Vec<WithId<CheckIn>>> {
        queries::check_in::embedded::get_by_member(&self.pool, member_id).await
    }

    async fn create_check_in(&self, check_in: NewCheckIn) -> Result<WithId<CheckIn>> {
        queries::check_in::embedded::insert(&self.pool, check_in).await
    }
}

#[async_trait]
impl HazardZoneRepo for SqliteDatabase {
    async fn get_hazard_zones(&self) -> Result<Vec<WithId<HazardZone>>> {
        queries::hazard_zone::embedded::get_all(&self.pool).await
    }

    async fn create_hazard_zone(&self, zone: HazardZone) -> Result<WithId<HazardZone>> {
        queries::hazard_zone::embedded::insert(&self.pool, zone).await
    }
}

#[async_trait]
impl PoiRepo for SqliteDatabase {
    async fn get_pois(&self, kind: Option<&str>) -> Result<Vec<WithId<Poi>>> {
        match kind {
            Some(kind) => queries::poi::embedded::get_by_kind(&self.pool, kind).await,
            None => queries::poi::embedded::get_all(&self.pool).await,
        }
    }

    async fn create_poi(&self, poi: Poi) -> Result<WithId<Poi>> {
        queries::poi::embedded::insert(&self.pool, poi).await
    }
}

impl Storage for SqliteDatabase {
    fn backend(&self) -> BackendKind {
        Embedded::KIND
    }
}
