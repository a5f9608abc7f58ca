//! Postgres backed storage.

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
use sqlx::PgPool;
use utility::id::Id;

use crate::codec::{Codec, Hosted};
use crate::queries;
use crate::ConnectError;

#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub async fn connect(url: &str) -> std::result::Result<Self, ConnectError> {
        let pool = PgPool::connect(url).await.map_err(ConnectError::Hosted)?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserRepo for PgDatabase {
    async fn get_user(&self, id: &Id<User>) -> Result<Option<WithId<User>>> {
        queries::user::hosted::get(&self.pool, id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<WithId<User>>> {
        queries::user::hosted::get_by_username(&self.pool, username).await
    }

    async fn create_user(&self, user: User) -> Result<WithId<User>> {
        queries::user::hosted::insert(&self.pool, user).await
    }
}

#[async_trait]
impl IncidentRepo for PgDatabase {
    async fn create_incident(&self, incident: NewIncident) -> Result<WithId<Incident>> {
        queries::incident::hosted::insert(&self.pool, incident).await
    }

    async fn get_incidents(&self) -> Result<Vec<WithId<Incident>>> {
        queries::incident::hosted::get_all(&self.pool).await
    }
}

#[async_trait]
impl GoBagRepo for PgDatabase {
    async fn get_go_bag_items(&self) -> Result<Vec<WithId<GoBagItem>>> {
        queries::go_bag::hosted::get_all(&self.pool).await
    }

    async fn create_go_bag_item(&self, item: GoBagItem) -> Result<WithId<GoBagItem>> {
        queries::go_bag::hosted::insert(&self.pool, item).await
    }

    async fn update_go_bag_item(
        &self,
        id: &Id<GoBagItem>,
        checked: bool,
    ) -> Result<Option<WithId<GoBagItem>>> {
        queries::go_bag::hosted::update_checked(&self.pool, id, checked).await
    }
}

#[async_trait]
impl EvacuationCenterRepo for PgDatabase {
    async fn get_evacuation_centers(&self) -> Result<Vec<WithId<EvacuationCenter>>> {
        queries::evacuation_center::hosted::get_all(&self.pool).await
    }

    async fn create_evacuation_center(
        &self,
        center: EvacuationCenter,
    ) -> Result<WithId<EvacuationCenter>> {
        queries::evacuation_center::hosted::insert(&self.pool, center).await
    }

    async fn update_evacuation_center(
        &self,
        id: &Id<EvacuationCenter>,
        status: &str,
    ) -> Result<Option<WithId<EvacuationCenter>>> {
        queries::evacuation_center::hosted::update_status(&self.pool, id, status).await
    }
}

#[async_trait]
impl HouseholdRepo for PgDatabase {
    async fn get_households(&self) -> Result<Vec<WithId<Household>>> {
        queries::household::hosted::get_all(&self.pool).await
    }

    async fn get_household(&self, id: &Id<Household>) -> Result<Option<WithId<Household>>> {
        queries::household::hosted::get(&self.pool, id).await
    }

    async fn create_household(&self, household: Household) -> Result<WithId<Household>> {
        queries::household::hosted::insert(&self.pool, household).await
    }
}

#[async_trait]
impl MemberRepo for PgDatabase {
    async fn get_members(&self, household_id: &Id<Household>) -> Result<Vec<WithId<Member>>> {
        queries::member::hosted::get_by_household(&self.pool, household_id).await
    }

    async fn get_all_members(&self) -> Result<Vec<WithId<Member>>> {
        queries::member::hosted::get_all(&self.pool).await
    }

    async fn get_member(&self, id: &Id<Member>) -> Result<Option<WithId<Member>>> {
        queries::member::hosted::get(&self.pool, id).await
    }

    async fn create_member(&self, member: Member) -> Result<WithId<Member>> {
        queries::member::hosted::insert(&self.pool, member).await
    }

    async fn update_member_status(
        &self,
        id: &Id<Member>,
        status: &str,
        location: Option<&str>,
    ) -> Result<Option<WithId<Member>>> {
        queries::member::hosted::update_status(&self.pool, id, status, location).await
    }
}

#[async_trait]
impl CheckInRepo for PgDatabase {
    async fn get_check_ins(&self, member_id: &Id<Member>) -> Result<Vec<WithId<CheckIn>>> {
        queries::check_in::hosted::get_by_member(&self.pool, member_id).await
    }

    async fn create_check_in(&self, check_in: NewCheckIn) -> Result<WithId<CheckIn>> {
        queries::check_in::hosted::insert(&self.pool, check_in).await
    }
}

#[async_trait]
impl HazardZoneRepo for PgDatabase {
    async fn get_hazard_zones(&self) -> Result<Vec<WithId<HazardZone>>> {
        queries::hazard_zone::hosted::get_all(&self.pool).await
    }

    async fn create_hazard_zone(&self, zone: HazardZone) -> Result<WithId<HazardZone>> {
        queries::hazard_zone::hosted::insert(&self.pool, zone).await
    }
}

#[async_trait]
impl PoiRepo for PgDatabase {
    async fn get_pois(&self, kind: Option<&str>) -> Result<Vec<WithId<Poi>>> {
        match kind {
            Some(kind) => queries::poi::hosted::get_by_kind(&self.pool, kind).await,
            None => queries::poi::hosted::get_all(&self.pool).await,
        }
    }

    async fn create_poi(&self, poi: Poi) -> Result<WithId<Poi>> {
        queries::poi::hosted::insert(&self.pool, poi).await
    }
}

impl Storage for PgDatabase {
    fn backend(&self) -> BackendKind {
        Hosted::KIND
    }
}
