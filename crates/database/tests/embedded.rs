use database::{
    codec::{Codec, Embedded},
    SqliteDatabase,
};
use model::{
    check_in::NewCheckIn, evacuation_center::EvacuationCenter, go_bag::GoBagItem,
    hazard_zone::HazardZone, household::Household, incident::NewIncident, member::Member,
    poi::Poi, user::User, ExampleData,
};
use preparedness::{
    database::{
        CheckInRepo, EvacuationCenterRepo, GoBagRepo, HazardZoneRepo, HouseholdRepo,
        IncidentRepo, MemberRepo, PoiRepo, UserRepo,
    },
    seed, BackendKind, Storage,
};
use utility::id::Id;

async fn database() -> SqliteDatabase {
    SqliteDatabase::in_memory().await.unwrap()
}

fn incident(kind: &str, is_anonymous: bool) -> NewIncident {
    NewIncident {
        kind: kind.to_owned(),
        description: "Road blocked".to_owned(),
        location: "Pio Duran, Albay".to_owned(),
        latitude: None,
        longitude: None,
        is_anonymous,
    }
}

#[tokio::test]
async fn reports_embedded_backend() {
    let database = database().await;
    assert_eq!(database.backend(), BackendKind::Embedded);
}

#[tokio::test]
async fn incidents_come_back_in_report_order() {
    let database = database().await;

    let first = database.create_incident(incident("flood", true)).await.unwrap();
    let second = database.create_incident(incident("fire", false)).await.unwrap();
    assert!(first.content.is_anonymous);
    assert!(!second.content.is_anonymous);

    let incidents = database.get_incidents().await.unwrap();
    assert_eq!(incidents, vec![first, second]);
    assert!(incidents[0].content.reported_at <= incidents[1].content.reported_at);
}

#[tokio::test]
async fn go_bag_items_can_be_checked_off() {
    let database = database().await;
    seed::initialize_go_bag_items(&database).await.unwrap();

    let items = database.get_go_bag_items().await.unwrap();
    assert_eq!(items.len(), 9);
    assert!(items.iter().all(|item| !item.content.checked));

    let water = &items[0];
    let updated = database
        .update_go_bag_item(&water.id, true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, water.id);
    assert!(updated.content.checked);

    let items = database.get_go_bag_items().await.unwrap();
    assert_eq!(items.iter().filter(|item| item.content.checked).count(), 1);

    let unchecked = database
        .update_go_bag_item(&water.id, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!unchecked.content.checked);
}

#[tokio::test]
async fn checked_water_shows_up_in_the_list() {
    let database = database().await;
    let water = database
        .create_go_bag_item(GoBagItem::unchecked("Essentials", "Water (1 gallon/person)"))
        .await
        .unwrap();

    database.update_go_bag_item(&water.id, true).await.unwrap();

    let items = database.get_go_bag_items().await.unwrap();
    let matching = items
        .iter()
        .filter(|item| item.content.name == "Water (1 gallon/person)")
        .collect::<Vec<_>>();
    assert_eq!(matching.len(), 1);
    assert!(matching[0].content.checked);
}

#[tokio::test]
async fn updating_unknown_records_finds_nothing() {
    let database = database().await;

    assert!(database
        .update_go_bag_item(&Id::new(404), true)
        .await
        .unwrap()
        .is_none());
    assert!(database
        .update_evacuation_center(&Id::new(404), "Closed")
        .await
        .unwrap()
        .is_none());
    assert!(database
        .update_member_status(&Id::new(404), "safe", None)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn evacuation_center_status_is_replaced() {
    let database = database().await;
    let center = database
        .create_evacuation_center(EvacuationCenter::example_data())
        .await
        .unwrap();

    let updated = database
        .update_evacuation_center(&center.id, "Full")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.content.status, "Full");
    assert_eq!(updated.content.name, center.content.name);
}

#[tokio::test]
async fn evacuation_centers_round_trip_without_coordinates() {
    let database = database().await;
    let located = database
        .create_evacuation_center(EvacuationCenter::example_data())
        .await
        .unwrap();
    let unlocated = database
        .create_evacuation_center(EvacuationCenter {
            name: "Barangay Chapel".to_owned(),
            latitude: None,
            longitude: None,
            ..EvacuationCenter::example_data()
        })
        .await
        .unwrap();
    assert_eq!(unlocated.content.latitude, None);
    assert_eq!(unlocated.content.longitude, None);

    assert_eq!(
        database.get_evacuation_centers().await.unwrap(),
        vec![located, unlocated]
    );
}

#[tokio::test]
async fn households_round_trip_with_and_without_address() {
    let database = database().await;
    let santos = database
        .create_household(Household {
            name: "Santos".to_owned(),
            address: None,
        })
        .await
        .unwrap();
    let cruz = database
        .create_household(Household {
            name: "Cruz".to_owned(),
            address: Some("Town Plaza".to_owned()),
        })
        .await
        .unwrap();
    assert_eq!(santos.content.address, None);

    assert_eq!(
        database.get_households().await.unwrap(),
        vec![santos.clone(), cruz]
    );
    assert_eq!(database.get_household(&santos.id).await.unwrap(), Some(santos));
    assert!(database.get_household(&Id::new(404)).await.unwrap().is_none());
}

#[tokio::test]
async fn pois_round_trip_without_address() {
    let database = database().await;
    let poi = database
        .create_poi(Poi {
            address: None,
            ..Poi::example_data()
        })
        .await
        .unwrap();
    assert_eq!(poi.content.address, None);

    assert_eq!(database.get_pois(None).await.unwrap(), vec![poi]);
}

#[tokio::test]
async fn members_are_looked_up_by_id() {
    let database = database().await;
    let household = database
        .create_household(Household {
            name: "Santos".to_owned(),
            address: None,
        })
        .await
        .unwrap();
    let member = database
        .create_member(Member::new(household.id, "Maria Santos", None))
        .await
        .unwrap();

    assert_eq!(database.get_member(&member.id).await.unwrap(), Some(member));
    assert!(database.get_member(&Id::new(404)).await.unwrap().is_none());
}

#[tokio::test]
async fn hazard_zone_outlines_keep_their_order() {
    let database = database().await;
    let zone = HazardZone::example_data();

    let created = database.create_hazard_zone(zone.clone()).await.unwrap();
    assert_eq!(created.content, zone);

    let zones = database.get_hazard_zones().await.unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].content.coordinates, zone.coordinates);
}

#[tokio::test]
async fn unreadable_outlines_read_as_empty() {
    let database = database().await;
    sqlx::query("INSERT INTO hazard_zones (name, type, coordinates) VALUES ($1, $2, $3);")
        .bind("Broken Zone")
        .bind("flood")
        .bind("13.03,123.45")
        .execute(database.pool())
        .await
        .unwrap();

    let zones = database.get_hazard_zones().await.unwrap();
    assert_eq!(zones.len(), 1);
    assert!(zones[0].content.coordinates.is_empty());
    assert_eq!(zones[0].content.severity, "medium");
}

#[tokio::test]
async fn flags_are_stored_as_integers() {
    let database = database().await;
    database
        .create_go_bag_item(GoBagItem {
            checked: true,
            ..GoBagItem::example_data()
        })
        .await
        .unwrap();

    let (checked,): (i64,) = sqlx::query_as("SELECT checked FROM go_bag_items;")
        .fetch_one(database.pool())
        .await
        .unwrap();
    assert_eq!(checked, Embedded::encode_flag(true));
}

#[tokio::test]
async fn member_status_keeps_location_unless_given() {
    let database = database().await;
    let household = database
        .create_household(Household {
            name: "Santos".to_owned(),
            address: None,
        })
        .await
        .unwrap();
    let member = database
        .create_member(Member::new(household.id, "Maria Santos", None))
        .await
        .unwrap();
    assert_eq!(member.content.status, "unknown");

    let member = database
        .update_member_status(&member.id, "safe", Some("Municipal Gymnasium"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(member.content.status, "safe");
    assert_eq!(
        member.content.last_known_location.as_deref(),
        Some("Municipal Gymnasium")
    );

    for location in [None, Some("")] {
        let member = database
            .update_member_status(&member.id, "needs-help", location)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(member.content.status, "needs-help");
        assert_eq!(
            member.content.last_known_location.as_deref(),
            Some("Municipal Gymnasium")
        );
    }
}

#[tokio::test]
async fn members_and_check_ins_are_filtered_by_owner() {
    let database = database().await;
    let santos = database
        .create_household(Household {
            name: "Santos".to_owned(),
            address: None,
        })
        .await
        .unwrap();
    let cruz = database
        .create_household(Household {
            name: "Cruz".to_owned(),
            address: Some("Town Plaza".to_owned()),
        })
        .await
        .unwrap();
    let maria = database
        .create_member(Member::new(santos.id, "Maria Santos", None))
        .await
        .unwrap();
    let rosa = database
        .create_member(Member::new(cruz.id, "Rosa Cruz", None))
        .await
        .unwrap();

    assert_eq!(database.get_members(&santos.id).await.unwrap(), vec![maria.clone()]);
    assert_eq!(database.get_all_members().await.unwrap().len(), 2);

    let check_in = database
        .create_check_in(NewCheckIn {
            member_id: rosa.id,
            location: Some("Barangay Hall".to_owned()),
            is_safe: false,
        })
        .await
        .unwrap();
    assert!(!check_in.content.is_safe);
    assert_eq!(check_in.content.member_id, rosa.id);

    assert_eq!(database.get_check_ins(&rosa.id).await.unwrap(), vec![check_in]);
    assert!(database.get_check_ins(&maria.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn pois_can_be_filtered_by_kind() {
    let database = database().await;
    seed::initialize_pois(&database).await.unwrap();
    database
        .create_poi(Poi {
            available: false,
            ..Poi::example_data()
        })
        .await
        .unwrap();

    let all = database.get_pois(None).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(!all[3].content.available);

    let medical = database.get_pois(Some("medical")).await.unwrap();
    assert!(!medical.is_empty());
    assert!(medical.iter().all(|poi| poi.content.kind == "medical"));

    assert!(database.get_pois(Some("airport")).await.unwrap().is_empty());
}

#[tokio::test]
async fn users_get_generated_ids() {
    let database = database().await;
    let user = database
        .create_user(User {
            username: "drrmo".to_owned(),
            password: "secret".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(user.id.raw().len(), 36);

    let found = database.get_user(&user.id).await.unwrap();
    assert_eq!(found, Some(user.clone()));
    let found = database.get_user_by_username("drrmo").await.unwrap();
    assert_eq!(found, Some(user));
    assert!(database.get_user_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn initializers_only_fill_empty_tables() {
    let database = database().await;

    seed::initialize_all(&database).await.unwrap();
    seed::initialize_all(&database).await.unwrap();

    assert_eq!(database.get_go_bag_items().await.unwrap().len(), 9);
    assert_eq!(database.get_evacuation_centers().await.unwrap().len(), 3);
    assert_eq!(database.get_households().await.unwrap().len(), 1);
    assert_eq!(database.get_all_members().await.unwrap().len(), 4);
    assert_eq!(database.get_hazard_zones().await.unwrap().len(), 2);
    assert_eq!(database.get_pois(None).await.unwrap().len(), 3);

    let household = &database.get_households().await.unwrap()[0];
    let members = database.get_members(&household.id).await.unwrap();
    assert_eq!(members.len(), 4);
    assert!(members.iter().all(|member| member.content.status == "unknown"));
}

#[tokio::test]
async fn initializers_leave_existing_rows_alone() {
    let database = database().await;
    let own = database
        .create_go_bag_item(GoBagItem::unchecked("Pets", "Pet Food"))
        .await
        .unwrap();

    seed::initialize_go_bag_items(&database).await.unwrap();

    assert_eq!(database.get_go_bag_items().await.unwrap(), vec![own]);
}

#[tokio::test]
async fn members_are_not_seeded_without_a_household() {
    let database = database().await;
    seed::initialize_members(&database).await.unwrap();
    assert!(database.get_all_members().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_database_survives_reopening() {
    let path = std::env::temp_dir().join(format!("preparedness-{}.sqlite", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let database = SqliteDatabase::open(&path).await.unwrap();
    seed::initialize_evacuation_centers(&database).await.unwrap();
    database.pool().close().await;

    let database = SqliteDatabase::open(&path).await.unwrap();
    assert_eq!(database.get_evacuation_centers().await.unwrap().len(), 3);
    database.pool().close().await;

    let _ = std::fs::remove_file(&path);
}
