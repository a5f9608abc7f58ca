//! Reference data for otherwise empty tables.
//!
//! Every initializer reads the whole table and only inserts when it is empty,
//! so all of them are safe to run on every start. The rows are inserted one
//! by one without a transaction: if seeding fails half way, the table is left
//! partially filled and later runs consider it seeded.

use model::{
    evacuation_center::EvacuationCenter, go_bag::GoBagItem, hazard_zone::HazardZone,
    household::Household, member::Member, poi::Poi,
};

use crate::database::{Result, Storage};

/// Runs all initializers. Households go before members, which attach to the
/// first household.
pub async fn initialize_all<S: Storage + ?Sized>(storage: &S) -> Result<()> {
    initialize_go_bag_items(storage).await?;
    initialize_evacuation_centers(storage).await?;
    initialize_households(storage).await?;
    initialize_members(storage).await?;
    initialize_hazard_zones(storage).await?;
    initialize_pois(storage).await?;
    Ok(())
}

pub async fn initialize_go_bag_items<S: Storage + ?Sized>(storage: &S) -> Result<()> {
    if !storage.get_go_bag_items().await?.is_empty() {
        return Ok(());
    }
    let items = go_bag_items();
    log::info!("initializing {} go-bag items...", items.len());
    for item in items {
        storage.create_go_bag_item(item).await?;
    }
    Ok(())
}

pub async fn initialize_evacuation_centers<S: Storage + ?Sized>(storage: &S) -> Result<()> {
    if !storage.get_evacuation_centers().await?.is_empty() {
        return Ok(());
    }
    let centers = evacuation_centers();
    log::info!("initializing {} evacuation centers...", centers.len());
    for center in centers {
        storage.create_evacuation_center(center).await?;
    }
    Ok(())
}

pub async fn initialize_households<S: Storage + ?Sized>(storage: &S) -> Result<()> {
    if !storage.get_households().await?.is_empty() {
        return Ok(());
    }
    let households = households();
    log::info!("initializing {} households...", households.len());
    for household in households {
        storage.create_household(household).await?;
    }
    Ok(())
}

pub async fn initialize_members<S: Storage + ?Sized>(storage: &S) -> Result<()> {
    if !storage.get_all_members().await?.is_empty() {
        return Ok(());
    }
    let Some(household) = storage.get_households().await?.into_iter().next() else {
        log::warn!("no household to attach members to, skipping member initialization.");
        return Ok(());
    };
    let members = [
        ("You", "+63 912 345 6789"),
        ("Maria Santos", "+63 912 345 6780"),
        ("Juan Dela Cruz", "+63 912 345 6781"),
        ("Rosa Cruz", "+63 912 345 6782"),
    ];
    log::info!(
        "initializing {} members of household {}...",
        members.len(),
        household.id
    );
    for (name, contact) in members {
        storage
            .create_member(Member::new(
                household.id,
                name,
                Some(contact.to_owned()),
            ))
            .await?;
    }
    Ok(())
}

pub async fn initialize_hazard_zones<S: Storage + ?Sized>(storage: &S) -> Result<()> {
    if !storage.get_hazard_zones().await?.is_empty() {
        return Ok(());
    }
    let zones = hazard_zones();
    log::info!("initializing {} hazard zones...", zones.len());
    for zone in zones {
        storage.create_hazard_zone(zone).await?;
    }
    Ok(())
}

pub async fn initialize_pois<S: Storage + ?Sized>(storage: &S) -> Result<()> {
    if !storage.get_pois(None).await?.is_empty() {
        return Ok(());
    }
    let pois = pois();
    log::info!("initializing {} points of interest...", pois.len());
    for poi in pois {
        storage.create_poi(poi).await?;
    }
    Ok(())
}

pub fn go_bag_items() -> Vec<GoBagItem> {
    [
        ("Essentials", "Water (1 gallon/person)"),
        ("Essentials", "Non-perishable Food"),
        ("Essentials", "Flashlight & Batteries"),
        ("First Aid", "Bandages & Antiseptic"),
        ("First Aid", "Prescription Meds"),
        ("Documents", "ID & Important Papers"),
        ("Documents", "Cash & Coins"),
        ("Clothing", "Rain Jacket / Poncho"),
        ("Clothing", "Extra Clothes"),
    ]
    .into_iter()
    .map(|(category, name)| GoBagItem::unchecked(category, name))
    .collect()
}

pub fn evacuation_centers() -> Vec<EvacuationCenter> {
    [
        ("Pio Duran Central School", "0.5 km", "500 pax", "Open", "13.0345", "123.4567"),
        ("Municipal Gymnasium", "1.2 km", "1000 pax", "Open", "13.0355", "123.4577"),
        ("Barangay Hall Shelter", "2.5 km", "200 pax", "Full", "13.0365", "123.4587"),
    ]
    .into_iter()
    .map(
        |(name, distance, capacity, status, latitude, longitude)| EvacuationCenter {
            name: name.to_owned(),
            distance: distance.to_owned(),
            capacity: capacity.to_owned(),
            status: status.to_owned(),
            latitude: Some(latitude.to_owned()),
            longitude: Some(longitude.to_owned()),
        },
    )
    .collect()
}

pub fn households() -> Vec<Household> {
    vec![Household {
        name: "Sample Household".to_owned(),
        address: Some("123 Main Street, Pio Duran, Albay".to_owned()),
    }]
}

pub fn hazard_zones() -> Vec<HazardZone> {
    let zone = |name: &str, kind: &str, coordinates: [&str; 3], severity: &str| HazardZone {
        name: name.to_owned(),
        kind: kind.to_owned(),
        coordinates: coordinates.iter().map(|point| point.to_string()).collect(),
        severity: severity.to_owned(),
    };
    vec![
        zone(
            "Bicol River Flood Zone",
            "flood",
            ["13.0300,123.4500", "13.0320,123.4520", "13.0310,123.4540"],
            "high",
        ),
        zone(
            "Mt. Mayon Landslide Area",
            "landslide",
            ["13.0400,123.4600", "13.0420,123.4620", "13.0410,123.4640"],
            "medium",
        ),
    ]
}

pub fn pois() -> Vec<Poi> {
    [
        ("Pio Duran Health Center", "medical", "13.0350", "123.4570", "Main Street, Pio Duran"),
        ("Municipal Charging Station", "charging", "13.0360", "123.4580", "Town Plaza"),
        ("Barangay Pet Shelter", "pet-shelter", "13.0370", "123.4590", "Barangay Hall Compound"),
    ]
    .into_iter()
    .map(|(name, kind, latitude, longitude, address)| Poi {
        name: name.to_owned(),
        kind: kind.to_owned(),
        latitude: latitude.to_owned(),
        longitude: longitude.to_owned(),
        address: Some(address.to_owned()),
        available: true,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use model::validation::Validate;

    use super::*;

    #[test]
    fn seed_data_passes_validation() {
        go_bag_items().iter().try_for_each(Validate::validate).unwrap();
        evacuation_centers().iter().try_for_each(Validate::validate).unwrap();
        households().iter().try_for_each(Validate::validate).unwrap();
        hazard_zones().iter().try_for_each(Validate::validate).unwrap();
        pois().iter().try_for_each(Validate::validate).unwrap();
    }

    #[test]
    fn seed_sizes_match_reference_data() {
        assert_eq!(go_bag_items().len(), 9);
        assert_eq!(evacuation_centers().len(), 3);
        assert_eq!(households().len(), 1);
        assert_eq!(hazard_zones().len(), 2);
        assert_eq!(pois().len(), 3);
        assert!(go_bag_items().iter().all(|item| !item.checked));
    }
}
