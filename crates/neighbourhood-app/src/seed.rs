//! Demo profile data for local runs.

use anyhow::Result;

use neighbourhood_db::schema::Profile;
use neighbourhood_db::ProfileStore;

/// Populate the store with sample profiles when it's empty.
///
/// One profile per flow path: a resident, a committee member, a profile with
/// an unrecognized role, and (deliberately) none for the `ghost-demo`
/// subject so the missing-profile path stays reachable.
pub async fn seed_if_empty(store: &dyn ProfileStore) -> Result<()> {
    let existing = store.list_profiles().await?;
    if !existing.is_empty() {
        return Ok(());
    }

    tracing::info!("Empty profile store — seeding sample data");

    let profiles = [
        ("resident-demo", "Rosa Alvarez", Some("Resident")),
        ("committee-demo", "Marta Osei", Some("Committee Member")),
        ("pending-demo", "Jan Kowalski", Some("Treasurer")),
    ];

    for (subject_id, display_name, role) in profiles {
        let profile = Profile::new(
            subject_id.to_string(),
            display_name.to_string(),
            role.map(str::to_string),
        );
        store.create_profile(profile).await?;
    }

    tracing::info!("Seeded {} profiles", profiles.len());
    Ok(())
}
