use tracing::info;
use uuid::Uuid;

use crate::config::ProfileDefaults;
use crate::profiles::repo::ProfileRepository;
use crate::profiles::repo_types::Profile;

/// Load the user's profile, creating it from `defaults` on first access.
pub async fn get_or_create(
    repo: &dyn ProfileRepository,
    user_id: Uuid,
    defaults: &ProfileDefaults,
) -> anyhow::Result<Profile> {
    if let Some(profile) = repo.get_by_user(user_id).await? {
        return Ok(profile);
    }
    let profile = repo.create_default(user_id, defaults).await?;
    info!(%user_id, "default profile created");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryProfiles;

    #[tokio::test]
    async fn creates_once_then_returns_existing() {
        let repo = InMemoryProfiles::default();
        let user_id = Uuid::new_v4();

        let first = get_or_create(&repo, user_id, &ProfileDefaults::first_visit())
            .await
            .unwrap();
        assert_eq!(first.target_weight, 65.0);

        let mut edited = first.clone();
        edited.age = 41;
        repo.save(&edited).await.unwrap();

        let again = get_or_create(&repo, user_id, &ProfileDefaults::registration())
            .await
            .unwrap();
        assert_eq!(again.age, 41);
        assert_eq!(again.target_weight, 65.0);
    }
}
