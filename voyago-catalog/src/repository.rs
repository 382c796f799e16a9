use crate::travel::TravelOption;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for travel option data access
#[async_trait]
pub trait TravelOptionStore: Send + Sync {
    async fn insert(
        &self,
        option: &TravelOption,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<TravelOption>, Box<dyn std::error::Error + Send + Sync>>;

    async fn update(
        &self,
        option: &TravelOption,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn remove(&self, id: Uuid) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
