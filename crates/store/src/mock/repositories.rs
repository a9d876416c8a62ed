use async_trait::async_trait;
use mockall::mock;

use crate::repositories::AppointmentRepository;

// Mock repository for testing
mock! {
    pub Repository {}

    #[async_trait]
    impl AppointmentRepository for Repository {
        async fn read(&self) -> eyre::Result<Option<String>>;

        async fn write(&self, payload: &str) -> eyre::Result<()>;
    }
}
