use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Sink for the user-facing lines an example prints while it runs.
pub trait Narrator: Send + Sync {
    fn say(&self, line: &str);
}

#[async_trait]
pub trait Example: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self) -> Result<()>;
}
