pub mod async_await;
pub mod factory_method;
pub mod srp;

pub use async_await::AsyncAwaitExample;
pub use factory_method::FactoryMethodExample;
pub use srp::SrpExample;
