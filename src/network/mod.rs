pub mod client;
pub mod context;
pub mod middleware;
pub mod service;
pub mod session;

pub use client::SiteClient;
pub use context::ServiceContext;
pub use service::HttpService;
pub use session::Session;
