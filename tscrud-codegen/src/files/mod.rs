//! Per-resource TypeScript file generators.
//!
//! Each resource gets an entity, a controller, a repository and a route
//! module. All four are regenerated from scratch on every run.

mod controller_ts;
mod entity_ts;
mod repository_ts;
mod route_ts;

pub use controller_ts::ControllerTs;
pub use entity_ts::EntityTs;
pub use repository_ts::RepositoryTs;
pub use route_ts::RouteTs;

/// Directory holding entities and the entity index.
pub const ENTITY_DIR: &str = "src/infra/entity";
/// Directory holding controllers.
pub const CONTROLLER_DIR: &str = "src/controllers";
/// Directory holding repositories.
pub const REPOSITORY_DIR: &str = "src/repositories";
/// Directory holding route modules and the route index.
pub const ROUTE_DIR: &str = "src/routes";

/// Every directory a resource writes into, in generation order.
pub const RESOURCE_DIRS: [&str; 4] = [ENTITY_DIR, CONTROLLER_DIR, REPOSITORY_DIR, ROUTE_DIR];
