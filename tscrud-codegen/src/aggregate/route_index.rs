//! `src/routes/index.ts` registration.

use std::path::{Path, PathBuf};

use tscrud_core::DerivedIdentifiers;

use super::{IndexFile, Placement, Registration};
use crate::{
    ast::Import,
    files::{ROUTE_DIR, RouteTs},
};

/// Terminal line of the route index; mount statements go right above it.
pub const ROUTES_EXPORT_MARKER: &str = "export default routes;";

/// The route index: one default import and one `routes.use` mount per resource.
pub struct RouteIndex<'a> {
    ids: &'a DerivedIdentifiers,
    auth_middleware: &'a str,
}

impl<'a> RouteIndex<'a> {
    pub fn new(ids: &'a DerivedIdentifiers, auth_middleware: &'a str) -> Self {
        Self {
            ids,
            auth_middleware,
        }
    }
}

impl IndexFile for RouteIndex<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ROUTE_DIR).join("index.ts")
    }

    fn registration(&self) -> Registration {
        let file = &self.ids.file_name;
        let router = RouteTs::router_name(self.ids);

        Registration {
            import_line: Import::new(format!("./{}.routes", file))
                .default(&router)
                .build(),
            body_line: format!(
                "routes.use('/{}', {}, {});\n",
                file, self.auth_middleware, router
            ),
            placement: Placement::BeforeMarker {
                marker: ROUTES_EXPORT_MARKER,
            },
        }
    }
}
