//! express route module generator.

use std::path::{Path, PathBuf};

use tscrud_core::{DerivedIdentifiers, GeneratedFile};

use super::ROUTE_DIR;
use crate::ast::Import;

/// HTTP status returned by list, get, update and delete endpoints.
pub const STATUS_OK: u16 = 200;
/// HTTP status returned by the create endpoint.
pub const STATUS_CREATED: u16 = 201;

/// A router wiring five endpoints to the resource controller.
pub struct RouteTs<'a> {
    ids: &'a DerivedIdentifiers,
}

impl<'a> RouteTs<'a> {
    pub fn new(ids: &'a DerivedIdentifiers) -> Self {
        Self { ids }
    }

    /// Name of the router exported by the module (e.g., "orderItemRoutes")
    pub fn router_name(ids: &DerivedIdentifiers) -> String {
        format!("{}Routes", ids.variable_name)
    }
}

impl GeneratedFile for RouteTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ROUTE_DIR)
            .join(format!("{}.routes.ts", self.ids.file_name))
    }

    fn render(&self) -> String {
        let class = &self.ids.class_name;
        let routes = Self::router_name(self.ids);
        let controller = format!("{}Controller", self.ids.variable_name);
        let imports = [
            Import::new("express").named("Router"),
            Import::new(format!("../controllers/{}-controller", self.ids.file_name))
                .named(format!("{}Controller", class)),
        ]
        .iter()
        .map(Import::build)
        .collect::<String>();

        format!(
            r#"{imports}
const {routes} = Router();
const {controller} = new {class}Controller();

{routes}.get('/', async (_req, res) => {{
  const response = await {controller}.getAll();
  res.status({ok}).json(response);
}});

{routes}.get('/:id', async (req, res) => {{
  const response = await {controller}.getById(parseInt(req.params.id));
  res.status({ok}).json(response);
}});

{routes}.post('/', async (req, res) => {{
  const response = await {controller}.create(req.body);
  res.status({created}).json(response);
}});

{routes}.put('/:id', async (req, res) => {{
  const response = await {controller}.update(parseInt(req.params.id), req.body);
  res.status({ok}).json(response);
}});

{routes}.delete('/:id', async (req, res) => {{
  await {controller}.delete(parseInt(req.params.id));
  res.status({ok}).json({{ message: 'Record deleted successfully' }});
}});

export default {routes};
"#,
            ok = STATUS_OK,
            created = STATUS_CREATED,
        )
    }
}
