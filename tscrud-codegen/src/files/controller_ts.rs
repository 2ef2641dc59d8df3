//! tsoa controller generator.

use std::path::{Path, PathBuf};

use tscrud_core::{DerivedIdentifiers, GeneratedFile};

use super::CONTROLLER_DIR;
use crate::ast::Import;

/// A controller exposing list, get, create, update and delete for a resource.
pub struct ControllerTs<'a> {
    ids: &'a DerivedIdentifiers,
}

impl<'a> ControllerTs<'a> {
    pub fn new(ids: &'a DerivedIdentifiers) -> Self {
        Self { ids }
    }

    fn imports(&self) -> String {
        let class = &self.ids.class_name;
        [
            Import::new("tsoa")
                .named("Body")
                .named("Controller")
                .named("Delete")
                .named("Get")
                .named("Path")
                .named("Post")
                .named("Put")
                .named("Route")
                .named("Tags"),
            Import::new("../infra/database/main").named("AppDataSource"),
            Import::new(format!("../repositories/{}-repository", self.ids.file_name))
                .named(format!("{}Repository", class)),
        ]
        .iter()
        .map(Import::build)
        .collect()
    }
}

impl GeneratedFile for ControllerTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(CONTROLLER_DIR)
            .join(format!("{}-controller.ts", self.ids.file_name))
    }

    fn render(&self) -> String {
        format!(
            r#"{imports}
@Route('{file}')
@Tags('{class}')
export class {class}Controller extends Controller {{
  private repository = new {class}Repository(AppDataSource);

  @Get('/')
  public async getAll(): Promise<any> {{
    return await this.repository.findAll();
  }}

  @Get('/{{id}}')
  public async getById(@Path() id: number): Promise<any> {{
    return await this.repository.findById(id);
  }}

  @Post('/')
  public async create(@Body() body: any): Promise<any> {{
    return await this.repository.create(body);
  }}

  @Put('/{{id}}')
  public async update(@Path() id: number, @Body() body: any): Promise<any> {{
    return await this.repository.update(id, body);
  }}

  @Delete('/{{id}}')
  public async delete(@Path() id: number): Promise<any> {{
    await this.repository.deleteById(id);
    return {{ message: 'Deleted successfully' }};
  }}
}}
"#,
            imports = self.imports(),
            file = self.ids.file_name,
            class = self.ids.class_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use tscrud_core::{DerivedIdentifiers, NamingScheme};

    use super::*;

    #[test]
    fn test_controller_path_and_wiring() {
        let ids = DerivedIdentifiers::from_raw("orderItem", NamingScheme::Canonical).unwrap();
        let file = ControllerTs::new(&ids);

        assert_eq!(
            file.path(Path::new(".")),
            Path::new("./src/controllers/order-item-controller.ts")
        );

        let code = file.render();
        assert!(code.contains(
            "import { OrderItemRepository } from '../repositories/order-item-repository';\n"
        ));
        assert!(code.contains("@Route('order-item')"));
        assert!(code.contains("export class OrderItemController extends Controller {"));
        for op in ["getAll", "getById", "create", "update", "delete"] {
            assert!(code.contains(&format!("public async {}(", op)), "missing {op}");
        }
    }
}
