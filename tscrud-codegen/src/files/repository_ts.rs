//! typeorm repository generator.

use std::path::{Path, PathBuf};

use tscrud_core::{DerivedIdentifiers, GeneratedFile};

use super::REPOSITORY_DIR;
use crate::ast::Import;

/// A repository wrapping the generic typeorm `Repository` for one entity.
pub struct RepositoryTs<'a> {
    ids: &'a DerivedIdentifiers,
}

impl<'a> RepositoryTs<'a> {
    pub fn new(ids: &'a DerivedIdentifiers) -> Self {
        Self { ids }
    }
}

impl GeneratedFile for RepositoryTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(REPOSITORY_DIR)
            .join(format!("{}-repository.ts", self.ids.file_name))
    }

    fn render(&self) -> String {
        let class = &self.ids.class_name;
        let imports = [
            Import::new("typeorm").named("DataSource").named("Repository"),
            Import::new(format!("../infra/entity/{}", self.ids.file_name)).named(class),
        ]
        .iter()
        .map(Import::build)
        .collect::<String>();

        format!(
            r#"{imports}
export class {class}Repository {{
  private repository: Repository<{class}>;

  constructor(dataSource: DataSource) {{
    this.repository = dataSource.getRepository({class});
  }}

  async findAll(): Promise<{class}[]> {{
    return await this.repository.find();
  }}

  async findById(id: number): Promise<{class} | null> {{
    return await this.repository.findOne({{ where: {{ id }} }});
  }}

  async create(entity: Partial<{class}>): Promise<{class}> {{
    const newEntity = this.repository.create(entity);
    return await this.repository.save(newEntity);
  }}

  async update(id: number, updatedData: Partial<{class}>): Promise<{class} | null> {{
    const entity = await this.findById(id);
    if (!entity) {{
      return null;
    }}
    Object.assign(entity, updatedData);
    return await this.repository.save(entity);
  }}

  async deleteById(id: number): Promise<void> {{
    await this.repository.delete(id);
  }}
}}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use tscrud_core::{DerivedIdentifiers, NamingScheme};

    use super::*;

    #[test]
    fn test_repository_targets_entity() {
        let ids = DerivedIdentifiers::from_raw("invoice", NamingScheme::Canonical).unwrap();
        let file = RepositoryTs::new(&ids);

        assert_eq!(
            file.path(Path::new("/p")),
            Path::new("/p/src/repositories/invoice-repository.ts")
        );

        let code = file.render();
        assert!(code.contains("import { Invoice } from '../infra/entity/invoice';\n"));
        assert!(code.contains("private repository: Repository<Invoice>;"));
        for op in ["findAll", "findById", "create", "update", "deleteById"] {
            assert!(code.contains(&format!("  async {}(", op)), "missing {op}");
        }
    }
}
