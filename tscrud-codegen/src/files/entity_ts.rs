//! typeorm entity generator.

use std::path::{Path, PathBuf};

use tscrud_core::{DerivedIdentifiers, GeneratedFile};

use super::ENTITY_DIR;
use crate::ast::Import;

/// The persistent entity for a resource, with an `ID` key and audit columns.
pub struct EntityTs<'a> {
    ids: &'a DerivedIdentifiers,
    /// Expression inserted verbatim as the entity schema
    schema: &'a str,
}

impl<'a> EntityTs<'a> {
    pub fn new(ids: &'a DerivedIdentifiers, schema: &'a str) -> Self {
        Self { ids, schema }
    }
}

impl GeneratedFile for EntityTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ENTITY_DIR)
            .join(format!("{}.ts", self.ids.file_name))
    }

    fn render(&self) -> String {
        let import = Import::new("typeorm")
            .named("Entity")
            .named("Column")
            .named("PrimaryColumn");

        format!(
            r#"{import}

@Entity({{
  name: '{table}',
  schema: {schema},
}})
export class {class} {{
  @PrimaryColumn({{ type: 'int', name: 'ID' }})
  id: number;

  // Add your columns here

  @Column({{ type: 'varchar', length: 255, name: 'USUARIO_INCLUSAO' }})
  usuarioInclusao: string;

  @Column({{ type: 'timestamp', name: 'DATA_INCLUSAO' }})
  dataInclusao: Date;

  @Column({{ type: 'varchar', length: 255, name: 'USUARIO_ALTERACAO' }})
  usuarioAlteracao: string;

  @Column({{ type: 'timestamp', name: 'DATA_ALTERACAO' }})
  dataAlteracao: Date;
}}
"#,
            import = import.statement(),
            table = self.ids.table_name,
            schema = self.schema,
            class = self.ids.class_name,
        )
    }
}
