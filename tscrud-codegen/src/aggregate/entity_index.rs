//! `src/infra/entity/index.ts` registration.

use std::path::{Path, PathBuf};

use tscrud_core::DerivedIdentifiers;

use super::{IndexFile, Placement, Registration};
use crate::{ast::Import, files::ENTITY_DIR};

/// Marker opening the export block of the entity index.
pub const ENTITY_EXPORT_MARKER: &str = "export {";

/// The entity index: one named import and one export entry per entity.
pub struct EntityIndex<'a> {
    ids: &'a DerivedIdentifiers,
}

impl<'a> EntityIndex<'a> {
    pub fn new(ids: &'a DerivedIdentifiers) -> Self {
        Self { ids }
    }
}

impl IndexFile for EntityIndex<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ENTITY_DIR).join("index.ts")
    }

    fn registration(&self) -> Registration {
        let class = &self.ids.class_name;
        let body_line = format!("  {},\n", class);

        Registration {
            import_line: Import::new(format!("./{}", self.ids.file_name))
                .named(class)
                .build(),
            placement: Placement::AfterMarker {
                marker: ENTITY_EXPORT_MARKER,
                fallback: format!("\n{}\n{}}};\n", ENTITY_EXPORT_MARKER, body_line),
            },
            body_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use tscrud_core::NamingScheme;

    use super::*;

    #[test]
    fn test_entity_registration_lines() {
        let ids = DerivedIdentifiers::from_raw("orderItem", NamingScheme::Canonical).unwrap();
        let registration = EntityIndex::new(&ids).registration();

        assert_eq!(
            registration.import_line,
            "import { OrderItem } from './order-item';\n"
        );
        assert_eq!(registration.body_line, "  OrderItem,\n");
        assert_eq!(
            registration.placement,
            Placement::AfterMarker {
                marker: "export {",
                fallback: "\nexport {\n  OrderItem,\n};\n".to_string(),
            }
        );
    }
}
