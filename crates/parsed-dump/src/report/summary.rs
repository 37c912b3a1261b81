//! Aggregate totals across all loaded modules.

use serde::Serialize;

use crate::models::Module;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_modules: usize,
    pub total_classes: usize,
    pub total_class_templates: usize,
    pub total_typedefs: usize,
    pub total_enums: usize,
    pub total_functions: usize,
}

impl Summary {
    pub fn from_modules(modules: &[Module]) -> Self {
        modules.iter().fold(
            Self {
                total_modules: modules.len(),
                ..Self::default()
            },
            |mut acc, module| {
                acc.total_classes += module.classes.len();
                acc.total_class_templates += module.class_templates.len();
                acc.total_typedefs += module.typedefs.len();
                acc.total_enums += module.enums.len();
                acc.total_functions += module.functions.len();
                acc
            },
        )
    }

    /// Indented human-readable lines printed after a successful dump.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("  Modules: {}", self.total_modules),
            format!("  Classes: {}", self.total_classes),
            format!("  Class Templates: {}", self.total_class_templates),
            format!("  Typedefs: {}", self.total_typedefs),
            format!("  Enums: {}", self.total_enums),
            format!("  Functions: {}", self.total_functions),
        ]
    }
}
