//! Canonical views of modules and module-level typedefs.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::canonical::class::{
    canonicalize_class, canonicalize_class_template, canonicalize_enum, ClassDetail, EnumDetail,
};
use crate::canonical::signature::{duplicate_signatures, Signature};
use crate::canonical::{non_empty, sorted_by_name};
use crate::models::{Function, Module, Typedef};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypedefDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub pod: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_args: Option<Vec<String>>,
}

/// Free functions and operators are reduced to name and arity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionEntry {
    pub name: String,
    pub arg_count: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ModuleCounts {
    pub headers: usize,
    pub classes: usize,
    pub class_templates: usize,
    pub typedefs: usize,
    pub enums: usize,
    pub functions: usize,
    pub operators: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleDetail {
    pub name: String,
    pub dependencies: Vec<String>,
    pub namespaces: Vec<String>,
    pub counts: ModuleCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<IndexMap<String, ClassDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_templates: Option<IndexMap<String, ClassDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typedefs: Option<Vec<TypedefDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<Vec<EnumDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_names: Option<Vec<FunctionEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_names: Option<Vec<FunctionEntry>>,
}

pub fn canonicalize_typedef(typedef: &Typedef) -> TypedefDetail {
    let (template_base, template_args) = match &typedef.template {
        Some(instance) => (
            Some(instance.base.clone()).filter(|base| !base.is_empty()),
            non_empty(instance.args.clone()),
        ),
        None => (None, None),
    };
    TypedefDetail {
        name: typedef.name.clone(),
        ty: typedef.ty.clone(),
        pod: typedef.pod,
        template_base,
        template_args,
    }
}

fn function_entries(functions: &[Function]) -> Option<Vec<FunctionEntry>> {
    let mut entries: Vec<FunctionEntry> = functions
        .iter()
        .map(|f| FunctionEntry {
            name: f.name.clone(),
            arg_count: f.args.len(),
        })
        .collect();
    entries.sort_by(|a, b| (&a.name, a.arg_count).cmp(&(&b.name, b.arg_count)));
    non_empty(entries)
}

fn sorted_strings(items: &[String]) -> Vec<String> {
    let mut sorted = items.to_vec();
    sorted.sort();
    sorted
}

fn warn_duplicate_functions(module: &Module) {
    let functions = module
        .functions
        .iter()
        .chain(&module.operators)
        .map(Signature::of_function);
    for sig in duplicate_signatures(functions) {
        warn!(module = %module.name, signature = %sig, "duplicate function signature");
    }
}

pub fn canonicalize_module(module: &Module) -> ModuleDetail {
    warn_duplicate_functions(module);

    let classes: IndexMap<String, ClassDetail> = sorted_by_name(&module.classes, |c| c.name.as_str())
        .into_iter()
        .map(|class| (class.name.clone(), canonicalize_class(class)))
        .collect();

    let class_templates: IndexMap<String, ClassDetail> =
        sorted_by_name(&module.class_templates, |t| t.name())
            .into_iter()
            .map(|template| {
                (
                    template.name().to_string(),
                    canonicalize_class_template(template),
                )
            })
            .collect();

    ModuleDetail {
        name: module.name.clone(),
        dependencies: sorted_strings(&module.dependencies),
        namespaces: sorted_strings(&module.namespaces),
        counts: ModuleCounts {
            headers: module.headers.len(),
            classes: module.classes.len(),
            class_templates: module.class_templates.len(),
            typedefs: module.typedefs.len(),
            enums: module.enums.len(),
            functions: module.functions.len(),
            operators: module.operators.len(),
        },
        classes: (!classes.is_empty()).then_some(classes),
        class_templates: (!class_templates.is_empty()).then_some(class_templates),
        typedefs: non_empty(
            sorted_by_name(&module.typedefs, |t| t.name.as_str())
                .into_iter()
                .map(canonicalize_typedef)
                .collect(),
        ),
        enums: non_empty(
            sorted_by_name(&module.enums, |e| e.name.as_str())
                .into_iter()
                .map(canonicalize_enum)
                .collect(),
        ),
        function_names: function_entries(&module.functions),
        operator_names: function_entries(&module.operators),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
