//! Canonical views of classes, class templates and their members.
//!
//! Which collections get full detail is fixed: fields and enums are small and
//! structural, so they are emitted in full; constructors are reduced to their
//! argument types; methods, static methods and operators are reduced to
//! sorted name lists. Every collection is still counted under `counts`.

use serde::Serialize;
use tracing::warn;

use crate::canonical::signature::{duplicate_signatures, Signature};
use crate::canonical::{non_empty, sorted_by_name};
use crate::models::{Class, ClassTemplate, Enum, Field, Method};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(rename = "const")]
    pub is_const: bool,
    pub pod: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumDetail {
    pub name: String,
    /// `(label, value)` pairs in declaration order.
    pub values: Vec<(String, Option<String>)>,
    pub anonymous: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConstructorDetail {
    pub arg_types: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    pub constructors: usize,
    pub methods: usize,
    pub static_methods: usize,
    pub operators: usize,
    pub fields: usize,
    pub enums: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeParamDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub default: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassDetail {
    pub name: String,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub superclass: Vec<String>,
    pub counts: ClassCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<Vec<EnumDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_signatures: Option<Vec<ConstructorDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_method_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_names: Option<Vec<String>>,
    /// Only set for class templates, where it is always present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_params: Option<Vec<TypeParamDetail>>,
}

pub fn canonicalize_field(field: &Field) -> FieldDetail {
    FieldDetail {
        name: field.name.clone(),
        ty: field.ty.clone(),
        is_const: field.is_const,
        pod: field.pod,
    }
}

pub fn canonicalize_enum(enumeration: &Enum) -> EnumDetail {
    EnumDetail {
        name: enumeration.name.clone(),
        values: enumeration
            .values
            .iter()
            .map(|v| (v.label.clone(), v.value.clone()))
            .collect(),
        anonymous: enumeration.anonymous,
    }
}

fn sorted_names(methods: &[Method]) -> Option<Vec<String>> {
    let mut names: Vec<String> = methods.iter().map(|m| m.name.clone()).collect();
    names.sort();
    non_empty(names)
}

fn constructor_signatures(class: &Class) -> Option<Vec<ConstructorDetail>> {
    let mut signatures: Vec<(String, ConstructorDetail)> = class
        .constructors
        .iter()
        .map(|ctor| {
            let sig = Signature::of_constructor(&class.name, ctor);
            let detail = ConstructorDetail {
                arg_types: sig.arg_types(),
            };
            (sig.arg_types_key(), detail)
        })
        .collect();
    signatures.sort_by(|a, b| a.0.cmp(&b.0));
    non_empty(signatures.into_iter().map(|(_, detail)| detail).collect())
}

/// Members whose signatures collide once default values are dropped. They
/// still count separately; the warning points at headers that will not
/// compare cleanly.
fn warn_duplicate_members(class: &Class) {
    let members = class
        .methods
        .iter()
        .chain(&class.static_methods)
        .chain(&class.operators)
        .map(Signature::of_method)
        .chain(
            class
                .constructors
                .iter()
                .map(|ctor| Signature::of_constructor(&class.name, ctor)),
        );
    for sig in duplicate_signatures(members) {
        warn!(class = %class.name, signature = %sig, "duplicate member signature");
    }
}

pub fn canonicalize_class(class: &Class) -> ClassDetail {
    warn_duplicate_members(class);

    let mut superclass = class.superclasses.clone();
    superclass.sort();

    ClassDetail {
        name: class.name.clone(),
        is_abstract: class.is_abstract,
        superclass,
        counts: ClassCounts {
            constructors: class.constructors.len(),
            methods: class.methods.len(),
            static_methods: class.static_methods.len(),
            operators: class.operators.len(),
            fields: class.fields.len(),
            enums: class.enums.len(),
        },
        fields: non_empty(
            sorted_by_name(&class.fields, |f| f.name.as_str())
                .into_iter()
                .map(canonicalize_field)
                .collect(),
        ),
        enums: non_empty(
            sorted_by_name(&class.enums, |e| e.name.as_str())
                .into_iter()
                .map(canonicalize_enum)
                .collect(),
        ),
        constructor_signatures: constructor_signatures(class),
        method_names: sorted_names(&class.methods),
        static_method_names: sorted_names(&class.static_methods),
        operator_names: sorted_names(&class.operators),
        type_params: None,
    }
}

/// Class view plus template parameters in declaration order.
pub fn canonicalize_class_template(template: &ClassTemplate) -> ClassDetail {
    let mut detail = canonicalize_class(&template.class);
    detail.type_params = Some(
        template
            .type_params
            .iter()
            .map(|param| TypeParamDetail {
                kind: param.kind.clone(),
                name: param.name.clone(),
                default: param.default.clone(),
            })
            .collect(),
    );
    detail
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
