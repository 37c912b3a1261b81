//! Typed records for parsed C++ module metadata as stored in a snapshot.
//!
//! These are read-only views: the loader produces them, the canonicalizer
//! borrows them, nothing mutates them in between.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Schema / contract constants
// ---------------------------------------------------------------------------

/// Schema version written into every snapshot header.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// 1. Argument
// ---------------------------------------------------------------------------

/// A single parameter of a function, method or constructor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

// ---------------------------------------------------------------------------
// 2. Callables
// ---------------------------------------------------------------------------

/// A free function or free operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub return_type: String,
    pub args: Vec<Argument>,
    pub inline: bool,
    pub namespace: String,
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            ..Self::default()
        }
    }
}

/// A member function, static member function or member operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub return_type: String,
    pub args: Vec<Argument>,
    pub is_const: bool,
    pub is_virtual: bool,
    pub is_pure_virtual: bool,
    pub inline: bool,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            ..Self::default()
        }
    }
}

/// A constructor. Its name is always the owning class name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    pub args: Vec<Argument>,
}

// ---------------------------------------------------------------------------
// 3. Data members
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub is_const: bool,
    pub pod: bool,
}

/// One enumerator: its label and, when spelled out, its initializer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub label: String,
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    pub values: Vec<EnumValue>,
    pub anonymous: bool,
}

/// Template instantiation carried by a typedef such as
/// `typedef NCollection_List<int> IntList;`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInstance {
    pub base: String,
    pub args: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    pub ty: String,
    pub pod: bool,
    pub template: Option<TemplateInstance>,
}

// ---------------------------------------------------------------------------
// 4. Classes
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub is_abstract: bool,
    pub superclasses: Vec<String>,
    pub constructors: Vec<Constructor>,
    pub methods: Vec<Method>,
    pub static_methods: Vec<Method>,
    pub operators: Vec<Method>,
    pub fields: Vec<Field>,
    pub enums: Vec<Enum>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A template parameter such as `typename T = int`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParam {
    pub kind: String,
    pub name: String,
    pub default: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTemplate {
    pub class: Class,
    pub type_params: Vec<TemplateParam>,
}

impl ClassTemplate {
    pub fn name(&self) -> &str {
        &self.class.name
    }
}

// ---------------------------------------------------------------------------
// 5. Module
// ---------------------------------------------------------------------------

/// Top-level compilation unit record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub headers: Vec<String>,
    pub dependencies: Vec<String>,
    pub namespaces: Vec<String>,
    pub classes: Vec<Class>,
    pub class_templates: Vec<ClassTemplate>,
    pub typedefs: Vec<Typedef>,
    pub enums: Vec<Enum>,
    pub functions: Vec<Function>,
    pub operators: Vec<Function>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
