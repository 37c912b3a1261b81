//! Comparable callable signatures.
//!
//! A [`Signature`] keeps what identifies a callable across builds: its name,
//! return type, argument names and types, and the flags that apply to its
//! kind. Default argument values are dropped because they are spelled
//! differently from one platform's headers to the next.
//!
//! Signatures also drive two checks on the canonical output: the ordering key
//! of `constructor_signatures` ([`Signature::arg_types_key`]) and the
//! duplicate-member warning ([`duplicate_signatures`]).

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::models::{Argument, Constructor, Function, Method};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    Const,
    Virtual,
    PureVirtual,
    Inline,
}

impl Flag {
    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Const => "const",
            Flag::Virtual => "virtual",
            Flag::PureVirtual => "pure_virtual",
            Flag::Inline => "inline",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    /// Enclosing namespace of a free function; `None` for members and for
    /// functions at global scope.
    pub namespace: Option<String>,
    pub name: String,
    /// `None` for constructors.
    pub return_type: Option<String>,
    pub args: Vec<(String, String)>,
    pub flags: BTreeSet<Flag>,
}

fn project_args(args: &[Argument]) -> Vec<(String, String)> {
    args.iter()
        .map(|arg| (arg.name.clone(), arg.ty.clone()))
        .collect()
}

fn flag_set(pairs: &[(Flag, bool)]) -> BTreeSet<Flag> {
    pairs
        .iter()
        .filter(|(_, set)| *set)
        .map(|(flag, _)| *flag)
        .collect()
}

impl Signature {
    pub fn of_function(func: &Function) -> Self {
        Self {
            namespace: Some(func.namespace.clone()).filter(|ns| !ns.is_empty()),
            name: func.name.clone(),
            return_type: Some(func.return_type.clone()),
            args: project_args(&func.args),
            flags: flag_set(&[(Flag::Inline, func.inline)]),
        }
    }

    pub fn of_method(method: &Method) -> Self {
        Self {
            namespace: None,
            name: method.name.clone(),
            return_type: Some(method.return_type.clone()),
            args: project_args(&method.args),
            flags: flag_set(&[
                (Flag::Const, method.is_const),
                (Flag::Virtual, method.is_virtual),
                (Flag::PureVirtual, method.is_pure_virtual),
                (Flag::Inline, method.inline),
            ]),
        }
    }

    pub fn of_constructor(class_name: &str, ctor: &Constructor) -> Self {
        Self {
            namespace: None,
            name: class_name.to_string(),
            return_type: None,
            args: project_args(&ctor.args),
            flags: BTreeSet::new(),
        }
    }

    pub fn arg_types(&self) -> Vec<String> {
        self.args.iter().map(|(_, ty)| ty.clone()).collect()
    }

    /// Ordering key for `constructor_signatures` entries.
    ///
    /// The key is the quoted-literal rendering of the emitted entry,
    /// `{'arg_types': ['int', 'char']}`, so entries compare on argument types
    /// only and a longer list sorts before its own prefix (`,` < `]`).
    pub fn arg_types_key(&self) -> String {
        let types: Vec<String> = self.args.iter().map(|(_, ty)| quote_literal(ty)).collect();
        format!("{{'arg_types': [{}]}}", types.join(", "))
    }
}

/// Quote `text` as a string literal: single quotes unless the text holds a
/// single quote and no double quote; backslashes, the chosen quote and
/// control characters are escaped.
fn quote_literal(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\x7f' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Signatures that occur more than once in `signatures`, each reported once
/// in first-seen order. Members that differ only in default values collide.
pub fn duplicate_signatures<I>(signatures: I) -> Vec<Signature>
where
    I: IntoIterator<Item = Signature>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for sig in signatures {
        if !seen.insert(sig.clone()) && reported.insert(sig.clone()) {
            duplicates.push(sig);
        }
    }
    duplicates
}

/// Renders as `[ret ][ns::]name(ty arg, ...)[ flag ...]`.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ret) = &self.return_type {
            write!(f, "{ret} ")?;
        }
        if let Some(ns) = &self.namespace {
            write!(f, "{ns}::")?;
        }
        write!(f, "{}(", self.name)?;
        for (i, (name, ty)) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if name.is_empty() {
                f.write_str(ty)?;
            } else {
                write!(f, "{ty} {name}")?;
            }
        }
        f.write_str(")")?;
        for flag in &self.flags {
            write!(f, " {}", flag.as_str())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn resize(default_width: &str) -> Method {
        Method {
            args: vec![
                Argument::new("width", "int").with_default(default_width),
                Argument::new("height", "int"),
            ],
            is_virtual: true,
            ..Method::new("resize", "void")
        }
    }

    #[test]
    fn test_default_values_do_not_affect_equality() {
        let a = Signature::of_method(&resize("0"));
        let b = Signature::of_method(&resize("Standard_Integer(0)"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_argument_type_change_breaks_equality() {
        let mut other = resize("0");
        other.args[1].ty = "long".to_string();
        assert_ne!(
            Signature::of_method(&resize("0")),
            Signature::of_method(&other)
        );
    }

    #[test]
    fn test_flags_participate_in_equality() {
        let mut other = resize("0");
        other.is_const = true;
        assert_ne!(
            Signature::of_method(&resize("0")),
            Signature::of_method(&other)
        );
    }

    #[test]
    fn test_method_display() {
        let mut method = resize("0");
        method.is_const = true;
        assert_eq!(
            Signature::of_method(&method).to_string(),
            "void resize(int width, int height) const virtual"
        );
    }

    #[test]
    fn test_constructor_has_no_return_type() {
        let ctor = Constructor {
            args: vec![Argument::new("", "const gp_Pnt&"), Argument::new("tol", "double")],
        };
        let sig = Signature::of_constructor("Geom_Point", &ctor);
        assert_eq!(sig.return_type, None);
        assert_eq!(sig.to_string(), "Geom_Point(const gp_Pnt&, double tol)");
        assert_eq!(sig.arg_types(), vec!["const gp_Pnt&", "double"]);
    }

    #[test]
    fn test_function_flags() {
        let func = Function {
            inline: true,
            args: vec![Argument::new("x", "double")],
            ..Function::new("Square", "double")
        };
        let sig = Signature::of_function(&func);
        assert_eq!(sig.flags.iter().copied().collect::<Vec<_>>(), vec![Flag::Inline]);
        assert_eq!(sig.to_string(), "double Square(double x) inline");
    }

    // -- Namespaces ---------------------------------------------------------

    #[test]
    fn test_function_namespace_in_display() {
        let func = Function {
            namespace: "gp".to_string(),
            args: vec![Argument::new("x", "double")],
            ..Function::new("Square", "double")
        };
        let sig = Signature::of_function(&func);
        assert_eq!(sig.namespace.as_deref(), Some("gp"));
        assert_eq!(sig.to_string(), "double gp::Square(double x)");
    }

    #[test]
    fn test_global_function_has_no_namespace() {
        let sig = Signature::of_function(&Function::new("Square", "double"));
        assert_eq!(sig.namespace, None);
    }

    // -- Constructor ordering key -------------------------------------------

    #[test]
    fn test_arg_types_key_ignores_names_and_defaults() {
        let a = Constructor {
            args: vec![Argument::new("w", "int").with_default("10")],
        };
        let b = Constructor {
            args: vec![Argument::new("width", "int")],
        };
        assert_eq!(
            Signature::of_constructor("Widget", &a).arg_types_key(),
            Signature::of_constructor("Widget", &b).arg_types_key()
        );
        assert_eq!(
            Signature::of_constructor("Widget", &a).arg_types_key(),
            "{'arg_types': ['int']}"
        );
    }

    #[test]
    fn test_arg_types_key_longer_list_sorts_before_prefix() {
        let one = Constructor {
            args: vec![Argument::new("a", "int")],
        };
        let two = Constructor {
            args: vec![Argument::new("x", "int"), Argument::new("c", "char")],
        };
        let one = Signature::of_constructor("Widget", &one).arg_types_key();
        let two = Signature::of_constructor("Widget", &two).arg_types_key();
        assert!(two < one, "{two} should sort before {one}");
    }

    #[test]
    fn test_arg_types_key_quoting() {
        assert_eq!(quote_literal("const gp_Pnt&"), "'const gp_Pnt&'");
        assert_eq!(quote_literal("char'"), "\"char'\"");
        assert_eq!(quote_literal("a'\"b"), "'a\\'\"b'");
        assert_eq!(quote_literal("C:\\x"), "'C:\\\\x'");
    }

    // -- Duplicates ---------------------------------------------------------

    #[test]
    fn test_duplicates_differing_only_in_defaults() {
        let sigs = vec![
            Signature::of_method(&resize("0")),
            Signature::of_method(&Method::new("draw", "void")),
            Signature::of_method(&resize("1")),
            Signature::of_method(&resize("2")),
        ];
        let duplicates = duplicate_signatures(sigs);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].name, "resize");
    }

    #[test]
    fn test_functions_in_different_namespaces_are_distinct() {
        let in_ns = |ns: &str| Function {
            namespace: ns.to_string(),
            ..Function::new("Square", "double")
        };
        let sigs = [in_ns("gp"), in_ns("math"), in_ns("")]
            .iter()
            .map(Signature::of_function)
            .collect::<Vec<_>>();
        assert!(duplicate_signatures(sigs).is_empty());
    }
}
