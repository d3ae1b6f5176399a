//! Attribute type descriptors

use serde::{Deserialize, Serialize};

use crate::error::ModelViolation;
use crate::xsd;

/// The declared shape of an attribute value.
///
/// A type is either a leaf, identified only by its opaque class name, or a collection
/// whose element type is itself a `Type`. The collection/nested pairing is structural, so
/// a collection without an element type cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TypeRepr", into = "TypeRepr")]
pub struct Type {
    class_name: String,
    kind: TypeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TypeKind {
    Leaf,
    Collection(Box<Type>),
}

impl Type {
    /// Create a non-collection type
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            kind: TypeKind::Leaf,
        }
    }

    /// Create a collection type holding values of `nested`
    pub fn collection_of(class_name: impl Into<String>, nested: Type) -> Self {
        Self {
            class_name: class_name.into(),
            kind: TypeKind::Collection(Box::new(nested)),
        }
    }

    /// Declared class name, kept as an opaque identifier
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.kind, TypeKind::Collection(_))
    }

    /// Element type of a collection; `None` for leaves
    pub fn nested_type(&self) -> Option<&Type> {
        match &self.kind {
            TypeKind::Leaf => None,
            TypeKind::Collection(nested) => Some(nested),
        }
    }

    /// Whether this is a primitive or string-like leaf that is written as plain text
    pub fn is_simple(&self) -> bool {
        !self.is_collection() && xsd::is_simple_class(&self.class_name)
    }

    /// The type polymorphic lookups resolve against: the nested type for collections,
    /// otherwise the type itself.
    pub fn element_type(&self) -> &Type {
        self.nested_type().unwrap_or(self)
    }
}

/// Serialized form: a bare class name, or a detailed table for collections.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TypeRepr {
    Name(String),
    Detailed {
        class: String,
        #[serde(default, skip_serializing_if = "is_false")]
        collection: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nested: Option<Box<TypeRepr>>,
    },
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<TypeRepr> for Type {
    type Error = ModelViolation;

    fn try_from(repr: TypeRepr) -> Result<Self, Self::Error> {
        match repr {
            TypeRepr::Name(class) => {
                if class.is_empty() {
                    return Err(ModelViolation::EmptyName("Type class"));
                }
                Ok(Type::new(class))
            }
            TypeRepr::Detailed {
                class,
                collection,
                nested,
            } => {
                if class.is_empty() {
                    return Err(ModelViolation::EmptyName("Type class"));
                }
                match (collection, nested) {
                    (true, Some(nested)) => {
                        let nested = Type::try_from(*nested)?;
                        Ok(Type::collection_of(class, nested))
                    }
                    (true, None) => Err(ModelViolation::MissingNestedType { class_name: class }),
                    (false, Some(_)) => {
                        Err(ModelViolation::UnexpectedNestedType { class_name: class })
                    }
                    (false, None) => Ok(Type::new(class)),
                }
            }
        }
    }
}

impl From<Type> for TypeRepr {
    fn from(ty: Type) -> Self {
        match ty.kind {
            TypeKind::Leaf => TypeRepr::Name(ty.class_name),
            TypeKind::Collection(nested) => TypeRepr::Detailed {
                class: ty.class_name,
                collection: true,
                nested: Some(Box::new(TypeRepr::from(*nested))),
            },
        }
    }
}
