//! XML Schema names for simple leaf classes

use crate::types::Type;

/// Fallback XSD type for anything without a dedicated mapping
pub const DEFAULT_XSD_TYPE: &str = "xs:string";

/// Class names written as plain text, with the XSD type each one maps to
const SIMPLE_CLASSES: &[(&str, &str)] = &[
    ("boolean", "xs:boolean"),
    ("java.lang.Boolean", "xs:boolean"),
    ("byte", "xs:byte"),
    ("java.lang.Byte", "xs:byte"),
    ("char", "xs:string"),
    ("java.lang.Character", "xs:string"),
    ("short", "xs:short"),
    ("java.lang.Short", "xs:short"),
    ("int", "xs:integer"),
    ("java.lang.Integer", "xs:integer"),
    ("long", "xs:long"),
    ("java.lang.Long", "xs:long"),
    ("float", "xs:float"),
    ("java.lang.Float", "xs:float"),
    ("double", "xs:double"),
    ("java.lang.Double", "xs:double"),
    ("java.lang.String", "xs:string"),
    ("java.lang.Class", "xs:string"),
    ("java.math.BigDecimal", "xs:decimal"),
    ("java.math.BigInteger", "xs:integer"),
    ("java.net.URI", "xs:string"),
    ("java.util.Date", "xs:date"),
    ("java.sql.Date", "xs:date"),
    ("javax.xml.namespace.QName", "xs:QName"),
];

/// Whether `class_name` is a primitive or string-like leaf
pub fn is_simple_class(class_name: &str) -> bool {
    SIMPLE_CLASSES.iter().any(|(name, _)| *name == class_name)
}

/// XSD type name used when a type is rendered as text
pub fn xsd_type_name(ty: &Type) -> &'static str {
    SIMPLE_CLASSES
        .iter()
        .find(|(name, _)| *name == ty.class_name())
        .map(|(_, xsd)| *xsd)
        .unwrap_or(DEFAULT_XSD_TYPE)
}
