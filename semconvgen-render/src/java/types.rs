//! Attribute type to Java key type mapping.

use semconvgen_registry::PrimitiveType;

/// Java type argument and key factory for a primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaKeyType {
    pub value_type: &'static str,
    pub factory: &'static str,
}

/// Map a primitive attribute type to its Java key type.
pub fn key_type(primitive: PrimitiveType) -> JavaKeyType {
    let (value_type, factory) = match primitive {
        PrimitiveType::Boolean => ("Boolean", "booleanKey"),
        PrimitiveType::String => ("String", "stringKey"),
        PrimitiveType::Int => ("Long", "longKey"),
        PrimitiveType::Double => ("Double", "doubleKey"),
        PrimitiveType::BooleanArray => ("List<Boolean>", "booleanArrayKey"),
        PrimitiveType::StringArray => ("List<String>", "stringArrayKey"),
        PrimitiveType::IntArray => ("List<Long>", "longArrayKey"),
        PrimitiveType::DoubleArray => ("List<Double>", "doubleArrayKey"),
    };
    JavaKeyType { value_type, factory }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_mapping() {
        assert_eq!(key_type(PrimitiveType::Int).value_type, "Long");
        assert_eq!(key_type(PrimitiveType::Int).factory, "longKey");
        assert_eq!(key_type(PrimitiveType::Boolean).factory, "booleanKey");
    }

    #[test]
    fn test_array_mapping() {
        let t = key_type(PrimitiveType::StringArray);
        assert_eq!(t.value_type, "List<String>");
        assert_eq!(t.factory, "stringArrayKey");
    }
}
