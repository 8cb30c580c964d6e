use serde_json::Value;
use std::rc::Rc;

pub const DEPTH_LIMIT_VALUE: &str = "[Depth limit ~]";
pub const ARRAY_LENGTH_LIMIT_VALUE: &str = "[Array, length: $length ~]";
pub const OBJECT_PROPERTY_LIMIT_VALUE: &str = "[Object, properties: $count ~]";
pub const CIRCULAR_REFERENCE_VALUE: &str = "[Circular ~]";
pub const FUNCTION_VALUE: &str = "[Function ~]";
pub const SYMBOL_VALUE: &str = "[Symbol ~]";

pub type PropertyPredicate = Rc<dyn Fn(&str) -> bool>;
pub type PropertyReplacer = Rc<dyn Fn(&str, Value) -> Value>;

/// Options for `simplify_deep`.
///
/// Every field has a default; callers override selectively through struct
/// update syntax: `SimplifierOptions { max_depth: 3, ..Default::default() }`.
#[derive(Clone)]
pub struct SimplifierOptions {
    /// Maximum recursion depth before a value is replaced with
    /// `depth_limit_value`. Default: 10.
    pub max_depth: usize,

    /// Sequences longer than this are replaced with
    /// `array_length_limit_value`. Default: 100.
    pub max_array_length: usize,

    /// Records with more properties than this are replaced with
    /// `object_property_limit_value`. Default: 100.
    pub max_object_properties: usize,

    /// Excludes a property of a top-level record from the result.
    /// Default: nothing is excluded.
    pub is_ignored_property: PropertyPredicate,

    /// Rewrites property values after simplification (masking and the
    /// like). Sees already-simplified values. Default: no replacement.
    pub replace_property_value: Option<PropertyReplacer>,

    /// Replacement used when `max_depth` is exceeded.
    pub depth_limit_value: String,

    /// Replacement for over-long sequences; `$length` is substituted with
    /// the actual element count.
    pub array_length_limit_value: String,

    /// Replacement for over-wide records; `$count` is substituted with the
    /// actual property count.
    pub object_property_limit_value: String,

    /// Replacement for a value already visited in the current traversal.
    pub circular_reference_value: String,

    /// Replacement for callable values.
    pub function_value: String,

    /// Replacement for symbol values.
    pub symbol_value: String,
}

impl Default for SimplifierOptions {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_array_length: 100,
            max_object_properties: 100,
            is_ignored_property: Rc::new(|_| false),
            replace_property_value: None,
            depth_limit_value: DEPTH_LIMIT_VALUE.to_string(),
            array_length_limit_value: ARRAY_LENGTH_LIMIT_VALUE.to_string(),
            object_property_limit_value: OBJECT_PROPERTY_LIMIT_VALUE.to_string(),
            circular_reference_value: CIRCULAR_REFERENCE_VALUE.to_string(),
            function_value: FUNCTION_VALUE.to_string(),
            symbol_value: SYMBOL_VALUE.to_string(),
        }
    }
}
