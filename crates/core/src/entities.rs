use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Position of a syntax node or comment in a header
///
/// Lines are 1-based, byte offsets are 0-based and end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start_line: usize,
    pub end_line: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

impl SourceSpan {
    /// Create a SourceSpan from tree-sitter node positions
    pub fn from_tree_sitter_node(node: tree_sitter::Node) -> Self {
        Self {
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
        }
    }
}

bitflags! {
    /// Closed set of attributes a field can carry
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FieldAttributes: u8 {
        /// Edit with a color picker when the binding offers one
        const COLOR = 1 << 0;

        /// Display only
        const READONLY = 1 << 1;

        /// Never emitted
        const HIDDEN = 1 << 2;

        /// Declared through `DEBUG_ONLY(...)`
        const DEBUG_ONLY = 1 << 3;

        /// Declared through `NDEBUG_ONLY(...)`
        const NDEBUG_ONLY = 1 << 4;
    }
}

/// Call-like macros that conditionally compile a field
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum GatingMacro {
    #[strum(serialize = "DEBUG_ONLY")]
    #[serde(rename = "DEBUG_ONLY")]
    DebugOnly,
    #[strum(serialize = "NDEBUG_ONLY")]
    #[serde(rename = "NDEBUG_ONLY")]
    NdebugOnly,
}

impl GatingMacro {
    /// Attribute a field declared through this macro carries
    pub fn attribute(self) -> FieldAttributes {
        match self {
            Self::DebugOnly => FieldAttributes::DEBUG_ONLY,
            Self::NdebugOnly => FieldAttributes::NDEBUG_ONLY,
        }
    }
}

/// Inclusive numeric bounds attached with `@range(min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// A single field of an annotated aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Field identifier
    pub name: String,

    /// Declared type text, qualifiers and pointer markers included
    pub type_name: String,

    pub attributes: FieldAttributes,

    pub range: Option<ValueRange>,

    /// Override from `@name("...")`
    pub display_name: Option<String>,

    /// 1-based line of the declaration, diagnostics only
    pub line: usize,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            attributes: FieldAttributes::empty(),
            range: None,
            display_name: None,
            line,
        }
    }

    pub fn is_readonly(&self) -> bool {
        self.attributes.contains(FieldAttributes::READONLY)
    }

    pub fn is_color(&self) -> bool {
        self.attributes.contains(FieldAttributes::COLOR)
    }

    pub fn is_hidden(&self) -> bool {
        self.attributes.contains(FieldAttributes::HIDDEN)
    }

    /// The gating macro the field was declared through, if any
    pub fn gating(&self) -> Option<GatingMacro> {
        if self.attributes.contains(FieldAttributes::DEBUG_ONLY) {
            Some(GatingMacro::DebugOnly)
        } else if self.attributes.contains(FieldAttributes::NDEBUG_ONLY) {
            Some(GatingMacro::NdebugOnly)
        } else {
            None
        }
    }
}

/// A struct or class opted into generation with `@imgui`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructInfo {
    pub name: String,

    /// Enclosing namespaces, outermost first
    pub scope: Vec<String>,

    /// Override from `@name("...")` on the enabling comment
    pub display_name: Option<String>,

    /// Fields in declaration order
    pub fields: Vec<FieldInfo>,

    pub line: usize,
}

impl StructInfo {
    pub fn new(name: impl Into<String>, scope: Vec<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            scope,
            display_name: None,
            fields: Vec::new(),
            line,
        }
    }

    /// Enclosing namespace path joined with `::`
    pub fn namespace(&self) -> Option<String> {
        if self.scope.is_empty() {
            None
        } else {
            Some(self.scope.join("::"))
        }
    }

    /// Fully qualified name, e.g. `scene::transform_component`
    pub fn full_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{ns}::{}", self.name),
            None => self.name.clone(),
        }
    }
}
