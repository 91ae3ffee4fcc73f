//! Shared constants for C++ AST traversal
//!
//! Node kinds produced by tree-sitter-cpp that the extractor inspects.

/// Node kind constants for tree-sitter AST traversal
pub(crate) mod node_kinds {
    pub const COMMENT: &str = "comment";

    // Scopes
    pub const NAMESPACE_DEFINITION: &str = "namespace_definition";
    pub const NAMESPACE_IDENTIFIER: &str = "namespace_identifier";
    pub const NESTED_NAMESPACE_SPECIFIER: &str = "nested_namespace_specifier";
    pub const DECLARATION_LIST: &str = "declaration_list";

    // Aggregates
    pub const STRUCT_SPECIFIER: &str = "struct_specifier";
    pub const CLASS_SPECIFIER: &str = "class_specifier";
    pub const FIELD_DECLARATION_LIST: &str = "field_declaration_list";
    pub const FIELD_DECLARATION: &str = "field_declaration";
    pub const DECLARATION: &str = "declaration";

    // Types
    pub const TYPE_QUALIFIER: &str = "type_qualifier";
    pub const PRIMITIVE_TYPE: &str = "primitive_type";
    pub const TYPE_IDENTIFIER: &str = "type_identifier";
    pub const QUALIFIED_IDENTIFIER: &str = "qualified_identifier";
    pub const TEMPLATE_TYPE: &str = "template_type";
    pub const SIZED_TYPE_SPECIFIER: &str = "sized_type_specifier";

    // Declarators and identifiers
    pub const IDENTIFIER: &str = "identifier";
    pub const FIELD_IDENTIFIER: &str = "field_identifier";
    pub const POINTER_DECLARATOR: &str = "pointer_declarator";
    pub const FUNCTION_DECLARATOR: &str = "function_declarator";
    pub const PARAMETER_LIST: &str = "parameter_list";

    // Macro-call shapes
    pub const EXPRESSION_STATEMENT: &str = "expression_statement";
    pub const CALL_EXPRESSION: &str = "call_expression";
    pub const ARGUMENT_LIST: &str = "argument_list";

    /// Kinds accepted as the type of a plain field declaration
    pub const FIELD_TYPES: &[&str] = &[
        PRIMITIVE_TYPE,
        TYPE_IDENTIFIER,
        QUALIFIED_IDENTIFIER,
        TEMPLATE_TYPE,
        SIZED_TYPE_SPECIFIER,
    ];
}

pub(crate) mod keywords {
    pub const CONST: &str = "const";
}

pub(crate) mod punctuation {
    pub const POINTER: &str = "*";
    pub const SCOPE: &str = "::";
    pub const STATEMENT_END: char = ';';
}
