use termstat_core::Language;

/// The tree-sitter grammar for a language, if one is bundled.
pub fn grammar(language: Language) -> Option<tree_sitter::Language> {
    let grammar = match language {
        Language::Rust => tree_sitter_rust::LANGUAGE.into(),
        Language::Go => tree_sitter_go::LANGUAGE.into(),
        Language::Python => tree_sitter_python::LANGUAGE.into(),
        Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        Language::Java => tree_sitter_java::LANGUAGE.into(),
        Language::Ruby => tree_sitter_ruby::LANGUAGE.into(),
        Language::C => tree_sitter_c::LANGUAGE.into(),
        Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
        Language::Other => return None,
    };
    Some(grammar)
}

/// Node kinds whose text is a name chosen by the programmer.
///
/// Keywords, literals, and builtin primitive types never appear here.
pub fn identifier_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Rust => &[
            "identifier",
            "type_identifier",
            "field_identifier",
            "shorthand_field_identifier",
        ],
        Language::Go => &[
            "identifier",
            "type_identifier",
            "field_identifier",
            "package_identifier",
            "label_name",
        ],
        Language::Python => &["identifier"],
        Language::JavaScript => &[
            "identifier",
            "property_identifier",
            "shorthand_property_identifier",
            "shorthand_property_identifier_pattern",
            "private_property_identifier",
        ],
        Language::TypeScript | Language::Tsx => &[
            "identifier",
            "type_identifier",
            "property_identifier",
            "shorthand_property_identifier",
            "shorthand_property_identifier_pattern",
            "private_property_identifier",
        ],
        Language::Java => &["identifier", "type_identifier"],
        Language::Ruby => &["identifier", "constant", "instance_variable", "class_variable"],
        Language::C => &["identifier", "type_identifier", "field_identifier"],
        Language::Cpp => &[
            "identifier",
            "type_identifier",
            "field_identifier",
            "namespace_identifier",
        ],
        Language::Other => &[],
    }
}
