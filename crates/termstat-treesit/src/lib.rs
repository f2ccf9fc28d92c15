//! Identifier discovery: find the names programmers chose in source files.
//!
//! Parsing is done with tree-sitter grammars. The rest of the workspace only
//! sees the `IdentifierExtractor` trait, so any other discovery strategy can
//! be plugged in.

mod extractor;
mod grammar;

pub use extractor::TreeSitterExtractor;
pub use grammar::{grammar, identifier_kinds};

use termstat_core::{Language, TermstatError};

/// Trait for identifier discovery.
pub trait IdentifierExtractor {
    /// Every identifier occurrence in `content`, in document order. The same
    /// name appears once per occurrence.
    fn extract<'c>(
        &self,
        content: &'c str,
        language: Language,
    ) -> Result<Vec<&'c str>, TermstatError>;
}

/// Create the default extractor (tree-sitter based).
pub fn default_extractor() -> TreeSitterExtractor {
    TreeSitterExtractor::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str, language: Language) -> Vec<&str> {
        default_extractor().extract(content, language).unwrap()
    }

    #[test]
    fn every_supported_language_has_a_grammar() {
        for lang in Language::SUPPORTED {
            assert!(grammar(*lang).is_some(), "missing grammar for {lang}");
            assert!(!identifier_kinds(*lang).is_empty());
        }
        assert!(grammar(Language::Other).is_none());
    }

    #[test]
    fn go_identifiers() {
        let source = r#"package server

import "fmt"

type RetryPolicy struct {
	MaxRetryCount int
}

func (p *RetryPolicy) NextBackoff(attempt int) int {
	fmt.Println(attempt)
	return p.MaxRetryCount
}
"#;
        let idents = extract(source, Language::Go);
        for expected in ["server", "RetryPolicy", "MaxRetryCount", "NextBackoff", "attempt", "Println"] {
            assert!(idents.contains(&expected), "missing {expected}: {idents:?}");
        }
        assert_eq!(idents.iter().filter(|i| **i == "RetryPolicy").count(), 2);
        assert_eq!(idents.iter().filter(|i| **i == "MaxRetryCount").count(), 2);
        for keyword in ["package", "func", "return", "struct", "import"] {
            assert!(!idents.contains(&keyword), "keyword {keyword} extracted");
        }
    }

    #[test]
    fn rust_identifiers_skip_primitive_types() {
        let source = r#"
struct Config {
    max_retries: u32,
}

fn parse_http_header(input: &str) -> Option<Header> {
    let value = input.trim();
    None
}
"#;
        let idents = extract(source, Language::Rust);
        for expected in ["Config", "max_retries", "parse_http_header", "input", "Header", "value"] {
            assert!(idents.contains(&expected), "missing {expected}: {idents:?}");
        }
        for skipped in ["u32", "str", "fn", "let", "struct"] {
            assert!(!idents.contains(&skipped), "{skipped} extracted");
        }
    }

    #[test]
    fn python_identifiers() {
        let source = "class UserAccount:\n    def close_account(self, reason):\n        self.closed_reason = reason\n";
        let idents = extract(source, Language::Python);
        assert_eq!(
            idents,
            vec![
                "UserAccount",
                "close_account",
                "self",
                "reason",
                "self",
                "closed_reason",
                "reason"
            ]
        );
    }

    #[test]
    fn ruby_sigils_are_stripped() {
        let source = "class Invoice\n  def total_amount\n    @line_items.sum\n  end\nend\n";
        let idents = extract(source, Language::Ruby);
        assert!(idents.contains(&"Invoice"));
        assert!(idents.contains(&"total_amount"));
        assert!(idents.contains(&"line_items"));
        assert!(!idents.iter().any(|i| i.starts_with('@')));
    }

    #[test]
    fn javascript_private_fields_are_stripped() {
        let source = "class Vault {\n  #secretKey = 1;\n  reveal() { return this.#secretKey; }\n}\n";
        let idents = extract(source, Language::JavaScript);
        assert!(idents.contains(&"Vault"));
        assert!(idents.contains(&"reveal"));
        assert_eq!(idents.iter().filter(|i| **i == "secretKey").count(), 2);
    }

    #[test]
    fn typescript_type_names() {
        let source = "interface OrderLine { unitPrice: number }\nconst lineTotal = (l: OrderLine) => l.unitPrice;\n";
        let idents = extract(source, Language::TypeScript);
        assert!(idents.contains(&"OrderLine"));
        assert!(idents.contains(&"unitPrice"));
        assert!(idents.contains(&"lineTotal"));
    }

    #[test]
    fn empty_source_has_no_identifiers() {
        assert!(extract("", Language::Python).is_empty());
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = default_extractor()
            .extract("func broken( {\n", Language::Go)
            .unwrap_err();
        assert!(matches!(err, TermstatError::Parse(_)));
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn unsupported_language_is_an_error() {
        let err = default_extractor()
            .extract("whatever", Language::Other)
            .unwrap_err();
        assert!(err.to_string().contains("no grammar"));
    }

    #[test]
    fn extractor_trait_object() {
        let extractor: Box<dyn IdentifierExtractor> = Box::new(default_extractor());
        let idents = extractor.extract("def hello():\n    pass\n", Language::Python).unwrap();
        assert_eq!(idents, vec!["hello"]);
    }
}
