//! AST-level lint: library code must not panic.
//!
//! A broken menu must never take the page down with it, so navigation code
//! degrades to empty output instead of unwrapping. This test walks `src/`
//! and flags `.unwrap()`, `.expect(..)` and panicking macros outside
//! `#[cfg(test)]` modules.
//!
//! Example of bad code:
//! ```ignore
//! let container = host.container(id).unwrap();
//! ```
//!
//! Example of correct code:
//! ```ignore
//! let Some(container) = host.container(id) else { return false };
//! ```

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use syn::{ExprMethodCall, File, ItemMod, Macro};
use walkdir::WalkDir;

const PANICKING_METHODS: &[&str] = &["unwrap", "expect", "unwrap_err", "expect_err"];
const PANICKING_MACROS: &[&str] = &["panic", "unreachable", "todo", "unimplemented"];

struct PanicVisitor {
    current_file: String,
    violations: Vec<(String, String)>,
}

impl PanicVisitor {
    fn new(file: String) -> Self {
        Self {
            current_file: file,
            violations: Vec::new(),
        }
    }
}

fn is_test_module(item: &ItemMod) -> bool {
    item.attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .map_or(false, |ident| ident == "test")
    })
}

impl<'ast> Visit<'ast> for PanicVisitor {
    fn visit_item_mod(&mut self, item: &'ast ItemMod) {
        if is_test_module(item) {
            return;
        }
        syn::visit::visit_item_mod(self, item);
    }

    fn visit_expr_method_call(&mut self, method_call: &'ast ExprMethodCall) {
        let method_name = method_call.method.to_string();
        if PANICKING_METHODS.contains(&method_name.as_str()) {
            self.violations
                .push((self.current_file.clone(), format!(".{}()", method_name)));
        }

        syn::visit::visit_expr_method_call(self, method_call);
    }

    fn visit_macro(&mut self, mac: &'ast Macro) {
        if let Some(ident) = mac.path.get_ident() {
            let name = ident.to_string();
            if PANICKING_MACROS.contains(&name.as_str()) {
                self.violations
                    .push((self.current_file.clone(), format!("{}!", name)));
            }
        }

        syn::visit::visit_macro(self, mac);
    }
}

fn analyze_source(file: &str, content: &str) -> Vec<(String, String)> {
    let syntax: File = match syn::parse_file(content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", file, e);
            return vec![];
        }
    };

    let mut visitor = PanicVisitor::new(file.to_string());
    visitor.visit_file(&syntax);
    visitor.violations
}

#[test]
fn detects_unwrap_and_panic() {
    let bad_code = r#"
        fn example(items: &[String]) -> String {
            let first = items.first().unwrap();
            if first.is_empty() {
                panic!("empty");
            }
            first.parse::<u8>().expect("number");
            first.clone()
        }
    "#;

    let violations = analyze_source("test.rs", bad_code);
    let found: Vec<_> = violations.iter().map(|(_, v)| v.as_str()).collect();

    assert_eq!(found, vec![".unwrap()", "panic!", ".expect()"]);
}

#[test]
fn ignores_test_modules_and_fallbacks() {
    let good_code = r#"
        fn example(items: &[String]) -> &str {
            items.first().map(String::as_str).unwrap_or("")
        }

        #[cfg(test)]
        mod tests {
            #[test]
            fn it_works() {
                assert_eq!(super::example(&[]), "");
                Some(1).unwrap();
            }
        }
    "#;

    assert!(
        analyze_source("test.rs", good_code).is_empty(),
        "Should not flag fallbacks or test code"
    );
}

#[test]
fn library_code_does_not_panic() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "rs"))
    {
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        all_violations.extend(analyze_source(&entry.path().display().to_string(), &content));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\nFound panicking calls in library code!\n\
             Navigation must degrade to empty or partial output, never panic.\n\
             Use a fallback (unwrap_or, let-else, `?` at the HTTP edge) instead.\n\n\
             Violations:\n",
        );

        for (file, context) in &all_violations {
            error_msg.push_str(&format!("  - {}: {}\n", file, context));
        }

        panic!("{}", error_msg);
    }
}
