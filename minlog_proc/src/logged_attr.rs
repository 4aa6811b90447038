// SPDX-License-Identifier: MIT OR Apache-2.0
use proc_macro::{TokenStream, TokenTree};

fn compile_error(message: &str) -> TokenStream {
    format!("compile_error!({message:?});").parse().unwrap()
}

/// Reads the attribute arguments: nothing, or one string literal naming the source.
fn parse_source(attr: TokenStream) -> Result<Option<String>, TokenStream> {
    let tokens: Vec<TokenTree> = attr.into_iter().collect();
    match tokens.as_slice() {
        [] => Ok(None),
        [TokenTree::Literal(lit)] => {
            let text = lit.to_string();
            if text.starts_with('"') || text.starts_with("r\"") || text.starts_with("r#") {
                Ok(Some(text))
            } else {
                Err(compile_error(
                    "#[logged] takes an optional string literal, e.g. #[logged(\"svc\")]",
                ))
            }
        }
        _ => Err(compile_error(
            "#[logged] takes an optional string literal, e.g. #[logged(\"svc\")]",
        )),
    }
}

/// Finds the name of the struct, enum or union being defined.
fn parse_type_name(tokens: &[TokenTree]) -> Result<String, TokenStream> {
    //attributes and visibility are single groups or idents, so the first keyword is the item's
    for (i, token) in tokens.iter().enumerate() {
        match token {
            TokenTree::Ident(kw) if matches!(kw.to_string().as_str(), "struct" | "enum" | "union") => {
                let Some(TokenTree::Ident(name)) = tokens.get(i + 1) else {
                    return Err(compile_error("#[logged] expected a type name"));
                };
                if let Some(TokenTree::Punct(p)) = tokens.get(i + 2) {
                    if p.as_char() == '<' {
                        return Err(compile_error(
                            "#[logged] does not support generic types; implement minlog::Logged by hand",
                        ));
                    }
                }
                return Ok(name.to_string());
            }
            _ => {}
        }
    }
    Err(compile_error(
        "#[logged] can only be applied to a struct, enum or union",
    ))
}

/// Implementation of the `#[logged]` attribute macro.
///
/// Re-emits the item unchanged and adds an `impl minlog::Logged` recording the type name and,
/// in the parameterized form, the explicit source.
pub fn logged_attr_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let source = match parse_source(attr) {
        Ok(source) => source,
        Err(e) => return e,
    };
    let tokens: Vec<TokenTree> = item.into_iter().collect();
    let type_name = match parse_type_name(&tokens) {
        Ok(name) => name,
        Err(e) => return e,
    };
    let source_expr = match source {
        Some(lit) => format!("::core::option::Option::Some({lit})"),
        None => "::core::option::Option::None".to_string(),
    };
    //raw identifiers keep their `r#` in the impl but not in the recorded name
    let display_name = type_name.strip_prefix("r#").unwrap_or(&type_name);
    let impl_src = format!(
        r#"
        impl ::minlog::Logged for {type_name} {{
            const TYPE_NAME: &'static str = "{display_name}";
            const SOURCE: ::core::option::Option<&'static str> = {source_expr};
        }}
    "#
    );

    let mut output: TokenStream = tokens.into_iter().collect();
    output.extend(impl_src.parse::<TokenStream>().unwrap());
    output
}
