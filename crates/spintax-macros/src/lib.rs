use proc_macro::TokenStream;

/// The template! macro for compile-time validated spintax literals.
///
/// Accepts a string literal, checks its brace balance at compile time, and
/// expands to the literal unchanged (`&'static str`). Malformed templates
/// become compile errors on the literal's span instead of silently
/// degrading at runtime.
///
/// # Example
///
/// ```ignore
/// const GREETING: &str = spintax::template!("{Hello|Hi} there");
///
/// // Rejected at compile time:
/// // spintax::template!("{oops");
/// ```
#[proc_macro]
pub fn template(input: TokenStream) -> TokenStream {
    let literal = syn::parse_macro_input!(input as syn::LitStr);

    if let Err(e) = validate_literal(&literal) {
        return e.to_compile_error().into();
    }

    quote::quote! { #literal }.into()
}

/// Check the template text of a parsed string literal.
fn validate_literal(literal: &syn::LitStr) -> syn::Result<()> {
    let template = literal.value();
    if !spintax_syntax::is_balanced(&template) {
        return Err(syn::Error::new(
            literal.span(),
            "spintax template has unbalanced braces",
        ));
    }
    Ok(())
}
