use proc_macro2::TokenStream;
use quote::quote;

/// Format tokens of a whole Rust file
pub fn format_file(tokens: TokenStream) -> syn::Result<String> {
    let parsed = syn::parse_file(&tokens.to_string())?;
    Ok(prettyplease::unparse(&parsed))
}

/// Wrap expression tokens in a static item and output formatted string
pub fn format_expr(tokens: TokenStream) -> syn::Result<String> {
    format_file(quote! {
        static EXPR: ExprType = #tokens;
    })
}

#[cfg(test)]
pub fn assert_tokens_eq(left: TokenStream, right: TokenStream) {
    let left = format_expr(left).unwrap();
    let right = format_expr(right).unwrap();
    similar_asserts::assert_eq!(left, right);
}
