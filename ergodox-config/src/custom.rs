use proc_macro2::TokenStream;
use quote::{quote, ToTokens, TokenStreamExt};
use serde::{Serialize, Deserialize};
use schemars::JsonSchema;

#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Clone)]
#[schemars(rename = "CustomAction")]
pub enum Action {
    /// Persistently toggle a layer on or off
    ToggleLayer(usize),
}

impl ToTokens for Action {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let path = quote! { crate::keymap::CustomAction };
        tokens.append_all(match self {
            Action::ToggleLayer(layer) => quote! { #path::ToggleLayer(#layer) },
        });
    }
}

#[cfg(test)]
pub mod tests {
    use crate::format::assert_tokens_eq;
    use super::*;

    #[test]
    fn deserialize() -> anyhow::Result<()> {
        let v: Action = serde_json::from_value(serde_json::json!({ "ToggleLayer": 1 }))?;
        assert_eq!(v, Action::ToggleLayer(1));
        Ok(())
    }

    #[test]
    fn tokenize() {
        let action = Action::ToggleLayer(2);
        assert_tokens_eq(quote! { #action }, quote! {
            crate::keymap::CustomAction::ToggleLayer(2usize)
        })
    }
}
