use anyhow::ensure;
use proc_macro2::{TokenStream, Ident, Span};
use quote::{quote, ToTokens, TokenStreamExt};
use serde::{Serialize, Deserialize};
use schemars::JsonSchema;

use crate::{impl_struct_to_tokens, impl_enum_to_tokens};

/// Indicator rules, a layer without rules keeps all LEDs off
pub type IndicatorConfig = Vec<IndicatorRule>;

#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Clone)]
pub struct IndicatorRule {
    layer: u8,
    led: Indicator,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Clone)]
pub enum Indicator {
    Board,
    Led1,
    Led2,
    Led3,
}

pub fn to_tokens(config: &IndicatorConfig) -> TokenStream {
    quote! {
        crate::indicators::IndicatorConfig {
            rules: &[ #(#config),* ],
        }
    }
}

/// Check that every rule refers to an existing layer
pub fn validate(config: &IndicatorConfig, n_layers: usize) -> anyhow::Result<()> {
    for rule in config {
        ensure!((rule.layer as usize) < n_layers,
            "Indicator rule for layer {} but there are {} layers", rule.layer, n_layers);
    }
    Ok(())
}

impl_enum_to_tokens! {
    enum Indicator: crate::indicators::Indicator,
}

impl_struct_to_tokens! {
    struct IndicatorRule: crate::indicators::IndicatorRule {
        layer,
        led,
    }
}

#[cfg(test)]
pub mod tests {
    use crate::format::assert_tokens_eq;
    use super::*;

    pub fn example_json() -> serde_json::Value {
        serde_json::json!([
            { "layer": 1, "led": "Led1" },
            { "layer": 2, "led": "Led3" }
        ])
    }

    pub fn example_config() -> IndicatorConfig {
        vec![
            IndicatorRule { layer: 1, led: Indicator::Led1 },
            IndicatorRule { layer: 2, led: Indicator::Led3 },
        ]
    }

    pub fn example_code() -> TokenStream {
        quote! {
            crate::indicators::IndicatorConfig {
                rules: &[
                    crate::indicators::IndicatorRule {
                        layer: 1u8,
                        led: crate::indicators::Indicator::Led1,
                    },
                    crate::indicators::IndicatorRule {
                        layer: 2u8,
                        led: crate::indicators::Indicator::Led3,
                    },
                ],
            }
        }
    }

    #[test]
    fn deserialize() -> anyhow::Result<()> {
        let config: IndicatorConfig = serde_json::from_value(example_json())?;
        assert_eq!(config, example_config());
        Ok(())
    }

    #[test]
    fn tokenize() {
        assert_tokens_eq(to_tokens(&example_config()), example_code())
    }

    #[test]
    fn missing_layer() {
        assert!(validate(&example_config(), 3).is_ok());
        assert!(validate(&example_config(), 2).is_err());
    }
}
