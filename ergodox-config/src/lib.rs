//! Keymap configuration in JSON translated to Rust code at build time

pub mod custom;
pub mod format;
pub mod indicators;
pub mod layers;

use std::{path::Path, fs::File, io::{Write, BufReader}};

use anyhow::{ensure, Context};
use proc_macro2::TokenStream;
use quote::quote;
use serde::{Serialize, Deserialize};
use schemars::{JsonSchema, schema_for, schema::RootSchema};

/// Maximum number of layers that fit in the firmware layer bit-set
pub const MAX_LAYERS: usize = 32;

#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq)]
pub struct KeymapConfig {
    layers: layers::Layers<custom::Action>,
    indicators: indicators::IndicatorConfig,
}

impl KeymapConfig {
    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    /// Check everything the firmware relies on but cannot express in types
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.n_layers() <= MAX_LAYERS,
            "{} layers defined, at most {} supported", self.n_layers(), MAX_LAYERS);
        layers::validate(&self.layers).context("Invalid layers")?;
        indicators::validate(&self.indicators, self.n_layers()).context("Invalid indicators")?;
        Ok(())
    }

    fn file_tokens(&self) -> TokenStream {
        let n_layers = self.n_layers();
        let layers = layers::to_tokens(&self.layers);
        let indicators = indicators::to_tokens(&self.indicators);
        quote! {
            pub const N_LAYERS: usize = #n_layers;

            pub const LAYERS: crate::keymap::Layers<N_LAYERS> = #layers;

            pub static CONFIG: crate::config::KeymapConfig<N_LAYERS> = crate::config::KeymapConfig {
                layers: &LAYERS,
                indicators: #indicators,
            };
        }
    }

    fn to_string_pretty(&self) -> anyhow::Result<String> {
        let file = self.file_tokens();
        format::format_file(file.clone())
            .context(format!("Failed to parse:\n{}", file))
    }

    /// Validate and write generated Rust code to given path
    pub fn to_file(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;
        let code = self.to_string_pretty()?;
        let mut file = File::create(path)?;
        file.write_all(code.as_bytes())?;
        Ok(())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let config = serde_json::from_reader(&mut reader)?;
        Ok(config)
    }

    pub fn schema() -> RootSchema {
        schema_for!(Self)
    }

    pub fn schema_to_file(path: &Path) -> anyhow::Result<()> {
        let mut file = File::create(path)?;
        let schema = Self::schema();
        let string = serde_json::to_string_pretty(&schema)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }
}


/// Implement ToTokens for a simple enum with variants without data.
#[macro_export]
macro_rules! impl_enum_to_tokens {
    ( $( enum $enum:ident: $path:path ),* $(,)? ) => {
        $(
            impl ToTokens for $enum {
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    let v = serde_json::to_value(self).unwrap();
                    let s = v.as_str().unwrap();
                    let i = Ident::new(s, Span::call_site());
                    tokens.append_all(quote! { $path::#i });
                }
            }
        )*
    };
}

/// Implement ToTokens for a regular struct
///
/// Generates implementations of ToTokens for a list of structs. Will use $path
/// as the name of struct in generated tokens. Each field in struct def has to
/// end with a comma (even the last one).
#[macro_export]
macro_rules! impl_struct_to_tokens {
    ( $( struct $struct:ident: $path:path { $($field:ident,)* } )* ) => {
        $(
            impl ToTokens for $struct {
                fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
                    $( let $field = &self.$field; )*
                    tokens.append_all(quote! {
                        $path { $( $field: #$field, )* }
                    });
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use crate::format::assert_tokens_eq;
    use crate::layers::tests::filled;
    use crate::layers::{Act, KeyCode};

    use super::*;

    fn example_json() -> serde_json::Value {
        serde_json::json!({
            "layers": layers::tests::example_json(),
            "indicators": indicators::tests::example_json(),
        })
    }

    fn example_config() -> KeymapConfig {
        KeymapConfig {
            layers: layers::tests::example_config(),
            indicators: indicators::tests::example_config(),
        }
    }

    fn valid_config() -> KeymapConfig {
        let key = Act::KeyCode(KeyCode::A);
        KeymapConfig {
            layers: vec![filled(key), filled(Act::Trans), filled(Act::Trans)],
            indicators: indicators::tests::example_config(),
        }
    }

    #[test]
    fn deserialize() -> anyhow::Result<()> {
        let config: KeymapConfig = serde_json::from_value(example_json())?;
        assert_eq!(config, example_config());
        Ok(())
    }

    #[test]
    fn file_tokens() {
        let config = example_config();
        let layers = layers::tests::example_code();
        let indicators = indicators::tests::example_code();
        let expected = quote! {
            pub const N_LAYERS: usize = 1usize;
            pub const LAYERS: crate::keymap::Layers<N_LAYERS> = #layers;
            pub static CONFIG: crate::config::KeymapConfig<N_LAYERS> = crate::config::KeymapConfig {
                layers: &LAYERS,
                indicators: #indicators,
            };
        };
        similar_asserts::assert_eq!(
            format::format_file(config.file_tokens()).unwrap(),
            format::format_file(expected).unwrap(),
        );
    }

    #[test]
    fn indicators_tokens() {
        let config = example_config();
        assert_tokens_eq(
            indicators::to_tokens(&config.indicators),
            indicators::tests::example_code(),
        );
    }

    #[test]
    fn validation() {
        valid_config().validate().unwrap();
        // example has a single malformed layer
        assert!(example_config().validate().is_err());

        let mut config = valid_config();
        config.layers.truncate(2);
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid indicators"), "{:#}", err);

        let mut config = valid_config();
        let layer = config.layers[1].clone();
        config.layers.resize(MAX_LAYERS + 1, layer);
        assert!(config.validate().is_err());
    }

    #[test]
    fn pretty_output_is_rust() -> anyhow::Result<()> {
        let code = valid_config().to_string_pretty()?;
        assert!(code.contains("pub const N_LAYERS: usize = 3usize;"), "{}", code);
        assert!(code.contains("pub static CONFIG"), "{}", code);
        Ok(())
    }

    #[test]
    fn schema_has_definitions() {
        let schema = serde_json::to_value(KeymapConfig::schema()).unwrap();
        let definitions = schema["definitions"].as_object().unwrap();
        assert!(definitions.contains_key("Action"));
        assert!(definitions.contains_key("CustomAction"));
        assert!(definitions.contains_key("IndicatorRule"));
        let keycodes = definitions["KeyCode"]["enum"].as_array().unwrap();
        assert!(keycodes.contains(&serde_json::json!("NonUsHash")));
        assert!(!keycodes.contains(&serde_json::json!("NotARealKey")));
    }
}
