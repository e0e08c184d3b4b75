use anyhow::{bail, ensure, Context};
use proc_macro2::{TokenStream, Ident, Span};
use quote::{quote, ToTokens, TokenStreamExt};
use serde::{Serialize, Deserialize};
use schemars::JsonSchema;

use crate::{custom, impl_enum_to_tokens};

/// Number of rows of every layer
pub const NROWS: usize = 6;
/// Number of columns of every layer
pub const NCOLS: usize = 14;

pub type Layers<T> = Vec<Vec<Vec<Act<T>>>>;

pub fn to_tokens<T: ToTokens>(layers: &Layers<T>) -> TokenStream {
    quote! {
        [ #([ #([ #(#layers),* ]),* ]),* ]
    }
}

/// Check layer dimensions, base layer transparency and layer references
pub fn validate(layers: &Layers<custom::Action>) -> anyhow::Result<()> {
    ensure!(!layers.is_empty(), "No layers defined");
    for (l, layer) in layers.iter().enumerate() {
        ensure!(layer.len() == NROWS, "Layer {} has {} rows, expected {}", l, layer.len(), NROWS);
        for (r, row) in layer.iter().enumerate() {
            ensure!(row.len() == NCOLS,
                "Layer {} row {} has {} columns, expected {}", l, r, row.len(), NCOLS);
            for (c, act) in row.iter().enumerate() {
                if l == 0 && act == &Act::Trans {
                    bail!("Transparent key on base layer at row {} column {}", r, c);
                }
                act.validate(layers.len())
                    .with_context(|| format!("Layer {} row {} column {}", l, r, c))?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Clone)]
// HACK: rename to desired name and use a different name for the enum, or else schemars will use
// the default algorithm for generics leading to Action<Action> becoming "Action_for_Action"
#[schemars(rename = "Action")]
pub enum Act<T: ToTokens> {
    NoOp,
    Trans,
    KeyCode(KeyCode),
    MultipleKeyCodes(Vec<KeyCode>),
    MultipleActions(Vec<Act<T>>),
    Layer(usize),
    DefaultLayer(usize),
    HoldTap {
        timeout: u16,
        hold: Box<Act<T>>,
        tap: Box<Act<T>>,
        config: HoldTapConfig,
        tap_hold_interval: u16,
    },
    Custom(T),
}

impl Act<custom::Action> {
    fn validate(&self, n_layers: usize) -> anyhow::Result<()> {
        let layer_valid = |layer: &usize| -> anyhow::Result<()> {
            ensure!(*layer < n_layers, "Layer {} out of range, there are {} layers", layer, n_layers);
            Ok(())
        };
        match self {
            Act::NoOp | Act::Trans | Act::KeyCode(_) | Act::MultipleKeyCodes(_) => Ok(()),
            Act::MultipleActions(acts) => acts.iter().try_for_each(|a| a.validate(n_layers)),
            Act::Layer(layer) | Act::DefaultLayer(layer) => layer_valid(layer),
            Act::HoldTap { hold, tap, .. } => {
                hold.validate(n_layers).context("In hold action")?;
                tap.validate(n_layers).context("In tap action")
            },
            Act::Custom(custom::Action::ToggleLayer(layer)) => {
                ensure!(*layer != 0, "Base layer cannot be toggled");
                layer_valid(layer)
            },
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Clone)]
pub enum HoldTapConfig {
    Default,
    HoldOnOtherKeyPress,
    PermissiveHold,
}

/// Mirror of `keyberon::key_code::KeyCode`, unknown names are rejected when parsing
#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Clone)]
pub enum KeyCode {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Kb1, Kb2, Kb3, Kb4, Kb5, Kb6, Kb7, Kb8, Kb9, Kb0,
    Enter, Escape, BSpace, Tab, Space, Minus, Equal, LBracket, RBracket, Bslash,
    NonUsHash, SColon, Quote, Grave, Comma, Dot, Slash, CapsLock,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    PScreen, ScrollLock, Pause, Insert, Home, PgUp, Delete, End, PgDown,
    Right, Left, Down, Up, NumLock,
    KpSlash, KpAsterisk, KpMinus, KpPlus, KpEnter,
    Kp1, Kp2, Kp3, Kp4, Kp5, Kp6, Kp7, Kp8, Kp9, Kp0, KpDot,
    NonUsBslash, Application, Power, KpEqual,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
    Execute, Help, Menu, Select, Stop, Again, Undo, Cut, Copy, Paste, Find,
    Mute, VolUp, VolDown, LockingCapsLock, LockingNumLock, LockingScrollLock,
    KpComma, KpEqualSign,
    Intl1, Intl2, Intl3, Intl4, Intl5, Intl6, Intl7, Intl8, Intl9,
    Lang1, Lang2, Lang3, Lang4, Lang5, Lang6, Lang7, Lang8, Lang9,
    AltErase, SysReq, Cancel, Clear, Prior, Return, Separator, Out, Oper,
    ClearAgain, CrSel, ExSel,
    LCtrl, LShift, LAlt, LGui, RCtrl, RShift, RAlt, RGui,
    MediaPlayPause, MediaStopCD, MediaPreviousSong, MediaNextSong, MediaEjectCD,
    MediaVolUp, MediaVolDown, MediaMute, MediaWWW, MediaBack, MediaForward,
    MediaStop, MediaFind, MediaScrollUp, MediaScrollDown, MediaEdit, MediaSleep,
    MediaCoffee, MediaRefresh, MediaCalc,
}

impl_enum_to_tokens! {
    enum KeyCode: keyberon::key_code::KeyCode,
}

impl<T: ToTokens> ToTokens for Act<T> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let act = quote! { keyberon::action::Action };
        let t = match self {
            Act::NoOp => quote! { #act::NoOp },
            Act::Trans => quote! { #act::Trans },
            Act::KeyCode(keycode) => quote! { #act::KeyCode(#keycode) },
            Act::MultipleKeyCodes(keycodes) => {
                quote! { #act::MultipleKeyCodes(&[ #( #keycodes ),* ]) }
            },
            Act::MultipleActions(actions) => {
                quote! { #act::MultipleActions(&[ #( #actions ),* ]) }
            },
            Act::Layer(layer) => quote! { #act::Layer(#layer) },
            Act::DefaultLayer(layer) => quote! { #act::DefaultLayer(#layer) },
            Act::HoldTap { timeout, hold, tap, config, tap_hold_interval } => {
                quote! {
                    #act::HoldTap {
                        timeout: #timeout,
                        hold: &#hold,
                        tap: &#tap,
                        config: #config,
                        tap_hold_interval: #tap_hold_interval,
                    }
                }
            },
            Act::Custom(custom) => quote! { #act::Custom(#custom) }
        };
        tokens.append_all(t);
    }
}

impl ToTokens for HoldTapConfig {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = quote! { keyberon::action::HoldTapConfig };
        let t = match self {
            HoldTapConfig::Default => quote! { #c::Default },
            HoldTapConfig::HoldOnOtherKeyPress => quote! { #c::HoldOnOtherKeyPress },
            HoldTapConfig::PermissiveHold => quote! { #c::PermissiveHold },
        };
        tokens.append_all(t);
    }
}

#[cfg(test)]
pub mod tests {
    use crate::format::assert_tokens_eq;

    use super::*;

    fn kc(keycode: KeyCode) -> Act<custom::Action> {
        Act::KeyCode(keycode)
    }

    /// Layer of valid shape filled with a single action
    pub fn filled(act: Act<custom::Action>) -> Vec<Vec<Act<custom::Action>>> {
        vec![vec![act; NCOLS]; NROWS]
    }

    pub fn example_json() -> serde_json::Value {
        serde_json::json!([
            [
                [
                    "NoOp",
                    "Trans",
                    { "KeyCode": "Kb2" },
                    { "MultipleKeyCodes": ["RAlt", "Kb7"] },
                    { "Layer": 1 },
                    {
                        "HoldTap": {
                            "timeout": 200,
                            "hold": { "Layer": 2 },
                            "tap": { "Custom": { "ToggleLayer": 2 } },
                            "config": "Default",
                            "tap_hold_interval": 0
                        }
                    }
                ]
            ]
        ])
    }

    pub fn example_config() -> Layers<custom::Action> {
        vec![
            vec![
                vec![
                    Act::NoOp,
                    Act::Trans,
                    kc(KeyCode::Kb2),
                    Act::MultipleKeyCodes(vec![KeyCode::RAlt, KeyCode::Kb7]),
                    Act::Layer(1),
                    Act::HoldTap {
                        timeout: 200,
                        hold: Box::new(Act::Layer(2)),
                        tap: Box::new(Act::Custom(custom::Action::ToggleLayer(2))),
                        config: HoldTapConfig::Default,
                        tap_hold_interval: 0,
                    },
                ],
            ],
        ]
    }

    pub fn example_code() -> TokenStream {
        quote! {
            [
                [
                    [
                        keyberon::action::Action::NoOp,
                        keyberon::action::Action::Trans,
                        keyberon::action::Action::KeyCode(keyberon::key_code::KeyCode::Kb2),
                        keyberon::action::Action::MultipleKeyCodes(&[
                            keyberon::key_code::KeyCode::RAlt,
                            keyberon::key_code::KeyCode::Kb7,
                        ]),
                        keyberon::action::Action::Layer(1usize),
                        keyberon::action::Action::HoldTap {
                            timeout: 200u16,
                            hold: &keyberon::action::Action::Layer(2usize),
                            tap: &keyberon::action::Action::Custom(
                                crate::keymap::CustomAction::ToggleLayer(2usize)
                            ),
                            config: keyberon::action::HoldTapConfig::Default,
                            tap_hold_interval: 0u16,
                        },
                    ]
                ]
            ]
        }
    }

    #[test]
    fn deserialize() -> anyhow::Result<()> {
        let layers: Layers<custom::Action> = serde_json::from_value(example_json())?;
        assert_eq!(layers, example_config());
        Ok(())
    }

    #[test]
    fn tokenize() {
        assert_tokens_eq(to_tokens(&example_config()), example_code())
    }

    #[test]
    fn valid_layers() {
        let layers = vec![filled(kc(KeyCode::A)), filled(Act::Trans), filled(Act::Layer(1))];
        validate(&layers).unwrap();
    }

    #[test]
    fn wrong_dimensions() {
        let mut layers = vec![filled(kc(KeyCode::A))];
        layers[0][3].pop();
        let err = validate(&layers).unwrap_err();
        assert!(err.to_string().contains("row 3 has 13 columns"), "{}", err);

        let mut layers = vec![filled(kc(KeyCode::A))];
        layers[0].pop();
        assert!(validate(&layers).is_err());
    }

    #[test]
    fn transparent_base() {
        let mut layers = vec![filled(kc(KeyCode::A))];
        layers[0][2][5] = Act::Trans;
        let err = validate(&layers).unwrap_err();
        assert!(err.to_string().contains("row 2 column 5"), "{}", err);
    }

    #[test]
    fn layer_out_of_range() {
        let mut layers = vec![filled(kc(KeyCode::A)), filled(Act::Trans)];
        layers[1][0][0] = Act::HoldTap {
            timeout: 200,
            hold: Box::new(Act::Layer(2)),
            tap: Box::new(kc(KeyCode::A)),
            config: HoldTapConfig::Default,
            tap_hold_interval: 0,
        };
        let err = validate(&layers).unwrap_err();
        assert!(format!("{:#}", err).contains("Layer 2 out of range"), "{:#}", err);
    }

    #[test]
    fn base_toggle_rejected() {
        let mut layers = vec![filled(kc(KeyCode::A))];
        layers[0][0][0] = Act::Custom(custom::Action::ToggleLayer(0));
        assert!(validate(&layers).is_err());
    }

    #[test]
    fn unknown_key_code_rejected() {
        let json = serde_json::json!({ "KeyCode": "NotARealKey" });
        assert!(serde_json::from_value::<Act<custom::Action>>(json).is_err());
        let json = serde_json::json!({ "MultipleKeyCodes": ["LCtrl", "Ctrl"] });
        assert!(serde_json::from_value::<Act<custom::Action>>(json).is_err());
    }

    #[test]
    fn key_code_tokens() {
        let keycode = KeyCode::MediaVolUp;
        assert_tokens_eq(quote! { #keycode }, quote! {
            keyberon::key_code::KeyCode::MediaVolUp
        });
    }
}
