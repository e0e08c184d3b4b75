//! Keymap configuration

#[cfg(feature = "json-config")]
pub use generated::{CONFIG, LAYERS, N_LAYERS};

#[cfg(not(feature = "json-config"))]
pub use code::{CONFIG, LAYERS, N_LAYERS};

use crate::indicators::IndicatorConfig;
use crate::keymap::{self, Layers};

/// Number of layers in [`LAYOUT`]
pub const LAYOUT_LAYERS: usize = keymap::layout_layers(N_LAYERS);

/// Keymap layers followed by their toggle copies, for [`keymap::Keymap`]
pub static LAYOUT: Layers<LAYOUT_LAYERS> = keymap::with_toggle_layers(&LAYERS);

/// Complete keymap configuration
pub struct KeymapConfig<const L: usize> {
    /// Key actions for every layer
    pub layers: &'static Layers<L>,
    /// Which indicator LEDs signal which layer
    pub indicators: IndicatorConfig,
}

#[cfg(feature = "json-config")]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

#[cfg(not(feature = "json-config"))]
mod code {
    use keyberon::{
        action::{k, l, m, Action::*, HoldTapConfig},
        key_code::KeyCode::*,
        layout::layout,
    };

    use crate::indicators::{Indicator, IndicatorConfig, IndicatorRule};
    use crate::keymap::{Action, CustomAction, Layer, Layers};
    use crate::keymap::swedish::*;
    use super::KeymapConfig;

    pub static CONFIG: KeymapConfig<N_LAYERS> = KeymapConfig {
        layers: &LAYERS,
        indicators: IndicatorConfig { rules: INDICATORS },
    };

    const HOLDTAP_TIMEOUT: u16 = 200;
    const HTC: HoldTapConfig = HoldTapConfig::Default;

    macro_rules! ht {
        ($hold:expr, $tap:expr, $tout:expr) => {
            HoldTap {
                timeout: $tout,
                hold: &$hold,
                tap: &$tap,
                tap_hold_interval: 0,
                config: HTC,
            }
        };
        ($hold:expr, $tap:expr) => {
            ht!($hold, $tap, HOLDTAP_TIMEOUT)
        };
    }

    const SYMB: usize = Layer::Symbols.index();
    const GAME: usize = Layer::Gaming.index();

    // Hold for momentary layer, tap to toggle it
    const FN1: Action = ht!(l(SYMB), Custom(CustomAction::ToggleLayer(SYMB)));
    const FN2: Action = ht!(l(GAME), Custom(CustomAction::ToggleLayer(GAME)));

    // Layer-tap
    const SYMB_APOS: Action = ht!(l(SYMB), NO_APOS);
    const GAME_OSLH: Action = ht!(l(GAME), NO_OSLH);

    // Modifier-tap
    const HYPER: Action = ht!(m(&[LCtrl, LShift, LAlt, LGui]), NoOp);
    const ALT_APP: Action = ht!(k(LAlt), k(Application));
    const GUI_AE: Action = ht!(k(LGui), NO_AE);
    const CTL_MINS: Action = ht!(k(LCtrl), NO_MINS);

    const ALT_SHIFT: Action = m(&[LAlt, LShift]);

    const PLAY: Action = k(MediaPlayPause);
    const NEXT: Action = k(MediaNextSong);
    const PREV: Action = k(MediaPreviousSong);
    const MUTE: Action = k(MediaMute);
    const VOL_UP: Action = k(MediaVolUp);
    const VOL_DOWN: Action = k(MediaVolDown);

    pub const N_LAYERS: usize = 3;

    // Rows follow the physical layout, left half in columns 0-6, right half in
    // columns 7-13. Thumb clusters are the last row:
    //   left:  [n End BSpace Space Home ALT_APP LGui]
    //   right: [AltGr Esc PgUp Enter Tab PgDown n]
    // `n` fills positions without a switch.
    #[rustfmt::skip]
    pub const LAYERS: Layers<N_LAYERS> = layout! {
        { // Base
            [ Escape      1         2           3     4     5         Left    Right     6      7     8     9         0           {NO_PLUS}  ]
            [ Delete      Q         W           E     R     T         {FN2}   Delete    Y      U     I     O         P           {NO_AA}    ]
            [ LCtrl       A         S           D     F     G         n       n         H      J     K     L         {GAME_OSLH} {GUI_AE}   ]
            [ LShift      Z         X           C     V     B         {HYPER} LAlt      N      M     Comma Dot       {CTL_MINS}  RShift     ]
            [ {SYMB_APOS} {NO_ACUT} {ALT_SHIFT} Left  Right n         n       n         n      Up    Down  {NO_CIRC} {NO_ASTR}   {FN1}      ]
            [ n           End       BSpace      Space Home  {ALT_APP} LGui    {NO_ALGR} Escape PgUp  Enter Tab       PgDown      n          ]
        }
        { // Symbols
            [ {NO_HALF}   F1        F2          F3        F4        F5        t         t         F6        F7       F8        F9        F10         F11        ]
            [ t           {NO_EXLM} {NO_AT}     {NO_LCBR} {NO_RCBR} {NO_PIPE} {NO_BSLS} t         Up        7        8         9         {NO_ASTR}   F12        ]
            [ LCtrl       {NO_HASH} {NO_DLR}    {NO_LPRN} {NO_RPRN} {NO_GRV}  n         n         Down      4        5         6         {NO_PLUS}   t          ]
            [ LShift      {NO_PERC} {NO_CIRC}   {NO_LBRC} {NO_RBRC} {NO_TILD} t         t         {NO_AMPR} 1        2         3         {NO_LESS}   t          ]
            [ t           t         t           t         t         n         n         n         n         t        Dot       0         {NO_EQL}    t          ]
            [ n           {PREV}    t           {NO_LESS} {NEXT}    t         {PLAY}    {MUTE}    t         {VOL_UP} {NO_GRTR} t         {VOL_DOWN}  n          ]
        }
        { // Gaming: left half for games, right half unchanged for chat, Scroll Lock for push to talk
            [ Escape      1         2           3     4     5         6       Right     6      7     8     9         0           {NO_PLUS}  ]
            [ Tab         Q         W           E     R     T         M       Delete    Y      U     I     O         P           {NO_AA}    ]
            [ LCtrl       A         S           D     F     G         n       n         H      J     K     L         {GAME_OSLH} {GUI_AE}   ]
            [ LShift      Z         X           C     V     B         I       LAlt      N      M     Comma Dot       {CTL_MINS}  RShift     ]
            [ ScrollLock  LAlt      Enter       Left  Right n         n       n         n      Up    Down  {NO_APOS} {NO_ASTR}   {FN1}      ]
            [ n           F4        BSpace      Space F3    F1        F2      {NO_ALGR} Escape PgUp  Enter Tab       PgDown      n          ]
        }
    };

    static INDICATORS: &[IndicatorRule] = &[
        IndicatorRule { layer: Layer::Symbols as u8, led: Indicator::Led1 },
        IndicatorRule { layer: Layer::Gaming as u8, led: Indicator::Led3 },
    ];
}
