//! Swedish layout symbols
//!
//! The host translates USB HID usages with a Swedish layout, so each symbol
//! is named after what it produces but is defined by the US key position it
//! lives on and the modifiers needed to reach it.

use keyberon::{action::{k, m}, key_code::KeyCode::*};

use super::Action;

// Unmodified
pub const NO_HALF: Action = k(Grave);
pub const NO_PLUS: Action = k(Minus);
pub const NO_ACUT: Action = k(Equal);
pub const NO_AA: Action = k(LBracket);
pub const NO_UMLT: Action = k(RBracket);
pub const NO_OSLH: Action = k(SColon);
pub const NO_AE: Action = k(Quote);
pub const NO_APOS: Action = k(NonUsHash);
pub const NO_LESS: Action = k(NonUsBslash);
pub const NO_MINS: Action = k(Slash);
pub const NO_ALGR: Action = k(RAlt);

// Shifted
pub const NO_EXLM: Action = m(&[LShift, Kb1]);
pub const NO_QUO2: Action = m(&[LShift, Kb2]);
pub const NO_HASH: Action = m(&[LShift, Kb3]);
pub const NO_PERC: Action = m(&[LShift, Kb5]);
pub const NO_AMPR: Action = m(&[LShift, Kb6]);
pub const NO_SLSH: Action = m(&[LShift, Kb7]);
pub const NO_LPRN: Action = m(&[LShift, Kb8]);
pub const NO_RPRN: Action = m(&[LShift, Kb9]);
pub const NO_EQL: Action = m(&[LShift, Kb0]);
pub const NO_QUES: Action = m(&[LShift, Minus]);
pub const NO_GRV: Action = m(&[LShift, Equal]);
pub const NO_CIRC: Action = m(&[LShift, RBracket]);
pub const NO_ASTR: Action = m(&[LShift, NonUsHash]);
pub const NO_GRTR: Action = m(&[LShift, NonUsBslash]);
pub const NO_SCLN: Action = m(&[LShift, Comma]);
pub const NO_COLN: Action = m(&[LShift, Dot]);
pub const NO_UNDS: Action = m(&[LShift, Slash]);

// AltGr
pub const NO_AT: Action = m(&[RAlt, Kb2]);
pub const NO_PND: Action = m(&[RAlt, Kb3]);
pub const NO_DLR: Action = m(&[RAlt, Kb4]);
pub const NO_LCBR: Action = m(&[RAlt, Kb7]);
pub const NO_LBRC: Action = m(&[RAlt, Kb8]);
pub const NO_RBRC: Action = m(&[RAlt, Kb9]);
pub const NO_RCBR: Action = m(&[RAlt, Kb0]);
pub const NO_BSLS: Action = m(&[RAlt, Minus]);
pub const NO_TILD: Action = m(&[RAlt, RBracket]);
pub const NO_PIPE: Action = m(&[RAlt, NonUsBslash]);
pub const NO_EURO: Action = m(&[RAlt, E]);
