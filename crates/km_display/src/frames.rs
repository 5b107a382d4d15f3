//! crates/km_display/src/frames.rs
//! Frame assembly for the display payload.
//!
//! Frame sequence for a winner (fixed, reproducible):
//!   "Koalit." → one frame per member ("+ " prefix from the second member
//!   on) → "Gesamt:" → total share as "NN.N%".
//!
//! Overflow policy: a text longer than the frame budget is wrapped into
//! successive full-width frames (counted in Unicode scalars), never silently
//! truncated. No-majority runs get the fixed fallback sequence instead of
//! malformed or empty output.

use serde::{Deserialize, Serialize};

use km_core::{Coalition, Params};

use crate::labels::normalize_label;

/// Header frame preceding the member list.
pub const HEADER_TEXT: &str = "Koalit.";
/// Label frame preceding the total-share frame.
pub const TOTAL_TEXT: &str = "Gesamt:";
/// Fallback sequence body when no coalition reaches the majority
/// ("keine Mehrheit", wrapped for the device).
pub const FALLBACK_TEXTS: [&str; 2] = ["keine", "Mehrh."];

/// One unit of the output payload. `text` never exceeds the frame budget it
/// was built with; `icon` is the glyph resource identifier, identical for
/// every frame of a payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub text: String,
    pub icon: String,
}

/// The sole externally visible artifact: `{ "frames": [ {text, icon}, … ] }`.
/// Field names and nesting are fixed for the downstream display consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPayload {
    pub frames: Vec<DisplayFrame>,
}

/// Split `text` into chunks of at most `width` characters (Unicode scalars,
/// which is what the target device counts). Always returns at least one
/// chunk so every logical label keeps a frame.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    debug_assert!(width > 0);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return vec![text.to_string()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Build the payload for a winning coalition.
pub fn build_payload(coalition: &Coalition, params: &Params) -> DisplayPayload {
    let mut texts: Vec<String> = Vec::with_capacity(coalition.members().len() + 3);
    texts.push(HEADER_TEXT.to_string());
    for (i, member) in coalition.members().iter().enumerate() {
        let label = normalize_label(member.name());
        if i == 0 {
            texts.push(label.to_string());
        } else {
            texts.push(format!("+ {label}"));
        }
    }
    texts.push(TOTAL_TEXT.to_string());
    texts.push(format!("{:.1}%", coalition.total_share()));
    assemble(texts, params)
}

/// Build the deterministic "no majority" payload (also used when no party
/// clears the inclusion hurdle).
pub fn fallback_payload(params: &Params) -> DisplayPayload {
    let mut texts = vec![HEADER_TEXT.to_string()];
    texts.extend(FALLBACK_TEXTS.iter().map(|s| s.to_string()));
    assemble(texts, params)
}

fn assemble(texts: Vec<String>, params: &Params) -> DisplayPayload {
    let frames = texts
        .iter()
        .flat_map(|t| wrap_text(t, params.frame_width))
        .map(|text| DisplayFrame {
            text,
            icon: params.icon.clone(),
        })
        .collect();
    DisplayPayload { frames }
}
