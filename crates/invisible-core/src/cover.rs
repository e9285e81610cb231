use crate::alphabet::{MARKER_EMOJI, MARKER_TEXT};
use crate::scan::{bit_run, TEXT_PAYLOAD_BITS};

/// Removes every embedded payload and returns what a reader actually sees.
///
/// A text marker is dropped together with up to 8 bit symbols behind it. An emoji marker is
/// dropped together with its bit run only when that run holds whole bytes. Any other emoji
/// marker is the variation selector of an ordinary emoji like `❤️` or of a joined sequence
/// like `🏳️‍🌈`, and is left alone.
pub fn visible_text(stego: &str) -> String {
    let chars: Vec<char> = stego.chars().collect();
    let mut visible = String::with_capacity(stego.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            MARKER_TEXT => {
                i += 1 + bit_run(&chars[i + 1..]).min(TEXT_PAYLOAD_BITS);
            }
            MARKER_EMOJI if carries_bytes(bit_run(&chars[i + 1..])) => {
                i += 1 + bit_run(&chars[i + 1..]);
            }
            c => {
                visible.push(c);
                i += 1;
            }
        }
    }

    visible
}

fn carries_bytes(run: usize) -> bool {
    run > 0 && run % 8 == 0
}
