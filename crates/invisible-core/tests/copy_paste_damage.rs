use speculate::speculate;

use invisible_core::alphabet::{symbol_for, MARKER_EMOJI, MARKER_TEXT};
use invisible_core::*;

fn burst(bits: &str) -> String {
    std::iter::once(MARKER_EMOJI)
        .chain(bits.chars().map(|b| symbol_for(b == '1')))
        .collect()
}

fn byte(bits: &str) -> String {
    std::iter::once(MARKER_TEXT)
        .chain(bits.chars().map(|b| symbol_for(b == '1')))
        .collect()
}

speculate! {
    describe "extract_robust with copy and paste damage" {
        it "should find a burst that lost its carrier emoji" {
            let stego = embed_emoji("look 👀 here", "eyes").unwrap();
            let damaged = stego.replace('👀', "");

            assert_eq!(extract_robust(&damaged).unwrap().secret, "eyes");
        }

        it "should find a burst that was pasted twice" {
            let stego = embed_emoji("look 👀 here", "eyes").unwrap();
            let twice = format!("{}\n{}", stego, stego);

            let unveiled = extract_robust(&twice).unwrap();
            assert_eq!(unveiled.strategy, Strategy::EMOJI);
            assert_eq!(unveiled.secret, "eyes");
        }

        it "should prefer the complete burst over a clipped copy" {
            let clipped = burst("0110010101111001");
            let complete = burst("01100101011110010110010101110011");
            let text = format!("{} then {}", clipped, complete);

            assert_eq!(extract_robust(&text).unwrap().secret, "eyes");
        }

        it "should read text payloads when the words got reordered" {
            let stego = embed_text("one two", "ab").unwrap();
            let words: Vec<&str> = stego.split(' ').collect();
            let reordered = format!("{} {}", words[1], words[0]);

            assert_eq!(extract_robust(&reordered).unwrap().secret, "ba");
        }

        it "should not take a text payload with a missing bit" {
            let text = format!("a{} b{}", byte("0110000"), byte("01100010"));

            assert_eq!(extract_robust(&text).unwrap().secret, "b");
        }
    }

    describe "extract_robust without a secret" {
        it "should ignore the variation selector of emoji" {
            assert!(matches!(
                extract_robust("Love this! ❤️ 🚀"),
                Err(SteganoError::NoSecretData)
            ));
        }

        it "should ignore markers without bits" {
            let text = format!("a{} b{}", MARKER_TEXT, MARKER_EMOJI);

            assert!(matches!(
                extract_robust(&text),
                Err(SteganoError::NoSecretData)
            ));
        }

        it "should report a corrupt burst as not found" {
            assert!(matches!(
                extract_robust(&burst("0101")),
                Err(SteganoError::NoSecretData)
            ));
        }
    }
}
