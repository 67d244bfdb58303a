//! Adapter over a byte-pair-encoding vocabulary library. The only contract
//! consumed by the rest of the pipeline is `count(text, encoding)`.

use crate::constants::TOKENIZER_ENCODINGS;
use crate::errors::Error;
use tiktoken_rs::CoreBPE;

fn load_bpe(encoding: &str) -> Result<CoreBPE, ()> {
    match encoding {
        "cl100k_base" => tiktoken_rs::cl100k_base().map_err(|_| ()),
        "p50k_base" => tiktoken_rs::p50k_base().map_err(|_| ()),
        "p50k_edit" => tiktoken_rs::p50k_edit().map_err(|_| ()),
        "r50k_base" => tiktoken_rs::r50k_base().map_err(|_| ()),
        "o200k_base" => tiktoken_rs::o200k_base().map_err(|_| ()),
        _ => Err(()),
    }
}

/// Counts tokens in `text` under `encoding`. `encoding` must be one of
/// [`TOKENIZER_ENCODINGS`]; an unrecognized or unloadable vocabulary yields
/// [`Error::TokenizerUnavailable`], which the caller treats as non-fatal.
pub fn count(text: &str, encoding: &str) -> Result<usize, Error> {
    if !TOKENIZER_ENCODINGS.contains(&encoding) {
        return Err(Error::TokenizerUnavailable(encoding.to_string()));
    }
    let bpe = load_bpe(encoding).map_err(|_| Error::TokenizerUnavailable(encoding.to_string()))?;
    Ok(bpe.encode_with_special_tokens(text).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_tokens_for_known_encoding() {
        let n = count("hello world", "cl100k_base").unwrap();
        assert!(n > 0);
    }

    #[test]
    fn unknown_encoding_reports_tokenizer_unavailable() {
        let err = count("hello", "made_up_encoding").unwrap_err();
        assert!(matches!(err, Error::TokenizerUnavailable(_)));
    }

    #[test]
    fn tokens_only_toggle_does_not_change_the_count() {
        let a = count("fn main() {}", "cl100k_base").unwrap();
        let b = count("fn main() {}", "cl100k_base").unwrap();
        assert_eq!(a, b);
    }
}
