mod sentence;
mod standard;

pub use {sentence::Segmenter, standard::Standard};

use crate::token::Tokens;

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens;
}
