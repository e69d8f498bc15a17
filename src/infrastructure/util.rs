// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Characters dropped before slugifying so that `René's` reads `renes`
/// rather than `rene-s`.
const DROPPED: &[char] = &['\'', '"', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '`'];

/// Characters read as a word before slugifying.
const SPELLED: &[(char, &str)] = &[('&', " and "), ('@', " at ")];

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut prepared = String::with_capacity(input.len());
        for c in input.chars() {
            if DROPPED.contains(&c) {
                continue;
            }
            match SPELLED.iter().find(|(from, _)| *from == c) {
                Some((_, word)) => prepared.push_str(word),
                None => prepared.push(c),
            }
        }
        slugify(prepared)
    }
}
