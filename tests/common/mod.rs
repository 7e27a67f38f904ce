#![allow(dead_code)]

mod oracle;
mod random_doc;

pub use oracle::oracle_render;
pub use random_doc::{random_doc, random_flat_doc, random_words, Ann};

use docprint::{plain_text, render, Doc};

/// If the strings aren't equal, print them with better formatting than the assert_eq!() macro and then panic.
pub fn assert_strings_eq(left: &str, right: &str) {
    if left != right {
        eprintln!("left string:\n{}", left);
        eprintln!("\nright string:\n{}", right);
        panic!("strings are not equal");
    }
}

pub fn print<A>(doc: &Doc<A>, width: usize) -> String {
    plain_text(render(doc, width))
}

pub fn num_newlines(text: &str) -> usize {
    text.chars().filter(|ch| *ch == '\n').count()
}
