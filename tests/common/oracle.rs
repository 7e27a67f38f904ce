//! A slow but obviously-correct renderer, to test the real one against.
//!
//! At every choice it copies the whole render state, renders the wide option
//! and everything after it to completion, and keeps that output if its first
//! line fits. Otherwise it restores the copy and continues with the narrow
//! option. This takes exponential time in the number of choices.

use docprint::{Doc, TAB_WIDTH};

#[derive(Clone)]
struct OracleState<'d, A> {
    width: isize,
    col: usize,
    stack: Vec<(usize, &'d Doc<A>)>,
}

pub fn oracle_render<A: Clone>(doc: &Doc<A>, width: usize) -> Vec<(String, Option<A>)> {
    let state = OracleState {
        width: width as isize,
        col: 0,
        stack: vec![(0, doc)],
    };
    state.finish()
}

impl<'d, A: Clone> OracleState<'d, A> {
    fn finish(mut self) -> Vec<(String, Option<A>)> {
        use Doc::*;

        let mut output = Vec::new();
        while let Some((indent, doc)) = self.stack.pop() {
            match doc {
                Empty => (),
                Text(text, ann) => {
                    self.col += text.chars().count();
                    output.push((text.clone(), ann.clone()));
                }
                Concat(left, right) => {
                    self.stack.push((indent, &**right));
                    self.stack.push((indent, &**left));
                }
                Newline => {
                    let mut text = "\n".to_owned();
                    text.push_str(&" ".repeat(indent));
                    output.push((text, None));
                    self.col = indent;
                }
                Indent(inner) => self.stack.push((indent + TAB_WIDTH, &**inner)),
                Hang(inner) => self.stack.push((self.col, &**inner)),
                Choice(wide, narrow) => {
                    let snapshot = self.clone();
                    let mut attempt = self.clone();
                    attempt.stack.push((indent, &**wide));
                    let candidate = attempt.finish();
                    let candidate_text: String =
                        candidate.iter().map(|(text, _)| text.as_str()).collect();
                    let first_line = candidate_text.split('\n').next().unwrap_or("");
                    if first_line.chars().count() as isize <= self.width - self.col as isize {
                        output.extend(candidate);
                        return output;
                    }
                    self = snapshot;
                    self.stack.push((indent, &**narrow));
                }
            }
        }
        output
    }
}
