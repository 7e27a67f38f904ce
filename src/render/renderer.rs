use super::fragment::Fragment;
use crate::doc::Doc::{self, *};
use crate::infra::DocprintBug;
use crate::log;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// An entry on the work stack: a doc still to be displayed, and the
/// indentation level to display it at.
type Entry<'d, A> = (usize, &'d Doc<A>);

/// A lazy iterator over the [`Fragment`]s of a rendered doc. Construct with
/// [`render`](crate::render) or [`render_with`](crate::render_with).
///
/// Each `Choice` is resolved when it is reached: the wide option is taken if
/// the first line of everything that would be displayed after choosing it
/// fits within the width, and the narrow option otherwise.
pub struct Render<'d, A> {
    width: usize,
    tab_width: usize,
    /// Number of chars displayed since the last newline.
    col: usize,
    /// INVARIANT: the top of the stack is displayed first.
    stack: Vec<Entry<'d, A>>,
    /// How the next few choices will be resolved, as found by the last
    /// successful fits check. `true` means wide.
    decided: VecDeque<bool>,
}

impl<'d, A> Render<'d, A> {
    pub(super) fn new(doc: &'d Doc<A>, width: usize, tab_width: usize) -> Render<'d, A> {
        Render {
            width,
            tab_width,
            col: 0,
            stack: vec![(0, doc)],
            decided: VecDeque::new(),
        }
    }

    /// The column that the next fragment will start at.
    pub fn column(&self) -> usize {
        self.col
    }

    fn choose(&mut self, indent: usize, wide: &'d Doc<A>) -> bool {
        if let Some(wide_fits) = self.decided.pop_front() {
            return wide_fits;
        }
        match Fits::new(self.width, self.tab_width, &self.stack).check(self.col, (indent, wide)) {
            Some(decisions) => {
                self.decided = decisions;
                true
            }
            None => false,
        }
    }
}

impl<'d, A> Iterator for Render<'d, A> {
    type Item = Fragment<'d, A>;

    fn next(&mut self) -> Option<Fragment<'d, A>> {
        while let Some((indent, doc)) = self.stack.pop() {
            match doc {
                Empty => (),
                Text(text, annotation) => {
                    self.col += text.chars().count();
                    return Some(Fragment::new(text, annotation.as_ref()));
                }
                Concat(left, right) => {
                    self.stack.push((indent, &**right));
                    self.stack.push((indent, &**left));
                }
                Newline => {
                    self.col = indent;
                    return Some(Fragment::newline(indent));
                }
                Indent(inner) => self.stack.push((indent + self.tab_width, &**inner)),
                Hang(inner) => self.stack.push((self.col, &**inner)),
                Choice(wide, narrow) => {
                    let fits = self.choose(indent, wide);
                    log!(
                        Trace,
                        "Choice at column {}: {}",
                        self.col,
                        if fits { "wide" } else { "narrow" }
                    );
                    let chosen = if fits { wide } else { narrow };
                    self.stack.push((indent, &**chosen));
                }
            }
        }
        None
    }
}

impl<'d, A> FusedIterator for Render<'d, A> {}

/// Where a fits check is up to. `Copy`, so that saving it at a choice is
/// constant time.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    col: usize,
    /// Index into [`Fits::pushed`] of the next entry to display, if any.
    top: Option<usize>,
    /// Entries `rest[..rest_len]` are displayed after everything pushed.
    rest_len: usize,
}

/// A nested choice met during a fits check, whose wide option is being tried.
struct ChoicePoint<'d, A> {
    cursor: Cursor,
    narrow: Entry<'d, A>,
    /// Length of [`Fits::decisions`] before this choice was made.
    num_decisions: usize,
}

/// Simulates displaying the rest of a render, up to its first newline, to see
/// whether that line fits.
///
/// Reads the renderer's stack through `rest` but never modifies it. Entries
/// produced during the simulation are kept in `pushed` as linked stacks that
/// share their tails, so a [`Cursor`] is a complete snapshot of the
/// simulation. A nested choice is tried wide first. If the line then
/// overflows, the simulation returns to the most recent choice point and
/// tries its narrow option instead.
struct Fits<'s, 'd, A> {
    width: usize,
    tab_width: usize,
    rest: &'s [Entry<'d, A>],
    /// Each entry with the index of the entry below it.
    pushed: Vec<(Entry<'d, A>, Option<usize>)>,
    choice_points: Vec<ChoicePoint<'d, A>>,
    /// How each nested choice on the current path was resolved.
    decisions: VecDeque<bool>,
}

impl<'s, 'd, A> Fits<'s, 'd, A> {
    fn new(width: usize, tab_width: usize, rest: &'s [Entry<'d, A>]) -> Fits<'s, 'd, A> {
        Fits {
            width,
            tab_width,
            rest,
            pushed: Vec::new(),
            choice_points: Vec::new(),
            decisions: VecDeque::new(),
        }
    }

    /// Whether displaying `first` at column `col`, followed by `rest`, fits on
    /// the current line. If so, returns how each choice met before the end
    /// of that line was resolved. The renderer will meet those same choices,
    /// in the same state, next.
    fn check(mut self, col: usize, first: Entry<'d, A>) -> Option<VecDeque<bool>> {
        let mut cursor = Cursor {
            col,
            top: None,
            rest_len: self.rest.len(),
        };
        self.push(&mut cursor, first);
        loop {
            if cursor.col > self.width {
                let point = self.choice_points.pop()?;
                cursor = point.cursor;
                self.decisions.truncate(point.num_decisions);
                self.decisions.push_back(false);
                self.push(&mut cursor, point.narrow);
                continue;
            }
            let Some((indent, doc)) = self.pop(&mut cursor) else {
                return Some(self.decisions);
            };
            match doc {
                Empty => (),
                Text(text, _) => cursor.col += text.chars().count(),
                Concat(left, right) => {
                    self.push(&mut cursor, (indent, &**right));
                    self.push(&mut cursor, (indent, &**left));
                }
                Newline => return Some(self.decisions),
                Indent(inner) => self.push(&mut cursor, (indent + self.tab_width, &**inner)),
                Hang(inner) => {
                    let col = cursor.col;
                    self.push(&mut cursor, (col, &**inner));
                }
                Choice(wide, narrow) => {
                    self.choice_points.push(ChoicePoint {
                        cursor,
                        narrow: (indent, &**narrow),
                        num_decisions: self.decisions.len(),
                    });
                    self.decisions.push_back(true);
                    self.push(&mut cursor, (indent, &**wide));
                }
            }
        }
    }

    fn push(&mut self, cursor: &mut Cursor, entry: Entry<'d, A>) {
        self.pushed.push((entry, cursor.top));
        cursor.top = Some(self.pushed.len() - 1);
    }

    fn pop(&self, cursor: &mut Cursor) -> Option<Entry<'d, A>> {
        match cursor.top {
            Some(index) => {
                let (entry, below) = *self.pushed.get(index).bug();
                cursor.top = below;
                Some(entry)
            }
            None => {
                cursor.rest_len = cursor.rest_len.checked_sub(1)?;
                Some(*self.rest.get(cursor.rest_len).bug())
            }
        }
    }
}
