use super::Doc::{self, *};
use crate::bug;
use crate::infra::DocprintBug;
use std::sync::Arc;

/// Place `separator` between each pair of adjacent `elements`.
///
/// Returns `Empty` if there are no elements. The separator is shared between
/// every position it appears at, not copied.
pub fn join<A>(elements: impl IntoIterator<Item = Doc<A>>, separator: Doc<A>) -> Doc<A> {
    let separator = Arc::new(separator);
    let mut elements = elements.into_iter();
    let Some(first) = elements.next() else {
        return Empty;
    };
    elements.fold(first, |acc, elem| {
        let sep_elem = Concat(separator.clone(), Arc::new(elem));
        Concat(Arc::new(acc), Arc::new(sep_elem))
    })
}

/// What `doc` looks like with every newline replaced by a space and every
/// choice resolved to its wide option.
///
/// Sub-docs that contain neither a newline nor a choice are shared with
/// `doc`, not copied.
pub fn flatten<A: Clone>(doc: &Doc<A>) -> Doc<A> {
    match doc {
        Empty | Text(_, _) => doc.clone(),
        Newline => space(),
        Choice(wide, _) => {
            let flat = flatten_shared(wide);
            Arc::try_unwrap(flat).unwrap_or_else(|flat| (*flat).clone())
        }
        Concat(left, right) => Concat(flatten_shared(left), flatten_shared(right)),
        Indent(inner) => Indent(flatten_shared(inner)),
        Hang(inner) => Hang(flatten_shared(inner)),
    }
}

/// Display `doc` flattened if that fits on the line, otherwise as is.
pub fn group<A: Clone>(doc: Doc<A>) -> Doc<A> {
    let flat = flatten(&doc);
    Doc::choice(flat, doc)
}

fn space<A>() -> Doc<A> {
    Text(" ".to_owned(), None)
}

enum Step<'d, A> {
    /// Flatten this doc and push the result.
    Visit(&'d Arc<Doc<A>>),
    /// Pop the flattened children of this doc and push it rebuilt from them.
    Rebuild(&'d Arc<Doc<A>>),
}

/// Like [`flatten`], but returns `doc` itself when flattening would not
/// change it.
fn flatten_shared<A: Clone>(doc: &Arc<Doc<A>>) -> Arc<Doc<A>> {
    use Step::*;

    let mut steps = vec![Visit(doc)];
    let mut flattened: Vec<Arc<Doc<A>>> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Visit(doc) => match &**doc {
                Empty | Text(_, _) => flattened.push(doc.clone()),
                Newline => flattened.push(Arc::new(space())),
                Choice(wide, _) => steps.push(Visit(wide)),
                Concat(left, right) => {
                    steps.push(Rebuild(doc));
                    steps.push(Visit(right));
                    steps.push(Visit(left));
                }
                Indent(inner) | Hang(inner) => {
                    steps.push(Rebuild(doc));
                    steps.push(Visit(inner));
                }
            },
            Rebuild(doc) => {
                let rebuilt = match &**doc {
                    Concat(left, right) => {
                        let flat_right = flattened.pop().bug();
                        let flat_left = flattened.pop().bug();
                        if Arc::ptr_eq(&flat_left, left) && Arc::ptr_eq(&flat_right, right) {
                            doc.clone()
                        } else {
                            Arc::new(Concat(flat_left, flat_right))
                        }
                    }
                    Indent(inner) | Hang(inner) => {
                        let flat_inner = flattened.pop().bug();
                        if Arc::ptr_eq(&flat_inner, inner) {
                            doc.clone()
                        } else if let Indent(_) = &**doc {
                            Arc::new(Indent(flat_inner))
                        } else {
                            Arc::new(Hang(flat_inner))
                        }
                    }
                    Empty | Text(_, _) | Newline | Choice(_, _) => {
                        bug!("flatten: nothing to rebuild")
                    }
                };
                flattened.push(rebuilt);
            }
        }
    }
    flattened.pop().bug()
}

#[cfg(test)]
mod tests {
    use super::*;

    type D = Doc<char>;

    fn txt(s: &str) -> D {
        Doc::text(s)
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join(Vec::new(), txt(", ")), Empty);
    }

    #[test]
    fn test_join_lone() {
        assert_eq!(join(vec![txt("x")], txt(", ")), txt("x"));
    }

    #[test]
    fn test_join_many() {
        let doc = join(vec![txt("x"), txt("y"), txt("z")], txt(", "));
        let expected = txt("x") + (txt(", ") + txt("y")) + (txt(", ") + txt("z"));
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_join_shares_separator() {
        let doc = join(vec![txt("x"), txt("y"), txt("z")], txt(", "));
        let Concat(left, last) = &doc else {
            panic!("expected Concat");
        };
        let Concat(_, middle) = &**left else {
            panic!("expected Concat");
        };
        match (&**middle, &**last) {
            (Concat(sep1, _), Concat(sep2, _)) => assert!(Arc::ptr_eq(sep1, sep2)),
            _ => panic!("expected separators"),
        }
    }

    #[test]
    fn test_flatten_newline() {
        let doc = txt("a") + Doc::newline() + txt("b");
        assert_eq!(flatten(&doc), txt("a") + txt(" ") + txt("b"));
        assert_eq!(flatten(&D::newline()), txt(" "));
    }

    #[test]
    fn test_flatten_choice() {
        let doc = Doc::choice(txt("wide") + Doc::newline(), txt("narrow"));
        assert_eq!(flatten(&doc), txt("wide") + txt(" "));
    }

    #[test]
    fn test_flatten_keeps_annotations_and_structure() {
        let doc = Doc::indent(Doc::styled("a", 'k') + Doc::hang(Doc::newline() + txt("b")));
        let expected = Doc::indent(Doc::styled("a", 'k') + Doc::hang(txt(" ") + txt("b")));
        assert_eq!(flatten(&doc), expected);
    }

    #[test]
    fn test_flatten_idempotent() {
        let doc = group(txt("a") + Doc::line() + Doc::indent(Doc::newline() + txt("b")));
        let once = flatten(&doc);
        assert_eq!(flatten(&once), once);
    }

    #[test]
    fn test_flatten_shares_flat_subdocs() {
        let flat_part = Arc::new(txt("a") + txt("b"));
        let doc = Concat(flat_part.clone(), Arc::new(Doc::newline()));
        let flat = flatten(&doc);
        let Concat(flat_left, flat_right) = &flat else {
            panic!("expected Concat");
        };
        assert!(Arc::ptr_eq(flat_left, &flat_part));
        assert_eq!(**flat_right, txt(" "));
    }

    #[test]
    fn test_flatten_deep_doc() {
        let doc = join((0..200_000).map(|_| txt("x")), Doc::newline());
        let flat = flatten(&doc);
        let Concat(_, last) = &flat else {
            panic!("expected Concat");
        };
        assert_eq!(**last, txt(" ") + txt("x"));
        assert_eq!(flatten(&flat), flat);

        let nested = (0..200_000).fold(txt("x"), |doc, _| Doc::hang(Doc::indent(doc)));
        let flat = flatten(&nested);
        assert_eq!(flat, nested);
    }

    #[test]
    fn test_group() {
        let doc = txt("a") + Doc::newline() + txt("b");
        assert_eq!(
            group(doc.clone()),
            Doc::choice(txt("a") + txt(" ") + txt("b"), doc)
        );
    }
}
