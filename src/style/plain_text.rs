use crate::render::Fragment;

/// Concatenate the text of each fragment, ignoring annotations.
pub fn plain_text<'d, A: 'd>(fragments: impl IntoIterator<Item = Fragment<'d, A>>) -> String {
    let mut output = String::new();
    for fragment in fragments {
        output.push_str(fragment.text());
    }
    output
}
