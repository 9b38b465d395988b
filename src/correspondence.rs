/// Sentinel returned by [`find_line_index`] when no source line matches
pub const NOT_FOUND: isize = -1;

/// Position of the first source line whose text equals `line_text` exactly.
///
/// No trimming or normalisation is applied. A miss is an ordinary outcome:
/// the derived line may have been collapsed with an identical one or edited
/// since the last scan.
pub fn find_line_in_document<S: AsRef<str>>(document: &[S], line_text: &str) -> Option<usize> {
    document.iter().position(|line| line.as_ref() == line_text)
}

/// Same as [`find_line_in_document`], with misses reported as [`NOT_FOUND`]
pub fn find_line_index<S: AsRef<str>>(document: &[S], line_text: &str) -> isize {
    find_line_in_document(document, line_text)
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(NOT_FOUND)
}
