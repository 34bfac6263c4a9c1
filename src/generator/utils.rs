use std::{io, path::Path};

use crate::error::ScaffoldError;

pub(crate) fn title_spaced<S: AsRef<str>>(words: &[S]) -> String {
    join_words(words, " ")
}

pub(crate) fn title_dashed<S: AsRef<str>>(words: &[S]) -> String {
    join_words(words, "-")
}

fn join_words<S: AsRef<str>>(words: &[S], sep: &str) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(sep)
}

pub(super) fn classify_io_error(path: &Path, source: io::Error) -> ScaffoldError {
    match source.kind() {
        io::ErrorKind::AlreadyExists => ScaffoldError::FileExists(path.to_path_buf()),
        _ => ScaffoldError::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_words_both_ways() {
        let words = vec!["Hello".to_string(), "big".to_string(), "World".to_string()];
        assert_eq!(title_spaced(&words), "Hello big World");
        assert_eq!(title_dashed(&words), "Hello-big-World");
    }

    #[test]
    fn single_word_has_no_separator() {
        assert_eq!(title_spaced(&["solo"]), "solo");
        assert_eq!(title_dashed(&["solo"]), "solo");
    }

    #[test]
    fn words_with_inner_spaces_are_not_split() {
        assert_eq!(title_dashed(&["a b", "c"]), "a b-c");
    }

    #[test]
    fn already_exists_maps_to_file_exists() {
        let err = classify_io_error(
            Path::new("x.md"),
            io::Error::from(io::ErrorKind::AlreadyExists),
        );
        assert!(matches!(err, ScaffoldError::FileExists(p) if p == Path::new("x.md")));

        let err = classify_io_error(
            Path::new("x.md"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
