/// Returns a canonical version of `p`, eliminating `.` and `..` elements.
///
/// The following rules are applied:
/// 1. Replace multiple slashes with a single slash.
/// 2. Eliminate each `.` path name element (the current directory).
/// 3. Eliminate each inner `..` path name element (the parent directory)
///    along with the non-`..` element that precedes it.
/// 4. Eliminate `..` elements that begin a rooted path.
///
/// A trailing slash is kept, and a trailing `.` element becomes one. If the
/// result is empty, `/` is returned.
pub(crate) fn clean_path(p: &str) -> String {
    let mut elements: Vec<&str> = Vec::new();
    let mut last = "";

    for element in p.split('/') {
        match element {
            "" | "." => {}
            ".." => {
                elements.pop();
            }
            _ => elements.push(element),
        }
        last = element;
    }

    let trailing = last == "." || (p.len() > 1 && p.ends_with('/'));

    let mut cleaned = String::with_capacity(p.len() + 1);
    for element in &elements {
        cleaned.push('/');
        cleaned.push_str(element);
    }

    if cleaned.is_empty() || trailing {
        cleaned.push('/');
    }

    cleaned
}

/// Joins a group's base path with a relative pattern.
///
/// The result is cleaned, but keeps the trailing slash of `relative`.
pub(crate) fn join_paths(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_owned();
    }

    let joined = clean_path(&format!("{}/{}", base, relative));
    if relative.ends_with('/') && !joined.ends_with('/') {
        return joined + "/";
    }

    joined
}
