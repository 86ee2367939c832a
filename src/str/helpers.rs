/// The glue used when none is given.
pub const DEFAULT_GLUE: &str = " ";

/// Returns true if `subject` contains any of `searches`. Empty searches never match.
pub fn contains<I>(searches: I, subject: &str) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    searches.into_iter().any(|search| {
        let search = search.as_ref();
        !search.is_empty() && subject.contains(search)
    })
}

/// Returns true if `value` is exactly equal to any of `possibilities`. Case sensitive.
pub fn is<I>(possibilities: I, value: &str) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    possibilities.into_iter().any(|possibility| possibility.as_ref() == value)
}

/// Returns the number of characters in `value`, rather than the number of bytes.
pub fn length(value: &str) -> usize {
    value.chars().count()
}

/// Replaces occurrences of `search` in `subject` with `replace`.
///
/// The first occurrence is replaced repeatedly until none remain, so occurrences created by an
/// earlier replacement are replaced as well. If `replace` itself contains `search`, that would
/// never finish, so every occurrence in the original subject is replaced once instead. An empty
/// `search` leaves `subject` unchanged.
///
/// # Examples
/// ```
/// use support_lib::str::replace;
///
/// assert_eq!(replace("three", "four", "two plus two equals three"), "two plus two equals four");
/// assert_eq!(replace("aa", "a", "aaaa"), "a");
/// assert_eq!(replace("a", "aa", "a-a"), "aa-aa");
/// ```
pub fn replace(search: &str, replace: &str, subject: &str) -> String {
    if search.is_empty() {
        return subject.to_owned();
    }
    if replace.contains(search) {
        return subject.replace(search, replace);
    }

    let mut result = subject.to_owned();
    while let Some(position) = result.find(search) {
        result.replace_range(position..position + search.len(), replace);
    }
    result
}

/// Returns true if `subject` ends with `search`. Everything ends with the empty string.
pub fn ends_with(search: &str, subject: &str) -> bool {
    subject.ends_with(search)
}

/// Returns true if `subject` begins with `search`. Everything begins with the empty string.
pub fn begins_with(search: &str, subject: &str) -> bool {
    subject.starts_with(search)
}

/// Appends `append` to `subject`, separated by `glue`. If either is empty, `subject` is returned
/// as it is.
pub fn append(append: &str, subject: &str, glue: Option<&str>) -> String {
    if append.is_empty() || subject.is_empty() {
        return subject.to_owned();
    }
    [subject, append].join(glue.unwrap_or(DEFAULT_GLUE))
}

/// Prepends `prepend` to `subject`, separated by `glue`. If either is empty, `subject` is returned
/// as it is.
pub fn prepend(prepend: &str, subject: &str, glue: Option<&str>) -> String {
    if prepend.is_empty() || subject.is_empty() {
        return subject.to_owned();
    }
    [prepend, subject].join(glue.unwrap_or(DEFAULT_GLUE))
}

/// Joins `strings` with `glue`.
pub fn combine<I>(strings: I, glue: Option<&str>) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let glue = glue.unwrap_or(DEFAULT_GLUE);
    let mut result = String::new();
    for (i, string) in strings.into_iter().enumerate() {
        if i > 0 {
            result.push_str(glue);
        }
        result.push_str(string.as_ref());
    }
    result
}
