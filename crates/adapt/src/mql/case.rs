/// Convert a camelCase name to snake_case.
///
/// An `_` is inserted before an uppercase letter only when the previous
/// character is a lowercase letter or a digit, so names that already use
/// separators or uppercase runs are only case-folded.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_uppercase() {
            if let Some(p) = prev {
                if p.is_lowercase() || p.is_ascii_digit() {
                    out.push('_');
                }
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}
