//! Identifier casing with Go-style initialism handling.

/// Initialisms rendered fully upper-case in Go-style type names.
///
/// Membership is tested against the upper-cased form of a whole word, never
/// against substrings.
// https://github.com/golang/lint/blob/master/lint.go
pub const GO_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Split a string into words.
///
/// Word boundaries are non-alphanumeric characters (dropped), lower-to-upper
/// transitions, letter/digit transitions, and the last letter of an uppercase
/// run when a lowercased word follows ("HTMLParser" -> "HTML", "Parser").
/// Apostrophes vanish rather than separate.
fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().filter(|c| *c != '\'' && *c != '\u{2019}').collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            let prev = chars[i - 1];
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || prev.is_numeric() != c.is_numeric()
                || acronym_end;
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Upper-case the first letter of a word, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to camelCase (e.g., "user_id" -> "userId")
pub fn to_camel_case(input: &str) -> String {
    words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { capitalize(&lower) }
        })
        .collect()
}

/// Convert a string to start case (e.g., "userId" -> "User Id")
pub fn to_start_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a string to PascalCase, rendering well-known initialisms fully
/// upper-case (e.g., "user_id" -> "UserID", "http_server" -> "HTTPServer").
///
/// The input is first collapsed to camelCase, then start-cased, and each
/// resulting word whose upper-cased form appears in [`GO_INITIALISMS`] is
/// replaced by that form. Total over all inputs; empty in, empty out.
pub fn to_go_pascal_case(input: &str) -> String {
    to_start_case(&to_camel_case(input))
        .split(' ')
        .map(|word| {
            let upper = word.to_uppercase();
            if GO_INITIALISMS.contains(&upper.as_str()) {
                upper
            } else {
                word.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_id"), "userId");
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case("Foo Bar"), "fooBar");
        assert_eq!(to_camel_case("parseJSONBody"), "parseJsonBody");
        assert_eq!(to_camel_case("HTMLParser"), "htmlParser");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_start_case() {
        assert_eq!(to_start_case("fooBar"), "Foo Bar");
        assert_eq!(to_start_case("http_server"), "Http Server");
        assert_eq!(to_start_case("HTMLParser"), "HTML Parser");
        assert_eq!(to_start_case(""), "");
    }

    #[test]
    fn test_to_go_pascal_case() {
        assert_eq!(to_go_pascal_case(""), "");
        assert_eq!(to_go_pascal_case("user_id"), "UserID");
        assert_eq!(to_go_pascal_case("http_server"), "HTTPServer");
        assert_eq!(to_go_pascal_case("parseJSONBody"), "ParseJSONBody");
        assert_eq!(to_go_pascal_case("vertex type"), "VertexType");
        assert_eq!(to_go_pascal_case("vertex"), "Vertex");
        assert_eq!(to_go_pascal_case("uuid"), "UUID");
        assert_eq!(to_go_pascal_case("api_key"), "APIKey");
    }

    #[test]
    fn test_whole_word_match_only() {
        // "IDS" and "GUIDANCE" are not table entries; no substring rewriting.
        assert_eq!(to_go_pascal_case("ids"), "Ids");
        assert_eq!(to_go_pascal_case("guidance"), "Guidance");
    }
}
